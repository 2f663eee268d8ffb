//! Domain Layer
//!
//! The core of permtree - pure tree logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Tree nodes and the console payloads (menus, staff)
//! - `value_objects/` - Key sets, check state, interaction modes
//! - `services/` - Traversal, check propagation, selection, expansion, mutation
//! - `ports/` - Event sink interface for interaction callbacks
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or terminal
//! 2. **Pure Functions** - Services are stateless and return new values
//! 3. **Ports & Adapters** - Callbacks go through the `TreeEventSink` port

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
