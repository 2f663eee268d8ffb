//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `events/` - Event sink implementations (NDJSON)
//! - `payload` - Menu and staff payloads exported from the admin backend
//! - `session` - Key-set state persisted between runs

pub mod events;
pub mod payload;
pub mod session;

// Re-export for convenience
pub use events::JsonEventSink;
pub use payload::{load_forest, load_menus, load_staff, load_valid_menus};
pub use session::SessionState;
