//! Tree View
//!
//! The tree component: owns a forest plus the expanded, checked and selected
//! key sets, and turns interactions into state transitions and events.
//!
//! # Module Structure
//!
//! - `props` - construction-time configuration
//! - `axis` - controlled/uncontrolled ownership of one key set
//! - `action` - interactions addressed to a node
//! - `row` - flattened visible rows for renderers
//! - `view` - the `TreeView` itself

mod action;
mod axis;
mod props;
mod row;
mod view;


pub use action::TreeAction;
pub use axis::StateAxis;
pub use props::TreeProps;
pub use row::TreeRow;
pub use view::{TreeFeatures, TreeView};
