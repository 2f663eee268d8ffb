//! Domain Value Objects
//!
//! Immutable value types that represent tree state concepts.

mod check_state;
mod key_set;
mod modes;

pub use check_state::CheckState;
pub use key_set::KeySet;
pub use modes::{CheckMode, SelectMode};
