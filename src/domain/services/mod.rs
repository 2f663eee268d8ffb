//! Domain Services
//!
//! Stateless tree algorithms. Every function takes the forest and the
//! current key sets by reference and returns new values.

pub mod check_propagation;
pub mod expansion;
pub mod mutation;
pub mod selection;
pub mod traversal;

pub use check_propagation::{
    check_all, check_none, check_state, is_consistent, reconcile_checked, toggle_check,
};
pub use expansion::{expand_all, toggle_expand};
pub use mutation::{cascade_delete, insert_child, prune_keys, remove_node, CascadeDelete};
pub use selection::{select_node, SelectOutcome};
pub use traversal::{
    ancestor_path, collect_all_keys, collect_descendant_keys, collect_expandable_keys, count_nodes,
    find_node, node_depth, subtree_keys, visit,
};
