//! Forest and interaction generators shared by the property tests.

use proptest::prelude::*;
use proptest::sample::Index;

use permtree::domain::services::collect_all_keys;
use permtree::{TreeAction, TreeNode};

/// Shape of a subtree; keys are assigned afterwards so they stay unique
#[derive(Debug, Clone)]
struct Shape {
    disabled: bool,
    children: Vec<Shape>,
}

/// Roughly one node in five is disabled
fn disabled() -> impl Strategy<Value = bool> {
    prop::bool::weighted(0.2)
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = disabled().prop_map(|disabled| Shape {
        disabled,
        children: Vec::new(),
    });
    leaf.prop_recursive(4, 40, 4, |inner| {
        (disabled(), prop::collection::vec(inner, 0..4))
            .prop_map(|(disabled, children)| Shape { disabled, children })
    })
}

fn build(shape: &Shape, next: &mut usize) -> TreeNode {
    let key = format!("n{}", *next);
    *next += 1;
    let children = shape.children.iter().map(|child| build(child, next)).collect();
    let node = TreeNode::new(key.clone(), key.to_uppercase()).with_children(children);
    if shape.disabled {
        node.with_disabled()
    } else {
        node
    }
}

/// A forest of one to three roots with unique keys
pub fn forest() -> impl Strategy<Value = Vec<TreeNode>> {
    prop::collection::vec(shape(), 1..4).prop_map(|shapes| {
        let mut next = 0;
        shapes.iter().map(|shape| build(shape, &mut next)).collect()
    })
}

/// Every key of the forest, sorted
pub fn keys_of(forest: &[TreeNode]) -> Vec<String> {
    collect_all_keys(forest).to_vec()
}

/// Pick a key with a sampled index
pub fn pick(forest: &[TreeNode], index: &Index) -> String {
    let keys = keys_of(forest);
    keys[index.index(keys.len())].clone()
}

/// Interaction kind, bound to a key with `bind`
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    Expand,
    Check,
    Select,
}

pub fn kinds() -> impl Strategy<Value = Vec<(Kind, Index)>> {
    let kind = prop_oneof![Just(Kind::Expand), Just(Kind::Check), Just(Kind::Select)];
    prop::collection::vec((kind, any::<Index>()), 0..16)
}

pub fn bind(forest: &[TreeNode], kind: Kind, index: &Index) -> TreeAction {
    let key = pick(forest, index);
    match kind {
        Kind::Expand => TreeAction::ToggleExpand(key),
        Kind::Check => TreeAction::ToggleCheck(key),
        Kind::Select => TreeAction::Select(key),
    }
}
