//! Shared generators for tree-shaped input.

use proptest::prelude::*;
use proptest::sample::Index;

use treepick::{ChoiceTree, NodeId, SelectAction};

/// Parent choices for nodes 1.., as indices into the nodes added before.
/// `None` puts the node at the top level. Node 0 is always top level.
pub fn tree_shape() -> impl Strategy<Value = Vec<Option<Index>>> {
    proptest::collection::vec(proptest::option::weighted(0.6, any::<Index>()), 0..40)
}

pub fn build_tree(shape: &[Option<Index>]) -> ChoiceTree<usize> {
    let mut tree = ChoiceTree::new();
    let mut ids: Vec<NodeId> = vec![tree.add_choice(0).id()];

    for (i, parent) in shape.iter().enumerate() {
        let value = i + 1;
        let id = match parent {
            Some(index) => {
                let parent = ids[index.index(ids.len())];
                tree.add_child(parent, value).expect("parent exists")
            }
            None => tree.add_choice(value).id(),
        };
        ids.push(id);
    }

    tree
}

pub fn action() -> impl Strategy<Value = SelectAction> {
    proptest::sample::select(vec![
        SelectAction::Up,
        SelectAction::Down,
        SelectAction::PageUp,
        SelectAction::PageDown,
        SelectAction::Home,
        SelectAction::End,
        SelectAction::Toggle,
        SelectAction::Collapse,
        SelectAction::Confirm,
    ])
}
