//! Property tests for tree flattening.

use proptest::prelude::*;

use crate::strategies::{build_tree, tree_shape};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: flattening the same tree twice yields the same rows.
    #[test]
    fn property_flatten_is_deterministic(shape in tree_shape()) {
        let tree = build_tree(&shape);
        prop_assert_eq!(tree.flatten(), tree.flatten());
    }

    /// PROPERTY: a fully expanded tree shows every node once, each child
    /// after its parent and one level deeper.
    #[test]
    fn property_expanded_tree_lists_every_node(shape in tree_shape()) {
        let tree = build_tree(&shape);
        let rows = tree.flatten();
        prop_assert_eq!(rows.len(), tree.len());

        for (pos, row) in rows.iter().enumerate() {
            match tree.parent(row.id) {
                None => prop_assert_eq!(row.depth, 0),
                Some(parent) => {
                    let parent_pos = rows.iter().position(|r| r.id == parent).unwrap();
                    prop_assert!(parent_pos < pos);
                    prop_assert_eq!(rows[parent_pos].depth + 1, row.depth);
                }
            }
        }
    }

    /// PROPERTY: toggling a group twice restores the flattened sequence.
    #[test]
    fn property_toggle_twice_is_identity(shape in tree_shape(), pick in any::<prop::sample::Index>()) {
        let mut tree = build_tree(&shape);
        let groups: Vec<_> = tree
            .flatten()
            .into_iter()
            .map(|r| r.id)
            .filter(|&id| tree.has_children(id))
            .collect();
        prop_assume!(!groups.is_empty());

        let group = groups[pick.index(groups.len())];
        let before = tree.flatten();
        tree.toggle_expanded(group);
        prop_assert!(tree.flatten().len() < before.len());
        tree.toggle_expanded(group);
        prop_assert_eq!(tree.flatten(), before);
    }
}
