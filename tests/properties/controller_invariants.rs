//! Property tests for the input controller state machine.

use proptest::prelude::*;

use treepick::ui::widgets::selection::paginate;
use treepick::{InputController, SelectionMode};

use crate::strategies::{action, build_tree, tree_shape};

fn mode() -> impl Strategy<Value = SelectionMode> {
    prop_oneof![Just(SelectionMode::Leaf), Just(SelectionMode::LeafAndGroup)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after every action the highlight indexes a visible row and
    /// the rendered window contains it.
    #[test]
    fn property_highlight_stays_in_bounds(
        shape in tree_shape(),
        mode in mode(),
        page_size in 3usize..12,
        actions in proptest::collection::vec(action(), 0..60),
    ) {
        let mut controller = InputController::new(build_tree(&shape), mode, page_size);

        for a in actions {
            controller.handle_action(a);
            let rows = controller.flattened_rows().len();
            let cursor = controller.cursor_position();

            prop_assert!(rows > 0);
            prop_assert!(cursor < rows);
            prop_assert!(paginate(rows, page_size, cursor).contains(cursor));
        }
    }

    /// PROPERTY: Leaf mode never confirms a group; LeafAndGroup confirms
    /// whatever is highlighted.
    #[test]
    fn property_confirm_respects_mode(
        shape in tree_shape(),
        mode in mode(),
        actions in proptest::collection::vec(action(), 0..30),
    ) {
        let mut controller = InputController::new(build_tree(&shape), mode, 5);

        for a in actions {
            controller.handle_action(a);
        }
        let highlighted = controller.highlighted().unwrap();
        let state = controller.handle_action(treepick::SelectAction::Confirm);

        if let treepick::ui::widgets::selection::ControllerState::Confirmed(id) = state {
            if mode == SelectionMode::Leaf {
                prop_assert!(!controller.tree().has_children(id));
            }
        } else {
            prop_assert_eq!(mode, SelectionMode::Leaf);
            prop_assert!(controller.tree().has_children(highlighted));
        }
    }
}
