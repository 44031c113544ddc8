//! Property-based tests for the style tree using proptest.

use colortree::{Axis, Settings, StyleError, StyleNode, StyleValue, RESET};

const SGR_START: &str = "\u{1b}[";
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn axis_strategy() -> impl Strategy<Value = Axis> {
    prop::sample::select(Axis::ALL.to_vec())
}

fn axis_and_index() -> impl Strategy<Value = (Axis, usize)> {
    axis_strategy().prop_flat_map(|axis| (Just(axis), 0..axis.names().len()))
}

fn read_back(node: &StyleNode, axis: Axis) -> Option<u8> {
    match axis {
        Axis::Effect => Some(node.effect()),
        Axis::Fore => Some(node.fore()),
        Axis::Back => node.back(),
    }
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Setting an attribute by name reads back as the name's list index.
    #[test]
    fn name_round_trips_to_index((axis, index) in axis_and_index()) {
        let name = axis.names()[index];
        let mut node = StyleNode::new();
        node.set(&Settings::new().entry(axis.name(), name)).unwrap();
        prop_assert_eq!(read_back(&node, axis), Some(index as u8));
    }

    /// Names outside the fixed list are always rejected.
    #[test]
    fn unknown_names_are_rejected(axis in axis_strategy(), name in "[a-z]{1,12}") {
        prop_assume!(!axis.names().contains(&name.as_str()));
        let mut node = StyleNode::new();
        prop_assert!(
            node.set_attr(axis, &StyleValue::from(name)).is_err(),
            "unknown name was accepted"
        );
        prop_assert_eq!(node, StyleNode::new());
    }

    /// Wrapping never changes the visible text.
    #[test]
    fn wrap_preserves_text(
        effect in 0u8..10,
        fore in 0u8..8,
        back in prop::option::of(0u8..8),
        text in "[a-zA-Z0-9 .,:;<>@]{0,40}",
    ) {
        let mut node = StyleNode::new();
        node.set_index(Axis::Effect, effect);
        node.set_index(Axis::Fore, fore);
        if let Some(back) = back {
            node.set_index(Axis::Back, back);
        }
        let wrapped = node.get(&text);
        prop_assert!(wrapped.starts_with(SGR_START), "missing SGR prefix");
        prop_assert!(wrapped.ends_with(RESET), "missing reset suffix");
        let visible = console::strip_ansi_codes(&wrapped).into_owned();
        prop_assert_eq!(visible, text);
    }

    /// The format flag is the same as wrapping the space-joined input.
    #[test]
    fn format_equals_joined_wrap(words in prop::collection::vec("[a-z]{1,8}", 2..6)) {
        let node = StyleNode::new();
        let colored = node.get_with(&words, true).unwrap();
        let expected = node.get(&words.join(" "));
        prop_assert_eq!(colored.as_one(), Some(expected.as_str()));
    }

    /// Without the flag every input is wrapped on its own, in order.
    #[test]
    fn many_wraps_each_in_order(words in prop::collection::vec("[a-z]{1,8}", 2..6)) {
        let node = StyleNode::new();
        let colored = node.get_with(&words, false).unwrap().into_vec();
        prop_assert_eq!(colored.len(), words.len());
        for (wrapped, word) in colored.iter().zip(&words) {
            let expected = node.get(word);
            prop_assert_eq!(wrapped, &expected);
        }
    }

    /// A freshly set child is resolvable straight away.
    #[test]
    fn set_child_is_resolvable(name in "[a-z_]{1,10}") {
        prop_assume!(colortree::RESERVED.iter().all(|r| *r != name));
        let mut node = StyleNode::new();
        node.set(&Settings::new().child(name.clone(), Settings::new().fore("red"))).unwrap();
        prop_assert_eq!(node.node(&name).unwrap().fore(), 1);
    }

    /// Any non-attribute key holding a plain value is rejected.
    #[test]
    fn scalar_on_child_key_is_unexpected(name in "[a-z_]{1,10}") {
        prop_assume!(colortree::RESERVED.iter().all(|r| *r != name));
        let mut node = StyleNode::new();
        let err = node.set(&Settings::new().entry(name.clone(), "red")).unwrap_err();
        prop_assert!(
            matches!(&err, StyleError::UnexpectedKey { key } if *key == name),
            "expected UnexpectedKey, got {:?}",
            err
        );
        prop_assert!(node.is_empty(), "child created from a plain value");
    }
}
