//! Bulk construction of style subtrees.
//!
//! These functions only build trees; attaching them to a node is left to
//! [`StyleNode::populate_axis`] and [`StyleNode::populate_colors`].

use std::collections::BTreeMap;

use super::node::StyleNode;
use super::value::Axis;

/// Builds one childless variant of `base` per name on `axis`.
///
/// Each variant keeps the other two attributes of `base` and is keyed by the
/// name it was pinned to.
pub fn variants(base: &StyleNode, axis: Axis) -> BTreeMap<String, StyleNode> {
    axis.names()
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let mut variant = base.bare();
            variant.set_index(axis, index as u8);
            (name.to_string(), variant)
        })
        .collect()
}

/// Builds the color → effect tree: every foreground color of `base`, each
/// with every effect underneath it.
pub fn color_tree(base: &StyleNode) -> BTreeMap<String, StyleNode> {
    let mut colors = variants(base, Axis::Fore);
    for color in colors.values_mut() {
        color.populate_axis(Axis::Effect);
    }
    colors
}
