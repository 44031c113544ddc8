//! The style tree.
//!
//! This module provides the core primitives:
//!
//! - [`StyleNode`]: A style plus a namespace of named child styles
//! - [`StyleValue`]: An attribute value given by name or by index
//! - [`Settings`]: Nested settings used to configure nodes and create children
//! - [`StyleError`]: Errors from building and querying the tree
//!
//! Children are created from settings, so a tree can be nested to any depth
//! and every node owns its own subtree.

mod error;
mod node;
pub mod populate;
mod settings;
mod value;

pub use error::{Result, StyleError};
pub use node::{Attr, StyleNode};
pub use settings::{Setting, Settings};
pub use value::{Axis, StyleValue, COLORS, EFFECTS, RESERVED};
