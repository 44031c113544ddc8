//! # colortree - Named ANSI style trees
//!
//! `colortree` builds trees of terminal text styles and wraps strings in the
//! matching ANSI escape sequences.
//!
//! ## Core Concepts
//!
//! - [`StyleNode`]: An effect, a foreground and an optional background, plus
//!   named child nodes reachable by key
//! - [`Settings`]: Nested settings, built in code or loaded from YAML, used to
//!   configure nodes and create children
//! - [`StyleValue`]: An attribute given by name (`"red"`) or index (`1`)
//! - [`PrintOptions`] / [`OutputMode`]: Where and how styled strings are printed
//!
//! ## Quick Start
//!
//! ```rust
//! use colortree::{Settings, StyleNode};
//!
//! let mut root = StyleNode::new();
//! root.set(
//!     &Settings::new()
//!         .child("ok", Settings::new().fore("green"))
//!         .child("err", Settings::new().effect("bold").fore("red").back("black")),
//! )
//! .unwrap();
//!
//! assert_eq!(root.node("ok").unwrap().get("hi"), "\u{1b}[0;32mhi\u{1b}[0;0m");
//! assert_eq!(root.node("err").unwrap().get("x"), "\u{1b}[1;31;40mx\u{1b}[0;0m");
//! ```
//!
//! ## Populated Trees
//!
//! ```rust
//! use colortree::StyleNode;
//!
//! let mut root = StyleNode::new();
//! root.populate_colors();
//!
//! // 8 colors, each with 10 effects
//! let warn = root.node("yellow.underline").unwrap();
//! println!("{}", warn.get("careful"));
//! ```
//!
//! ## YAML Configuration
//!
//! ```rust
//! use colortree::StyleNode;
//!
//! let root = StyleNode::from_yaml(r#"
//! title:
//!   effect: bold
//!   fore: cyan
//! muted:
//!   effect: dim
//!   quote:
//!     effect: italic
//! "#).unwrap();
//!
//! assert_eq!(root.node("muted.quote").unwrap().effect(), 3);
//! ```
//!
//! Call [`init`] once at startup so escape codes render on terminals that
//! need to be switched into ANSI mode first.

pub mod output;
pub mod render;
pub mod style;

pub use output::{init, Destination, OutputMode, OutputStream, PrintOptions};
pub use render::{Colored, RESET};
pub use style::{
    Attr, Axis, Result, Setting, Settings, StyleError, StyleNode, StyleValue, COLORS, EFFECTS,
    RESERVED,
};
