//! Attribute tables and the values accepted for them.
//!
//! Each of the three style attributes selects an entry from a fixed, ordered
//! list. The position in the list is the number written into the escape
//! sequence, so `"green"` and `2` mean the same foreground.

use std::fmt;

use super::error::{Result, StyleError};

/// Text effects, in SGR code order.
pub const EFFECTS: &[&str] = &[
    "none",
    "bold",
    "dim",
    "italic",
    "underline",
    "blink",
    "blinking",
    "negative",
    "empty",
    "strikethrough",
];

/// The eight basic terminal colors, in SGR code order.
pub const COLORS: &[&str] = &[
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// Names that always refer to a node's own fields and never to a child.
pub const RESERVED: &[&str] = &["effect", "fore", "back"];

/// One of the three style attributes.
///
/// An axis is also the dimension along which
/// [`StyleNode::populate_axis`](crate::StyleNode::populate_axis) enumerates
/// every named variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Effect,
    Fore,
    Back,
}

impl Axis {
    /// All axes, in declaration order.
    pub const ALL: [Axis; 3] = [Axis::Effect, Axis::Fore, Axis::Back];

    /// Parses a reserved attribute name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "effect" => Some(Axis::Effect),
            "fore" => Some(Axis::Fore),
            "back" => Some(Axis::Back),
            _ => None,
        }
    }

    /// The attribute name for this axis.
    pub fn name(self) -> &'static str {
        match self {
            Axis::Effect => "effect",
            Axis::Fore => "fore",
            Axis::Back => "back",
        }
    }

    /// The fixed list of symbolic names for this axis.
    pub fn names(self) -> &'static [&'static str] {
        match self {
            Axis::Effect => EFFECTS,
            Axis::Fore | Axis::Back => COLORS,
        }
    }

    /// Looks up the index of a symbolic name.
    pub fn index_of(self, name: &str) -> Result<u8> {
        self.names()
            .iter()
            .position(|candidate| *candidate == name)
            .map(|i| i as u8)
            .ok_or_else(|| StyleError::Validation {
                attribute: self.name(),
                value: name.to_string(),
                valid: self.names().to_vec(),
            })
    }

    /// Resolves a value to the number stored on the node.
    ///
    /// Names must be present in [`Axis::names`]. Indexes are taken as they
    /// are, even past the end of the list, since the escape format accepts
    /// codes beyond the named ones.
    pub fn resolve(self, value: &StyleValue) -> Result<u8> {
        match value {
            StyleValue::ByName(name) => self.index_of(name),
            StyleValue::ByIndex(index) => Ok(*index),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value for a style attribute, either by name or by index.
///
/// ```rust
/// use colortree::{Axis, StyleValue};
///
/// assert_eq!(Axis::Fore.resolve(&"green".into()).unwrap(), 2);
/// assert_eq!(Axis::Fore.resolve(&StyleValue::from(2u8)).unwrap(), 2);
/// assert!(Axis::Fore.resolve(&"purple".into()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    /// A symbolic name such as `"bold"` or `"cyan"`.
    ByName(String),
    /// A raw SGR index.
    ByIndex(u8),
}

impl From<&str> for StyleValue {
    fn from(name: &str) -> Self {
        StyleValue::ByName(name.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(name: String) -> Self {
        StyleValue::ByName(name)
    }
}

impl From<u8> for StyleValue {
    fn from(index: u8) -> Self {
        StyleValue::ByIndex(index)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::ByName(name) => f.write_str(name),
            StyleValue::ByIndex(index) => write!(f, "{}", index),
        }
    }
}
