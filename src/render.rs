//! ANSI SGR synthesis.
//!
//! A styled string is the text between an SGR prefix built from the three
//! attribute numbers and a fixed reset:
//!
//! ```text
//! ESC [ <effect> ; 3<fore> [ ; 4<back> ] m <text> ESC [ 0 ; 0 m
//! ```

/// Sequence appended after every styled string.
pub const RESET: &str = "\u{1b}[0;0m";

/// Builds the SGR prefix for the given attribute numbers.
pub fn prefix(effect: u8, fore: u8, back: Option<u8>) -> String {
    let mut out = format!("\u{1b}[{};3{}", effect, fore);
    if let Some(back) = back {
        out.push_str(&format!(";4{}", back));
    }
    out.push('m');
    out
}

/// Wraps `text` in the prefix and [`RESET`].
pub fn wrap(effect: u8, fore: u8, back: Option<u8>, text: &str) -> String {
    format!("{}{}{}", prefix(effect, fore, back), text, RESET)
}

/// The result of styling one or more strings.
///
/// A single input, or several inputs joined with `format`, give [`Colored::One`].
/// Several inputs without `format` give one wrapped string per input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Colored {
    One(String),
    Many(Vec<String>),
}

impl Colored {
    /// Flattens into a list of wrapped strings.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Colored::One(s) => vec![s],
            Colored::Many(all) => all,
        }
    }

    /// Returns the single string, if this is [`Colored::One`].
    pub fn as_one(&self) -> Option<&str> {
        match self {
            Colored::One(s) => Some(s),
            Colored::Many(_) => None,
        }
    }
}
