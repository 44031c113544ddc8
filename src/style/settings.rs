//! Nested style settings.
//!
//! [`Settings`] is the shape used to configure a node and to create children:
//! an ordered list of keys, each holding either an attribute value or another
//! set of settings for a child of that name.
//!
//! # YAML Format
//!
//! ```yaml
//! # Attributes of the node itself
//! effect: bold
//! fore: 2
//! back: ~          # unset
//!
//! # Any other key defines a child, nested as deep as needed
//! warn:
//!   fore: yellow
//!   loud:
//!     effect: underline
//! ```

use serde::{Deserialize, Deserializer};

use super::error::{Result, StyleError};
use super::value::StyleValue;

/// A single entry value in [`Settings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    /// An attribute value, by name or index.
    Value(StyleValue),
    /// No value. Only meaningful for `back`.
    Unset,
    /// The full configuration of a child node.
    Nested(Settings),
}

impl From<StyleValue> for Setting {
    fn from(value: StyleValue) -> Self {
        Setting::Value(value)
    }
}

impl From<&str> for Setting {
    fn from(name: &str) -> Self {
        Setting::Value(name.into())
    }
}

impl From<String> for Setting {
    fn from(name: String) -> Self {
        Setting::Value(name.into())
    }
}

impl From<u8> for Setting {
    fn from(index: u8) -> Self {
        Setting::Value(index.into())
    }
}

impl From<Settings> for Setting {
    fn from(settings: Settings) -> Self {
        Setting::Nested(settings)
    }
}

/// An ordered set of named settings, applied one entry at a time.
///
/// # Example
///
/// ```rust
/// use colortree::{Settings, StyleNode};
///
/// let settings = Settings::new()
///     .fore("cyan")
///     .child("alert", Settings::new().effect("bold").fore("red").back("black"));
///
/// let node = StyleNode::from_settings(&settings).unwrap();
/// assert_eq!(node.fore(), 6);
/// assert_eq!(node.child("alert").unwrap().back(), Some(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    entries: Vec<(String, Setting)>,
}

impl Settings {
    /// Creates empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a raw entry, returning the updated settings for chaining.
    ///
    /// No checking happens here; keys and values are validated when the
    /// settings are applied to a node.
    pub fn entry(mut self, key: impl Into<String>, setting: impl Into<Setting>) -> Self {
        self.entries.push((key.into(), setting.into()));
        self
    }

    /// Sets the text effect.
    pub fn effect(self, value: impl Into<StyleValue>) -> Self {
        self.entry("effect", Setting::Value(value.into()))
    }

    /// Sets the foreground color.
    pub fn fore(self, value: impl Into<StyleValue>) -> Self {
        self.entry("fore", Setting::Value(value.into()))
    }

    /// Sets the background color.
    pub fn back(self, value: impl Into<StyleValue>) -> Self {
        self.entry("back", Setting::Value(value.into()))
    }

    /// Clears the background color.
    pub fn no_back(self) -> Self {
        self.entry("back", Setting::Unset)
    }

    /// Defines a child node.
    pub fn child(self, name: impl Into<String>, settings: Settings) -> Self {
        self.entry(name, Setting::Nested(settings))
    }

    /// Iterates over the entries in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Setting)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses settings from a YAML document whose root is a mapping.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        Self::from_yaml_value(&value)
    }

    /// Converts a parsed YAML mapping into settings.
    ///
    /// - strings become names
    /// - integers in `0..=255` become indexes
    /// - `null` unsets
    /// - mappings become children
    pub fn from_yaml_value(value: &serde_yaml::Value) -> Result<Self> {
        let map = value.as_mapping().ok_or_else(|| StyleError::Config {
            message: format!("expected a mapping, got {}", describe(value)),
        })?;

        let mut settings = Settings::new();
        for (key, value) in map {
            let key = key.as_str().ok_or_else(|| StyleError::Config {
                message: format!("keys must be strings, got {}", describe(key)),
            })?;
            let setting = parse_setting(key, value)?;
            settings = settings.entry(key, setting);
        }
        Ok(settings)
    }
}

impl<K: Into<String>, S: Into<Setting>> FromIterator<(K, S)> for Settings {
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Settings::new(), |settings, (key, setting)| {
                settings.entry(key, setting)
            })
    }
}

impl<'de> Deserialize<'de> for Settings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = serde_yaml::Value::deserialize(deserializer)?;
        Settings::from_yaml_value(&value).map_err(serde::de::Error::custom)
    }
}

fn parse_setting(key: &str, value: &serde_yaml::Value) -> Result<Setting> {
    match value {
        serde_yaml::Value::Null => Ok(Setting::Unset),
        serde_yaml::Value::String(name) => Ok(Setting::Value(StyleValue::ByName(name.clone()))),
        serde_yaml::Value::Number(n) if n.is_f64() => Err(StyleError::Config {
            message: format!("'{}': expected an integer index, got {}", key, n),
        }),
        serde_yaml::Value::Number(n) => {
            let index = n
                .as_u64()
                .filter(|index| *index <= u8::MAX as u64)
                .ok_or_else(|| StyleError::Config {
                    message: format!("'{}': index {} out of range (0-255)", key, n),
                })?;
            Ok(Setting::Value(StyleValue::ByIndex(index as u8)))
        }
        serde_yaml::Value::Mapping(_) => Ok(Setting::Nested(Settings::from_yaml_value(value)?)),
        other => Err(StyleError::Config {
            message: format!("'{}': unsupported value {}", key, describe(other)),
        }),
    }
}

fn describe(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
