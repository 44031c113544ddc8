//! The style tree node.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

use super::error::{Result, StyleError};
use super::populate::{color_tree, variants};
use super::settings::{Setting, Settings};
use super::value::{Axis, StyleValue};
use crate::output::{self, PrintOptions};
use crate::render::{self, Colored};

/// The result of resolving a key on a [`StyleNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attr<'a> {
    Effect(u8),
    Fore(u8),
    Back(Option<u8>),
    Child(&'a StyleNode),
}

impl<'a> Attr<'a> {
    /// Returns the child node, if the key resolved to one.
    pub fn as_child(&self) -> Option<&'a StyleNode> {
        match *self {
            Attr::Child(node) => Some(node),
            _ => None,
        }
    }
}

/// A style (effect, foreground, background) plus a namespace of named
/// child styles.
///
/// Keys resolve in a fixed order: the node's own `effect`/`fore`/`back`
/// first, then its children, and otherwise [`StyleError::NotFound`]. The
/// three attribute names are reserved, so a child can never shadow a field.
///
/// # Example
///
/// ```rust
/// use colortree::{Settings, StyleNode};
///
/// let mut root = StyleNode::new();
/// root.populate_colors();
/// root.set(&Settings::new().child("alert", Settings::new().effect("bold").fore("red"))).unwrap();
///
/// let green_bold = root.node("green.bold").unwrap();
/// assert_eq!(green_bold.get("ok"), "\u{1b}[1;32mok\u{1b}[0;0m");
/// assert_eq!(root.child("alert").unwrap().fore(), 1);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct StyleNode {
    effect: u8,
    fore: u8,
    back: Option<u8>,
    children: BTreeMap<String, StyleNode>,
}

impl Default for StyleNode {
    fn default() -> Self {
        Self {
            effect: 0,
            fore: 7,
            back: None,
            children: BTreeMap::new(),
        }
    }
}

impl StyleNode {
    /// Creates a node with no effect, white foreground and no background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node overriding any of the three attributes.
    ///
    /// Attributes left as `None` keep their defaults.
    pub fn styled(
        effect: Option<StyleValue>,
        fore: Option<StyleValue>,
        back: Option<StyleValue>,
    ) -> Result<Self> {
        let mut node = Self::new();
        if let Some(value) = effect {
            node.effect = Axis::Effect.resolve(&value)?;
        }
        if let Some(value) = fore {
            node.fore = Axis::Fore.resolve(&value)?;
        }
        if let Some(value) = back {
            node.back = Some(Axis::Back.resolve(&value)?);
        }
        Ok(node)
    }

    /// Creates a node from settings, including any nested children.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut node = Self::new();
        node.set(settings)?;
        Ok(node)
    }

    /// Creates a node from a YAML settings document.
    ///
    /// ```rust
    /// use colortree::StyleNode;
    ///
    /// let root = StyleNode::from_yaml("fore: cyan\nwarn:\n  fore: yellow\n  effect: bold\n").unwrap();
    /// assert_eq!(root.fore(), 6);
    /// assert_eq!(root.node("warn").unwrap().effect(), 1);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::from_settings(&Settings::from_yaml(yaml)?)
    }

    pub fn effect(&self) -> u8 {
        self.effect
    }

    pub fn fore(&self) -> u8 {
        self.fore
    }

    pub fn back(&self) -> Option<u8> {
        self.back
    }

    /// Applies settings in order.
    ///
    /// Attribute keys take a name or index. Every other key must hold nested
    /// settings, which become a new child under that key, replacing any
    /// existing child of the same name. An entry that fails leaves the node
    /// as the previous entries left it.
    pub fn set(&mut self, settings: &Settings) -> Result<()> {
        for (key, setting) in settings.iter() {
            self.apply(key, setting)?;
        }
        Ok(())
    }

    /// Builds a child from `settings` and stores it under `name`.
    pub fn set_child(&mut self, name: &str, settings: &Settings) -> Result<()> {
        self.apply(name, &Setting::Nested(settings.clone()))
    }

    /// Sets one attribute from a name or index.
    pub fn set_attr(&mut self, axis: Axis, value: &StyleValue) -> Result<()> {
        let index = axis.resolve(value)?;
        self.set_index(axis, index);
        Ok(())
    }

    /// Sets one attribute to a raw index.
    pub fn set_index(&mut self, axis: Axis, index: u8) {
        match axis {
            Axis::Effect => self.effect = index,
            Axis::Fore => self.fore = index,
            Axis::Back => self.back = Some(index),
        }
    }

    /// Clears the background color.
    pub fn clear_back(&mut self) {
        self.back = None;
    }

    fn apply(&mut self, key: &str, setting: &Setting) -> Result<()> {
        if let Some(axis) = Axis::from_name(key) {
            return match setting {
                Setting::Value(value) => self.set_attr(axis, value),
                Setting::Unset if axis == Axis::Back => {
                    self.clear_back();
                    Ok(())
                }
                Setting::Unset => Err(StyleError::InvalidSetting {
                    attribute: axis.name(),
                    reason: "cannot be unset",
                }),
                Setting::Nested(_) => Err(StyleError::InvalidSetting {
                    attribute: axis.name(),
                    reason: "takes a name or index, not a mapping",
                }),
            };
        }

        let Setting::Nested(nested) = setting else {
            return Err(StyleError::UnexpectedKey {
                key: key.to_string(),
            });
        };
        let child = Self::from_settings(nested)?;
        self.insert_child(key.to_string(), child);
        Ok(())
    }

    fn insert_child(&mut self, name: String, child: StyleNode) {
        tracing::trace!(name = %name, grandchildren = child.len(), "attaching style child");
        self.children.insert(name, child);
    }

    /// Detaches and returns the child named `name`.
    pub fn remove_child(&mut self, name: &str) -> Option<StyleNode> {
        let removed = self.children.remove(name);
        if removed.is_some() {
            tracing::trace!(name, "removed style child");
        }
        removed
    }

    /// Resolves `key` against the node's own fields, then its children.
    pub fn attr(&self, key: &str) -> Result<Attr<'_>> {
        match Axis::from_name(key) {
            Some(Axis::Effect) => Ok(Attr::Effect(self.effect)),
            Some(Axis::Fore) => Ok(Attr::Fore(self.fore)),
            Some(Axis::Back) => Ok(Attr::Back(self.back)),
            None => self
                .children
                .get(key)
                .map(Attr::Child)
                .ok_or_else(|| StyleError::NotFound {
                    key: key.to_string(),
                }),
        }
    }

    /// Resolves a dotted chain of keys such as `"green.bold"` or `"warn.fore"`.
    ///
    /// Each segment is resolved with [`StyleNode::attr`] on the node the
    /// previous segment reached.
    pub fn path(&self, path: &str) -> Result<Attr<'_>> {
        let mut segments = path.split('.');
        let mut current = self.attr(segments.next().unwrap_or_default())?;
        for segment in segments {
            let node = current.as_child().ok_or_else(|| StyleError::NotFound {
                key: segment.to_string(),
            })?;
            current = node.attr(segment)?;
        }
        Ok(current)
    }

    /// Resolves a dotted chain that must end on a child node.
    pub fn node(&self, path: &str) -> Result<&StyleNode> {
        self.path(path)?
            .as_child()
            .ok_or_else(|| StyleError::NotFound {
                key: path.to_string(),
            })
    }

    /// Returns the child named `name`, if any.
    pub fn child(&self, name: &str) -> Option<&StyleNode> {
        self.children.get(name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut StyleNode> {
        self.children.get_mut(name)
    }

    /// Iterates over children in name order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &StyleNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// A copy of this node's own attributes, without children.
    pub fn bare(&self) -> StyleNode {
        StyleNode {
            effect: self.effect,
            fore: self.fore,
            back: self.back,
            children: BTreeMap::new(),
        }
    }

    /// Populates along the axis named `axis` (`"effect"`, `"fore"` or `"back"`).
    pub fn populate(&mut self, axis: &str) -> Result<()> {
        let axis = Axis::from_name(axis).ok_or_else(|| StyleError::AxisNotFound {
            axis: axis.to_string(),
        })?;
        self.populate_axis(axis);
        Ok(())
    }

    /// Adds one child per name on `axis`, each a copy of this node's
    /// attributes with that axis pinned to the name.
    pub fn populate_axis(&mut self, axis: Axis) {
        let built = variants(self, axis);
        tracing::debug!(axis = %axis, count = built.len(), "populating style axis");
        self.children.extend(built);
    }

    /// Adds a child per foreground color, each holding a child per effect.
    pub fn populate_colors(&mut self) {
        let built = color_tree(self);
        tracing::debug!(count = built.len(), "populating color tree");
        self.children.extend(built);
    }

    /// Wraps `text` in this node's escape sequence.
    pub fn get(&self, text: &str) -> String {
        render::wrap(self.effect, self.fore, self.back, text)
    }

    /// Wraps each string separately, keeping order.
    pub fn get_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        texts.iter().map(|text| self.get(text.as_ref())).collect()
    }

    /// Joins the strings with single spaces and wraps the result once.
    pub fn get_joined<S: AsRef<str>>(&self, texts: &[S]) -> String {
        let joined: Vec<&str> = texts.iter().map(|text| text.as_ref()).collect();
        self.get(&joined.join(" "))
    }

    /// Styles one or more strings.
    ///
    /// One string gives [`Colored::One`]. Several give [`Colored::Many`]
    /// unless `format` is set, in which case they are joined with spaces and
    /// wrapped once. No strings at all is [`StyleError::EmptyInput`].
    pub fn get_with<S: AsRef<str>>(&self, texts: &[S], format: bool) -> Result<Colored> {
        match texts {
            [] => Err(StyleError::EmptyInput),
            [text] => Ok(Colored::One(self.get(text.as_ref()))),
            _ if format => Ok(Colored::One(self.get_joined(texts))),
            _ => Ok(Colored::Many(self.get_all(texts))),
        }
    }

    /// Prints the joined, styled strings to the destination in `options`.
    ///
    /// [`OutputMode::Auto`](crate::OutputMode::Auto) checks whether that
    /// destination supports color.
    pub fn print<S: AsRef<str>>(&self, texts: &[S], options: &PrintOptions) -> Result<()> {
        let use_color = options.mode.should_use_color(options.destination);
        let mut term = options.destination.term();
        self.write_line(&mut term, texts, options, use_color)
    }

    /// Prints the joined, styled strings to any writer.
    ///
    /// `options.destination` is ignored, and
    /// [`OutputMode::Auto`](crate::OutputMode::Auto) keeps escape codes.
    pub fn print_to<W: Write + ?Sized, S: AsRef<str>>(
        &self,
        writer: &mut W,
        texts: &[S],
        options: &PrintOptions,
    ) -> Result<()> {
        let use_color = options.mode.should_use_color_for_writer();
        self.write_line(writer, texts, options, use_color)
    }

    fn write_line<W: Write + ?Sized, S: AsRef<str>>(
        &self,
        writer: &mut W,
        texts: &[S],
        options: &PrintOptions,
        use_color: bool,
    ) -> Result<()> {
        let line = self.get_with(texts, true)?.into_vec();
        output::emit(writer, &line, options, use_color)
    }
}

impl fmt::Debug for StyleNode {
    /// Shows the node's own attributes and only the names of its children.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StyleNode(effect={}, fore={}, back=", self.effect, self.fore)?;
        match self.back {
            Some(back) => write!(f, "{}", back)?,
            None => f.write_str("None")?,
        }
        let names: Vec<&str> = self.children.keys().map(String::as_str).collect();
        write!(f, ", objects({}))", names.join(", "))
    }
}

impl fmt::Display for StyleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
