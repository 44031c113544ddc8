//! Output streams and terminal setup.
//!
//! Styled strings are produced by [`StyleNode`](crate::StyleNode); this module
//! is where they leave the process. [`PrintOptions`] carries the stream
//! configuration (destination, separator, terminator, flush) together with an
//! [`OutputMode`] that decides whether escape codes are kept.

use std::io::{self, Write};

use console::Term;
use once_cell::sync::OnceCell;

use crate::style::Result;

/// Where printed output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Destination {
    #[default]
    Stdout,
    Stderr,
}

impl Destination {
    /// Opens the terminal handle for this destination.
    pub fn term(self) -> Term {
        match self {
            Destination::Stdout => Term::stdout(),
            Destination::Stderr => Term::stderr(),
        }
    }
}

/// Controls whether escape codes reach the stream.
///
/// # Example
///
/// ```rust
/// use colortree::{OutputMode, PrintOptions, StyleNode};
///
/// let node = StyleNode::styled(None, Some("red".into()), None).unwrap();
/// let mut out = Vec::new();
///
/// let opts = PrintOptions::new().mode(OutputMode::Text);
/// node.print_to(&mut out, &["plain"], &opts).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "plain\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Keep escape codes only if the destination supports color.
    Auto,
    /// Always write escape codes.
    #[default]
    Term,
    /// Strip escape codes.
    Text,
}

impl OutputMode {
    /// Resolves the mode to a decision for the given destination.
    pub fn should_use_color(&self, destination: Destination) -> bool {
        match self {
            OutputMode::Auto => destination.term().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }

    /// Resolves the mode for a caller-supplied writer.
    ///
    /// There is no terminal to query behind an arbitrary writer, so `Auto`
    /// keeps escape codes just like `Term`.
    pub fn should_use_color_for_writer(&self) -> bool {
        !matches!(self, OutputMode::Text)
    }
}

/// Stream configuration for printing.
///
/// Defaults match a plain `println!`: stdout, a single space between values,
/// a trailing newline and no explicit flush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    pub destination: Destination,
    pub sep: String,
    pub end: String,
    pub flush: bool,
    pub mode: OutputMode,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            destination: Destination::Stdout,
            sep: " ".to_string(),
            end: "\n".to_string(),
            flush: false,
            mode: OutputMode::Term,
        }
    }
}

impl PrintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    pub fn sep(mut self, sep: impl Into<String>) -> Self {
        self.sep = sep.into();
        self
    }

    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.end = end.into();
        self
    }

    pub fn flush(mut self, flush: bool) -> Self {
        self.flush = flush;
        self
    }

    pub fn mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Anything finished strings can be written to.
///
/// Implemented for every [`io::Write`], including [`console::Term`].
pub trait OutputStream {
    /// Writes `values` separated by `options.sep`, then `options.end`,
    /// flushing afterwards when `options.flush` is set.
    fn write_values(&mut self, values: &[String], options: &PrintOptions) -> io::Result<()>;
}

impl<W: Write + ?Sized> OutputStream for W {
    fn write_values(&mut self, values: &[String], options: &PrintOptions) -> io::Result<()> {
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.write_all(options.sep.as_bytes())?;
            }
            self.write_all(value.as_bytes())?;
        }
        self.write_all(options.end.as_bytes())?;
        if options.flush {
            self.flush()?;
        }
        Ok(())
    }
}

/// Hands finished strings to a stream, stripping escapes unless `use_color`.
pub fn emit<S: OutputStream + ?Sized>(
    stream: &mut S,
    values: &[String],
    options: &PrintOptions,
    use_color: bool,
) -> Result<()> {
    if use_color {
        stream.write_values(values, options)?;
    } else {
        let plain: Vec<String> = values
            .iter()
            .map(|value| console::strip_ansi_codes(value).into_owned())
            .collect();
        stream.write_values(&plain, options)?;
    }
    Ok(())
}

static ANSI_SUPPORT: OnceCell<bool> = OnceCell::new();

/// Prepares the terminal for ANSI output and reports whether stdout supports it.
///
/// Safe to call any number of times from any thread; the check runs once.
/// On Windows, `console` switches the console into virtual terminal mode
/// while checking, which is what makes the escape codes render there.
pub fn init() -> bool {
    *ANSI_SUPPORT.get_or_init(|| {
        let supported = Term::stdout().features().colors_supported();
        tracing::debug!(supported, "checked terminal ANSI support");
        supported
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn written(values: &[&str], options: &PrintOptions) -> String {
        let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let mut out = Vec::new();
        emit(&mut out, &values, options, options.mode.should_use_color_for_writer()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_output_mode_term_should_use_color() {
        assert!(OutputMode::Term.should_use_color(Destination::Stdout));
        assert!(OutputMode::Term.should_use_color(Destination::Stderr));
    }

    #[test]
    fn test_output_mode_text_should_not_use_color() {
        assert!(!OutputMode::Text.should_use_color(Destination::Stdout));
    }

    #[test]
    fn test_output_mode_for_writer_only_text_strips() {
        assert!(OutputMode::Auto.should_use_color_for_writer());
        assert!(OutputMode::Term.should_use_color_for_writer());
        assert!(!OutputMode::Text.should_use_color_for_writer());
    }

    #[test]
    fn test_output_mode_default_is_term() {
        assert_eq!(OutputMode::default(), OutputMode::Term);
    }

    #[test]
    fn test_print_options_defaults() {
        let opts = PrintOptions::default();
        assert_eq!(opts.destination, Destination::Stdout);
        assert_eq!(opts.sep, " ");
        assert_eq!(opts.end, "\n");
        assert!(!opts.flush);
        assert_eq!(opts.mode, OutputMode::Term);
    }

    #[test]
    fn test_write_values_uses_sep_and_end() {
        let opts = PrintOptions::new().sep(", ").end("!");
        assert_eq!(written(&["a", "b", "c"], &opts), "a, b, c!");
    }

    #[test]
    fn test_write_values_single_value_ignores_sep() {
        let opts = PrintOptions::new().sep("|");
        assert_eq!(written(&["only"], &opts), "only\n");
    }

    #[test]
    fn test_emit_keeps_escapes_in_term_mode() {
        let styled = "\u{1b}[0;32mhi\u{1b}[0;0m";
        assert_eq!(
            written(&[styled], &PrintOptions::new().end("")),
            styled
        );
    }

    #[test]
    fn test_emit_strips_escapes_in_text_mode() {
        let opts = PrintOptions::new().mode(OutputMode::Text).end("");
        assert_eq!(written(&["\u{1b}[1;31;40mx\u{1b}[0;0m"], &opts), "x");
    }

    #[test]
    fn test_emit_flushes_when_asked() {
        struct Flushed {
            buf: Vec<u8>,
            flushes: usize,
        }

        impl Write for Flushed {
            fn write(&mut self, data: &[u8]) -> io::Result<usize> {
                self.buf.extend_from_slice(data);
                Ok(data.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                self.flushes += 1;
                Ok(())
            }
        }

        let mut stream = Flushed {
            buf: Vec::new(),
            flushes: 0,
        };
        emit(&mut stream, &["x".to_string()], &PrintOptions::new().flush(true), true).unwrap();
        assert_eq!(stream.flushes, 1);
        assert_eq!(stream.buf, b"x\n");
    }

    #[test]
    #[serial]
    fn test_init_is_idempotent() {
        let first = init();
        assert_eq!(init(), first);
        assert_eq!(ANSI_SUPPORT.get(), Some(&first));
    }
}
