//! Indentation-aware text printer for GN output.
//!
//! [`Printer`] wraps any [`fmt::Write`] sink and tracks a nesting level. Text
//! written through it is passed to the sink unchanged, except that every line
//! begun while the printer is at level `n` is prefixed with `2 * n` spaces.
//! Levels are entered with [`Printer::indented`], which scopes the extra level
//! to a closure so that nested renders compose:
//!
//! ```rust
//! use gngen_cli::gn::Printer;
//! use std::fmt::Write;
//!
//! let mut out = String::new();
//! let mut printer = Printer::new(&mut out);
//! printer.write_str("outer {\n").unwrap();
//! printer.indented(|p| {
//!     p.write_str("first\n")?;
//!     p.indented(|p| p.write_str("second\n"))
//! }).unwrap();
//! printer.write_str("}").unwrap();
//!
//! assert_eq!(out, "outer {\n  first\n    second\n}");
//! ```
//!
//! The printer never inspects the sink, so the same nesting logic feeds a
//! `String`, a [`fmt::Formatter`], an [`std::io::Write`] stream through
//! [`IoSink`], or a list of lines through [`LineBuffer`].

use std::fmt;
use std::io;

use crate::constants::INDENT_WIDTH;

/// Writes text to a sink, indenting each new line by the current level.
pub struct Printer<'a, W: fmt::Write + ?Sized> {
    sink: &'a mut W,
    level: usize,
    at_line_start: bool,
}

impl<'a, W: fmt::Write + ?Sized> Printer<'a, W> {
    /// Create a printer at level 0.
    pub fn new(sink: &'a mut W) -> Self {
        Self::with_level(sink, 0)
    }

    /// Create a printer whose first line starts at `level`.
    pub fn with_level(sink: &'a mut W, level: usize) -> Self {
        Self {
            sink,
            level,
            at_line_start: true,
        }
    }

    /// Current nesting level.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Run `f` one level deeper than the current level.
    ///
    /// Every line begun inside `f` is indented by one more level, whether it
    /// comes from a single write or from recursive renders that enter further
    /// levels of their own. The level is restored when `f` returns.
    pub fn indented<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.level += 1;
        let result = f(self);
        self.level -= 1;
        result
    }

    /// Write `items` separated by `separator`, rendering each with `render`.
    pub fn join<I, T, F>(&mut self, items: I, separator: &str, mut render: F) -> fmt::Result
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&mut Self, T) -> fmt::Result,
    {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                fmt::Write::write_str(self, separator)?;
            }
            render(self, item)?;
        }
        Ok(())
    }

    fn write_indent(&mut self) -> fmt::Result {
        for _ in 0..self.level * INDENT_WIDTH {
            self.sink.write_char(' ')?;
        }
        Ok(())
    }
}

impl<W: fmt::Write + ?Sized> fmt::Write for Printer<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for segment in s.split_inclusive('\n') {
            // Blank lines stay blank.
            if self.at_line_start && segment != "\n" {
                self.write_indent()?;
            }
            self.sink.write_str(segment)?;
            self.at_line_start = segment.ends_with('\n');
        }
        Ok(())
    }
}

/// A [`fmt::Write`] sink that collects complete lines.
///
/// Text after the last newline is kept pending until [`LineBuffer::into_lines`]
/// is called.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    pending: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines completed so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the buffer, flushing any unterminated final line.
    pub fn into_lines(mut self) -> Vec<String> {
        if !self.pending.is_empty() {
            self.lines.push(std::mem::take(&mut self.pending));
        }
        self.lines
    }
}

impl fmt::Write for LineBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for segment in s.split_inclusive('\n') {
            match segment.strip_suffix('\n') {
                Some(line) => {
                    self.pending.push_str(line);
                    self.lines.push(std::mem::take(&mut self.pending));
                }
                None => self.pending.push_str(segment),
            }
        }
        Ok(())
    }
}

/// Adapts an [`io::Write`] stream to [`fmt::Write`].
///
/// `fmt::Error` carries no payload, so the underlying I/O error is kept and can
/// be recovered with [`IoSink::take_error`] after a failed render.
pub struct IoSink<W: io::Write> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            error: None,
        }
    }

    /// Take the I/O error that caused the last `fmt::Error`, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Flush and return the wrapped stream.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: io::Write> fmt::Write for IoSink<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}
