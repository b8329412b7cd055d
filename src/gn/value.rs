//! GN values: the right-hand side of assignments and call parameters.

use std::fmt::{self, Write};

use super::printer::Printer;
use super::render::Render;
use crate::constants::INLINE_LIST_MAX;

/// A GN expression.
///
/// Strings are written between double quotes without escaping; callers must
/// not pass text containing `"` or newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Identifier(String),
    Bool(bool),
    String(String),
    List(Vec<Value>),
    Scope(Scope),
}

impl Value {
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    pub fn string(text: impl Into<String>) -> Self {
        Self::String(text.into())
    }

    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// A list of string values.
    pub fn strings<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::List(items.into_iter().map(|s| Self::String(s.into())).collect())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Scope> for Value {
    fn from(scope: Scope) -> Self {
        Self::Scope(scope)
    }
}

impl Render for Value {
    fn render_to<W: fmt::Write + ?Sized>(&self, out: &mut Printer<'_, W>) -> fmt::Result {
        match self {
            Self::Identifier(name) => out.write_str(name),
            Self::Bool(b) => out.write_str(if *b { "true" } else { "false" }),
            Self::String(text) => {
                out.write_char('"')?;
                out.write_str(text)?;
                out.write_char('"')
            }
            Self::List(items) => render_list(items, out),
            Self::Scope(scope) => scope.render_to(out),
        }
    }
}

fn render_list<W: fmt::Write + ?Sized>(items: &[Value], out: &mut Printer<'_, W>) -> fmt::Result {
    if items.is_empty() {
        return out.write_str("[]");
    }
    if items.len() <= INLINE_LIST_MAX {
        out.write_str("[ ")?;
        out.join(items, ", ", |p, item| item.render_to(p))?;
        return out.write_str(" ]");
    }
    out.write_str("[\n")?;
    out.indented(|p| p.join(items, ",\n", |p, item| item.render_to(p)))?;
    out.write_str("\n]")
}

/// An ordered set of `key = value` bindings.
///
/// Keys keep their first insertion position; inserting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    entries: Vec<(String, Value)>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`Scope::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Scope {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        let mut scope = Self::new();
        for (key, value) in iter {
            scope.insert(key, value);
        }
        scope
    }
}

impl Render for Scope {
    fn render_to<W: fmt::Write + ?Sized>(&self, out: &mut Printer<'_, W>) -> fmt::Result {
        if self.entries.is_empty() {
            return out.write_str("{}");
        }
        out.write_str("{\n")?;
        out.indented(|p| {
            for (key, value) in &self.entries {
                p.write_str(key)?;
                p.write_str(" = ")?;
                value.render_to(p)?;
                p.write_str(",\n")?;
            }
            Ok(())
        })?;
        out.write_char('}')
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_to(&mut Printer::new(f))
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_to(&mut Printer::new(f))
    }
}
