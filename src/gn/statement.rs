//! GN statements: variable assignments and function calls.

use std::fmt::{self, Write};

use super::printer::Printer;
use super::render::Render;
use super::value::Value;

/// A top-level or block-level GN construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Var(VarStatement),
    Call(CallStatement),
}

impl Statement {
    /// `name = value`
    pub fn var(name: impl Into<String>, value: Value) -> Self {
        Self::Var(VarStatement::new(name, value))
    }

    /// `name(params...)` without a block.
    pub fn call(name: impl Into<String>, params: Vec<Value>) -> Self {
        Self::Call(CallStatement::new(name, params))
    }

    /// `name(params...) { body }`
    pub fn block(name: impl Into<String>, params: Vec<Value>, body: Vec<Statement>) -> Self {
        Self::Call(CallStatement::new(name, params).with_body(body))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Var(var) => &var.name,
            Self::Call(call) => &call.name,
        }
    }
}

impl From<VarStatement> for Statement {
    fn from(var: VarStatement) -> Self {
        Self::Var(var)
    }
}

impl From<CallStatement> for Statement {
    fn from(call: CallStatement) -> Self {
        Self::Call(call)
    }
}

impl Render for Statement {
    fn render_to<W: fmt::Write + ?Sized>(&self, out: &mut Printer<'_, W>) -> fmt::Result {
        match self {
            Self::Var(var) => var.render_to(out),
            Self::Call(call) => call.render_to(out),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarStatement {
    pub name: String,
    pub value: Value,
}

impl VarStatement {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Render for VarStatement {
    fn render_to<W: fmt::Write + ?Sized>(&self, out: &mut Printer<'_, W>) -> fmt::Result {
        out.write_str(&self.name)?;
        out.write_str(" = ")?;
        self.value.render_to(out)
    }
}

/// A function call with an optional block.
///
/// An empty block renders the same as no block at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallStatement {
    pub name: String,
    pub params: Vec<Value>,
    pub body: Option<Vec<Statement>>,
}

impl CallStatement {
    pub fn new(name: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            params,
            body: None,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: Vec<Statement>) -> Self {
        self.body = Some(body);
        self
    }

    /// The first parameter when it is a string, e.g. the target name of
    /// `config("name")`.
    pub fn target_name(&self) -> Option<&str> {
        match self.params.first() {
            Some(Value::String(name)) => Some(name),
            _ => None,
        }
    }
}

impl Render for CallStatement {
    fn render_to<W: fmt::Write + ?Sized>(&self, out: &mut Printer<'_, W>) -> fmt::Result {
        out.write_str(&self.name)?;
        out.write_char('(')?;
        out.join(&self.params, ", ", |p, param| param.render_to(p))?;
        out.write_char(')')?;
        if let Some(body) = self.body.as_deref().filter(|body| !body.is_empty()) {
            out.write_str(" {\n")?;
            out.indented(|p| p.join(body, "\n", |p, stmt| stmt.render_to(p)))?;
            out.write_str("\n}")?;
        }
        Ok(())
    }
}

macro_rules! display_via_render {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.render_to(&mut Printer::new(f))
            }
        })*
    };
}

display_via_render!(Statement, VarStatement, CallStatement);
