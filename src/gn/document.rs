use std::fmt::{self, Write};

use super::printer::Printer;
use super::render::Render;
use super::statement::Statement;

/// A complete GN file: top-level statements separated by a blank line and
/// terminated by a single newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    statements: Vec<Statement>,
}

impl Document {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            statements,
        }
    }

    pub fn push(&mut self, statement: impl Into<Statement>) {
        self.statements.push(statement.into());
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }
}

impl From<Vec<Statement>> for Document {
    fn from(statements: Vec<Statement>) -> Self {
        Self::new(statements)
    }
}

impl Render for Document {
    fn render_to<W: fmt::Write + ?Sized>(&self, out: &mut Printer<'_, W>) -> fmt::Result {
        out.join(&self.statements, "\n\n", |p, stmt| stmt.render_to(p))?;
        out.write_char('\n')
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_to(&mut Printer::new(f))
    }
}
