use std::fmt;

use super::printer::Printer;

/// Canonical GN text form of a node.
///
/// Implementors write themselves through a [`Printer`] and leave indentation
/// to it: a node that opens a block renders its contents inside
/// [`Printer::indented`] and never emits leading spaces itself. Rendering is
/// pure, so the same node always produces the same text.
pub trait Render {
    /// Write this node to `out` at the printer's current level.
    fn render_to<W: fmt::Write + ?Sized>(&self, out: &mut Printer<'_, W>) -> fmt::Result;

    /// Render this node to a new string.
    fn render(&self) -> String {
        let mut text = String::new();
        // Writing into a String cannot fail.
        let _ = self.render_to(&mut Printer::new(&mut text));
        text
    }
}
