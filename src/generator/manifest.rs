//! The root `BUILD.gn` that marks a directory tree as generated.

use crate::constants::{GENERATOR_LICENCE, GENERATOR_VERSION, GENERATOR_VERSION_VAR};
use crate::gn::{Render, Value, VarStatement};

/// Static manifest text: a provenance comment, the licence and the generator
/// version as a GN variable.
pub fn render_manifest() -> String {
    let version = VarStatement::new(GENERATOR_VERSION_VAR, Value::string(GENERATOR_VERSION));
    format!(
        "# All the files in the subdirectories are generated using Conan\n\
         # Licence: {GENERATOR_LICENCE}\n\
         {}\n",
        version.render()
    )
}
