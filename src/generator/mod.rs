//! Translation of dependency metadata into GN declarations.
//!
//! Each dependency `{dep}` becomes one GN file with, in this order:
//!
//! 1. `config("{dep}_include")` - include dirs, defines, C and C++ flags
//! 2. `config("{dep}_runtime_path")` - library dirs and linker flags
//! 3. `config("{dep}_lib_{lib}")` - one per library, in link order
//! 4. `group("{label}")` - one per config above, in the same order, exposing
//!    it through `public_configs`
//!
//! Group labels are `include`, `runtime_path` and the bare library names, so a
//! GN target depends on `//third_party/{dep}:include` or
//! `//third_party/{dep}:{lib}`. Downstream builds reference these names, so the
//! naming and ordering here must not change.
//!
//! ```rust
//! use gngen_cli::dependency::DependencyInfo;
//! use gngen_cli::generator::render_build_file;
//!
//! let mut zlib = DependencyInfo::new("zlib");
//! zlib.libs = vec!["z".to_string()];
//!
//! let text = render_build_file(&zlib);
//! assert!(text.starts_with("config(\"zlib_include\") {\n"));
//! assert!(text.ends_with("group(\"z\") {\n  public_configs = [ \":zlib_lib_z\" ]\n}\n"));
//! ```

mod manifest;

pub use manifest::render_manifest;

use crate::dependency::DependencyInfo;
use crate::gn::{Document, Render, Statement, Value};

/// Label of the group exposing the include config.
pub const INCLUDE_LABEL: &str = "include";

/// Label of the group exposing the runtime-path config.
pub const RUNTIME_PATH_LABEL: &str = "runtime_path";

/// A config declared for a dependency and the group label that exposes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposedConfig {
    pub config_name: String,
    pub label: String,
}

/// Accumulates the configs of one dependency, then closes them with groups.
///
/// The usual sequence is available as [`build_declarations`]; the builder is
/// public so callers can emit a subset of the configs.
pub struct DeclarationBuilder<'a> {
    dep: &'a DependencyInfo,
    configs: Vec<Statement>,
    exposed: Vec<ExposedConfig>,
}

impl<'a> DeclarationBuilder<'a> {
    pub fn new(dep: &'a DependencyInfo) -> Self {
        Self {
            dep,
            configs: Vec::new(),
            exposed: Vec::new(),
        }
    }

    /// `config("{dep}_include")`
    #[must_use]
    pub fn include_config(mut self) -> Self {
        let dep = self.dep;
        self.add_config(
            format!("{}_include", dep.name),
            INCLUDE_LABEL.to_string(),
            vec![
                Statement::var("include_dirs", Value::strings(&dep.include_paths)),
                Statement::var("defines", Value::strings(&dep.defines)),
                Statement::var("cflags_c", Value::strings(&dep.cflags)),
                Statement::var("cflags_cc", Value::strings(&dep.cppflags)),
            ],
        );
        self
    }

    /// `config("{dep}_runtime_path")`; `ldflags` lists shared-library link
    /// flags before executable link flags.
    #[must_use]
    pub fn runtime_path_config(mut self) -> Self {
        let dep = self.dep;
        let ldflags = dep.sharedlinkflags.iter().chain(&dep.exelinkflags);
        self.add_config(
            format!("{}_runtime_path", dep.name),
            RUNTIME_PATH_LABEL.to_string(),
            vec![
                Statement::var("lib_dirs", Value::strings(&dep.lib_paths)),
                Statement::var("ldflags", Value::strings(ldflags)),
            ],
        );
        self
    }

    /// `config("{dep}_lib_{lib}")` for every library, in link order.
    #[must_use]
    pub fn library_configs(mut self) -> Self {
        let dep = self.dep;
        for lib in &dep.libs {
            self.add_config(
                format!("{}_lib_{}", dep.name, lib),
                lib.clone(),
                vec![Statement::var("libs", Value::strings([lib]))],
            );
        }
        self
    }

    /// Configs declared so far, in declaration order.
    pub fn exposed(&self) -> &[ExposedConfig] {
        &self.exposed
    }

    /// All configs followed by one group per config.
    pub fn build(self) -> Document {
        let mut statements = self.configs;
        statements.extend(self.exposed.iter().map(group_for));
        Document::new(statements)
    }

    /// Every config ends with a `visibility` restricting it to its group.
    fn add_config(&mut self, config_name: String, label: String, mut body: Vec<Statement>) {
        body.push(Statement::var("visibility", Value::strings([format!(":{label}")])));
        self.configs.push(Statement::block(
            "config",
            vec![Value::string(config_name.as_str())],
            body,
        ));
        self.exposed.push(ExposedConfig {
            config_name,
            label,
        });
    }
}

fn group_for(exposed: &ExposedConfig) -> Statement {
    Statement::block(
        "group",
        vec![Value::string(exposed.label.as_str())],
        vec![Statement::var(
            "public_configs",
            Value::strings([format!(":{}", exposed.config_name)]),
        )],
    )
}

/// The full declaration sequence for `dep`.
pub fn build_declarations(dep: &DependencyInfo) -> Document {
    DeclarationBuilder::new(dep).include_config().runtime_path_config().library_configs().build()
}

/// Configs and group labels `dep` declares, in file order.
pub fn exposed_configs(dep: &DependencyInfo) -> Vec<ExposedConfig> {
    DeclarationBuilder::new(dep)
        .include_config()
        .runtime_path_config()
        .library_configs()
        .exposed()
        .to_vec()
}

/// Render the GN file for `dep`.
pub fn render_build_file(dep: &DependencyInfo) -> String {
    let text = build_declarations(dep).render();
    tracing::debug!(
        target: "generator",
        "Rendered {} bytes for dependency {}",
        text.len(),
        dep.name
    );
    text
}
