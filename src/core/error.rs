//! Error handling for gngen
//!
//! The error system follows two rules:
//! 1. **Strongly-typed errors** ([`GnGenError`]) for the failure modes code needs
//!    to tell apart.
//! 2. **User-friendly messages** ([`ErrorContext`]) with a suggestion and details
//!    when the CLI reports a failure.
//!
//! The GN model and the declaration builder never fail; every variant here comes
//! from loading input, reading configuration, or writing generated files.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gngen_cli::core::{GnGenError, ErrorContext, user_friendly_error};
//!
//! let err = GnGenError::InputNotFound {
//!     path: "conanbuildinfo.json".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(err));
//! ctx.display();
//!
//! let ctx = ErrorContext::new(GnGenError::ConfigError {
//!     message: "max_parallel must be at least 1".to_string(),
//! })
//! .with_suggestion("Set max_parallel to a positive number in gngen.toml");
//! println!("{ctx}");
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for gngen operations.
///
/// # Error Categories
///
/// - **Input**: [`InputNotFound`], [`InputParseError`], [`UnsupportedInputFormat`],
///   [`InvalidDependency`], [`DuplicateDependency`], [`DependencyNotFound`]
/// - **Configuration**: [`ConfigError`], [`ConfigNotFound`]
/// - **File system**: [`FileSystemError`], [`PermissionDenied`]
///
/// [`InputNotFound`]: GnGenError::InputNotFound
/// [`InputParseError`]: GnGenError::InputParseError
/// [`UnsupportedInputFormat`]: GnGenError::UnsupportedInputFormat
/// [`InvalidDependency`]: GnGenError::InvalidDependency
/// [`DuplicateDependency`]: GnGenError::DuplicateDependency
/// [`DependencyNotFound`]: GnGenError::DependencyNotFound
/// [`ConfigError`]: GnGenError::ConfigError
/// [`ConfigNotFound`]: GnGenError::ConfigNotFound
/// [`FileSystemError`]: GnGenError::FileSystemError
/// [`PermissionDenied`]: GnGenError::PermissionDenied
#[derive(Error, Debug)]
pub enum GnGenError {
    /// Build-info input file does not exist
    #[error("Build info file not found: {path}")]
    InputNotFound {
        /// Path that was looked up
        path: String,
    },

    /// Build-info input could not be parsed
    #[error("Invalid build info syntax in {file}")]
    InputParseError {
        /// Path to the file that failed to parse
        file: String,
        /// Parser message
        reason: String,
    },

    /// Build-info file extension is not one we can read
    #[error("Unsupported build info format: {path}")]
    UnsupportedInputFormat {
        /// Path with the unrecognised extension
        path: String,
    },

    /// A dependency breaks the input contract
    ///
    /// Raised for names that cannot be used as a directory and for any string
    /// that would break GN quoting (embedded `"`, newline or trailing `\`).
    #[error("Invalid dependency '{name}': {reason}")]
    InvalidDependency {
        /// Dependency name as given in the input
        name: String,
        /// What is wrong with it
        reason: String,
    },

    /// The same dependency name appears twice
    #[error("Dependency '{name}' is listed more than once")]
    DuplicateDependency {
        /// The repeated name
        name: String,
    },

    /// A requested dependency is not in the build info
    #[error("Dependency '{name}' not found in build info")]
    DependencyNotFound {
        /// The requested name
        name: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// Config file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path to the configuration file that was not found
        path: String,
    },

    /// File system error
    #[error("File system error: {operation}")]
    FileSystemError {
        /// The file system operation that failed
        operation: String,
        /// Path where the file system error occurred
        path: String,
    },

    /// Permission denied
    #[error("Permission denied: {operation}")]
    PermissionDenied {
        /// The operation that was denied due to insufficient permissions
        operation: String,
        /// Path where permission was denied
        path: String,
    },

    /// Other error
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl Clone for GnGenError {
    fn clone(&self) -> Self {
        match self {
            Self::InputNotFound {
                path,
            } => Self::InputNotFound {
                path: path.clone(),
            },
            Self::InputParseError {
                file,
                reason,
            } => Self::InputParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::UnsupportedInputFormat {
                path,
            } => Self::UnsupportedInputFormat {
                path: path.clone(),
            },
            Self::InvalidDependency {
                name,
                reason,
            } => Self::InvalidDependency {
                name: name.clone(),
                reason: reason.clone(),
            },
            Self::DuplicateDependency {
                name,
            } => Self::DuplicateDependency {
                name: name.clone(),
            },
            Self::DependencyNotFound {
                name,
            } => Self::DependencyNotFound {
                name: name.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            Self::ConfigNotFound {
                path,
            } => Self::ConfigNotFound {
                path: path.clone(),
            },
            Self::FileSystemError {
                operation,
                path,
            } => Self::FileSystemError {
                operation: operation.clone(),
                path: path.clone(),
            },
            Self::PermissionDenied {
                operation,
                path,
            } => Self::PermissionDenied {
                operation: operation.clone(),
                path: path.clone(),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// When displayed, errors show:
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context about the error in yellow (optional)
/// 3. **Suggestion**: Actionable steps to resolve the issue in green (optional)
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: GnGenError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: GnGenError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Create an [`ErrorContext`] with only a suggestion.
    pub fn suggestion(suggestion: impl Into<String>) -> Self {
        Self {
            error: GnGenError::Other {
                message: String::new(),
            },
            suggestion: Some(suggestion.into()),
            details: None,
        }
    }

    /// Print the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Extension trait for converting [`GnGenError`] to [`anyhow::Error`] with context
pub trait IntoAnyhowWithContext {
    /// Convert the error to an [`anyhow::Error`] carrying `context`'s suggestion and details
    fn into_anyhow_with_context(self, context: ErrorContext) -> anyhow::Error;
}

impl IntoAnyhowWithContext for GnGenError {
    fn into_anyhow_with_context(self, context: ErrorContext) -> anyhow::Error {
        anyhow::Error::new(ErrorContext {
            error: self,
            suggestion: context.suggestion,
            details: context.details,
        })
    }
}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognises, anywhere in the error chain:
/// - an [`ErrorContext`] that was already attached
/// - [`GnGenError`] variants, with tailored suggestions
/// - [`std::io::Error`] kinds that commonly come from writing output
/// - [`toml::de::Error`] from reading a configuration file
///
/// Anything else is reported with its full context chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(ctx) = cause.downcast_ref::<ErrorContext>() {
            return ErrorContext {
                error: ctx.error.clone(),
                suggestion: ctx.suggestion.clone(),
                details: ctx.details.clone(),
            };
        }
        if let Some(gn_error) = cause.downcast_ref::<GnGenError>() {
            return create_error_context(gn_error.clone());
        }
    }

    for cause in error.chain() {
        if let Some(io_error) = cause.downcast_ref::<std::io::Error>() {
            match io_error.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    return ErrorContext::new(GnGenError::PermissionDenied {
                        operation: "file access".to_string(),
                        path: "unknown".to_string(),
                    })
                    .with_suggestion("Check that the output directory is writable or choose another one with --output-dir")
                    .with_details(format!("{error:#}"));
                }
                std::io::ErrorKind::NotFound => {
                    return ErrorContext::new(GnGenError::FileSystemError {
                        operation: "file access".to_string(),
                        path: "unknown".to_string(),
                    })
                    .with_suggestion("Check that the file or directory exists and the path is correct")
                    .with_details(format!("{error:#}"));
                }
                _ => {}
            }
        }

        if let Some(toml_error) = cause.downcast_ref::<toml::de::Error>() {
            return ErrorContext::new(GnGenError::Other {
                message: format!("TOML parsing error: {toml_error}"),
            })
            .with_suggestion("Check the TOML syntax. Verify quotes, brackets, and table headers");
        }
    }

    ErrorContext::new(GnGenError::Other {
        message: format!("{error:#}"),
    })
}

fn create_error_context(error: GnGenError) -> ErrorContext {
    match &error {
        GnGenError::InputNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Pass the build info file with --input, e.g. --input conanbuildinfo.json")
            .with_details("gngen reads resolved dependencies from a JSON or TOML build info file"),
        GnGenError::InputParseError {
            reason,
            ..
        } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_suggestion("Check the file syntax and that each dependency has a 'name'")
                .with_details(details)
        }
        GnGenError::UnsupportedInputFormat {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Use a file ending in .json or .toml"),
        GnGenError::InvalidDependency {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Fix the dependency metadata in the build info file")
            .with_details(
                "Names must be usable as a directory name and no value may contain '\"', a newline or a trailing '\\'",
            ),
        GnGenError::DuplicateDependency {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Remove the repeated entry; each dependency gets exactly one directory"),
        GnGenError::DependencyNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Run 'gngen deps --input <file>' to list the available dependencies"),
        GnGenError::ConfigError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check gngen.toml or the file passed with --config"),
        GnGenError::ConfigNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check the path passed with --config"),
        GnGenError::FileSystemError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check that the output directory exists and is a directory"),
        GnGenError::PermissionDenied {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check that the output directory is writable or choose another one with --output-dir"),
        _ => ErrorContext::new(error),
    }
}
