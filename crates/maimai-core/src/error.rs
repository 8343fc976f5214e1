//! Error types for the maimai core
//!
//! Reads never fail: absent metadata is `None`. Errors only come from the
//! declaration phase, from loading configuration, and from gating bootstrap
//! on a validation report.

use std::path::PathBuf;

use thiserror::Error;

use crate::resolve::{ValidationError, ValidationWarning};

/// Structural misuse detected while a declaration is applied
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecorateError {
    /// A request parameter decorator was applied to a parameter that has no
    /// enclosing method (a constructor or bare function parameter)
    #[error("@{decorator} must be used on method parameters (class {class}, parameter {index})")]
    MissingMemberContext {
        /// Decorator name
        decorator: &'static str,
        /// Class being declared
        class: String,
        /// Parameter position
        index: usize,
    },

    /// A parameter position past `MAX_PARAMETER_INDEX`
    #[error("@{decorator} parameter index {index} exceeds the limit of {max} (class {class}, member {member})")]
    ParameterIndexOutOfRange {
        /// Decorator name
        decorator: &'static str,
        /// Class being declared
        class: String,
        /// Method owning the parameter
        member: String,
        /// Requested position
        index: usize,
        /// Highest accepted position
        max: usize,
    },

    /// A member name was empty
    #[error("empty member name in declaration of class {class}")]
    EmptyMemberName {
        /// Class being declared
        class: String,
    },
}

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A validation report that bootstrap refuses to accept
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("decorator validation failed for {class}: {} error(s), {} warning(s)", errors.len(), warnings.len())]
pub struct ValidationFailed {
    /// Class that was validated
    pub class: String,
    /// Errors from the report
    pub errors: Vec<ValidationError>,
    /// Warnings from the report (only fatal when escalated)
    pub warnings: Vec<ValidationWarning>,
}
