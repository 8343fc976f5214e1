//! Cross-checks between declared metadata and the class table
//!
//! Findings are collected into a [`ValidationReport`]; nothing here raises.
//! Callers that want to refuse a bad declaration at bootstrap use
//! [`ValidationReport::ensure_valid`].

use rustc_hash::FxHashSet;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::ValidationConfig;
use crate::error::ValidationFailed;
use crate::metadata::{ClassRef, MetadataStore};
use crate::reflect::ClassTable;

/// Fatal finding
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// A route names a handler the class does not declare
    #[error("Route handler {handler} not found")]
    MissingHandler { handler: String },

    /// More parameters are decorated than the handler declares
    #[error("Handler {handler} has {decorated} parameter decorators but only {declared} parameters")]
    ParameterOverflow {
        handler: String,
        /// Highest decorated position plus one
        decorated: usize,
        declared: usize,
    },
}

/// Non-fatal finding
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationWarning {
    #[error("Controller has no routes")]
    NoRoutes,

    #[error("Routes declared on a class without controller metadata")]
    RoutesWithoutController,
}

/// Findings for one class
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// True iff there are no errors; warnings do not count
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Gate on the report
    ///
    /// Fails when there are errors, or when there are warnings and
    /// `fail_on_warnings` is set.
    pub fn ensure_valid(
        &self,
        class: ClassRef,
        config: &ValidationConfig,
    ) -> Result<(), ValidationFailed> {
        let warnings_fatal = config.fail_on_warnings && !self.warnings.is_empty();
        if self.is_valid() && !warnings_fatal {
            return Ok(());
        }
        Err(ValidationFailed {
            class: class.name().to_string(),
            errors: self.errors.clone(),
            warnings: self.warnings.clone(),
        })
    }
}

/// Validate the routes and parameter decorators declared on `class`
///
/// Handlers are looked up in the class table; a class with no table entry
/// declares no methods, so every route on it names a missing handler.
/// Arity is checked once per distinct handler and never for a missing one.
pub fn validate_decorators(
    store: &MetadataStore,
    classes: &ClassTable,
    class: ClassRef,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    let info = classes.get(class);
    let routes = store.route_list(class);
    let is_controller = store.controller(class).is_some();

    if is_controller && routes.is_empty() {
        report.warnings.push(ValidationWarning::NoRoutes);
    }
    if !is_controller && !routes.is_empty() {
        report.warnings.push(ValidationWarning::RoutesWithoutController);
    }

    let mut checked = FxHashSet::default();
    for route in &routes {
        let Some(method) = info
            .and_then(|info| info.method(&route.handler))
            .filter(|method| !method.is_static)
        else {
            report.errors.push(ValidationError::MissingHandler {
                handler: route.handler.clone(),
            });
            continue;
        };

        if !checked.insert(route.handler.as_str()) {
            continue;
        }
        let decorated = store.params(class, &route.handler).map_or(0, |p| p.len());
        if decorated > method.arity() {
            report.errors.push(ValidationError::ParameterOverflow {
                handler: route.handler.clone(),
                decorated,
                declared: method.arity(),
            });
        }
    }

    debug!(
        class = %class,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validated decorators"
    );
    report
}
