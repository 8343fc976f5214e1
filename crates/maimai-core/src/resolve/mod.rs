//! Route Resolution Engine
//!
//! Read-side logic over the metadata store: path composition, full routes,
//! effective component chains, structural validation, and the ancestor walk
//! used for inheritance reporting. Every result is recomputed from the
//! current store state; nothing here caches.

mod inherit;
mod path;
mod routes;
mod validate;

pub use inherit::{carries_metadata, metadata_ancestors};
pub use path::join_paths;
pub use routes::{effective_chain, full_routes, EffectiveChains};
pub use validate::{validate_decorators, ValidationError, ValidationReport, ValidationWarning};
