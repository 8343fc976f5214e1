//! Ancestor walk for inheritance reporting

use crate::metadata::{ClassRef, MetadataStore};
use crate::reflect::ClassTable;

/// Whether `class` carries metadata worth reporting on a descendant: it is a
/// controller, an injectable, or declares at least one route
pub fn carries_metadata(store: &MetadataStore, class: ClassRef) -> bool {
    store.controller(class).is_some()
        || store.is_injectable(class)
        || store.routes(class).is_some_and(|routes| !routes.is_empty())
}

/// Ancestors of `class` that carry metadata, nearest first
///
/// The walk follows the parent links of the class table and stops at the
/// first ancestor that carries nothing; further ancestors are not examined
/// even if they would qualify.
pub fn metadata_ancestors(
    store: &MetadataStore,
    classes: &ClassTable,
    class: ClassRef,
) -> Vec<ClassRef> {
    classes
        .ancestors(class)
        .into_iter()
        .take_while(|&ancestor| carries_metadata(store, ancestor))
        .collect()
}
