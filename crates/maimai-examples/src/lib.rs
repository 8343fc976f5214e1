//! Maimai Examples
//!
//! The sample user application declared through `maimai-core`, plus the
//! rendering and logging pieces used by the `maimai-routes` binary.

pub mod admin;
pub mod components;
pub mod logging;
pub mod report;
pub mod users;

use maimai_core::metadata::ClassRef;
use maimai_core::{DecorateError, MetadataRegistry, RegistryConfig};

/// Registry with every sample class declared
pub fn sample_registry(config: RegistryConfig) -> Result<MetadataRegistry, DecorateError> {
    let mut registry = MetadataRegistry::with_config(config);
    users::declare(&mut registry)?;
    admin::declare(&mut registry)?;
    Ok(registry)
}

/// Classes carrying routes or controller metadata, sorted by name
pub fn routed_classes(registry: &MetadataRegistry) -> Vec<ClassRef> {
    let reflector = registry.reflector();
    let mut classes: Vec<ClassRef> = registry
        .classes()
        .iter()
        .map(|info| info.class)
        .filter(|&class| {
            reflector.is_controller(class) || !registry.store().route_list(class).is_empty()
        })
        .collect();
    classes.sort_by_key(|class| class.name());
    classes
}
