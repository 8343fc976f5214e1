//! Metadata registry
//!
//! Owns the metadata store and the class table. Declarations go through
//! [`MetadataRegistry::declare`]; reads go through [`MetadataRegistry::reflector`].

use tracing::debug;

use crate::config::RegistryConfig;
use crate::decorators::ClassDeclaration;
use crate::metadata::{MetadataStore, Target};
use crate::reflect::{ClassInfo, ClassTable};
use crate::reflection::Reflector;

/// Store plus class table for one application
#[derive(Debug, Default)]
pub struct MetadataRegistry {
    store: MetadataStore,
    classes: ClassTable,
    config: RegistryConfig,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn store(&self) -> &MetadataStore {
        &self.store
    }

    /// Direct write access, for metadata outside the decorator set
    pub fn store_mut(&mut self) -> &mut MetadataStore {
        &mut self.store
    }

    pub fn classes(&self) -> &ClassTable {
        &self.classes
    }

    /// Register `info` and start declaring decorators on its class
    ///
    /// Declaring a class again replaces its description; metadata already
    /// written for it is kept and accumulates.
    pub fn declare(&mut self, info: ClassInfo) -> ClassDeclaration<'_> {
        let class = self.classes.register(info);
        debug!(class = %class, "declaring class");
        ClassDeclaration::new(&mut self.store, class)
    }

    /// Copy every key at `source` to `dest` using the configured clone mode
    pub fn clone_metadata(&mut self, source: &Target, dest: &Target) {
        self.store.clone_metadata(source, dest, self.config.clone_mode);
    }

    pub fn reflector(&self) -> Reflector<'_> {
        Reflector::new(&self.store, &self.classes)
    }
}
