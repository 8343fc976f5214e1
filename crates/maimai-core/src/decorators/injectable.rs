//! `Injectable` class decorator

use tracing::debug;

use super::ClassDecorator;
use crate::error::DecorateError;
use crate::metadata::{ClassRef, InjectableOptions, MetadataStore};

/// Marks a class as an injectable service
///
/// Options are stored only when a scope or token is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Injectable {
    options: InjectableOptions,
}

impl Injectable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: InjectableOptions) -> Self {
        Self { options }
    }
}

impl ClassDecorator for Injectable {
    fn name(&self) -> &'static str {
        "Injectable"
    }

    fn decorate_class(&self, store: &mut MetadataStore, class: ClassRef) -> Result<(), DecorateError> {
        debug!(class = %class, scope = ?self.options.scope, "injectable declared");
        store.mark_injectable(class);
        if !self.options.is_empty() {
            store.set_injectable_options(class, self.options.clone());
        }
        Ok(())
    }
}
