//! `Controller` class decorator

use tracing::debug;

use super::ClassDecorator;
use crate::error::DecorateError;
use crate::metadata::{ClassRef, ControllerDescriptor, MetadataStore};

/// Marks a class as a controller with an optional route prefix
///
/// Controllers are services too, so the class is also marked injectable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controller {
    descriptor: ControllerDescriptor,
}

impl Controller {
    /// Controller with a route prefix; same as `with_options` with only `prefix` set
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            descriptor: ControllerDescriptor::with_prefix(prefix),
        }
    }

    /// Controller without a prefix
    pub fn root() -> Self {
        Self::default()
    }

    /// Controller from the full options record
    pub fn with_options(options: ControllerDescriptor) -> Self {
        Self {
            descriptor: options,
        }
    }
}

impl From<&str> for Controller {
    fn from(prefix: &str) -> Self {
        Controller::new(prefix)
    }
}

impl From<ControllerDescriptor> for Controller {
    fn from(options: ControllerDescriptor) -> Self {
        Controller::with_options(options)
    }
}

impl ClassDecorator for Controller {
    fn name(&self) -> &'static str {
        "Controller"
    }

    fn decorate_class(&self, store: &mut MetadataStore, class: ClassRef) -> Result<(), DecorateError> {
        debug!(class = %class, prefix = ?self.descriptor.prefix, "controller declared");
        store.mark_injectable(class);
        store.set_controller(class, self.descriptor.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UsersController;

    #[test]
    fn test_prefix_string_equals_options() {
        let class = ClassRef::of::<UsersController>();

        let mut a = MetadataStore::new();
        Controller::new("users").decorate_class(&mut a, class).unwrap();
        let mut b = MetadataStore::new();
        Controller::with_options(ControllerDescriptor::with_prefix("users"))
            .decorate_class(&mut b, class)
            .unwrap();

        assert_eq!(a.controller(class), b.controller(class));
        assert_eq!(a.controller(class).and_then(|c| c.prefix.as_deref()), Some("users"));
    }

    #[test]
    fn test_controller_is_injectable() {
        let class = ClassRef::of::<UsersController>();
        let mut store = MetadataStore::new();
        Controller::root().decorate_class(&mut store, class).unwrap();

        assert!(store.is_injectable(class));
        assert_eq!(store.controller(class), Some(&ControllerDescriptor::default()));
    }
}
