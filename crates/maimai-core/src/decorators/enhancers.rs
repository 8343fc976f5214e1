//! Guard, interceptor, pipe and middleware decorators
//!
//! Applied to a class they extend the class-scope list; applied to a method
//! they extend that method's list. Repeated application accumulates in call
//! order and never replaces an earlier list. Middleware is class scope only.

use tracing::debug;

use super::{ClassDecorator, MethodDecorator};
use crate::error::DecorateError;
use crate::metadata::{ClassRef, ComponentKind, ComponentRef, MetadataStore};

macro_rules! component_decorator {
    ($(#[$doc:meta])* $name:ident => $kind:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(Vec<ComponentRef>);

        impl $name {
            pub fn new(refs: impl IntoIterator<Item = ComponentRef>) -> Self {
                Self(refs.into_iter().collect())
            }

            pub fn refs(&self) -> &[ComponentRef] {
                &self.0
            }
        }

        impl ClassDecorator for $name {
            fn name(&self) -> &'static str {
                stringify!($name)
            }

            fn decorate_class(&self, store: &mut MetadataStore, class: ClassRef) -> Result<(), DecorateError> {
                debug!(class = %class, kind = ?$kind, count = self.0.len(), "class components declared");
                store.append_components($kind, class, None, &self.0);
                Ok(())
            }
        }
    };
}

macro_rules! member_scope {
    ($name:ident => $kind:expr) => {
        impl MethodDecorator for $name {
            fn name(&self) -> &'static str {
                stringify!($name)
            }

            fn decorate_method(
                &self,
                store: &mut MetadataStore,
                class: ClassRef,
                member: &str,
            ) -> Result<(), DecorateError> {
                debug!(class = %class, member, kind = ?$kind, count = self.0.len(), "method components declared");
                store.append_components($kind, class, Some(member), &self.0);
                Ok(())
            }
        }
    };
}

component_decorator!(
    /// Guards protecting a controller or a single route
    UseGuards => ComponentKind::Guard
);
component_decorator!(
    /// Interceptors wrapping handler invocation
    UseInterceptors => ComponentKind::Interceptor
);
component_decorator!(
    /// Pipes transforming handler arguments
    UsePipes => ComponentKind::Pipe
);
component_decorator!(
    /// Middleware for a whole controller
    UseMiddleware => ComponentKind::Middleware
);

member_scope!(UseGuards => ComponentKind::Guard);
member_scope!(UseInterceptors => ComponentKind::Interceptor);
member_scope!(UsePipes => ComponentKind::Pipe);
