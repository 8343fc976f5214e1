//! Metadata Registry
//!
//! A key-value store with two address spaces per class: class scope and
//! member scope. Everything above this module reads and writes through
//! [`MetadataStore`].
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = MetadataStore::new();
//! let class = ClassRef::of::<UserController>();
//!
//! store.set_class_metadata(MetadataKey::Custom("version"), MetadataValue::Text("v1".into()), class);
//! store.append_components(ComponentKind::Guard, class, Some("findOne"), &components![RoleGuard]);
//!
//! assert!(store.has_metadata(MetadataKey::Guards, class, Some("findOne")));
//! ```

mod descriptor;
mod key;
mod store;
mod target;
mod value;

pub use descriptor::{
    ControllerDescriptor, FullRoute, HttpMethod, InjectableOptions, InjectionScope,
    InjectionToken, ParamSource, ParameterDescriptor, RouteDescriptor,
};
pub use key::{ComponentKind, MetadataKey};
pub use store::{CloneMode, MetadataStore};
pub use target::{ClassRef, ComponentRef, Target};
pub use value::{MetadataValue, SharedList};
