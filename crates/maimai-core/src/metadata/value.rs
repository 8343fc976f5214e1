//! Metadata values
//!
//! List-valued metadata lives in a `SharedList`. Cloning a `SharedList` (and
//! therefore cloning a `MetadataValue`) clones the reference, not the
//! elements: both copies observe in-place writes made through either one.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use super::{ComponentRef, ControllerDescriptor, InjectableOptions, ParameterDescriptor, RouteDescriptor};

/// Reference-counted list with interior mutability
pub struct SharedList<T> {
    inner: Arc<RwLock<Vec<T>>>,
}

impl<T> SharedList<T> {
    /// Empty list
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// List owning `items`
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(items)),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Append in place; visible through every alias
    pub fn push(&self, item: T) {
        self.inner.write().push(item);
    }

    /// Run `f` over the current contents
    pub fn with<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.inner.read())
    }

    /// Whether both lists share the same storage
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone> SharedList<T> {
    /// Copy of the current contents
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.read().clone()
    }

    /// New list with its own storage and the same contents
    pub fn detached(&self) -> Self {
        Self::from_vec(self.to_vec())
    }

    /// New list holding `self` followed by `other`
    pub fn concat(&self, other: &Self) -> Self {
        let mut items = self.to_vec();
        items.extend(other.to_vec());
        Self::from_vec(items)
    }
}

impl<T> SharedList<Option<T>> {
    /// Write `item` at `index`, padding with empty slots; last write wins
    ///
    /// Storage is dense, so callers bound `index` (parameter decorators stop
    /// at `MAX_PARAMETER_INDEX`).
    pub fn set_slot(&self, index: usize, item: T) {
        let mut slots = self.inner.write();
        if slots.len() <= index {
            slots.resize_with(index + 1, || None);
        }
        slots[index] = Some(item);
    }
}

impl<T> Clone for SharedList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for SharedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.inner.read() == *other.inner.read()
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.read().iter()).finish()
    }
}

impl<T: Serialize> Serialize for SharedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let items = self.inner.read();
        let mut seq = serializer.serialize_seq(Some(items.len()))?;
        for item in items.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

/// A value stored under a metadata key
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Flag(bool),
    Injectable(InjectableOptions),
    Controller(ControllerDescriptor),
    Routes(SharedList<RouteDescriptor>),
    /// Sparse, indexed by parameter position
    Params(SharedList<Option<ParameterDescriptor>>),
    Components(SharedList<ComponentRef>),
    Text(String),
    Json(serde_json::Value),
}

impl MetadataValue {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            MetadataValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_injectable(&self) -> Option<&InjectableOptions> {
        match self {
            MetadataValue::Injectable(options) => Some(options),
            _ => None,
        }
    }

    pub fn as_controller(&self) -> Option<&ControllerDescriptor> {
        match self {
            MetadataValue::Controller(descriptor) => Some(descriptor),
            _ => None,
        }
    }

    pub fn as_routes(&self) -> Option<&SharedList<RouteDescriptor>> {
        match self {
            MetadataValue::Routes(routes) => Some(routes),
            _ => None,
        }
    }

    pub fn as_params(&self) -> Option<&SharedList<Option<ParameterDescriptor>>> {
        match self {
            MetadataValue::Params(params) => Some(params),
            _ => None,
        }
    }

    pub fn as_components(&self) -> Option<&SharedList<ComponentRef>> {
        match self {
            MetadataValue::Components(components) => Some(components),
            _ => None,
        }
    }

    /// Copy of this value whose lists no longer alias the source value
    pub fn detached(&self) -> Self {
        match self {
            MetadataValue::Routes(routes) => MetadataValue::Routes(routes.detached()),
            MetadataValue::Params(params) => MetadataValue::Params(params.detached()),
            MetadataValue::Components(components) => {
                MetadataValue::Components(components.detached())
            }
            other => other.clone(),
        }
    }

    /// Combine an ancestor's value with a descendant's
    ///
    /// Lists concatenate (base first) into fresh storage. Parameter lists
    /// merge slot by slot. Descriptors, options and JSON objects merge field
    /// by field. In every case the derived side wins a conflict, and a pair
    /// of different shapes yields `derived`.
    pub fn merge(base: &Self, derived: &Self) -> Self {
        use MetadataValue::*;

        match (base, derived) {
            (Routes(base), Routes(derived)) => Routes(base.concat(derived)),
            (Components(base), Components(derived)) => Components(base.concat(derived)),
            (Params(base), Params(derived)) => {
                let mut slots = base.to_vec();
                let overrides = derived.to_vec();
                if slots.len() < overrides.len() {
                    slots.resize(overrides.len(), None);
                }
                for (slot, param) in slots.iter_mut().zip(overrides) {
                    if param.is_some() {
                        *slot = param;
                    }
                }
                Params(SharedList::from_vec(slots))
            }
            (Controller(base), Controller(derived)) => Controller(ControllerDescriptor {
                prefix: derived.prefix.clone().or_else(|| base.prefix.clone()),
                guards: derived.guards.clone().or_else(|| base.guards.clone()),
                interceptors: derived.interceptors.clone().or_else(|| base.interceptors.clone()),
                middleware: derived.middleware.clone().or_else(|| base.middleware.clone()),
            }),
            (Injectable(base), Injectable(derived)) => Injectable(InjectableOptions {
                scope: derived.scope.or(base.scope),
                token: derived.token.clone().or_else(|| base.token.clone()),
            }),
            (Json(serde_json::Value::Array(base)), Json(serde_json::Value::Array(derived))) => {
                Json(serde_json::Value::Array(base.iter().chain(derived).cloned().collect()))
            }
            (Json(serde_json::Value::Object(base)), Json(serde_json::Value::Object(derived))) => {
                let mut fields = base.clone();
                fields.extend(derived.iter().map(|(k, v)| (k.clone(), v.clone())));
                Json(serde_json::Value::Object(fields))
            }
            _ => derived.detached(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ParamSource;

    #[test]
    fn test_clone_aliases_storage() {
        let list = SharedList::from_vec(vec![1, 2]);
        let alias = list.clone();
        alias.push(3);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert!(list.ptr_eq(&alias));
    }

    #[test]
    fn test_detached_copy() {
        let list = SharedList::from_vec(vec![1, 2]);
        let copy = list.detached();
        copy.push(3);
        assert_eq!(list.to_vec(), vec![1, 2]);
        assert_eq!(copy.to_vec(), vec![1, 2, 3]);
        assert!(!list.ptr_eq(&copy));
    }

    #[test]
    fn test_set_slot_pads_and_overwrites() {
        let slots: SharedList<Option<&str>> = SharedList::new();
        slots.set_slot(2, "c");
        assert_eq!(slots.to_vec(), vec![None, None, Some("c")]);

        slots.set_slot(0, "a");
        slots.set_slot(2, "z");
        assert_eq!(slots.to_vec(), vec![Some("a"), None, Some("z")]);
    }

    #[test]
    fn test_value_accessors() {
        let flag = MetadataValue::Flag(true);
        assert_eq!(flag.as_flag(), Some(true));
        assert!(flag.as_routes().is_none());

        let text = MetadataValue::Text("x".into());
        assert!(text.as_flag().is_none());
    }

    #[test]
    fn test_merge_lists_concatenate_into_fresh_storage() {
        let base = SharedList::from_vec(vec![1, 2]);
        let derived = SharedList::from_vec(vec![3]);
        let merged = base.concat(&derived);

        assert_eq!(merged.to_vec(), vec![1, 2, 3]);
        assert!(!merged.ptr_eq(&base));
        merged.push(4);
        assert_eq!(base.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_merge_params_by_position() {
        let param = |index, source| ParameterDescriptor {
            index,
            source,
            key: None,
            pipe: None,
        };
        let base = MetadataValue::Params(SharedList::from_vec(vec![
            Some(param(0, ParamSource::Body)),
            Some(param(1, ParamSource::Query)),
        ]));
        let derived = MetadataValue::Params(SharedList::from_vec(vec![
            None,
            Some(param(1, ParamSource::Param)),
            Some(param(2, ParamSource::Header)),
        ]));

        let merged = MetadataValue::merge(&base, &derived);
        let sources: Vec<Option<ParamSource>> = merged
            .as_params()
            .map(SharedList::to_vec)
            .unwrap_or_default()
            .iter()
            .map(|p| p.as_ref().map(|p| p.source))
            .collect();
        assert_eq!(
            sources,
            vec![Some(ParamSource::Body), Some(ParamSource::Param), Some(ParamSource::Header)]
        );
    }

    #[test]
    fn test_merge_descriptor_fields() {
        let base = MetadataValue::Controller(ControllerDescriptor::with_prefix("api"));
        let derived = MetadataValue::Controller(ControllerDescriptor::default());
        let merged = MetadataValue::merge(&base, &derived);
        assert_eq!(
            merged.as_controller().and_then(|c| c.prefix.as_deref()),
            Some("api")
        );

        let base = MetadataValue::Json(serde_json::json!({"a": 1, "b": 1}));
        let derived = MetadataValue::Json(serde_json::json!({"b": 2}));
        assert_eq!(
            MetadataValue::merge(&base, &derived),
            MetadataValue::Json(serde_json::json!({"a": 1, "b": 2}))
        );
    }

    #[test]
    fn test_merge_mismatched_shapes_takes_derived() {
        let base = MetadataValue::Text("base".into());
        let derived = MetadataValue::Flag(true);
        assert_eq!(MetadataValue::merge(&base, &derived), derived);
    }
}
