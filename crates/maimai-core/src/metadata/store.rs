//! Metadata Storage
//!
//! Two address spaces per class: class-scope metadata (key -> value) and
//! member-scope metadata (member -> key -> value). Records are created lazily
//! on first write and live as long as the store.
//!
//! The store performs no locking of its own. All declarations are expected to
//! complete before resolution reads begin; writing through a shared list
//! alias while another caller iterates a resolved view is undefined from the
//! caller's point of view.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{
    ClassRef, ComponentKind, ComponentRef, ControllerDescriptor, InjectableOptions, MetadataKey,
    MetadataValue, ParameterDescriptor, RouteDescriptor, SharedList, Target,
};

type KeyMap = FxHashMap<MetadataKey, MetadataValue>;

/// How `clone_metadata` copies list values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloneMode {
    /// Copy references; lists stay aliased between source and destination
    #[default]
    Shared,
    /// Copy list contents into fresh storage
    Detached,
}

/// Metadata storage for a single class
#[derive(Debug, Default)]
struct TargetMetadata {
    /// Class-scope metadata
    direct: KeyMap,
    /// Member-scope metadata (member -> key -> value)
    members: FxHashMap<String, KeyMap>,
}

/// Class and member metadata keyed by `MetadataKey`
#[derive(Debug, Default)]
pub struct MetadataStore {
    targets: FxHashMap<ClassRef, TargetMetadata>,
}

impl MetadataStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn key_map(&self, class: ClassRef, member: Option<&str>) -> Option<&KeyMap> {
        let entry = self.targets.get(&class)?;
        match member {
            Some(member) => entry.members.get(member),
            None => Some(&entry.direct),
        }
    }

    fn key_map_mut(&mut self, class: ClassRef, member: Option<&str>) -> &mut KeyMap {
        let entry = self.targets.entry(class).or_default();
        match member {
            Some(member) => entry.members.entry(member.to_string()).or_default(),
            None => &mut entry.direct,
        }
    }

    // ========================================================================
    // Class-scope metadata
    // ========================================================================

    /// Set metadata on a class, replacing any previous value for `key`
    pub fn set_class_metadata(&mut self, key: MetadataKey, value: MetadataValue, class: ClassRef) {
        trace!(class = %class, key = %key, "set class metadata");
        self.key_map_mut(class, None).insert(key, value);
    }

    /// Get class metadata (no fallback to ancestors)
    pub fn get_class_metadata(&self, key: MetadataKey, class: ClassRef) -> Option<&MetadataValue> {
        self.key_map(class, None)?.get(&key)
    }

    // ========================================================================
    // Member-scope metadata
    // ========================================================================

    /// Set metadata on a class member, replacing any previous value for `key`
    pub fn set_member_metadata(
        &mut self,
        key: MetadataKey,
        value: MetadataValue,
        class: ClassRef,
        member: &str,
    ) {
        trace!(class = %class, member, key = %key, "set member metadata");
        self.key_map_mut(class, Some(member)).insert(key, value);
    }

    /// Get member metadata
    pub fn get_member_metadata(
        &self,
        key: MetadataKey,
        class: ClassRef,
        member: &str,
    ) -> Option<&MetadataValue> {
        self.key_map(class, Some(member))?.get(&key)
    }

    // ========================================================================
    // Either scope
    // ========================================================================

    /// Read `key` at an explicit address
    pub fn get(&self, key: MetadataKey, target: &Target) -> Option<&MetadataValue> {
        self.key_map(target.class(), target.member_name())?.get(&key)
    }

    /// Write `key` at an explicit address
    pub fn set(&mut self, key: MetadataKey, value: MetadataValue, target: &Target) {
        match target.member_name() {
            Some(member) => self.set_member_metadata(key, value, target.class(), member),
            None => self.set_class_metadata(key, value, target.class()),
        }
    }

    /// Check if `key` is present at an address
    pub fn has_metadata(&self, key: MetadataKey, class: ClassRef, member: Option<&str>) -> bool {
        self.key_map(class, member)
            .is_some_and(|keys| keys.contains_key(&key))
    }

    /// Remove `key`; returns true if a value existed and was removed
    pub fn delete_metadata(&mut self, key: MetadataKey, class: ClassRef, member: Option<&str>) -> bool {
        let Some(entry) = self.targets.get_mut(&class) else {
            return false;
        };
        let keys = match member {
            Some(member) => match entry.members.get_mut(member) {
                Some(keys) => keys,
                None => return false,
            },
            None => &mut entry.direct,
        };
        let removed = keys.remove(&key).is_some();
        if removed {
            trace!(class = %class, member, key = %key, "deleted metadata");
        }
        removed
    }

    /// All keys currently populated at an address
    pub fn metadata_keys(&self, class: ClassRef, member: Option<&str>) -> FxHashSet<MetadataKey> {
        self.key_map(class, member)
            .map(|keys| keys.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Copy every key at `source` to `dest`
    ///
    /// With `CloneMode::Shared` list values are copied by reference: an
    /// in-place write (route append, parameter write) through either address
    /// is visible at both until one side replaces the key entirely. Component
    /// accumulation always replaces the key, so it detaches the alias.
    pub fn clone_metadata(&mut self, source: &Target, dest: &Target, mode: CloneMode) {
        let Some(keys) = self.key_map(source.class(), source.member_name()) else {
            return;
        };
        let copied: Vec<(MetadataKey, MetadataValue)> = keys
            .iter()
            .map(|(key, value)| {
                let value = match mode {
                    CloneMode::Shared => value.clone(),
                    CloneMode::Detached => value.detached(),
                };
                (*key, value)
            })
            .collect();

        trace!(source = %source, dest = %dest, count = copied.len(), ?mode, "clone metadata");
        let dest_keys = self.key_map_mut(dest.class(), dest.member_name());
        for (key, value) in copied {
            dest_keys.insert(key, value);
        }
    }

    /// Merged view of `key` at an ancestor address and a descendant address
    ///
    /// Nothing is written back. Lists come out in fresh storage, so the
    /// result never aliases either side. `None` when neither side has `key`.
    pub fn merge_metadata(
        &self,
        key: MetadataKey,
        base: &Target,
        derived: &Target,
    ) -> Option<MetadataValue> {
        match (self.get(key, base), self.get(key, derived)) {
            (Some(base), Some(derived)) => Some(MetadataValue::merge(base, derived)),
            (Some(only), None) | (None, Some(only)) => Some(only.detached()),
            (None, None) => None,
        }
    }

    // ========================================================================
    // Typed accessors
    // ========================================================================

    /// Flag a class as injectable
    pub fn mark_injectable(&mut self, class: ClassRef) {
        self.set_class_metadata(MetadataKey::Injectable, MetadataValue::Flag(true), class);
    }

    /// Check the injectable flag
    pub fn is_injectable(&self, class: ClassRef) -> bool {
        self.get_class_metadata(MetadataKey::Injectable, class)
            .and_then(MetadataValue::as_flag)
            .unwrap_or(false)
    }

    /// Record provider options for an injectable class
    pub fn set_injectable_options(&mut self, class: ClassRef, options: InjectableOptions) {
        self.set_class_metadata(
            MetadataKey::InjectableOptions,
            MetadataValue::Injectable(options),
            class,
        );
    }

    /// Get provider options, if any were recorded
    pub fn injectable_options(&self, class: ClassRef) -> Option<&InjectableOptions> {
        self.get_class_metadata(MetadataKey::InjectableOptions, class)?
            .as_injectable()
    }

    /// Set the controller descriptor of a class
    pub fn set_controller(&mut self, class: ClassRef, descriptor: ControllerDescriptor) {
        self.set_class_metadata(
            MetadataKey::Controller,
            MetadataValue::Controller(descriptor),
            class,
        );
    }

    /// Get the controller descriptor
    pub fn controller(&self, class: ClassRef) -> Option<&ControllerDescriptor> {
        self.get_class_metadata(MetadataKey::Controller, class)?
            .as_controller()
    }

    /// Append a route to the class's route list, in place
    pub fn push_route(&mut self, class: ClassRef, route: RouteDescriptor) {
        trace!(class = %class, method = %route.method, path = %route.path, handler = %route.handler, "push route");
        if let Some(routes) = self
            .get_class_metadata(MetadataKey::Routes, class)
            .and_then(MetadataValue::as_routes)
        {
            routes.push(route);
            return;
        }
        self.set_class_metadata(
            MetadataKey::Routes,
            MetadataValue::Routes(SharedList::from_vec(vec![route])),
            class,
        );
    }

    /// Get the live route list of a class
    pub fn routes(&self, class: ClassRef) -> Option<&SharedList<RouteDescriptor>> {
        self.get_class_metadata(MetadataKey::Routes, class)?.as_routes()
    }

    /// Snapshot of the route list; empty when none were declared
    pub fn route_list(&self, class: ClassRef) -> Vec<RouteDescriptor> {
        self.routes(class).map(SharedList::to_vec).unwrap_or_default()
    }

    /// Write a parameter descriptor at its absolute position, in place
    pub fn set_param(&mut self, class: ClassRef, member: &str, descriptor: ParameterDescriptor) {
        trace!(class = %class, member, index = descriptor.index, source = %descriptor.source, "set param");
        let index = descriptor.index;
        if let Some(params) = self
            .get_member_metadata(MetadataKey::Params, class, member)
            .and_then(MetadataValue::as_params)
        {
            params.set_slot(index, descriptor);
            return;
        }
        let params = SharedList::new();
        params.set_slot(index, descriptor);
        self.set_member_metadata(MetadataKey::Params, MetadataValue::Params(params), class, member);
    }

    /// Get the live parameter list of a method
    pub fn params(
        &self,
        class: ClassRef,
        member: &str,
    ) -> Option<&SharedList<Option<ParameterDescriptor>>> {
        self.get_member_metadata(MetadataKey::Params, class, member)?
            .as_params()
    }

    /// Snapshot of the sparse parameter list; empty when none were declared
    pub fn param_list(&self, class: ClassRef, member: &str) -> Vec<Option<ParameterDescriptor>> {
        self.params(class, member)
            .map(SharedList::to_vec)
            .unwrap_or_default()
    }

    /// Component list at class scope (`member = None`) or member scope
    ///
    /// Absent lists read as empty.
    pub fn components(
        &self,
        kind: ComponentKind,
        class: ClassRef,
        member: Option<&str>,
    ) -> Vec<ComponentRef> {
        self.key_map(class, member)
            .and_then(|keys| keys.get(&kind.key()))
            .and_then(MetadataValue::as_components)
            .map(SharedList::to_vec)
            .unwrap_or_default()
    }

    /// Accumulate components: existing entries followed by `refs`
    ///
    /// Always stores a fresh list, never extends the existing one in place.
    pub fn append_components(
        &mut self,
        kind: ComponentKind,
        class: ClassRef,
        member: Option<&str>,
        refs: &[ComponentRef],
    ) {
        let mut combined = self.components(kind, class, member);
        combined.extend_from_slice(refs);
        let value = MetadataValue::Components(SharedList::from_vec(combined));
        match member {
            Some(member) => self.set_member_metadata(kind.key(), value, class, member),
            None => self.set_class_metadata(kind.key(), value, class),
        }
    }

    /// Number of classes with at least one record
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }
}
