//! Registry of declared class descriptions

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::warn;

use super::ClassInfo;
use crate::metadata::ClassRef;

/// Class descriptions indexed by class identity and by name
///
/// Short names may collide across modules. Such a name resolves to nothing
/// through `get_by_name`; the full type path still resolves.
#[derive(Debug, Default)]
pub struct ClassTable {
    classes: FxHashMap<ClassRef, ClassInfo>,
    /// Short class name to every class carrying it
    name_to_classes: FxHashMap<&'static str, Vec<ClassRef>>,
    /// Full type path to class mapping
    path_to_class: FxHashMap<&'static str, ClassRef>,
}

impl ClassTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class description, replacing an earlier one for the same class
    pub fn register(&mut self, info: ClassInfo) -> ClassRef {
        let class = info.class;
        let named = self.name_to_classes.entry(class.name()).or_default();
        if !named.contains(&class) {
            if let Some(first) = named.first() {
                warn!(
                    name = class.name(),
                    first = first.path(),
                    second = class.path(),
                    "ambiguous class name; look it up by full path"
                );
            }
            named.push(class);
        }
        self.path_to_class.insert(class.path(), class);
        self.classes.insert(class, info);
        class
    }

    /// Get class description
    pub fn get(&self, class: ClassRef) -> Option<&ClassInfo> {
        self.classes.get(&class)
    }

    /// Get class by full type path, or by short name when exactly one
    /// registered class carries it
    pub fn get_by_name(&self, name: &str) -> Option<&ClassInfo> {
        let class = match self.path_to_class.get(name) {
            Some(class) => *class,
            None => match self.name_to_classes.get(name)?.as_slice() {
                [class] => *class,
                _ => return None,
            },
        };
        self.classes.get(&class)
    }

    /// Every registered class whose short name is `name`
    pub fn classes_named(&self, name: &str) -> &[ClassRef] {
        self.name_to_classes.get(name).map_or(&[], Vec::as_slice)
    }

    /// Check if a class has been registered
    pub fn contains(&self, class: ClassRef) -> bool {
        self.classes.contains_key(&class)
    }

    /// Direct parent of a registered class
    pub fn parent_of(&self, class: ClassRef) -> Option<ClassRef> {
        self.classes.get(&class)?.parent
    }

    /// Ancestors of `class`, nearest first
    ///
    /// Follows `parent` links until a class without a parent, or without a
    /// registered description, is reached. A repeated class ends the walk.
    pub fn ancestors(&self, class: ClassRef) -> Vec<ClassRef> {
        let mut seen = FxHashSet::default();
        seen.insert(class);

        let mut chain = Vec::new();
        let mut current = self.parent_of(class);
        while let Some(parent) = current {
            if !seen.insert(parent) {
                break;
            }
            chain.push(parent);
            current = self.parent_of(parent);
        }
        chain
    }

    /// Iterate over all registered descriptions
    pub fn iter(&self) -> impl Iterator<Item = &ClassInfo> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
