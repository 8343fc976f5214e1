//! Metadata addresses
//!
//! A class is identified by the `TypeId` of the Rust type it was declared
//! for. The short type name is carried along for display and serialization
//! only; equality and hashing use the `TypeId` alone.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

/// Strip the module path from a `std::any::type_name` string, keeping any
/// generic arguments intact (`a::b::Repo<c::User>` becomes `Repo<c::User>`).
fn short_type_name(full: &'static str) -> &'static str {
    let head_end = full.find('<').unwrap_or(full.len());
    match full[..head_end].rfind("::") {
        Some(pos) => &full[pos + 2..],
        None => full,
    }
}

/// Identity of a declared class
#[derive(Clone, Copy)]
pub struct ClassRef {
    id: TypeId,
    name: &'static str,
    path: &'static str,
}

impl ClassRef {
    /// Class reference for the Rust type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        let path = std::any::type_name::<T>();
        Self {
            id: TypeId::of::<T>(),
            name: short_type_name(path),
            path,
        }
    }

    /// Display name of the class
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fully qualified type path (`app::users::UserController`)
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Underlying type identity
    pub fn type_id(&self) -> TypeId {
        self.id
    }
}

impl PartialEq for ClassRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ClassRef {}

impl Hash for ClassRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassRef({})", self.name)
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for ClassRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// Opaque reference to a guard, interceptor, pipe or middleware type
///
/// The core never invokes these; it only records and orders them.
#[derive(Clone, Copy)]
pub struct ComponentRef {
    id: TypeId,
    name: &'static str,
}

impl ComponentRef {
    /// Component reference for the Rust type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: short_type_name(std::any::type_name::<T>()),
        }
    }

    /// Display name of the component type
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Underlying type identity
    pub fn type_id(&self) -> TypeId {
        self.id
    }
}

impl PartialEq for ComponentRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ComponentRef {}

impl Hash for ComponentRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for ComponentRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// Build a `Vec<ComponentRef>` from a list of types
///
/// ```ignore
/// UseGuards::new(components![AuthGuard, RoleGuard])
/// ```
#[macro_export]
macro_rules! components {
    ($($ty:ty),* $(,)?) => {
        ::std::vec![$($crate::metadata::ComponentRef::of::<$ty>()),*]
    };
}

/// A metadata address: a class, or a member of a class
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// Class-scope address
    Class(ClassRef),
    /// Member-scope address
    Member(ClassRef, String),
}

impl Target {
    /// Member-scope address for `member` of `class`
    pub fn member(class: ClassRef, member: impl Into<String>) -> Self {
        Target::Member(class, member.into())
    }

    /// The class part of the address
    pub fn class(&self) -> ClassRef {
        match self {
            Target::Class(class) | Target::Member(class, _) => *class,
        }
    }

    /// The member part of the address, if any
    pub fn member_name(&self) -> Option<&str> {
        match self {
            Target::Class(_) => None,
            Target::Member(_, member) => Some(member),
        }
    }
}

impl From<ClassRef> for Target {
    fn from(class: ClassRef) -> Self {
        Target::Class(class)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Class(class) => write!(f, "{}", class),
            Target::Member(class, member) => write!(f, "{}.{}", class, member),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UserController;
    struct Repo<T>(T);

    #[test]
    fn test_short_names() {
        assert_eq!(ClassRef::of::<UserController>().name(), "UserController");
        assert_eq!(
            ClassRef::of::<Repo<UserController>>().name(),
            short_type_name(std::any::type_name::<Repo<UserController>>())
        );
        assert!(ClassRef::of::<Repo<UserController>>().name().starts_with("Repo<"));
    }

    #[test]
    fn test_identity_by_type() {
        assert_eq!(ClassRef::of::<UserController>(), ClassRef::of::<UserController>());
        assert_ne!(ClassRef::of::<UserController>(), ClassRef::of::<Repo<u8>>());
    }

    #[test]
    fn test_target_display() {
        let class = ClassRef::of::<UserController>();
        assert_eq!(Target::Class(class).to_string(), "UserController");
        assert_eq!(Target::member(class, "findOne").to_string(), "UserController.findOne");
        assert_eq!(Target::member(class, "findOne").member_name(), Some("findOne"));
    }

    #[test]
    fn test_components_macro() {
        struct AuthGuard;
        struct RoleGuard;
        let refs = components![AuthGuard, RoleGuard];
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].name(), "AuthGuard");
        assert_eq!(refs[1].name(), "RoleGuard");
    }
}
