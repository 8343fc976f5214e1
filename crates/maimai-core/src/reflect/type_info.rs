//! Static type information for parameters and return values
//!
//! Purely descriptive: nothing in the core checks arguments against it.

use serde::Serialize;

use crate::metadata::ClassRef;

/// Type kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// Primitive types (number, boolean, string, void, ...)
    Primitive,
    /// Declared class types
    Class,
    /// Union types
    Union,
    /// Function types
    Function,
    /// Array types
    Array,
    /// Generic types with arguments
    Generic,
}

/// Declared type of a parameter, return value or member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeInfo {
    pub kind: TypeKind,
    pub name: String,
    /// Class reference (for class types)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<ClassRef>,
    /// Element type (for arrays)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_type: Option<Box<TypeInfo>>,
    /// Union member types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub union_members: Option<Vec<TypeInfo>>,
    /// Type arguments (for generics)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<Vec<TypeInfo>>,
}

impl TypeInfo {
    fn bare(kind: TypeKind, name: String) -> Self {
        Self {
            kind,
            name,
            class: None,
            element_type: None,
            union_members: None,
            type_arguments: None,
        }
    }

    /// Create a primitive type info
    pub fn primitive(name: &str) -> Self {
        Self::bare(TypeKind::Primitive, name.to_string())
    }

    /// Create a class type info for a declared class
    pub fn class(class: ClassRef) -> Self {
        Self {
            class: Some(class),
            ..Self::bare(TypeKind::Class, class.name().to_string())
        }
    }

    /// Class type info for the Rust type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::class(ClassRef::of::<T>())
    }

    /// Create an array type info
    pub fn array(element_type: TypeInfo) -> Self {
        Self {
            element_type: Some(Box::new(element_type.clone())),
            ..Self::bare(TypeKind::Array, format!("{}[]", element_type.name))
        }
    }

    /// Create a union type info
    pub fn union(members: Vec<TypeInfo>) -> Self {
        let name = members
            .iter()
            .map(|m| m.name.as_str())
            .collect::<Vec<_>>()
            .join(" | ");
        Self {
            union_members: Some(members),
            ..Self::bare(TypeKind::Union, name)
        }
    }

    /// Create a generic type info (`Record<string, string>`)
    pub fn generic(name: &str, arguments: Vec<TypeInfo>) -> Self {
        let args = arguments
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            type_arguments: Some(arguments),
            ..Self::bare(TypeKind::Generic, format!("{}<{}>", name, args))
        }
    }

    /// The type every method carries as its own design type
    pub fn function() -> Self {
        Self::bare(TypeKind::Function, "Function".to_string())
    }

    pub fn void() -> Self {
        Self::primitive("void")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CreateUserDto;

    #[test]
    fn test_names() {
        assert_eq!(TypeInfo::primitive("number").name, "number");
        assert_eq!(TypeInfo::array(TypeInfo::primitive("string")).name, "string[]");
        assert_eq!(
            TypeInfo::union(vec![TypeInfo::primitive("string"), TypeInfo::primitive("number")]).name,
            "string | number"
        );
        assert_eq!(
            TypeInfo::generic(
                "Record",
                vec![TypeInfo::primitive("string"), TypeInfo::primitive("string")]
            )
            .name,
            "Record<string, string>"
        );
    }

    #[test]
    fn test_class_type() {
        let ty = TypeInfo::of::<CreateUserDto>();
        assert_eq!(ty.kind, TypeKind::Class);
        assert_eq!(ty.name, "CreateUserDto");
        assert_eq!(ty.class, Some(ClassRef::of::<CreateUserDto>()));
    }
}
