//! Class, method and parameter descriptions
//!
//! A `ClassInfo` is supplied once per class when it is declared. It stands in
//! for the runtime introspection other environments get for free: the list of
//! callable members, their parameter types and arity, the constructor
//! signature, and the parent class.

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::TypeInfo;
use crate::metadata::ClassRef;

/// Parameter information for reflection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterInfo {
    /// Parameter name
    pub name: String,
    /// Parameter type info
    pub type_info: TypeInfo,
    /// Parameter index
    pub index: usize,
    /// Whether the parameter is optional
    pub is_optional: bool,
}

/// Method information for reflection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodInfo {
    /// Method name
    pub name: String,
    /// Parameter infos, in declaration order
    pub parameters: Vec<ParameterInfo>,
    /// Return type info
    pub return_type: TypeInfo,
    /// Whether the method is static
    pub is_static: bool,
    /// Whether the method is async
    pub is_async: bool,
}

impl MethodInfo {
    /// Create a method with no parameters returning `void`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: TypeInfo::void(),
            is_static: false,
            is_async: false,
        }
    }

    /// Add a parameter at the next position
    pub fn param(mut self, name: impl Into<String>, type_info: TypeInfo) -> Self {
        let index = self.parameters.len();
        self.parameters.push(ParameterInfo {
            name: name.into(),
            type_info,
            index,
            is_optional: false,
        });
        self
    }

    /// Add an optional parameter at the next position
    pub fn optional_param(mut self, name: impl Into<String>, type_info: TypeInfo) -> Self {
        self = self.param(name, type_info);
        if let Some(last) = self.parameters.last_mut() {
            last.is_optional = true;
        }
        self
    }

    /// Set return type
    pub fn returns(mut self, type_info: TypeInfo) -> Self {
        self.return_type = type_info;
        self
    }

    /// Mark as static method
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark as async method
    pub fn as_async(mut self) -> Self {
        self.is_async = true;
        self
    }

    /// Declared parameter count
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Declared parameter types, in order
    pub fn parameter_types(&self) -> Vec<TypeInfo> {
        self.parameters.iter().map(|p| p.type_info.clone()).collect()
    }
}

/// Constructor information for reflection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConstructorInfo {
    /// Parameter infos, in declaration order
    pub parameters: Vec<ParameterInfo>,
}

impl ConstructorInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter at the next position
    pub fn param(mut self, name: impl Into<String>, type_info: TypeInfo) -> Self {
        let index = self.parameters.len();
        self.parameters.push(ParameterInfo {
            name: name.into(),
            type_info,
            index,
            is_optional: false,
        });
        self
    }
}

/// Static description of a declared class
#[derive(Debug, Clone, PartialEq)]
pub struct ClassInfo {
    /// The class described
    pub class: ClassRef,
    /// Direct parent class, if the class extends another declared class
    pub parent: Option<ClassRef>,
    /// Constructor info (if available)
    pub constructor: Option<ConstructorInfo>,
    /// Methods in declaration order
    methods: Vec<MethodInfo>,
    /// Method name to position in `methods`
    method_indices: FxHashMap<String, usize>,
}

impl ClassInfo {
    /// Create a description of `class` with no members
    pub fn new(class: ClassRef) -> Self {
        Self {
            class,
            parent: None,
            constructor: None,
            methods: Vec::new(),
            method_indices: FxHashMap::default(),
        }
    }

    /// Description of the Rust type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::new(ClassRef::of::<T>())
    }

    /// Set the parent class
    pub fn extends(mut self, parent: ClassRef) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Set the constructor
    pub fn with_constructor(mut self, constructor: ConstructorInfo) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Add a method; a method with the same name is replaced in place
    pub fn with_method(mut self, method: MethodInfo) -> Self {
        if let Some(&index) = self.method_indices.get(&method.name) {
            self.methods[index] = method;
        } else {
            self.method_indices
                .insert(method.name.clone(), self.methods.len());
            self.methods.push(method);
        }
        self
    }

    /// Get method by name
    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.method_indices.get(name).map(|&i| &self.methods[i])
    }

    /// All methods, in declaration order
    pub fn methods(&self) -> &[MethodInfo] {
        &self.methods
    }

    /// Check if an instance method with this name exists
    pub fn has_callable(&self, name: &str) -> bool {
        self.method(name).is_some_and(|m| !m.is_static)
    }

    /// Names of the instance methods, in declaration order
    pub fn callable_names(&self) -> Vec<String> {
        self.methods
            .iter()
            .filter(|m| !m.is_static)
            .map(|m| m.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UserController;
    struct BaseController;

    #[test]
    fn test_method_builder() {
        let method = MethodInfo::new("findOne")
            .param("id", TypeInfo::primitive("number"))
            .optional_param("ctx", TypeInfo::primitive("object"))
            .returns(TypeInfo::primitive("object"));

        assert_eq!(method.arity(), 2);
        assert_eq!(method.parameters[1].index, 1);
        assert!(method.parameters[1].is_optional);
        assert!(!method.parameters[0].is_optional);
        assert_eq!(method.return_type.name, "object");
    }

    #[test]
    fn test_class_methods() {
        let info = ClassInfo::of::<UserController>()
            .extends(ClassRef::of::<BaseController>())
            .with_method(MethodInfo::new("findAll"))
            .with_method(MethodInfo::new("create").param("data", TypeInfo::primitive("object")))
            .with_method(MethodInfo::new("build").as_static());

        assert_eq!(info.parent, Some(ClassRef::of::<BaseController>()));
        assert!(info.has_callable("findAll"));
        assert!(!info.has_callable("build"));
        assert!(!info.has_callable("missing"));
        assert_eq!(info.callable_names(), vec!["findAll", "create"]);
        assert_eq!(info.method("create").map(MethodInfo::arity), Some(1));
    }

    #[test]
    fn test_method_redeclaration_replaces() {
        let info = ClassInfo::of::<UserController>()
            .with_method(MethodInfo::new("findAll"))
            .with_method(MethodInfo::new("findAll").param("query", TypeInfo::primitive("object")));

        assert_eq!(info.methods().len(), 1);
        assert_eq!(info.method("findAll").map(MethodInfo::arity), Some(1));
    }
}
