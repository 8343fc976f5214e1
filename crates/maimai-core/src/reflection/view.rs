//! Resolved views
//!
//! Derived on every call from the current registry state and never stored.

use serde::Serialize;

use crate::metadata::{
    ClassRef, ComponentRef, ControllerDescriptor, FullRoute, HttpMethod, ParamSource,
    ParameterDescriptor, RouteDescriptor,
};
use crate::reflect::TypeInfo;
use crate::resolve::EffectiveChains;

/// Everything known about one method
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedMethod {
    pub name: String,
    /// First route whose handler is this method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteDescriptor>,
    /// Sparse, position-indexed
    pub params: Vec<Option<ParameterDescriptor>>,
    #[serde(flatten)]
    pub chains: EffectiveChains,
    /// Declared parameter types; empty when the class table does not know
    /// the method
    pub parameter_types: Vec<TypeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeInfo>,
}

/// Everything known about one class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedClass {
    pub class: ClassRef,
    pub is_injectable: bool,
    pub is_controller: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller: Option<ControllerDescriptor>,
    pub guards: Vec<ComponentRef>,
    pub interceptors: Vec<ComponentRef>,
    pub pipes: Vec<ComponentRef>,
    pub middleware: Vec<ComponentRef>,
    pub routes: Vec<RouteDescriptor>,
    pub full_routes: Vec<FullRoute>,
    /// One entry per declared instance method, in declaration order
    pub methods: Vec<ResolvedMethod>,
}

impl ResolvedClass {
    pub fn method(&self, name: &str) -> Option<&ResolvedMethod> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// Controller descriptor with its routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerRoutes {
    /// Empty descriptor when the class is not a controller
    pub controller: ControllerDescriptor,
    pub routes: Vec<RouteDescriptor>,
    pub full_routes: Vec<FullRoute>,
}

/// One decorated parameter joined with its declared type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterMapping {
    pub index: usize,
    pub source: ParamSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// `None` when no type is declared at this position
    pub parameter_type: Option<TypeInfo>,
    pub decorator: ParameterDescriptor,
}

/// A route as the dispatcher binds it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteTableEntry {
    pub method: HttpMethod,
    pub full_path: String,
    pub handler: String,
    pub guards: Vec<ComponentRef>,
    pub interceptors: Vec<ComponentRef>,
    pub pipes: Vec<ComponentRef>,
    pub parameters: Vec<Option<ParameterDescriptor>>,
}

/// Ancestor metadata reported next to a class's own view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InheritanceReport {
    pub own: ResolvedClass,
    /// Nearest ancestor first
    pub inherited: Vec<InheritedEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InheritedEntry {
    pub class: ClassRef,
    pub metadata: ResolvedClass,
}
