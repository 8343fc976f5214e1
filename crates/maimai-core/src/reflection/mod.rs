//! Reflection Facade
//!
//! Read API composing the store, the class table and the resolution engine
//! into per-method and per-class views. A [`Reflector`] borrows both sides
//! of a registry, so it can only exist once declarations are finished.

mod view;

pub use view::{
    ControllerRoutes, InheritanceReport, InheritedEntry, ParameterMapping, ResolvedClass,
    ResolvedMethod, RouteTableEntry,
};

use crate::metadata::{ClassRef, ComponentKind, InjectableOptions, MetadataStore};
use crate::reflect::{ClassTable, TypeInfo};
use crate::resolve::{
    full_routes, metadata_ancestors, validate_decorators, EffectiveChains, ValidationReport,
};

/// Read-only view over a store and its class table
#[derive(Debug, Clone, Copy)]
pub struct Reflector<'r> {
    store: &'r MetadataStore,
    classes: &'r ClassTable,
}

impl<'r> Reflector<'r> {
    pub fn new(store: &'r MetadataStore, classes: &'r ClassTable) -> Self {
        Self { store, classes }
    }

    // ========================================================================
    // Presence checks
    // ========================================================================

    pub fn is_controller(&self, class: ClassRef) -> bool {
        self.store.controller(class).is_some()
    }

    pub fn is_injectable(&self, class: ClassRef) -> bool {
        self.store.is_injectable(class)
    }

    /// Whether any route names `member` as its handler
    pub fn is_route_handler(&self, class: ClassRef, member: &str) -> bool {
        self.store
            .routes(class)
            .is_some_and(|routes| routes.with(|routes| routes.iter().any(|r| r.handler == member)))
    }

    pub fn injectable_options(&self, class: ClassRef) -> Option<&'r InjectableOptions> {
        self.store.injectable_options(class)
    }

    // ========================================================================
    // Static type information
    // ========================================================================

    /// Declared parameter types of a method; empty when unknown
    pub fn parameter_types(&self, class: ClassRef, member: &str) -> Vec<TypeInfo> {
        self.classes
            .get(class)
            .and_then(|info| info.method(member))
            .map(|method| method.parameter_types())
            .unwrap_or_default()
    }

    pub fn return_type(&self, class: ClassRef, member: &str) -> Option<TypeInfo> {
        let method = self.classes.get(class)?.method(member)?;
        Some(method.return_type.clone())
    }

    /// Type of the class itself, or of one of its methods
    pub fn design_type(&self, class: ClassRef, member: Option<&str>) -> Option<TypeInfo> {
        let info = self.classes.get(class)?;
        match member {
            Some(member) => info.method(member).map(|_| TypeInfo::function()),
            None => Some(TypeInfo::class(class)),
        }
    }

    /// Declared constructor parameter types; empty when unknown
    pub fn constructor_parameter_types(&self, class: ClassRef) -> Vec<TypeInfo> {
        self.classes
            .get(class)
            .and_then(|info| info.constructor.as_ref())
            .map(|ctor| ctor.parameters.iter().map(|p| p.type_info.clone()).collect())
            .unwrap_or_default()
    }

    /// Declared instance methods, in declaration order
    pub fn method_names(&self, class: ClassRef) -> Vec<String> {
        self.classes
            .get(class)
            .map(|info| info.callable_names())
            .unwrap_or_default()
    }

    // ========================================================================
    // Resolved views
    // ========================================================================

    pub fn resolved_method(&self, class: ClassRef, member: &str) -> ResolvedMethod {
        let route = self.store.routes(class).and_then(|routes| {
            routes.with(|routes| routes.iter().find(|r| r.handler == member).cloned())
        });
        let chains = EffectiveChains::resolve(self.store, class, member, route.as_ref());

        ResolvedMethod {
            name: member.to_string(),
            params: self.store.param_list(class, member),
            chains,
            parameter_types: self.parameter_types(class, member),
            return_type: self.return_type(class, member),
            route,
        }
    }

    pub fn resolved_class(&self, class: ClassRef) -> ResolvedClass {
        let methods = self
            .method_names(class)
            .iter()
            .map(|name| self.resolved_method(class, name))
            .collect();

        ResolvedClass {
            class,
            is_injectable: self.is_injectable(class),
            is_controller: self.is_controller(class),
            controller: self.store.controller(class).cloned(),
            guards: self.store.components(ComponentKind::Guard, class, None),
            interceptors: self.store.components(ComponentKind::Interceptor, class, None),
            pipes: self.store.components(ComponentKind::Pipe, class, None),
            middleware: self.store.components(ComponentKind::Middleware, class, None),
            routes: self.store.route_list(class),
            full_routes: full_routes(self.store, class),
            methods,
        }
    }

    pub fn controller_routes(&self, class: ClassRef) -> ControllerRoutes {
        ControllerRoutes {
            controller: self.store.controller(class).cloned().unwrap_or_default(),
            routes: self.store.route_list(class),
            full_routes: full_routes(self.store, class),
        }
    }

    /// Decorated parameters of a method joined with their declared types
    ///
    /// Positions without a decorator are skipped.
    pub fn analyze_parameter_mapping(&self, class: ClassRef, member: &str) -> Vec<ParameterMapping> {
        let types = self.parameter_types(class, member);
        self.store
            .param_list(class, member)
            .into_iter()
            .flatten()
            .map(|param| ParameterMapping {
                index: param.index,
                source: param.source,
                key: param.key.clone(),
                parameter_type: types.get(param.index).cloned(),
                decorator: param,
            })
            .collect()
    }

    /// Route table for the dispatcher, one entry per declared route
    ///
    /// Each entry's chains include that route's own inline lists, so two
    /// routes sharing a handler can differ.
    pub fn route_table(&self, class: ClassRef) -> Vec<RouteTableEntry> {
        full_routes(self.store, class)
            .into_iter()
            .map(|full| {
                let chains =
                    EffectiveChains::resolve(self.store, class, &full.route.handler, Some(&full.route));
                RouteTableEntry {
                    method: full.route.method,
                    parameters: self.store.param_list(class, &full.route.handler),
                    full_path: full.full_path,
                    handler: full.route.handler,
                    guards: chains.guards,
                    interceptors: chains.interceptors,
                    pipes: chains.pipes,
                }
            })
            .collect()
    }

    pub fn validate(&self, class: ClassRef) -> ValidationReport {
        validate_decorators(self.store, self.classes, class)
    }

    /// Own view plus the views of ancestors carrying metadata
    ///
    /// Informational only: ancestor metadata is never merged into `own`.
    pub fn inherited_metadata(&self, class: ClassRef) -> InheritanceReport {
        let inherited = metadata_ancestors(self.store, self.classes, class)
            .into_iter()
            .map(|ancestor| InheritedEntry {
                class: ancestor,
                metadata: self.resolved_class(ancestor),
            })
            .collect();

        InheritanceReport {
            own: self.resolved_class(class),
            inherited,
        }
    }
}
