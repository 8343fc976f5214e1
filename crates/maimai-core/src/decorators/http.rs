//! HTTP method decorators
//!
//! `Get`, `Post`, `Put`, `Delete`, `Patch`, `Head` and `Options` all build a
//! [`RouteDecorator`] for their method. Applying it appends one route to the
//! class's route list, with the decorated method as handler.

use tracing::debug;

use super::MethodDecorator;
use crate::error::DecorateError;
use crate::metadata::{ClassRef, ComponentRef, HttpMethod, MetadataStore, RouteDescriptor};

/// Options form of a route declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOptions {
    pub path: Option<String>,
    pub guards: Option<Vec<ComponentRef>>,
    pub interceptors: Option<Vec<ComponentRef>>,
    pub pipes: Option<Vec<ComponentRef>>,
}

impl RouteOptions {
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn guards(mut self, guards: Vec<ComponentRef>) -> Self {
        self.guards = Some(guards);
        self
    }

    pub fn interceptors(mut self, interceptors: Vec<ComponentRef>) -> Self {
        self.interceptors = Some(interceptors);
        self
    }

    pub fn pipes(mut self, pipes: Vec<ComponentRef>) -> Self {
        self.pipes = Some(pipes);
        self
    }
}

/// Route declaration for one HTTP method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDecorator {
    method: HttpMethod,
    options: RouteOptions,
}

impl RouteDecorator {
    pub fn new(method: HttpMethod, options: RouteOptions) -> Self {
        Self { method, options }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    fn descriptor(&self, handler: &str) -> RouteDescriptor {
        RouteDescriptor {
            path: self.options.path.clone().unwrap_or_default(),
            method: self.method,
            handler: handler.to_string(),
            guards: self.options.guards.clone(),
            interceptors: self.options.interceptors.clone(),
            pipes: self.options.pipes.clone(),
        }
    }
}

impl MethodDecorator for RouteDecorator {
    fn name(&self) -> &'static str {
        match self.method {
            HttpMethod::Get => "Get",
            HttpMethod::Post => "Post",
            HttpMethod::Put => "Put",
            HttpMethod::Delete => "Delete",
            HttpMethod::Patch => "Patch",
            HttpMethod::Head => "Head",
            HttpMethod::Options => "Options",
        }
    }

    fn decorate_method(
        &self,
        store: &mut MetadataStore,
        class: ClassRef,
        member: &str,
    ) -> Result<(), DecorateError> {
        let route = self.descriptor(member);
        debug!(class = %class, handler = member, method = %route.method, path = %route.path, "route declared");
        store.push_route(class, route);
        Ok(())
    }
}

macro_rules! http_method_decorator {
    ($(#[$doc:meta])* $name:ident => $method:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl $name {
            /// Route at `path`, relative to the controller prefix
            pub fn new(path: impl Into<String>) -> RouteDecorator {
                RouteDecorator::new($method, RouteOptions::default().path(path))
            }

            /// Route at the controller prefix itself (empty path)
            pub fn root() -> RouteDecorator {
                RouteDecorator::new($method, RouteOptions::default())
            }

            /// Route with inline guards, interceptors or pipes
            pub fn with_options(options: RouteOptions) -> RouteDecorator {
                RouteDecorator::new($method, options)
            }
        }
    };
}

http_method_decorator!(
    /// `GET` route
    Get => HttpMethod::Get
);
http_method_decorator!(
    /// `POST` route
    Post => HttpMethod::Post
);
http_method_decorator!(
    /// `PUT` route
    Put => HttpMethod::Put
);
http_method_decorator!(
    /// `DELETE` route
    Delete => HttpMethod::Delete
);
http_method_decorator!(
    /// `PATCH` route
    Patch => HttpMethod::Patch
);
http_method_decorator!(
    /// `HEAD` route
    Head => HttpMethod::Head
);
http_method_decorator!(
    /// `OPTIONS` route
    Options => HttpMethod::Options
);

#[cfg(test)]
mod tests {
    use super::*;

    struct UserController;
    struct AuthGuard;

    #[test]
    fn test_route_appended_with_handler() {
        let class = ClassRef::of::<UserController>();
        let mut store = MetadataStore::new();
        Get::root().decorate_method(&mut store, class, "findAll").unwrap();
        Get::new("/:id").decorate_method(&mut store, class, "findOne").unwrap();

        let routes = store.route_list(class);
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0], RouteDescriptor::new(HttpMethod::Get, "", "findAll"));
        assert_eq!(routes[1].path, "/:id");
        assert_eq!(routes[1].handler, "findOne");
    }

    #[test]
    fn test_inline_components_kept_on_descriptor() {
        let class = ClassRef::of::<UserController>();
        let mut store = MetadataStore::new();
        let auth = ComponentRef::of::<AuthGuard>();
        Post::with_options(RouteOptions::default().guards(vec![auth]))
            .decorate_method(&mut store, class, "create")
            .unwrap();

        let route = &store.route_list(class)[0];
        assert_eq!(route.method, HttpMethod::Post);
        assert_eq!(route.path, "");
        assert_eq!(route.guards, Some(vec![auth]));
        assert_eq!(route.pipes, None);
        assert!(store.components(crate::metadata::ComponentKind::Guard, class, Some("create")).is_empty());
    }

    #[test]
    fn test_decorator_names() {
        assert_eq!(MethodDecorator::name(&Delete::root()), "Delete");
        assert_eq!(Options::root().method(), HttpMethod::Options);
        assert_eq!(Head::new("x").method(), HttpMethod::Head);
    }
}
