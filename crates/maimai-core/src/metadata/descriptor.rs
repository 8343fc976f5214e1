//! Descriptor records stored in the registry

use std::fmt;

use serde::Serialize;

use super::ComponentRef;

/// HTTP method of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpMethod {
    /// Every supported method, in declaration order
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Head,
        HttpMethod::Options,
    ];

    /// Upper-case method name
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a handler argument is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamSource {
    Body,
    Query,
    Param,
    Header,
    Context,
    Request,
    Response,
}

impl ParamSource {
    /// Lower-case source name
    pub fn as_str(self) -> &'static str {
        match self {
            ParamSource::Body => "body",
            ParamSource::Query => "query",
            ParamSource::Param => "param",
            ParamSource::Header => "header",
            ParamSource::Context => "context",
            ParamSource::Request => "request",
            ParamSource::Response => "response",
        }
    }
}

impl fmt::Display for ParamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A route declared on a controller method
///
/// The lists stored here are the ones given inline at route declaration; they
/// are composed after the class and method lists, never instead of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    pub path: String,
    pub method: HttpMethod,
    /// Name of the handling member
    pub handler: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guards: Option<Vec<ComponentRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interceptors: Option<Vec<ComponentRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipes: Option<Vec<ComponentRef>>,
}

impl RouteDescriptor {
    /// Route without inline components
    pub fn new(method: HttpMethod, path: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            handler: handler.into(),
            guards: None,
            interceptors: None,
            pipes: None,
        }
    }
}

/// How one handler argument is produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDescriptor {
    /// Absolute parameter position
    pub index: usize,
    pub source: ParamSource,
    /// Sub-field name (`id` in `@Param("id")`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipe: Option<ComponentRef>,
}

/// Controller declaration, also accepted as the options form of `Controller`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ControllerDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guards: Option<Vec<ComponentRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interceptors: Option<Vec<ComponentRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middleware: Option<Vec<ComponentRef>>,
}

impl ControllerDescriptor {
    /// Descriptor with only a prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            ..Self::default()
        }
    }

    /// Set the prefix
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the descriptor-level guards
    pub fn guards(mut self, guards: Vec<ComponentRef>) -> Self {
        self.guards = Some(guards);
        self
    }

    /// Set the descriptor-level interceptors
    pub fn interceptors(mut self, interceptors: Vec<ComponentRef>) -> Self {
        self.interceptors = Some(interceptors);
        self
    }

    /// Set the descriptor-level middleware
    pub fn middleware(mut self, middleware: Vec<ComponentRef>) -> Self {
        self.middleware = Some(middleware);
        self
    }
}

/// Lifetime of instances created by the DI container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectionScope {
    Singleton,
    Transient,
    Request,
}

/// Lookup token used by the DI container instead of the class itself
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum InjectionToken {
    Named(String),
    Type(ComponentRef),
}

impl InjectionToken {
    /// String token
    pub fn named(name: impl Into<String>) -> Self {
        InjectionToken::Named(name.into())
    }

    /// Type token
    pub fn of<T: ?Sized + 'static>() -> Self {
        InjectionToken::Type(ComponentRef::of::<T>())
    }
}

/// Options given to `Injectable`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InjectableOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<InjectionScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<InjectionToken>,
}

impl InjectableOptions {
    /// Set the scope
    pub fn scope(mut self, scope: InjectionScope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Set the token
    pub fn token(mut self, token: InjectionToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Whether anything worth storing was supplied
    pub fn is_empty(&self) -> bool {
        self.scope.is_none() && self.token.is_none()
    }
}

/// A route with its composed path; derived on every read, never stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullRoute {
    #[serde(flatten)]
    pub route: RouteDescriptor,
    pub full_path: String,
}
