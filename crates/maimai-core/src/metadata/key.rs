//! Metadata keys
//!
//! Each key selects one column of the registry. The set is closed except for
//! `Custom`, which callers use for their own columns.

use std::fmt;

use serde::Serialize;

/// A registry column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MetadataKey {
    /// Class is injectable (`Flag`)
    Injectable,
    /// Injection scope and token (`Injectable`)
    InjectableOptions,
    /// Controller descriptor (`Controller`)
    Controller,
    /// Route descriptors owned by a controller (`Routes`)
    Routes,
    /// Positional parameter descriptors of a member (`Params`)
    Params,
    /// Guard list (`Components`)
    Guards,
    /// Interceptor list (`Components`)
    Interceptors,
    /// Pipe list (`Components`)
    Pipes,
    /// Middleware list, class scope only (`Components`)
    Middleware,
    /// Caller-defined column
    Custom(&'static str),
}

impl MetadataKey {
    /// Stable display name of the key
    pub fn name(&self) -> &'static str {
        match self {
            MetadataKey::Injectable => "maimai:injectable",
            MetadataKey::InjectableOptions => "maimai:injectable-options",
            MetadataKey::Controller => "maimai:route-prefix",
            MetadataKey::Routes => "maimai:routes",
            MetadataKey::Params => "maimai:params",
            MetadataKey::Guards => "maimai:guards",
            MetadataKey::Interceptors => "maimai:interceptors",
            MetadataKey::Pipes => "maimai:pipes",
            MetadataKey::Middleware => "maimai:middleware",
            MetadataKey::Custom(name) => *name,
        }
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The accumulating component lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Access control, evaluated before the handler
    Guard,
    /// Wraps handler invocation
    Interceptor,
    /// Transforms handler arguments
    Pipe,
    /// Runs before routing reaches the controller
    Middleware,
}

impl ComponentKind {
    /// Registry column holding this list
    pub fn key(self) -> MetadataKey {
        match self {
            ComponentKind::Guard => MetadataKey::Guards,
            ComponentKind::Interceptor => MetadataKey::Interceptors,
            ComponentKind::Pipe => MetadataKey::Pipes,
            ComponentKind::Middleware => MetadataKey::Middleware,
        }
    }
}
