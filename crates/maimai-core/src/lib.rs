//! Maimai Core
//!
//! Declarative controller metadata for the maimai web framework:
//! - **Metadata**: class-scope and member-scope key-value store (`metadata` module)
//! - **Reflect**: static class, method and type descriptions (`reflect` module)
//! - **Decorators**: controller, route, parameter and enhancer decorators (`decorators` module)
//! - **Resolve**: path composition, effective chains, validation (`resolve` module)
//! - **Reflection**: resolved views and the dispatcher route table (`reflection` module)
//!
//! # Example
//!
//! ```rust,ignore
//! use maimai_core::prelude::*;
//!
//! let mut registry = MetadataRegistry::new();
//! let users = registry
//!     .declare(ClassInfo::of::<UserController>().with_method(MethodInfo::new("findAll")))
//!     .decorate(Controller::new("api/users"))
//!     .method("findAll", |m| m.decorate(Get::root()))
//!     .finish()?;
//!
//! for entry in registry.reflector().route_table(users) {
//!     println!("{} {} -> {}", entry.method, entry.full_path, entry.handler);
//! }
//! ```

#![warn(rust_2018_idioms)]

// ============================================================================
// Core Modules
// ============================================================================

pub mod metadata;

pub mod reflect;

pub mod decorators;

pub mod resolve;

pub mod reflection;

// ============================================================================
// Ambient
// ============================================================================

pub mod config;

pub mod error;

mod registry;

pub use config::{CoreConfig, LogFormat, LogLevel, LoggingConfig, RegistryConfig, ValidationConfig};
pub use error::{ConfigError, DecorateError, ValidationFailed};
pub use registry::MetadataRegistry;

/// Everything needed to declare and resolve controllers
pub mod prelude {
    pub use crate::components;
    pub use crate::decorators::{
        Body, Context, Controller, Delete, Get, Head, Header, Injectable, Options, Param, Patch,
        Post, Put, Query, Request, Response, RouteOptions, UseGuards, UseInterceptors,
        UseMiddleware, UsePipes,
    };
    pub use crate::metadata::{
        ClassRef, ComponentRef, ControllerDescriptor, HttpMethod, InjectableOptions,
        InjectionScope, InjectionToken, ParamSource, Target,
    };
    pub use crate::reflect::{ClassInfo, ConstructorInfo, MethodInfo, TypeInfo};
    pub use crate::reflection::Reflector;
    pub use crate::MetadataRegistry;
}
