//! Decorator Composition Layer
//!
//! Decorators are plain values. Each one translates into registry writes when
//! applied to a class, a method, or a method parameter. The traits a
//! decorator implements decide where it may be applied: `Controller` is only
//! a [`ClassDecorator`], `Get` is only a [`MethodDecorator`], `UseGuards` is
//! both.
//!
//! Declarations are applied through [`ClassDeclaration`], obtained from
//! `MetadataRegistry::declare`:
//!
//! ```ignore
//! registry
//!     .declare(ClassInfo::of::<UserController>().with_method(find_one))
//!     .decorate(Controller::new("api/users"))
//!     .decorate(UseGuards::new(components![AuthGuard]))
//!     .method("findOne", |m| {
//!         m.decorate(Get::new("/:id"))
//!             .decorate(UseGuards::new(components![RoleGuard]))
//!             .param(0, Param::key("id"))
//!     })
//!     .finish()?;
//! ```

mod controller;
mod declaration;
mod enhancers;
mod http;
mod injectable;
mod params;

pub use controller::Controller;
pub use declaration::{ClassDeclaration, MethodDeclaration};
pub use enhancers::{UseGuards, UseInterceptors, UseMiddleware, UsePipes};
pub use http::{Delete, Get, Head, Options, Patch, Post, Put, RouteDecorator, RouteOptions};
pub use injectable::Injectable;
pub use params::{
    Body, Context, Header, Param, ParamDecorator, Query, Request, Response, MAX_PARAMETER_INDEX,
};

use crate::error::DecorateError;
use crate::metadata::{ClassRef, MetadataStore};

/// A decorator applicable to a class
pub trait ClassDecorator {
    /// Decorator name, for diagnostics
    fn name(&self) -> &'static str;

    fn decorate_class(&self, store: &mut MetadataStore, class: ClassRef) -> Result<(), DecorateError>;
}

/// A decorator applicable to a method
pub trait MethodDecorator {
    /// Decorator name, for diagnostics
    fn name(&self) -> &'static str;

    fn decorate_method(
        &self,
        store: &mut MetadataStore,
        class: ClassRef,
        member: &str,
    ) -> Result<(), DecorateError>;
}

/// A decorator applicable to a parameter
pub trait ParameterDecorator {
    /// Decorator name, for diagnostics
    fn name(&self) -> &'static str;

    fn decorate_parameter(
        &self,
        store: &mut MetadataStore,
        site: &ParameterSite<'_>,
    ) -> Result<(), DecorateError>;
}

/// Where a parameter decorator is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSite<'a> {
    pub class: ClassRef,
    /// Enclosing method; `None` for constructor parameters
    pub member: Option<&'a str>,
    /// Absolute parameter position
    pub index: usize,
}

impl<'a> ParameterSite<'a> {
    /// Parameter of a method
    pub fn method(class: ClassRef, member: &'a str, index: usize) -> Self {
        Self {
            class,
            member: Some(member),
            index,
        }
    }

    /// Parameter of the constructor
    pub fn constructor(class: ClassRef, index: usize) -> Self {
        Self {
            class,
            member: None,
            index,
        }
    }
}
