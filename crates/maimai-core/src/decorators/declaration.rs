//! Declaration builders
//!
//! A declaration applies decorators to one class in call order. The first
//! decoration error is kept; everything after it is skipped, and `finish`
//! reports it. Decorators applied before the error stay applied.

use tracing::debug;

use super::{ClassDecorator, MethodDecorator, ParameterDecorator, ParameterSite};
use crate::error::DecorateError;
use crate::metadata::{ClassRef, MetadataStore};

/// Declaration of one class
#[must_use = "a declaration reports errors only through `finish`"]
pub struct ClassDeclaration<'s> {
    store: &'s mut MetadataStore,
    class: ClassRef,
    applied: usize,
    error: Option<DecorateError>,
}

impl<'s> ClassDeclaration<'s> {
    pub(crate) fn new(store: &'s mut MetadataStore, class: ClassRef) -> Self {
        Self {
            store,
            class,
            applied: 0,
            error: None,
        }
    }

    /// Class being declared
    pub fn class(&self) -> ClassRef {
        self.class
    }

    /// Apply a class decorator
    pub fn decorate<D: ClassDecorator>(mut self, decorator: D) -> Self {
        if self.error.is_none() {
            match decorator.decorate_class(self.store, self.class) {
                Ok(()) => self.applied += 1,
                Err(err) => self.error = Some(err),
            }
        }
        self
    }

    /// Declare decorators on a method and its parameters
    pub fn method<F>(mut self, name: &str, declare: F) -> Self
    where
        F: FnOnce(MethodDeclaration<'_>) -> MethodDeclaration<'_>,
    {
        if self.error.is_some() {
            return self;
        }
        if name.is_empty() {
            self.error = Some(DecorateError::EmptyMemberName {
                class: self.class.name().to_string(),
            });
            return self;
        }

        let method = declare(MethodDeclaration::new(&mut *self.store, self.class, name));
        self.applied += method.applied;
        self.error = method.error;
        self
    }

    /// Apply a parameter decorator to a constructor parameter
    ///
    /// Request parameter decorators need an enclosing method, so this always
    /// fails for them; it exists so such misuse is reported, not hidden.
    pub fn constructor_param<D: ParameterDecorator>(mut self, index: usize, decorator: D) -> Self {
        if self.error.is_none() {
            let site = ParameterSite::constructor(self.class, index);
            match decorator.decorate_parameter(self.store, &site) {
                Ok(()) => self.applied += 1,
                Err(err) => self.error = Some(err),
            }
        }
        self
    }

    /// Finish the declaration
    pub fn finish(self) -> Result<ClassRef, DecorateError> {
        match self.error {
            Some(err) => {
                debug!(class = %self.class, error = %err, "declaration failed");
                Err(err)
            }
            None => {
                debug!(class = %self.class, decorators = self.applied, "class declared");
                Ok(self.class)
            }
        }
    }
}

/// Declaration of one method within a class declaration
#[must_use]
pub struct MethodDeclaration<'d> {
    store: &'d mut MetadataStore,
    class: ClassRef,
    member: String,
    applied: usize,
    error: Option<DecorateError>,
}

impl<'d> MethodDeclaration<'d> {
    fn new(store: &'d mut MetadataStore, class: ClassRef, member: &str) -> Self {
        Self {
            store,
            class,
            member: member.to_string(),
            applied: 0,
            error: None,
        }
    }

    /// Method being declared
    pub fn member(&self) -> &str {
        &self.member
    }

    /// Apply a method decorator
    pub fn decorate<D: MethodDecorator>(mut self, decorator: D) -> Self {
        if self.error.is_none() {
            match decorator.decorate_method(self.store, self.class, &self.member) {
                Ok(()) => self.applied += 1,
                Err(err) => self.error = Some(err),
            }
        }
        self
    }

    /// Apply a parameter decorator at absolute position `index`
    pub fn param<D: ParameterDecorator>(mut self, index: usize, decorator: D) -> Self {
        if self.error.is_none() {
            let site = ParameterSite::method(self.class, &self.member, index);
            match decorator.decorate_parameter(self.store, &site) {
                Ok(()) => self.applied += 1,
                Err(err) => self.error = Some(err),
            }
        }
        self
    }
}
