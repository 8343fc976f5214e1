//! Controller hierarchy used to demonstrate inheritance reporting
//!
//! `AdminUserController` extends `CrudController`, which extends the plain
//! `Repository`, which extends the injectable `AuditService`. The report for
//! `AdminUserController` lists `CrudController` only: `Repository` carries no
//! metadata, so the walk ends there.

use maimai_core::prelude::*;
use maimai_core::DecorateError;

use crate::components::{AdminGuard, ParseIntPipe};

pub struct AuditService;
pub struct Repository;
pub struct CrudController;
pub struct AdminUserController;

/// Declare the hierarchy, returning `AdminUserController`
pub fn declare(registry: &mut MetadataRegistry) -> Result<ClassRef, DecorateError> {
    registry
        .declare(ClassInfo::of::<AuditService>().with_method(MethodInfo::new("record")))
        .decorate(Injectable::with_options(
            InjectableOptions::default().token(InjectionToken::named("audit")),
        ))
        .finish()?;

    registry
        .declare(ClassInfo::of::<Repository>().extends(ClassRef::of::<AuditService>()))
        .finish()?;

    registry
        .declare(
            ClassInfo::of::<CrudController>()
                .extends(ClassRef::of::<Repository>())
                .with_method(MethodInfo::new("list").returns(TypeInfo::array(TypeInfo::primitive("object"))))
                .with_method(MethodInfo::new("health").returns(TypeInfo::primitive("string"))),
        )
        .method("list", |m| m.decorate(Get::root()))
        .method("health", |m| m.decorate(Head::new("/health")))
        .finish()?;

    registry
        .declare(
            ClassInfo::of::<AdminUserController>()
                .extends(ClassRef::of::<CrudController>())
                .with_method(MethodInfo::new("ban").param("id", TypeInfo::primitive("number")))
                .with_method(MethodInfo::new("options")),
        )
        .decorate(Controller::with_options(
            ControllerDescriptor::with_prefix("/admin/users/").guards(components![AdminGuard]),
        ))
        .decorate(UseGuards::new(components![AdminGuard]))
        .method("ban", |m| {
            m.decorate(Post::new("/:id/ban"))
                .param(0, Param::key("id").pipe(ComponentRef::of::<ParseIntPipe>()))
        })
        .method("options", |m| m.decorate(Options::root()))
        .finish()
}
