//! User service and controller

use maimai_core::prelude::*;
use maimai_core::DecorateError;

use crate::components::{
    AuthGuard, CorsMiddleware, LoggingInterceptor, LoggingMiddleware, ParseIntPipe, RoleGuard,
    TransformInterceptor, ValidationPipe,
};

pub struct UserService;
pub struct UserController;

pub struct CreateUserDto;
pub struct UpdateUserDto;
pub struct User;

fn user_service_info() -> ClassInfo {
    ClassInfo::of::<UserService>()
        .with_method(MethodInfo::new("findAll").returns(TypeInfo::array(TypeInfo::of::<User>())))
        .with_method(
            MethodInfo::new("findOne")
                .param("id", TypeInfo::primitive("number"))
                .returns(TypeInfo::of::<User>()),
        )
}

fn user_controller_info() -> ClassInfo {
    let user = || TypeInfo::of::<User>();
    let id = || TypeInfo::primitive("number");
    let object = || TypeInfo::primitive("object");

    ClassInfo::of::<UserController>()
        .with_constructor(ConstructorInfo::new().param("userService", TypeInfo::of::<UserService>()))
        .with_method(
            MethodInfo::new("findAll")
                .param("query", object())
                .param("userAgent", TypeInfo::primitive("string"))
                .returns(TypeInfo::array(user()))
                .as_async(),
        )
        .with_method(
            MethodInfo::new("findOne")
                .param("id", id())
                .param("ctx", object())
                .returns(user())
                .as_async(),
        )
        .with_method(
            MethodInfo::new("create")
                .param("dto", TypeInfo::of::<CreateUserDto>())
                .param("req", object())
                .returns(user())
                .as_async(),
        )
        .with_method(
            MethodInfo::new("update")
                .param("id", id())
                .param("dto", TypeInfo::of::<UpdateUserDto>())
                .param("res", object())
                .returns(user())
                .as_async(),
        )
        .with_method(
            MethodInfo::new("partialUpdate")
                .param("id", id())
                .param("dto", TypeInfo::of::<UpdateUserDto>())
                .returns(user())
                .as_async(),
        )
        .with_method(
            MethodInfo::new("remove")
                .param("id", id())
                .returns(TypeInfo::primitive("boolean"))
                .as_async(),
        )
        .with_method(
            MethodInfo::new("search")
                .param("keyword", TypeInfo::primitive("string"))
                .param("limit", id())
                .optional_param("locale", TypeInfo::primitive("string"))
                .returns(TypeInfo::array(user()))
                .as_async(),
        )
}

/// Declare `UserService` and `UserController`
pub fn declare(registry: &mut MetadataRegistry) -> Result<ClassRef, DecorateError> {
    registry
        .declare(user_service_info())
        .decorate(Injectable::with_options(
            InjectableOptions::default().scope(InjectionScope::Singleton),
        ))
        .finish()?;

    registry
        .declare(user_controller_info())
        .decorate(Controller::new("api/users"))
        .decorate(UseGuards::new(components![AuthGuard]))
        .decorate(UseInterceptors::new(components![LoggingInterceptor]))
        .decorate(UseMiddleware::new(components![CorsMiddleware, LoggingMiddleware]))
        .method("findAll", |m| {
            m.decorate(Get::root())
                .decorate(UseInterceptors::new(components![TransformInterceptor]))
                .param(0, Query::new())
                .param(1, Header::key("user-agent"))
        })
        .method("findOne", |m| {
            m.decorate(Get::new("/:id"))
                .decorate(UseGuards::new(components![RoleGuard]))
                .param(0, Param::key("id").pipe(ComponentRef::of::<ParseIntPipe>()))
                .param(1, Context::new())
        })
        .method("create", |m| {
            m.decorate(Post::root())
                .decorate(UsePipes::new(components![ValidationPipe]))
                .param(0, Body::new())
                .param(1, Request::new())
        })
        .method("update", |m| {
            m.decorate(Put::new("/:id"))
                .decorate(UseGuards::new(components![AuthGuard, RoleGuard]))
                .param(0, Param::key("id").pipe(ComponentRef::of::<ParseIntPipe>()))
                .param(1, Body::new())
                .param(2, Response::new())
        })
        .method("partialUpdate", |m| {
            m.decorate(Patch::new("/:id"))
                .param(0, Param::key("id").pipe(ComponentRef::of::<ParseIntPipe>()))
                .param(1, Body::new())
        })
        .method("remove", |m| {
            m.decorate(Delete::new("/:id"))
                .decorate(UseGuards::new(components![AuthGuard]))
                .param(0, Param::key("id").pipe(ComponentRef::of::<ParseIntPipe>()))
        })
        .method("search", |m| {
            m.decorate(Get::new("/search"))
                .param(0, Query::key("keyword"))
                .param(1, Query::key("limit").pipe(ComponentRef::of::<ParseIntPipe>()))
                .param(2, Header::key("accept-language"))
        })
        .finish()
}
