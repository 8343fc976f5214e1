use maimai_core::components;
use maimai_core::decorators::{Controller, Delete, Get, Injectable, Param, Post, Query, UseGuards};
use maimai_core::metadata::{ClassRef, ComponentKind, HttpMethod, MetadataKey, MetadataValue, Target};
use maimai_core::reflect::{ClassInfo, MethodInfo, TypeInfo};
use maimai_core::resolve::{full_routes, join_paths, ValidationError, ValidationWarning};
use maimai_core::{CoreConfig, MetadataRegistry, ValidationConfig};

struct ItemsController;
struct AdminItemsController;
struct CrudController;
struct PlainBase;
struct BaseService;
struct AuthGuard;

// ============================================================================
// Path Composition
// ============================================================================

#[test]
fn test_join_paths_rules() {
    assert_eq!(join_paths("users/", "/:id"), "users/:id");
    assert_eq!(join_paths("", "/:id"), "/:id");
    assert_eq!(join_paths("api", ""), "api");
    assert_eq!(join_paths("", ""), "/");
}

#[test]
fn test_two_handlers_give_two_full_routes() {
    let mut registry = MetadataRegistry::new();
    let class = registry
        .declare(
            ClassInfo::of::<ItemsController>()
                .with_method(MethodInfo::new("list"))
                .with_method(MethodInfo::new("get").param("id", TypeInfo::primitive("string"))),
        )
        .decorate(Controller::new("api/users"))
        .method("list", |m| m.decorate(Get::root()))
        .method("get", |m| m.decorate(Get::new("/:id")).param(0, Param::key("id")))
        .finish()
        .unwrap();

    let routes = full_routes(registry.store(), class);
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].full_path, "api/users");
    assert_eq!(routes[0].route.method, HttpMethod::Get);
    assert_eq!(routes[1].full_path, "api/users/:id");
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_route_to_missing_handler() {
    let mut registry = MetadataRegistry::new();
    let class = registry
        .declare(ClassInfo::of::<ItemsController>().with_method(MethodInfo::new("list")))
        .decorate(Controller::new("items"))
        .method("list", |m| m.decorate(Get::root()))
        .method("purge", |m| m.decorate(Delete::root()))
        .finish()
        .unwrap();

    let report = registry.reflector().validate(class);
    assert!(!report.is_valid());
    assert_eq!(
        report.errors,
        vec![ValidationError::MissingHandler {
            handler: "purge".into()
        }]
    );
    assert!(report.warnings.is_empty());
    assert!(report
        .ensure_valid(class, &ValidationConfig::default())
        .is_err());
}

#[test]
fn test_more_decorators_than_parameters() {
    let mut registry = MetadataRegistry::new();
    let class = registry
        .declare(
            ClassInfo::of::<ItemsController>()
                .with_method(MethodInfo::new("search").param("q", TypeInfo::primitive("string"))),
        )
        .decorate(Controller::new("items"))
        .method("search", |m| {
            m.decorate(Get::new("search"))
                .param(0, Query::key("q"))
                .param(1, Query::key("limit"))
        })
        .finish()
        .unwrap();

    let report = registry.reflector().validate(class);
    assert_eq!(
        report.errors,
        vec![ValidationError::ParameterOverflow {
            handler: "search".into(),
            decorated: 2,
            declared: 1,
        }]
    );
}

#[test]
fn test_empty_controller_warns_but_is_valid() {
    let mut registry = MetadataRegistry::new();
    let class = registry
        .declare(ClassInfo::of::<ItemsController>())
        .decorate(Controller::root())
        .finish()
        .unwrap();

    let report = registry.reflector().validate(class);
    assert!(report.is_valid());
    assert_eq!(report.warnings, vec![ValidationWarning::NoRoutes]);

    let strict: CoreConfig = "[validation]\nfail_on_warnings = true\n".parse().unwrap();
    assert!(report.ensure_valid(class, &strict.validation).is_err());
    assert!(report
        .ensure_valid(class, &CoreConfig::default().validation)
        .is_ok());
}

// ============================================================================
// Metadata Cloning
// ============================================================================

#[test]
fn test_clone_metadata_copies_key_set() {
    let mut registry = MetadataRegistry::new();
    let source = registry
        .declare(ClassInfo::of::<ItemsController>().with_method(MethodInfo::new("list")))
        .decorate(Controller::new("items"))
        .decorate(UseGuards::new(components![AuthGuard]))
        .method("list", |m| m.decorate(Get::root()))
        .finish()
        .unwrap();
    registry.store_mut().set_class_metadata(
        MetadataKey::Custom("version"),
        MetadataValue::Text("v2".into()),
        source,
    );
    let dest = ClassRef::of::<AdminItemsController>();

    registry.clone_metadata(&Target::Class(source), &Target::Class(dest));

    let store = registry.store();
    assert_eq!(store.metadata_keys(dest, None), store.metadata_keys(source, None));
    assert_eq!(
        store.get_class_metadata(MetadataKey::Custom("version"), dest),
        Some(&MetadataValue::Text("v2".into()))
    );
    assert_eq!(store.components(ComponentKind::Guard, dest, None), components![AuthGuard]);
}

#[test]
fn test_cloned_routes_alias_source() {
    let mut registry = MetadataRegistry::new();
    let source = registry
        .declare(ClassInfo::of::<ItemsController>().with_method(MethodInfo::new("list")))
        .decorate(Controller::new("items"))
        .method("list", |m| m.decorate(Get::root()))
        .finish()
        .unwrap();
    let dest = ClassRef::of::<AdminItemsController>();
    registry.clone_metadata(&Target::Class(source), &Target::Class(dest));

    registry
        .declare(ClassInfo::of::<AdminItemsController>().with_method(MethodInfo::new("create")))
        .method("create", |m| m.decorate(Post::root()))
        .finish()
        .unwrap();

    assert_eq!(registry.store().route_list(source).len(), 2);
    assert_eq!(registry.store().route_list(dest).len(), 2);
}

// ============================================================================
// Inheritance Reporting
// ============================================================================

#[test]
fn test_inheritance_stops_at_plain_ancestor() {
    let mut registry = MetadataRegistry::new();
    registry
        .declare(ClassInfo::of::<BaseService>())
        .decorate(Injectable::new())
        .finish()
        .unwrap();
    registry
        .declare(ClassInfo::of::<PlainBase>().extends(ClassRef::of::<BaseService>()))
        .finish()
        .unwrap();
    let crud = registry
        .declare(
            ClassInfo::of::<CrudController>()
                .extends(ClassRef::of::<PlainBase>())
                .with_method(MethodInfo::new("list")),
        )
        .method("list", |m| m.decorate(Get::root()))
        .finish()
        .unwrap();
    let admin = registry
        .declare(ClassInfo::of::<AdminItemsController>().extends(crud))
        .decorate(Controller::new("admin/items"))
        .finish()
        .unwrap();

    let report = registry.reflector().inherited_metadata(admin);
    assert!(report.own.is_controller);
    assert!(report.own.routes.is_empty());
    assert_eq!(report.inherited.len(), 1);
    assert_eq!(report.inherited[0].class, crud);
    assert_eq!(report.inherited[0].metadata.routes.len(), 1);
    assert_eq!(report.inherited[0].metadata.full_routes[0].full_path, "/");
}
