use std::io::Write;

use maimai_core::metadata::{ClassRef, HttpMethod, InjectionScope, ParamSource};
use maimai_core::resolve::ValidationWarning;
use maimai_core::{CoreConfig, RegistryConfig};
use maimai_examples::admin::{AdminUserController, AuditService, CrudController, Repository};
use maimai_examples::components::{
    AdminGuard, AuthGuard, LoggingInterceptor, ParseIntPipe, RoleGuard, TransformInterceptor,
};
use maimai_examples::users::{UserController, UserService};
use maimai_examples::{report, routed_classes, sample_registry};
use tempfile::NamedTempFile;

fn registry() -> maimai_core::MetadataRegistry {
    sample_registry(RegistryConfig::default()).unwrap()
}

// ============================================================================
// User Controller
// ============================================================================

#[test]
fn test_user_controller_route_table() {
    let registry = registry();
    let table = registry.reflector().route_table(ClassRef::of::<UserController>());

    let summary: Vec<(HttpMethod, &str, &str)> = table
        .iter()
        .map(|e| (e.method, e.full_path.as_str(), e.handler.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (HttpMethod::Get, "api/users", "findAll"),
            (HttpMethod::Get, "api/users/:id", "findOne"),
            (HttpMethod::Post, "api/users", "create"),
            (HttpMethod::Put, "api/users/:id", "update"),
            (HttpMethod::Patch, "api/users/:id", "partialUpdate"),
            (HttpMethod::Delete, "api/users/:id", "remove"),
            (HttpMethod::Get, "api/users/search", "search"),
        ]
    );
}

#[test]
fn test_find_one_chains() {
    let registry = registry();
    let find_one = registry
        .reflector()
        .resolved_method(ClassRef::of::<UserController>(), "findOne");

    assert_eq!(
        find_one.chains.guards,
        maimai_core::components![AuthGuard, RoleGuard]
    );
    assert_eq!(
        find_one.params[0].as_ref().and_then(|p| p.pipe).map(|p| p.name()),
        Some("ParseIntPipe")
    );

    let find_all = registry
        .reflector()
        .resolved_method(ClassRef::of::<UserController>(), "findAll");
    assert_eq!(
        find_all.chains.interceptors,
        maimai_core::components![LoggingInterceptor, TransformInterceptor]
    );
}

#[test]
fn test_search_parameter_mapping() {
    let registry = registry();
    let mapping = registry
        .reflector()
        .analyze_parameter_mapping(ClassRef::of::<UserController>(), "search");

    assert_eq!(mapping.len(), 3);
    assert_eq!(mapping[1].source, ParamSource::Query);
    assert_eq!(mapping[1].key.as_deref(), Some("limit"));
    assert_eq!(mapping[1].decorator.pipe, Some(maimai_core::metadata::ComponentRef::of::<ParseIntPipe>()));
    assert_eq!(mapping[1].parameter_type.as_ref().map(|t| t.name.as_str()), Some("number"));
}

#[test]
fn test_user_service_is_singleton() {
    let registry = registry();
    let reflector = registry.reflector();
    let service = ClassRef::of::<UserService>();

    assert!(reflector.is_injectable(service));
    assert!(!reflector.is_controller(service));
    assert_eq!(
        reflector.injectable_options(service).and_then(|o| o.scope),
        Some(InjectionScope::Singleton)
    );
}

// ============================================================================
// Admin Hierarchy
// ============================================================================

#[test]
fn test_admin_routes_and_chains() {
    let registry = registry();
    let table = registry.reflector().route_table(ClassRef::of::<AdminUserController>());

    assert_eq!(table.len(), 2);
    assert_eq!(table[0].full_path, "/admin/users/:id/ban");
    assert_eq!(table[1].full_path, "/admin/users");
    assert_eq!(table[1].method, HttpMethod::Options);
    // Descriptor-level guards are informational; only UseGuards composes
    assert_eq!(table[0].guards, maimai_core::components![AdminGuard]);
}

#[test]
fn test_admin_inheritance_report() {
    let registry = registry();
    let report = registry
        .reflector()
        .inherited_metadata(ClassRef::of::<AdminUserController>());

    let inherited: Vec<ClassRef> = report.inherited.iter().map(|e| e.class).collect();
    assert_eq!(inherited, vec![ClassRef::of::<CrudController>()]);
    assert!(!inherited.contains(&ClassRef::of::<Repository>()));
    assert!(!inherited.contains(&ClassRef::of::<AuditService>()));
    assert_eq!(report.own.routes.len(), 2);
}

#[test]
fn test_validation_of_sample_classes() {
    let registry = registry();
    let reflector = registry.reflector();

    assert!(reflector.validate(ClassRef::of::<UserController>()).is_valid());
    assert!(reflector.validate(ClassRef::of::<AdminUserController>()).is_valid());

    let crud = reflector.validate(ClassRef::of::<CrudController>());
    assert!(crud.is_valid());
    assert_eq!(crud.warnings, vec![ValidationWarning::RoutesWithoutController]);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_routed_classes_sorted() {
    let registry = registry();
    assert_eq!(
        routed_classes(&registry),
        vec![
            ClassRef::of::<AdminUserController>(),
            ClassRef::of::<CrudController>(),
            ClassRef::of::<UserController>(),
        ]
    );
}

#[test]
fn test_render_text() {
    let registry = registry();
    let text = report::render_text(&registry.reflector(), &routed_classes(&registry));

    assert!(text.contains("UserController (api/users)"));
    assert!(text.contains("api/users/:id"));
    assert!(text.contains("guards=[AuthGuard, RoleGuard]"));
    assert!(text.contains("warning: Routes declared on a class without controller metadata"));
}

#[test]
fn test_render_json() {
    let registry = registry();
    let classes = vec![ClassRef::of::<UserController>()];
    let json = report::render_json(&registry.reflector(), &classes).unwrap();

    assert_eq!(json[0]["class"], "UserController");
    assert_eq!(json[0]["controller"]["prefix"], "api/users");
    assert_eq!(json[0]["routes"].as_array().map(Vec::len), Some(7));
    assert_eq!(json[0]["validation"]["errors"], serde_json::json!([]));
}

#[test]
fn test_registry_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[registry]\nclone_mode = \"detached\"").unwrap();
    let config = CoreConfig::from_file(file.path()).unwrap();

    let registry = sample_registry(config.registry).unwrap();
    assert_eq!(registry.config().clone_mode, maimai_core::metadata::CloneMode::Detached);
    assert_eq!(routed_classes(&registry).len(), 3);
}
