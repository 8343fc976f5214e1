//! Full routes and effective component chains

use serde::Serialize;

use super::join_paths;
use crate::metadata::{
    ClassRef, ComponentKind, ComponentRef, FullRoute, MetadataStore, RouteDescriptor,
};

/// Routes of `class` with their composed paths, in declaration order
///
/// The prefix comes from the controller descriptor; a class without one, or
/// with no prefix, composes against the empty prefix.
pub fn full_routes(store: &MetadataStore, class: ClassRef) -> Vec<FullRoute> {
    let prefix = store
        .controller(class)
        .and_then(|descriptor| descriptor.prefix.as_deref())
        .unwrap_or("");

    store
        .route_list(class)
        .into_iter()
        .map(|route| FullRoute {
            full_path: join_paths(prefix, &route.path),
            route,
        })
        .collect()
}

/// Inline list a route carries for `kind`
fn route_local(route: &RouteDescriptor, kind: ComponentKind) -> Option<&[ComponentRef]> {
    match kind {
        ComponentKind::Guard => route.guards.as_deref(),
        ComponentKind::Interceptor => route.interceptors.as_deref(),
        ComponentKind::Pipe => route.pipes.as_deref(),
        ComponentKind::Middleware => None,
    }
}

/// Components applying to one handler: class list, then member list, then
/// the route's inline list
pub fn effective_chain(
    store: &MetadataStore,
    class: ClassRef,
    kind: ComponentKind,
    handler: &str,
    route: Option<&RouteDescriptor>,
) -> Vec<ComponentRef> {
    let mut chain = store.components(kind, class, None);
    chain.extend(store.components(kind, class, Some(handler)));
    if let Some(local) = route.and_then(|route| route_local(route, kind)) {
        chain.extend_from_slice(local);
    }
    chain
}

/// Guard, interceptor and pipe chains of one handler
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EffectiveChains {
    pub guards: Vec<ComponentRef>,
    pub interceptors: Vec<ComponentRef>,
    pub pipes: Vec<ComponentRef>,
}

impl EffectiveChains {
    pub fn resolve(
        store: &MetadataStore,
        class: ClassRef,
        handler: &str,
        route: Option<&RouteDescriptor>,
    ) -> Self {
        Self {
            guards: effective_chain(store, class, ComponentKind::Guard, handler, route),
            interceptors: effective_chain(store, class, ComponentKind::Interceptor, handler, route),
            pipes: effective_chain(store, class, ComponentKind::Pipe, handler, route),
        }
    }
}
