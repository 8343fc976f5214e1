//! Parameter decorators
//!
//! Each decorator writes one descriptor at the parameter's absolute position,
//! so the resulting list does not depend on the order decorators run in. A
//! second write to the same position replaces the first.

use tracing::debug;

use super::{ParameterDecorator, ParameterSite};
use crate::error::DecorateError;
use crate::metadata::{ComponentRef, MetadataStore, ParamSource, ParameterDescriptor};

/// Highest parameter position a decorator may target
pub const MAX_PARAMETER_INDEX: usize = 255;

/// Binds a handler parameter to part of the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecorator {
    source: ParamSource,
    key: Option<String>,
    pipe: Option<ComponentRef>,
}

impl ParamDecorator {
    pub fn new(source: ParamSource) -> Self {
        Self {
            source,
            key: None,
            pipe: None,
        }
    }

    /// Select a sub-field (`Param::key("id")`)
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Transform the value with a pipe
    pub fn pipe(mut self, pipe: ComponentRef) -> Self {
        self.pipe = Some(pipe);
        self
    }

    pub fn source(&self) -> ParamSource {
        self.source
    }
}

impl ParameterDecorator for ParamDecorator {
    fn name(&self) -> &'static str {
        match self.source {
            ParamSource::Body => "Body",
            ParamSource::Query => "Query",
            ParamSource::Param => "Param",
            ParamSource::Header => "Header",
            ParamSource::Context => "Context",
            ParamSource::Request => "Request",
            ParamSource::Response => "Response",
        }
    }

    fn decorate_parameter(
        &self,
        store: &mut MetadataStore,
        site: &ParameterSite<'_>,
    ) -> Result<(), DecorateError> {
        let Some(member) = site.member else {
            return Err(DecorateError::MissingMemberContext {
                decorator: self.name(),
                class: site.class.name().to_string(),
                index: site.index,
            });
        };
        if site.index > MAX_PARAMETER_INDEX {
            return Err(DecorateError::ParameterIndexOutOfRange {
                decorator: self.name(),
                class: site.class.name().to_string(),
                member: member.to_string(),
                index: site.index,
                max: MAX_PARAMETER_INDEX,
            });
        }

        debug!(class = %site.class, member, index = site.index, source = %self.source, "parameter declared");
        store.set_param(
            site.class,
            member,
            ParameterDescriptor {
                index: site.index,
                source: self.source,
                key: self.key.clone(),
                pipe: self.pipe,
            },
        );
        Ok(())
    }
}

macro_rules! param_decorator {
    ($(#[$doc:meta])* $name:ident => $source:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl $name {
            /// The whole value
            pub fn new() -> ParamDecorator {
                ParamDecorator::new($source)
            }

            /// One named field of the value
            pub fn key(key: impl Into<String>) -> ParamDecorator {
                ParamDecorator::new($source).with_key(key)
            }
        }
    };
}

param_decorator!(
    /// Request body, or one field of it
    Body => ParamSource::Body
);
param_decorator!(
    /// Query string parameters
    Query => ParamSource::Query
);
param_decorator!(
    /// Path parameters
    Param => ParamSource::Param
);
param_decorator!(
    /// Request headers
    Header => ParamSource::Header
);
param_decorator!(
    /// The whole HTTP context
    Context => ParamSource::Context
);
param_decorator!(
    /// The raw request object
    Request => ParamSource::Request
);
param_decorator!(
    /// The raw response object
    Response => ParamSource::Response
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ClassRef;

    struct UserController;
    struct ParseIntPipe;

    #[test]
    fn test_descriptor_written_at_index() {
        let class = ClassRef::of::<UserController>();
        let mut store = MetadataStore::new();
        let pipe = ComponentRef::of::<ParseIntPipe>();

        Query::key("limit")
            .pipe(pipe)
            .decorate_parameter(&mut store, &ParameterSite::method(class, "search", 1))
            .unwrap();

        let params = store.param_list(class, "search");
        assert_eq!(params.len(), 2);
        assert!(params[0].is_none());
        assert_eq!(
            params[1],
            Some(ParameterDescriptor {
                index: 1,
                source: ParamSource::Query,
                key: Some("limit".into()),
                pipe: Some(pipe),
            })
        );
    }

    #[test]
    fn test_last_write_wins() {
        let class = ClassRef::of::<UserController>();
        let mut store = MetadataStore::new();
        let site = ParameterSite::method(class, "create", 0);

        Body::new().decorate_parameter(&mut store, &site).unwrap();
        Request::new().decorate_parameter(&mut store, &site).unwrap();

        let params = store.param_list(class, "create");
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].as_ref().map(|p| p.source), Some(ParamSource::Request));
    }

    #[test]
    fn test_constructor_parameter_rejected() {
        let class = ClassRef::of::<UserController>();
        let mut store = MetadataStore::new();

        let err = Body::new()
            .decorate_parameter(&mut store, &ParameterSite::constructor(class, 0))
            .unwrap_err();
        assert_eq!(
            err,
            DecorateError::MissingMemberContext {
                decorator: "Body",
                class: "UserController".into(),
                index: 0,
            }
        );
        assert_eq!(store.target_count(), 0);
    }

    #[test]
    fn test_index_past_limit_rejected() {
        let class = ClassRef::of::<UserController>();
        let mut store = MetadataStore::new();

        let err = Body::new()
            .decorate_parameter(&mut store, &ParameterSite::method(class, "create", usize::MAX))
            .unwrap_err();
        assert_eq!(
            err,
            DecorateError::ParameterIndexOutOfRange {
                decorator: "Body",
                class: "UserController".into(),
                member: "create".into(),
                index: usize::MAX,
                max: MAX_PARAMETER_INDEX,
            }
        );
        assert_eq!(store.target_count(), 0);

        let site = ParameterSite::method(class, "create", MAX_PARAMETER_INDEX);
        Body::new().decorate_parameter(&mut store, &site).unwrap();
        assert_eq!(store.param_list(class, "create").len(), MAX_PARAMETER_INDEX + 1);
    }
}
