//! Static route descriptors for the host's route-generation hook.

use serde::Serialize;

use crate::schema::operation::{OperationTag, PathItemOperation};
use crate::schema::{Schema, SchemaSet};

/// Route parameters for one generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteParams {
    /// Path below the plugin's mount point, without surrounding slashes.
    pub slug: String,
}

/// Props describing what a generated route renders.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RouteProps<'a> {
    /// The schema overview page.
    Overview {
        /// The schema the page belongs to.
        schema: &'a Schema,
    },
    /// A single operation page.
    Operation {
        /// The schema the page belongs to.
        schema: &'a Schema,
        /// The operation rendered on the page.
        operation: PathItemOperation<'a>,
    },
    /// An operation tag page.
    OperationTag {
        /// The schema the page belongs to.
        schema: &'a Schema,
        /// The tag rendered on the page.
        tag: OperationTag<'a>,
    },
}

/// One static route descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct Route<'a> {
    /// Route parameters.
    pub params: RouteParams,
    /// Page props.
    pub props: RouteProps<'a>,
}

/// Builds the static route list: one overview route per schema, in schema
/// set order.
///
/// Operation and operation-tag pages are rendered on demand by the host and
/// deliberately get no static descriptor here.
pub fn schema_static_routes(schemas: &SchemaSet) -> Vec<Route<'_>> {
    schemas
        .values()
        .map(|schema| Route {
            params: RouteParams {
                slug: schema.config.base_path().to_string(),
            },
            props: RouteProps::Overview { schema },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Document, SchemaConfig};

    fn schema(base: &str) -> Schema {
        let openapi = serde_json::from_value(serde_json::json!({
            "openapi": "3.0.3",
            "info": { "title": "Petstore", "version": "1.0.0" },
            "paths": {}
        }))
        .expect("a valid OpenAPI document");
        Schema {
            config: SchemaConfig::new(base).expect("a valid config"),
            document: Document::new(openapi),
        }
    }

    #[test]
    fn should_emit_one_overview_route_per_schema() {
        let mut schemas = SchemaSet::new();
        schemas.insert("petstore", schema("/api/petstore/"));
        schemas.insert("trains", schema("api/trains"));

        let routes = schema_static_routes(&schemas);
        let slugs: Vec<&str> = routes
            .iter()
            .map(|route| route.params.slug.as_str())
            .collect();
        assert_eq!(slugs, ["api/petstore", "api/trains"]);
        assert!(routes
            .iter()
            .all(|route| matches!(route.props, RouteProps::Overview { .. })));
    }

    #[test]
    fn should_emit_no_routes_for_an_empty_set() {
        assert!(schema_static_routes(&SchemaSet::new()).is_empty());
    }

    #[test]
    fn should_tag_route_props_with_their_kind() {
        let mut schemas = SchemaSet::new();
        schemas.insert("petstore", schema("api/petstore"));

        let routes = schema_static_routes(&schemas);
        let value = serde_json::to_value(&routes).expect("serializable");
        let kind = value
            .get(0)
            .and_then(|route| route.get("props"))
            .and_then(|props| props.get("type"))
            .and_then(|tag| tag.as_str());
        assert_eq!(kind, Some("overview"));
    }
}
