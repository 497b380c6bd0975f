//! # Beacon OpenAPI
//!
//! Project OpenAPI documents into the Beacon documentation framework's
//! routing, sidebar-navigation, and page-heading systems.
//!
//! The host's build-time loader parses and validates the documents; this
//! crate only derives navigation data from them:
//!
//! - **[`schema_static_routes`]** - the static route descriptors handed to
//!   Beacon's route-generation hook
//! - **[`rewrite_sidebar`]** / **[`on_request`]** - the per-request sidebar
//!   rewrite that replaces the plugin's [`SidebarItem::Placeholder`] with one
//!   link per loaded schema, plus locale-fallback marking
//! - **[`page_props`]** - the table-of-contents heading outline for
//!   overview, operation, and operation-tag pages
//!
//! Everything is a synchronous, pure function of its inputs: schemas are
//! loaded once into a [`SchemaSet`] and passed explicitly, and each request
//! recomputes its sidebar and headings from scratch.
//!
//! ## Quick Start
//!
//! ```rust
//! use beacon_openapi::{SchemaSet, SidebarGroup, SidebarItem, rewrite_sidebar};
//!
//! let sidebar = vec![SidebarItem::Group(SidebarGroup::new(
//!     "Reference",
//!     vec![SidebarItem::Placeholder],
//!     false,
//! ))];
//!
//! // No schemas loaded: the placeholder disappears, the rest is untouched.
//! let rewritten = rewrite_sidebar("getting-started", &sidebar, &SchemaSet::new());
//! assert_eq!(
//!     rewritten,
//!     vec![SidebarItem::Group(SidebarGroup::new("Reference", vec![], false))],
//! );
//! ```
//!
//! ## Loading a document
//!
//! Documents reach this crate already parsed, typically straight from
//! [`serde_json`] or a YAML front end:
//!
//! ```rust
//! use beacon_openapi::{Document, Schema, SchemaConfig, SchemaSet, schema_static_routes};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let document: openapiv3::OpenAPI = serde_json::from_value(serde_json::json!({
//!     "openapi": "3.0.3",
//!     "info": { "title": "Petstore", "version": "1.0.0" },
//!     "paths": {}
//! }))?;
//!
//! let mut schemas = SchemaSet::new();
//! schemas.insert(
//!     "petstore",
//!     Schema {
//!         config: SchemaConfig::new("api/petstore")?,
//!         document: Document::new(document),
//!     },
//! );
//!
//! let routes = schema_static_routes(&schemas);
//! assert_eq!(routes.len(), 1);
//! assert_eq!(routes.first().map(|route| route.params.slug.as_str()), Some("api/petstore"));
//! # Ok(())
//! # }
//! ```

mod headings;
mod middleware;
mod path;
mod route;
mod schema;
mod sidebar;

pub use headings::{Frontmatter, MarkdownHeading, PageContent, PageProps, page_props};
pub use middleware::{RequestContext, RouteData, on_request};
pub use path::{replace_first_segment, strip_leading_and_trailing_slashes};
pub use route::{Route, RouteParams, RouteProps, schema_static_routes};
pub use schema::operation::{
    DEFAULT_OPERATION_TAG, HttpMethod, OperationTag, PathItemOperation, has_request_body,
    includes_default_response, operations_by_tag, webhook_operations,
};
pub use schema::parameter::{ParameterLocation, parameters_by_location};
pub use schema::security::{security_definitions, security_requirements};
pub use schema::{Document, Schema, SchemaConfig, SchemaConfigError, SchemaSet, SchemaSidebarConfig};
pub use sidebar::{
    Badge, BadgeVariant, SidebarGroup, SidebarItem, SidebarLink, method_badge, rewrite_sidebar,
    sidebar_link,
};
