//! Per-request glue between the host router and the navigation projector.

use serde::Serialize;
use tracing::debug;

use crate::path::{strip_leading_and_trailing_slashes, strip_locale};
use crate::schema::SchemaSet;
use crate::sidebar::{SidebarItem, rewrite_sidebar};

/// Immutable request information supplied by the host.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Raw request path, e.g. `/fr/api/petstore/`.
    pub pathname: String,
    /// Locale resolved for this request.
    pub locale: String,
    /// The site's default locale.
    pub default_locale: String,
}

/// Mutable per-request route state the host threads through its middleware
/// chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteData {
    /// Sidebar tree for this request.
    pub sidebar: Vec<SidebarItem>,
    /// Set when the page is served from default-locale content because no
    /// localized content exists.
    pub is_fallback: bool,
}

/// Rewrites the request's sidebar and marks locale-fallback API pages.
///
/// Runs once per request. The sidebar placeholder expands into the loaded
/// schema links, and when a non-default locale requests a page under a
/// schema's base path, the route is flagged as a fallback so the host serves
/// the default-locale content instead of a 404.
pub fn on_request(context: &RequestContext, route_data: &mut RouteData, schemas: &SchemaSet) {
    let pathname = strip_leading_and_trailing_slashes(&context.pathname);

    route_data.sidebar = rewrite_sidebar(pathname, &route_data.sidebar, schemas);

    let is_api_path = schemas
        .values()
        .any(|schema| strip_locale(schema.config.base_path()) == strip_locale(pathname));

    if context.locale != context.default_locale && is_api_path {
        debug!("serving default-locale content for {pathname}");
        route_data.is_fallback = true;
    }
}
