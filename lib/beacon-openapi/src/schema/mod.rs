//! Loaded schemas, their site configuration, and the injected schema table.

use indexmap::IndexMap;
use openapiv3::{OpenAPI, PathItem};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::path::strip_leading_and_trailing_slashes;

pub mod operation;
pub mod parameter;
pub mod security;

/// One loaded OpenAPI document plus its site configuration.
///
/// Schemas are produced by the host's build-time loader, which parses,
/// validates, and dereferences the document before it reaches this crate.
/// They stay immutable for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Site configuration for this document.
    pub config: SchemaConfig,
    /// The parsed document itself.
    pub document: Document,
}

/// Site configuration for a single schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Base path the schema's pages are mounted under, e.g. `api/petstore`.
    pub base: String,
    /// Sidebar presentation overrides.
    #[serde(default)]
    pub sidebar: SchemaSidebarConfig,
}

/// Sidebar overrides for a schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSidebarConfig {
    /// Link label; defaults to the document's `info.title`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Errors raised while validating a [`SchemaConfig`].
#[derive(Debug, derive_more::Error, derive_more::Display)]
pub enum SchemaConfigError {
    /// The base path is empty once surrounding slashes are trimmed.
    #[display("Invalid base path: the base path cannot be empty")]
    EmptyBase,

    /// The base path carries a query or fragment delimiter.
    #[display("Invalid base path '{base}': '?' and '#' are not allowed")]
    InvalidBase {
        /// The rejected base path.
        base: String,
    },
}

impl SchemaConfig {
    /// Creates a validated configuration for the given base path.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaConfigError`] when the base path is empty after
    /// trimming slashes or contains a `?` or `#`.
    pub fn new(base: impl Into<String>) -> Result<Self, SchemaConfigError> {
        let base = base.into();
        if strip_leading_and_trailing_slashes(&base).is_empty() {
            return Err(SchemaConfigError::EmptyBase);
        }
        if base.contains(['?', '#']) {
            return Err(SchemaConfigError::InvalidBase { base });
        }
        Ok(Self {
            base,
            sidebar: SchemaSidebarConfig::default(),
        })
    }

    /// Overrides the sidebar link label.
    pub fn with_sidebar_label(mut self, label: impl Into<String>) -> Self {
        self.sidebar.label = Some(label.into());
        self
    }

    /// The base path trimmed of leading and trailing slashes.
    pub fn base_path(&self) -> &str {
        strip_leading_and_trailing_slashes(&self.base)
    }

    /// The absolute link to the schema's overview page.
    pub fn base_link(&self) -> String {
        format!("/{}", self.base_path())
    }
}

/// A parsed OpenAPI document, extended with the OpenAPI 3.1 `webhooks`
/// section that [`openapiv3`] does not model.
///
/// Derefs to the inner [`OpenAPI`] value, so `document.info`,
/// `document.paths`, and friends read naturally.
#[derive(Debug, Clone, Serialize, Deserialize, derive_more::Deref)]
pub struct Document {
    /// The OpenAPI description.
    #[serde(flatten)]
    #[deref]
    pub openapi: OpenAPI,

    /// Webhook path items, keyed by webhook name in document order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub webhooks: IndexMap<String, PathItem>,
}

impl Document {
    /// Wraps a document that declares no webhooks.
    pub fn new(openapi: OpenAPI) -> Self {
        Self {
            openapi,
            webhooks: IndexMap::new(),
        }
    }

    /// Attaches webhook path items.
    pub fn with_webhooks(mut self, webhooks: IndexMap<String, PathItem>) -> Self {
        self.webhooks = webhooks;
        self
    }
}

impl From<OpenAPI> for Document {
    fn from(openapi: OpenAPI) -> Self {
        Self::new(openapi)
    }
}

/// Ordered, read-only collection of loaded schemas, keyed by identifier.
///
/// The host loader builds one set at startup and passes it explicitly to the
/// route builder and middleware; nothing in this crate holds global state,
/// so the set can be shared freely across request handlers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaSet {
    schemas: IndexMap<String, Schema>,
}

impl SchemaSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a schema under the given identifier.
    ///
    /// A duplicate identifier replaces the previously loaded schema.
    pub fn insert(&mut self, id: impl Into<String>, schema: Schema) {
        let id = id.into();
        if self.schemas.insert(id.clone(), schema).is_some() {
            warn!("duplicate schema id {id}, replacing the previous document");
        }
    }

    /// Looks up a schema by identifier.
    pub fn get(&self, id: &str) -> Option<&Schema> {
        self.schemas.get(id)
    }

    /// Iterates schemas in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.values()
    }

    /// Iterates `(identifier, schema)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.schemas
            .iter()
            .map(|(id, schema)| (id.as_str(), schema))
    }

    /// Number of schemas in the set.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the set holds no schemas.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl FromIterator<(String, Schema)> for SchemaSet {
    fn from_iter<I: IntoIterator<Item = (String, Schema)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (id, schema) in iter {
            set.insert(id, schema);
        }
        set
    }
}
