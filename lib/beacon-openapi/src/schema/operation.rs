//! Read-only projections over a document's operations.

use std::fmt;

use indexmap::IndexMap;
use openapiv3::{Operation, PathItem, ReferenceOr, Responses};
use serde::Serialize;

use super::Schema;

/// Tag collecting operations that do not declare one themselves.
pub const DEFAULT_OPERATION_TAG: &str = "Operations";

/// HTTP methods an OpenAPI path item can carry, in specification order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    /// `get`
    Get,
    /// `put`
    Put,
    /// `post`
    Post,
    /// `delete`
    Delete,
    /// `options`
    Options,
    /// `head`
    Head,
    /// `patch`
    Patch,
    /// `trace`
    Trace,
}

impl HttpMethod {
    /// Lowercase method name, as used in slugs and css classes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Put => "put",
            Self::Post => "post",
            Self::Delete => "delete",
            Self::Options => "options",
            Self::Head => "head",
            Self::Patch => "patch",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// One HTTP operation within a path item.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PathItemOperation<'a> {
    /// The HTTP method the operation is registered under.
    pub method: HttpMethod,
    /// The operation itself.
    pub operation: &'a Operation,
    /// The enclosing path item, for inherited parameters.
    pub path_item: &'a PathItem,
}

/// A named group of operations used for navigation.
#[derive(Debug, Clone, Serialize)]
pub struct OperationTag<'a> {
    /// Tag name as declared in the document.
    pub name: String,
    /// Operations in first-seen document order.
    pub entries: Vec<PathItemOperation<'a>>,
}

/// Iterates the operations of a path item in specification method order.
pub(crate) fn path_item_operations(
    path_item: &PathItem,
) -> impl Iterator<Item = (HttpMethod, &Operation)> {
    [
        (HttpMethod::Get, path_item.get.as_ref()),
        (HttpMethod::Put, path_item.put.as_ref()),
        (HttpMethod::Post, path_item.post.as_ref()),
        (HttpMethod::Delete, path_item.delete.as_ref()),
        (HttpMethod::Options, path_item.options.as_ref()),
        (HttpMethod::Head, path_item.head.as_ref()),
        (HttpMethod::Patch, path_item.patch.as_ref()),
        (HttpMethod::Trace, path_item.trace.as_ref()),
    ]
    .into_iter()
    .filter_map(|(method, operation)| operation.map(|operation| (method, operation)))
}

/// Groups a schema's operations by tag.
///
/// Tags and their entries keep first-seen document order. An operation
/// appears under every tag it declares; untagged operations fall back to
/// [`DEFAULT_OPERATION_TAG`]. `$ref` path items are skipped — the loader
/// resolves references before documents reach this crate.
pub fn operations_by_tag(schema: &Schema) -> IndexMap<String, OperationTag<'_>> {
    let mut tags: IndexMap<String, OperationTag<'_>> = IndexMap::new();

    for path_item in schema.document.paths.paths.values() {
        let ReferenceOr::Item(path_item) = path_item else {
            continue;
        };
        for (method, operation) in path_item_operations(path_item) {
            let entry = PathItemOperation {
                method,
                operation,
                path_item,
            };
            if operation.tags.is_empty() {
                push_tagged(&mut tags, DEFAULT_OPERATION_TAG, entry);
            } else {
                for tag in &operation.tags {
                    push_tagged(&mut tags, tag, entry);
                }
            }
        }
    }

    tags
}

fn push_tagged<'a>(
    tags: &mut IndexMap<String, OperationTag<'a>>,
    name: &str,
    entry: PathItemOperation<'a>,
) {
    tags.entry(name.to_string())
        .or_insert_with(|| OperationTag {
            name: name.to_string(),
            entries: Vec::new(),
        })
        .entries
        .push(entry);
}

/// Lists webhook operations in document order.
pub fn webhook_operations(schema: &Schema) -> Vec<PathItemOperation<'_>> {
    schema
        .document
        .webhooks
        .values()
        .flat_map(|path_item| {
            path_item_operations(path_item).map(move |(method, operation)| PathItemOperation {
                method,
                operation,
                path_item,
            })
        })
        .collect()
}

/// Whether the operation declares a request body.
pub fn has_request_body(operation: &Operation) -> bool {
    operation.request_body.is_some()
}

/// Whether a `default` response is declared.
pub fn includes_default_response(responses: &Responses) -> bool {
    responses.default.is_some()
}
