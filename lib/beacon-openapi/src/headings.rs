//! Page heading outlines and the props handed to the host's page template.

use serde::{Deserialize, Serialize};

use crate::schema::Schema;
use crate::schema::operation::{
    OperationTag, PathItemOperation, has_request_body, includes_default_response,
    operations_by_tag, webhook_operations,
};
use crate::schema::parameter::{ParameterLocation, parameters_by_location};
use crate::schema::security::{security_definitions, security_requirements};

/// Anchor of the synthetic top heading present on every page.
const TOP_SLUG: &str = "_top";

/// A table-of-contents heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownHeading {
    /// Heading depth, 1 to 4.
    pub depth: u8,
    /// Heading text.
    pub text: String,
    /// URL-safe anchor.
    pub slug: String,
}

/// Frontmatter for a generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Page title.
    pub title: String,
}

/// Props handed to the host's page template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageProps {
    /// Page frontmatter.
    pub frontmatter: Frontmatter,
    /// Ordered heading outline.
    pub headings: Vec<MarkdownHeading>,
}

/// What a generated page renders, matched exhaustively when deriving its
/// heading outline.
#[derive(Debug, Clone, Copy)]
pub enum PageContent<'a> {
    /// The schema overview page.
    Overview,
    /// A single operation page.
    Operation(&'a PathItemOperation<'a>),
    /// An operation tag page.
    OperationTag(&'a OperationTag<'a>),
}

/// Builds the props for one generated page.
///
/// The outline always starts with a depth-1 `Overview` heading anchored at
/// `_top`; the remaining sections mirror what the rendered page contains.
pub fn page_props(title: impl Into<String>, schema: &Schema, content: PageContent<'_>) -> PageProps {
    let headings = match content {
        PageContent::Overview => overview_headings(schema),
        PageContent::Operation(operation) => operation_headings(schema, operation),
        PageContent::OperationTag(tag) => operation_tag_headings(tag),
    };
    PageProps {
        frontmatter: Frontmatter {
            title: title.into(),
        },
        headings,
    }
}

fn heading(depth: u8, text: impl Into<String>) -> MarkdownHeading {
    let text = text.into();
    let slug = slug::slugify(&text);
    MarkdownHeading { depth, text, slug }
}

fn heading_with_slug(
    depth: u8,
    text: impl Into<String>,
    slug: impl Into<String>,
) -> MarkdownHeading {
    MarkdownHeading {
        depth,
        text: text.into(),
        slug: slug.into(),
    }
}

fn with_top(items: Vec<MarkdownHeading>) -> Vec<MarkdownHeading> {
    let mut headings = vec![heading_with_slug(1, "Overview", TOP_SLUG)];
    headings.extend(items);
    headings
}

fn overview_headings(schema: &Schema) -> Vec<MarkdownHeading> {
    let mut items = Vec::new();

    if let Some(definitions) = security_definitions(&schema.document) {
        items.push(heading(2, "Authentication"));
        items.extend(definitions.keys().map(|name| heading(3, name)));
    }

    let tags = operations_by_tag(schema);
    if tags.values().any(|tag| !tag.entries.is_empty()) {
        items.push(heading_with_slug(2, "Operations", "operations"));
        for tag in tags.values() {
            // Tag pages get their own route; the overview outline lists the
            // operations flat, without a per-tag heading.
            for entry in &tag.entries {
                items.push(heading_with_slug(
                    3,
                    entry.operation.summary.as_deref().unwrap_or("unknown"),
                    operation_slug(entry),
                ));
            }
        }
    }

    let webhooks = webhook_operations(schema);
    if !webhooks.is_empty() {
        items.push(heading_with_slug(2, "Webhooks", "webhooks"));
        for entry in &webhooks {
            let operation_id = entry.operation.operation_id.as_deref().unwrap_or("unknown");
            items.push(heading_with_slug(
                4,
                operation_id,
                format!("webhook-{operation_id}"),
            ));
        }
    }

    with_top(items)
}

fn operation_tag_headings(tag: &OperationTag<'_>) -> Vec<MarkdownHeading> {
    with_top(vec![heading_with_slug(2, &tag.name, "overview")])
}

fn operation_headings(
    schema: &Schema,
    path_item_operation: &PathItemOperation<'_>,
) -> Vec<MarkdownHeading> {
    let PathItemOperation {
        operation,
        path_item,
        ..
    } = *path_item_operation;
    let mut items = Vec::new();

    if security_requirements(operation, schema).is_some_and(|requirements| !requirements.is_empty())
    {
        items.push(heading(2, "Authorizations"));
    }

    let parameters = parameters_by_location(operation, path_item);
    if !parameters.is_empty() {
        items.push(heading(2, "Parameters"));
        items.extend(
            parameters
                .keys()
                .map(|location| heading(3, format!("{} Parameters", capitalized(*location)))),
        );
    }

    if has_request_body(operation) {
        items.push(heading(2, "Request Body"));
    }

    if !operation.callbacks.is_empty() {
        items.push(heading(2, "Callbacks"));
        items.extend(operation.callbacks.keys().map(|identifier| heading(3, identifier)));
    }

    let responses = &operation.responses;
    if includes_default_response(responses) || !responses.responses.is_empty() {
        items.push(heading(2, "Responses"));
        items.extend(responses.responses.keys().map(|code| heading(3, code.to_string())));
        if includes_default_response(responses) {
            // The default response renders last, wherever it appears in the
            // source document.
            items.push(heading(3, "default"));
        }
    }

    with_top(items)
}

fn operation_slug(entry: &PathItemOperation<'_>) -> String {
    let operation_id = entry.operation.operation_id.as_deref().unwrap_or("unknown");
    format!("operation-{operation_id}-{method}", method = entry.method)
}

fn capitalized(location: ParameterLocation) -> String {
    use cruet::*;
    location.as_str().to_sentence_case()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::schema::operation::HttpMethod;
    use crate::schema::{Document, SchemaConfig};

    fn schema(document: serde_json::Value) -> Schema {
        let openapi = serde_json::from_value(document).expect("a valid OpenAPI document");
        Schema {
            config: SchemaConfig::new("api/petstore").expect("a valid config"),
            document: Document::new(openapi),
        }
    }

    fn empty_schema() -> Schema {
        schema(serde_json::json!({
            "openapi": "3.0.3",
            "info": { "title": "Petstore", "version": "1.0.0" },
            "paths": {}
        }))
    }

    fn heading_triples(props: &PageProps) -> Vec<(u8, &str, &str)> {
        props
            .headings
            .iter()
            .map(|heading| (heading.depth, heading.text.as_str(), heading.slug.as_str()))
            .collect()
    }

    /// Finds one operation of the schema by method for operation-page tests.
    fn find_operation(schema: &Schema, method: HttpMethod) -> PathItemOperation<'_> {
        operations_by_tag(schema)
            .values()
            .flat_map(|tag| tag.entries.clone())
            .find(|entry| entry.method == method)
            .expect("an operation with the requested method")
    }

    #[test]
    fn should_build_the_minimal_overview_outline() {
        let schema = empty_schema();
        let props = page_props("Petstore", &schema, PageContent::Overview);

        assert_eq!(props.frontmatter.title, "Petstore");
        assert_eq!(heading_triples(&props), vec![(1, "Overview", "_top")]);
    }

    #[test]
    fn should_build_the_operation_tag_outline() {
        let tag = OperationTag {
            name: "Pets".to_string(),
            entries: Vec::new(),
        };
        let props = page_props("Pets", &empty_schema(), PageContent::OperationTag(&tag));

        assert_eq!(
            heading_triples(&props),
            vec![(1, "Overview", "_top"), (2, "Pets", "overview")]
        );
    }

    #[test]
    fn should_outline_the_overview_with_security_operations_and_webhooks() {
        let mut schema = schema(serde_json::json!({
            "openapi": "3.0.3",
            "info": { "title": "Petstore", "version": "1.0.0" },
            "components": {
                "securitySchemes": {
                    "bearerAuth": { "type": "http", "scheme": "bearer" },
                    "apiKey": { "type": "apiKey", "in": "header", "name": "X-Api-Key" }
                }
            },
            "paths": {
                "/pets": {
                    "get": {
                        "operationId": "listPets",
                        "summary": "List pets",
                        "tags": ["pets"],
                        "responses": {}
                    },
                    "post": {
                        "operationId": "createPet",
                        "tags": ["pets"],
                        "responses": {}
                    }
                }
            }
        }));
        schema.document.webhooks.insert(
            "newPet".to_string(),
            serde_json::from_value(serde_json::json!({
                "post": { "operationId": "newPet", "responses": {} }
            }))
            .expect("a valid path item"),
        );

        let props = page_props("Petstore", &schema, PageContent::Overview);
        assert_eq!(
            heading_triples(&props),
            vec![
                (1, "Overview", "_top"),
                (2, "Authentication", "authentication"),
                (3, "bearerAuth", "bearerauth"),
                (3, "apiKey", "apikey"),
                (2, "Operations", "operations"),
                (3, "List pets", "operation-listPets-get"),
                (3, "unknown", "operation-createPet-post"),
                (2, "Webhooks", "webhooks"),
                (4, "newPet", "webhook-newPet"),
            ]
        );
    }

    #[test]
    fn should_outline_a_full_operation_page() {
        let schema = schema(serde_json::json!({
            "openapi": "3.0.3",
            "info": { "title": "Petstore", "version": "1.0.0" },
            "paths": {
                "/pets/{petId}": {
                    "parameters": [
                        { "name": "petId", "in": "path", "required": true, "schema": { "type": "string" } }
                    ],
                    "put": {
                        "operationId": "updatePet",
                        "security": [ { "bearerAuth": [] } ],
                        "parameters": [
                            { "name": "dryRun", "in": "query", "schema": { "type": "boolean" } }
                        ],
                        "requestBody": {
                            "content": { "application/json": { "schema": { "type": "object" } } }
                        },
                        "callbacks": {
                            "onUpdate": {
                                "{$request.body#/callbackUrl}": {
                                    "post": { "operationId": "onUpdate", "responses": {} }
                                }
                            }
                        },
                        "responses": {
                            "200": { "description": "ok" },
                            "default": { "description": "error" },
                            "404": { "description": "missing" }
                        }
                    }
                }
            }
        }));

        let operation = find_operation(&schema, HttpMethod::Put);
        let props = page_props("Update a pet", &schema, PageContent::Operation(&operation));
        assert_eq!(
            heading_triples(&props),
            vec![
                (1, "Overview", "_top"),
                (2, "Authorizations", "authorizations"),
                (2, "Parameters", "parameters"),
                (3, "Path Parameters", "path-parameters"),
                (3, "Query Parameters", "query-parameters"),
                (2, "Request Body", "request-body"),
                (2, "Callbacks", "callbacks"),
                (3, "onUpdate", "onupdate"),
                (2, "Responses", "responses"),
                (3, "200", "200"),
                (3, "404", "404"),
                (3, "default", "default"),
            ]
        );
    }

    #[test]
    fn should_order_the_default_response_last() {
        let schema = schema(serde_json::json!({
            "openapi": "3.0.3",
            "info": { "title": "Petstore", "version": "1.0.0" },
            "paths": {
                "/pets": {
                    "get": {
                        "operationId": "listPets",
                        "responses": {
                            "200": { "description": "ok" },
                            "default": { "description": "error" },
                            "404": { "description": "missing" }
                        }
                    }
                }
            }
        }));

        let operation = find_operation(&schema, HttpMethod::Get);
        let props = page_props("List pets", &schema, PageContent::Operation(&operation));
        let codes: Vec<&str> = props
            .headings
            .iter()
            .filter(|heading| heading.depth == 3)
            .map(|heading| heading.text.as_str())
            .collect();
        assert_eq!(codes, ["200", "404", "default"]);
    }

    #[test]
    fn should_skip_sections_an_operation_does_not_declare() {
        let schema = schema(serde_json::json!({
            "openapi": "3.0.3",
            "info": { "title": "Petstore", "version": "1.0.0" },
            "paths": {
                "/health": {
                    "get": { "operationId": "health", "responses": {} }
                }
            }
        }));

        let operation = find_operation(&schema, HttpMethod::Get);
        let props = page_props("Health", &schema, PageContent::Operation(&operation));
        assert_eq!(heading_triples(&props), vec![(1, "Overview", "_top")]);
    }

    #[test]
    fn should_serialize_page_props_for_the_host() {
        let props = page_props("Petstore", &empty_schema(), PageContent::Overview);
        insta::assert_json_snapshot!(props, @r#"
        {
          "frontmatter": {
            "title": "Petstore"
          },
          "headings": [
            {
              "depth": 1,
              "text": "Overview",
              "slug": "_top"
            }
          ]
        }
        "#);
    }
}
