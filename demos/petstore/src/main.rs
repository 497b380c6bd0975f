//! Projects a small Petstore document into Beacon navigation data and
//! prints the result: static routes, the rewritten sidebar for one request,
//! and the heading outline of every generated page.

use anyhow::Result;
use beacon_openapi::{
    Document, PageContent, RequestContext, RouteData, Schema, SchemaConfig, SchemaSet,
    SidebarGroup, SidebarItem, on_request, operations_by_tag, page_props, schema_static_routes,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let schemas = load_schemas()?;

    let routes = schema_static_routes(&schemas);
    println!("routes:\n{}", serde_json::to_string_pretty(&routes)?);

    // One request against the overview page, with the plugin placeholder
    // planted between two regular sidebar entries.
    let context = RequestContext {
        pathname: "/api/petstore/".to_string(),
        locale: "en".to_string(),
        default_locale: "en".to_string(),
    };
    let mut route_data = RouteData {
        sidebar: vec![
            SidebarItem::Group(SidebarGroup::new("Guides", vec![], false)),
            SidebarItem::Placeholder,
        ],
        is_fallback: false,
    };
    on_request(&context, &mut route_data, &schemas);
    println!("sidebar:\n{}", serde_json::to_string_pretty(&route_data.sidebar)?);

    for (id, schema) in schemas.iter() {
        let overview = page_props(schema.document.info.title.clone(), schema, PageContent::Overview);
        println!("{id} overview:\n{}", serde_json::to_string_pretty(&overview)?);

        for tag in operations_by_tag(schema).values() {
            let tag_page = page_props(tag.name.clone(), schema, PageContent::OperationTag(tag));
            println!("{id} tag {}:\n{}", tag.name, serde_json::to_string_pretty(&tag_page)?);

            for entry in &tag.entries {
                let title = entry.operation.summary.clone().unwrap_or_else(|| tag.name.clone());
                let page = page_props(title, schema, PageContent::Operation(entry));
                println!("{id} operation:\n{}", serde_json::to_string_pretty(&page)?);
            }
        }
    }

    Ok(())
}

fn load_schemas() -> Result<SchemaSet> {
    let document: openapiv3::OpenAPI = serde_json::from_value(serde_json::json!({
        "openapi": "3.0.3",
        "info": { "title": "Petstore", "version": "1.0.0" },
        "components": {
            "securitySchemes": {
                "bearerAuth": { "type": "http", "scheme": "bearer" }
            }
        },
        "security": [ { "bearerAuth": [] } ],
        "paths": {
            "/pets": {
                "get": {
                    "operationId": "listPets",
                    "summary": "List all pets",
                    "tags": ["pets"],
                    "parameters": [
                        { "name": "limit", "in": "query", "schema": { "type": "integer" } }
                    ],
                    "responses": {
                        "200": { "description": "A paged array of pets" },
                        "default": { "description": "Unexpected error" }
                    }
                },
                "post": {
                    "operationId": "createPet",
                    "summary": "Create a pet",
                    "tags": ["pets"],
                    "requestBody": {
                        "content": { "application/json": { "schema": { "type": "object" } } }
                    },
                    "responses": {
                        "201": { "description": "Created" }
                    }
                }
            },
            "/pets/{petId}": {
                "parameters": [
                    { "name": "petId", "in": "path", "required": true, "schema": { "type": "string" } }
                ],
                "get": {
                    "operationId": "showPetById",
                    "summary": "Info for a specific pet",
                    "tags": ["pets"],
                    "responses": {
                        "200": { "description": "The pet" },
                        "404": { "description": "Not found" }
                    }
                }
            }
        }
    }))?;

    let mut schemas = SchemaSet::new();
    schemas.insert(
        "petstore",
        Schema {
            config: SchemaConfig::new("api/petstore")?.with_sidebar_label("Petstore"),
            document: Document::new(document),
        },
    );
    Ok(schemas)
}
