//! Sidebar tree construction and the per-request placeholder rewrite.

use serde::{Deserialize, Serialize};

use crate::path::{replace_first_segment, strip_leading_and_trailing_slashes};
use crate::schema::operation::HttpMethod;
use crate::schema::{Schema, SchemaSet};

/// A single entry in the host's sidebar tree.
///
/// `Placeholder` marks the injection point the plugin's configuration step
/// plants in the user's sidebar; [`rewrite_sidebar`] replaces it with one
/// link per loaded schema on every request. Being a dedicated variant, it
/// cannot collide with any user-supplied group label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SidebarItem {
    /// A direct link to a page.
    Link(SidebarLink),
    /// A collapsible group of items.
    Group(SidebarGroup),
    /// The injection point for generated schema links.
    Placeholder,
}

/// A sidebar link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarLink {
    /// Link text.
    pub label: String,
    /// Target href, localized for the current request.
    pub href: String,
    /// Whether the link targets the page being rendered.
    pub is_current: bool,
    /// Optional badge rendered next to the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
}

/// A sidebar group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group label.
    pub label: String,
    /// Whether the group renders collapsed.
    pub collapsed: bool,
    /// Child items, in display order.
    pub entries: Vec<SidebarItem>,
    /// Optional badge rendered next to the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
}

impl SidebarGroup {
    /// Creates a group with the given children.
    pub fn new(label: impl Into<String>, entries: Vec<SidebarItem>, collapsed: bool) -> Self {
        Self {
            label: label.into(),
            collapsed,
            entries,
            badge: None,
        }
    }
}

/// A small label rendered next to a sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Badge text.
    pub text: String,
    /// Color variant.
    pub variant: BadgeVariant,
    /// Extra css class, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

/// Badge color variants understood by the host theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// Neutral note.
    Note,
    /// Positive hint.
    Tip,
    /// Attention-grabbing.
    Caution,
    /// Destructive or dangerous.
    Danger,
    /// Successful or safe.
    Success,
    /// Theme default.
    Default,
}

/// Badge describing an HTTP method, rendered next to an operation link.
pub fn method_badge(method: HttpMethod) -> Badge {
    Badge {
        text: method.as_str().to_uppercase(),
        variant: BadgeVariant::Caution,
        class: Some(format!("bn-openapi-method-{method}")),
    }
}

/// Builds a link whose href is localized for the current request.
///
/// The current path's first segment (its locale) replaces the href's first
/// segment, and the link is current only when the normalized current path
/// and the normalized localized href match exactly — a prefix match is not
/// enough. `current_path` is expected without surrounding slashes.
pub fn sidebar_link(
    current_path: &str,
    label: impl Into<String>,
    href: impl Into<String>,
    badge: Option<Badge>,
) -> SidebarItem {
    let locale = current_path.split('/').next().unwrap_or_default();
    let href = replace_first_segment(&href.into(), locale);
    let is_current = current_path == strip_leading_and_trailing_slashes(&href);
    SidebarItem::Link(SidebarLink {
        label: label.into(),
        href,
        is_current,
        badge,
    })
}

/// Rewrites the sidebar for one request, expanding every placeholder into
/// the generated schema links.
///
/// The tree is rebuilt rather than mutated: groups are reconstructed with
/// the rewrite applied to their children, links pass through untouched, and
/// each placeholder expands in place into `schemas.len()` links, preserving
/// sibling order around it. An empty sidebar short-circuits to an empty
/// tree.
pub fn rewrite_sidebar(
    current_path: &str,
    sidebar: &[SidebarItem],
    schemas: &SchemaSet,
) -> Vec<SidebarItem> {
    if sidebar.is_empty() {
        return Vec::new();
    }

    let links: Vec<SidebarItem> = schemas
        .values()
        .map(|schema| schema_link(current_path, schema))
        .collect();

    sidebar.iter().flat_map(|item| expand(item, &links)).collect()
}

fn schema_link(current_path: &str, schema: &Schema) -> SidebarItem {
    let Schema { config, document } = schema;
    let label = config
        .sidebar
        .label
        .clone()
        .unwrap_or_else(|| document.info.title.clone());
    sidebar_link(current_path, label, config.base_link(), None)
}

fn expand(item: &SidebarItem, links: &[SidebarItem]) -> Vec<SidebarItem> {
    match item {
        SidebarItem::Placeholder => links.to_vec(),
        SidebarItem::Group(group) => {
            let entries = group
                .entries
                .iter()
                .flat_map(|child| expand(child, links))
                .collect();
            vec![SidebarItem::Group(SidebarGroup {
                entries,
                ..group.clone()
            })]
        }
        SidebarItem::Link(link) => vec![SidebarItem::Link(link.clone())],
    }
}
