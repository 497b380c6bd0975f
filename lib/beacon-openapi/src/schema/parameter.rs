//! Grouping of operation parameters by location.

use std::fmt;

use indexmap::IndexMap;
use openapiv3::{Operation, Parameter, ParameterData, PathItem, ReferenceOr};
use serde::Serialize;

/// Where a parameter travels in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// A templated path segment.
    Path,
    /// A query string entry.
    Query,
    /// A request header.
    Header,
    /// A cookie.
    Cookie,
}

impl ParameterLocation {
    /// Lowercase location name, matching the document's `in` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Header => "header",
            Self::Cookie => "cookie",
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

fn split_parameter(parameter: &Parameter) -> (ParameterLocation, &ParameterData) {
    match parameter {
        Parameter::Query { parameter_data, .. } => (ParameterLocation::Query, parameter_data),
        Parameter::Header { parameter_data, .. } => (ParameterLocation::Header, parameter_data),
        Parameter::Path { parameter_data, .. } => (ParameterLocation::Path, parameter_data),
        Parameter::Cookie { parameter_data, .. } => (ParameterLocation::Cookie, parameter_data),
    }
}

/// Groups an operation's parameters — its own plus those inherited from the
/// enclosing path item — by location.
///
/// The operation wins when it redefines an inherited parameter with the same
/// name and location, and the parameter keeps its first-seen position; group
/// order is first-seen as well. Unresolved `$ref` parameters are skipped.
pub fn parameters_by_location<'a>(
    operation: &'a Operation,
    path_item: &'a PathItem,
) -> IndexMap<ParameterLocation, Vec<&'a ParameterData>> {
    let mut merged: IndexMap<(ParameterLocation, &str), &ParameterData> = IndexMap::new();
    for parameter in path_item.parameters.iter().chain(&operation.parameters) {
        let ReferenceOr::Item(parameter) = parameter else {
            continue;
        };
        let (location, data) = split_parameter(parameter);
        merged.insert((location, data.name.as_str()), data);
    }

    let mut groups: IndexMap<ParameterLocation, Vec<&ParameterData>> = IndexMap::new();
    for ((location, _name), data) in merged {
        groups.entry(location).or_default().push(data);
    }
    groups
}
