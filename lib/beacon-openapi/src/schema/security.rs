//! Security definitions and requirements.

use indexmap::IndexMap;
use openapiv3::{Operation, ReferenceOr, SecurityRequirement, SecurityScheme};

use super::{Document, Schema};

/// The document's named security schemes, when any are defined.
///
/// A missing components section and an empty scheme map are both treated as
/// "no definitions".
pub fn security_definitions(
    document: &Document,
) -> Option<&IndexMap<String, ReferenceOr<SecurityScheme>>> {
    document
        .components
        .as_ref()
        .map(|components| &components.security_schemes)
        .filter(|schemes| !schemes.is_empty())
}

/// Security requirements applying to an operation.
///
/// Operation-level requirements take precedence over the document's global
/// ones; `None` means the operation is reachable without credentials.
pub fn security_requirements<'a>(
    operation: &'a Operation,
    schema: &'a Schema,
) -> Option<&'a [SecurityRequirement]> {
    operation
        .security
        .as_deref()
        .or(schema.document.security.as_deref())
}
