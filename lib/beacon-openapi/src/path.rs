//! Path helpers shared by the route, sidebar, and middleware layers.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Regular expression matching a leading two-letter locale segment like `en/`.
static LOCALE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}/").expect("a valid regex"));

/// Removes every leading and trailing `/` from a path.
///
/// ```rust
/// use beacon_openapi::strip_leading_and_trailing_slashes;
///
/// assert_eq!(strip_leading_and_trailing_slashes("/api/petstore/"), "api/petstore");
/// ```
pub fn strip_leading_and_trailing_slashes(path: &str) -> &str {
    path.trim_matches('/')
}

/// Replaces the first segment of `path` with `segment`.
///
/// This is how generated hrefs pick up the locale of the current request:
/// the first segment of a base link is the locale slot. The behavior is fully
/// defined at the edges:
///
/// - an empty `segment` leaves `path` unchanged (requests at the site root
///   carry no locale segment);
/// - a leading `/` is preserved, and everything past the first segment is
///   kept verbatim, trailing slashes included;
/// - a path with no segments (`""` or `"/"`) becomes `segment` itself.
///
/// ```rust
/// use beacon_openapi::replace_first_segment;
///
/// assert_eq!(replace_first_segment("/api/petstore", "fr"), "/fr/petstore");
/// assert_eq!(replace_first_segment("/api/petstore", ""), "/api/petstore");
/// ```
pub fn replace_first_segment(path: &str, segment: &str) -> String {
    if segment.is_empty() {
        return path.to_string();
    }

    let (prefix, rest) = match path.strip_prefix('/') {
        Some(stripped) => ("/", stripped),
        None => ("", path),
    };

    match rest.split_once('/') {
        Some((_first, tail)) => format!("{prefix}{segment}/{tail}"),
        None => format!("{prefix}{segment}"),
    }
}

/// Strips surrounding slashes and a leading locale segment, so
/// `/en/api/petstore` and `api/petstore` compare equal.
pub(crate) fn strip_locale(path: &str) -> Cow<'_, str> {
    LOCALE_PREFIX.replace(strip_leading_and_trailing_slashes(path), "")
}
