//! Key casing and annotation stripping
//!
//! Output keys come from design-tool names: kebab-case groups
//! (`font-family`), size scales that start with a digit (`2xs`, `50`), and
//! brand names carrying a disambiguating suffix in parentheses
//! (`brand (1)`). These helpers normalize them for the emitted artifacts.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static KEBAB_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-([a-z0-9])").expect("pattern is valid"));

static ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").expect("pattern is valid"));

/// Convert a kebab-case segment to camelCase.
///
/// Only a hyphen followed by a lowercase letter or digit is folded; anything
/// else passes through verbatim. `font-family` becomes `fontFamily`,
/// `brand-1` becomes `brand1`, `2xs` is unchanged.
pub fn to_camel_case(input: &str) -> String {
    KEBAB_BOUNDARY
        .replace_all(input, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Remove parenthesized annotations and trim the result.
///
/// `brand (1)` becomes `brand`. Only leading/trailing whitespace is trimmed;
/// interior whitespace left behind by a mid-string annotation stays.
pub fn strip_annotations(input: &str) -> String {
    ANNOTATION.replace_all(input, "").trim().to_string()
}

/// Whether a key must be rendered as a quoted string literal.
///
/// Keys beginning with a digit cannot be bare identifiers.
pub fn needs_quoting(key: &str) -> bool {
    key.chars().next().is_some_and(|c| c.is_ascii_digit())
}
