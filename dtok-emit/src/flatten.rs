//! Path walking and the ordered path-rule list
//!
//! The flat CSS-variable namespace is derived from every leaf's full path
//! (bucket name first). An ordered list of [`PathRule`] records is folded
//! over the path before the remaining segments are joined with hyphens:
//!
//! 1. drop a leading `color` segment - colors need no type prefix
//! 2. rename a leading `zIndex` segment to `z`
//! 3. rename any `font-family` segment to `family`
//! 4. strip parenthesized annotations from every segment
//!
//! Rule 4 can make distinct source paths collide; the emitters resolve that
//! with silent last-write-wins.

use crate::strings::strip_annotations;
use dtok_core::tokens::{Buckets, TokenNode, TokenTree};
use serde_json::Value;

/// A named path-rewrite step.
#[derive(Debug, Clone, Copy)]
pub struct PathRule {
    pub name: &'static str,
    transform: fn(Vec<String>) -> Vec<String>,
}

impl PathRule {
    pub const fn new(name: &'static str, transform: fn(Vec<String>) -> Vec<String>) -> Self {
        PathRule { name, transform }
    }

    pub fn apply(&self, path: Vec<String>) -> Vec<String> {
        (self.transform)(path)
    }
}

fn drop_leading_color(mut path: Vec<String>) -> Vec<String> {
    if path.first().is_some_and(|segment| segment == "color") {
        path.remove(0);
    }
    path
}

fn abbreviate_z_index(mut path: Vec<String>) -> Vec<String> {
    if let Some(first) = path.first_mut() {
        if first == "zIndex" {
            *first = "z".to_string();
        }
    }
    path
}

fn rename_font_family(mut path: Vec<String>) -> Vec<String> {
    for segment in &mut path {
        if segment == "font-family" {
            *segment = "family".to_string();
        }
    }
    path
}

fn strip_segment_annotations(path: Vec<String>) -> Vec<String> {
    path.iter().map(|segment| strip_annotations(segment)).collect()
}

static CSS_VARIABLE_RULES: [PathRule; 4] = [
    PathRule::new("drop-leading-color", drop_leading_color),
    PathRule::new("abbreviate-z-index", abbreviate_z_index),
    PathRule::new("rename-font-family", rename_font_family),
    PathRule::new("strip-annotations", strip_segment_annotations),
];

/// The ordered rule list used for CSS variable names.
pub fn css_variable_rules() -> &'static [PathRule] {
    &CSS_VARIABLE_RULES
}

/// Flatten a full token path into one variable name.
pub fn flatten_name(path: &[String]) -> String {
    css_variable_rules()
        .iter()
        .fold(path.to_vec(), |path, rule| rule.apply(path))
        .join("-")
}

/// Attributes attached to a flat token for the downstream CSS generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAttributes {
    pub category: String,
    pub css_type: String,
}

/// Mark rounded tokens as border radii.
///
/// The downstream generator applies px→rem unit conversion to `size` tokens,
/// which plain numeric tokens must not get.
pub fn rounded_attributes(path: &[String]) -> Option<TokenAttributes> {
    if path.first().is_some_and(|segment| segment == "rounded") {
        Some(TokenAttributes {
            category: "size".to_string(),
            css_type: "borderRadius".to_string(),
        })
    } else {
        None
    }
}

/// One leaf token with its full path, flattened name and attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatToken {
    pub path: Vec<String>,
    pub name: String,
    pub value: Value,
    pub attributes: Option<TokenAttributes>,
}

/// Walk every bucket and collect its leaves in document order.
///
/// Primitive and brand buckets contribute their bucket name as the leading
/// path segment; the semantic colors tree is unprefixed since its own top
/// level already names the brands.
pub fn flatten_buckets(buckets: &Buckets) -> Vec<FlatToken> {
    let mut tokens = Vec::new();
    walk(&buckets.color, &["color".to_string()], &mut tokens);
    walk(&buckets.font, &["font".to_string()], &mut tokens);
    walk(&buckets.number, &["number".to_string()], &mut tokens);
    walk(&buckets.rounded, &["rounded".to_string()], &mut tokens);
    walk(&buckets.colors, &[], &mut tokens);
    walk(&buckets.brand, &["brand".to_string()], &mut tokens);
    tokens
}

fn walk(tree: &TokenTree, prefix: &[String], out: &mut Vec<FlatToken>) {
    for (key, node) in tree {
        let mut path = prefix.to_vec();
        path.push(key.clone());
        match node {
            TokenNode::Group(inner) => walk(inner, &path, out),
            TokenNode::Leaf(leaf) => out.push(FlatToken {
                name: flatten_name(&path),
                value: leaf.value.clone(),
                attributes: rounded_attributes(&path),
                path,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case(&["color", "gray", "50"], "gray-50")]
    #[case(&["zIndex", "hide"], "z-hide")]
    #[case(&["font", "font-family", "base"], "font-family-base")]
    #[case(&["brand (1)", "main"], "brand-main")]
    #[case(&["number", "0"], "number-0")]
    #[case(&["rounded", "none"], "rounded-none")]
    fn flattening_cases(#[case] segments: &[&str], #[case] expected: &str) {
        assert_eq!(flatten_name(&path(segments)), expected);
    }

    #[test]
    fn color_prefix_never_survives() {
        // only a *leading* color segment is dropped
        assert_eq!(flatten_name(&path(&["color", "color"])), "color");
        assert!(!flatten_name(&path(&["color", "gray", "50"])).starts_with("color-"));
    }

    #[test]
    fn annotation_stripping_can_collide() {
        let legacy = flatten_name(&path(&["brand (Legacy)", "main"]));
        let current = flatten_name(&path(&["brand (Current)", "main"]));
        assert_eq!(legacy, current);
    }

    #[test]
    fn rounded_tokens_are_marked_as_border_radius() {
        let attributes = rounded_attributes(&path(&["rounded", "none"])).unwrap();
        assert_eq!(attributes.category, "size");
        assert_eq!(attributes.css_type, "borderRadius");
        assert_eq!(rounded_attributes(&path(&["number", "0"])), None);
    }

    #[test]
    fn rules_are_applied_in_order() {
        let names: Vec<&str> = css_variable_rules().iter().map(|rule| rule.name).collect();
        assert_eq!(
            names,
            [
                "drop-leading-color",
                "abbreviate-z-index",
                "rename-font-family",
                "strip-annotations"
            ]
        );
    }
}
