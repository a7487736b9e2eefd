//! Reference rewriting
//!
//! Token values may contain textual references to other tokens, written as
//! `{category.subpath.index}`. When the emitters rename parts of the output
//! structure, references captured against the *source* structure would
//! dangle; this module rewrites them to match.
//!
//! [`rewrite_tree`] never mutates its input: the pipeline composes multiple
//! rewrite calls and callers assume the original trees are untouched.
//!
//! One concrete rule is used in production: `{number.unit.N}` becomes
//! `{number.N}`, matching the classifier's stripping of the `unit` wrapper
//! level from the primitive number tree.

use crate::tokens::ast::{TokenLeaf, TokenNode, TokenTree};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static NUMBER_UNIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{number\.unit\.(\d+)\}").expect("pattern is valid"));

/// A textual substitution rule applied to leaf values.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    pub fn new(pattern: Regex, replacement: impl Into<String>) -> Self {
        RewriteRule {
            pattern,
            replacement: replacement.into(),
        }
    }

    /// Apply the substitution to one string, leaving non-matching text as is.
    pub fn apply(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }
}

/// The production rule: `{number.unit.N}` → `{number.N}`.
pub fn number_unit_rule() -> RewriteRule {
    RewriteRule::new(NUMBER_UNIT.clone(), "{number.$1}")
}

/// Return a new tree with the rule applied to every leaf's string value.
///
/// For compound values (typography composites), every string-typed member of
/// the value object is rewritten; all other fields pass through unchanged.
/// Group nodes recurse.
pub fn rewrite_tree(tree: &TokenTree, rule: &RewriteRule) -> TokenTree {
    tree.iter()
        .map(|(key, node)| {
            let rewritten = match node {
                TokenNode::Group(inner) => TokenNode::Group(rewrite_tree(inner, rule)),
                TokenNode::Leaf(leaf) => TokenNode::Leaf(rewrite_leaf(leaf, rule)),
            };
            (key.clone(), rewritten)
        })
        .collect()
}

fn rewrite_leaf(leaf: &TokenLeaf, rule: &RewriteRule) -> TokenLeaf {
    let value = match &leaf.value {
        Value::String(text) => Value::String(rule.apply(text)),
        Value::Object(members) => Value::Object(
            members
                .iter()
                .map(|(key, member)| {
                    let member = match member {
                        Value::String(text) => Value::String(rule.apply(text)),
                        other => other.clone(),
                    };
                    (key.clone(), member)
                })
                .collect(),
        ),
        other => other.clone(),
    };
    TokenLeaf {
        value,
        token_type: leaf.token_type.clone(),
        description: leaf.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::ast::tree_from_value;
    use serde_json::json;

    fn leaf_value<'a>(tree: &'a TokenTree, key: &str) -> &'a Value {
        match &tree[key] {
            TokenNode::Leaf(leaf) => &leaf.value,
            TokenNode::Group(_) => panic!("expected a leaf"),
        }
    }

    #[test]
    fn rewrites_number_unit_references() {
        let tree = tree_from_value(&json!({
            "none": { "value": "{number.unit.0}" },
            "full": { "value": "{number.unit.9999}" }
        }));
        let rewritten = rewrite_tree(&tree, &number_unit_rule());
        assert_eq!(leaf_value(&rewritten, "none"), &json!("{number.0}"));
        assert_eq!(leaf_value(&rewritten, "full"), &json!("{number.9999}"));
    }

    #[test]
    fn surrounding_text_is_untouched() {
        let tree = tree_from_value(&json!({
            "pad": { "value": "calc({number.unit.4} * 2)" }
        }));
        let rewritten = rewrite_tree(&tree, &number_unit_rule());
        assert_eq!(leaf_value(&rewritten, "pad"), &json!("calc({number.4} * 2)"));
    }

    #[test]
    fn compound_values_rewrite_string_members_only() {
        let tree = tree_from_value(&json!({
            "body": {
                "value": {
                    "fontSize": "{number.unit.4}",
                    "lineHeight": 1.5
                }
            }
        }));
        let rewritten = rewrite_tree(&tree, &number_unit_rule());
        assert_eq!(
            leaf_value(&rewritten, "body"),
            &json!({ "fontSize": "{number.4}", "lineHeight": 1.5 })
        );
    }

    #[test]
    fn metadata_and_groups_pass_through() {
        let tree = tree_from_value(&json!({
            "shape": {
                "none": {
                    "value": "{number.unit.0}",
                    "type": "borderRadius",
                    "description": "no rounding"
                }
            }
        }));
        let rewritten = rewrite_tree(&tree, &number_unit_rule());
        let shape = rewritten["shape"].as_group().unwrap();
        match &shape["none"] {
            TokenNode::Leaf(leaf) => {
                assert_eq!(leaf.value, json!("{number.0}"));
                assert_eq!(leaf.token_type.as_deref(), Some("borderRadius"));
                assert_eq!(leaf.description.as_deref(), Some("no rounding"));
            }
            TokenNode::Group(_) => panic!("expected a leaf"),
        }
    }

    #[test]
    fn input_tree_is_not_mutated() {
        let tree = tree_from_value(&json!({ "none": { "value": "{number.unit.0}" } }));
        let snapshot = tree.clone();
        let _ = rewrite_tree(&tree, &number_unit_rule());
        assert_eq!(tree, snapshot);
    }
}
