//! Token tree data model
//!
//! A token document is an arbitrarily nested mapping from string keys to either
//! further mappings or token leaves. The shape of every node is decided once,
//! when the JSON is converted into [`TokenNode`], instead of being probed with
//! "does it have a `value`?" checks at every use site.
//!
//! Trees preserve source-document key order: the classifier's overwrite
//! semantics ("last processed set wins") are defined in terms of that order.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// An insertion-ordered mapping of token names to nodes.
pub type TokenTree = IndexMap<String, TokenNode>;

/// A node in a token tree.
///
/// A JSON object is a leaf iff it carries a `value` key; otherwise it is a
/// grouping node and conversion recurses into its members.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenNode {
    Leaf(TokenLeaf),
    Group(TokenTree),
}

/// The atomic token unit: a value plus optional metadata.
///
/// `value` is usually a string (possibly containing an embedded reference to
/// another token's path); typography-style composite tokens carry a JSON
/// object whose string members participate in reference rewriting.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenLeaf {
    pub value: Value,
    pub token_type: Option<String>,
    pub description: Option<String>,
}

impl TokenNode {
    /// The subtree of a group node, if this is one.
    pub fn as_group(&self) -> Option<&TokenTree> {
        match self {
            TokenNode::Group(tree) => Some(tree),
            TokenNode::Leaf(_) => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TokenNode::Leaf(_))
    }
}

/// Convert a raw JSON value into a token tree.
///
/// Members that are not JSON objects cannot be tokens or groups and are
/// dropped silently. A `null` in the `value` slot still marks a leaf: the
/// distinction is presence of the key, since JSON has no `undefined`.
pub fn tree_from_value(value: &Value) -> TokenTree {
    let Value::Object(members) = value else {
        return TokenTree::new();
    };
    members
        .iter()
        .filter_map(|(key, member)| node_from_value(member).map(|node| (key.clone(), node)))
        .collect()
}

fn node_from_value(value: &Value) -> Option<TokenNode> {
    let Value::Object(members) = value else {
        return None;
    };
    if let Some(leaf_value) = members.get("value") {
        Some(TokenNode::Leaf(TokenLeaf {
            value: leaf_value.clone(),
            token_type: string_member(members, "type"),
            description: string_member(members, "description"),
        }))
    } else {
        Some(TokenNode::Group(tree_from_value(value)))
    }
}

fn string_member(members: &Map<String, Value>, key: &str) -> Option<String> {
    members.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Serialize a token tree back into plain JSON.
///
/// Leaves become `{ "value": .., "type": .., "description": .. }` objects with
/// absent metadata omitted, matching the shape consumed by downstream token
/// tooling.
pub fn tree_to_json(tree: &TokenTree) -> Value {
    let members: Map<String, Value> = tree
        .iter()
        .map(|(key, node)| (key.clone(), node_to_json(node)))
        .collect();
    Value::Object(members)
}

fn node_to_json(node: &TokenNode) -> Value {
    match node {
        TokenNode::Group(tree) => tree_to_json(tree),
        TokenNode::Leaf(leaf) => {
            let mut members = Map::new();
            members.insert("value".to_string(), leaf.value.clone());
            if let Some(token_type) = &leaf.token_type {
                members.insert("type".to_string(), Value::String(token_type.clone()));
            }
            if let Some(description) = &leaf.description {
                members.insert("description".to_string(), Value::String(description.clone()));
            }
            Value::Object(members)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_with_value_key_is_a_leaf() {
        let tree = tree_from_value(&json!({
            "gray": { "50": { "value": "#f8f9fc", "type": "color" } }
        }));
        let gray = tree["gray"].as_group().unwrap();
        match &gray["50"] {
            TokenNode::Leaf(leaf) => {
                assert_eq!(leaf.value, json!("#f8f9fc"));
                assert_eq!(leaf.token_type.as_deref(), Some("color"));
                assert_eq!(leaf.description, None);
            }
            TokenNode::Group(_) => panic!("expected a leaf"),
        }
    }

    #[test]
    fn null_value_still_marks_a_leaf() {
        let tree = tree_from_value(&json!({ "odd": { "value": null } }));
        assert!(tree["odd"].is_leaf());
    }

    #[test]
    fn non_object_members_are_dropped() {
        let tree = tree_from_value(&json!({
            "note": "not a token",
            "count": 3,
            "real": { "value": "0" }
        }));
        assert_eq!(tree.len(), 1);
        assert!(tree.contains_key("real"));
    }

    #[test]
    fn json_round_trip_omits_absent_metadata() {
        let tree = tree_from_value(&json!({
            "a": { "value": "1" },
            "b": { "value": "2", "description": "two" }
        }));
        assert_eq!(
            tree_to_json(&tree),
            json!({
                "a": { "value": "1" },
                "b": { "value": "2", "description": "two" }
            })
        );
    }

    #[test]
    fn key_order_follows_the_source_document() {
        let tree = tree_from_value(&json!({
            "zebra": { "value": "1" },
            "alpha": { "value": "2" }
        }));
        let keys: Vec<&String> = tree.keys().collect();
        assert_eq!(keys, ["zebra", "alpha"]);
    }
}
