//! Nested source-object emitter
//!
//! Produces the generated source file the component library imports: one
//! exported binding per bucket, each a nested object literal mirroring the
//! classified tree exactly. Keys are annotation-stripped and camelCased;
//! keys beginning with a digit are quoted since they cannot be bare
//! identifiers. The artifact opens with a do-not-edit preamble.
//!
//! The `rounded` and `brand` exports are omitted entirely when their buckets
//! are empty; the other buckets emit as `{}`.

use crate::emitter::Emitter;
use crate::error::EmitError;
use crate::strings::{needs_quoting, strip_annotations, to_camel_case};
use dtok_core::tokens::{Buckets, TokenNode, TokenTree};
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde_json::Value;

const PREAMBLE: &str = "/**\n * Do not edit directly, this file was auto-generated.\n */\n\n";

/// Emits the nested source object artifact.
pub struct NestedObjectEmitter;

impl Emitter for NestedObjectEmitter {
    fn name(&self) -> &str {
        "nested-object"
    }

    fn description(&self) -> &str {
        "Nested source object with one export per token bucket"
    }

    fn emit(&self, buckets: &Buckets) -> Result<String, EmitError> {
        let exports: [(&str, &TokenTree, bool); 6] = [
            ("color", &buckets.color, false),
            ("font", &buckets.font, false),
            ("number", &buckets.number, false),
            ("rounded", &buckets.rounded, true),
            ("theme", &buckets.colors, false),
            ("brand", &buckets.brand, true),
        ];

        let mut out = String::from(PREAMBLE);
        for (name, tree, omit_when_empty) in exports {
            if omit_when_empty && tree.is_empty() {
                continue;
            }
            out.push_str(&format!(
                "export const {} = {};\n\n",
                name,
                stringify_render_tree(&render_tree(tree), 2)
            ));
        }
        Ok(out)
    }
}

/// A bucket tree re-keyed by the emitted identifier.
///
/// Distinct source keys can normalize to the same identifier (annotation
/// stripping in particular collapses `brand (Legacy)` and `brand (Current)`
/// onto `brand`). Emitting both would produce duplicate property names, so
/// colliding entries are merged first: groups merge member-wise, anything
/// else is overwritten by the later sibling.
enum RenderNode {
    Leaf(Value),
    Group(IndexMap<String, RenderNode>),
}

fn render_tree(tree: &TokenTree) -> IndexMap<String, RenderNode> {
    let mut out = IndexMap::new();
    for (key, node) in tree {
        let rendered = match node {
            TokenNode::Group(inner) => RenderNode::Group(render_tree(inner)),
            TokenNode::Leaf(leaf) => RenderNode::Leaf(leaf.value.clone()),
        };
        insert_merged(&mut out, safe_key(key), rendered);
    }
    out
}

fn insert_merged(out: &mut IndexMap<String, RenderNode>, key: String, node: RenderNode) {
    match out.entry(key) {
        Entry::Occupied(mut slot) => match (slot.get_mut(), node) {
            (RenderNode::Group(existing), RenderNode::Group(incoming)) => {
                for (key, node) in incoming {
                    insert_merged(existing, key, node);
                }
            }
            (slot_value, node) => *slot_value = node,
        },
        Entry::Vacant(slot) => {
            slot.insert(node);
        }
    }
}

fn safe_key(key: &str) -> String {
    let key = to_camel_case(&strip_annotations(key));
    if needs_quoting(&key) {
        format!("'{key}'")
    } else {
        key
    }
}

fn stringify_render_tree(tree: &IndexMap<String, RenderNode>, indent: usize) -> String {
    if tree.is_empty() {
        return "{}".to_string();
    }
    let pad = " ".repeat(indent);
    let lines: Vec<String> = tree
        .iter()
        .map(|(key, node)| {
            let rendered = match node {
                RenderNode::Group(inner) => stringify_render_tree(inner, indent + 2),
                RenderNode::Leaf(value) => stringify_value(value, indent + 2),
            };
            format!("{pad}{key}: {rendered}")
        })
        .collect();
    format!(
        "{{\n{}\n{}}}",
        lines.join(",\n"),
        " ".repeat(indent.saturating_sub(2))
    )
}

fn stringify_value(value: &Value, indent: usize) -> String {
    match value {
        Value::String(text) => format!("'{text}'"),
        // composite values (typography) render as nested literals too
        Value::Object(members) => {
            if members.is_empty() {
                return "{}".to_string();
            }
            let pad = " ".repeat(indent);
            let lines: Vec<String> = members
                .iter()
                .map(|(key, member)| {
                    format!("{pad}{}: {}", safe_key(key), stringify_value(member, indent + 2))
                })
                .collect();
            format!(
                "{{\n{}\n{}}}",
                lines.join(",\n"),
                " ".repeat(indent.saturating_sub(2))
            )
        }
        other => other.to_string(),
    }
}
