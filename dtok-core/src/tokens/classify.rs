//! Set partitioning into category buckets
//!
//! Every token set routes to exactly one of {primitive, semantic, brand,
//! dropped}, decided by its name. Classification is an explicit fold over the
//! sets with a pure merge step, so the overwrite policies below are part of
//! the merge function's contract rather than an accident of mutation order:
//!
//! - **primitive**: the single set whose name equals the configured primitive
//!   identifier contributes `color`, `typo` (renamed to `font`) and
//!   `number.unit` (the `unit` wrapper level is stripped). Absent subtrees
//!   yield empty buckets, never errors.
//! - **semantic**: every set with the semantic prefix. A `color` subtree
//!   replaces the `colors` bucket wholesale; a `shape.rounded` subtree
//!   replaces the `rounded` bucket. In both cases the last set in document
//!   order wins - assignment, not merge.
//! - **brand**: the `brand` subtree of the *first* matching set only, guarded
//!   by a bucket-is-empty check. Brand sets are assumed to carry identical
//!   values, so later ones are skipped without being validated.
//! - anything else is dropped without warning.

use crate::tokens::ast::TokenTree;
use indexmap::IndexMap;

/// Configured set-name identifiers used for routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetNames {
    /// Exact name of the primitive set (e.g. `primitive/value`)
    pub primitive: String,
    /// Prefix of semantic sets (e.g. `semantic/`)
    pub semantic_prefix: String,
    /// Prefix of brand sets (e.g. `brand/`)
    pub brand_prefix: String,
}

impl Default for SetNames {
    fn default() -> Self {
        SetNames {
            primitive: "primitive/value".to_string(),
            semantic_prefix: "semantic/".to_string(),
            brand_prefix: "brand/".to_string(),
        }
    }
}

/// Which classifier branch a set name routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetRoute {
    Primitive,
    Semantic,
    Brand,
    Dropped,
}

/// Route a set name to its classifier branch.
///
/// The primitive identifier is checked first so that a primitive set whose
/// name happens to share a prefix with the others still routes exactly once.
pub fn route(name: &str, names: &SetNames) -> SetRoute {
    if name == names.primitive {
        SetRoute::Primitive
    } else if name.starts_with(&names.semantic_prefix) {
        SetRoute::Semantic
    } else if name.starts_with(&names.brand_prefix) {
        SetRoute::Brand
    } else {
        SetRoute::Dropped
    }
}

/// The category buckets produced by classification.
///
/// `color`, `font`, `number` and `rounded` are the primitive side; `colors`
/// holds the semantic color tree and `brand` the shared brand property bag.
/// Buckets are built once per pipeline run and never mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buckets {
    pub color: TokenTree,
    pub font: TokenTree,
    pub number: TokenTree,
    pub rounded: TokenTree,
    pub colors: TokenTree,
    pub brand: TokenTree,
}

/// Partition token sets into category buckets.
pub fn classify(sets: &IndexMap<String, TokenTree>, names: &SetNames) -> Buckets {
    sets.iter().fold(Buckets::default(), |buckets, (name, set)| {
        merge_set(buckets, route(name, names), set)
    })
}

/// The merge step of the classification fold.
///
/// Takes the buckets accumulated so far plus one routed set and returns the
/// new bucket state. Pure: callers can exercise the overwrite policies
/// directly by feeding sets in a chosen order.
pub fn merge_set(mut buckets: Buckets, set_route: SetRoute, set: &TokenTree) -> Buckets {
    match set_route {
        SetRoute::Primitive => {
            if let Some(color) = subtree(set, "color") {
                buckets.color = color.clone();
            }
            if let Some(typo) = subtree(set, "typo") {
                buckets.font = typo.clone();
            }
            if let Some(unit) = subtree(set, "number").and_then(|number| subtree(number, "unit")) {
                buckets.number = unit.clone();
            }
        }
        SetRoute::Semantic => {
            if let Some(color) = subtree(set, "color") {
                buckets.colors = color.clone();
            }
            if let Some(rounded) = subtree(set, "shape").and_then(|shape| subtree(shape, "rounded"))
            {
                buckets.rounded = rounded.clone();
            }
        }
        SetRoute::Brand => {
            if buckets.brand.is_empty() {
                if let Some(brand) = subtree(set, "brand") {
                    buckets.brand = brand.clone();
                }
            }
        }
        SetRoute::Dropped => {}
    }
    buckets
}

fn subtree<'a>(tree: &'a TokenTree, key: &str) -> Option<&'a TokenTree> {
    tree.get(key).and_then(|node| node.as_group())
}
