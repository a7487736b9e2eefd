//! Source document loading
//!
//! This module reads the design-tool export (a single JSON document whose
//! top-level keys are token-set names) and converts it into typed token trees.
//!
//! A missing file or malformed JSON is a hard failure: there is nothing the
//! pipeline can do without a source document, so the CLI logs the error and
//! exits non-zero. An absent subtree inside a valid document is *not* an
//! error; the classifier simply produces an empty bucket for it.
//!
//! # Example
//!
//! ```rust,ignore
//! use dtok_core::tokens::loader::load_token_sets;
//!
//! let sets = load_token_sets("tokens/figma/tokens.json")?;
//! for (name, _tree) in &sets {
//!     println!("set: {name}");
//! }
//! ```

use crate::tokens::ast::{tree_from_value, TokenTree};
use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Error that can occur when loading the source document
#[derive(Debug, Clone)]
pub enum LoadError {
    /// IO error when reading the file
    Io(String),
    /// Malformed JSON, or a top level that is not an object
    Json(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "IO error: {}", msg),
            LoadError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Json(err.to_string())
    }
}

/// Read and parse a token export file into named token sets.
///
/// The returned map preserves the document's key order, which the classifier
/// relies on for its last-set-wins overwrite semantics.
pub fn load_token_sets<P: AsRef<Path>>(path: P) -> Result<IndexMap<String, TokenTree>, LoadError> {
    let source = fs::read_to_string(path)?;
    parse_token_sets(&source)
}

/// Parse token sets from in-memory JSON text.
pub fn parse_token_sets(source: &str) -> Result<IndexMap<String, TokenTree>, LoadError> {
    let document: Value = serde_json::from_str(source)?;
    let Value::Object(sets) = document else {
        return Err(LoadError::Json(
            "top level must be an object of token sets".to_string(),
        ));
    };
    Ok(sets
        .iter()
        .map(|(name, tree)| (name.clone(), tree_from_value(tree)))
        .collect())
}
