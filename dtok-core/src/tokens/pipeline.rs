//! Stage composition
//!
//! The pipeline executes the pure stages in a fixed order:
//!
//! 1. **Load** - parse the source JSON into named token sets
//! 2. **Classify** - fold the sets into category buckets
//! 3. **Rewrite** - fix up `{number.unit.N}` references in the rounded bucket
//!
//! Emission (and every file write) lives outside this crate; the CLI feeds
//! the resulting [`Artifacts`] to the emitters in `dtok-emit`.

use crate::tokens::ast::TokenTree;
use crate::tokens::classify::{classify, Buckets, SetNames};
use crate::tokens::loader::{load_token_sets, LoadError};
use crate::tokens::rewrite::{number_unit_rule, rewrite_tree};
use indexmap::IndexMap;
use std::path::Path;

/// The classified, reference-rewritten trees ready for emission.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifacts {
    pub buckets: Buckets,
}

/// The core processing pipeline.
pub struct Pipeline {
    names: SetNames,
}

impl Pipeline {
    pub fn new() -> Self {
        Pipeline {
            names: SetNames::default(),
        }
    }

    /// A pipeline with non-default set-name identifiers.
    pub fn with_names(names: SetNames) -> Self {
        Pipeline { names }
    }

    /// Classify already-parsed token sets and rewrite references.
    pub fn run(&self, sets: &IndexMap<String, TokenTree>) -> Artifacts {
        let mut buckets = classify(sets, &self.names);
        // rounded values reference the primitive number tree, whose `unit`
        // wrapper level the classifier strips
        buckets.rounded = rewrite_tree(&buckets.rounded, &number_unit_rule());
        Artifacts { buckets }
    }

    /// Load a source file and run the full pipeline on it.
    pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<Artifacts, LoadError> {
        let sets = load_token_sets(path)?;
        Ok(self.run(&sets))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
