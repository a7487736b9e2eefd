//! Token processing modules
//!
//! The pipeline composes four stages in a fixed order:
//!
//! 1. **Loader** - read the source JSON and build typed token trees
//! 2. **Classifier** - partition token sets into category buckets
//! 3. **Rewriter** - rewrite token references to match the output structure
//! 4. **Emitters** - serialize the buckets (lives in the `dtok-emit` crate)

pub mod ast;
pub mod classify;
pub mod loader;
pub mod pipeline;
pub mod rewrite;

pub use ast::{TokenLeaf, TokenNode, TokenTree};
pub use classify::{classify, Buckets, SetNames, SetRoute};
pub use loader::{load_token_sets, parse_token_sets, LoadError};
pub use pipeline::{Artifacts, Pipeline};
pub use rewrite::{number_unit_rule, rewrite_tree, RewriteRule};
