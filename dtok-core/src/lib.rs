//! Core token model and transformation pipeline for the dtok toolchain
//!
//!     This crate ingests a design-tool token export (a nested JSON document of
//!     named token sets), classifies the sets into primitive / semantic / brand
//!     buckets, and rewrites cross-references between tokens so they match the
//!     renamed output structure.
//!
//!     This is a pure lib: it powers the dtok CLI but is shell agnostic, that is
//!     no code here should suppose a shell environment, be it to std print, env
//!     vars etc. The only side effect is the initial file read in the loader;
//!     everything downstream is a pure function over immutable trees.
//!
//!     The file structure:
//!     .
//!     ├── tokens
//!     │   ├── ast.rs          # TokenNode / TokenTree model, JSON conversion
//!     │   ├── loader.rs       # Source document loading
//!     │   ├── classify.rs     # Set partitioning into category buckets
//!     │   ├── rewrite.rs      # Reference rewriting
//!     │   └── pipeline.rs     # Stage composition
//!     └── lib.rs

pub mod tokens;
