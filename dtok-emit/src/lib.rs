//! Artifact emitters for classified token buckets
//!
//!     This crate serializes the buckets produced by `dtok-core` into the
//!     artifacts consumed by external collaborators: a nested source object
//!     for direct import by the component library, and a flat variable-name
//!     mapping for the CSS-variable build tool.
//!
//!     This is a pure lib, that is, it powers the dtok CLI but is shell
//!     agnostic: no code here writes files, prints, or reads env vars.
//!
//!     Emitter-specific capabilities are implemented with the Emitter trait;
//!     emitters have an emit() method, a name and a description. See the
//!     trait def [./emitter.rs].
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── emitter.rs          # Emitter trait definition
//!     ├── registry.rs         # EmitterRegistry for discovery and selection
//!     ├── strings.rs          # Key casing and annotation stripping
//!     ├── flatten.rs          # Path walking and the ordered PathRule list
//!     ├── emitters
//!     │   ├── nested.rs       # Nested source-object emitter
//!     │   └── css.rs          # Flat CSS-variable mapping emitter
//!     └── lib.rs
//!
//! Failure semantics
//!
//!     Emitters perform no validation. Distinct source paths that flatten to
//!     the same variable name (annotation stripping can cause this) silently
//!     last-write-win; callers needing collision detection add it themselves.

pub mod emitter;
pub mod emitters;
pub mod error;
pub mod flatten;
pub mod registry;
pub mod strings;

pub use emitter::Emitter;
pub use error::EmitError;
pub use registry::EmitterRegistry;
