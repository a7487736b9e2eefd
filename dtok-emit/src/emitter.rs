//! Emitter trait definition
//!
//! This module defines the core Emitter trait that all artifact emitters
//! implement. The trait provides a uniform interface for serializing
//! classified token buckets.

use crate::error::EmitError;
use dtok_core::tokens::Buckets;

/// Trait for artifact emitters
///
/// Implementors serialize the classified, reference-rewritten buckets into
/// one textual artifact. Emitters must not perform I/O; the caller decides
/// where the artifact goes.
pub trait Emitter: Send + Sync {
    /// The name of this emitter (e.g. "nested-object", "css-variables")
    fn name(&self) -> &str;

    /// Optional description of this emitter
    fn description(&self) -> &str {
        ""
    }

    /// Serialize the buckets into the artifact text
    fn emit(&self, buckets: &Buckets) -> Result<String, EmitError>;
}
