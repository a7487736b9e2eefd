//! Flat CSS-variable mapping emitter
//!
//! Produces the flat name → value document consumed by the external
//! CSS-variable build tool. Names come from [`crate::flatten`]'s path rules;
//! rounded tokens carry a `size`/`borderRadius` attribute block so the tool
//! can apply px→rem conversion to them.
//!
//! No validation happens here: names that collide after annotation stripping
//! silently last-write-win.

use crate::emitter::Emitter;
use crate::error::EmitError;
use crate::flatten::flatten_buckets;
use dtok_core::tokens::Buckets;
use serde_json::{json, Map, Value};

/// Emits the flat variable mapping artifact.
pub struct CssVariablesEmitter;

impl Emitter for CssVariablesEmitter {
    fn name(&self) -> &str {
        "css-variables"
    }

    fn description(&self) -> &str {
        "Flat kebab-case variable mapping for the CSS build tool"
    }

    fn emit(&self, buckets: &Buckets) -> Result<String, EmitError> {
        let mut document = Map::new();
        for token in flatten_buckets(buckets) {
            let mut entry = Map::new();
            entry.insert("value".to_string(), token.value);
            if let Some(attributes) = token.attributes {
                entry.insert(
                    "attributes".to_string(),
                    json!({
                        "category": attributes.category,
                        "type": attributes.css_type,
                    }),
                );
            }
            document.insert(token.name, Value::Object(entry));
        }
        serde_json::to_string_pretty(&Value::Object(document))
            .map(|text| text + "\n")
            .map_err(|err| EmitError::Serialization(err.to_string()))
    }
}
