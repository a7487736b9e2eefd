//! The batch build: pipeline run, file writes, external tool invocation
//!
//! Everything with a side effect lives here. The pipeline itself only reads
//! the source file; this module writes the split JSON files (one per bucket,
//! empty rounded/brand omitted), the two emitter artifacts, and then runs
//! the external variable-generation tool. Any failure aborts the run; the
//! binary maps it to a non-zero exit.

use dtok_config::{DtokConfig, ToolConfig};
use dtok_core::tokens::ast::tree_to_json;
use dtok_core::tokens::{LoadError, Pipeline, SetNames};
use dtok_emit::{EmitError, EmitterRegistry};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Error that can occur during a build run
#[derive(Debug)]
pub enum BuildError {
    /// Source document missing or malformed
    Load(LoadError),
    /// Artifact serialization failed
    Emit(EmitError),
    /// IO error writing output files
    Io(String),
    /// The external tool is not on PATH
    ToolNotFound(String),
    /// The external tool exited non-zero
    ToolFailed { status: i32, stderr: String },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::Load(err) => write!(f, "{}", err),
            BuildError::Emit(err) => write!(f, "{}", err),
            BuildError::Io(msg) => write!(f, "IO error: {}", msg),
            BuildError::ToolNotFound(command) => {
                write!(f, "external tool '{}' not found on PATH", command)
            }
            BuildError::ToolFailed { status, stderr } => {
                write!(f, "external tool exited with status {}: {}", status, stderr)
            }
        }
    }
}

impl std::error::Error for BuildError {}

impl From<LoadError> for BuildError {
    fn from(err: LoadError) -> Self {
        BuildError::Load(err)
    }
}

impl From<EmitError> for BuildError {
    fn from(err: EmitError) -> Self {
        BuildError::Emit(err)
    }
}

impl From<std::io::Error> for BuildError {
    fn from(err: std::io::Error) -> Self {
        BuildError::Io(err.to_string())
    }
}

/// Flags controlling a build run
pub struct BuildOptions {
    /// Skip the external tool (useful in environments without it)
    pub skip_tool: bool,
}

/// Run the whole build: pipeline, split JSON files, artifacts, external tool.
pub fn run(config: &DtokConfig, options: &BuildOptions) -> Result<(), BuildError> {
    let names = SetNames {
        primitive: config.sets.primitive.clone(),
        semantic_prefix: config.sets.semantic_prefix.clone(),
        brand_prefix: config.sets.brand_prefix.clone(),
    };
    // the source is read before anything is written: a load failure leaves
    // existing outputs untouched
    let artifacts = Pipeline::with_names(names).run_file(&config.paths.source)?;
    let buckets = &artifacts.buckets;

    let out_dir = PathBuf::from(&config.paths.output_dir);
    let primitives_dir = out_dir.join("primitives");
    let semantic_dir = out_dir.join("semantic");
    fs::create_dir_all(&primitives_dir)?;
    fs::create_dir_all(&semantic_dir)?;

    write_json(
        &primitives_dir.join("color.json"),
        &json!({ "color": tree_to_json(&buckets.color) }),
    )?;
    write_json(
        &primitives_dir.join("font.json"),
        &json!({ "font": tree_to_json(&buckets.font) }),
    )?;
    write_json(
        &primitives_dir.join("number.json"),
        &json!({ "number": tree_to_json(&buckets.number) }),
    )?;
    if !buckets.rounded.is_empty() {
        write_json(
            &primitives_dir.join("rounded.json"),
            &json!({ "rounded": tree_to_json(&buckets.rounded) }),
        )?;
    }
    write_json(&semantic_dir.join("colors.json"), &tree_to_json(&buckets.colors))?;
    if !buckets.brand.is_empty() {
        write_json(
            &semantic_dir.join("brands.json"),
            &json!({ "brand": tree_to_json(&buckets.brand) }),
        )?;
    }

    let registry = EmitterRegistry::with_defaults();
    write_text(
        &out_dir.join(&config.artifacts.nested),
        &registry.emit(buckets, "nested-object")?,
    )?;
    write_text(
        &out_dir.join(&config.artifacts.variables),
        &registry.emit(buckets, "css-variables")?,
    )?;

    if options.skip_tool {
        return Ok(());
    }
    run_tool(&config.tool)
}

fn write_json(path: &Path, value: &Value) -> Result<(), BuildError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| BuildError::Emit(EmitError::Serialization(err.to_string())))?;
    write_text(path, &(text + "\n"))
}

fn write_text(path: &Path, text: &str) -> Result<(), BuildError> {
    fs::write(path, text)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn run_tool(tool: &ToolConfig) -> Result<(), BuildError> {
    let program =
        which::which(&tool.command).map_err(|_| BuildError::ToolNotFound(tool.command.clone()))?;
    let output = std::process::Command::new(program)
        .args(&tool.args)
        .output()
        .map_err(|err| BuildError::Io(err.to_string()))?;
    if !output.status.success() {
        return Err(BuildError::ToolFailed {
            status: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    println!("External build tool finished: {}", tool.command);
    Ok(())
}
