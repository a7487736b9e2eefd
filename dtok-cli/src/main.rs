//! Command-line interface for dtok
//! This binary runs the token build pipeline: it loads a design-tool token
//! export, classifies and rewrites the tokens, writes the split JSON files and
//! emitted artifacts, and invokes the external CSS-variable build tool.
//!
//! Usage:
//!   dtok [`<source>`] [--config `<file>`] [--out-dir `<dir>`]   - Run the build
//!   dtok --list-emitters                                    - List emitters

use clap::{Arg, ArgAction, Command};

mod build;

fn main() {
    let matches = Command::new("dtok")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build design-token artifacts from a design tool export")
        .arg(
            Arg::new("source")
                .help("Path to the token export JSON (overrides the configured path)")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration layered over the built-in defaults"),
        )
        .arg(
            Arg::new("out-dir")
                .long("out-dir")
                .short('o')
                .help("Output directory (overrides the configured path)"),
        )
        .arg(
            Arg::new("skip-tool")
                .long("skip-tool")
                .help("Do not invoke the external variable build tool")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-emitters")
                .long("list-emitters")
                .help("List available artifact emitters")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-emitters") {
        handle_list_emitters();
        return;
    }

    // an explicit --config is required to exist; the conventional
    // ./dtok.toml is layered only when present
    let mut loader = dtok_config::Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    } else {
        loader = loader.with_optional_file("dtok.toml");
    }
    let mut config = loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    if let Some(source) = matches.get_one::<String>("source") {
        config.paths.source = source.clone();
    }
    if let Some(out_dir) = matches.get_one::<String>("out-dir") {
        config.paths.output_dir = out_dir.clone();
    }

    let options = build::BuildOptions {
        skip_tool: matches.get_flag("skip-tool"),
    };
    if let Err(e) = build::run(&config, &options) {
        eprintln!("Build error: {}", e);
        std::process::exit(1);
    }
}

/// Handle the list-emitters command
fn handle_list_emitters() {
    let registry = dtok_emit::EmitterRegistry::with_defaults();
    println!("Available emitters:\n");

    for (name, description) in registry.describe_emitters() {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}
