//! CLI interface for quill.
//!
//! Non-interactive: manifest in, Notion JSON out. Each run re-encodes
//! the whole manifest from scratch.
//!
//! The JSON lands on stdout, or in `--out` with a one-line summary on
//! stderr, so output can be piped or saved without mixing streams.

mod sample;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;

use crate::config::Config;
use crate::{encode, manifest};

/// quill — build Notion API JSON payloads from manifests.
#[derive(Debug, Parser)]
#[command(name = "quill", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow: page properties for a database row
  1. quill sample properties > page.toml
  2. Edit page.toml: one [[property]] table per database property.
  3. quill properties page.toml
     → the `properties` object for the Notion create-page call

Blocks:
  quill sample blocks > content.toml
  quill blocks content.toml --out blocks.json"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode a property manifest into a Notion `properties` object.
    ///
    /// Reads `[[property]]` tables and prints the resulting JSON object,
    /// keyed by property name.
    Properties {
        /// Path to the property manifest.
        manifest: PathBuf,

        /// Write the JSON to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Encode a block manifest into a Notion block array.
    ///
    /// Reads `[[block]]` tables and prints the resulting JSON array,
    /// in manifest order.
    Blocks {
        /// Path to the block manifest.
        manifest: PathBuf,

        /// Write the JSON to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print a starter manifest to stdout.
    Sample {
        /// Which manifest family to print.
        #[arg(value_enum)]
        mode: SampleMode,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum SampleMode {
    /// A `[[property]]` manifest covering the common property kinds.
    Properties,
    /// A `[[block]]` manifest covering the common block kinds.
    Blocks,
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config) -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Properties { manifest, out } => cmd_properties(&manifest, out.as_deref()),
        Command::Blocks { manifest, out } => cmd_blocks(config, &manifest, out.as_deref()),
        Command::Sample { mode } => {
            print!("{}", sample::manifest(&mode));
            Ok(())
        }
    }
}

fn cmd_properties(path: &Path, out: Option<&Path>) -> Result<(), String> {
    let fields = manifest::load_properties(path)
        .map_err(|e| format!("failed to load {}: {e}", path.display()))?;

    let properties = encode::encode_properties(&fields);

    let summary = describe_encoded(properties.len(), fields.len(), "property", "properties");
    emit(&Value::Object(properties), out, &summary)
}

fn cmd_blocks(config: &Config, path: &Path, out: Option<&Path>) -> Result<(), String> {
    let descriptors = manifest::load_blocks(path)
        .map_err(|e| format!("failed to load {}: {e}", path.display()))?;

    let blocks = encode::encode_blocks(&descriptors, &config.default_language);

    let summary = describe_encoded(blocks.len(), descriptors.len(), "block", "blocks");
    emit(&Value::Array(blocks), out, &summary)
}

/// Write pretty JSON to `--out` (with a stderr summary) or stdout.
fn emit(value: &Value, out: Option<&Path>, summary: &str) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("failed to serialize output: {e}"))?;

    match out {
        Some(path) => {
            fs::write(path, &json)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            eprintln!("Encoded {summary} → {}", path.display());
        }
        None => {
            println!("{json}");
        }
    }

    Ok(())
}

/// Short human-readable description of what was encoded.
///
/// Emitted and descriptor counts can differ: ineligible descriptors are
/// skipped and list-like blocks expand to several output blocks.
fn describe_encoded(emitted: usize, descriptors: usize, singular: &str, plural: &str) -> String {
    let noun = if emitted == 1 { singular } else { plural };
    let descriptor_noun = if descriptors == 1 {
        "descriptor"
    } else {
        "descriptors"
    };
    format!("{emitted} {noun} from {descriptors} {descriptor_noun}")
}
