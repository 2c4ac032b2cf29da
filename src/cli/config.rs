use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::output::format::OutputFormat;
use crate::output::persist::DEFAULT_OUTPUT_DIR;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "a11y-snapshot",
    version,
    about = "Snapshot and query captured accessibility trees"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: a11y-snapshot.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serialize a captured tree into a PageElements document
    Snapshot {
        /// Tree dump (.json, .yaml or .yml)
        #[arg(long)]
        input: String,

        /// Directory the document is written to
        #[arg(short, long)]
        output_dir: Option<String>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Print the document instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Find nodes matching a query
    Query {
        /// Tree dump (.json, .yaml or .yml)
        #[arg(long)]
        input: String,

        /// clickable, text, input, button, id, text-eq or description
        query: String,

        /// Value for id, text-eq and description queries
        #[arg(long)]
        value: Option<String>,
    },

    /// Print element counts for a captured tree
    Stats {
        /// Tree dump (.json, .yaml or .yml)
        #[arg(long)]
        input: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `a11y-snapshot.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: String,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            format: OutputFormat::Xml,
        }
    }
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("a11y-snapshot.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = config_path, error = %e, "malformed config, using defaults");
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Settings resolution (CLI > config > defaults)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub dir: PathBuf,
    pub format: OutputFormat,
}

pub fn resolve_output_settings(
    cli_dir: Option<&str>,
    cli_format: Option<OutputFormat>,
    config: &AppConfig,
) -> OutputSettings {
    OutputSettings {
        dir: PathBuf::from(cli_dir.unwrap_or(config.output.dir.as_str())),
        format: cli_format.unwrap_or(config.output.format),
    }
}
