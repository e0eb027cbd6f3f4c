use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::source::loader::{DEFAULT_USER_AGENT, FetchOptions};

pub const DEFAULT_CONFIG_FILE: &str = "pom-gen.yaml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "pom-gen",
    version,
    about = "Generate page-object classes from HTML pages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: pom-gen.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a page-object class for a page
    Generate {
        /// URL, file:// URL or local path of the page
        #[arg(long)]
        source: String,

        /// Name of the generated class
        #[arg(long)]
        class_name: String,

        /// Namespace of the generated class
        #[arg(long)]
        namespace: Option<String>,

        /// Output file path (default: <output_dir>/<ClassName>.cs)
        #[arg(short, long)]
        output: Option<String>,

        /// Write one JSON line per discovered element to this file
        #[arg(long)]
        trace: Option<String>,
    },

    /// Print the elements and locators that would be generated
    Inspect {
        /// URL, file:// URL or local path of the page
        #[arg(long)]
        source: String,

        /// Output format: console, json
        #[arg(long, default_value = "console")]
        format: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `pom-gen.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub generate: GenerateConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    pub trace: Option<String>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            output_dir: default_output_dir(),
            trace: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

// Serde default helpers
fn default_namespace() -> String { "PageObjects".to_string() }
fn default_output_dir() -> String { ".".to_string() }
fn default_timeout_secs() -> u64 { 30 }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if the file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_FILE);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            warn!(path = config_path, error = %e, "malformed config file, using defaults");
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

/// Build fetch options from the config file.
pub fn build_fetch_options(config: &FetchConfig) -> FetchOptions {
    FetchOptions {
        timeout: Duration::from_secs(config.timeout_secs),
        user_agent: config
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
    }
}

/// Resolve the output file: explicit `--output`, else `<output_dir>/<ClassName>.cs`.
pub fn resolve_output_path(output: Option<&str>, config: &GenerateConfig, class_name: &str) -> String {
    match output {
        Some(path) => path.to_string(),
        None => std::path::Path::new(&config.output_dir)
            .join(format!("{}.cs", class_name))
            .display()
            .to_string(),
    }
}
