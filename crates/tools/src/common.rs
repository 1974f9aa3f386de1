//! Common utilities and configuration for tools

use clap::Args;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use morse_codecs::SymbolTable;

use crate::config::Settings;
use crate::error::{Result, ToolError};

/// Global configuration options
#[derive(Debug, Clone, Default, Serialize, Deserialize, Args)]
pub struct GlobalConfig {
    /// Settings file (JSON or TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,
}

impl GlobalConfig {
    /// Settings from `--config`, or defaults when none was given
    pub fn settings(&self) -> Result<Settings> {
        match &self.config {
            Some(path) => load_config(path),
            None => Ok(Settings::default()),
        }
    }

    /// Level used when `RUST_LOG` is not set
    pub fn log_level<'a>(&self, settings: &'a Settings) -> &'a str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            settings.log_level.as_deref().unwrap_or("warn")
        }
    }
}

/// Initialize logging on stderr so stdout only carries converted output
pub fn init_logging(config: &GlobalConfig, settings: &Settings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level(settings)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Read a whole file as text
pub fn read_from_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ToolError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ToolError::FileIo {
            action: "reading",
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Write `content` verbatim, replacing any existing file
pub fn write_to_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| ToolError::FileIo {
        action: "writing to",
        path: path.to_path_buf(),
        source,
    })
}

/// Load configuration from file
pub fn load_config<T: for<'a> Deserialize<'a>>(path: &Path) -> Result<T> {
    let content = read_from_file(path)?;

    // Try JSON first, then TOML
    if let Ok(config) = serde_json::from_str(&content) {
        return Ok(config);
    }

    toml::from_str(&content).map_err(|e| ToolError::Config {
        path: path.to_path_buf(),
        msg: e.to_string(),
    })
}

/// Save configuration to file
pub fn save_config<T: Serialize>(config: &T, path: &Path) -> anyhow::Result<()> {
    let content = if path.extension().and_then(|s| s.to_str()) == Some("json") {
        serde_json::to_string_pretty(config)?
    } else {
        toml::to_string_pretty(config)?
    };

    write_to_file(path, &content)?;
    Ok(())
}

/// What a conversion run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No input was given; the caller should print usage
    ShowHelp,
    /// Converted text for the terminal
    Stdout(String),
    /// Converted text was written to this file
    File(PathBuf),
}

/// Send converted text to `output` if given, otherwise hand it back for stdout
pub fn emit(converted: String, output: Option<&Path>) -> Result<RunOutcome> {
    match output {
        Some(path) => {
            write_to_file(path, &converted)?;
            Ok(RunOutcome::File(path.to_path_buf()))
        }
        None => Ok(RunOutcome::Stdout(converted)),
    }
}

/// One `CHAR  SYMBOL` line per table entry
pub fn format_table(table: &SymbolTable) -> String {
    table
        .iter()
        .map(|(ch, symbol)| format!("{}  {}", ch, symbol))
        .collect::<Vec<_>>()
        .join("\n")
}
