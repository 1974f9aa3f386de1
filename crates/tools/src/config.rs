//! Configuration management for Morse tools

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use morse_codecs::EncodeOptions;

use crate::common::read_from_file;
use crate::error::Result;

/// Settings loadable with `--config`
///
/// ```toml
/// log_level = "info"
///
/// [encode]
/// skip_unknown = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    pub encode: EncodeOptions,
}

/// Where the input to convert comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
}

impl InputSource {
    /// A non-empty literal argument wins over `--input`; `None` when neither
    /// was given. An empty literal counts as not given.
    pub fn resolve(literal: Option<&str>, file: Option<&Path>) -> Option<Self> {
        if let Some(text) = literal.filter(|text| !text.is_empty()) {
            Some(InputSource::Text(text.to_string()))
        } else {
            file.map(|path| InputSource::File(path.to_path_buf()))
        }
    }

    /// Fetch the content. File content loses one trailing line terminator.
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Text(text) => Ok(text.clone()),
            InputSource::File(path) => {
                let content = read_from_file(path)?;
                let trimmed = content
                    .strip_suffix("\r\n")
                    .or_else(|| content.strip_suffix('\n'))
                    .unwrap_or(content.as_str());
                Ok(trimmed.to_string())
            }
        }
    }
}
