//! Text to Morse command

use anyhow::Result;
use clap::{Args, Parser};
use std::path::PathBuf;
use tracing::{debug, info};

use morse_codecs::{EncodeOptions, Encoder};

use crate::common::{emit, GlobalConfig, RunOutcome};
use crate::config::{InputSource, Settings};

/// Encoder arguments
#[derive(Debug, Clone, Default, Args)]
pub struct EncodeArgs {
    /// Text to encode to Morse code
    #[arg(allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Input file containing text to encode
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file to write Morse code to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Treat unsupported characters as word breaks instead of failing
    #[arg(long)]
    pub skip_unknown: bool,
}

/// Standalone `morse-encode` command line
#[derive(Debug, Parser)]
#[command(name = "morse-encode")]
#[command(about = "Convert English text to Morse code")]
pub struct EncodeCli {
    #[command(flatten)]
    pub args: EncodeArgs,

    #[command(flatten)]
    pub global: GlobalConfig,
}

impl EncodeArgs {
    /// Effective encoder options; the flag only ever turns skipping on
    pub fn options(&self, settings: &Settings) -> EncodeOptions {
        EncodeOptions {
            skip_unknown: self.skip_unknown || settings.encode.skip_unknown,
        }
    }

    pub fn run(&self, settings: &Settings) -> Result<RunOutcome> {
        let Some(source) = InputSource::resolve(self.text.as_deref(), self.input.as_deref()) else {
            return Ok(RunOutcome::ShowHelp);
        };
        debug!("Encoding from {:?}", source);

        let text = source.read()?;
        let options = self.options(settings);
        let morse = Encoder::new(options).encode(&text)?;

        info!(
            "Encoded {} characters (skip_unknown={})",
            text.chars().count(),
            options.skip_unknown
        );

        Ok(emit(morse, self.output.as_deref())?)
    }
}
