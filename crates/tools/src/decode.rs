//! Morse to text command

use anyhow::Result;
use clap::{Args, Parser};
use std::path::PathBuf;
use tracing::{debug, info};

use morse_codecs::Decoder;

use crate::common::{emit, GlobalConfig, RunOutcome};
use crate::config::InputSource;

/// Decoder arguments
#[derive(Debug, Clone, Default, Args)]
pub struct DecodeArgs {
    /// Morse code to decode
    #[arg(allow_hyphen_values = true)]
    pub morse: Option<String>,

    /// Input file containing Morse code to decode
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file to write decoded text to
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Standalone `morse-decode` command line
#[derive(Debug, Parser)]
#[command(name = "morse-decode")]
#[command(about = "Convert Morse code to English text")]
pub struct DecodeCli {
    #[command(flatten)]
    pub args: DecodeArgs,

    #[command(flatten)]
    pub global: GlobalConfig,
}

impl DecodeArgs {
    pub fn run(&self) -> Result<RunOutcome> {
        let Some(source) = InputSource::resolve(self.morse.as_deref(), self.input.as_deref()) else {
            return Ok(RunOutcome::ShowHelp);
        };
        debug!("Decoding from {:?}", source);

        let morse = source.read()?;
        let text = Decoder::default().decode(&morse)?;

        info!("Decoded {} characters", text.chars().count());

        Ok(emit(text, self.output.as_deref())?)
    }
}
