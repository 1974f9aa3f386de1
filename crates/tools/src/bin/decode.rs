//! Morse Decode - convert Morse code to English text

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::info;

use morse_tools::{init_logging, DecodeCli, RunOutcome};

fn main() -> Result<()> {
    let cli = DecodeCli::parse();
    let settings = cli.global.settings()?;
    init_logging(&cli.global, &settings)?;

    match cli.args.run()? {
        RunOutcome::ShowHelp => DecodeCli::command().print_help()?,
        RunOutcome::Stdout(text) => println!("{}", text),
        RunOutcome::File(path) => info!("Decoded text written to {:?}", path),
    }

    Ok(())
}
