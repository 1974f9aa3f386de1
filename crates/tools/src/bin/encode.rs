//! Morse Encode - convert English text to Morse code

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::info;

use morse_tools::{init_logging, EncodeCli, RunOutcome};

fn main() -> Result<()> {
    let cli = EncodeCli::parse();
    let settings = cli.global.settings()?;
    init_logging(&cli.global, &settings)?;

    match cli.args.run(&settings)? {
        RunOutcome::ShowHelp => EncodeCli::command().print_help()?,
        RunOutcome::Stdout(morse) => println!("{}", morse),
        RunOutcome::File(path) => info!("Morse code written to {:?}", path),
    }

    Ok(())
}
