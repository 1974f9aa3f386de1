//! Morse - unified text <-> Morse code tool

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing::{debug, info};

use morse_codecs::SymbolTable;
use morse_tools::{format_table, init_logging, DecodeArgs, EncodeArgs, GlobalConfig, RunOutcome};

/// Morse code converter
#[derive(Parser)]
#[command(name = "morse")]
#[command(about = "Convert between English text and Morse code")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalConfig,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert English text to Morse code
    Encode(EncodeArgs),
    /// Convert Morse code to English text
    Decode(DecodeArgs),
    /// List every supported character and its symbol
    Table,
}

fn print_subcommand_help(name: &str) -> Result<()> {
    let mut command = Cli::command();
    match command.find_subcommand_mut(name) {
        Some(sub) => sub.print_help()?,
        None => command.print_help()?,
    }
    Ok(())
}

fn report(name: &str, outcome: RunOutcome) -> Result<()> {
    match outcome {
        RunOutcome::ShowHelp => print_subcommand_help(name)?,
        RunOutcome::Stdout(converted) => println!("{}", converted),
        RunOutcome::File(path) => info!("Output written to {:?}", path),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.global.settings()?;
    init_logging(&cli.global, &settings)?;

    debug!("Loaded settings: {:?}", settings);

    match cli.command {
        Some(Commands::Encode(args)) => report("encode", args.run(&settings)?)?,
        Some(Commands::Decode(args)) => report("decode", args.run()?)?,
        Some(Commands::Table) => println!("{}", format_table(SymbolTable::standard())),
        None => Cli::command().print_help()?,
    }

    Ok(())
}
