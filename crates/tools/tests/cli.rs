//! Integration tests for the encode/decode commands.
//!
//! These drive the same argument structs the binaries parse, against real
//! files in a temporary directory.

use clap::Parser;
use std::fs;
use tempfile::TempDir;

use morse_tools::{DecodeCli, EncodeCli, RunOutcome, Settings, ToolError};

const TEXT: &str = "HELLO WORLD";
const MORSE: &str = ".... . .-.. .-.. --- / .-- --- .-. .-.. -..";

fn encode_cli(args: &[&str]) -> EncodeCli {
    EncodeCli::try_parse_from(std::iter::once("morse-encode").chain(args.iter().copied()))
        .expect("Failed to parse encode arguments")
}

fn decode_cli(args: &[&str]) -> DecodeCli {
    DecodeCli::try_parse_from(std::iter::once("morse-decode").chain(args.iter().copied()))
        .expect("Failed to parse decode arguments")
}

mod encode_command {
    use super::*;

    #[test]
    fn test_command_line_text() {
        let cli = encode_cli(&["HELLO"]);
        let outcome = cli.args.run(&Settings::default()).unwrap();
        assert_eq!(outcome, RunOutcome::Stdout(".... . .-.. .-.. ---".to_string()));
    }

    #[test]
    fn test_input_and_output_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, TEXT).unwrap();

        let cli = encode_cli(&[
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);
        let outcome = cli.args.run(&Settings::default()).unwrap();

        assert_eq!(outcome, RunOutcome::File(output.clone()));
        // Raw content, no newline appended
        assert_eq!(fs::read_to_string(&output).unwrap(), MORSE);
    }

    #[test]
    fn test_input_file_with_trailing_newline() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("in.txt");
        fs::write(&input, "Hello World\n").unwrap();

        let cli = encode_cli(&["-i", input.to_str().unwrap()]);
        let outcome = cli.args.run(&Settings::default()).unwrap();
        assert_eq!(outcome, RunOutcome::Stdout(MORSE.to_string()));
    }

    #[test]
    fn test_literal_wins_over_file() {
        let cli = encode_cli(&["SOS", "--input", "nonexistent.txt"]);
        let outcome = cli.args.run(&Settings::default()).unwrap();
        assert_eq!(outcome, RunOutcome::Stdout("... --- ...".to_string()));
    }

    #[test]
    fn test_empty_literal_falls_back_to_input_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("in.txt");
        fs::write(&input, "SOS").unwrap();

        let cli = encode_cli(&["", "--input", input.to_str().unwrap()]);
        let outcome = cli.args.run(&Settings::default()).unwrap();
        assert_eq!(outcome, RunOutcome::Stdout("... --- ...".to_string()));
    }

    #[test]
    fn test_empty_literal_shows_help() {
        let cli = encode_cli(&[""]);
        let outcome = cli.args.run(&Settings::default()).unwrap();
        assert_eq!(outcome, RunOutcome::ShowHelp);
    }

    #[test]
    fn test_nonexistent_input_file() {
        let cli = encode_cli(&["--input", "nonexistent.txt"]);
        let err = cli.args.run(&Settings::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ToolError>(),
            Some(ToolError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_no_input_shows_help() {
        let cli = encode_cli(&[]);
        let outcome = cli.args.run(&Settings::default()).unwrap();
        assert_eq!(outcome, RunOutcome::ShowHelp);
    }

    #[test]
    fn test_unsupported_character() {
        let cli = encode_cli(&["Hello©World"]);
        let err = cli.args.run(&Settings::default()).unwrap_err();
        assert_eq!(err.to_string(), "Character '©' cannot be converted to Morse code");
    }

    #[test]
    fn test_skip_unknown_flag() {
        let cli = encode_cli(&["--skip-unknown", "Hello©World"]);
        let outcome = cli.args.run(&Settings::default()).unwrap();
        assert_eq!(outcome, RunOutcome::Stdout(MORSE.to_string()));
    }

    #[test]
    fn test_settings_file_enables_skip_unknown() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = temp_dir.path().join("morse.toml");
        fs::write(&config, "[encode]\nskip_unknown = true\n").unwrap();

        let cli = encode_cli(&["--config", config.to_str().unwrap(), "Hello©World"]);
        let settings = cli.global.settings().unwrap();
        let outcome = cli.args.run(&settings).unwrap();
        assert_eq!(outcome, RunOutcome::Stdout(MORSE.to_string()));
    }
}

mod decode_command {
    use super::*;

    #[test]
    fn test_command_line_morse() {
        let cli = decode_cli(&[MORSE]);
        let outcome = cli.args.run().unwrap();
        assert_eq!(outcome, RunOutcome::Stdout(TEXT.to_string()));
    }

    #[test]
    fn test_leading_dash_is_morse_not_a_flag() {
        let cli = decode_cli(&["-.- / -"]);
        assert_eq!(cli.args.run().unwrap(), RunOutcome::Stdout("K T".to_string()));
    }

    #[test]
    fn test_input_and_output_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, format!("{}\n", MORSE)).unwrap();

        let cli = decode_cli(&["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()]);
        cli.args.run().unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), TEXT);
    }

    #[test]
    fn test_nonexistent_input_file() {
        let cli = decode_cli(&["--input", "nonexistent.txt"]);
        let err = cli.args.run().unwrap_err();
        assert_eq!(err.to_string(), "Input file not found: nonexistent.txt");
    }

    #[test]
    fn test_no_input_shows_help() {
        let cli = decode_cli(&[]);
        assert_eq!(cli.args.run().unwrap(), RunOutcome::ShowHelp);
    }

    #[test]
    fn test_empty_literal_shows_help() {
        let cli = decode_cli(&[""]);
        assert_eq!(cli.args.run().unwrap(), RunOutcome::ShowHelp);
    }

    #[test]
    fn test_empty_literal_falls_back_to_input_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("in.txt");
        fs::write(&input, "... --- ...").unwrap();

        let cli = decode_cli(&["", "--input", input.to_str().unwrap()]);
        assert_eq!(cli.args.run().unwrap(), RunOutcome::Stdout("SOS".to_string()));
    }

    #[test]
    fn test_round_trip_through_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let text_in = temp_dir.path().join("text.txt");
        let morse = temp_dir.path().join("morse.txt");
        let text_out = temp_dir.path().join("text_out.txt");
        fs::write(&text_in, "GOOD BYE SWEET WORLD!").unwrap();

        encode_cli(&["-i", text_in.to_str().unwrap(), "-o", morse.to_str().unwrap()])
            .args
            .run(&Settings::default())
            .unwrap();
        decode_cli(&["-i", morse.to_str().unwrap(), "-o", text_out.to_str().unwrap()])
            .args
            .run()
            .unwrap();

        assert_eq!(fs::read_to_string(&text_out).unwrap(), "GOOD BYE SWEET WORLD!");
    }
}
