//! CLI Module
//!
//! Command-line interface for audiolib.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::codec::SampleEncoding;

/// audiolib - PCM sample conversion and WAV container I/O
#[derive(Parser, Debug)]
#[command(name = "audiolib")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode WAV files and print their sample rate, bit depth and channels
    #[command(name = "info")]
    Info {
        /// WAV files, or directories searched recursively for *.wav
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-encode a WAV file with another integer encoding
    #[command(name = "convert")]
    Convert {
        /// Source WAV file
        input: PathBuf,

        /// Destination WAV file (overwritten)
        output: PathBuf,

        /// Target encoding: uint8, int16, int24 or int32
        #[arg(short, long, default_value = "int16")]
        encoding: SampleEncoding,
    },

    /// Parse a tab-separated table and print per-column statistics
    #[command(name = "table")]
    Table {
        /// Path to the table file
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert_defaults() {
        let cli = Cli::parse_from(["audiolib", "convert", "in.wav", "out.wav"]);
        match cli.command {
            Commands::Convert { encoding, .. } => assert_eq!(encoding, SampleEncoding::Signed(16)),
            other => panic!("Expected Convert, got: {:?}", other),
        }
    }

    #[test]
    fn test_parse_convert_rejects_unknown_encoding() {
        let result = Cli::try_parse_from(["audiolib", "convert", "a.wav", "b.wav", "-e", "pcm"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_info_requires_paths() {
        assert!(Cli::try_parse_from(["audiolib", "info"]).is_err());

        let cli =
            Cli::try_parse_from(["audiolib", "-v", "info", "a.wav", "dir", "--json"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Info { paths, json } => {
                assert_eq!(paths.len(), 2);
                assert!(json);
            }
            other => panic!("Expected Info, got: {:?}", other),
        }
    }
}
