//! Command line argument parsing for the woordlijst CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{BuilderConfig, DEFAULT_PROBE_WORD};
use crate::error::Result;

/// woordlijst - Build a Dutch word-frequency lookup dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "woordlijst")]
#[command(about = "Builds a keyed JSON lookup dictionary from a Dutch word-frequency CSV")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WoordlijstArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute (defaults to `build`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl WoordlijstArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert the frequency table into a JSON dictionary
    Build(BuildArgs),

    /// Look up words in a generated dictionary
    Lookup(LookupArgs),

    /// Verify that words exist in a generated dictionary with every property
    Check(CheckArgs),
}

/// Arguments for building the dictionary
#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// Frequency table to read (default: next to the executable)
    #[arg(short, long, value_name = "CSV_FILE", env = "WOORDLIJST_INPUT")]
    pub input: Option<PathBuf>,

    /// Dictionary file to write (default: next to the executable)
    #[arg(short, long, value_name = "JSON_FILE", env = "WOORDLIJST_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Word looked up in the result as a sanity check
    #[arg(long, value_name = "WORD", default_value = DEFAULT_PROBE_WORD)]
    pub probe: String,
}

impl BuildArgs {
    /// Resolve the builder configuration, filling unset paths from `defaults`.
    pub fn to_config(&self, defaults: BuilderConfig) -> BuilderConfig {
        let mut config = defaults;
        if let Some(input) = &self.input {
            config.source = input.clone();
        }
        if let Some(output) = &self.output {
            config.destination = output.clone();
        }
        if !self.probe.is_empty() {
            config.probe_word = self.probe.clone();
        }
        config
    }

    /// Resolve the configuration against the executable's directory.
    pub fn resolve(&self) -> Result<BuilderConfig> {
        Ok(self.to_config(BuilderConfig::beside_executable()?))
    }
}

/// Arguments for looking up words
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Generated dictionary file (JSON)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Words to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for checking a generated dictionary
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Generated dictionary file (JSON)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Words that must be present (repeatable)
    #[arg(short, long = "word", value_name = "WORD", default_value = DEFAULT_PROBE_WORD)]
    pub words: Vec<String>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_no_subcommand_means_build() {
        let args = WoordlijstArgs::try_parse_from(["woordlijst"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_build_command() {
        let args = WoordlijstArgs::try_parse_from([
            "woordlijst",
            "build",
            "--input",
            "table.csv",
            "--output",
            "dict.json",
            "--probe",
            "de",
        ])
        .unwrap();

        if let Some(Command::Build(build_args)) = args.command {
            let config = build_args.to_config(BuilderConfig::in_dir("/opt/woordlijst"));
            assert_eq!(config.source, PathBuf::from("table.csv"));
            assert_eq!(config.destination, PathBuf::from("dict.json"));
            assert_eq!(config.probe_word, "de");
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_build_defaults_fill_missing_paths() {
        let args = WoordlijstArgs::try_parse_from(["woordlijst", "build", "-o", "out.json"]).unwrap();

        if let Some(Command::Build(build_args)) = args.command {
            let config = build_args.to_config(BuilderConfig::in_dir("/opt/woordlijst"));
            assert_eq!(
                config.source,
                PathBuf::from("/opt/woordlijst/dutch_frequency_dictionary_processed.csv")
            );
            assert_eq!(config.destination, PathBuf::from("out.json"));
            assert_eq!(config.probe_word, "een");
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_lookup_command() {
        let args =
            WoordlijstArgs::try_parse_from(["woordlijst", "lookup", "dict.json", "een", "de"])
                .unwrap();

        if let Some(Command::Lookup(lookup_args)) = args.command {
            assert_eq!(lookup_args.dictionary, PathBuf::from("dict.json"));
            assert_eq!(lookup_args.words, vec!["een", "de"]);
        } else {
            panic!("Expected Lookup command");
        }
    }

    #[test]
    fn test_lookup_requires_words() {
        assert!(WoordlijstArgs::try_parse_from(["woordlijst", "lookup", "dict.json"]).is_err());
    }

    #[test]
    fn test_check_command_default_word() {
        let args = WoordlijstArgs::try_parse_from(["woordlijst", "check", "dict.json"]).unwrap();

        if let Some(Command::Check(check_args)) = args.command {
            assert_eq!(check_args.words, vec!["een"]);
        } else {
            panic!("Expected Check command");
        }

        let args = WoordlijstArgs::try_parse_from([
            "woordlijst",
            "check",
            "dict.json",
            "-w",
            "de",
            "-w",
            "het",
        ])
        .unwrap();

        if let Some(Command::Check(check_args)) = args.command {
            assert_eq!(check_args.words, vec!["de", "het"]);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = WoordlijstArgs::try_parse_from(["woordlijst", "-vv", "build"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = WoordlijstArgs::try_parse_from(["woordlijst", "build", "--quiet"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            WoordlijstArgs::try_parse_from(["woordlijst", "--format", "json", "check", "d.json"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}
