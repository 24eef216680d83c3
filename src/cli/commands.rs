//! Command implementations for the woordlijst CLI.

use anyhow::Context;
use clap::Parser;
use log::{debug, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::dictionary::{Dictionary, DictionaryBuilder, DictionaryCheck};
use crate::error::{Result, WoordlijstError};

/// Execute a CLI command.
pub fn execute_command(args: WoordlijstArgs) -> Result<()> {
    match &args.command {
        Some(Command::Build(build_args)) => build_dictionary(build_args.clone(), &args),
        Some(Command::Lookup(lookup_args)) => lookup_words(lookup_args.clone(), &args),
        Some(Command::Check(check_args)) => check_dictionary(check_args.clone(), &args),
        None => build_dictionary(default_build_args()?, &args),
    }
}

/// `build` arguments as clap resolves them with no flags, environment included.
pub fn default_build_args() -> Result<BuildArgs> {
    BuildArgs::try_parse_from(["build"])
        .map_err(|e| WoordlijstError::invalid_config(e.to_string()))
}

/// Build the dictionary from the frequency table.
fn build_dictionary(args: BuildArgs, cli_args: &WoordlijstArgs) -> Result<()> {
    let config = args.resolve()?;
    debug!(
        "Building dictionary: {} -> {}",
        config.source.display(),
        config.destination.display()
    );

    let report = DictionaryBuilder::new().run(&config)?;

    output_result("Dictionary built", &report, cli_args)
}

/// Look up words in a generated dictionary.
fn lookup_words(args: LookupArgs, cli_args: &WoordlijstArgs) -> Result<()> {
    let dictionary = Dictionary::load_from_path(&args.dictionary)
        .with_context(|| format!("failed to load dictionary {}", args.dictionary.display()))?;

    let results = LookupResults {
        dictionary: args.dictionary.to_string_lossy().to_string(),
        results: args
            .words
            .iter()
            .map(|word| LookupHit {
                word: word.clone(),
                entry: dictionary.get(word).cloned(),
            })
            .collect(),
    };

    output_result("Lookup results", &results, cli_args)
}

/// Check that words are present with every expected property.
fn check_dictionary(args: CheckArgs, cli_args: &WoordlijstArgs) -> Result<()> {
    let check = DictionaryCheck::load_from_path(&args.dictionary)
        .with_context(|| format!("failed to load dictionary {}", args.dictionary.display()))?;

    let results = CheckResults {
        dictionary: args.dictionary.to_string_lossy().to_string(),
        total_entries: check.total_entries(),
        words: args.words.iter().map(|word| check.check_word(word)).collect(),
    };

    output_result("Dictionary check", &results, cli_args)?;

    if results.all_passed() {
        Ok(())
    } else {
        let failed: Vec<&str> = results
            .words
            .iter()
            .filter(|check| !check.passed())
            .map(|check| check.word.as_str())
            .collect();
        warn!("Dictionary check failed for: {}", failed.join(", "));
        Err(WoordlijstError::not_found(format!(
            "{} word(s) failed the dictionary check: {}",
            failed.len(),
            failed.join(", ")
        )))
    }
}
