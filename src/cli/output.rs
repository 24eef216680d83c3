//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WoordlijstArgs};
use crate::dictionary::{BuildReport, DictionaryEntry, WordCheck};
use crate::error::Result;

/// Result structure for word lookups.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResults {
    pub dictionary: String,
    pub results: Vec<LookupHit>,
}

/// A single looked-up word.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupHit {
    pub word: String,
    pub entry: Option<DictionaryEntry>,
}

/// Result structure for dictionary checks.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResults {
    pub dictionary: String,
    pub total_entries: usize,
    pub words: Vec<WordCheck>,
}

impl CheckResults {
    pub fn all_passed(&self) -> bool {
        self.words.iter().all(WordCheck::passed)
    }
}

/// Human-readable rendering of a command result.
pub trait HumanReadable {
    /// Lines to print; `verbosity` follows [`WoordlijstArgs::verbosity`].
    fn human_lines(&self, verbosity: u8) -> Vec<String>;
}

impl HumanReadable for BuildReport {
    fn human_lines(&self, verbosity: u8) -> Vec<String> {
        let mut lines = vec![
            format!("Converted {} Dutch words from CSV to JSON", self.entries),
            format!("JSON file created at: {}", self.destination.display()),
        ];

        if verbosity > 1 {
            lines.push(format!(
                "Rows read: {}, skipped: {} ({} too short, {} without word), empty variants: {}, overwritten keys: {}",
                self.stats.rows_read,
                self.stats.rows_skipped(),
                self.stats.rows_too_short,
                self.stats.rows_without_word,
                self.stats.empty_variants,
                self.stats.keys_overwritten
            ));
        }

        let probe = &self.probe;
        match (probe.whether_core(), probe.entry_json.as_deref()) {
            (Some(whether_core), Some(entry_json)) => {
                lines.push(format!(
                    "Word '{}' found in dictionary with properties:",
                    probe.word
                ));
                lines.push(format!("- whether_core: {whether_core}"));
                lines.push(format!("- Entry: {entry_json}"));
            }
            _ => lines.push(format!(
                "WARNING: Word '{}' NOT found in dictionary!",
                probe.word
            )),
        }

        lines
    }
}

impl HumanReadable for LookupResults {
    fn human_lines(&self, verbosity: u8) -> Vec<String> {
        let mut lines = Vec::new();
        if verbosity > 1 {
            lines.push(format!("Dictionary: {}", self.dictionary));
        }

        for hit in &self.results {
            match &hit.entry {
                Some(entry) => {
                    let categories: Vec<&str> =
                        entry.categories().iter().map(|c| c.name()).collect();
                    lines.push(format!(
                        "{}: {} - {} [{}]",
                        hit.word,
                        display_or_dash(&entry.pos),
                        display_or_dash(&entry.definition),
                        categories.join(", ")
                    ));
                }
                None => lines.push(format!("{}: not found", hit.word)),
            }
        }

        lines
    }
}

impl HumanReadable for CheckResults {
    fn human_lines(&self, _verbosity: u8) -> Vec<String> {
        let mut lines = vec![format!("Total words in dictionary: {}", self.total_entries)];

        for check in &self.words {
            let line = if !check.found {
                format!("✗ {}: not found", check.word)
            } else if check.missing_properties.is_empty() {
                format!("✓ {}: all properties present", check.word)
            } else {
                format!(
                    "✗ {}: missing properties: {}",
                    check.word,
                    check.missing_properties.join(", ")
                )
            };
            lines.push(line);
        }

        lines
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &WoordlijstArgs) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanReadable>(message: &str, result: &T, args: &WoordlijstArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    for line in result.human_lines(args.verbosity()) {
        println!("{line}");
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WoordlijstArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
