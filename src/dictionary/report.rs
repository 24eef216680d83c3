//! Counters and diagnostics produced by a build.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::dictionary::dictionary::Dictionary;
use crate::dictionary::entry::DictionaryEntry;
use crate::error::Result;

/// Row-level counters collected while reading the source table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Data rows read, header excluded.
    pub rows_read: usize,
    /// Rows dropped for having fewer than nine fields.
    pub rows_too_short: usize,
    /// Rows dropped for an empty word-form column.
    pub rows_without_word: usize,
    /// Spellings that were empty after trimming.
    pub empty_variants: usize,
    /// Inserts that replaced an existing key.
    pub keys_overwritten: usize,
}

impl BuildStats {
    pub fn rows_skipped(&self) -> usize {
        self.rows_too_short + self.rows_without_word
    }
}

/// Result of looking up the probe word in a finished dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeReport {
    pub word: String,
    pub found: bool,
    pub entry: Option<DictionaryEntry>,
    /// Single-line JSON of the entry, as it appears in the artifact.
    pub entry_json: Option<String>,
}

impl ProbeReport {
    /// Look up `word` in `dictionary`.
    pub fn probe(dictionary: &Dictionary, word: &str) -> Result<Self> {
        let entry = dictionary.get(word).cloned();
        let entry_json = entry.as_ref().map(DictionaryEntry::to_json_line).transpose()?;

        Ok(ProbeReport {
            word: word.to_string(),
            found: entry.is_some(),
            entry,
            entry_json,
        })
    }

    /// The probe word's core flag, if it was found.
    pub fn whether_core(&self) -> Option<bool> {
        self.entry.as_ref().map(|entry| entry.whether_core)
    }
}

/// Everything a caller needs to report on a completed build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    pub source: PathBuf,
    /// Absolute path of the written artifact.
    pub destination: PathBuf,
    pub entries: usize,
    pub stats: BuildStats,
    pub probe: ProbeReport,
}
