//! Source rows of the frequency table.
//!
//! A row looks like this once the CSV layer has unquoted it:
//! ```csv
//! "het, 't",determiner,the,True,True,False,True,True,True
//! ```
//! The first column may list several spellings separated by `", "`; every
//! spelling becomes its own dictionary key.

use std::fmt;

use csv::StringRecord;

use crate::dictionary::entry::DictionaryEntry;

/// Minimum number of columns a usable row carries.
pub const MIN_FIELDS: usize = 9;

/// Separator between spellings in the word-form column.
pub const VARIANT_SEPARATOR: &str = ", ";

/// Why a row contributed nothing to the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedRow {
    /// Fewer than [`MIN_FIELDS`] columns.
    TooFewFields { found: usize },
    /// The word-form column is empty.
    EmptyWordForm,
}

impl fmt::Display for MalformedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedRow::TooFewFields { found } => {
                write!(f, "expected at least {MIN_FIELDS} fields, found {found}")
            }
            MalformedRow::EmptyWordForm => f.write_str("empty word form"),
        }
    }
}

/// A validated row borrowed from a CSV record.
#[derive(Debug)]
pub struct SourceRow<'a> {
    record: &'a StringRecord,
}

impl<'a> SourceRow<'a> {
    /// Check a record against the row shape; malformed rows are reported, not fixed.
    pub fn parse(record: &'a StringRecord) -> Result<Self, MalformedRow> {
        if record.len() < MIN_FIELDS {
            return Err(MalformedRow::TooFewFields {
                found: record.len(),
            });
        }
        if record.get(0).is_none_or(str::is_empty) {
            return Err(MalformedRow::EmptyWordForm);
        }
        Ok(SourceRow { record })
    }

    /// The raw word-form column.
    pub fn word_forms(&self) -> &'a str {
        self.record.get(0).unwrap_or("")
    }

    /// Normalized spellings listed in the word-form column.
    ///
    /// Spellings that normalize to nothing are yielded as `None` so callers
    /// can count them.
    pub fn variants(&self) -> Vec<Option<String>> {
        split_variants(self.word_forms())
    }

    /// The attribute record shared by every spelling of this row.
    pub fn entry(&self) -> DictionaryEntry {
        DictionaryEntry::from_fields(self.record.iter().skip(1))
    }
}

/// Drop quote characters, split on `", "`, then normalize each spelling.
pub fn split_variants(word_forms: &str) -> Vec<Option<String>> {
    word_forms
        .replace('"', "")
        .split(VARIANT_SEPARATOR)
        .map(normalize_word)
        .collect()
}

/// Trim and lowercase a word form; `None` when nothing is left.
pub fn normalize_word(word: &str) -> Option<String> {
    let normalized = word.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}
