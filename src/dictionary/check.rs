//! Structural checks on a generated dictionary file.
//!
//! The artifact is read as untyped JSON so that entries missing properties
//! can be reported instead of failing the whole load.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dictionary::entry::ENTRY_PROPERTIES;
use crate::dictionary::row::normalize_word;
use crate::error::{Result, WoordlijstError};

/// Outcome of checking one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCheck {
    pub word: String,
    pub found: bool,
    /// Expected properties absent from the entry.
    pub missing_properties: Vec<String>,
}

impl WordCheck {
    pub fn passed(&self) -> bool {
        self.found && self.missing_properties.is_empty()
    }
}

/// A generated dictionary loaded for inspection.
#[derive(Debug, Clone)]
pub struct DictionaryCheck {
    entries: Map<String, Value>,
}

impl DictionaryCheck {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        match value {
            Value::Object(entries) => Ok(DictionaryCheck { entries }),
            other => Err(WoordlijstError::other(format!(
                "dictionary must be a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| WoordlijstError::source_unavailable(path, e))?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn total_entries(&self) -> usize {
        self.entries.len()
    }

    /// Check that `word` exists and carries every expected property.
    pub fn check_word(&self, word: &str) -> WordCheck {
        let entry = normalize_word(word).and_then(|key| self.entries.get(&key));

        let missing_properties = match entry {
            Some(Value::Object(fields)) => ENTRY_PROPERTIES
                .iter()
                .filter(|property| !fields.contains_key(**property))
                .map(|property| property.to_string())
                .collect(),
            Some(_) => ENTRY_PROPERTIES.iter().map(|p| p.to_string()).collect(),
            None => Vec::new(),
        };

        WordCheck {
            word: word.to_string(),
            found: entry.is_some(),
            missing_properties,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
