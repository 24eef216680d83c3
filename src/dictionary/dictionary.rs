//! The in-memory word-form dictionary and its JSON artifact.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dictionary::entry::{Category, DictionaryEntry};
use crate::dictionary::row::normalize_word;
use crate::error::{Result, WoordlijstError};

/// Mapping from lowercase word form to its entry.
///
/// Keys are kept sorted so the serialized artifact is identical across runs
/// on the same input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, DictionaryEntry>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Dictionary {
            entries: BTreeMap::new(),
        }
    }

    /// Insert an entry, returning the one it replaced.
    pub fn insert<S: Into<String>>(
        &mut self,
        word: S,
        entry: DictionaryEntry,
    ) -> Option<DictionaryEntry> {
        self.entries.insert(word.into(), entry)
    }

    /// Look up a word after trimming and lowercasing it.
    pub fn get(&self, word: &str) -> Option<&DictionaryEntry> {
        normalize_word(word).and_then(|key| self.entries.get(&key))
    }

    /// Whether the word is present, using the same normalization as [`Dictionary::get`].
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, DictionaryEntry> {
        self.entries.iter()
    }

    /// Words flagged with the given category, in key order.
    pub fn words_in(&self, category: Category) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.is_in(category))
            .map(|(word, _)| word.as_str())
            .collect()
    }

    /// Serialize as indented JSON with non-ASCII text written literally.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Pretty JSON rendering of the whole dictionary.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the artifact to `path`, creating or truncating the file.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Read a previously written artifact.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a previously written artifact from disk.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| WoordlijstError::source_unavailable(path, e))?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a String, &'a DictionaryEntry);
    type IntoIter = btree_map::Iter<'a, String, DictionaryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
