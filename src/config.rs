//! Configuration for a dictionary build.

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WoordlijstError};

/// File name of the processed frequency table.
pub const DEFAULT_SOURCE_FILE: &str = "dutch_frequency_dictionary_processed.csv";

/// File name of the generated lookup document.
pub const DEFAULT_DESTINATION_FILE: &str = "dutch_frequency_dictionary.json";

/// Word looked up after a build to confirm the artifact is usable.
pub const DEFAULT_PROBE_WORD: &str = "een";

/// Where to read the table, where to write the dictionary, and what to probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Path of the CSV frequency table.
    pub source: PathBuf,

    /// Path of the JSON document to create or overwrite.
    pub destination: PathBuf,

    /// Word looked up in the finished dictionary for the diagnostic report.
    pub probe_word: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::in_dir(Path::new("."))
    }
}

impl BuilderConfig {
    /// Default file names inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        BuilderConfig {
            source: dir.join(DEFAULT_SOURCE_FILE),
            destination: dir.join(DEFAULT_DESTINATION_FILE),
            probe_word: DEFAULT_PROBE_WORD.to_string(),
        }
    }

    /// Default file names next to the running executable.
    pub fn beside_executable() -> Result<Self> {
        let exe = env::current_exe()?;
        let dir = exe.parent().ok_or_else(|| {
            WoordlijstError::invalid_config(format!(
                "executable path has no parent directory: {}",
                exe.display()
            ))
        })?;
        Ok(Self::in_dir(dir))
    }

    pub fn with_source<P: Into<PathBuf>>(mut self, source: P) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_destination<P: Into<PathBuf>>(mut self, destination: P) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn with_probe_word<S: Into<String>>(mut self, word: S) -> Self {
        self.probe_word = word.into();
        self
    }

    /// Reject configurations that cannot produce a usable artifact.
    pub fn validate(&self) -> Result<()> {
        if self.probe_word.trim().is_empty() {
            return Err(WoordlijstError::invalid_config(
                "probe word must not be empty",
            ));
        }
        if self.source == self.destination {
            return Err(WoordlijstError::invalid_config(format!(
                "source and destination are the same file: {}",
                self.source.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_names() {
        let config = BuilderConfig::in_dir("/data");

        assert_eq!(
            config.source,
            PathBuf::from("/data/dutch_frequency_dictionary_processed.csv")
        );
        assert_eq!(
            config.destination,
            PathBuf::from("/data/dutch_frequency_dictionary.json")
        );
        assert_eq!(config.probe_word, "een");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_beside_executable() {
        let config = BuilderConfig::beside_executable().unwrap();
        let exe_dir = env::current_exe().unwrap().parent().unwrap().to_path_buf();

        assert_eq!(config.source.parent().unwrap(), exe_dir);
        assert_eq!(config.destination.parent().unwrap(), exe_dir);
    }

    #[test]
    fn test_builder_overrides() {
        let config = BuilderConfig::default()
            .with_source("in.csv")
            .with_destination("out.json")
            .with_probe_word("de");

        assert_eq!(config.source, PathBuf::from("in.csv"));
        assert_eq!(config.destination, PathBuf::from("out.json"));
        assert_eq!(config.probe_word, "de");
    }

    #[test]
    fn test_validate_rejects_blank_probe() {
        let config = BuilderConfig::default().with_probe_word("  ");
        assert!(matches!(
            config.validate(),
            Err(WoordlijstError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_same_paths() {
        let config = BuilderConfig::default()
            .with_source("words")
            .with_destination("words");
        assert!(config.validate().is_err());
    }
}
