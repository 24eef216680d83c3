//! Builds a [`Dictionary`] from the CSV frequency table.
//!
//! The first row is a header; its column names are ignored but it must
//! decode as UTF-8 like the rest of the table. Every following row is checked, split into spellings and inserted:
//! ```csv
//! lemma,pos,definition,core,general,spoken,fiction,newspapers,web
//! "het, 't",determiner,the,True,True,False,True,True,True
//! ```

use std::fs::File;
use std::io::Read;
use std::path;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};

use crate::config::BuilderConfig;
use crate::dictionary::dictionary::Dictionary;
use crate::dictionary::report::{BuildReport, BuildStats, ProbeReport};
use crate::dictionary::row::{MalformedRow, SourceRow};
use crate::error::{Result, WoordlijstError};

/// A freshly built dictionary together with its row counters.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub dictionary: Dictionary,
    pub stats: BuildStats,
}

/// Converts the frequency table into a word-form dictionary.
#[derive(Debug, Clone)]
pub struct DictionaryBuilder {
    /// CSV delimiter character (default: ',')
    delimiter: u8,
}

impl Default for DictionaryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryBuilder {
    /// Create a builder for comma-separated input.
    pub fn new() -> Self {
        DictionaryBuilder { delimiter: b',' }
    }

    fn reader_builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::None);
        builder
    }

    /// Build a dictionary from CSV text read from `reader`.
    ///
    /// Malformed rows are skipped; a decoding failure aborts the build.
    pub fn build_from_reader<R: Read>(&self, reader: R) -> Result<BuildOutput> {
        let mut csv_reader = self.reader_builder().from_reader(reader);
        // The header is stored, not returned, by `read_record`; decode it here
        // so encoding errors surface.
        csv_reader.headers()?;
        let mut dictionary = Dictionary::new();
        let mut stats = BuildStats::default();
        let mut record = StringRecord::new();

        while csv_reader.read_record(&mut record)? {
            stats.rows_read += 1;
            let row_number = stats.rows_read;

            let row = match SourceRow::parse(&record) {
                Ok(row) => row,
                Err(reason) => {
                    match reason {
                        MalformedRow::TooFewFields { .. } => stats.rows_too_short += 1,
                        MalformedRow::EmptyWordForm => stats.rows_without_word += 1,
                    }
                    debug!("Skipping data row {row_number}: {reason}");
                    continue;
                }
            };

            let entry = row.entry();
            for variant in row.variants() {
                let Some(word) = variant else {
                    stats.empty_variants += 1;
                    continue;
                };
                if dictionary.insert(word.as_str(), entry.clone()).is_some() {
                    stats.keys_overwritten += 1;
                    debug!("Data row {row_number} overwrites existing entry '{word}'");
                }
            }
        }

        Ok(BuildOutput { dictionary, stats })
    }

    /// Build a dictionary from the CSV file at `path`.
    pub fn build_from_path<P: AsRef<Path>>(&self, path: P) -> Result<BuildOutput> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| WoordlijstError::source_unavailable(path, e))?;
        debug!("Reading frequency table from {}", path.display());
        self.build_from_reader(file)
    }

    /// Build from `config.source`, write to `config.destination` and probe the result.
    ///
    /// Nothing is written unless the whole table was read successfully.
    pub fn run(&self, config: &BuilderConfig) -> Result<BuildReport> {
        config.validate()?;

        let BuildOutput { dictionary, stats } = self.build_from_path(&config.source)?;
        dictionary.write_to_path(&config.destination)?;
        let destination = path::absolute(&config.destination)?;

        info!(
            "Wrote {} entries to {} ({} rows read, {} skipped, {} keys overwritten)",
            dictionary.len(),
            destination.display(),
            stats.rows_read,
            stats.rows_skipped(),
            stats.keys_overwritten
        );

        let probe = ProbeReport::probe(&dictionary, &config.probe_word)?;
        if !probe.found {
            debug!("Probe word '{}' is absent from the dictionary", probe.word);
        }

        Ok(BuildReport {
            source: config.source.clone(),
            destination,
            entries: dictionary.len(),
            stats,
            probe,
        })
    }
}
