//! Dutch word-frequency dictionary.
//!
//! This module turns the processed frequency table (CSV) into a lookup
//! document keyed by lowercase word form, and reads such documents back.
//!
//! # Core Components
//!
//! - [`builder::DictionaryBuilder`] - Reads the table and builds the dictionary
//! - [`dictionary::Dictionary`] - Sorted word-form map with JSON (de)serialization
//! - [`entry::DictionaryEntry`] - Part of speech, gloss and six corpus flags
//! - [`row::SourceRow`] - Validation and variant splitting of one table row
//! - [`check::DictionaryCheck`] - Structural checks on a generated file
//!
//! # Examples
//!
//! ```
//! use woordlijst::dictionary::builder::DictionaryBuilder;
//!
//! let csv = "lemma,pos,definition,core,general,spoken,fiction,newspapers,web\n\
//!            \"het, 't\",determiner,the,True,True,False,True,True,True\n";
//!
//! let output = DictionaryBuilder::new().build_from_reader(csv.as_bytes()).unwrap();
//! assert_eq!(output.dictionary.len(), 2);
//! assert_eq!(output.dictionary.get("'t").unwrap().pos, "determiner");
//! ```

pub mod builder;
pub mod check;
#[allow(clippy::module_inception)]
pub mod dictionary;
pub mod entry;
pub mod report;
pub mod row;

pub use builder::{BuildOutput, DictionaryBuilder};
pub use check::{DictionaryCheck, WordCheck};
pub use dictionary::Dictionary;
pub use entry::{Category, DictionaryEntry};
pub use report::{BuildReport, BuildStats, ProbeReport};
