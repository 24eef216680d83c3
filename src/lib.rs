//! # woordlijst
//!
//! Builds a keyed lookup dictionary from a Dutch word-frequency table.
//!
//! ## Features
//!
//! - Reads the processed frequency CSV, header row discarded
//! - Splits multi-spelling rows (`"het, 't"`) into separate keys
//! - Writes deterministic, indented JSON with literal non-ASCII text
//! - Loads generated dictionaries back for lookups and structure checks

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;

pub mod prelude {
    pub use crate::config::BuilderConfig;
    pub use crate::dictionary::{
        BuildReport, Category, Dictionary, DictionaryBuilder, DictionaryEntry,
    };
    pub use crate::error::{Result, WoordlijstError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
