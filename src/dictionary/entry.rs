//! Dictionary entries and the corpus categories they are flagged with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WoordlijstError};

/// Literal text marking a set flag in the source table.
pub const FLAG_TRUE: &str = "True";

/// Property names every serialized entry carries.
pub const ENTRY_PROPERTIES: [&str; 8] = [
    "pos",
    "definition",
    "whether_core",
    "whether_general",
    "whether_spoken",
    "whether_fiction",
    "whether_newspapers",
    "whether_web",
];

/// The attribute record stored under one word-form key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Part of speech, empty when the source had none.
    pub pos: String,
    /// English gloss, empty when the source had none.
    pub definition: String,
    pub whether_core: bool,
    pub whether_general: bool,
    pub whether_spoken: bool,
    pub whether_fiction: bool,
    pub whether_newspapers: bool,
    pub whether_web: bool,
}

impl DictionaryEntry {
    /// Build an entry from the attribute columns of a source row.
    ///
    /// `fields` holds the columns after the word-form column, in table order:
    /// part of speech, definition, then the six category flags. Missing
    /// columns yield empty text or `false`.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter();
        let mut text = || fields.next().unwrap_or("").to_string();
        let pos = text();
        let definition = text();
        let mut flag = || parse_flag(&text());

        DictionaryEntry {
            pos,
            definition,
            whether_core: flag(),
            whether_general: flag(),
            whether_spoken: flag(),
            whether_fiction: flag(),
            whether_newspapers: flag(),
            whether_web: flag(),
        }
    }

    /// Whether the entry is flagged with the given category.
    pub fn is_in(&self, category: Category) -> bool {
        match category {
            Category::Core => self.whether_core,
            Category::General => self.whether_general,
            Category::Spoken => self.whether_spoken,
            Category::Fiction => self.whether_fiction,
            Category::Newspapers => self.whether_newspapers,
            Category::Web => self.whether_web,
        }
    }

    /// Categories this entry is flagged with, in table order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| self.is_in(*category))
            .collect()
    }

    /// Single-line JSON rendering of the entry.
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A flag is set only when its text is exactly `True`.
pub fn parse_flag(value: &str) -> bool {
    value == FLAG_TRUE
}

/// Corpus subsets a word's frequency data may derive from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Core,
    General,
    Spoken,
    Fiction,
    Newspapers,
    Web,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Core,
        Category::General,
        Category::Spoken,
        Category::Fiction,
        Category::Newspapers,
        Category::Web,
    ];

    /// Short category name, e.g. `core`.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::General => "general",
            Category::Spoken => "spoken",
            Category::Fiction => "fiction",
            Category::Newspapers => "newspapers",
            Category::Web => "web",
        }
    }

    /// Property name used in the serialized entry, e.g. `whether_core`.
    pub fn property(&self) -> &'static str {
        match self {
            Category::Core => "whether_core",
            Category::General => "whether_general",
            Category::Spoken => "whether_spoken",
            Category::Fiction => "whether_fiction",
            Category::Newspapers => "whether_newspapers",
            Category::Web => "whether_web",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = WoordlijstError;

    /// Accepts both `core` and `whether_core`, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        let name = lowered.strip_prefix("whether_").unwrap_or(&lowered);

        Category::ALL
            .into_iter()
            .find(|category| category.name() == name)
            .ok_or_else(|| WoordlijstError::not_found(format!("unknown category '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_full_fields() {
        let entry = DictionaryEntry::from_fields([
            "determiner",
            "the",
            "True",
            "True",
            "False",
            "True",
            "True",
            "True",
        ]);

        assert_eq!(entry.pos, "determiner");
        assert_eq!(entry.definition, "the");
        assert!(entry.whether_core);
        assert!(entry.whether_general);
        assert!(!entry.whether_spoken);
        assert!(entry.whether_fiction);
        assert!(entry.whether_newspapers);
        assert!(entry.whether_web);
    }

    #[test]
    fn test_entry_missing_fields_default() {
        let entry = DictionaryEntry::from_fields(["noun"]);

        assert_eq!(entry.pos, "noun");
        assert_eq!(entry.definition, "");
        assert!(entry.categories().is_empty());
    }

    #[test]
    fn test_flag_is_exact_match() {
        assert!(parse_flag("True"));
        assert!(!parse_flag("true"));
        assert!(!parse_flag("TRUE"));
        assert!(!parse_flag(" True"));
        assert!(!parse_flag("1"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_serialized_property_names() {
        let entry = DictionaryEntry::default();
        let value = serde_json::to_value(&entry).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), ENTRY_PROPERTIES.len());
        for property in ENTRY_PROPERTIES {
            assert!(object.contains_key(property), "missing {property}");
        }
    }

    #[test]
    fn test_json_line_keeps_field_order() {
        let entry = DictionaryEntry::from_fields(["art", "the", "True"]);
        assert_eq!(
            entry.to_json_line().unwrap(),
            r#"{"pos":"art","definition":"the","whether_core":true,"whether_general":false,"whether_spoken":false,"whether_fiction":false,"whether_newspapers":false,"whether_web":false}"#
        );
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("core".parse::<Category>().unwrap(), Category::Core);
        assert_eq!("whether_web".parse::<Category>().unwrap(), Category::Web);
        assert_eq!("Spoken".parse::<Category>().unwrap(), Category::Spoken);
        assert!("poetry".parse::<Category>().is_err());
    }

    #[test]
    fn test_categories_follow_flags() {
        let entry = DictionaryEntry::from_fields([
            "verb", "to be", "False", "True", "True", "False", "False", "True",
        ]);

        assert_eq!(
            entry.categories(),
            vec![Category::General, Category::Spoken, Category::Web]
        );
        assert_eq!(Category::Web.property(), "whether_web");
    }
}
