//! Localized book abbreviations.
//!
//! Citation abbreviations for each catalog book in several languages,
//! loaded from an embedded JSON table. Rows are keyed both by the catalog
//! index and by the English abbreviation, which doubles as the row's
//! identity in localization data.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

use crate::logger;

const ABBREVIATIONS_JSON: &str = include_str!("../assets/book_abbreviations.json");

pub const LANGUAGES: [&str; 7] = ["en", "de", "es", "pt", "ko", "zh-Hans", "zh-Hant"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbbreviationsError {
    #[error("No abbreviation row for book index {0}")]
    UnknownIndex(u32),

    #[error("No abbreviation row for '{0}'")]
    UnknownAbbreviation(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbbreviationRow {
    pub index: u32,
    pub en: String,
    pub de: String,
    pub es: String,
    pub pt: String,
    pub ko: String,
    #[serde(rename = "zh-Hans")]
    pub zh_hans: String,
    #[serde(rename = "zh-Hant")]
    pub zh_hant: String,
}

impl AbbreviationRow {
    fn localized(&self, language: &str) -> Result<&str, AbbreviationsError> {
        match language {
            "en" => Ok(&self.en),
            "de" => Ok(&self.de),
            "es" => Ok(&self.es),
            "pt" => Ok(&self.pt),
            "ko" => Ok(&self.ko),
            "zh-Hans" => Ok(&self.zh_hans),
            "zh-Hant" => Ok(&self.zh_hant),
            other => Err(AbbreviationsError::UnsupportedLanguage(other.to_string())),
        }
    }
}

pub struct Abbreviations {
    rows: Vec<AbbreviationRow>,
    by_index: HashMap<u32, usize>,
    by_en: HashMap<String, usize>,
}

impl Abbreviations {
    fn load() -> Abbreviations {
        let rows: Vec<AbbreviationRow> = match serde_json::from_str(ABBREVIATIONS_JSON) {
            Ok(rows) => rows,
            Err(e) => {
                logger::error(&format!("Failed to parse book abbreviations: {}", e));
                Vec::new()
            }
        };
        let mut by_index = HashMap::new();
        let mut by_en = HashMap::new();
        for (i, row) in rows.iter().enumerate() {
            by_index.insert(row.index, i);
            by_en.insert(row.en.clone(), i);
        }
        Abbreviations { rows, by_index, by_en }
    }

    /// The abbreviation for the book at catalog INDEX in LANGUAGE.
    pub fn for_index(&self, index: u32, language: &str) -> Result<&str, AbbreviationsError> {
        let row = self
            .by_index
            .get(&index)
            .and_then(|&i| self.rows.get(i))
            .ok_or(AbbreviationsError::UnknownIndex(index))?;
        row.localized(language)
    }

    /// Translate an English abbreviation into LANGUAGE.
    pub fn for_en(&self, en: &str, language: &str) -> Result<&str, AbbreviationsError> {
        let row = self
            .by_en
            .get(en)
            .and_then(|&i| self.rows.get(i))
            .ok_or_else(|| AbbreviationsError::UnknownAbbreviation(en.to_string()))?;
        row.localized(language)
    }

    pub fn rows(&self) -> &[AbbreviationRow] {
        &self.rows
    }
}

/// The process-wide abbreviation table, parsed on first use.
pub fn abbreviations() -> &'static Abbreviations {
    static TABLE: OnceLock<Abbreviations> = OnceLock::new();
    TABLE.get_or_init(Abbreviations::load)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_catalog() {
        assert_eq!(abbreviations().rows().len(), 87);
        for row in abbreviations().rows() {
            assert!(row.index >= 1 && row.index <= 87);
        }
    }

    #[test]
    fn test_lookup_by_index() {
        let t = abbreviations();
        assert_eq!(t.for_index(1, "en").unwrap(), "Ge");
        assert_eq!(t.for_index(1, "de").unwrap(), "Gen");
        assert_eq!(t.for_index(1, "zh-Hans").unwrap(), "创");
    }

    #[test]
    fn test_lookup_by_en() {
        let t = abbreviations();
        assert_eq!(t.for_en("Ge", "es").unwrap(), "Gn");
        assert!(matches!(
            t.for_en("Nope", "es"),
            Err(AbbreviationsError::UnknownAbbreviation(_))
        ));
        assert!(matches!(
            t.for_en("Ge", "fr"),
            Err(AbbreviationsError::UnsupportedLanguage(_))
        ));
    }
}
