//! Parsing references from human text and canonical identifiers.
//!
//! The human-text pipeline recognizes traditional citations like
//! "Mark 4:9", "Lk 4:1-9" or "BibleNRSV:1 Sam 16". The canonical form
//! round-trips the refid strings the model produces, including ranges.
//! Parsed values are interned, so parsing the same citation twice hands
//! back the same shared reference.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::books::{self, Book};
use crate::logger;
use crate::refs::{BibleDatatype, Reference, ReferenceError, VerseNum};
use crate::registry::ReferenceRegistry;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("No book name recognized in '{0}'")]
    UnknownBookName(String),

    #[error("Unknown bible datatype tag: '{0}'")]
    UnknownDatatype(String),

    #[error("Unparseable reference: '{0}'")]
    Unparseable(String),

    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

/// How conversion entry points handle malformed input. Constructors are
/// always strict; the policies apply only at the outer text-in/text-out
/// boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    #[default]
    Strict,
    Ignore,
    Filter,
}

lazy_static! {
    // Book names, longest first so "1 Chron" is not cut short at "1 Ch".
    static ref BOOK_NAME_RE: Regex = {
        let mut names: Vec<&str> = books::all_book_names().iter().copied().collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let alternation = names
            .iter()
            .map(|n| regex::escape(n))
            .collect::<Vec<String>>()
            .join("|");
        Regex::new(&format!(r"^({})\s*(.*)$", alternation)).unwrap()
    };
    static ref DATATYPE_PREFIX_RE: Regex = Regex::new(r"^([A-Za-z0-9]+):(.+)$").unwrap();
    // verse tokens tolerate a trailing sub-verse letter ("4:9a" means 4:9)
    static ref CHAPTER_RE: Regex = Regex::new(r"^(\d+)$").unwrap();
    static ref CHAPTER_RANGE_RE: Regex = Regex::new(r"^(\d+)-(\d+)$").unwrap();
    static ref VERSE_RE: Regex = Regex::new(r"^(\d+):(\d+[a-z]*|title)$").unwrap();
    static ref VERSE_RANGE_RE: Regex =
        Regex::new(r"^(\d+):(\d+[a-z]*|title)-(\d+[a-z]*|title)$").unwrap();
    static ref CROSS_CHAPTER_RANGE_RE: Regex =
        Regex::new(r"^(\d+):(\d+[a-z]*|title)-(\d+):(\d+[a-z]*|title)$").unwrap();
}

// Books conventionally cited without a chapter ("Jude 4" means 1:4).
const SINGLE_CHAPTER_CITED: [u32; 3] = [31, 78, 86];

#[derive(Default)]
pub struct Parser {
    registry: ReferenceRegistry,
}

impl Parser {
    pub fn new() -> Parser {
        Parser::default()
    }

    pub fn registry(&self) -> &ReferenceRegistry {
        &self.registry
    }

    /// Parse a human-readable citation like "Mark 4:9" or "Lk 4:1-5:9".
    /// An optional `Tag:` prefix selects the datatype ("BibleNRSV:Mk 4").
    pub fn parse(&self, text: &str) -> Result<Arc<Reference>, ParseError> {
        let cleaned = normalize(text);
        let (datatype, rest) = split_datatype(&cleaned)?;
        let caps = BOOK_NAME_RE
            .captures(rest)
            .ok_or_else(|| ParseError::UnknownBookName(text.to_string()))?;
        let book = books::book_by_name(&caps[1])
            .map_err(|_| ParseError::UnknownBookName(text.to_string()))?;
        let mut numbers = caps[2].trim().to_string();
        if SINGLE_CHAPTER_CITED.contains(&book.index)
            && !numbers.is_empty()
            && !numbers.contains(':')
        {
            numbers = format!("1:{}", numbers);
        }
        let reference = parse_numbers(datatype, book, &numbers)
            .ok_or_else(|| ParseError::Unparseable(text.to_string()))??;
        self.intern(reference)
    }

    /// Parse a canonical identifier like "bible.62.3.4", including range
    /// forms where the end elides the datatype: "bible.63.4.1-63.4.9".
    /// The range separator may be any of the dash variants.
    pub fn parse_refid(&self, refid: &str) -> Result<Arc<Reference>, ParseError> {
        let refid = &fold_dashes(refid);
        let reference = match refid.split_once('-') {
            None => parse_single_refid(refid)?,
            Some((start, end)) => {
                let start = parse_single_refid(start)?;
                let end = parse_refid_end(start.datatype(), end)
                    .ok_or_else(|| ParseError::Unparseable(refid.to_string()))??;
                Reference::range(start, end)?
            }
        };
        self.intern(reference)
    }

    /// Convert a refid to a human-readable string, handling malformed input
    /// per POLICY: Strict propagates the error, Ignore hands the refid back
    /// unchanged, Filter yields None. Ignore and Filter log a warning.
    pub fn userstring_from_refid(
        &self,
        refid: &str,
        language: &str,
        policy: ErrorPolicy,
    ) -> Result<Option<String>, ParseError> {
        let outcome = self
            .parse_refid(refid)
            .and_then(|r| r.userstring(language).map_err(ParseError::from));
        match outcome {
            Ok(s) => Ok(Some(s)),
            Err(e) => match policy {
                ErrorPolicy::Strict => Err(e),
                ErrorPolicy::Ignore => {
                    logger::warn(&format!("Passing '{}' through unconverted: {}", refid, e));
                    Ok(Some(refid.to_string()))
                }
                ErrorPolicy::Filter => {
                    logger::warn(&format!("Dropping '{}': {}", refid, e));
                    Ok(None)
                }
            },
        }
    }

    /// Convert a human-readable citation to its refid under POLICY.
    pub fn refid_from_text(
        &self,
        text: &str,
        policy: ErrorPolicy,
    ) -> Result<Option<String>, ParseError> {
        match self.parse(text) {
            Ok(r) => Ok(Some(r.refid())),
            Err(e) => match policy {
                ErrorPolicy::Strict => Err(e),
                ErrorPolicy::Ignore => {
                    logger::warn(&format!("Passing '{}' through unconverted: {}", text, e));
                    Ok(Some(text.to_string()))
                }
                ErrorPolicy::Filter => {
                    logger::warn(&format!("Dropping '{}': {}", text, e));
                    Ok(None)
                }
            },
        }
    }

    fn intern(&self, reference: Reference) -> Result<Arc<Reference>, ParseError> {
        let refid = reference.refid();
        let interned = self.registry.intern(&refid, move || Ok(reference))?;
        Ok(interned)
    }
}

// Drop periods ("Mk. 4" == "Mk 4") and fold unicode dash variants into a
// plain hyphen before matching.
fn normalize(text: &str) -> String {
    fold_dashes(&text.trim().replace('.', ""))
}

fn fold_dashes(text: &str) -> String {
    text.replace(['\u{2010}', '\u{2013}', '\u{2014}'], "-")
}

fn split_datatype(text: &str) -> Result<(BibleDatatype, &str), ParseError> {
    if let Some(caps) = DATATYPE_PREFIX_RE.captures(text) {
        let tag = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        // all datatype tags start with "Bible"; anything else before a
        // colon belongs to the citation itself
        if tag.starts_with("Bible") {
            let datatype = BibleDatatype::from_human_tag(tag)
                .ok_or_else(|| ParseError::UnknownDatatype(tag.to_string()))?;
            let rest = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            return Ok((datatype, rest.trim()));
        }
    }
    Ok((BibleDatatype::default(), text))
}

// Try the number grammars most-specific-first against the part after the
// book name. None means no grammar matched at all.
fn parse_numbers(
    datatype: BibleDatatype,
    book: &'static Book,
    numbers: &str,
) -> Option<Result<Reference, ReferenceError>> {
    if numbers.is_empty() {
        return Some(Reference::book_ref(datatype, book.index));
    }
    if let Some(caps) = CROSS_CHAPTER_RANGE_RE.captures(numbers) {
        let start = verse_ref(datatype, book, &caps[1], &caps[2]);
        let end = verse_ref(datatype, book, &caps[3], &caps[4]);
        return Some(range_of(start, end));
    }
    if let Some(caps) = VERSE_RANGE_RE.captures(numbers) {
        let start = verse_ref(datatype, book, &caps[1], &caps[2]);
        let end = verse_ref(datatype, book, &caps[1], &caps[3]);
        return Some(range_of(start, end));
    }
    if let Some(caps) = VERSE_RE.captures(numbers) {
        return Some(verse_ref(datatype, book, &caps[1], &caps[2]));
    }
    if let Some(caps) = CHAPTER_RANGE_RE.captures(numbers) {
        let start = chapter_ref(datatype, book, &caps[1]);
        let end = chapter_ref(datatype, book, &caps[2]);
        return Some(range_of(start, end));
    }
    if let Some(caps) = CHAPTER_RE.captures(numbers) {
        return Some(chapter_ref(datatype, book, &caps[1]));
    }
    None
}

fn range_of(
    start: Result<Reference, ReferenceError>,
    end: Result<Reference, ReferenceError>,
) -> Result<Reference, ReferenceError> {
    Reference::range(start?, end?)
}

fn chapter_ref(
    datatype: BibleDatatype,
    book: &'static Book,
    chapter: &str,
) -> Result<Reference, ReferenceError> {
    let chapter: u32 = chapter
        .parse()
        .map_err(|_| ReferenceError::InvalidChapter(0))?;
    Reference::chapter(datatype, book.index, chapter)
}

fn verse_ref(
    datatype: BibleDatatype,
    book: &'static Book,
    chapter: &str,
    verse: &str,
) -> Result<Reference, ReferenceError> {
    let chapter: u32 = chapter
        .parse()
        .map_err(|_| ReferenceError::InvalidChapter(0))?;
    let verse = VerseNum::from_token(verse).ok_or(ReferenceError::InvalidVerse {
        chapter,
        verse: VerseNum::Num(0),
    })?;
    Reference::verse(datatype, book.index, chapter, verse)
}

// One endpoint of a canonical id: "bible.62.3.4" with the datatype tag, or
// the bare "62.3.4" form used after the dash in a range.
fn parse_single_refid(refid: &str) -> Result<Reference, ParseError> {
    let mut parts = refid.split('.');
    let tag = parts.next().unwrap_or("");
    let datatype = BibleDatatype::from_machine_tag(tag)
        .ok_or_else(|| ParseError::UnknownDatatype(tag.to_string()))?;
    let rest: Vec<&str> = parts.collect();
    refid_segments(datatype, &rest)
        .ok_or_else(|| ParseError::Unparseable(refid.to_string()))?
        .map_err(ParseError::from)
}

fn parse_refid_end(
    datatype: BibleDatatype,
    end: &str,
) -> Option<Result<Reference, ReferenceError>> {
    let segments: Vec<&str> = end.split('.').collect();
    refid_segments(datatype, &segments)
}

fn refid_segments(
    datatype: BibleDatatype,
    segments: &[&str],
) -> Option<Result<Reference, ReferenceError>> {
    let number = |s: &str| s.parse::<u32>().ok();
    match segments {
        [book] => Some(Reference::book_ref(datatype, number(book)?)),
        [book, chapter] => Some(Reference::chapter(datatype, number(book)?, number(chapter)?)),
        [book, chapter, verse] => {
            let verse = VerseNum::from_token(verse)?;
            Some(Reference::verse(datatype, number(book)?, number(chapter)?, verse))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verse() {
        let p = Parser::new();
        assert_eq!(p.parse("Mark 3:4").unwrap().refid(), "bible.62.3.4");
        assert_eq!(p.parse("Mk 3:4").unwrap().refid(), "bible.62.3.4");
        assert_eq!(p.parse("Mk. 3:4").unwrap().refid(), "bible.62.3.4");
    }

    #[test]
    fn test_parse_ranges() {
        let p = Parser::new();
        assert_eq!(p.parse("Lk 4:1-9").unwrap().refid(), "bible.63.4.1-63.4.9");
        assert_eq!(p.parse("Lk 4:1-5:9").unwrap().refid(), "bible.63.4.1-63.5.9");
        assert_eq!(p.parse("Mark 3-4").unwrap().refid(), "bible.62.3-62.4");
        // en-dash input folds to the plain hyphen form
        assert_eq!(p.parse("Lk 4:1\u{2013}9").unwrap().refid(), "bible.63.4.1-63.4.9");
    }

    #[test]
    fn test_parse_longest_name_wins() {
        let p = Parser::new();
        // "1 Sam" must not stop at the shorter "1 Sa"
        assert_eq!(p.parse("1 Sam 16").unwrap().refid(), "bible.9.16");
    }

    #[test]
    fn test_parse_datatype_prefix() {
        let p = Parser::new();
        let r = p.parse("BibleNRSV:Mk 4:2").unwrap();
        assert_eq!(r.refid(), "bible+nrsv.62.4.2");
        assert!(matches!(
            p.parse("BibleXYZ:Mk 4:2"),
            Err(ParseError::UnknownDatatype(_))
        ));
    }

    #[test]
    fn test_parse_implicit_chapter() {
        let p = Parser::new();
        assert_eq!(p.parse("Jude 4").unwrap().refid(), "bible.86.1.4");
        assert_eq!(p.parse("Obad 10").unwrap().refid(), "bible.31.1.10");
        assert_eq!(p.parse("Phlm 6").unwrap().refid(), "bible.78.1.6");
        // an explicit chapter:verse still parses normally
        assert_eq!(p.parse("Jude 1:4").unwrap().refid(), "bible.86.1.4");
    }

    #[test]
    fn test_parse_failures() {
        let p = Parser::new();
        assert!(matches!(
            p.parse("Nonsense 3:4"),
            Err(ParseError::UnknownBookName(_))
        ));
        assert!(matches!(p.parse("Mk 3:4:5"), Err(ParseError::Unparseable(_))));
        assert!(matches!(
            p.parse("Mk 33:1"),
            Err(ParseError::Reference(ReferenceError::InvalidChapter(33)))
        ));
    }

    #[test]
    fn test_parse_refid_roundtrip() {
        let p = Parser::new();
        for refid in [
            "bible.62",
            "bible.62.3",
            "bible.62.3.4",
            "bible.62.3-62.4",
            "bible.63.4.1-63.5.9",
            "bible.19.3.title",
            "bible+nrsv.62.4.2",
        ] {
            assert_eq!(p.parse_refid(refid).unwrap().refid(), refid);
        }
    }

    #[test]
    fn test_parse_refid_title_from_zero() {
        let p = Parser::new();
        assert_eq!(p.parse_refid("bible.19.3.0").unwrap().refid(), "bible.19.3.title");
    }

    #[test]
    fn test_parse_interns() {
        let p = Parser::new();
        let a = p.parse("Mk 3:4").unwrap();
        let b = p.parse_refid("bible.62.3.4").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_error_policies() {
        let p = Parser::new();
        assert_eq!(
            p.userstring_from_refid("bible.62.3.4", "en", ErrorPolicy::Strict)
                .unwrap(),
            Some("Mk 3:4".to_string())
        );
        assert!(p
            .userstring_from_refid("bible.62.99.1", "en", ErrorPolicy::Strict)
            .is_err());
        assert_eq!(
            p.userstring_from_refid("garbage", "en", ErrorPolicy::Ignore)
                .unwrap(),
            Some("garbage".to_string())
        );
        assert_eq!(
            p.userstring_from_refid("garbage", "en", ErrorPolicy::Filter)
                .unwrap(),
            None
        );
        assert_eq!(
            p.refid_from_text("Mark 3:4", ErrorPolicy::Strict).unwrap(),
            Some("bible.62.3.4".to_string())
        );
        assert_eq!(
            p.refid_from_text("Nonsense", ErrorPolicy::Filter).unwrap(),
            None
        );
    }
}
