//! Core types for Bible references.
//!
//! A reference is one of five shapes: a whole book, a chapter, a single
//! verse, a chapter range, or a verse range. All shapes carry a bible
//! datatype and a book from the catalog, and are fully validated at
//! construction, so no reference value exists in an invalid state.
//!
//! ```
//! use bibleref::refs::{Reference, VerseNum, BibleDatatype};
//!
//! let vref = Reference::verse(BibleDatatype::Bible, 62, 3, VerseNum::Num(4)).unwrap();
//! assert_eq!(vref.refid(), "bible.62.3.4");
//! assert_eq!(vref.userstring("en").unwrap(), "Mk 3:4");
//! assert_eq!(vref.refly_url(), "https://ref.ly/logosref/Bible.Mk3.4");
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

use crate::abbreviations::abbreviations;
use crate::books::{self, Book, BooksError};

/// The fixed enumeration of bible datatypes. Each has a human-facing tag
/// ("BibleNRSV") and a machine tag ("bible+nrsv"); the mapping is
/// bidirectional and total over the enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BibleDatatype {
    #[default]
    Bible,
    BibleNrsv,
    BibleBhs,
    BibleLxx,
    BibleLxx2,
    BibleEsv,
    BibleNa27,
    BibleSblgnt,
    BibleLeb,
}

impl BibleDatatype {
    pub const ALL: [BibleDatatype; 9] = [
        BibleDatatype::Bible,
        BibleDatatype::BibleNrsv,
        BibleDatatype::BibleBhs,
        BibleDatatype::BibleLxx,
        BibleDatatype::BibleLxx2,
        BibleDatatype::BibleEsv,
        BibleDatatype::BibleNa27,
        BibleDatatype::BibleSblgnt,
        BibleDatatype::BibleLeb,
    ];

    pub fn human_tag(&self) -> &'static str {
        match self {
            BibleDatatype::Bible => "Bible",
            BibleDatatype::BibleNrsv => "BibleNRSV",
            BibleDatatype::BibleBhs => "BibleBHS",
            BibleDatatype::BibleLxx => "BibleLXX",
            BibleDatatype::BibleLxx2 => "BibleLXX2",
            BibleDatatype::BibleEsv => "BibleESV",
            BibleDatatype::BibleNa27 => "BibleNA27",
            BibleDatatype::BibleSblgnt => "BibleSBLGNT",
            BibleDatatype::BibleLeb => "BibleLEB",
        }
    }

    pub fn machine_tag(&self) -> &'static str {
        match self {
            BibleDatatype::Bible => "bible",
            BibleDatatype::BibleNrsv => "bible+nrsv",
            BibleDatatype::BibleBhs => "bible+bhs",
            BibleDatatype::BibleLxx => "bible+lxx",
            BibleDatatype::BibleLxx2 => "bible+lxx2",
            BibleDatatype::BibleEsv => "bible+esv",
            BibleDatatype::BibleNa27 => "bible+na27",
            BibleDatatype::BibleSblgnt => "bible+sblgnt",
            // the machine tag for LEB is versioned
            BibleDatatype::BibleLeb => "bible+leb2",
        }
    }

    pub fn from_human_tag(tag: &str) -> Option<BibleDatatype> {
        BibleDatatype::ALL.into_iter().find(|d| d.human_tag() == tag)
    }

    pub fn from_machine_tag(tag: &str) -> Option<BibleDatatype> {
        BibleDatatype::ALL.into_iter().find(|d| d.machine_tag() == tag)
    }
}

/// A verse position within a chapter. Psalm titles are a verse of their own
/// before verse 1; they render as the literal token `title` rather than `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VerseNum {
    Title,
    Num(u32),
}

impl VerseNum {
    pub fn number(&self) -> u32 {
        match self {
            VerseNum::Title => 0,
            VerseNum::Num(n) => *n,
        }
    }

    /// Parse a verse token: `title` and `0` both mean the title verse, and
    /// a trailing sub-verse letter is dropped ("9a" means verse 9).
    pub fn from_token(token: &str) -> Option<VerseNum> {
        if token == "title" || token == "0" {
            return Some(VerseNum::Title);
        }
        let digits = token.trim_end_matches(|c: char| c.is_ascii_lowercase());
        match digits.parse::<u32>() {
            Ok(0) => Some(VerseNum::Title),
            Ok(n) => Some(VerseNum::Num(n)),
            Err(_) => None,
        }
    }
}

impl fmt::Display for VerseNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerseNum::Title => write!(f, "title"),
            VerseNum::Num(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Invalid book index: {0}")]
    InvalidBook(u32),

    #[error("Invalid chapter index: {0}")]
    InvalidChapter(u32),

    #[error("Invalid verse index {verse} for chapter {chapter}")]
    InvalidVerse { chapter: u32, verse: VerseNum },

    #[error("Range endpoints must be in the same book: {start} and {end}")]
    RangeBookMismatch { start: String, end: String },

    #[error("Range endpoints must be at the same level: {start} and {end}")]
    RangeLevelMismatch { start: String, end: String },

    #[error("Range start {start} must precede end {end}")]
    RangeOrderViolation { start: String, end: String },

    #[error("Order is not defined between {a} and {b}")]
    LevelMismatch { a: String, b: String },

    #[error("Localization failed: {0}")]
    Localization(String),
}

impl From<BooksError> for ReferenceError {
    fn from(e: BooksError) -> ReferenceError {
        match e {
            BooksError::OutOfRange(i) => ReferenceError::InvalidBook(i),
            BooksError::UnknownBookName(_) => ReferenceError::InvalidBook(0),
            BooksError::InvalidChapter(c) => ReferenceError::InvalidChapter(c),
            BooksError::VerseOutOfRange { chapter, verse } => ReferenceError::InvalidVerse {
                chapter,
                verse: VerseNum::Num(verse),
            },
        }
    }
}

/// The granularity of a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Book,
    Chapter,
    Verse,
}

/// Reference to a whole book, without chapter and verse.
#[derive(Debug, Clone)]
pub struct BookRef {
    pub datatype: BibleDatatype,
    pub book: &'static Book,
}

impl BookRef {
    pub fn new(datatype: BibleDatatype, book: u32) -> Result<BookRef, ReferenceError> {
        let book = books::book(book).map_err(|_| ReferenceError::InvalidBook(book))?;
        Ok(BookRef { datatype, book })
    }

    pub fn refid(&self) -> String {
        format!("{}.{}", self.datatype.machine_tag(), self.book.index)
    }
}

/// Reference to a book and chapter, without verse.
#[derive(Debug, Clone)]
pub struct ChapterRef {
    pub datatype: BibleDatatype,
    pub book: &'static Book,
    pub chapter: u32,
}

impl ChapterRef {
    pub fn new(
        datatype: BibleDatatype,
        book: u32,
        chapter: u32,
    ) -> Result<ChapterRef, ReferenceError> {
        let book = books::book(book).map_err(|_| ReferenceError::InvalidBook(book))?;
        if !book.has_chapter(chapter) {
            return Err(ReferenceError::InvalidChapter(chapter));
        }
        Ok(ChapterRef {
            datatype,
            book,
            chapter,
        })
    }

    pub fn refid(&self) -> String {
        format!(
            "{}.{}.{}",
            self.datatype.machine_tag(),
            self.book.index,
            self.chapter
        )
    }

    pub fn final_verse(&self) -> u32 {
        // the chapter was validated at construction
        self.book.final_verse(self.chapter).unwrap_or(0)
    }

    /// Promote to a reference to verse 1 of the chapter. Used when a range
    /// mixes chapter and verse endpoints.
    pub fn to_verseref(&self) -> Result<VerseRef, ReferenceError> {
        VerseRef::new(
            self.datatype,
            self.book.index,
            self.chapter,
            VerseNum::Num(1),
        )
    }
}

/// A simple reference to book, chapter and verse.
#[derive(Debug, Clone)]
pub struct VerseRef {
    pub datatype: BibleDatatype,
    pub book: &'static Book,
    pub chapter: u32,
    pub verse: VerseNum,
    // signed so the title verse can sit one slot before verse 1 even at the
    // start of a book
    vindex: i64,
}

impl VerseRef {
    pub fn new(
        datatype: BibleDatatype,
        book: u32,
        chapter: u32,
        verse: VerseNum,
    ) -> Result<VerseRef, ReferenceError> {
        let book = books::book(book).map_err(|_| ReferenceError::InvalidBook(book))?;
        let final_verse = book
            .final_verse(chapter)
            .map_err(|_| ReferenceError::InvalidChapter(chapter))?;
        let vindex = match verse {
            VerseNum::Title => book.vindex(chapter, 1)? as i64 - 1,
            VerseNum::Num(n) => {
                if n > final_verse {
                    return Err(ReferenceError::InvalidVerse { chapter, verse });
                }
                book.vindex(chapter, n)? as i64
            }
        };
        Ok(VerseRef {
            datatype,
            book,
            chapter,
            verse,
            vindex,
        })
    }

    /// Build the verse reference for a zero-based position into the book's
    /// verse sequence.
    pub fn from_vindex(
        datatype: BibleDatatype,
        book: &'static Book,
        vindex: u32,
    ) -> VerseRef {
        let (chapter, verse) = book.vindex_to_chapter_verse(vindex);
        VerseRef {
            datatype,
            book,
            chapter,
            verse: VerseNum::Num(verse),
            vindex: vindex as i64,
        }
    }

    pub fn vindex(&self) -> i64 {
        self.vindex
    }

    pub fn refid(&self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.datatype.machine_tag(),
            self.book.index,
            self.chapter,
            self.verse
        )
    }
}

impl PartialEq for VerseRef {
    fn eq(&self, other: &VerseRef) -> bool {
        self.datatype == other.datatype
            && self.book.index == other.book.index
            && self.chapter == other.chapter
            && self.verse == other.verse
    }
}

impl Eq for VerseRef {}

impl Hash for VerseRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.datatype, self.book.index, self.chapter, self.verse).hash(state);
    }
}

/// A range of chapters within one book, like Mark 1-4. Cross-book and
/// cross-bible ranges are not allowed.
#[derive(Debug, Clone)]
pub struct RangeChapterRef {
    pub start: ChapterRef,
    pub end: ChapterRef,
}

impl RangeChapterRef {
    pub fn new(start: ChapterRef, end: ChapterRef) -> Result<RangeChapterRef, ReferenceError> {
        if start.datatype != end.datatype || start.book.index != end.book.index {
            return Err(ReferenceError::RangeBookMismatch {
                start: start.refid(),
                end: end.refid(),
            });
        }
        if start.chapter > end.chapter {
            return Err(ReferenceError::RangeOrderViolation {
                start: start.refid(),
                end: end.refid(),
            });
        }
        Ok(RangeChapterRef { start, end })
    }

    /// The number of chapters between start and end, inclusive, so 3-4 has
    /// length 2 and the smallest range has length 1.
    pub fn len(&self) -> usize {
        (self.end.chapter - self.start.chapter + 1) as usize
    }

    pub fn refid(&self) -> String {
        range_refid(&self.start.refid(), &self.end.refid(), self.end.datatype)
    }
}

/// A range of verses within one book, possibly crossing chapters.
#[derive(Debug, Clone)]
pub struct RangeVerseRef {
    pub start: VerseRef,
    pub end: VerseRef,
}

impl RangeVerseRef {
    pub fn new(start: VerseRef, end: VerseRef) -> Result<RangeVerseRef, ReferenceError> {
        if start.datatype != end.datatype || start.book.index != end.book.index {
            return Err(ReferenceError::RangeBookMismatch {
                start: start.refid(),
                end: end.refid(),
            });
        }
        // ordering is checked on vindex, not the raw verse number, so
        // cross-chapter ranges order correctly
        if start.vindex > end.vindex {
            return Err(ReferenceError::RangeOrderViolation {
                start: start.refid(),
                end: end.refid(),
            });
        }
        Ok(RangeVerseRef { start, end })
    }

    /// The number of verses between start and end, inclusive.
    pub fn len(&self) -> usize {
        (self.end.vindex - self.start.vindex + 1) as usize
    }

    pub fn refid(&self) -> String {
        range_refid(&self.start.refid(), &self.end.refid(), self.end.datatype)
    }
}

// The end part of a range id elides the datatype prefix shared with the
// start: bible.62.3-62.4.
fn range_refid(start_refid: &str, end_refid: &str, end_datatype: BibleDatatype) -> String {
    let prefix_len = end_datatype.machine_tag().len() + 1;
    format!("{}-{}", start_refid, &end_refid[prefix_len..])
}

/// The closed union of reference shapes.
#[derive(Debug, Clone)]
pub enum Reference {
    Book(BookRef),
    Chapter(ChapterRef),
    Verse(VerseRef),
    ChapterRange(RangeChapterRef),
    VerseRange(RangeVerseRef),
}

impl Reference {
    pub fn book_ref(datatype: BibleDatatype, book: u32) -> Result<Reference, ReferenceError> {
        Ok(Reference::Book(BookRef::new(datatype, book)?))
    }

    pub fn chapter(
        datatype: BibleDatatype,
        book: u32,
        chapter: u32,
    ) -> Result<Reference, ReferenceError> {
        Ok(Reference::Chapter(ChapterRef::new(datatype, book, chapter)?))
    }

    pub fn verse(
        datatype: BibleDatatype,
        book: u32,
        chapter: u32,
        verse: VerseNum,
    ) -> Result<Reference, ReferenceError> {
        Ok(Reference::Verse(VerseRef::new(datatype, book, chapter, verse)?))
    }

    /// Build a range from two endpoint references. Mixed chapter and verse
    /// granularity is resolved by promoting the chapter endpoint to verse 1
    /// of that chapter, so "1:12 - 2" means verse 1:12 through verse 2:1.
    pub fn range(start: Reference, end: Reference) -> Result<Reference, ReferenceError> {
        match (start, end) {
            (Reference::Verse(s), Reference::Verse(e)) => {
                Ok(Reference::VerseRange(RangeVerseRef::new(s, e)?))
            }
            (Reference::Verse(s), Reference::Chapter(e)) => {
                let e = e.to_verseref()?;
                Ok(Reference::VerseRange(RangeVerseRef::new(s, e)?))
            }
            (Reference::Chapter(s), Reference::Verse(e)) => {
                let s = s.to_verseref()?;
                Ok(Reference::VerseRange(RangeVerseRef::new(s, e)?))
            }
            (Reference::Chapter(s), Reference::Chapter(e)) => {
                Ok(Reference::ChapterRange(RangeChapterRef::new(s, e)?))
            }
            (start, end) => Err(ReferenceError::RangeLevelMismatch {
                start: start.refid(),
                end: end.refid(),
            }),
        }
    }

    pub fn datatype(&self) -> BibleDatatype {
        match self {
            Reference::Book(r) => r.datatype,
            Reference::Chapter(r) => r.datatype,
            Reference::Verse(r) => r.datatype,
            Reference::ChapterRange(r) => r.start.datatype,
            Reference::VerseRange(r) => r.start.datatype,
        }
    }

    pub fn book(&self) -> &'static Book {
        match self {
            Reference::Book(r) => r.book,
            Reference::Chapter(r) => r.book,
            Reference::Verse(r) => r.book,
            Reference::ChapterRange(r) => r.start.book,
            Reference::VerseRange(r) => r.start.book,
        }
    }

    pub fn level(&self) -> Level {
        match self {
            Reference::Book(_) => Level::Book,
            Reference::Chapter(_) | Reference::ChapterRange(_) => Level::Chapter,
            Reference::Verse(_) | Reference::VerseRange(_) => Level::Verse,
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Reference::ChapterRange(_) | Reference::VerseRange(_))
    }

    /// The number of units at this reference's level: 1 for simple
    /// references, the inclusive span for ranges.
    pub fn len(&self) -> usize {
        match self {
            Reference::ChapterRange(r) => r.len(),
            Reference::VerseRange(r) => r.len(),
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The canonical machine identifier, like `bible.62.3.4` or
    /// `bible.63.4.1-63.5.9`.
    pub fn refid(&self) -> String {
        match self {
            Reference::Book(r) => r.refid(),
            Reference::Chapter(r) => r.refid(),
            Reference::Verse(r) => r.refid(),
            Reference::ChapterRange(r) => r.refid(),
            Reference::VerseRange(r) => r.refid(),
        }
    }

    // (datatype, book, chapter, verse slot) for one endpoint; levels absent
    // from the shape are zero.
    fn start_key(&self) -> (&'static str, u32, u32, i64) {
        match self {
            Reference::Book(r) => (r.datatype.machine_tag(), r.book.index, 0, 0),
            Reference::Chapter(r) => (r.datatype.machine_tag(), r.book.index, r.chapter, 0),
            Reference::Verse(r) => (
                r.datatype.machine_tag(),
                r.book.index,
                r.chapter,
                r.vindex,
            ),
            Reference::ChapterRange(r) => {
                (r.start.datatype.machine_tag(), r.start.book.index, r.start.chapter, 0)
            }
            Reference::VerseRange(r) => (
                r.start.datatype.machine_tag(),
                r.start.book.index,
                r.start.chapter,
                r.start.vindex,
            ),
        }
    }

    fn end_key(&self) -> (&'static str, u32, u32, i64) {
        match self {
            Reference::ChapterRange(r) => {
                (r.end.datatype.machine_tag(), r.end.book.index, r.end.chapter, 0)
            }
            Reference::VerseRange(r) => (
                r.end.datatype.machine_tag(),
                r.end.book.index,
                r.end.chapter,
                r.end.vindex,
            ),
            _ => self.start_key(),
        }
    }

    /// Compare two references. The order is total among references at the
    /// same level; a chapter reference can be compared against a verse
    /// reference by promotion to its first verse; anything else is an error
    /// rather than a silent comparison.
    pub fn try_cmp(&self, other: &Reference) -> Result<Ordering, ReferenceError> {
        if self.level() == other.level() {
            let a = (self.start_key(), self.end_key());
            let b = (other.start_key(), other.end_key());
            return Ok(a.cmp(&b));
        }
        match (self, other) {
            (Reference::Chapter(c), Reference::Verse(_)) => {
                Reference::Verse(c.to_verseref()?).try_cmp(other)
            }
            (Reference::Verse(_), Reference::Chapter(c)) => {
                self.try_cmp(&Reference::Verse(c.to_verseref()?))
            }
            _ => Err(ReferenceError::LevelMismatch {
                a: self.refid(),
                b: other.refid(),
            }),
        }
    }

    // Inclusive chapter interval covered by the reference.
    fn chapter_interval(&self) -> (u32, u32) {
        match self {
            Reference::Book(r) => {
                let chapters = r.book.chapters();
                match (chapters.first(), chapters.last()) {
                    (Some(&first), Some(&last)) => (first, last),
                    _ => (0, 0),
                }
            }
            Reference::Chapter(r) => (r.chapter, r.chapter),
            Reference::Verse(r) => (r.chapter, r.chapter),
            Reference::ChapterRange(r) => (r.start.chapter, r.end.chapter),
            Reference::VerseRange(r) => (r.start.chapter, r.end.chapter),
        }
    }

    // Inclusive vindex interval, present only for verse-level references.
    fn verse_interval(&self) -> Option<(i64, i64)> {
        match self {
            Reference::Verse(r) => Some((r.vindex, r.vindex)),
            Reference::VerseRange(r) => Some((r.start.vindex, r.end.vindex)),
            _ => None,
        }
    }

    /// True when OTHER's level is at or below SELF's and OTHER's span is
    /// entirely contained within SELF's. Every reference subsumes itself.
    pub fn subsumes(&self, other: &Reference) -> bool {
        if other.level() < self.level() {
            return false;
        }
        if self.datatype() != other.datatype() || self.book().index != other.book().index {
            return false;
        }
        if self.level() >= Level::Chapter {
            let (s1, s2) = self.chapter_interval();
            let (o1, o2) = other.chapter_interval();
            if o1 < s1 || o2 > s2 {
                return false;
            }
        }
        if self.level() == Level::Verse {
            match (self.verse_interval(), other.verse_interval()) {
                (Some((s1, s2)), Some((o1, o2))) => {
                    if o1 < s1 || o2 > s2 {
                        return false;
                    }
                }
                _ => return false,
            }
        }
        true
    }

    /// Enumerate the individual verses covered by a verse-level reference,
    /// in vindex order. Returns None for book- and chapter-level shapes.
    /// The iterator is restartable: call again for a fresh walk.
    pub fn enumerate_verses(&self) -> Option<VerseIter> {
        match self {
            Reference::Verse(r) => Some(VerseIter::over(r.clone(), r.vindex)),
            Reference::VerseRange(r) => Some(VerseIter::over(r.start.clone(), r.end.vindex)),
            _ => None,
        }
    }

    /// The verses common to SELF and OTHER. Only defined between
    /// verse-level references. The order is undefined unless SORT is true,
    /// in which case the result is ordered by vindex.
    pub fn intersection(
        &self,
        other: &Reference,
        sort: bool,
    ) -> Result<Vec<VerseRef>, ReferenceError> {
        let (mine, theirs) = match (self.enumerate_verses(), other.enumerate_verses()) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return Err(ReferenceError::LevelMismatch {
                    a: self.refid(),
                    b: other.refid(),
                })
            }
        };
        let theirs: HashSet<VerseRef> = theirs.collect();
        let mut common: Vec<VerseRef> = mine.filter(|v| theirs.contains(v)).collect();
        if sort {
            common.sort_by_key(|v| v.vindex);
        }
        Ok(common)
    }

    /// A human-readable string in traditional format, like "1 Ki 16:34" or
    /// "Mk 4:1–9". LANGUAGE selects the book abbreviation; "en" uses the
    /// catalog's citation abbreviation directly, other languages go through
    /// the localization table.
    pub fn userstring(&self, language: &str) -> Result<String, ReferenceError> {
        let abbrev = book_abbrev(self.book(), language)?;
        let s = match self {
            Reference::Book(_) => abbrev,
            Reference::Chapter(r) => format!("{} {}", abbrev, r.chapter),
            Reference::Verse(r) => format!("{} {}:{}", abbrev, r.chapter, r.verse),
            Reference::ChapterRange(r) => {
                if r.start.chapter == r.end.chapter {
                    format!("{} {}", abbrev, r.start.chapter)
                } else {
                    format!("{} {}\u{2013}{}", abbrev, r.start.chapter, r.end.chapter)
                }
            }
            Reference::VerseRange(r) => {
                if r.start.chapter == r.end.chapter {
                    format!(
                        "{} {}:{}\u{2013}{}",
                        abbrev, r.start.chapter, r.start.verse, r.end.verse
                    )
                } else {
                    format!(
                        "{} {}:{}\u{2013}{}:{}",
                        abbrev, r.start.chapter, r.start.verse, r.end.chapter, r.end.verse
                    )
                }
            }
        };
        Ok(s)
    }

    // The shared URI fragment: Bible.Mk4.2. Chapter is appended without a
    // separator, the verse with a dot.
    fn uri_fragment(&self) -> String {
        let human = self.datatype().human_tag();
        let refname = self.book().refname;
        let start = match self {
            Reference::Book(_) => format!("{}.{}", human, refname),
            Reference::Chapter(r) => format!("{}.{}{}", human, refname, r.chapter),
            Reference::Verse(r) => format!("{}.{}{}.{}", human, refname, r.chapter, r.verse),
            Reference::ChapterRange(r) => format!("{}.{}{}", human, refname, r.start.chapter),
            Reference::VerseRange(r) => {
                format!("{}.{}{}.{}", human, refname, r.start.chapter, r.start.verse)
            }
        };
        match self {
            Reference::ChapterRange(r) => format!("{}-{}", start, r.end.chapter),
            Reference::VerseRange(r) => {
                if r.start.chapter == r.end.chapter {
                    format!("{}-{}", start, r.end.verse)
                } else {
                    format!("{}-{}:{}", start, r.end.chapter, r.end.verse)
                }
            }
            _ => start,
        }
    }

    /// A ref.ly URL for this reference.
    pub fn refly_url(&self) -> String {
        format!("https://ref.ly/logosref/{}", self.uri_fragment())
    }

    /// A URI under the logosref protocol.
    pub fn logosref_uri(&self) -> String {
        format!("logosref:{}", self.uri_fragment())
    }
}

fn book_abbrev(book: &'static Book, language: &str) -> Result<String, ReferenceError> {
    if language == "en" {
        return Ok(book.refname.to_string());
    }
    abbreviations()
        .for_index(book.index, language)
        .map(|s| s.to_string())
        .map_err(|e| ReferenceError::Localization(e.to_string()))
}

impl PartialEq for Reference {
    fn eq(&self, other: &Reference) -> bool {
        self.level() == other.level()
            && self.is_range() == other.is_range()
            && self.start_key() == other.start_key()
            && self.end_key() == other.end_key()
    }
}

impl Eq for Reference {}

impl Hash for Reference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.level() as u8, self.is_range(), self.start_key(), self.end_key()).hash(state);
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.refid())
    }
}

/// Iterator over the verses of a verse-level reference. The start endpoint
/// is yielded as stored, so a title verse keeps its identity instead of
/// collapsing onto the vindex it shares with the previous chapter's last
/// verse; every later slot maps back through the catalog.
pub struct VerseIter {
    datatype: BibleDatatype,
    book: &'static Book,
    start: Option<VerseRef>,
    cursor: i64,
    end: i64,
}

impl VerseIter {
    fn over(start: VerseRef, end: i64) -> VerseIter {
        VerseIter {
            datatype: start.datatype,
            book: start.book,
            // positions after the start are always >= 0, even when the
            // start is a first-chapter title at vindex -1
            cursor: start.vindex + 1,
            end,
            start: Some(start),
        }
    }
}

impl Iterator for VerseIter {
    type Item = VerseRef;

    fn next(&mut self) -> Option<VerseRef> {
        if let Some(first) = self.start.take() {
            return Some(first);
        }
        if self.cursor > self.end {
            return None;
        }
        let pos = self.cursor as u32;
        self.cursor += 1;
        Some(VerseRef::from_vindex(self.datatype, self.book, pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse(book: u32, chapter: u32, verse: u32) -> Reference {
        Reference::verse(BibleDatatype::Bible, book, chapter, VerseNum::Num(verse)).unwrap()
    }

    #[test]
    fn test_datatype_tags_total() {
        for d in BibleDatatype::ALL {
            assert_eq!(BibleDatatype::from_human_tag(d.human_tag()), Some(d));
            assert_eq!(BibleDatatype::from_machine_tag(d.machine_tag()), Some(d));
        }
        assert_eq!(BibleDatatype::BibleLeb.machine_tag(), "bible+leb2");
    }

    #[test]
    fn test_title_verse_refid() {
        let r = Reference::verse(BibleDatatype::Bible, 19, 3, VerseNum::Title).unwrap();
        assert_eq!(r.refid(), "bible.19.3.title");
        assert_eq!(r.userstring("en").unwrap(), "Ps 3:title");
    }

    #[test]
    fn test_verse_num_tokens() {
        assert_eq!(VerseNum::from_token("title"), Some(VerseNum::Title));
        assert_eq!(VerseNum::from_token("0"), Some(VerseNum::Title));
        assert_eq!(VerseNum::from_token("12"), Some(VerseNum::Num(12)));
        assert_eq!(VerseNum::from_token("9a"), Some(VerseNum::Num(9)));
        assert_eq!(VerseNum::from_token("x"), None);
    }

    #[test]
    fn test_mixed_range_promotion() {
        // verse 1:12 through chapter 2 becomes 1:12 - 2:1
        let start = verse(1, 1, 12);
        let end = Reference::chapter(BibleDatatype::Bible, 1, 2).unwrap();
        let range = Reference::range(start, end).unwrap();
        assert_eq!(range.refid(), "bible.1.1.12-1.2.1");
    }

    #[test]
    fn test_range_level_mismatch() {
        let start = Reference::book_ref(BibleDatatype::Bible, 62).unwrap();
        let end = verse(62, 3, 4);
        assert!(matches!(
            Reference::range(start, end),
            Err(ReferenceError::RangeLevelMismatch { .. })
        ));
    }

    #[test]
    fn test_cross_chapter_range_order() {
        // 1:44 precedes 2:3 even though 44 > 3
        let r = Reference::range(verse(62, 1, 44), verse(62, 2, 3)).unwrap();
        assert_eq!(r.len(), 5);
    }
}
