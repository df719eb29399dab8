//! Bible reference handling: an 87-book catalog with verse indexing, a
//! validated reference model with ranges, canonical and human-readable
//! formatting, parsing, and localized book abbreviations.
//!
//! ```
//! use bibleref::parse::Parser;
//!
//! let parser = Parser::new();
//! let r = parser.parse("Lk 4:1-9").unwrap();
//! assert_eq!(r.refid(), "bible.63.4.1-63.4.9");
//! assert_eq!(r.userstring("en").unwrap(), "Lk 4:1\u{2013}9");
//! ```

pub mod abbreviations;
pub mod biblia;
pub mod books;
pub mod groups;
pub mod logger;
pub mod parse;
pub mod refs;
pub mod registry;

pub use books::{Book, BooksError, CanonTradition};
pub use parse::{ErrorPolicy, ParseError, Parser};
pub use refs::{BibleDatatype, Reference, ReferenceError, VerseNum};
pub use registry::ReferenceRegistry;
