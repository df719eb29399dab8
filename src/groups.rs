//! Named groups of Bible books.
//!
//! The twelve traditional groupings (Pentateuch, Gospels, ...) with rolled
//! up chapter and verse counts and canon membership. Groups overlap: the
//! Pastoral Epistles are a subset of the Pauline Epistles.

use lazy_static::lazy_static;

use crate::books::{self, Book, CanonTradition};

pub struct BookGroup {
    pub name: &'static str,
    pub books: Vec<&'static Book>,
    pub n_chapters: u32,
    pub n_verses: u32,
    pub canons: Vec<CanonTradition>,
}

impl BookGroup {
    fn new(name: &'static str, booknames: &[&str]) -> BookGroup {
        let books: Vec<&'static Book> = booknames
            .iter()
            .map(|n| books::book_by_name(n).unwrap())
            .collect();
        let n_chapters = books.iter().map(|b| b.n_chapters).sum();
        let n_verses = books.iter().map(|b| b.n_verses).sum();
        let canons = [
            CanonTradition::Jewish,
            CanonTradition::Catholic,
            CanonTradition::Protestant,
        ]
        .into_iter()
        .filter(|t| books.iter().all(|b| b.in_canon(*t)))
        .collect();
        BookGroup {
            name,
            books,
            n_chapters,
            n_verses,
            canons,
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Every chapter of every member book as "refname chapter" strings, in
    /// catalog order: "1 Ti 1", "1 Ti 2", ... "Phm 1".
    pub fn book_chapters(&self) -> Vec<String> {
        self.books
            .iter()
            .flat_map(|b| {
                b.chapters()
                    .into_iter()
                    .map(move |c| format!("{} {}", b.refname, c))
            })
            .collect()
    }

    /// A group belongs to a canon tradition iff all its member books do.
    pub fn in_canon(&self, tradition: CanonTradition) -> bool {
        self.canons.contains(&tradition)
    }
}

lazy_static! {
    static ref GROUPS: Vec<BookGroup> = vec![
        BookGroup::new("Pentateuch", &["Ge", "Ex", "Le", "Nu", "Dt"]),
        BookGroup::new(
            "OT History",
            &["Jos", "Jdg", "Ru", "1 Sa", "2 Sa", "1 Ki", "2 Ki", "1 Ch", "2 Ch", "Ezr", "Ne",
              "Es"],
        ),
        BookGroup::new("Poetry", &["Job", "Ps", "Pr", "Ec", "So", "La"]),
        BookGroup::new("Major Prophets", &["Is", "Je", "Eze"]),
        BookGroup::new(
            "Minor Prophets",
            &["Da", "Ho", "Joe", "Am", "Obad", "Jon", "Mic", "Na", "Hab", "Zep", "Hag", "Zec",
              "Mal"],
        ),
        BookGroup::new(
            "Apocrypha",
            &["Tob", "Jdt", "Add Es", "Wis", "Sir", "Bar", "LJe", "Song Thr", "Sus", "Bel",
              "1 Mac", "2 Mac", "1 Esd", "PrMan", "AddPs", "3 Mac", "2 Esd", "4 Mac", "Ode",
              "PsSol", "EpLaod"],
        ),
        BookGroup::new("Gospels", &["Mt", "Mk", "Lk", "Jn"]),
        BookGroup::new("NT History", &["Ac"]),
        BookGroup::new(
            "Pauline Epistles",
            &["Ro", "1 Co", "2 Co", "Ga", "Eph", "Php", "Col", "1 Th", "2 Th", "1 Ti", "2 Ti",
              "Tit", "Phm"],
        ),
        BookGroup::new("Pastoral Epistles", &["1 Ti", "2 Ti", "Tit", "Phm"]),
        BookGroup::new(
            "Catholic Epistles",
            &["Heb", "Jas", "1 Pe", "2 Pe", "1 Jn", "2 Jn", "3 Jn", "Jud"],
        ),
        BookGroup::new("Apocalypse", &["Re"]),
    ];
}

/// Look up a group by its traditional name, like "Gospels".
pub fn group(name: &str) -> Option<&'static BookGroup> {
    GROUPS.iter().find(|g| g.name == name)
}

pub fn all_groups() -> impl Iterator<Item = &'static BookGroup> {
    GROUPS.iter()
}
