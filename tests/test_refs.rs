use std::cmp::Ordering;

use bibleref::refs::*;

fn verse(book: u32, chapter: u32, v: u32) -> Reference {
    Reference::verse(BibleDatatype::Bible, book, chapter, VerseNum::Num(v)).unwrap()
}

fn chapter(book: u32, c: u32) -> Reference {
    Reference::chapter(BibleDatatype::Bible, book, c).unwrap()
}

fn verse_range(book: u32, c1: u32, v1: u32, c2: u32, v2: u32) -> Reference {
    Reference::range(verse(book, c1, v1), verse(book, c2, v2)).unwrap()
}

#[test]
fn test_refids() {
    assert_eq!(
        Reference::book_ref(BibleDatatype::Bible, 62).unwrap().refid(),
        "bible.62"
    );
    assert_eq!(chapter(62, 4).refid(), "bible.62.4");
    assert_eq!(verse(62, 4, 8).refid(), "bible.62.4.8");
    assert_eq!(
        Reference::range(chapter(62, 3), chapter(62, 4)).unwrap().refid(),
        "bible.62.3-62.4"
    );
    assert_eq!(verse_range(63, 4, 1, 4, 9).refid(), "bible.63.4.1-63.4.9");
    assert_eq!(verse_range(63, 4, 1, 5, 9).refid(), "bible.63.4.1-63.5.9");
}

#[test]
fn test_construction_failures() {
    assert_eq!(
        Reference::chapter(BibleDatatype::Bible, 62, 33),
        Err(ReferenceError::InvalidChapter(33))
    );
    assert!(matches!(
        Reference::verse(BibleDatatype::Bible, 62, 4, VerseNum::Num(99)),
        Err(ReferenceError::InvalidVerse { .. })
    ));
    assert!(matches!(
        Reference::book_ref(BibleDatatype::Bible, 88),
        Err(ReferenceError::InvalidBook(88))
    ));
    // ranges never cross books
    assert!(matches!(
        Reference::range(chapter(61, 3), chapter(62, 4)),
        Err(ReferenceError::RangeBookMismatch { .. })
    ));
    // nor run backwards
    assert!(matches!(
        Reference::range(verse(62, 4, 9), verse(62, 4, 1)),
        Err(ReferenceError::RangeOrderViolation { .. })
    ));
}

#[test]
fn test_ordering_trichotomy() {
    let a = verse(62, 3, 4);
    let b = verse(62, 3, 5);
    let c = verse(62, 4, 1);
    assert_eq!(a.try_cmp(&b), Ok(Ordering::Less));
    assert_eq!(b.try_cmp(&c), Ok(Ordering::Less));
    assert_eq!(c.try_cmp(&a), Ok(Ordering::Greater));
    assert_eq!(a.try_cmp(&a), Ok(Ordering::Equal));
}

#[test]
fn test_ordering_chapter_verse_promotion() {
    // a chapter compares as its first verse
    assert_eq!(chapter(62, 4).try_cmp(&verse(62, 4, 1)), Ok(Ordering::Equal));
    assert_eq!(chapter(62, 4).try_cmp(&verse(62, 4, 2)), Ok(Ordering::Less));
    assert_eq!(verse(62, 3, 35).try_cmp(&chapter(62, 4)), Ok(Ordering::Less));
}

#[test]
fn test_ordering_level_mismatch() {
    let book = Reference::book_ref(BibleDatatype::Bible, 62).unwrap();
    assert!(matches!(
        book.try_cmp(&verse(62, 3, 4)),
        Err(ReferenceError::LevelMismatch { .. })
    ));
}

#[test]
fn test_title_orders_before_verse_one() {
    let title = Reference::verse(BibleDatatype::Bible, 19, 3, VerseNum::Title).unwrap();
    assert_eq!(title.try_cmp(&verse(19, 3, 1)), Ok(Ordering::Less));
    assert_eq!(verse(19, 2, 12).try_cmp(&title), Ok(Ordering::Less));
}

#[test]
fn test_subsumes_reflexive() {
    let refs = vec![
        Reference::book_ref(BibleDatatype::Bible, 62).unwrap(),
        chapter(62, 4),
        verse(62, 4, 8),
        Reference::range(chapter(62, 3), chapter(62, 4)).unwrap(),
        verse_range(62, 4, 1, 4, 9),
    ];
    for r in &refs {
        assert!(r.subsumes(r), "{} should subsume itself", r.refid());
    }
}

#[test]
fn test_subsumes_containment() {
    let book = Reference::book_ref(BibleDatatype::Bible, 62).unwrap();
    assert!(book.subsumes(&chapter(62, 4)));
    assert!(book.subsumes(&verse(62, 4, 8)));
    assert!(!chapter(62, 4).subsumes(&book));

    assert!(chapter(62, 4).subsumes(&verse(62, 4, 8)));
    assert!(!chapter(62, 4).subsumes(&verse(62, 3, 8)));

    let chapters = Reference::range(chapter(62, 3), chapter(62, 4)).unwrap();
    assert!(chapters.subsumes(&verse_range(62, 3, 2, 4, 1)));
    assert!(!chapters.subsumes(&verse_range(62, 2, 2, 4, 1)));

    let wide = verse_range(62, 4, 1, 4, 9);
    assert!(wide.subsumes(&verse(62, 4, 5)));
    assert!(wide.subsumes(&verse_range(62, 4, 2, 4, 8)));
    assert!(!wide.subsumes(&verse_range(62, 4, 2, 4, 10)));

    // different books never subsume
    assert!(!book.subsumes(&chapter(61, 4)));
    // nor different datatypes
    let nrsv = Reference::chapter(BibleDatatype::BibleNrsv, 62, 4).unwrap();
    assert!(!chapter(62, 4).subsumes(&nrsv));
}

#[test]
fn test_enumerate_length_matches_len() {
    let r = verse_range(63, 4, 1, 5, 9);
    let verses: Vec<_> = r.enumerate_verses().unwrap().collect();
    assert_eq!(verses.len(), r.len());
    assert_eq!(verses.len(), 53);
    assert_eq!(verses[0].refid(), "bible.63.4.1");
    assert_eq!(verses.last().unwrap().refid(), "bible.63.5.9");
}

#[test]
fn test_enumerate_crosses_chapters() {
    // Mark 3 ends at verse 35
    let r = verse_range(62, 3, 34, 4, 2);
    let refids: Vec<String> = r.enumerate_verses().unwrap().map(|v| v.refid()).collect();
    assert_eq!(
        refids,
        vec!["bible.62.3.34", "bible.62.3.35", "bible.62.4.1", "bible.62.4.2"]
    );
}

#[test]
fn test_enumerate_single_title_verse() {
    // a title verse shares its vindex with the previous chapter's last
    // verse; enumeration must still yield the title itself
    let title = Reference::verse(BibleDatatype::Bible, 19, 3, VerseNum::Title).unwrap();
    let refids: Vec<String> = title.enumerate_verses().unwrap().map(|v| v.refid()).collect();
    assert_eq!(refids, vec!["bible.19.3.title"]);
}

#[test]
fn test_enumerate_title_at_book_start() {
    // the first chapter's title sits before vindex 0 and must not vanish
    let title = Reference::verse(BibleDatatype::Bible, 19, 1, VerseNum::Title).unwrap();
    let refids: Vec<String> = title.enumerate_verses().unwrap().map(|v| v.refid()).collect();
    assert_eq!(refids, vec!["bible.19.1.title"]);
}

#[test]
fn test_enumerate_range_from_title() {
    let start = Reference::verse(BibleDatatype::Bible, 19, 3, VerseNum::Title).unwrap();
    let end = Reference::verse(BibleDatatype::Bible, 19, 3, VerseNum::Num(2)).unwrap();
    let r = Reference::range(start, end).unwrap();
    let refids: Vec<String> = r.enumerate_verses().unwrap().map(|v| v.refid()).collect();
    assert_eq!(refids, vec!["bible.19.3.title", "bible.19.3.1", "bible.19.3.2"]);
    assert_eq!(refids.len(), r.len());
}

#[test]
fn test_intersection_keeps_title() {
    let title = Reference::verse(BibleDatatype::Bible, 19, 3, VerseNum::Title).unwrap();
    let wide = Reference::range(
        title.clone(),
        Reference::verse(BibleDatatype::Bible, 19, 3, VerseNum::Num(4)).unwrap(),
    )
    .unwrap();
    let common = wide.intersection(&title, true).unwrap();
    let refids: Vec<String> = common.iter().map(|v| v.refid()).collect();
    assert_eq!(refids, vec!["bible.19.3.title"]);
}

#[test]
fn test_enumerate_restartable() {
    let r = verse_range(62, 4, 1, 4, 3);
    assert_eq!(r.enumerate_verses().unwrap().count(), 3);
    assert_eq!(r.enumerate_verses().unwrap().count(), 3);
    assert!(chapter(62, 4).enumerate_verses().is_none());
}

#[test]
fn test_intersection() {
    let a = verse_range(62, 4, 1, 4, 9);
    let b = verse_range(62, 4, 5, 4, 20);
    let common = a.intersection(&b, true).unwrap();
    let refids: Vec<String> = common.iter().map(|v| v.refid()).collect();
    assert_eq!(
        refids,
        vec!["bible.62.4.5", "bible.62.4.6", "bible.62.4.7", "bible.62.4.8", "bible.62.4.9"]
    );

    let disjoint = a.intersection(&verse_range(62, 5, 1, 5, 2), true).unwrap();
    assert!(disjoint.is_empty());

    assert!(a.intersection(&chapter(62, 4), true).is_err());
}

#[test]
fn test_userstrings() {
    assert_eq!(verse(62, 4, 9).userstring("en").unwrap(), "Mk 4:9");
    assert_eq!(chapter(62, 4).userstring("en").unwrap(), "Mk 4");
    assert_eq!(verse(11, 16, 34).userstring("en").unwrap(), "1 Ki 16:34");
    assert_eq!(
        verse_range(62, 4, 1, 4, 9).userstring("en").unwrap(),
        "Mk 4:1\u{2013}9"
    );
    assert_eq!(
        verse_range(62, 4, 1, 5, 9).userstring("en").unwrap(),
        "Mk 4:1\u{2013}5:9"
    );
    assert_eq!(
        Reference::range(chapter(62, 3), chapter(62, 4)).unwrap().userstring("en").unwrap(),
        "Mk 3\u{2013}4"
    );
}

#[test]
fn test_userstrings_localized() {
    assert_eq!(verse(62, 4, 9).userstring("de").unwrap(), "Mk 4:9");
    assert_eq!(verse(62, 4, 9).userstring("pt").unwrap(), "Mc 4:9");
    assert_eq!(verse(62, 4, 9).userstring("zh-Hans").unwrap(), "可 4:9");
    assert!(matches!(
        verse(62, 4, 9).userstring("fr"),
        Err(ReferenceError::Localization(_))
    ));
}

#[test]
fn test_uris() {
    let v = verse(62, 4, 9);
    assert_eq!(v.refly_url(), "https://ref.ly/logosref/Bible.Mk4.9");
    assert_eq!(v.logosref_uri(), "logosref:Bible.Mk4.9");
    assert_eq!(chapter(62, 4).refly_url(), "https://ref.ly/logosref/Bible.Mk4");
    assert_eq!(
        verse_range(62, 4, 1, 4, 9).refly_url(),
        "https://ref.ly/logosref/Bible.Mk4.1-9"
    );
    assert_eq!(
        verse_range(62, 4, 1, 5, 9).refly_url(),
        "https://ref.ly/logosref/Bible.Mk4.1-5:9"
    );
    assert_eq!(
        Reference::range(chapter(62, 3), chapter(62, 4)).unwrap().logosref_uri(),
        "logosref:Bible.Mk3-4"
    );
    let nrsv = Reference::verse(BibleDatatype::BibleNrsv, 62, 4, VerseNum::Num(9)).unwrap();
    assert_eq!(nrsv.refly_url(), "https://ref.ly/logosref/BibleNRSV.Mk4.9");
}

#[test]
fn test_equality_distinguishes_shapes() {
    assert_eq!(verse(62, 4, 8), verse(62, 4, 8));
    assert_ne!(verse(62, 4, 8), verse(62, 4, 9));
    // a chapter and its first verse are ordered equal but not the same value
    assert_ne!(chapter(62, 4), verse(62, 4, 1));
    // nor is a degenerate range the same as the single reference
    assert_ne!(verse_range(62, 4, 1, 4, 1), verse(62, 4, 1));
}
