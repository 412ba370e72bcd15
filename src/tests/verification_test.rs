use crate::configs::lookup_options::LookupOptions;
use crate::emojis::sequence::EmojiSequence;
use crate::lookup::EmojiLookup;
use crate::tables::emoji_tables::{bundled_table, EmojiTable};
use crate::verification::Violation;

#[test]
fn bundled_table_is_consistent() {
    let violations = EmojiLookup::bundled().verify();
    assert!(violations.is_empty(), "{:?}", violations);

    let plain = EmojiLookup::with_options(bundled_table(), LookupOptions::plain());
    let violations = plain.verify();
    assert!(violations.is_empty(), "{:?}", violations);
}

#[test]
fn duplicate_names_are_reported() {
    let mut table = EmojiTable::new();
    let wave = EmojiSequence::from("👋");
    let hand = EmojiSequence::from("✋");
    table.insert(wave.clone(), vec!["wave"]).unwrap();
    table.insert(hand.clone(), vec!["wave"]).unwrap();

    assert_eq!(EmojiLookup::new(&table).verify(), vec![
        Violation::NameMismatch {
            name: String::from("wave"),
            expected: hand,
            found: Some(wave),
        }
    ]);
}

#[test]
fn shadowed_tones_are_reported() {
    let mut table = EmojiTable::new();
    table.insert_tone("tone1", '\u{1f3fb}').unwrap();
    table.insert(EmojiSequence::from("👋"), vec!["wave"]).unwrap();
    // The light skin tone variant of the waving hand under another name
    table.insert(EmojiSequence::from("👋🏻"), vec!["hello"]).unwrap();

    let violations = EmojiLookup::new(&table).verify();
    assert_eq!(violations, vec![
        Violation::ToneMismatch {
            name: String::from("wave_tone1"),
            found: Some(String::from("hello")),
        }
    ]);
    assert_eq!(violations[0].to_string(), "wave_tone1 is recognized as hello");
}
