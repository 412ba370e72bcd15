/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use crate::configs::lookup_options::LookupOptions;
use crate::emojis::sequence::EmojiSequence;
use crate::lookup::{EmojiLookup, TWEMOJI_BASE_URL};
use crate::tables::emoji_tables::{bundled_table, EmojiTable};

fn image(stem: &str) -> String {
    format!("{}{}.png", TWEMOJI_BASE_URL, stem)
}

#[test]
fn every_name_round_trips() {
    let lookup = EmojiLookup::bundled();
    for (emoji, names) in bundled_table().entries() {
        for name in names {
            assert_eq!(lookup.name_to_unicode(name), Some(emoji.to_string()), "{}", name);
            let all_names = lookup.unicode_to_all_names(&emoji.to_string(), false).unwrap();
            assert!(all_names.contains(name), "{} not in {:?}", name, all_names);
        }
    }
}

#[test]
fn names_from_every_category() {
    let expected = [
        ("grimacing", "1F62C"),
        ("smiling_imp", "1F608"),
        ("smiling_face_with_horns", "1F608"),
        ("hugging", "1F917"),
        ("melting_face", "1FAE0"),
        ("woman_running", "1F3C3-200D-2640-FE0F"),
        ("runner", "1F3C3"),
        ("ninja", "1F977"),
        ("fox", "1F98A"),
        ("black_cat", "1F408-200D-2B1B"),
        ("pizza", "1F355"),
        ("soccer", "26BD"),
        ("airplane", "2708-FE0F"),
        ("bell", "1F514"),
        ("lock", "1F512"),
        ("key", "1F511"),
        ("arrow_right", "27A1-FE0F"),
        ("red_square", "1F7E5"),
        ("zero", "30-FE0F-20E3"),
        ("regional_indicator_q", "1F1F6"),
        ("flag_fr", "1F1EB-1F1F7"),
        ("fr", "1F1EB-1F1F7"),
        ("england", "1F3F4-E0067-E0062-E0065-E006E-E0067-E007F"),
    ];
    let lookup = EmojiLookup::bundled();
    for (name, hex) in expected.iter() {
        let sequence = lookup.name_to_sequence(name);
        assert_eq!(sequence.as_ref().map(EmojiSequence::hex_notation).as_deref(), Some(*hex), "{}", name);
    }

    // Aliases lead back to the primary name
    assert_eq!(crate::unicode_to_name("😈", false).unwrap(), "smiling_imp");
    assert_eq!(crate::unicode_to_name("🏃", false).unwrap(), "person_running");
    assert_eq!(crate::unicode_to_name("🇫🇷", true).unwrap(), ":flag_fr:");

    assert_eq!(crate::unicode_to_name("🕵🏽", false).unwrap(), "detective_tone3");
    assert_eq!(crate::name_to_image("woman_running_tone2").unwrap(), image("1f3c3-1f3fc-200d-2640-fe0f"));
}

#[test]
fn colons_are_optional() {
    assert_eq!(crate::name_to_unicode("thumbsup").unwrap(), "👍");
    assert_eq!(crate::name_to_unicode(":thumbsup:"), crate::name_to_unicode("thumbsup"));
    assert_eq!(crate::name_to_unicode(":thumbsup_tone2:").unwrap(), "👍🏼");
    assert_eq!(crate::name_to_unicode("::"), None);
    assert_eq!(crate::name_to_unicode(""), None);
}

#[test]
fn put_colons() {
    let lookup = EmojiLookup::bundled();
    for (emoji, _) in bundled_table().entries() {
        let emoji = emoji.to_string();
        let plain = lookup.unicode_to_name(&emoji, false).unwrap();
        assert_eq!(lookup.unicode_to_name(&emoji, true).unwrap(), format!(":{}:", plain));
    }
    assert_eq!(
        crate::unicode_to_all_names("👎", true).unwrap(),
        vec![":thumbsdown:", ":-1:", ":thumbdown:"]
    );
}

#[test]
fn tone_variants() {
    let names = crate::unicode_to_all_names("🖖🏽", false).unwrap();
    assert_eq!(names[0], "vulcan_tone3");
    assert!(names.iter().all(|name| name.ends_with("_tone3")));

    // Skin tones go before the first zero-width joiner
    let technologist = crate::name_to_unicode("man_technologist_tone4").unwrap();
    assert_eq!(EmojiSequence::from(technologist.as_str()).hex_notation(), "1F468-1F3FE-200D-1F4BB");
    assert_eq!(crate::unicode_to_name(&technologist, false).unwrap(), "man_technologist_tone4");

    // The base emoji has to exist
    assert_eq!(crate::name_to_unicode("wumpus_tone1"), None);
    assert_eq!(crate::unicode_to_name("a🏻", false), None);
}

#[test]
fn variation_selectors() {
    // Both forms of an emoji are accepted
    assert_eq!(crate::unicode_to_name("❤️", false).unwrap(), "heart");
    assert_eq!(crate::unicode_to_name("❤", false).unwrap(), "heart");
    assert_eq!(crate::name_to_unicode("heart").unwrap(), "❤️");

    // A tone after the variation selector of the base emoji
    let victory = crate::name_to_unicode("v_tone1").unwrap();
    assert_eq!(EmojiSequence::from(victory.as_str()).hex_notation(), "270C-FE0F-1F3FB");
    assert_eq!(crate::unicode_to_name(&victory, false).unwrap(), "v_tone1");
    assert_eq!(crate::unicode_to_name("✌🏻", false).unwrap(), "v_tone1");
}

#[test]
fn unknown_emojis() {
    assert_eq!(crate::unicode_to_all_names("x", false), None);
    assert_eq!(crate::unicode_to_all_names("", false), None);
    assert_eq!(crate::unicode_to_all_names("👍x", false), None);
    assert_eq!(crate::unicode_to_name("not an emoji", true), None);
    assert_eq!(crate::unicode_to_image("x"), None);
    assert_eq!(crate::unicode_to_image(""), None);
    assert_eq!(crate::name_to_image("not_an_emoji"), None);
}

#[test]
fn image_urls() {
    assert_eq!(crate::unicode_to_image("👍").unwrap(), image("1f44d"));
    assert_eq!(crate::name_to_image(":thumbsup_tone1:").unwrap(), image("1f44d-1f3fb"));
    // VS-16 only stays in ZWJ sequences
    assert_eq!(crate::unicode_to_image("❤️").unwrap(), image("2764"));
    assert_eq!(crate::name_to_image("v_tone2").unwrap(), image("270c-1f3fc"));
    assert_eq!(crate::name_to_image("hash").unwrap(), image("23-20e3"));
    assert_eq!(crate::name_to_image("rainbow_flag").unwrap(), image("1f3f3-fe0f-200d-1f308"));
    assert_eq!(crate::name_to_image("man_technologist_tone5").unwrap(), image("1f468-1f3ff-200d-1f4bb"));
}

#[test]
fn image_url_stems_are_hex_codepoints() {
    let lookup = EmojiLookup::bundled();
    for (emoji, _) in bundled_table().entries() {
        let url = lookup.unicode_to_image(&emoji.to_string()).unwrap();
        let stem = url.trim_start_matches(TWEMOJI_BASE_URL).trim_end_matches(".png");
        let words: Vec<&str> = stem.split('-').collect();

        assert!(words.iter().all(|word| word.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())));
        assert_eq!(words.contains(&"fe0f"), emoji.contains_zwj() && emoji.contains(&'\u{fe0f}'), "{}", url);
    }
}

#[test]
fn plain_lookups() {
    let lookup = EmojiLookup::with_options(bundled_table(), LookupOptions::plain());

    assert_eq!(lookup.name_to_unicode("thumbsup").unwrap(), "👍");
    assert_eq!(lookup.name_to_unicode("thumbsup_tone1"), None);
    assert_eq!(lookup.unicode_to_name("👍🏻", false), None);
    assert_eq!(lookup.unicode_to_image("👍🏻"), None);

    // Table entries are still found as they are
    assert_eq!(lookup.unicode_to_name("❤️", false).unwrap(), "heart");
    assert_eq!(lookup.unicode_to_image("❤️").unwrap(), image("2764-fe0f"));
}

#[test]
fn selectors_the_table_does_not_list() {
    let plain = EmojiLookup::with_options(bundled_table(), LookupOptions::plain());

    // A VS-16 the table does not list is only ignored while stripping is on
    assert_eq!(crate::unicode_to_name("👍\u{fe0f}", false).unwrap(), "thumbsup");
    assert_eq!(plain.unicode_to_name("👍\u{fe0f}", false), None);

    // Both forms of a table entry are known either way
    assert_eq!(crate::unicode_to_name("❤", false).unwrap(), "heart");
    assert_eq!(plain.unicode_to_name("❤", false).unwrap(), "heart");
    assert_eq!(plain.unicode_to_image("❤").unwrap(), image("2764"));
}

#[test]
fn image_url_from_hex_words() {
    let keycap = EmojiSequence::from("#️⃣");
    let plain = EmojiLookup::with_options(bundled_table(), LookupOptions::plain());
    assert_eq!(plain.image_url(&keycap), image(&keycap.hex_words().join("-")));
    assert_eq!(plain.image_url(&keycap), image("23-fe0f-20e3"));
    assert_eq!(EmojiLookup::bundled().image_url(&keycap), image("23-20e3"));

    // Unknown emojis get a URL as well
    assert_eq!(EmojiLookup::bundled().image_url(&EmojiSequence::from("x")), image("78"));
}

#[test]
fn custom_table() {
    let mut table = EmojiTable::new();
    table.insert_tone("tone1", '\u{1f3fb}').unwrap();
    table.insert(EmojiSequence::from("👋"), vec!["wave"]).unwrap();
    let lookup = EmojiLookup::new(&table);

    assert_eq!(lookup.name_to_unicode("wave_tone1").unwrap(), "👋🏻");
    assert_eq!(lookup.unicode_to_name("👋🏻", true).unwrap(), ":wave_tone1:");
    // Not in this table
    assert_eq!(lookup.name_to_unicode("thumbsup"), None);
}
