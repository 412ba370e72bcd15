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
 *
 */
//! Skin tone variants of emojis.
//!
//! Discord names them by appending the tone as the last word, e.g. `thumbsup_tone2`.
//! In the emoji itself, the tone modifier goes right after the first codepoint of the base emoji,
//! i.e. before the first zero-width joiner or at the end.

use std::fmt::{Display, Formatter};

use crate::emojis::sequence::EmojiSequence;
use crate::tables::emoji_tables::EmojiTable;

/// The reasons why no skin tone variant could be found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToneError {
    /// The name or emoji does not carry a known tone marker.
    /// This is the normal case for most lookups.
    NoToneMarker,
    /// There is a tone marker, but the emoji without it is unknown
    BaseNotFound(String),
}

impl Display for ToneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ToneError::NoToneMarker => write!(f, "No tone marker"),
            ToneError::BaseNotFound(base) => write!(f, "Unknown base emoji {}", base),
        }
    }
}

impl std::error::Error for ToneError {}

/// Builds the emoji for a name whose last word is a tone marker.
/// # Examples
/// ```
/// use discord_emoji::tables::emoji_tables::bundled_table;
/// use discord_emoji::tones::{compose_tone, ToneError};
/// use discord_emoji::emojis::sequence::EmojiSequence;
///
/// let table = bundled_table();
/// assert_eq!(compose_tone(table, "thumbsup_tone1"), Ok(EmojiSequence::from("👍🏻")));
/// assert_eq!(compose_tone(table, "man_technologist_tone2"), Ok(EmojiSequence::from("👨🏼‍💻")));
///
/// assert_eq!(compose_tone(table, "thumbsup"), Err(ToneError::NoToneMarker));
/// assert_eq!(compose_tone(table, "nothing_tone1"), Err(ToneError::BaseNotFound(String::from("nothing"))));
/// ```
pub fn compose_tone(table: &EmojiTable, name: &str) -> Result<EmojiSequence, ToneError> {
    let mut words = name.rsplitn(2, '_');
    let tone_name = words.next().unwrap_or_default();
    let base_name = words.next().unwrap_or_default();

    let tone = table.tone_by_name(tone_name)
        .ok_or(ToneError::NoToneMarker)?;
    let base = table.get_sequence(base_name)
        .ok_or_else(|| ToneError::BaseNotFound(base_name.to_owned()))?;
    Ok(insert_tone(base, tone))
}

/// Inserts the tone modifier before the first zero-width joiner or appends it
/// if there is none.
pub fn insert_tone(base: &EmojiSequence, tone: char) -> EmojiSequence {
    let mut codepoints = base.to_vec();
    match base.first_zwj() {
        Some(zwj) => codepoints.insert(zwj, tone),
        None => codepoints.push(tone),
    }
    EmojiSequence::from(codepoints)
}

/// Finds the names of an emoji whose second codepoint is a tone marker.
///
/// All names of the base emoji are returned in their original order, each with the tone name
/// appended as the last word.
/// # Examples
/// ```
/// use discord_emoji::tables::emoji_tables::bundled_table;
/// use discord_emoji::tones::{decompose_tone, ToneError};
/// use discord_emoji::emojis::sequence::EmojiSequence;
///
/// let table = bundled_table();
/// let names = decompose_tone(table, &EmojiSequence::from("👍🏽")).unwrap();
/// assert_eq!(names, vec!["thumbsup_tone3", "+1_tone3", "thumbup_tone3"]);
///
/// assert_eq!(decompose_tone(table, &EmojiSequence::from("👍")), Err(ToneError::NoToneMarker));
/// ```
pub fn decompose_tone(table: &EmojiTable, emoji: &EmojiSequence) -> Result<Vec<String>, ToneError> {
    let (base, tone) = split_tone(emoji).ok_or(ToneError::NoToneMarker)?;
    let tone_name = table.tone_by_codepoint(tone)
        .ok_or(ToneError::NoToneMarker)?;
    let names = table.get_names(&base)
        .ok_or_else(|| ToneError::BaseNotFound(base.hex_notation()))?;
    Ok(names.iter()
        .map(|name| format!("{}_{}", name, tone_name))
        .collect())
}

/// Separates the second codepoint from the rest of the emoji.
/// That is the only position a tone modifier can have.
fn split_tone(emoji: &EmojiSequence) -> Option<(EmojiSequence, char)> {
    let tone = *emoji.get(1)?;
    let base = emoji.iter()
        .enumerate()
        .filter(|(index, _)| *index != 1)
        .map(|(_, codepoint)| *codepoint)
        .collect();
    Some((base, tone))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> EmojiTable {
        let mut table = EmojiTable::new();
        table.insert_tone("tone1", '\u{1f3fb}').unwrap();
        table.insert_tone("tone5", '\u{1f3ff}').unwrap();
        table.insert(EmojiSequence::from("🖖"), vec!["vulcan", "spock"]).unwrap();
        table.insert(EmojiSequence::from("👩‍🚀"), vec!["woman_astronaut"]).unwrap();
        table
    }

    #[test]
    fn insert_before_first_zwj() {
        let family = EmojiSequence::from("👨‍👩‍👧");
        let toned = insert_tone(&family, '\u{1f3ff}');
        assert_eq!(toned.codepoints(), &['\u{1f468}', '\u{1f3ff}', '\u{200d}', '\u{1f469}', '\u{200d}', '\u{1f467}']);
    }

    #[test]
    fn append_without_zwj() {
        let toned = insert_tone(&EmojiSequence::from("🖖"), '\u{1f3fb}');
        assert_eq!(toned, EmojiSequence::from("🖖🏻"));
    }

    #[test]
    fn compose_and_decompose() {
        let table = table();
        let astronaut = compose_tone(&table, "woman_astronaut_tone5").unwrap();
        assert_eq!(astronaut, EmojiSequence::from("👩🏿‍🚀"));
        assert_eq!(decompose_tone(&table, &astronaut).unwrap(), vec!["woman_astronaut_tone5"]);

        let vulcan = compose_tone(&table, "spock_tone1").unwrap();
        assert_eq!(decompose_tone(&table, &vulcan).unwrap(), vec!["vulcan_tone1", "spock_tone1"]);
    }

    #[test]
    fn misses() {
        let table = table();
        // A tone marker alone has no base
        assert_eq!(compose_tone(&table, "tone1"), Err(ToneError::BaseNotFound(String::new())));
        assert_eq!(compose_tone(&table, ""), Err(ToneError::NoToneMarker));
        assert_eq!(compose_tone(&table, "vulcan_tone3"), Err(ToneError::NoToneMarker));

        assert_eq!(decompose_tone(&table, &EmojiSequence::from("")), Err(ToneError::NoToneMarker));
        assert_eq!(decompose_tone(&table, &EmojiSequence::from("🖖")), Err(ToneError::NoToneMarker));
        assert_eq!(decompose_tone(&table, &EmojiSequence::from("a🏻")), Err(ToneError::BaseNotFound(String::from("61"))));
        // The tone modifier has to be the second codepoint
        assert_eq!(decompose_tone(&table, &EmojiSequence::from("👩‍🚀🏻")), Err(ToneError::NoToneMarker));
    }
}
