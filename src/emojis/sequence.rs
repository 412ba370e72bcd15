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
//! Codepoint sequences of single (possibly composed) emojis.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::FromIterator;
use std::ops::Deref;
use std::str::FromStr;

use itertools::Itertools;
use regex::Regex;

/// Zero-width joiner (U+200D), glues several emojis into one glyph
pub const ZWJ: char = '\u{200d}';
/// Variation Selector-16 (U+FE0F), requests the emoji presentation
pub const VARIATION_SELECTOR: char = '\u{fe0f}';
/// The maximum number of VS-16 that [EmojiSequence::minimized] removes
pub const MAX_STRIPPED_SELECTORS: usize = 2;

/// The ordered codepoints of one rendered emoji.
///
/// As every element is a `char`, a sequence can always be turned back into a valid string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmojiSequence(Vec<char>);

impl EmojiSequence {
    pub fn new(codepoints: Vec<char>) -> Self {
        Self(codepoints)
    }

    pub fn codepoints(&self) -> &[char] {
        &self.0
    }

    /// Checks whether this sequence contains a zero-width joiner
    /// # Examples
    /// ```
    /// use discord_emoji::emojis::sequence::EmojiSequence;
    ///
    /// assert!(EmojiSequence::from("👨‍💻").contains_zwj());
    /// assert!(!EmojiSequence::from("👍").contains_zwj());
    /// ```
    pub fn contains_zwj(&self) -> bool {
        self.0.contains(&ZWJ)
    }

    /// The index of the first zero-width joiner (if there is one)
    pub fn first_zwj(&self) -> Option<usize> {
        self.0.iter().position(|codepoint| *codepoint == ZWJ)
    }

    /// Returns this sequence without its variation selectors, if it does not contain
    /// a zero-width joiner.
    ///
    /// At most [MAX_STRIPPED_SELECTORS] of them are removed, any further ones stay in place.
    /// ZWJ sequences are returned unchanged.
    /// # Examples
    /// ```
    /// use discord_emoji::emojis::sequence::EmojiSequence;
    ///
    /// let heart: EmojiSequence = "2764 fe0f".parse().unwrap();
    /// assert_eq!(heart.minimized(), "2764".parse::<EmojiSequence>().unwrap());
    ///
    /// let rainbow: EmojiSequence = "1f3f3 fe0f 200d 1f308".parse().unwrap();
    /// assert_eq!(rainbow.minimized(), rainbow);
    /// ```
    pub fn minimized(&self) -> Self {
        if self.contains_zwj() {
            return self.clone();
        }
        let mut removed = 0;
        self.0.iter()
            .copied()
            .filter(|codepoint| {
                if *codepoint == VARIATION_SELECTOR && removed < MAX_STRIPPED_SELECTORS {
                    removed += 1;
                    false
                } else {
                    true
                }
            })
            .collect()
    }

    /// Formats every codepoint as lowercase hexadecimal number
    /// # Examples
    /// ```
    /// use discord_emoji::emojis::sequence::EmojiSequence;
    ///
    /// let ok_hand = EmojiSequence::from("👌🏼");
    /// assert_eq!(ok_hand.hex_words(), vec!["1f44c", "1f3fc"]);
    /// ```
    pub fn hex_words(&self) -> Vec<String> {
        self.0.iter()
            .map(|codepoint| format!("{:x}", *codepoint as u32))
            .collect()
    }

    /// The codepoints in the `1F3F3-FE0F-200D-1F308`-notation, mostly used for log messages
    pub fn hex_notation(&self) -> String {
        self.0.iter()
            .map(|codepoint| format!("{:X}", *codepoint as u32))
            .join("-")
    }
}

impl From<&str> for EmojiSequence {
    fn from(emoji: &str) -> Self {
        emoji.chars().collect()
    }
}

impl From<Vec<char>> for EmojiSequence {
    fn from(codepoints: Vec<char>) -> Self {
        Self(codepoints)
    }
}

impl From<EmojiSequence> for Vec<char> {
    fn from(sequence: EmojiSequence) -> Self {
        sequence.0
    }
}

impl FromIterator<char> for EmojiSequence {
    fn from_iter<T: IntoIterator<Item=char>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for EmojiSequence {
    type Target = [char];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[char]> for EmojiSequence {
    fn as_ref(&self) -> &[char] {
        &self.0
    }
}

impl Display for EmojiSequence {
    /// Writes the emoji itself
    /// # Examples
    /// ```
    /// use discord_emoji::emojis::sequence::EmojiSequence;
    ///
    /// let thinking: EmojiSequence = "1f914".parse().unwrap();
    /// assert_eq!(thinking.to_string(), "🤔");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|codepoint| write!(f, "{}", codepoint))
    }
}

impl FromStr for EmojiSequence {
    type Err = SequenceError;

    /// Parses hexadecimal codepoints, delimited by spaces, dashes (`-`), underscores (`_`)
    /// or dots (`.`). A `U+` prefix is allowed for every codepoint.
    /// # Examples
    /// ```
    /// use discord_emoji::emojis::sequence::{EmojiSequence, SequenceError};
    ///
    /// let technologist: EmojiSequence = "1F468-200D-1F4BB".parse().unwrap();
    /// assert_eq!(technologist, EmojiSequence::from("👨‍💻"));
    ///
    /// assert_eq!("U+1F44D".parse::<EmojiSequence>().unwrap(), EmojiSequence::from("👍"));
    ///
    /// // Surrogates are not valid codepoints
    /// assert_eq!(
    ///     "d83d".parse::<EmojiSequence>(),
    ///     Err(SequenceError::InvalidCodepoint(String::from("d83d")))
    /// );
    /// ```
    fn from_str(raw_codepoints: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref DELIMITERS: Regex = Regex::new(r"[-_. ]+").unwrap();
            static ref HEX_WORD: Regex = Regex::new(r"^(?:[uU]\+)?([a-fA-F0-9]{1,6})$").unwrap();
        }
        let raw_codepoints = raw_codepoints.trim();
        if raw_codepoints.is_empty() {
            return Err(SequenceError::Empty);
        }

        DELIMITERS.split(raw_codepoints)
            .map(|word| HEX_WORD.captures(word)
                .and_then(|captures| u32::from_str_radix(&captures[1], 16).ok())
                .and_then(std::char::from_u32)
                .ok_or_else(|| SequenceError::InvalidCodepoint(word.to_owned())))
            .collect()
    }
}

/// An error that occurs while parsing an [EmojiSequence] from its hexadecimal notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// There was nothing to parse
    Empty,
    /// The given word is not a hexadecimal Unicode scalar value
    InvalidCodepoint(String),
}

impl Display for SequenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::Empty => write!(f, "Empty code sequence"),
            SequenceError::InvalidCodepoint(word) => write!(f, "Not a valid codepoint: {:?}", word),
        }
    }
}

impl std::error::Error for SequenceError {}
