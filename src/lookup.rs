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
//! Conversions between Discord emoji names, emojis and Twemoji image URLs.

use crate::configs::lookup_options::LookupOptions;
use crate::emojis::sequence::{EmojiSequence, VARIATION_SELECTOR};
use crate::tables::emoji_tables::{bundled_table, EmojiTable};
use crate::tables::utils::{put_colons, strip_colons};
use crate::tones::{compose_tone, decompose_tone};

/// Where the 72x72 PNGs of Twemoji live
pub const TWEMOJI_BASE_URL: &str = "https://raw.githubusercontent.com/twitter/twemoji/master/assets/72x72/";
pub const TWEMOJI_EXTENSION: &str = "png";

/// Performs lookups in one [EmojiTable].
///
/// A miss is always `None`, no input leads to an error or a panic.
#[derive(Debug, Clone, Copy)]
pub struct EmojiLookup<'a> {
    table: &'a EmojiTable,
    options: LookupOptions,
}

impl EmojiLookup<'static> {
    /// Lookups in the bundled table with the default options
    pub fn bundled() -> Self {
        Self::new(bundled_table())
    }
}

impl Default for EmojiLookup<'static> {
    fn default() -> Self {
        Self::bundled()
    }
}

impl<'a> EmojiLookup<'a> {
    pub fn new(table: &'a EmojiTable) -> Self {
        Self::with_options(table, LookupOptions::default())
    }

    pub fn with_options(table: &'a EmojiTable, options: LookupOptions) -> Self {
        Self {
            table,
            options,
        }
    }

    pub fn table(&self) -> &'a EmojiTable {
        self.table
    }

    pub fn options(&self) -> LookupOptions {
        self.options
    }

    /// Finds the emoji for a name. Surrounding colons are ignored.
    /// # Examples
    /// ```
    /// use discord_emoji::lookup::EmojiLookup;
    ///
    /// let lookup = EmojiLookup::bundled();
    /// assert_eq!(lookup.name_to_unicode(":thumbsup:").unwrap(), "👍");
    /// assert_eq!(lookup.name_to_unicode("+1").unwrap(), "👍");
    /// assert_eq!(lookup.name_to_unicode("thumbsup_tone5").unwrap(), "👍🏿");
    /// assert_eq!(lookup.name_to_unicode("thumbsup_tone6"), None);
    /// ```
    pub fn name_to_unicode(&self, name: &str) -> Option<String> {
        self.name_to_sequence(name)
            .map(|sequence| sequence.to_string())
    }

    /// Like [EmojiLookup::name_to_unicode], but returns the codepoints
    pub fn name_to_sequence(&self, name: &str) -> Option<EmojiSequence> {
        let name = strip_colons(name);
        if let Some(sequence) = self.table.get_sequence(name) {
            return Some(sequence.clone());
        }
        if !self.options.enable_tone_support {
            trace!("No emoji named {:?}", name);
            return None;
        }
        compose_tone(self.table, name)
            .map_err(|err| trace!("No emoji named {:?}: {}", name, err))
            .ok()
    }

    /// Finds the primary name of an emoji
    /// # Examples
    /// ```
    /// use discord_emoji::lookup::EmojiLookup;
    ///
    /// let lookup = EmojiLookup::bundled();
    /// assert_eq!(lookup.unicode_to_name("👍", false).unwrap(), "thumbsup");
    /// assert_eq!(lookup.unicode_to_name("👍", true).unwrap(), ":thumbsup:");
    /// assert_eq!(lookup.unicode_to_name("x", false), None);
    /// ```
    pub fn unicode_to_name(&self, emoji: &str, colons: bool) -> Option<String> {
        self.unicode_to_all_names(emoji, colons)?
            .into_iter()
            .next()
    }

    /// Finds all names of an emoji, starting with its primary name
    /// # Examples
    /// ```
    /// use discord_emoji::lookup::EmojiLookup;
    ///
    /// let lookup = EmojiLookup::bundled();
    /// assert_eq!(lookup.unicode_to_all_names("🖖🏽", false).unwrap(), vec![
    ///     "vulcan_tone3",
    ///     "raised_hand_with_part_between_middle_and_ring_fingers_tone3"
    /// ]);
    /// ```
    pub fn unicode_to_all_names(&self, emoji: &str, colons: bool) -> Option<Vec<String>> {
        let names = self.sequence_to_all_names(&EmojiSequence::from(emoji))?;
        if colons {
            Some(names.iter()
                .map(|name| put_colons(name))
                .collect())
        } else {
            Some(names)
        }
    }

    /// Like [EmojiLookup::unicode_to_all_names], but takes the codepoints and never adds colons
    pub fn sequence_to_all_names(&self, emoji: &EmojiSequence) -> Option<Vec<String>> {
        let normalized = if self.options.strip_variation_selectors {
            emoji.minimized()
        } else {
            emoji.clone()
        };

        if let Some(names) = self.table.get_names(&normalized) {
            return Some(names.to_vec());
        }
        if !self.options.enable_tone_support {
            trace!("Unknown emoji [{}]", emoji.hex_notation());
            return None;
        }
        decompose_tone(self.table, &normalized)
            .map_err(|err| trace!("Unknown emoji [{}]: {}", emoji.hex_notation(), err))
            .ok()
    }

    /// Returns the Twemoji image URL for a known emoji
    /// # Examples
    /// ```
    /// use discord_emoji::lookup::EmojiLookup;
    ///
    /// let lookup = EmojiLookup::bundled();
    /// assert_eq!(
    ///     lookup.unicode_to_image("👍🏼").unwrap(),
    ///     "https://raw.githubusercontent.com/twitter/twemoji/master/assets/72x72/1f44d-1f3fc.png"
    /// );
    /// assert_eq!(lookup.unicode_to_image("x"), None);
    /// ```
    pub fn unicode_to_image(&self, emoji: &str) -> Option<String> {
        let sequence = EmojiSequence::from(emoji);
        self.sequence_to_all_names(&sequence)?;
        Some(self.image_url(&sequence))
    }

    /// Returns the Twemoji image URL for an emoji name
    /// # Examples
    /// ```
    /// use discord_emoji::lookup::EmojiLookup;
    ///
    /// let lookup = EmojiLookup::bundled();
    /// assert_eq!(
    ///     lookup.name_to_image(":rainbow_flag:").unwrap(),
    ///     "https://raw.githubusercontent.com/twitter/twemoji/master/assets/72x72/1f3f3-fe0f-200d-1f308.png"
    /// );
    /// assert_eq!(
    ///     lookup.name_to_image("heart").unwrap(),
    ///     "https://raw.githubusercontent.com/twitter/twemoji/master/assets/72x72/2764.png"
    /// );
    /// ```
    pub fn name_to_image(&self, name: &str) -> Option<String> {
        let emoji = self.name_to_unicode(name)?;
        self.unicode_to_image(&emoji)
    }

    /// Builds the image URL without checking whether the emoji is known.
    ///
    /// Twemoji leaves out VS-16 in file names unless the emoji is a ZWJ sequence.
    pub fn image_url(&self, emoji: &EmojiSequence) -> String {
        let keep_selectors = !self.options.strip_variation_selectors || emoji.contains_zwj();
        let hex_words = if keep_selectors {
            emoji.hex_words()
        } else {
            emoji.iter()
                .filter(|codepoint| **codepoint != VARIATION_SELECTOR)
                .copied()
                .collect::<EmojiSequence>()
                .hex_words()
        };
        let file_stem = hex_words.join("-");
        format!("{}{}.{}", TWEMOJI_BASE_URL, file_stem, TWEMOJI_EXTENSION)
    }
}
