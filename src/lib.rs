/*
 * Copyright 2019 Constantin A. <emoji.builder@c1710.de>
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
//! Conversions between Discord emoji names (like `:thumbsup:`), Unicode emojis and
//! Twemoji image URLs, including skin tone variants (like `:thumbsup_tone2:`).
//!
//! The free functions in this crate use the bundled emoji table with the default
//! [LookupOptions](configs::lookup_options::LookupOptions).
//! For other tables or options, use an [EmojiLookup](lookup::EmojiLookup).
//! ```
//! assert_eq!(discord_emoji::name_to_unicode(":thumbsup:").unwrap(), "👍");
//! assert_eq!(discord_emoji::unicode_to_name("👍🏽", true).unwrap(), ":thumbsup_tone3:");
//! ```

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// Emoji codepoint sequences
pub mod emojis;
/// Tables that map emoji names to their sequences and tone markers
pub mod tables;
/// Adding and removing skin tones
pub mod tones;
/// The lookup functions themselves
pub mod lookup;
pub mod configs;
pub mod loadable;
/// Round-trip checks for whole tables
pub mod verification;

use crate::lookup::EmojiLookup;

/// Finds the emoji for a Discord emoji name. Colons around the name are ignored.
pub fn name_to_unicode(name: &str) -> Option<String> {
    EmojiLookup::bundled().name_to_unicode(name)
}

/// Finds the primary Discord name of an emoji, optionally wrapped in colons
pub fn unicode_to_name(emoji: &str, put_colons: bool) -> Option<String> {
    EmojiLookup::bundled().unicode_to_name(emoji, put_colons)
}

/// Finds all Discord names of an emoji, the primary name first
pub fn unicode_to_all_names(emoji: &str, put_colons: bool) -> Option<Vec<String>> {
    EmojiLookup::bundled().unicode_to_all_names(emoji, put_colons)
}

/// Returns the Twemoji image URL of a known emoji
pub fn unicode_to_image(emoji: &str) -> Option<String> {
    EmojiLookup::bundled().unicode_to_image(emoji)
}

/// Returns the Twemoji image URL for a Discord emoji name
pub fn name_to_image(name: &str) -> Option<String> {
    EmojiLookup::bundled().name_to_image(name)
}

#[cfg(test)]
mod tests;
