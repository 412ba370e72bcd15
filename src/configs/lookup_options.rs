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

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::loadable::{Loadable, LoadableImpl, LoadingError};

/// Controls how an [EmojiLookup](crate::lookup::EmojiLookup) treats tone markers and
/// variation selectors.
///
/// Both switches are on by default. Turning them off gives plain table lookups.
/// Missing fields in a config file fall back to their defaults:
/// ```
/// use discord_emoji::configs::lookup_options::LookupOptions;
/// use discord_emoji::loadable::Loadable;
///
/// let options = LookupOptions::from_reader(r#"{"enable_tone_support": false}"#.as_bytes()).unwrap();
/// assert!(!options.enable_tone_support);
/// assert!(options.strip_variation_selectors);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LookupOptions {
    /// Compose names like `thumbsup_tone2` and decompose emojis with a skin tone modifier
    #[serde(alias = "enableToneSupport", alias = "tones")]
    pub enable_tone_support: bool,
    /// Remove VS-16 from input emojis without a zero-width joiner before looking them up,
    /// and leave it out of their image URLs.
    ///
    /// Every [EmojiTable](crate::tables::emoji_tables::EmojiTable) knows its own entries with
    /// and without VS-16 regardless of this switch (`❤` and `❤️` are both `heart`).
    /// It only matters for inputs with selectors the table does not list, like `👍️`.
    #[serde(alias = "stripVariationSelectors")]
    pub strip_variation_selectors: bool,
}

impl LookupOptions {
    /// Direct table lookups only
    pub fn plain() -> Self {
        Self {
            enable_tone_support: false,
            strip_variation_selectors: false,
        }
    }
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            enable_tone_support: true,
            strip_variation_selectors: true,
        }
    }
}

impl Loadable for LookupOptions {
    fn from_file(file: &Path) -> Result<Self, LoadingError> {
        Self::from_file_impl(file)
    }

    fn from_reader<R>(reader: R) -> Result<Self, LoadingError> where R: Read {
        Self::from_reader_impl(reader)
    }
}
