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
//! The on-disk format of emoji tables.
//!
//! ```json
//! {
//!   "tones": [ { "name": "tone1", "sequence": "1f3fb" } ],
//!   "emojis": [ { "sequence": "1f44d", "names": ["thumbsup", "+1", "thumbup"] } ]
//! }
//! ```
//! Sequences are written in hexadecimal (see [EmojiSequence](crate::emojis::sequence::EmojiSequence)'s
//! `FromStr` implementation). The first name of an emoji is its primary name.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct EmojiTablePrototype {
    #[serde(default)]
    pub tones: Vec<TonePrototype>,
    pub emojis: Vec<EmojiEntryPrototype>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TonePrototype {
    pub name: String,
    #[serde(alias = "codepoint")]
    pub sequence: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmojiEntryPrototype {
    #[serde(alias = "codepoints")]
    pub sequence: String,
    #[serde(alias = "aliases")]
    pub names: Vec<String>,
}
