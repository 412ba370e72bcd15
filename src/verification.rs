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
//! Consistency checks for emoji tables.

use std::fmt::{Display, Formatter};

use rayon::prelude::*;

use crate::emojis::sequence::EmojiSequence;
use crate::lookup::EmojiLookup;
use crate::tones::insert_tone;

/// A lookup that does not round-trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The name does not lead back to the emoji it was listed for
    NameMismatch {
        name: String,
        expected: EmojiSequence,
        found: Option<EmojiSequence>,
    },
    /// The emoji is not known under one of its names
    MissingName {
        name: String,
        emoji: EmojiSequence,
    },
    /// The tone variant of an emoji is not recognized as such
    ToneMismatch {
        name: String,
        found: Option<String>,
    },
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::NameMismatch { name, expected, found } => write!(
                f,
                "{} should be [{}], but is {}",
                name,
                expected.hex_notation(),
                found.as_ref()
                    .map(|found| format!("[{}]", found.hex_notation()))
                    .unwrap_or_else(|| String::from("unknown"))
            ),
            Violation::MissingName { name, emoji } =>
                write!(f, "[{}] is not named {}", emoji.hex_notation(), name),
            Violation::ToneMismatch { name, found } => write!(
                f,
                "{} is recognized as {}",
                name,
                found.as_deref().unwrap_or("nothing")
            ),
        }
    }
}

impl<'a> EmojiLookup<'a> {
    /// Checks every entry of the table:
    /// - all names lead to the emoji they are listed for,
    /// - the emoji is known under each of its names,
    /// - every tone variant is recognized with the same tone.
    ///
    /// Tone variants are only checked if tone support is enabled and if the tone modifier
    /// ends up as the second codepoint of the emoji; other emojis cannot carry a skin tone.
    /// The entries are checked in parallel, the violations are reported in table order.
    pub fn verify(&self) -> Vec<Violation> {
        self.table().entries()
            .par_iter()
            .flat_map(|(emoji, names)| self.verify_entry(emoji, names))
            .collect()
    }

    fn verify_entry(&self, emoji: &EmojiSequence, names: &[String]) -> Vec<Violation> {
        let mut violations = Vec::new();

        for name in names {
            let found = self.name_to_sequence(name);
            if found.as_ref() != Some(emoji) {
                violations.push(Violation::NameMismatch {
                    name: name.clone(),
                    expected: emoji.clone(),
                    found,
                });
            }
            let known_names = self.sequence_to_all_names(emoji).unwrap_or_default();
            if !known_names.contains(name) {
                violations.push(Violation::MissingName {
                    name: name.clone(),
                    emoji: emoji.clone(),
                });
            }
        }

        if self.options().enable_tone_support {
            if let Some(primary_name) = names.first() {
                violations.extend(self.verify_tones(emoji, primary_name));
            }
        }
        violations
    }

    fn verify_tones(&self, emoji: &EmojiSequence, primary_name: &str) -> Vec<Violation> {
        self.table().tones()
            .filter_map(|(tone_name, tone)| {
                let toned = insert_tone(emoji, tone);
                let normalized = if self.options().strip_variation_selectors {
                    toned.minimized()
                } else {
                    toned
                };
                if normalized.get(1) != Some(&tone) {
                    trace!("[{}] cannot carry a skin tone", emoji.hex_notation());
                    return None;
                }

                let name = format!("{}_{}", primary_name, tone_name);
                let found = self.name_to_sequence(&name)
                    .and_then(|sequence| self.sequence_to_all_names(&sequence))
                    .and_then(|names| names.into_iter().next());
                let expected_suffix = format!("_{}", tone_name);
                match found {
                    Some(found) if found.ends_with(&expected_suffix) => None,
                    found => Some(Violation::ToneMismatch { name, found }),
                }
            })
            .collect()
    }
}
