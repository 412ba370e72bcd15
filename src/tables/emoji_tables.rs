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
//! Lookup tables between Discord emoji names and emoji sequences,
//! plus the skin tone markers that may be attached to them.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::io::Read;
use std::path::Path;

use bimap::BiHashMap;
use include_dir::{include_dir, Dir};

use crate::emojis::sequence::{EmojiSequence, SequenceError};
use crate::loadable::{Loadable, LoadableImpl, LoadingError};
use crate::tables::errors::EmojiTableError;
use crate::tables::prototype::EmojiTablePrototype;
use crate::tables::utils::extend_unique;

const DATA_DIR: Dir = include_dir!("data");

/// The file name of the table that is bundled with this crate
pub const BUNDLED_TABLE: &str = "discord_emoji.json";

lazy_static! {
    static ref DISCORD_TABLE: EmojiTable = load_bundled_table()
        .unwrap_or_else(|err| {
            error!("Could not load the bundled emoji table: {}", err);
            EmojiTable::new()
        });
}

/// The emoji table bundled with this crate. It is parsed on first access.
pub fn bundled_table() -> &'static EmojiTable {
    &DISCORD_TABLE
}

fn load_bundled_table() -> Result<EmojiTable, LoadingError> {
    let file = DATA_DIR.get_file(BUNDLED_TABLE)
        .ok_or(LoadingError::MissingAsset(BUNDLED_TABLE))?;
    let table = EmojiTable::from_reader(file.contents())?;
    debug!("Loaded {} bundled emojis and {} tone markers", table.len(), table.tone_count());
    Ok(table)
}

/// Maps Discord emoji names to emoji sequences and back.
///
/// One sequence may have several names (aliases); the first one is its primary name.
/// Tone markers are kept in a separate, bidirectional table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiTable {
    names: HashMap<String, EmojiSequence>,
    sequences: HashMap<EmojiSequence, Vec<String>>,
    tones: BiHashMap<String, char>,
    entries: Vec<(EmojiSequence, Vec<String>)>,
}

impl EmojiTable {
    /// Creates a new, empty emoji table
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an emoji with its names.
    ///
    /// The names can be found by the sequence as it is given and, if it has no zero-width joiner,
    /// also by its form without variation selectors.
    /// A name that already belongs to another emoji keeps its old mapping.
    /// # Examples
    /// ```
    /// use discord_emoji::tables::emoji_tables::EmojiTable;
    /// use discord_emoji::emojis::sequence::EmojiSequence;
    ///
    /// let mut table = EmojiTable::new();
    /// let heart: EmojiSequence = "2764 fe0f".parse().unwrap();
    /// table.insert(heart.clone(), vec!["heart"]).unwrap();
    ///
    /// assert_eq!(table.get_sequence("heart"), Some(&heart));
    /// assert_eq!(table.get_names(&heart).unwrap(), ["heart"]);
    /// // The minimal form is known as well
    /// assert_eq!(table.get_names(&EmojiSequence::from("❤")).unwrap(), ["heart"]);
    /// ```
    pub fn insert<I, S>(&mut self, sequence: EmojiSequence, names: I) -> Result<(), EmojiTableError>
        where I: IntoIterator<Item=S>,
              S: Into<String> {
        let names: Vec<String> = names.into_iter()
            .map(Into::into)
            .filter(|name| !name.trim().is_empty())
            .collect();
        if sequence.is_empty() {
            return Err(SequenceError::Empty.into());
        }
        if names.is_empty() {
            return Err(EmojiTableError::Unnamed(sequence.hex_notation()));
        }

        for name in &names {
            match self.names.entry(name.clone()) {
                Entry::Occupied(existing) => warn!(
                    "Duplicate emoji name {}: keeping [{}], ignoring [{}]",
                    name,
                    existing.get().hex_notation(),
                    sequence.hex_notation()
                ),
                Entry::Vacant(vacant) => {
                    vacant.insert(sequence.clone());
                }
            }
        }

        let minimized = sequence.minimized();
        if minimized != sequence {
            self.register_names(minimized, &names);
        }
        self.register_names(sequence.clone(), &names);
        self.entries.push((sequence, names));
        Ok(())
    }

    fn register_names(&mut self, key: EmojiSequence, names: &[String]) {
        let existing = self.sequences.entry(key)
            .or_insert_with(|| Vec::with_capacity(names.len()));
        extend_unique(existing, names);
    }

    /// Adds a skin tone marker that can be used as the last word of an emoji name
    /// # Examples
    /// ```
    /// use discord_emoji::tables::emoji_tables::EmojiTable;
    ///
    /// let mut table = EmojiTable::new();
    /// table.insert_tone("tone3", '\u{1f3fd}').unwrap();
    ///
    /// assert_eq!(table.tone_by_name("tone3"), Some('\u{1f3fd}'));
    /// assert_eq!(table.tone_by_codepoint('\u{1f3fd}'), Some("tone3"));
    /// // Neither the name nor the codepoint may be used twice
    /// assert!(table.insert_tone("tone3", '\u{1f3fe}').is_err());
    /// assert!(table.insert_tone("medium", '\u{1f3fd}').is_err());
    /// ```
    pub fn insert_tone<S: Into<String>>(&mut self, name: S, tone: char) -> Result<(), EmojiTableError> {
        self.tones.insert_no_overwrite(name.into(), tone)
            .map_err(|(name, _)| EmojiTableError::DuplicateTone(name))
    }

    /// Finds the emoji sequence for a name (without colons)
    pub fn get_sequence(&self, name: &str) -> Option<&EmojiSequence> {
        self.names.get(name)
    }

    /// Returns all names for a given sequence, the primary name first
    pub fn get_names(&self, sequence: &EmojiSequence) -> Option<&[String]> {
        self.sequences.get(sequence)
            .map(|names| names.as_slice())
    }

    pub fn tone_by_name(&self, name: &str) -> Option<char> {
        self.tones.get_by_left(name).copied()
    }

    pub fn tone_by_codepoint(&self, tone: char) -> Option<&str> {
        self.tones.get_by_right(&tone)
            .map(|name| name.as_str())
    }

    /// Iterates over all tone markers (in no particular order)
    pub fn tones(&self) -> impl Iterator<Item=(&str, char)> {
        self.tones.iter()
            .map(|(name, tone)| (name.as_str(), *tone))
    }

    /// The emojis in the order they were inserted, with the names they were inserted with
    pub fn entries(&self) -> &[(EmojiSequence, Vec<String>)] {
        &self.entries
    }

    /// Returns the number of emojis in the table (not counting aliases)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tone_count(&self) -> usize {
        self.tones.len()
    }
}

impl TryFrom<EmojiTablePrototype> for EmojiTable {
    type Error = EmojiTableError;

    fn try_from(prototype: EmojiTablePrototype) -> Result<Self, Self::Error> {
        let mut table = EmojiTable::new();
        for tone in prototype.tones {
            let sequence: EmojiSequence = tone.sequence.parse()?;
            match sequence.codepoints() {
                [codepoint] => table.insert_tone(tone.name, *codepoint)?,
                _ => return Err(EmojiTableError::InvalidTone {
                    name: tone.name,
                    sequence: tone.sequence,
                })
            }
        }
        for entry in prototype.emojis {
            let sequence: EmojiSequence = entry.sequence.parse()?;
            table.insert(sequence, entry.names)?;
        }
        Ok(table)
    }
}

impl Loadable for EmojiTable {
    fn from_file(file: &Path) -> Result<Self, LoadingError> {
        let prototype = EmojiTablePrototype::from_file_impl(file)?;
        Ok(Self::try_from(prototype)?)
    }

    fn from_reader<R>(reader: R) -> Result<Self, LoadingError> where R: Read {
        let prototype = EmojiTablePrototype::from_reader_impl(reader)?;
        Ok(Self::try_from(prototype)?)
    }
}
