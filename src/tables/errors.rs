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

use std::fmt::{Display, Formatter};

use crate::emojis::sequence::SequenceError;

/// A representation of errors encountered while building an [EmojiTable](crate::tables::emoji_tables::EmojiTable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmojiTableError {
    /// The codepoints of an entry could not be parsed
    MalformedSequence(SequenceError),
    /// An entry without any (non-empty) names
    Unnamed(String),
    /// A tone marker has to be exactly one codepoint
    InvalidTone {
        name: String,
        sequence: String,
    },
    /// Either the name or the codepoint of this tone marker is already taken
    DuplicateTone(String),
}

impl Display for EmojiTableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EmojiTableError::MalformedSequence(err) => write!(f, "Malformed sequence: {}", err),
            EmojiTableError::Unnamed(sequence) => write!(f, "Emoji [{}] has no names", sequence),
            EmojiTableError::InvalidTone { name, sequence } =>
                write!(f, "Tone marker {} is not a single codepoint: [{}]", name, sequence),
            EmojiTableError::DuplicateTone(name) => write!(f, "Duplicate tone marker: {}", name),
        }
    }
}

impl std::error::Error for EmojiTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmojiTableError::MalformedSequence(err) => Some(err),
            _ => None
        }
    }
}

impl From<SequenceError> for EmojiTableError {
    fn from(err: SequenceError) -> Self {
        EmojiTableError::MalformedSequence(err)
    }
}
