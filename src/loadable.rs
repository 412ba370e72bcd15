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

use std::fmt::{Debug, Display, Formatter};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::tables::errors::EmojiTableError;

/// Anything that can be read from a file (e.g. emoji tables or lookup options)
pub trait Loadable: Sized {
    fn from_file(file: &Path) -> Result<Self, LoadingError> {
        let reader = File::open(file)?;
        let reader = BufReader::new(reader);
        Self::from_reader(reader)
    }

    fn from_reader<R>(reader: R) -> Result<Self, LoadingError>
        where R: Read;
}

/// Deserialization for everything serde can handle.
///
/// Files are read with the deserializer matching their extension (`json`, `yaml` or `yml`),
/// readers are always read as JSON.
pub trait LoadableImpl: Sized {
    fn from_file_impl(file: &Path) -> Result<Self, LoadingError>;

    fn from_reader_impl<R>(reader: R) -> Result<Self, LoadingError>
        where R: Read;
}

impl<T> LoadableImpl for T
    where T: DeserializeOwned + Sized {
    fn from_file_impl(file: &Path) -> Result<Self, LoadingError> {
        let deserializer = DeserializerFunction::for_file(file);
        let deserializer = deserializer.unwrap_or_else(|| {
            warn!("No appropriate Deserializer found for {:?}. Assuming {}",
                file,
                DEFAULT_EXTENSION
            );
            DeserializerFunction::default()
        });
        debug!("Reading {:?} as {}", file, deserializer.extension);
        let reader = File::open(file)?;
        let reader = BufReader::new(reader);
        deserializer.deserialize(reader).map_err(|err| LoadingError::Serde(Box::new(err)))
    }

    fn from_reader_impl<R>(reader: R) -> Result<Self, LoadingError>
        where R: Read {
        let mut deserializer = serde_json::Deserializer::from_reader(reader);
        Self::deserialize(&mut deserializer).map_err(|err| LoadingError::Serde(Box::new(err)))
    }
}

struct DeserializerFunction<R, T> {
    extension: &'static str,
    function: fn(R) -> Result<T, SimplifiedError>
}

/// Keeps only the messages of the different serde errors
struct SimplifiedError {
    debug: String,
    display: String
}

impl Debug for SimplifiedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.debug, f)
    }
}

impl Display for SimplifiedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.display, f)
    }
}

impl std::error::Error for SimplifiedError {}

impl<E> From<E> for SimplifiedError
    where E: serde::de::Error {
    fn from(err: E) -> Self {
        let debug = format!("{:?}", err);
        let display = format!("{}", err);
        Self {
            debug,
            display
        }
    }
}

pub const DEFAULT_EXTENSION: &str = "json";


macro_rules! new_deserializer {
    ($deserialize_function: path, $new_deserialize_function: ident) => {
        fn $new_deserialize_function(arg: R) -> Result<T, SimplifiedError> {
            $deserialize_function(arg).map_err(SimplifiedError::from)
        }
    };
}


impl<R, T> DeserializerFunction<R, T>
    where R: Read, T: DeserializeOwned {
    pub fn deserialize(&self, reader: R) -> Result<T, SimplifiedError> {
        (self.function)(reader)
    }

    pub fn new(extension: &'static str, function: fn(R) -> Result<T, SimplifiedError>) -> Self {
        Self {
            extension,
            function
        }
    }

    pub fn for_file(file: &Path) -> Option<Self> {
        if let Some(extension) = file.extension() {
            Self::for_extension(extension.to_string_lossy().as_ref())
        } else {
            None
        }
    }

    // Unfortunately we need to use a macro here, as Rust doesn't support Decorators on regular
    // functions and closures do not seem to be an option
    new_deserializer!(serde_json::from_reader, from_reader_json);
    new_deserializer!(serde_yaml::from_reader, from_reader_yaml);

    pub fn for_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_lowercase();
        match extension.as_str() {
            "json" => Some(Self::new("json", Self::from_reader_json)),
            "yaml" | "yml" => Some(Self::new("yaml", Self::from_reader_yaml)),
            _ => None
        }
    }
}

impl<R, T> Default for DeserializerFunction<R, T>
    where R: Read, T: DeserializeOwned {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSION, Self::from_reader_json)
    }
}


/// An error that occurs while loading something from a file or reader
#[derive(Debug)]
pub enum LoadingError {
    Io(std::io::Error),
    Serde(Box<dyn std::error::Error + Send + Sync>),
    /// The data could be read, but does not form a valid emoji table
    Table(EmojiTableError),
    /// A data file that should have been bundled with this crate is missing
    MissingAsset(&'static str),
}

impl Display for LoadingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadingError::Io(err) => Display::fmt(err, f),
            LoadingError::Serde(err) => Display::fmt(err, f),
            LoadingError::Table(err) => Display::fmt(err, f),
            LoadingError::MissingAsset(file) => write!(f, "Missing bundled file: {}", file),
        }
    }
}

impl std::error::Error for LoadingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadingError::Io(err) => Some(err),
            LoadingError::Table(err) => Some(err),
            _ => None
        }
    }
}

impl From<std::io::Error> for LoadingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<EmojiTableError> for LoadingError {
    fn from(err: EmojiTableError) -> Self {
        Self::Table(err)
    }
}
