//! Conversion between mappings and their flattened key/value sequence form.

use std::convert::TryFrom;

use thiserror::Error;

use crate::config::{Config, OddLength};
use crate::types::{FlatSeq, Mapping, Value, ValueError, ValueKind};

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("expected a string key at index {index}, found value of kind {}", .kind.as_ref())]
    TypeMismatch { index: usize, kind: ValueKind },
    #[error("flat sequence has odd length {0}, trailing key has no value")]
    MalformedInput(usize),
}

/// Flattens a mapping into a key/value sequence, cloning its contents.
pub fn to_sequence(mapping: &Mapping) -> FlatSeq {
    Converter::default().to_sequence(mapping)
}

/// Flattens a mapping into a key/value sequence, consuming it.
pub fn into_sequence(mapping: Mapping) -> FlatSeq {
    Converter::default().into_sequence(mapping)
}

/// Rebuilds a mapping from a key/value sequence, cloning its contents.
/// Odd-length input is rejected.
pub fn to_mapping(seq: &FlatSeq) -> Result<Mapping, Error> {
    Converter::default().to_mapping(seq)
}

/// Rebuilds a mapping from a key/value sequence, consuming it.
/// Odd-length input is rejected.
pub fn into_mapping(seq: FlatSeq) -> Result<Mapping, Error> {
    Converter::default().into_mapping(seq)
}

/// Converts between mappings and flat sequences according to a [`Config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    config: Config,
}

impl Converter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn to_sequence(&self, mapping: &Mapping) -> FlatSeq {
        let mut seq = FlatSeq::with_capacity(mapping.len() * 2);

        for (key, value) in mapping {
            seq.push_pair(key.clone(), value.clone());
        }

        seq
    }

    pub fn into_sequence(&self, mapping: Mapping) -> FlatSeq {
        let mut seq = FlatSeq::with_capacity(mapping.len() * 2);

        for (key, value) in mapping {
            seq.push_pair(key, value);
        }

        seq
    }

    pub fn to_mapping(&self, seq: &FlatSeq) -> Result<Mapping, Error> {
        self.collect_pairs(seq.len(), seq.iter().cloned())
    }

    pub fn into_mapping(&self, seq: FlatSeq) -> Result<Mapping, Error> {
        self.collect_pairs(seq.len(), seq.into_iter())
    }

    fn collect_pairs<I>(&self, len: usize, values: I) -> Result<Mapping, Error>
    where
        I: Iterator<Item = Value>,
    {
        if len % 2 != 0 && self.config.odd_length == OddLength::Reject {
            return Err(Error::MalformedInput(len));
        }

        let mut mapping = Mapping::with_capacity(len / 2);
        let mut values = values.enumerate();

        while let Some((index, key)) = values.next() {
            let key = String::try_from(key).map_err(|err| match err {
                ValueError::CannotConvert(kind) => Error::TypeMismatch { index, kind },
            })?;

            // Only reachable for a dangling key under `OddLength::Truncate`.
            let (_, value) = match values.next() {
                Some(pair) => pair,
                None => break,
            };

            // Later occurrences of a key overwrite earlier ones.
            mapping.insert(key, value);
        }

        Ok(mapping)
    }
}

impl From<Mapping> for FlatSeq {
    fn from(mapping: Mapping) -> Self {
        into_sequence(mapping)
    }
}

impl TryFrom<FlatSeq> for Mapping {
    type Error = Error;

    fn try_from(seq: FlatSeq) -> Result<Self, Self::Error> {
        into_mapping(seq)
    }
}
