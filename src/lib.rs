//! Converts string-keyed mappings into flat key, value, key, value sequences and back.

pub mod config;
pub mod convert;
pub mod types;

pub use crate::config::{Config, OddLength};
pub use crate::convert::{Converter, Error, to_sequence, into_sequence, to_mapping, into_mapping};
pub use crate::types::{FlatSeq, Mapping, Value, ValueKind};
