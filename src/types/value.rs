//! Dynamically typed values that can be stored in mappings and flat sequences.

use std::convert::TryFrom;

pub use rust_decimal::Decimal;

use serde::Deserialize;
use serde::Serialize;
use strum::{EnumDiscriminants, AsRefStr};
use thiserror::Error;

use crate::types::{FlatSeq, Mapping};

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    #[error("cannot convert value of kind {} into target type", .0.as_ref())]
    CannotConvert(ValueKind),
}

// Re-exporting to allow downstream users to ensure usage of the correct types.
pub type Integer = i64;
pub type Boolean = bool;
pub type Sequence = Vec<Value>;

/// Represents the types of data that can appear as a mapping value or as an
/// element of a flat sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, EnumDiscriminants)]
#[serde(untagged)]
#[strum_discriminants(name(ValueKind), derive(Hash, AsRefStr))]
pub enum Value {
    Null,
    String(String),
    Integer(i64),
    Boolean(bool),
    Decimal(Decimal),
    Sequence(Sequence),
    Mapping(Mapping),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        self.into()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl<'k> TryFrom<&'k Value> for &'k str {
    type Error = Error;

    fn try_from(value: &'k Value) -> Result<Self, Self::Error> {
        match value {
            &Value::String(ref s) => Ok(s),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl From<Integer> for Value {
    fn from(value: Integer) -> Self {
        Self::Integer(value)
    }
}

impl TryFrom<Value> for Integer {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(i) => Ok(i),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl<'k> TryFrom<&'k Value> for Integer {
    type Error = Error;

    fn try_from(value: &'k Value) -> Result<Self, Self::Error> {
        match value {
            &Value::Integer(i) => Ok(i),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl From<Boolean> for Value {
    fn from(value: Boolean) -> Self {
        Self::Boolean(value)
    }
}

impl TryFrom<Value> for Boolean {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(b),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl<'k> TryFrom<&'k Value> for Boolean {
    type Error = Error;

    fn try_from(value: &'k Value) -> Result<Self, Self::Error> {
        match value {
            &Value::Boolean(b) => Ok(b),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl TryFrom<Value> for Decimal {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Decimal(d) => Ok(d),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl<'k> TryFrom<&'k Value> for Decimal {
    type Error = Error;

    fn try_from(value: &'k Value) -> Result<Self, Self::Error> {
        match value {
            &Value::Decimal(d) => Ok(d),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl From<Sequence> for Value {
    fn from(value: Sequence) -> Self {
        Self::Sequence(value)
    }
}

impl TryFrom<Value> for Sequence {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Sequence(s) => Ok(s),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl From<FlatSeq> for Value {
    fn from(value: FlatSeq) -> Self {
        Self::Sequence(value.into_inner())
    }
}

impl TryFrom<Value> for FlatSeq {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Sequence(s) => Ok(Self::from(s)),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl TryFrom<Value> for Mapping {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Mapping(m) => Ok(m),
            _ => Err(Error::CannotConvert(value.into())),
        }
    }
}
