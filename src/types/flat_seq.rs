use std::iter::FusedIterator;
use std::vec::IntoIter as InnerIntoIter;
use std::slice::{ChunksExact, Iter as InnerIter};
use std::iter::{Extend, FromIterator};

use serde::{Serialize, Deserialize};

use crate::types::{Sequence, Value};

/// Represents a flattened mapping: an ordered list of values that alternates
/// key, value, key, value, and so on.
///
/// Nothing about the contents is enforced on construction; the key slots and
/// the evenness of the length are only checked when converting back into a
/// [`Mapping`](crate::types::Mapping).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatSeq(Sequence);

impl FlatSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Sequence::with_capacity(capacity))
    }

    pub fn push(&mut self, value: Value) {
        self.0.push(value)
    }

    /// Appends a key followed by its value.
    pub fn push_pair(&mut self, key: String, value: Value) {
        self.0.push(Value::String(key));
        self.0.push(value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn into_inner(self) -> Sequence {
        self.0
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }

    /// Iterates over adjacent (key slot, value slot) pairs.
    /// A dangling trailing element is not yielded.
    pub fn pairs(&self) -> Pairs<'_> {
        Pairs(self.0.chunks_exact(2))
    }
}

impl From<Sequence> for FlatSeq {
    fn from(values: Sequence) -> Self {
        Self(values)
    }
}

impl Extend<Value> for FlatSeq {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl FromIterator<Value> for FlatSeq {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FlatSeq {
    type Item = Value;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.0.into_iter())
    }
}

pub struct Iter<'a>(InnerIter<'a, Value>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a> FusedIterator for Iter<'a> {}

pub struct Pairs<'a>(ChunksExact<'a, Value>);

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a Value, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|chunk| (&chunk[0], &chunk[1]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> ExactSizeIterator for Pairs<'a> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a> FusedIterator for Pairs<'a> {}

pub struct IntoIter(InnerIntoIter<Value>);

impl Iterator for IntoIter {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl FusedIterator for IntoIter {}
