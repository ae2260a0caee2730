use std::iter::FusedIterator;
use std::iter::{Extend, FromIterator};

use indexmap::IndexMap as InnerMap;
use indexmap::map::{
    IntoIter as InnerIntoIter,
    Iter as InnerIter,
    Keys as InnerKeys,
    Values as InnerValues,
};
use serde::{Serialize, Deserialize};

use crate::types::Value;

/// Represents an association of unique string keys to values.
///
/// Entries iterate in the order their keys were first inserted, but equality
/// only considers key/value content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping(InnerMap<String, Value>);

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(InnerMap::with_capacity(capacity))
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    /// Inserts a key/value pair, returning the value previously stored under
    /// the key, if any. A replaced key keeps its original position.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }

    pub fn keys(&self) -> Keys<'_> {
        Keys(self.0.keys())
    }

    pub fn values(&self) -> Values<'_> {
        Values(self.0.values())
    }
}

impl Extend<(String, Value)> for Mapping {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl FromIterator<(String, Value)> for Mapping {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.0.into_iter())
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a>(InnerIter<'a, String, Value>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a String, &'a Value);

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

pub struct Keys<'a>(InnerKeys<'a, String, Value>);

impl<'a> Iterator for Keys<'a> {
    type Item = &'a String;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> ExactSizeIterator for Keys<'a> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a> FusedIterator for Keys<'a> {}

pub struct Values<'a>(InnerValues<'a, String, Value>);

impl<'a> Iterator for Values<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> ExactSizeIterator for Values<'a> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a> FusedIterator for Values<'a> {}

pub struct IntoIter(InnerIntoIter<String, Value>);

impl Iterator for IntoIter {
    type Item = (String, Value);

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

#[cfg(test)]
mod tests {
    use super::*;

    use str_macro::str;

    #[test]
    fn insert() {
        let mut mapping = Mapping::new();
        assert!(mapping.is_empty());

        assert_eq!(mapping.insert(str!("a"), Value::from(1)), None);
        assert_eq!(mapping.insert(str!("b"), Value::from(2)), None);
        assert_eq!(mapping.insert(str!("a"), Value::from(3)), Some(Value::from(1)));

        assert_eq!(mapping.len(), 2);
        assert!(mapping.contains_key("a"));
        assert!(!mapping.contains_key("c"));
        assert_eq!(mapping.get("a"), Some(&Value::from(3)));

        // Overwriting a key keeps its original slot.
        let keys = mapping.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(keys, vec!["a", "b"]);

        if let Some(val) = mapping.get_mut("b") {
            *val = Value::Null;
        }
        assert_eq!(mapping.values().collect::<Vec<_>>(), vec![&Value::from(3), &Value::Null]);

        mapping.clear();
        assert!(mapping.is_empty());
    }

    #[test]
    fn equality_ignores_order() {
        let forward = vec![(str!("x"), Value::from(1)), (str!("y"), Value::from("z"))]
            .into_iter()
            .collect::<Mapping>();
        let backward = vec![(str!("y"), Value::from("z")), (str!("x"), Value::from(1))]
            .into_iter()
            .collect::<Mapping>();

        assert_eq!(forward, backward);

        let mut different = backward.clone();
        different.extend(vec![(str!("x"), Value::from(2))]);
        assert_ne!(forward, different);
    }

    #[test]
    fn iter() {
        let mapping = vec![
            (str!("one"), Value::from(1)),
            (str!("two"), Value::from(2)),
            (str!("three"), Value::from(3)),
        ].into_iter().collect::<Mapping>();

        let iter = mapping.iter();
        assert_eq!(iter.len(), 3);

        let produced = (&mapping).into_iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect::<Vec<_>>();
        assert_eq!(
            produced,
            vec![("one", &Value::from(1)), ("two", &Value::from(2)), ("three", &Value::from(3))],
        );

        let produced = mapping.into_iter().rev().map(|(k, _)| k).collect::<Vec<_>>();
        assert_eq!(produced, vec![str!("three"), str!("two"), str!("one")]);
    }
}
