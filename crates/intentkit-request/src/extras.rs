//! Ordered payload map
//!
//! [`Extras`] keeps entries in first-insertion order so iteration is
//! deterministic. Writing an existing key replaces its value (and kind) in
//! place without moving it.

use crate::error::ExtraError;
use crate::extra::{ExtraKind, ExtraValue, FromExtra};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Insertion-ordered map of typed payload entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extras(IndexMap<String, ExtraValue>);

impl Extras {
    /// Create an empty map
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an entry, returning the previous value
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ExtraValue>,
    ) -> Option<ExtraValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove an entry, keeping the order of the rest
    pub fn remove(&mut self, key: &str) -> Option<ExtraValue> {
        self.0.shift_remove(key)
    }

    /// Copy every entry of `other` into this map, last write wins
    pub fn merge(&mut self, other: Extras) {
        self.0.extend(other.0);
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the map holds no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if an entry exists for `key`
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Raw tagged value for `key`
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ExtraValue> {
        self.0.get(key)
    }

    /// Kind stored under `key`
    #[inline]
    #[must_use]
    pub fn kind_of(&self, key: &str) -> Option<ExtraKind> {
        self.0.get(key).map(ExtraValue::kind)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtraValue)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Typed read
    ///
    /// Absent keys yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtraError::KindMismatch`] when the entry was stored under a
    /// kind other than `T::KIND`.
    pub fn get_as<T: FromExtra>(&self, key: &str) -> Result<Option<T>, ExtraError> {
        let Some(value) = self.0.get(key) else {
            return Ok(None);
        };
        T::from_extra(value)
            .map(Some)
            .ok_or_else(|| ExtraError::KindMismatch {
                key: key.to_owned(),
                expected: T::KIND,
                found: value.kind(),
            })
    }

    /// Typed read falling back to `default` when absent or of another kind
    #[must_use]
    pub fn get_or<T: FromExtra>(&self, key: &str, default: T) -> T {
        self.0.get(key).and_then(T::from_extra).unwrap_or(default)
    }

    /// Borrow a string entry
    ///
    /// Only entries stored as [`ExtraKind::String`] match; text sequences are
    /// read through [`Extras::get_as`] or [`ExtraValue::as_text`].
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(ExtraValue::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Decode a serializable entry into `T`
    ///
    /// # Errors
    ///
    /// Returns [`ExtraError::KindMismatch`] if the entry is not serializable
    /// and [`ExtraError::Decode`] if its content does not fit `T`.
    pub fn get_serializable<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, ExtraError> {
        let Some(value) = self.get_as::<serde_json::Value>(key)? else {
            return Ok(None);
        };
        serde_json::from_value(value)
            .map(Some)
            .map_err(|source| ExtraError::Decode {
                key: key.to_owned(),
                source,
            })
    }
}

impl<'a> IntoIterator for &'a Extras {
    type Item = (&'a String, &'a ExtraValue);
    type IntoIter = indexmap::map::Iter<'a, String, ExtraValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Extras
where
    K: Into<String>,
    V: Into<ExtraValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
