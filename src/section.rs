//! One named INI section: an insertion-ordered list of unique-keyed pairs.

use std::fmt;

use crate::keyval::{KeyVal, parse_bool, parse_f32, parse_f64};

/// An ordered collection of [`KeyVal`] entries with unique keys.
///
/// Entries keep their insertion order for iteration and serialization
/// until [`sort_keys`](Section::sort_keys) is called. Lookup is a linear
/// scan — sections are small and the order is the data.
#[derive(Debug, Clone, Default)]
pub struct Section {
    data: Vec<KeyVal>,
}

impl Section {
    /// Create an empty section.
    pub fn new() -> Self {
        Section::default()
    }

    /// Insert a pair, or update the value if the key already exists.
    ///
    /// Key and value are whitespace-trimmed. Returns `false` only when the
    /// trimmed key is empty; an empty *value* is fine.
    pub fn insert(&mut self, key: &str, value: &str) -> bool {
        let pair = KeyVal::new(key, value);
        if pair.key.is_empty() {
            return false;
        }
        match self.position(&pair.key) {
            Some(idx) => self.data[idx].value = pair.value,
            None => self.data.push(pair),
        }
        true
    }

    /// Update-or-insert. Same contract as [`insert`](Section::insert);
    /// kept as a separate name so call sites read as intended.
    pub fn update_key(&mut self, key: &str, value: &str) -> bool {
        self.insert(key, value)
    }

    /// Store a boolean as the canonical `"true"` / `"false"`.
    pub fn set_bool(&mut self, key: &str, value: bool) -> bool {
        self.insert(key, if value { "true" } else { "false" })
    }

    /// Store a signed integer in base-10.
    pub fn set_int(&mut self, key: &str, value: i64) -> bool {
        self.insert(key, &value.to_string())
    }

    /// Store an unsigned integer in base-10.
    pub fn set_uint(&mut self, key: &str, value: u64) -> bool {
        self.insert(key, &value.to_string())
    }

    /// Store a float in fixed-point decimal (Rust's shortest round-trip
    /// rendering, which never uses scientific notation).
    pub fn set_float(&mut self, key: &str, value: f64) -> bool {
        self.insert(key, &value.to_string())
    }

    /// Store a string value.
    pub fn set_str(&mut self, key: &str, value: &str) -> bool {
        self.insert(key, value)
    }

    /// Remove `key` from the section.
    ///
    /// Idempotent: a key that was never there satisfies the removal wish,
    /// so the result is `true` either way.
    pub fn remove_key(&mut self, key: &str) -> bool {
        if let Some(idx) = self.position(key) {
            self.data.remove(idx);
        }
        true
    }

    /// Whether `key` exists in this section.
    pub fn has_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// The stored string value of `key`, if present.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.position(key).map(|idx| self.data[idx].value.as_str())
    }

    /// The full pair for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&KeyVal> {
        self.position(key).map(|idx| &self.data[idx])
    }

    /// Number of pairs in the section.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate the pairs in their current order.
    pub fn iter(&self) -> impl Iterator<Item = &KeyVal> {
        self.data.iter()
    }

    /// Remove all pairs.
    pub fn clear(&mut self) -> &mut Self {
        self.data.clear();
        self
    }

    /// Sort the pairs lexicographically by key.
    pub fn sort_keys(&mut self) -> &mut Self {
        self.data.sort_by(|a, b| a.key.cmp(&b.key));
        self
    }

    /// Fold every pair of `other` into this section: matching keys take
    /// `other`'s value, new keys are appended.
    pub fn merge(&mut self, other: &Section) -> &mut Self {
        for kv in other.iter() {
            self.insert(&kv.key, &kv.value);
        }
        self
    }

    /// Deep equality over the key/value *set*, ignoring entry order.
    /// Order matters for serialization but not for content comparison.
    pub fn content_eq(&self, other: &Section) -> bool {
        self.data.len() == other.data.len()
            && self.data.iter().all(|kv| other.value(&kv.key) == Some(kv.value.as_str()))
    }

    // Typed accessors; `None` when the key is missing or the value does
    // not parse. See `KeyVal` for the per-type rules.

    pub fn as_bool(&self, key: &str) -> Option<bool> {
        self.value(key).and_then(parse_bool)
    }

    pub fn as_f32(&self, key: &str) -> Option<f32> {
        self.value(key).and_then(parse_f32)
    }

    pub fn as_f64(&self, key: &str) -> Option<f64> {
        self.value(key).and_then(parse_f64)
    }

    pub fn as_i8(&self, key: &str) -> Option<i8> {
        self.value(key).and_then(|v| v.parse().ok())
    }

    pub fn as_i16(&self, key: &str) -> Option<i16> {
        self.value(key).and_then(|v| v.parse().ok())
    }

    pub fn as_i32(&self, key: &str) -> Option<i32> {
        self.value(key).and_then(|v| v.parse().ok())
    }

    pub fn as_i64(&self, key: &str) -> Option<i64> {
        self.value(key).and_then(|v| v.parse().ok())
    }

    pub fn as_isize(&self, key: &str) -> Option<isize> {
        self.value(key).and_then(|v| v.parse().ok())
    }

    pub fn as_u8(&self, key: &str) -> Option<u8> {
        self.value(key).and_then(|v| v.parse().ok())
    }

    pub fn as_u16(&self, key: &str) -> Option<u16> {
        self.value(key).and_then(|v| v.parse().ok())
    }

    pub fn as_u32(&self, key: &str) -> Option<u32> {
        self.value(key).and_then(|v| v.parse().ok())
    }

    pub fn as_u64(&self, key: &str) -> Option<u64> {
        self.value(key).and_then(|v| v.parse().ok())
    }

    pub fn as_usize(&self, key: &str) -> Option<usize> {
        self.value(key).and_then(|v| v.parse().ok())
    }

    /// The value of `key` as a string slice. `Some` for any existing key,
    /// including one whose value is empty.
    pub fn as_str(&self, key: &str) -> Option<&str> {
        self.value(key)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.data.iter().position(|kv| kv.key == key)
    }
}

impl fmt::Display for Section {
    /// One `key = value` line per pair, each terminated by a linefeed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kv in &self.data {
            writeln!(f, "{kv}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = &'a KeyVal;
    type IntoIter = std::slice::Iter<'a, KeyVal>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
