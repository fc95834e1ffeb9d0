//! The section store: named sections held in first-insertion order.
//!
//! # Two structures, one truth
//!
//! A [`SectionList`] pairs a name→[`Section`] map with `sec_order`, an
//! ordered list of section names recording first-insertion order. The map
//! answers lookups; `sec_order` — never map iteration order — governs
//! serialization. The two are kept in bijection: every name in `sec_order`
//! exists in the map and vice versa, with no duplicates. Divergence would
//! be a bug in this module, not a caller-visible condition, so it is
//! checked with `debug_assert!` rather than reported.
//!
//! # The default section
//!
//! Key/value lines that appear before any `[name]` header belong to the
//! default section, and the empty string as a section name is rewritten to
//! the configured default name (normally `"Default"`) at every entry
//! point. Callers never observe an empty section name in the store.
//!
//! # Mutation contracts
//!
//! Inserts and updates share one path: the section is created lazily, an
//! existing key is overwritten in place, and the only failure is an empty
//! key. Removals are idempotent — deleting what is already absent is a
//! successful no-op. Typed reads mirror [`Section`]'s accessors by
//! delegating to the named section.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::section::Section;

/// Name used for key/value pairs that precede any section header, and the
/// alias target for the empty section name.
pub const DEFAULT_SECTION: &str = "Default";

/// An ordered collection of named INI sections.
#[derive(Debug, Clone)]
pub struct SectionList {
    default_name: String,
    file_name: Option<PathBuf>,
    sec_order: Vec<String>,
    sections: HashMap<String, Section>,
}

impl Default for SectionList {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionList {
    /// Create an empty store using [`DEFAULT_SECTION`] as the default
    /// section name.
    pub fn new() -> Self {
        Self::with_default_name(DEFAULT_SECTION)
    }

    /// Create an empty store with a custom default section name.
    pub fn with_default_name(name: &str) -> Self {
        SectionList {
            default_name: name.to_string(),
            file_name: None,
            sec_order: Vec::new(),
            sections: HashMap::new(),
        }
    }

    /// The configured default section name.
    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    /// The file path this store was loaded from, if any.
    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    /// Remember a file path for this store.
    pub fn set_file_name(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.file_name = Some(path.into());
        self
    }

    /// Insert `key = value` into `section`, creating the section if absent
    /// and overwriting the key if present.
    ///
    /// Returns `false` only when the trimmed key is empty. The section is
    /// still created in that case, matching lazy-creation on first touch.
    pub fn add_section_key(&mut self, section: &str, key: &str, value: &str) -> bool {
        let name = self.alias(section).to_string();
        self.sections.entry(name.clone()).or_insert_with(|| {
            self.sec_order.push(name.clone());
            Section::new()
        });
        debug_assert_eq!(
            self.sec_order.len(),
            self.sections.len(),
            "section map and sec_order diverged"
        );
        match self.sections.get_mut(&name) {
            Some(sect) => sect.insert(key, value),
            None => false,
        }
    }

    /// The section named `section`, if it exists. Absence is not an error.
    pub fn section(&self, section: &str) -> Option<&Section> {
        self.sections.get(self.alias(section))
    }

    /// Mutable access to the section named `section`.
    pub fn section_mut(&mut self, section: &str) -> Option<&mut Section> {
        let name = self.alias(section).to_string();
        self.sections.get_mut(&name)
    }

    /// Whether the store contains `section`.
    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(self.alias(section))
    }

    /// Whether `section` exists and contains `key`. An empty key is never
    /// contained.
    pub fn has_section_key(&self, section: &str, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }
        self.section(section).is_some_and(|s| s.has_key(key))
    }

    /// Remove `section` with both its map entry and its `sec_order` slot.
    ///
    /// Idempotent: removing a section that does not exist is a successful
    /// no-op. A name present in the map but missing from `sec_order` would
    /// be an internal consistency fault, not a normal "not found".
    pub fn remove_section(&mut self, section: &str) -> bool {
        let name = self.alias(section).to_string();
        if self.sections.remove(&name).is_none() {
            return true;
        }
        match self.sec_order.iter().position(|n| *n == name) {
            Some(idx) => {
                self.sec_order.remove(idx);
                true
            }
            None => {
                debug_assert!(false, "section {name:?} was mapped but not ordered");
                false
            }
        }
    }

    /// Remove `key` from `section`. Missing section or missing key is a
    /// successful no-op.
    pub fn remove_section_key(&mut self, section: &str, key: &str) -> bool {
        if key.is_empty() {
            return true;
        }
        match self.section_mut(section) {
            Some(sect) => sect.remove_key(key),
            None => true,
        }
    }

    /// Store a string value; update-or-create. `false` only for an empty key.
    pub fn set_str(&mut self, section: &str, key: &str, value: &str) -> bool {
        self.add_section_key(section, key, value)
    }

    /// Store a boolean as the canonical `"true"` / `"false"`.
    pub fn set_bool(&mut self, section: &str, key: &str, value: bool) -> bool {
        self.add_section_key(section, key, if value { "true" } else { "false" })
    }

    /// Store a signed integer in base-10.
    pub fn set_int(&mut self, section: &str, key: &str, value: i64) -> bool {
        self.add_section_key(section, key, &value.to_string())
    }

    /// Store an unsigned integer in base-10.
    pub fn set_uint(&mut self, section: &str, key: &str, value: u64) -> bool {
        self.add_section_key(section, key, &value.to_string())
    }

    /// Store a float in fixed-point decimal, never scientific notation.
    pub fn set_float(&mut self, section: &str, key: &str, value: f64) -> bool {
        self.add_section_key(section, key, &value.to_string())
    }

    /// The section names in first-insertion order, as a copy — mutating
    /// the returned list cannot corrupt the store's ordering.
    pub fn section_names(&self) -> Vec<String> {
        self.sec_order.clone()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate `(name, section)` in `sec_order` order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sec_order
            .iter()
            .filter_map(|name| self.sections.get(name).map(|s| (name.as_str(), s)))
    }

    /// Fold every key/value pair of `other` into this store, section by
    /// section in `other`'s order: matching keys take `other`'s value,
    /// everything else is added. Merging an empty store is a no-op.
    pub fn merge(&mut self, other: &SectionList) -> &mut Self {
        for (name, sect) in other.iter() {
            for kv in sect {
                self.add_section_key(name, &kv.key, &kv.value);
            }
        }
        self
    }

    /// Deep equality over the section-name set and each section's
    /// key/value set. Order-independent: two stores that serialize
    /// differently can still be equal in content.
    pub fn content_eq(&self, other: &SectionList) -> bool {
        self.sections.len() == other.sections.len()
            && self.sections.iter().all(|(name, sect)| {
                other.sections.get(name).is_some_and(|o| sect.content_eq(o))
            })
    }

    /// Sort every section's pairs by key. `sec_order` is unaffected.
    pub fn sort_keys(&mut self) -> &mut Self {
        for sect in self.sections.values_mut() {
            sect.sort_keys();
        }
        self
    }

    /// Drop all sections and the order list. The default section name and
    /// the remembered file path survive.
    pub fn clear(&mut self) -> &mut Self {
        self.sec_order.clear();
        self.sections.clear();
        self
    }

    // Typed reads, delegating to the named section. `None` when the
    // section or key is missing or the value does not parse.

    pub fn as_bool(&self, section: &str, key: &str) -> Option<bool> {
        self.section(section).and_then(|s| s.as_bool(key))
    }

    pub fn as_f32(&self, section: &str, key: &str) -> Option<f32> {
        self.section(section).and_then(|s| s.as_f32(key))
    }

    pub fn as_f64(&self, section: &str, key: &str) -> Option<f64> {
        self.section(section).and_then(|s| s.as_f64(key))
    }

    pub fn as_i8(&self, section: &str, key: &str) -> Option<i8> {
        self.section(section).and_then(|s| s.as_i8(key))
    }

    pub fn as_i16(&self, section: &str, key: &str) -> Option<i16> {
        self.section(section).and_then(|s| s.as_i16(key))
    }

    pub fn as_i32(&self, section: &str, key: &str) -> Option<i32> {
        self.section(section).and_then(|s| s.as_i32(key))
    }

    pub fn as_i64(&self, section: &str, key: &str) -> Option<i64> {
        self.section(section).and_then(|s| s.as_i64(key))
    }

    pub fn as_isize(&self, section: &str, key: &str) -> Option<isize> {
        self.section(section).and_then(|s| s.as_isize(key))
    }

    pub fn as_u8(&self, section: &str, key: &str) -> Option<u8> {
        self.section(section).and_then(|s| s.as_u8(key))
    }

    pub fn as_u16(&self, section: &str, key: &str) -> Option<u16> {
        self.section(section).and_then(|s| s.as_u16(key))
    }

    pub fn as_u32(&self, section: &str, key: &str) -> Option<u32> {
        self.section(section).and_then(|s| s.as_u32(key))
    }

    pub fn as_u64(&self, section: &str, key: &str) -> Option<u64> {
        self.section(section).and_then(|s| s.as_u64(key))
    }

    pub fn as_usize(&self, section: &str, key: &str) -> Option<usize> {
        self.section(section).and_then(|s| s.as_usize(key))
    }

    /// `Some` for any existing key, including one with an empty value.
    pub fn as_str(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.as_str(key))
    }

    fn alias<'a>(&'a self, section: &'a str) -> &'a str {
        if section.is_empty() {
            &self.default_name
        } else {
            section
        }
    }
}

impl fmt::Display for SectionList {
    /// Render the store as INI text: a blank line, the `[name]` header,
    /// then the section's pairs — in `sec_order` order throughout.
    ///
    /// Lossy with respect to comments and original whitespace; lossless
    /// with respect to section/key/value content, so the output re-parses
    /// to a [`content_eq`](SectionList::content_eq) store.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, sect) in self.iter() {
            let shown = if name.is_empty() { &self.default_name } else { name };
            write!(f, "\n[{shown}]\n{sect}")?;
        }
        Ok(())
    }
}
