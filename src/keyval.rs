//! A single INI key/value pair and the typed conversions over its value.
//!
//! Every value is stored as a string; the `as_*` methods interpret it on
//! demand. The same conversion rules back the per-key accessors on
//! [`Section`](crate::Section) and [`SectionList`](crate::SectionList), so
//! a value reads identically no matter which level it is fetched through.

use std::fmt;

/// One `key = value` entry of an INI section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyVal {
    pub key: String,
    pub value: String,
}

impl KeyVal {
    /// Create a pair, trimming surrounding whitespace from both parts.
    pub fn new(key: &str, value: &str) -> Self {
        KeyVal {
            key: key.trim().to_string(),
            value: value.trim().to_string(),
        }
    }

    /// Interpret the value as a boolean.
    ///
    /// Only the first character is examined: `0`, `f`, `F`, `n`, `N` mean
    /// `false`; `1`, `t`, `T`, `y`, `Y`, `j`, `J`, `o`, `O` mean `true`
    /// (covering "yes", "ja", "oui" alongside "true"). So `"False"` and
    /// `"NO"` read as `Some(false)`, `"True"` and `"yes"` as `Some(true)`.
    /// An empty value reads as `Some(false)`; any other first character
    /// yields `None`.
    pub fn as_bool(&self) -> Option<bool> {
        parse_bool(&self.value)
    }

    /// Interpret the value as a 32bit float. `None` for unparsable text
    /// and for a parsed NaN, which is never a usable configuration value.
    pub fn as_f32(&self) -> Option<f32> {
        parse_f32(&self.value)
    }

    /// Interpret the value as a 64bit float. `None` for unparsable text
    /// and for a parsed NaN.
    pub fn as_f64(&self) -> Option<f64> {
        parse_f64(&self.value)
    }

    /// Interpret the value as a signed 8bit integer.
    pub fn as_i8(&self) -> Option<i8> {
        self.value.parse().ok()
    }

    /// Interpret the value as a signed 16bit integer.
    pub fn as_i16(&self) -> Option<i16> {
        self.value.parse().ok()
    }

    /// Interpret the value as a signed 32bit integer.
    pub fn as_i32(&self) -> Option<i32> {
        self.value.parse().ok()
    }

    /// Interpret the value as a signed 64bit integer.
    pub fn as_i64(&self) -> Option<i64> {
        self.value.parse().ok()
    }

    /// Interpret the value as a machine-width signed integer.
    pub fn as_isize(&self) -> Option<isize> {
        self.value.parse().ok()
    }

    /// Interpret the value as an unsigned 8bit integer.
    pub fn as_u8(&self) -> Option<u8> {
        self.value.parse().ok()
    }

    /// Interpret the value as an unsigned 16bit integer.
    pub fn as_u16(&self) -> Option<u16> {
        self.value.parse().ok()
    }

    /// Interpret the value as an unsigned 32bit integer.
    pub fn as_u32(&self) -> Option<u32> {
        self.value.parse().ok()
    }

    /// Interpret the value as an unsigned 64bit integer.
    pub fn as_u64(&self) -> Option<u64> {
        self.value.parse().ok()
    }

    /// Interpret the value as a machine-width unsigned integer.
    pub fn as_usize(&self) -> Option<usize> {
        self.value.parse().ok()
    }

    /// The value as a string slice. Always succeeds for an existing pair —
    /// an empty value is still a value.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Replace the value, trimming surrounding whitespace.
    pub fn update_value(&mut self, value: &str) {
        self.value = value.trim().to_string();
    }
}

impl fmt::Display for KeyVal {
    /// Renders as `key = value`, or `key =` when the value is empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{} =", self.key)
        } else {
            write!(f, "{} = {}", self.key, self.value)
        }
    }
}

/// First-character boolean rule shared by all accessor levels.
/// The empty string counts as the `false` sentinel.
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.chars().next() {
        None | Some('0' | 'f' | 'F' | 'n' | 'N') => Some(false),
        Some('1' | 't' | 'T' | 'y' | 'Y' | 'j' | 'J' | 'o' | 'O') => Some(true),
        Some(_) => None,
    }
}

/// Float parses that additionally reject NaN: a NaN compares unequal to
/// everything including itself, so it can never satisfy a config check.
pub(crate) fn parse_f32(value: &str) -> Option<f32> {
    value.parse::<f32>().ok().filter(|f| !f.is_nan())
}

pub(crate) fn parse_f64(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|f| !f.is_nan())
}
