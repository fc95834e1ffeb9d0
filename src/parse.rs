//! Text-to-structure parsing: line normalization, classification, and
//! quote stripping.
//!
//! # Logical lines
//!
//! The reader consumes raw lines and produces "logical lines" for the
//! classifier. Each raw line is whitespace-trimmed; blank lines and
//! comments (first character `;` or `#`) are skipped. A non-blank,
//! non-comment line ending in `\` is a continuation: its content (minus
//! the backslash, with exactly one trailing space ensured) is buffered and
//! the next raw line is consumed before anything is emitted. A blank or
//! comment line arriving while a continuation is pending flushes the
//! buffer as the logical line instead of being skipped.
//!
//! # Classification
//!
//! Two recognizers are applied to each logical line: a section header
//! (`[name]`, which changes the current section without storing data) and
//! a key/value pair (`key = value`, the key being everything before the
//! first `=`). Lines matching neither are discarded silently — a broken
//! line is not an error.
//!
//! # Byte accounting
//!
//! [`SectionList::read_from`] reports the total bytes consumed (each raw
//! line's length plus one line-terminator byte) for diagnostic use.

use std::io::BufRead;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::store::SectionList;

// match: [section]
static SECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[\s*([^\]]*?)\s*\]$").expect("section header pattern"));

// match: key = val
static KEY_VAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^=]+?)\s*=\s*(.*)$").expect("key/value pattern"));

// match: quoted ' " string " '
static QUOTED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*(['"])\s*(.*?)\s*(['"])\s*$"#).expect("quoted value pattern"));

/// Strip one matching pair of surrounding quote characters.
///
/// The input is whitespace-trimmed first. If the result starts and ends
/// with the *same* quote character (`'` or `"`), the content between them
/// is returned, trimmed again — quoting is a way to carry leading or
/// trailing payload spaces past the line trimmer, and the inner trim here
/// removes only the padding between quote and payload. Mismatched quotes
/// (`" text '`) and embedded quotes are left untouched.
pub fn strip_quotes(value: &str) -> String {
    let trimmed = value.trim();
    if let Some(caps) = QUOTED_RE.captures(trimmed)
        && caps[1] == caps[3]
    {
        return caps[2].to_string();
    }
    trimmed.to_string()
}

impl SectionList {
    /// Parse INI text from a line-oriented reader into this store.
    ///
    /// Malformed lines are discarded; the only failure is an I/O error
    /// from the underlying stream. Returns the number of bytes consumed,
    /// counting one terminator byte per raw line.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> std::io::Result<usize> {
        let mut bytes = 0usize;
        let mut pending = String::new();
        let mut section = self.default_name().to_string();

        for raw in reader.lines() {
            let raw = raw?;
            bytes += raw.len() + 1;

            let mut line = raw.trim().to_string();
            if line.is_empty() {
                if pending.is_empty() {
                    continue;
                }
                line = std::mem::take(&mut pending);
            }
            if line.starts_with(';') || line.starts_with('#') {
                if pending.is_empty() {
                    continue;
                }
                line = std::mem::take(&mut pending);
            }
            if let Some(content) = line.strip_suffix('\\') {
                pending.push_str(content);
                if !content.ends_with(' ') {
                    pending.push(' ');
                }
                continue;
            }
            if !pending.is_empty() {
                line = std::mem::take(&mut pending) + &line;
            }

            if let Some(caps) = SECTION_RE.captures(&line) {
                section = caps[1].trim().to_string();
            } else if let Some(caps) = KEY_VAL_RE.captures(&line) {
                let key = caps[1].trim();
                let value = strip_quotes(&caps[2]);
                self.add_section_key(&section, key, &value);
            }
            // anything else: a broken line, dropped without comment
        }
        // a continuation still pending at end of input is dropped

        Ok(bytes)
    }

    /// Parse INI text from an in-memory string into this store.
    pub fn read_str(&mut self, text: &str) -> usize {
        self.read_from(text.as_bytes())
            .expect("reading from a string cannot fail")
    }
}

/// Parse a complete INI document into a fresh store.
pub fn parse(text: &str) -> SectionList {
    let mut list = SectionList::new();
    list.read_str(text);
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DEFAULT_SECTION;

    #[test]
    fn strip_quotes_matched_pairs() {
        assert_eq!(strip_quotes("'hello world'"), "hello world");
        assert_eq!(strip_quotes("\"hello\""), "hello");
        assert_eq!(strip_quotes("  'padded'  "), "padded");
    }

    #[test]
    fn strip_quotes_trims_inside() {
        assert_eq!(strip_quotes("'  inner  '"), "inner");
    }

    #[test]
    fn strip_quotes_mismatched_untouched() {
        assert_eq!(strip_quotes("\" text '"), "\" text '");
        assert_eq!(strip_quotes("'incomplete"), "'incomplete");
    }

    #[test]
    fn strip_quotes_embedded_untouched() {
        assert_eq!(strip_quotes("it's fine"), "it's fine");
        assert_eq!(strip_quotes("'"), "'");
    }

    #[test]
    fn strip_quotes_plain_text_is_trimmed() {
        assert_eq!(strip_quotes("  plain  "), "plain");
    }

    #[test]
    fn sections_and_pairs() {
        let list = parse("[alpha]\na = 1\nb = 2\n[beta]\nc = 3\n");
        assert_eq!(list.section_names(), ["alpha", "beta"]);
        assert_eq!(list.as_str("alpha", "a"), Some("1"));
        assert_eq!(list.as_str("beta", "c"), Some("3"));
    }

    #[test]
    fn pairs_before_any_header_land_in_default_section() {
        let list = parse("orphan = value\n[named]\nk = v\n");
        assert_eq!(list.as_str(DEFAULT_SECTION, "orphan"), Some("value"));
        assert_eq!(list.section_names(), [DEFAULT_SECTION, "named"]);
    }

    #[test]
    fn comments_and_blanks_are_skipped() {
        let list = parse("; a comment\n# another\n\n[s]\nk = v\n; trailing\n");
        assert_eq!(list.len(), 1);
        assert_eq!(list.as_str("s", "k"), Some("v"));
    }

    #[test]
    fn section_header_whitespace_is_trimmed() {
        let list = parse("[  spaced name  ]\nk = v\n");
        assert_eq!(list.section_names(), ["spaced name"]);
    }

    #[test]
    fn empty_header_names_the_default_section() {
        let list = parse("[ ]\nk = v\n");
        assert_eq!(list.section_names(), [DEFAULT_SECTION]);
    }

    #[test]
    fn key_is_longest_prefix_before_first_equals() {
        let list = parse("[s]\nkey = a=b=c\n");
        assert_eq!(list.as_str("s", "key"), Some("a=b=c"));
    }

    #[test]
    fn empty_value_is_kept() {
        let list = parse("[s]\nblank =\n");
        assert_eq!(list.as_str("s", "blank"), Some(""));
    }

    #[test]
    fn quoted_values_are_stripped() {
        let list = parse("[s]\nmsg = 'hello world'\nraw = \" text '\n");
        assert_eq!(list.as_str("s", "msg"), Some("hello world"));
        assert_eq!(list.as_str("s", "raw"), Some("\" text '"));
    }

    #[test]
    fn broken_lines_are_discarded_silently() {
        let list = parse("[s]\nthis line has no equals sign\nk = v\n[not a ]header[\n");
        assert_eq!(list.len(), 1);
        assert_eq!(list.section("s").unwrap().len(), 1);
    }

    #[test]
    fn continuation_joins_with_single_space() {
        let list = parse("[s]\nkey = part1 \\\npart2\n");
        assert_eq!(list.as_str("s", "key"), Some("part1 part2"));
    }

    #[test]
    fn continuation_inserts_space_when_missing() {
        let list = parse("[s]\nkey = part1\\\npart2\n");
        assert_eq!(list.as_str("s", "key"), Some("part1 part2"));
    }

    #[test]
    fn continuation_spans_multiple_lines() {
        let list = parse("[s]\nkey = a \\\nb \\\nc\n");
        assert_eq!(list.as_str("s", "key"), Some("a b c"));
    }

    #[test]
    fn blank_line_flushes_pending_continuation() {
        let list = parse("[s]\nkey = dangling \\\n\nnext = line\n");
        assert_eq!(list.as_str("s", "key"), Some("dangling"));
        assert_eq!(list.as_str("s", "next"), Some("line"));
    }

    #[test]
    fn comment_line_flushes_pending_continuation() {
        let list = parse("[s]\nkey = dangling \\\n; comment\nnext = line\n");
        assert_eq!(list.as_str("s", "key"), Some("dangling"));
        assert_eq!(list.as_str("s", "next"), Some("line"));
    }

    #[test]
    fn pending_continuation_at_eof_is_dropped() {
        let list = parse("[s]\nkey = dangling \\\n");
        assert!(!list.has_section_key("s", "key"));
    }

    #[test]
    fn byte_count_includes_terminators() {
        let mut list = SectionList::new();
        let text = "[s]\nk = v\n";
        let bytes = list.read_from(text.as_bytes()).unwrap();
        assert_eq!(bytes, text.len());
    }

    #[test]
    fn byte_count_for_unterminated_last_line() {
        let mut list = SectionList::new();
        // lines() yields "k = v" without a terminator; one is still counted
        let bytes = list.read_from("[s]\nk = v".as_bytes()).unwrap();
        assert_eq!(bytes, "[s]\nk = v".len() + 1);
    }

    #[test]
    fn round_trip_preserves_content() {
        let original = parse(
            "; config\n[general]\nhost = localhost\nport = 8080\nblank =\n\n[limits]\nretries = 3\nmsg = 'quoted value'\n",
        );
        let reparsed = parse(&original.to_string());
        assert!(original.content_eq(&reparsed));
        assert_eq!(reparsed.section_names(), original.section_names());
    }
}
