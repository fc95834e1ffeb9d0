//! Flat, ordered INI configuration: parse, query, merge, and write named
//! sections of key/value pairs.
//!
//! ```
//! let mut config = flatini::parse(
//!     "[server]\n\
//!      host = localhost\n\
//!      port = 8080\n",
//! );
//!
//! assert_eq!(config.as_str("server", "host"), Some("localhost"));
//! assert_eq!(config.as_u16("server", "port"), Some(8080));
//!
//! config.set_bool("server", "tls", true);
//! let text = config.to_string();
//! assert!(flatini::parse(&text).content_eq(&config));
//! ```
//!
//! # The format
//!
//! A document is a flat set of named sections, each a flat ordered
//! sequence of string key/value pairs — deliberately *not* a structured
//! config format. No nesting, no arrays, no schemas.
//!
//! ```text
//! ; comment                     (';' or '#' at line start)
//! [SectionName]
//! key1 = value1
//! key2 = value 2 continues \
//!   across lines
//! key3 =                        (empty value)
//! ```
//!
//! Section names and keys are case-sensitive. Pairs before any `[name]`
//! header belong to the default section (`"Default"`), as do pairs
//! addressed with an empty section name through any API call. Values
//! wrapped in a matching pair of `'` or `"` quotes have the quotes
//! stripped. Lines the parser cannot classify are silently discarded —
//! a sloppy config file loads as much as it can.
//!
//! # Strings in, types out
//!
//! Everything is stored as a string. Typed reads interpret on demand and
//! report failure as `None`, never panicking:
//!
//! - [`as_bool`](SectionList::as_bool) reads only the first character, so
//!   `"yes"`, `"True"` and `"1"` are all true, `"no"`, `"False"` and
//!   `"0"` all false.
//! - The integer family ([`as_i8`](SectionList::as_i8) through
//!   [`as_u64`](SectionList::as_u64) and the machine-width pair) rejects
//!   overflow: `as_u8` on `"256"` is `None`, not a wrapped value.
//! - The float pair rejects NaN — a NaN is never a usable config value.
//! - [`as_str`](SectionList::as_str) succeeds for every existing key,
//!   empty values included.
//!
//! # Merging and layered lookup
//!
//! [`SectionList::merge`] overlays another store key-by-key: matching
//! keys take the other store's value, everything else is added. The
//! [`discover`] module builds the conventional config cascade on top of
//! that — an explicit, caller-ordered list of candidate locations folded
//! with load + merge, later files winning. There is no implicit argv or
//! environment scanning; the caller names every location.
//!
//! # Writing back
//!
//! The `Display` impl renders the store in section-insertion order;
//! [`SectionList::store`] writes it to a file and reports bytes written.
//! The round trip is lossy for comments and whitespace, lossless for
//! content: re-parsing the output always yields a
//! [`content_eq`](SectionList::content_eq) store.

pub mod discover;

mod error;
mod file;
mod keyval;
mod parse;
mod section;
mod store;

pub use discover::{SearchPath, candidate_files, load_layered, resolve_search_path};
pub use error::IniError;
pub use file::load;
pub use keyval::KeyVal;
pub use parse::{parse, strip_quotes};
pub use section::Section;
pub use store::{DEFAULT_SECTION, SectionList};
