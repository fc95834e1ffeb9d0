//! The file boundary: loading a store from a path and writing it back.
//!
//! The core parser and serializer only need a readable stream of lines and
//! a writable sink (see [`SectionList::read_from`] and the `Display`
//! impl); this module binds them to filesystem paths. Path *policy* —
//! which conventional locations to try, in what order — is the caller's
//! business, served by the [`discover`](crate::discover) module.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;

use crate::error::IniError;
use crate::store::SectionList;

impl SectionList {
    /// Read and parse the INI file at `path` into a fresh store.
    ///
    /// The path is remembered on the returned store (see
    /// [`file_name`](SectionList::file_name)). Malformed lines never fail;
    /// the only error is an I/O failure opening or reading the file,
    /// surfaced as-is.
    pub fn load(path: impl AsRef<Path>) -> Result<SectionList, IniError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IniError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut list = SectionList::new();
        list.set_file_name(path);
        let bytes = list
            .read_from(BufReader::new(file))
            .map_err(|source| IniError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(
            "loaded {} section(s) ({bytes} bytes) from {}",
            list.len(),
            path.display()
        );

        Ok(list)
    }

    /// Serialize the store and write it to `path`, returning the number
    /// of bytes written.
    ///
    /// A create or write failure is surfaced as-is, with zero bytes
    /// reported written.
    pub fn store(&self, path: impl AsRef<Path>) -> Result<usize, IniError> {
        let path = path.as_ref();
        let text = self.to_string();
        std::fs::write(path, &text).map_err(|source| IniError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("wrote {} bytes to {}", text.len(), path.display());

        Ok(text.len())
    }
}

/// Read and parse the INI file at `path`. Convenience alias for
/// [`SectionList::load`].
pub fn load(path: impl AsRef<Path>) -> Result<SectionList, IniError> {
    SectionList::load(path)
}
