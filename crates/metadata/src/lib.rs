//! English naming metadata extraction from font files.
//!
//! Opens a font file, scans its 'name' table and picks out the English
//! family, subfamily, version and PostScript name entries, converting
//! them to UTF-8. Two entry points with different error contracts:
//!
//! - [`FontHandle::open`] surfaces a typed [`Error`] for callers that
//!   need to know why a file failed to load.
//! - [`read_metadata`] never fails: anything that goes wrong, from an
//!   unreadable file to a broken name record, just leaves the affected
//!   fields empty. Useful when scanning large font directories where a
//!   few files are malformed.
//!
//! # Example
//!
//! ```no_run
//! use fontprobe_metadata::read_metadata;
//!
//! let metadata = read_metadata("fonts/Sans-Regular.ttf");
//! if let Some(family) = metadata.family {
//!     println!("{family}");
//! }
//! ```

use std::path::Path;

use log::debug;

mod error;
mod handle;
mod name;

pub use error::{Error, Result};
pub use handle::FontHandle;
pub use name::FontMetadata;

/// Reads naming metadata from the font file at `path`.
///
/// Best effort: open failures and unreadable records degrade to empty
/// fields rather than errors. Use [`FontHandle::open`] when the open
/// failure itself matters.
pub fn read_metadata(path: impl AsRef<Path>) -> FontMetadata {
    match FontHandle::open(path) {
        Ok(handle) => handle.metadata(),
        Err(err) => {
            debug!("{err}");
            FontMetadata::default()
        }
    }
}
