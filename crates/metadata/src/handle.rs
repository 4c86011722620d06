//! Font resource lifecycle.

use std::{fs, path::Path};

use read_fonts::{FontRef, ReadError};

use crate::{
    error::{Error, Result},
    name::{self, FontMetadata},
};

/// Face loaded from collections; only the first face is ever used.
const FACE_INDEX: u32 = 0;

/// An open font resource.
///
/// The handle owns the raw file data. Faces handed out by
/// [`face`](FontHandle::face) borrow from it, so a face can never outlive
/// the handle. Dropping the handle releases the data;
/// [`close`](FontHandle::close) does the same explicitly and may be
/// called any number of times.
#[derive(Debug)]
pub struct FontHandle {
    data: Option<Vec<u8>>,
}

impl FontHandle {
    /// Opens the font file at `path` and loads its first face.
    ///
    /// The whole file is read into memory and parsed far enough to verify
    /// that a face exists at index 0. Failures are classified into
    /// [`Error`] variants, each retaining the raw engine error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| Error::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        FontRef::from_index(&data, FACE_INDEX).map_err(|source| load_error(path, source))?;
        Ok(Self { data: Some(data) })
    }

    /// Returns `true` until the handle is closed.
    pub fn is_open(&self) -> bool {
        self.data.is_some()
    }

    /// Releases the font data.
    ///
    /// Does nothing on an already closed handle.
    pub fn close(&mut self) {
        self.data = None;
    }

    /// Borrows the loaded face, or `None` if the handle was closed.
    pub fn face(&self) -> Option<FontRef<'_>> {
        let data = self.data.as_deref()?;
        // The same bytes already parsed in open().
        FontRef::from_index(data, FACE_INDEX).ok()
    }

    /// Collects naming metadata from the open face.
    ///
    /// Returns the empty result if the handle was closed.
    pub fn metadata(&self) -> FontMetadata {
        match self.face() {
            Some(face) => name::scan(&face),
            None => FontMetadata::default(),
        }
    }
}

/// Classify a face-loading failure.
fn load_error(path: &Path, source: ReadError) -> Error {
    let path = path.to_path_buf();
    match source {
        ReadError::InvalidSfnt(_) | ReadError::InvalidTtc(_) => {
            Error::UnsupportedFormat { path, source }
        }
        ReadError::OutOfBounds
        | ReadError::InvalidFormat(_)
        | ReadError::InvalidCollectionIndex(_)
        | ReadError::InvalidArrayLen
        | ReadError::NullOffset
        | ReadError::MalformedData(_) => Error::CorruptFont { path, source },
        _ => Error::LoadFailed { path, source },
    }
}
