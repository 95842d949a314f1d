//! Filesystem status source.
//!
//! Implements [`StatusSource`] by reading one JSON record per fuse from a
//! directory. A missing file maps to [`SourceError::NotFound`]; every
//! other I/O failure keeps its `ErrorKind`.

use std::path::{Path, PathBuf};

use log::debug;

use crate::app::ports::StatusSource;
use crate::config::DiagConfig;
use crate::error::SourceError;
use crate::fuse::FuseIndex;

/// Status records on disk, one file per fuse.
pub struct FileStatusSource {
    paths: [PathBuf; 2],
}

impl FileStatusSource {
    pub fn new(config: &DiagConfig) -> Self {
        Self {
            paths: FuseIndex::ALL.map(|fuse| config.status_path(fuse)),
        }
    }

    pub fn path(&self, fuse: FuseIndex) -> &Path {
        &self.paths[fuse.index()]
    }
}

impl StatusSource for FileStatusSource {
    fn read(&self, fuse: FuseIndex) -> Result<Vec<u8>, SourceError> {
        let path = self.path(fuse);
        let raw = std::fs::read(path).map_err(|e| SourceError::from_io(&e))?;
        debug!("fuse {}: read {} bytes from {}", fuse, raw.len(), path.display());
        Ok(raw)
    }
}
