//! Spilled partials
//! ---
//! Out-of-core storage for partial aggregations.  Each `SpilledPartial` owns one file
//! holding a bincode encoded, snappy framed `Partial`, and removes the file when
//! dropped.  Only the partials currently being merged need to be in memory.
//!

use std::fs::{File, remove_file};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use bincode::{deserialize_from, serialize_into};
use log::{trace, warn};
use snap::read::FrameDecoder;
use snap::write::FrameEncoder;
use uuid::Uuid;

use crate::aggregate::Partial;
use crate::error::{Error, Result};

/// Handle to a Partial stored on disk.
#[derive(Debug)]
pub struct SpilledPartial {
    path: PathBuf
}

impl SpilledPartial {

    /// Writes `partial` to a new file under `dir`.  The directory must already exist.
    pub fn write(dir: &Path, partial: &Partial) -> Result<SpilledPartial> {
        let path = dir.join(format!("wordflow-{}", Uuid::new_v4()));
        let fd = File::create(&path)
            .map_err(|source| Error::Write { path: path.clone(), source })?;

        // Owns the path from here on so a failed write still cleans up.
        let spilled = SpilledPartial { path };
        let mut out = FrameEncoder::new(fd);
        serialize_into(&mut out, partial)?;
        out.flush()
            .map_err(|source| Error::Write { path: spilled.path.clone(), source })?;

        trace!("Spilled {} tokens to {:?}", partial.counts.len(), spilled.path);
        Ok(spilled)
    }

    /// Reads the Partial back into memory.  The file is kept until this handle drops.
    pub fn read(&self) -> Result<Partial> {
        let fd = File::open(&self.path)
            .map_err(|source| Error::Read { path: self.path.clone(), source })?;
        let partial = deserialize_from(FrameDecoder::new(BufReader::new(fd)))?;
        Ok(partial)
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SpilledPartial {
    fn drop(&mut self) {
        if let Err(e) = remove_file(&self.path) {
            warn!("Error Deleting {:?}: {}", self.path, e);
        }
    }
}
