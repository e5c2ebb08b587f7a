//! Input acquisition
//!
//! The whole document is read into memory in one go. The file size is taken
//! from metadata up front, and a read that comes back shorter than that is
//! treated as a corrupt input rather than retried.

use hpgl_distiller_core::{DistillerError, Result};
use hpgl_distiller_engine::CommandStream;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read exactly `declared` bytes from `reader`.
pub fn read_exact_document<R: Read>(reader: R, declared: u64) -> Result<CommandStream> {
    let size = usize::try_from(declared).map_err(|_| DistillerError::Allocation { size: declared })?;

    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(size)
        .map_err(|_| DistillerError::Allocation { size: declared })?;

    let actual = reader.take(declared).read_to_end(&mut bytes)? as u64;
    if actual != declared {
        return Err(DistillerError::ShortRead {
            expected: declared,
            actual,
        });
    }

    Ok(CommandStream::new(bytes))
}

/// Load the HPGL document at `path`.
pub fn read_document(path: &Path) -> Result<CommandStream> {
    let open_err = |source| DistillerError::OpenInput {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(open_err)?;
    let declared = file.metadata().map_err(open_err)?.len();
    tracing::debug!("Reading {} ({} bytes)", path.display(), declared);

    read_exact_document(file, declared)
}
