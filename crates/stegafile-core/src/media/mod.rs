mod carrier;
pub mod codec_options;

use std::io::{BufWriter, Write};
use std::path::Path;

use log::error;
use tempfile::NamedTempFile;

pub use carrier::Carrier;
pub use codec_options::{ChannelLayout, CodecOptions};

use crate::error::StegaError;
use crate::result::Result;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}

/// Writes `target` through a temporary file next to it that only replaces `target`
/// once `write` and the final flush succeeded.
///
/// On any error the temporary file is removed and `target` stays as it was.
pub fn write_file_atomically<F>(target: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<NamedTempFile>) -> Result<()>,
{
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir).map_err(|e| {
        error!("Error creating a temporary file in {dir:?}: {e}");
        StegaError::WriteError { source: e }
    })?;

    let mut writer = BufWriter::new(tmp);
    write(&mut writer)?;
    writer.flush().map_err(|source| StegaError::WriteError { source })?;
    let tmp = writer
        .into_inner()
        .map_err(|e| StegaError::WriteError {
            source: e.into_error(),
        })?;

    tmp.persist(target).map_err(|e| {
        error!("Error writing file {target:?}: {}", e.error);
        StegaError::WriteError { source: e.error }
    })?;

    Ok(())
}
