use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::frame::FrameMode;
use crate::media::{write_file_atomically, Carrier};
use crate::{CodecOptions, LsbCodec, StegaError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_base: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// The unveiled file is written here, with the extension of its type appended
    pub fn into_output_base(mut self, output_base: impl AsRef<Path>) -> Self {
        self.output_base = Some(output_base.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process, returns the path of the written file
    pub fn execute(self) -> Result<PathBuf, StegaError> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegaError::CarrierNotSet);
        };
        let Some(output_base) = self.output_base else {
            return Err(StegaError::TargetNotSet);
        };

        let carrier = Carrier::from_file(&secret_media, self.options.channel_layout)?;
        let frame = LsbCodec::unveil(&carrier, &self.options)?;

        if matches!(self.options.frame_mode, FrameMode::Legacy(_)) && frame.payload.is_empty() {
            return Err(StegaError::NoSecretData);
        }

        let mut target: OsString = output_base.into_os_string();
        target.push(frame.extension());
        let target = PathBuf::from(target);

        write_file_atomically(&target, |w| Ok(w.write_all(&frame.payload)?))?;
        info!("unveiled {} bytes of {} into {target:?}", frame.payload.len(), frame.payload_type);

        Ok(target)
    }
}
