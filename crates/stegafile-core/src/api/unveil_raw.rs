use std::io::Write;
use std::path::{Path, PathBuf};

use crate::media::{write_file_atomically, Carrier};
use crate::{CodecOptions, LsbCodec, StegaError};

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilRawApi {
    /// Use the given codec options, only the channel layout matters here
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the raw file where all data will be saved to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<(), StegaError> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegaError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(StegaError::TargetNotSet);
        };

        let carrier = Carrier::from_file(&secret_media, self.options.channel_layout)?;

        let raw = LsbCodec::unveil_raw(&carrier)?;

        write_file_atomically(&destination_file, |w| Ok(w.write_all(&raw)?))
    }
}
