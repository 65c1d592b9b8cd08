use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::media::{Carrier, Persist};
use crate::{CodecOptions, LsbCodec, PayloadType, StegaError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    secret_file: Option<PathBuf>,
    payload_type: Option<PayloadType>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// The file whose bytes get hidden
    pub fn with_secret_file<A: AsRef<Path>>(mut self, secret_file: A) -> Self {
        self.secret_file = Some(secret_file.as_ref().to_path_buf());
        self
    }

    /// Overrides the type that is otherwise guessed from the secret file extension
    pub fn with_payload_type(mut self, payload_type: PayloadType) -> Self {
        self.payload_type = Some(payload_type);
        self
    }

    pub fn use_payload_type(mut self, payload_type: Option<PayloadType>) -> Self {
        self.payload_type = payload_type;
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Execute the hide process, the output image is only written when everything succeeded
    pub fn execute(self) -> Result<(), StegaError> {
        let Some(secret_file) = self.secret_file else {
            return Err(StegaError::MissingSecretFile);
        };
        let Some(image) = self.image else {
            return Err(StegaError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegaError::TargetNotSet);
        };

        let payload_type = match self.payload_type {
            Some(payload_type) => PayloadType::known(payload_type.into())?,
            None => PayloadType::from_extension(&secret_file),
        };

        let mut carrier = Carrier::from_file(&image, self.options.channel_layout)?;
        let payload = fs::read(&secret_file).map_err(|source| StegaError::ReadError { source })?;
        debug!("hiding {secret_file:?} ({} bytes) as {payload_type}", payload.len());

        LsbCodec::hide(&mut carrier, &payload, payload_type, &self.options)?;
        carrier.save_as(&output)?;
        info!("hidden {secret_file:?} in {output:?}");

        Ok(())
    }
}
