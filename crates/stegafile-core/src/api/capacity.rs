use std::path::{Path, PathBuf};

use crate::capacity::payload_capacity;
use crate::frame::{FrameMode, PayloadType};
use crate::media::Carrier;
use crate::{CodecOptions, StegaError};

pub fn prepare() -> CapacityApi {
    CapacityApi::default()
}

/// What a carrier image can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    /// all LSB slots as bytes, frame overhead included
    pub bytes: usize,
    /// largest file that fits into an integrity checked frame
    pub framed_payload_bytes: usize,
    /// largest file that fits in front of a legacy end marker
    pub legacy_payload_bytes: usize,
}

impl CapacityReport {
    pub fn of(carrier: &Carrier) -> Self {
        let (width, height) = carrier.dimensions();
        let channels = carrier.channels();

        Self {
            width,
            height,
            channels,
            bytes: carrier.capacity(),
            framed_payload_bytes: payload_capacity(width, height, channels, FrameMode::Framed),
            legacy_payload_bytes: payload_capacity(
                width,
                height,
                channels,
                FrameMode::Legacy(PayloadType::default()),
            ),
        }
    }
}

#[derive(Default, Debug)]
pub struct CapacityApi {
    image: Option<PathBuf>,
    options: CodecOptions,
}

impl CapacityApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<CapacityReport, StegaError> {
        let Some(image) = self.image else {
            return Err(StegaError::CarrierNotSet);
        };
        let carrier = Carrier::from_file(&image, self.options.channel_layout)?;

        Ok(CapacityReport::of(&carrier))
    }
}
