use std::path::{Path, PathBuf};

use crate::api::capacity::CapacityReport;
use crate::{CodecOptions, PayloadType, StegaError};

/// Hides `secret_file` in the `media` image and writes the result to `write_to_file` as PNG.
pub fn hide(
    media: &Path,
    write_to_file: &Path,
    secret_file: &Path,
    payload_type: Option<PayloadType>,
    options: CodecOptions,
) -> Result<(), StegaError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(media)
        .with_output(write_to_file)
        .with_secret_file(secret_file)
        .use_payload_type(payload_type)
        .execute()
}

/// Unveils the hidden file into `<output_base><extension>` and returns that path.
pub fn unveil(
    secret_media: &Path,
    output_base: &Path,
    options: CodecOptions,
) -> Result<PathBuf, StegaError> {
    crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .into_output_base(output_base)
        .execute()
}

/// unveil all raw data, no content format interpretation is happening.
/// Just a raw binary dump of the data gathered by the LSB algorithm.
pub fn unveil_raw(
    secret_media: &Path,
    destination_file: &Path,
    options: CodecOptions,
) -> Result<(), StegaError> {
    crate::api::unveil_raw::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .into_raw_file(destination_file)
        .execute()
}

pub fn capacity(media: &Path, options: CodecOptions) -> Result<CapacityReport, StegaError> {
    crate::api::capacity::prepare()
        .with_options(options)
        .with_image(media)
        .execute()
}
