use std::path::PathBuf;

use clap::Args;
use stegafile_core::{CodecOptions, PayloadType};

use crate::CliResult;

/// Hides a file in a PNG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Cover image such as PNG, JPEG or BMP, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the image
    #[arg(short = 'd', long = "data", value_name = "data file", required = true)]
    pub data_file: PathBuf,

    /// Type of the hidden file (text, image, audio, video or 0-3), guessed from its extension if omitted
    #[arg(short = 't', long = "type", value_name = "type")]
    pub payload_type: Option<PayloadType>,
}

impl HideArgs {
    pub fn run(&self, options: CodecOptions) -> CliResult<()> {
        stegafile_core::commands::hide(
            &self.media,
            &self.write_to_file,
            &self.data_file,
            self.payload_type,
            options,
        )?;

        Ok(())
    }
}
