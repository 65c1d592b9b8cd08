use std::path::PathBuf;

use clap::Args;
use stegafile_core::{CodecOptions, PayloadType};

use crate::CliResult;

/// Unveils a hidden file from a PNG image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Unveiled data is stored here, the extension follows from its type
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output base path",
        required = true
    )]
    pub output_base: PathBuf,

    /// Only with --legacy: legacy frames carry no type, this one is assumed (default text)
    #[arg(short = 't', long = "type", value_name = "type")]
    pub payload_type: Option<PayloadType>,
}

impl UnveilArgs {
    pub fn run(&self, options: CodecOptions) -> CliResult<()> {
        let unveiled = stegafile_core::commands::unveil(&self.media, &self.output_base, options)?;
        println!("{}", unveiled.display());

        Ok(())
    }
}
