use std::path::PathBuf;

use clap::Args;
use stegafile_core::CodecOptions;

use crate::CliResult;

/// Shows how much data an image can hide
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Cover image to inspect
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(&self, options: CodecOptions) -> CliResult<()> {
        let report = stegafile_core::commands::capacity(&self.media, options)?;

        println!(
            "{}x{} pixels, {} channels: {} bytes",
            report.width, report.height, report.channels, report.bytes
        );
        println!("largest file (framed): {} bytes", report.framed_payload_bytes);
        println!("largest file (legacy): {} bytes", report.legacy_payload_bytes);

        Ok(())
    }
}
