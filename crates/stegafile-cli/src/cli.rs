use clap::{Parser, Subcommand};
use stegafile_core::{ChannelLayout, CodecOptions, FrameMode, PayloadType};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Use the end marker frame of the first generation instead of the integrity checked one
    #[arg(long, global = true)]
    pub legacy: bool,

    /// Also hide data in the alpha channel, one bit more per pixel
    #[arg(long = "with-alpha", global = true)]
    pub with_alpha: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    /// `legacy_type` is what a legacy frame is unveiled as, it stores no type itself
    pub fn codec_options(&self, legacy_type: Option<PayloadType>) -> CodecOptions {
        let frame_mode = if self.legacy {
            FrameMode::Legacy(legacy_type.unwrap_or_default())
        } else {
            FrameMode::Framed
        };
        let channel_layout = if self.with_alpha {
            ChannelLayout::Rgba
        } else {
            ChannelLayout::Rgb
        };

        CodecOptions::default()
            .with_frame_mode(frame_mode)
            .with_channel_layout(channel_layout)
    }

    /// Explains why a given `--type` has no effect with the chosen frame form
    pub fn ignored_type(&self) -> Option<&'static str> {
        match &self.command {
            Commands::Unveil(unveil) if unveil.payload_type.is_some() && !self.legacy => {
                Some("--type is ignored without --legacy, the frame carries its own type")
            }
            Commands::Hide(hide) if hide.payload_type.is_some() && self.legacy => {
                Some("--type is not stored by the legacy frame, pass it again when unveiling")
            }
            _ => None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
    Capacity(capacity::CapacityArgs),
}
