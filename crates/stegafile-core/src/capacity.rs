//! Capacity of a carrier, one payload bit per color channel sample.

use log::debug;

use crate::error::StegaError;
use crate::frame::{FrameMode, FRAMED_HEADER_LEN, LEGACY_END_MARKER};
use crate::result::Result;

/// Number of LSB slots a `width`×`height` image with `channels` samples per pixel offers.
pub fn capacity_bits(width: u32, height: u32, channels: u8) -> usize {
    width as usize * height as usize * channels as usize
}

/// Maximum number of bytes embeddable, that is `floor(width * height * channels / 8)`.
pub fn capacity(width: u32, height: u32, channels: u8) -> usize {
    capacity_bits(width, height, channels) / 8
}

/// Largest payload that still fits once the frame overhead of `mode` is accounted for.
pub fn payload_capacity(width: u32, height: u32, channels: u8, mode: FrameMode) -> usize {
    let bits = capacity_bits(width, height, channels);
    match mode {
        FrameMode::Framed => (bits / 8).saturating_sub(FRAMED_HEADER_LEN),
        FrameMode::Legacy(_) => bits.saturating_sub(LEGACY_END_MARKER.len()) / 8,
    }
}

/// The one gate every embed passes before a single sample is touched.
pub fn ensure_capacity(needed_bits: usize, available_samples: usize) -> Result<()> {
    debug!("capacity check: {needed_bits} bits needed, {available_samples} available");
    if needed_bits > available_samples {
        return Err(StegaError::CapacityExceeded {
            needed_bits,
            available_bits: available_samples,
        });
    }

    Ok(())
}
