//! Frame of the first generation: the payload bits followed by a 16 bit end marker.
//!
//! The marker is searched in bit space. A payload that itself contains the
//! marker pattern ends early, which this format cannot detect.

use log::{debug, warn};

use super::{Frame, FrameDecoder, FrameEncoder, PayloadType};
use crate::bit_iterator::to_bits;
use crate::bits::from_bits;
use crate::error::StegaError;
use crate::result::Result;

/// `1111111111111110`
pub const LEGACY_END_MARKER: [bool; 16] = [
    true, true, true, true, true, true, true, true, true, true, true, true, true, true, true,
    false,
];

/// bit position of the first end marker
pub fn find_end_marker(bits: &[bool]) -> Option<usize> {
    bits.windows(LEGACY_END_MARKER.len())
        .position(|window| window == LEGACY_END_MARKER)
}

/// Codec for the end marker frame.
///
/// The frame stores no type tag, so the type is whatever the codec is told.
#[derive(Debug, Default, Clone, Copy)]
pub struct LegacyCodec {
    payload_type: PayloadType,
}

impl LegacyCodec {
    pub fn new(payload_type: PayloadType) -> Self {
        Self { payload_type }
    }
}

impl FrameEncoder for LegacyCodec {
    fn encode(&self, payload: &[u8], _payload_type: PayloadType) -> Result<Vec<bool>> {
        let mut bits = to_bits(payload);
        bits.extend_from_slice(&LEGACY_END_MARKER);

        Ok(bits)
    }
}

impl FrameDecoder for LegacyCodec {
    fn decode(&self, bits: &[bool]) -> Result<Frame> {
        let end = find_end_marker(bits).ok_or(StegaError::MarkerNotFound)?;
        debug!("legacy end marker found at bit {end}");
        if end % 8 != 0 {
            warn!("legacy end marker at bit {end} is not byte aligned, the payload contains the marker pattern");
        }

        Ok(Frame {
            payload_type: self.payload_type,
            payload: from_bits(&bits[..end])?,
        })
    }
}
