//! Frames are the binary contract between hide and unveil.
//!
//! Two forms exist, see [`framed`] for the integrity checked one that is used by
//! default and [`legacy`] for the end marker form of the first generation.

pub mod framed;
pub mod legacy;
mod payload_type;

pub use framed::{build_frame, parse_frame, FramedCodec, FRAMED_HEADER_LEN, FRAME_MAGIC};
pub use legacy::{find_end_marker, LegacyCodec, LEGACY_END_MARKER};
pub use payload_type::PayloadType;

use crate::result::Result;

/// A recovered payload together with its type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub payload_type: PayloadType,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn extension(&self) -> &'static str {
        self.payload_type.extension()
    }
}

/// Selects the frame form that is written and expected
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FrameMode {
    #[default]
    Framed,
    /// end marker form, it stores no type tag so unveiled data is given this type
    Legacy(PayloadType),
}

pub trait FrameEncoder {
    /// turns a payload into the exact bit sequence that goes into the carrier
    fn encode(&self, payload: &[u8], payload_type: PayloadType) -> Result<Vec<bool>>;
}

pub trait FrameDecoder {
    /// recovers a payload from the bits of a whole carrier
    fn decode(&self, bits: &[bool]) -> Result<Frame>;
}

pub trait FrameCodec: FrameEncoder + FrameDecoder {}

impl<C> FrameCodec for C where C: FrameEncoder + FrameDecoder {}

impl FrameMode {
    pub fn codec(&self) -> Box<dyn FrameCodec> {
        match self {
            FrameMode::Framed => Box::new(FramedCodec),
            FrameMode::Legacy(payload_type) => Box::new(LegacyCodec::new(*payload_type)),
        }
    }
}
