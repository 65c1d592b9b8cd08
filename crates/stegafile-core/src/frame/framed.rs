//! Integrity checked frame.
//!
//! ```text
//! [4 bytes ] magic "STEG"
//! [4 bytes ] payload length (big-endian u32)
//! [32 bytes] SHA-256 of the payload
//! [1 byte  ] payload type
//! [N bytes ] payload
//! ```
//!
//! No terminator follows, the length is explicit.

use std::io::{Cursor, Read};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use log::{debug, warn};
use sha2::{Digest, Sha256};

use super::{Frame, FrameDecoder, FrameEncoder, PayloadType};
use crate::bit_iterator::to_bits;
use crate::bits::from_bits_lossy;
use crate::error::StegaError;
use crate::result::Result;

pub const FRAME_MAGIC: &[u8; 4] = b"STEG";
pub const HASH_LEN: usize = 32;
/// magic(4) + length(4) + hash(32) + type(1)
pub const FRAMED_HEADER_LEN: usize = FRAME_MAGIC.len() + 4 + HASH_LEN + 1;

/// Serializes `payload` with its header, deterministic for equal inputs.
pub fn build_frame(payload: &[u8], payload_type: PayloadType) -> Result<Vec<u8>> {
    let len = u32::try_from(payload.len()).map_err(|_| StegaError::PayloadTooLarge(payload.len()))?;

    let mut frame = Vec::with_capacity(FRAMED_HEADER_LEN + payload.len());
    frame.extend_from_slice(FRAME_MAGIC);
    frame.write_u32::<BigEndian>(len)?;
    frame.extend_from_slice(&Sha256::digest(payload));
    frame.write_u8(payload_type.into())?;
    frame.extend_from_slice(payload);

    Ok(frame)
}

/// Parses and validates a frame at the start of `data`.
///
/// `data` may be longer than the frame, bytes after the payload are ignored.
/// The checks run in order and the first failing one is reported:
/// header size, magic, length, content hash.
pub fn parse_frame(data: &[u8]) -> Result<Frame> {
    if data.len() < FRAMED_HEADER_LEN {
        return Err(StegaError::IncompleteHeader(data.len()));
    }

    let mut header = Cursor::new(&data[..FRAMED_HEADER_LEN]);
    let mut magic = [0; 4];
    header.read_exact(&mut magic)?;
    if &magic != FRAME_MAGIC {
        return Err(StegaError::InvalidMagic);
    }

    let expected = header.read_u32::<BigEndian>()? as usize;
    let mut stored_hash = [0; HASH_LEN];
    header.read_exact(&mut stored_hash)?;
    let payload_type = PayloadType::from(header.read_u8()?);

    let available = data.len() - FRAMED_HEADER_LEN;
    if expected > available {
        return Err(StegaError::SizeMismatch {
            expected,
            available,
        });
    }

    let payload = &data[FRAMED_HEADER_LEN..FRAMED_HEADER_LEN + expected];
    if Sha256::digest(payload).as_slice() != &stored_hash[..] {
        return Err(StegaError::IntegrityFailure);
    }

    if !payload_type.is_known() {
        warn!("frame carries unknown type code {}, falling back to binary", u8::from(payload_type));
    }
    debug!("parsed frame with {expected} payload bytes of type {payload_type}");

    Ok(Frame {
        payload_type,
        payload: payload.to_vec(),
    })
}

/// Codec for the integrity checked frame
#[derive(Debug, Default, Clone, Copy)]
pub struct FramedCodec;

impl FrameEncoder for FramedCodec {
    fn encode(&self, payload: &[u8], payload_type: PayloadType) -> Result<Vec<bool>> {
        Ok(to_bits(&build_frame(payload, payload_type)?))
    }
}

impl FrameDecoder for FramedCodec {
    fn decode(&self, bits: &[bool]) -> Result<Frame> {
        parse_frame(&from_bits_lossy(bits)?)
    }
}
