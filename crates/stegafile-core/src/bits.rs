use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::error::StegaError;
use crate::result::Result;

/// Packs bits back into bytes, most significant bit first.
///
/// Fails with [`StegaError::TruncatedBits`] when the bits do not add up to whole bytes,
/// nothing is padded or guessed.
pub fn from_bits(bits: &[bool]) -> Result<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(StegaError::TruncatedBits(bits.len()));
    }

    pack(bits)
}

/// Packs all complete groups of 8 bits, an incomplete trailing group is dropped.
///
/// This is what a full carrier harvest needs, the number of samples of an
/// image is rarely a multiple of 8.
pub fn from_bits_lossy(bits: &[bool]) -> Result<Vec<u8>> {
    let whole = bits.len() - bits.len() % 8;

    pack(&bits[..whole])
}

fn pack(bits: &[bool]) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(bits.len() / 8);
    {
        let mut writer = BitWriter::endian(&mut buffer, BigEndian);
        for bit in bits {
            writer.write_bit(*bit)?;
        }
        debug_assert!(writer.byte_aligned());
    }

    Ok(buffer)
}
