//! Least significant bit primitives over a flat sample buffer.
//!
//! Samples are visited in buffer order, one bit per sample. Embedding and
//! unveiling must agree on this order, it is part of the format.

use crate::capacity::ensure_capacity;
use crate::result::Result;

/// stores one bit in a carrier sample
pub trait HideBit {
    fn hide_bit(&mut self, bit: bool);
}

/// reads the bit a carrier sample stores
pub trait UnveilBit {
    fn unveil_bit(&self) -> bool;
}

impl HideBit for u8 {
    #[inline(always)]
    fn hide_bit(&mut self, bit: bool) {
        *self = (*self & (u8::MAX - 1)) | u8::from(bit);
    }
}

impl UnveilBit for u8 {
    #[inline(always)]
    fn unveil_bit(&self) -> bool {
        (*self & 0x1) > 0
    }
}

/// Writes `bits` into the LSBs of the leading samples, the rest stays untouched.
///
/// Either all bits are written or, when they do not fit, not a single sample is changed.
pub fn embed_bits<S: HideBit>(samples: &mut [S], bits: &[bool]) -> Result<()> {
    ensure_capacity(bits.len(), samples.len())?;

    for (sample, bit) in samples.iter_mut().zip(bits) {
        sample.hide_bit(*bit);
    }

    Ok(())
}

/// Reads the LSB of every sample, there is no early stop.
pub fn harvest_bits<S: UnveilBit>(samples: &[S]) -> Vec<bool> {
    samples.iter().map(UnveilBit::unveil_bit).collect()
}
