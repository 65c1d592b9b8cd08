use log::{debug, warn};

use crate::bits::from_bits_lossy;
use crate::frame::{Frame, FrameMode, PayloadType};
use crate::lsb::{embed_bits, harvest_bits};
use crate::media::{Carrier, CodecOptions};
use crate::result::Result;

/// Hides a framed payload in a carrier, consuming the cover and returning the stego image.
///
/// On error the cover is dropped untouched, there is no half written image.
pub fn embed(
    mut cover: Carrier,
    payload: &[u8],
    payload_type: PayloadType,
    opts: &CodecOptions,
) -> Result<Carrier> {
    LsbCodec::hide(&mut cover, payload, payload_type, opts)?;

    Ok(cover)
}

/// Recovers the payload and its type from a stego image.
pub fn extract(stego: &Carrier, opts: &CodecOptions) -> Result<Frame> {
    LsbCodec::unveil(stego, opts)
}

/// The LSBs of every sample as bytes, no frame is interpreted.
pub fn extract_raw(stego: &Carrier) -> Result<Vec<u8>> {
    LsbCodec::unveil_raw(stego)
}

/// LSB codec over the samples of a [`Carrier`]
pub struct LsbCodec;

impl LsbCodec {
    /// Frames `payload` and writes it into the carrier in place.
    ///
    /// The capacity is checked before any sample is mutated.
    pub fn hide(
        carrier: &mut Carrier,
        payload: &[u8],
        payload_type: PayloadType,
        opts: &CodecOptions,
    ) -> Result<()> {
        if let FrameMode::Legacy(_) = opts.frame_mode {
            warn!("hiding with the legacy end marker frame, the type {payload_type} is not stored");
        }
        let bits = opts.frame_mode.codec().encode(payload, payload_type)?;
        debug!(
            "hiding {} payload bytes as {} bits in {} samples",
            payload.len(),
            bits.len(),
            carrier.samples().len()
        );

        embed_bits(carrier.samples_mut(), &bits)
    }

    /// Reads every sample of the carrier and decodes the frame from it.
    pub fn unveil(carrier: &Carrier, opts: &CodecOptions) -> Result<Frame> {
        let bits = harvest_bits(carrier.samples());

        opts.frame_mode.codec().decode(&bits)
    }

    /// All LSBs of the carrier as bytes, without any frame interpretation.
    pub fn unveil_raw(carrier: &Carrier) -> Result<Vec<u8>> {
        from_bits_lossy(&harvest_bits(carrier.samples()))
    }
}
