use image::{ImageBuffer, Rgb, RgbImage};

use stegafile_core::frame::FRAMED_HEADER_LEN;
use stegafile_core::{embed, extract, Carrier, CodecOptions, PayloadType, StegaError};

const PAYLOAD: &[u8] = b"The quick brown fox jumps over the lazy dog";

fn stego() -> Carrier {
    let img: RgbImage =
        ImageBuffer::from_fn(24, 24, |x, y| Rgb([(x * 11) as u8, (y * 7) as u8, 128]));

    embed(
        Carrier::from(img),
        PAYLOAD,
        PayloadType::Text,
        &CodecOptions::default(),
    )
    .expect("Cannot hide the payload")
}

fn flip_sample_lsb(carrier: &Carrier, sample: usize) -> Carrier {
    let mut flipped = carrier.clone();
    flipped.samples_mut()[sample] ^= 0x01;
    flipped
}

#[test]
fn flipping_any_length_bit_should_be_detected() {
    let stego = stego();

    for sample in 4 * 8..8 * 8 {
        match extract(&flip_sample_lsb(&stego, sample), &CodecOptions::default()) {
            Err(StegaError::SizeMismatch { .. }) | Err(StegaError::IntegrityFailure) => (),
            other => panic!("flipped length bit {sample} gave {other:?}"),
        }
    }
}

#[test]
fn flipping_any_hash_or_payload_bit_should_be_an_integrity_failure() {
    let stego = stego();
    let hash = 8 * 8..40 * 8;
    let payload = FRAMED_HEADER_LEN * 8..(FRAMED_HEADER_LEN + PAYLOAD.len()) * 8;

    for sample in hash.chain(payload) {
        match extract(&flip_sample_lsb(&stego, sample), &CodecOptions::default()) {
            Err(StegaError::IntegrityFailure) => (),
            other => panic!("flipped bit {sample} gave {other:?}"),
        }
    }
}

#[test]
fn flipping_a_magic_bit_should_be_an_invalid_magic() {
    let stego = stego();

    for sample in 0..4 * 8 {
        assert!(matches!(
            extract(&flip_sample_lsb(&stego, sample), &CodecOptions::default()),
            Err(StegaError::InvalidMagic)
        ));
    }
}

#[test]
fn flipping_bits_behind_the_frame_should_not_matter() {
    let stego = stego();
    let behind = (FRAMED_HEADER_LEN + PAYLOAD.len()) * 8;

    let frame = extract(&flip_sample_lsb(&stego, behind + 3), &CodecOptions::default()).unwrap();
    assert_eq!(frame.payload, PAYLOAD);
}

#[test]
fn flipping_a_type_bit_should_only_change_the_extension() {
    let stego = stego();
    let type_byte = (FRAMED_HEADER_LEN - 1) * 8;

    // text (0) becomes image (1), the payload is not affected
    let frame = extract(&flip_sample_lsb(&stego, type_byte + 7), &CodecOptions::default()).unwrap();
    assert_eq!(frame.payload, PAYLOAD);
    assert_eq!(frame.payload_type, PayloadType::Image);
    assert_eq!(frame.extension(), ".png");

    // 0x80 is no known type and falls back to binary
    let frame = extract(&flip_sample_lsb(&stego, type_byte), &CodecOptions::default()).unwrap();
    assert_eq!(frame.payload, PAYLOAD);
    assert_eq!(frame.payload_type, PayloadType::Other(0x80));
    assert_eq!(frame.extension(), ".bin");
}
