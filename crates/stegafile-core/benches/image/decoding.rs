use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb, RgbImage};
use stegafile_core::{embed, Carrier, CodecOptions, LsbCodec, PayloadType};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let img: RgbImage =
            ImageBuffer::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
        let secret: Vec<u8> = (0..64 * 1024).map(|i| i as u8).collect();
        let stego = embed(
            Carrier::from(img),
            &secret,
            PayloadType::Audio,
            &CodecOptions::default(),
        )
        .expect("Cannot hide secret");

        b.iter(|| LsbCodec::unveil(&stego, &CodecOptions::default()).expect("Cannot unveil secret"))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
