use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb, RgbImage};
use stegafile_core::{Carrier, CodecOptions, LsbCodec, PayloadType};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let img: RgbImage =
            ImageBuffer::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
        let mut carrier = Carrier::from(img);
        let secret: Vec<u8> = (0..64 * 1024).map(|i| i as u8).collect();

        b.iter(|| {
            LsbCodec::hide(&mut carrier, &secret, PayloadType::Audio, &CodecOptions::default())
                .expect("Cannot hide secret")
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
