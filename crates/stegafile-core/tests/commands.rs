use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageBuffer, Rgb, RgbImage};
use tempfile::TempDir;

use stegafile_core::commands::{capacity, hide, unveil, unveil_raw};
use stegafile_core::{CodecOptions, FrameMode, PayloadType, StegaError};

fn write_cover(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img: RgbImage = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x + y) as u8, (x * 2) as u8, (y * 3) as u8])
    });
    let path = dir.join(name);
    img.save(&path).expect("Cannot write cover image");
    path
}

fn write_secret(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Cannot write secret file");
    path
}

#[test]
fn should_hide_and_unveil_a_file() -> stegafile_core::Result<()> {
    let out_dir = TempDir::new()?;
    let cover = write_cover(out_dir.path(), "cover.png", 64, 64);
    let content: Vec<u8> = (0..1000u32).map(|i| (i * 31 % 251) as u8).collect();
    let secret = write_secret(out_dir.path(), "song.mp3", &content);
    let stego = out_dir.path().join("stego.png");

    hide(&cover, &stego, &secret, None, CodecOptions::default())?;
    assert!(fs::metadata(&stego)?.len() > 0, "File is not supposed to be empty");

    let unveiled = unveil(&stego, &out_dir.path().join("extracted"), CodecOptions::default())?;

    assert_eq!(unveiled, out_dir.path().join("extracted.mp3"));
    assert_eq!(fs::read(unveiled)?, content);

    Ok(())
}

#[test]
fn should_name_the_unveiled_file_after_the_given_type() -> stegafile_core::Result<()> {
    let out_dir = TempDir::new()?;
    let cover = write_cover(out_dir.path(), "cover.png", 32, 32);
    let secret = write_secret(out_dir.path(), "notes.md", b"# notes");
    let stego = out_dir.path().join("stego.png");

    hide(
        &cover,
        &stego,
        &secret,
        Some(PayloadType::Video),
        CodecOptions::default(),
    )?;
    let unveiled = unveil(&stego, &out_dir.path().join("out"), CodecOptions::default())?;

    assert_eq!(unveiled.extension().unwrap(), "mp4");
    assert_eq!(fs::read(unveiled)?, b"# notes");

    Ok(())
}

#[test]
fn should_refuse_unknown_type_codes_when_hiding() {
    let out_dir = TempDir::new().unwrap();
    let cover = write_cover(out_dir.path(), "cover.png", 32, 32);
    let secret = write_secret(out_dir.path(), "a.txt", b"a");
    let stego = out_dir.path().join("stego.png");

    let result = hide(
        &cover,
        &stego,
        &secret,
        Some(PayloadType::Other(9)),
        CodecOptions::default(),
    );

    assert!(matches!(result, Err(StegaError::UnsupportedTypeCode(9))));
    assert!(!stego.exists());
}

#[test]
fn should_write_nothing_when_the_secret_does_not_fit() {
    let out_dir = TempDir::new().unwrap();
    let cover = write_cover(out_dir.path(), "cover.png", 8, 8);
    let secret = write_secret(out_dir.path(), "big.txt", &[b'x'; 64]);
    let stego = out_dir.path().join("stego.png");

    let result = hide(&cover, &stego, &secret, None, CodecOptions::default());

    assert!(matches!(result, Err(StegaError::CapacityExceeded { .. })));
    assert!(!stego.exists(), "no stego image may be left behind");
}

#[test]
fn should_write_nothing_when_unveiling_fails() {
    let out_dir = TempDir::new().unwrap();
    let cover = write_cover(out_dir.path(), "plain.png", 32, 32);
    let base = out_dir.path().join("extracted");

    let result = unveil(&cover, &base, CodecOptions::default());

    assert!(result.is_err());
    assert_eq!(out_dir.path().read_dir().unwrap().count(), 1);
}

#[test]
fn should_hide_and_unveil_with_the_legacy_frame() -> stegafile_core::Result<()> {
    let out_dir = TempDir::new()?;
    let cover = write_cover(out_dir.path(), "cover.png", 16, 16);
    let secret = write_secret(out_dir.path(), "hello.txt", b"Hello legacy");
    let stego = out_dir.path().join("stego.png");
    let opts = CodecOptions::default().with_frame_mode(FrameMode::Legacy(PayloadType::Text));

    hide(&cover, &stego, &secret, None, opts)?;
    let unveiled = unveil(&stego, &out_dir.path().join("hello"), opts)?;

    assert_eq!(fs::read(unveiled)?, b"Hello legacy");

    Ok(())
}

#[test]
fn should_report_an_empty_legacy_unveil_as_no_secret_data() {
    let out_dir = TempDir::new().unwrap();
    let cover = write_cover(out_dir.path(), "cover.png", 16, 16);
    let secret = write_secret(out_dir.path(), "empty.txt", b"");
    let stego = out_dir.path().join("stego.png");
    let opts = CodecOptions::default().with_frame_mode(FrameMode::Legacy(PayloadType::Text));

    hide(&cover, &stego, &secret, None, opts).unwrap();

    assert!(matches!(
        unveil(&stego, &out_dir.path().join("empty"), opts),
        Err(StegaError::NoSecretData)
    ));
}

#[test]
fn should_dump_all_raw_bytes() -> stegafile_core::Result<()> {
    let out_dir = TempDir::new()?;
    let cover = write_cover(out_dir.path(), "cover.png", 16, 16);
    let secret = write_secret(out_dir.path(), "a.txt", b"abc");
    let stego = out_dir.path().join("stego.png");
    let raw = out_dir.path().join("raw.bin");

    hide(&cover, &stego, &secret, None, CodecOptions::default())?;
    unveil_raw(&stego, &raw, CodecOptions::default())?;

    let raw = fs::read(raw)?;
    assert_eq!(raw.len(), 16 * 16 * 3 / 8);
    assert_eq!(&raw[..4], b"STEG");
    assert_eq!(&raw[41..44], b"abc");

    Ok(())
}

#[test]
fn should_report_the_capacity_of_a_cover() -> stegafile_core::Result<()> {
    let out_dir = TempDir::new()?;
    let cover = write_cover(out_dir.path(), "cover.png", 20, 10);

    let report = capacity(&cover, CodecOptions::default())?;

    assert_eq!((report.width, report.height, report.channels), (20, 10, 3));
    assert_eq!(report.bytes, 75);
    assert_eq!(report.framed_payload_bytes, 34);
    assert_eq!(report.legacy_payload_bytes, 73);

    Ok(())
}

#[test]
fn should_reject_a_missing_secret_file() {
    let out_dir = TempDir::new().unwrap();
    let cover = write_cover(out_dir.path(), "cover.png", 16, 16);
    let stego = out_dir.path().join("stego.png");

    let result = hide(
        &cover,
        &stego,
        &out_dir.path().join("does-not-exist.txt"),
        None,
        CodecOptions::default(),
    );

    assert!(matches!(result, Err(StegaError::ReadError { .. })));
}
