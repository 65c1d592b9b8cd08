//! # Stegafile Core API
//!
//! Hides the bytes of an arbitrary file in the least significant bits of a
//! cover image and recovers them later from the stego image alone.
//!
//! The data is wrapped into a [`frame`] before it goes into the pixels. By default
//! that is an integrity checked frame with a magic, the payload length, a SHA-256
//! of the payload and a type tag. The end marker frame of the first generation is
//! supported via [`FrameMode::Legacy`].
//!
//! Nothing is encrypted, this only guarantees the mechanical recovery of the bytes.
//!
//! # Usage Examples
//!
//! ## Hide and unveil in memory
//!
//! ```rust
//! use image::{ImageBuffer, Rgb, RgbImage};
//! use stegafile_core::{embed, extract, Carrier, CodecOptions, PayloadType};
//!
//! let cover: RgbImage = ImageBuffer::from_pixel(32, 32, Rgb([120, 80, 200]));
//! let opts = CodecOptions::default();
//!
//! let stego = embed(Carrier::from(cover), b"Hello, World!", PayloadType::Text, &opts)
//!     .expect("Failed to hide the message");
//! let frame = extract(&stego, &opts).expect("Failed to unveil the message");
//!
//! assert_eq!(frame.payload, b"Hello, World!");
//! assert_eq!(frame.extension(), ".txt");
//! ```
//!
//! ## Hide a file inside an image file
//!
//! ```rust,no_run
//! stegafile_core::api::hide::prepare()
//!     .with_secret_file("song.mp3")
//!     .with_image("cover.png")
//!     .with_output("stego.png")
//!     .execute()
//!     .expect("Failed to hide file in image");
//!
//! let unveiled = stegafile_core::api::unveil::prepare()
//!     .from_secret_file("stego.png")
//!     .into_output_base("extracted")
//!     .execute()
//!     .expect("Failed to unveil file from image");
//!
//! assert_eq!(unveiled, std::path::Path::new("extracted.mp3"));
//! ```

#![warn(clippy::redundant_else)]

pub mod bit_iterator;
pub use bit_iterator::{to_bits, BitIterator};

pub mod api;
pub mod bits;
pub mod capacity;
pub mod codec;
pub mod commands;
pub mod error;
pub mod frame;
pub mod lsb;
pub mod media;
pub mod result;

pub use crate::bits::{from_bits, from_bits_lossy};
pub use crate::capacity::capacity;
pub use crate::codec::{embed, extract, extract_raw, LsbCodec};
pub use crate::error::StegaError;
pub use crate::frame::{Frame, FrameMode, PayloadType};
pub use crate::media::{Carrier, ChannelLayout, CodecOptions, Persist};
pub use crate::result::Result;
