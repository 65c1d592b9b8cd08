use std::io::{Seek, Write};
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};
use log::{debug, error};

use super::{write_file_atomically, ChannelLayout, Persist};
use crate::capacity::capacity;
use crate::error::StegaError;
use crate::result::Result;

/// A carrier image, its samples are the 8 bit color channels of every pixel.
///
/// The flat sample order is the order of the underlying buffer: row by row,
/// pixel by pixel, channels interleaved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Carrier {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl From<RgbImage> for Carrier {
    fn from(img: RgbImage) -> Self {
        Carrier::Rgb(img)
    }
}

impl From<RgbaImage> for Carrier {
    fn from(img: RgbaImage) -> Self {
        Carrier::Rgba(img)
    }
}

impl Carrier {
    pub fn from_image(img: DynamicImage, layout: ChannelLayout) -> Self {
        match layout {
            ChannelLayout::Rgb => Carrier::Rgb(img.to_rgb8()),
            ChannelLayout::Rgba => Carrier::Rgba(img.to_rgba8()),
        }
    }

    pub fn from_file(f: &Path, layout: ChannelLayout) -> Result<Self> {
        let ext = f
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .ok_or(StegaError::UnsupportedMedia)?;

        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "bmp" => {
                let img = image::open(f).map_err(|e| {
                    debug!("Cannot open image {f:?}: {e}");
                    StegaError::InvalidImageMedia
                })?;

                Ok(Self::from_image(img, layout))
            }
            _ => Err(StegaError::UnsupportedMedia),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Carrier::Rgb(img) => img.dimensions(),
            Carrier::Rgba(img) => img.dimensions(),
        }
    }

    pub fn channels(&self) -> u8 {
        match self {
            Carrier::Rgb(_) => ChannelLayout::Rgb.channels(),
            Carrier::Rgba(_) => ChannelLayout::Rgba.channels(),
        }
    }

    /// maximum number of bytes this carrier can take, frame overhead included
    pub fn capacity(&self) -> usize {
        let (width, height) = self.dimensions();
        capacity(width, height, self.channels())
    }

    pub fn samples(&self) -> &[u8] {
        match self {
            Carrier::Rgb(img) => &**img,
            Carrier::Rgba(img) => &**img,
        }
    }

    pub fn samples_mut(&mut self) -> &mut [u8] {
        match self {
            Carrier::Rgb(img) => &mut **img,
            Carrier::Rgba(img) => &mut **img,
        }
    }

    /// Writes the carrier as PNG, any lossy format would destroy the hidden bits.
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        let written = match self {
            Carrier::Rgb(img) => img.write_to(&mut writer, ImageFormat::Png),
            Carrier::Rgba(img) => img.write_to(&mut writer, ImageFormat::Png),
        };

        written.map_err(|e| {
            error!("Error saving image: {e}");
            StegaError::ImageEncodingError
        })
    }
}

impl Persist for Carrier {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        write_file_atomically(file, |writer| self.save_to_writer(writer))
    }
}
