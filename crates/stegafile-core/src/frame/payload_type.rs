use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use crate::error::StegaError;
use crate::result::Result;

pub(super) const TEXT: u8 = 0;
pub(super) const IMAGE: u8 = 1;
pub(super) const AUDIO: u8 = 2;
pub(super) const VIDEO: u8 = 3;

/// The type tag stored next to a payload, decides how an unveiled file is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PayloadType {
    #[default]
    Text,
    Image,
    Audio,
    Video,
    /// any code without a known meaning, unveiled as `.bin`
    Other(u8),
}

impl From<u8> for PayloadType {
    fn from(code: u8) -> Self {
        match code {
            TEXT => PayloadType::Text,
            IMAGE => PayloadType::Image,
            AUDIO => PayloadType::Audio,
            VIDEO => PayloadType::Video,
            other => PayloadType::Other(other),
        }
    }
}

impl From<PayloadType> for u8 {
    fn from(value: PayloadType) -> Self {
        match value {
            PayloadType::Text => TEXT,
            PayloadType::Image => IMAGE,
            PayloadType::Audio => AUDIO,
            PayloadType::Video => VIDEO,
            PayloadType::Other(code) => code,
        }
    }
}

impl PayloadType {
    /// strict variant of `From<u8>`, only the four known codes pass
    pub fn known(code: u8) -> Result<Self> {
        match PayloadType::from(code) {
            PayloadType::Other(code) => Err(StegaError::UnsupportedTypeCode(code)),
            known => Ok(known),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PayloadType::Other(_))
    }

    /// File extension, including the dot, an unveiled payload of this type is saved with.
    pub fn extension(&self) -> &'static str {
        match self {
            PayloadType::Text => ".txt",
            PayloadType::Image => ".png",
            PayloadType::Audio => ".mp3",
            PayloadType::Video => ".mp4",
            PayloadType::Other(_) => ".bin",
        }
    }

    /// Guesses the type of a file to hide from its extension.
    /// Files with an unknown or without extension count as text.
    pub fn from_extension(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "gif" => PayloadType::Image,
            "mp3" | "wav" | "ogg" => PayloadType::Audio,
            "mp4" | "avi" | "mov" => PayloadType::Video,
            _ => PayloadType::Text,
        }
    }
}

impl Display for PayloadType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadType::Text => write!(f, "text"),
            PayloadType::Image => write!(f, "image"),
            PayloadType::Audio => write!(f, "audio"),
            PayloadType::Video => write!(f, "video"),
            PayloadType::Other(code) => write!(f, "unknown ({code})"),
        }
    }
}

/// Accepts the type names as well as the plain codes, for example `image` or `1`.
impl FromStr for PayloadType {
    type Err = StegaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(PayloadType::Text),
            "image" => Ok(PayloadType::Image),
            "audio" => Ok(PayloadType::Audio),
            "video" => Ok(PayloadType::Video),
            other => {
                let code = other
                    .parse::<u8>()
                    .map_err(|_| StegaError::UnknownPayloadType(s.to_owned()))?;
                PayloadType::known(code)
            }
        }
    }
}
