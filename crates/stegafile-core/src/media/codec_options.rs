use crate::frame::FrameMode;

/// Codec configuration for hiding and unveiling
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Which frame form is written on hide and expected on unveil.
    pub frame_mode: FrameMode,

    /// Which color channels of a pixel carry data.
    ///
    /// Note this number influences the capacity directly.
    pub channel_layout: ChannelLayout,
}

impl CodecOptions {
    pub fn with_frame_mode(mut self, frame_mode: FrameMode) -> Self {
        self.frame_mode = frame_mode;
        self
    }

    pub fn with_channel_layout(mut self, channel_layout: ChannelLayout) -> Self {
        self.channel_layout = channel_layout;
        self
    }
}

/// Color channels used per pixel
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    /// red, green and blue, alpha is dropped on load
    #[default]
    Rgb,
    /// red, green, blue and alpha, one bit more per pixel
    Rgba,
}

impl ChannelLayout {
    pub fn channels(&self) -> u8 {
        match self {
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }
}
