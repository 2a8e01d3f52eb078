use super::*;
use std::sync::Arc;

/// Storage layout of one texel. Four-channel formats sample as full RGBA,
/// single-channel formats sample as a scalar broadcast to gray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TexelFormat {
    RgbaF32,
    RgbaF16,
    RgbaU16,
    RgbaU8,
    GrayF32,
    GrayF16,
    GrayU16,
    GrayU8,
}

impl TexelFormat {
    pub fn channels(self) -> u32 {
        match self {
            TexelFormat::RgbaF32 | TexelFormat::RgbaF16 | TexelFormat::RgbaU16 | TexelFormat::RgbaU8 => 4,
            TexelFormat::GrayF32 | TexelFormat::GrayF16 | TexelFormat::GrayU16 | TexelFormat::GrayU8 => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    Nearest,
    Linear,
    Cubic,
    /// Resolution-dependent filtering in the original authoring sense.
    /// Sampling treats it exactly like `Cubic`.
    Smart,
}

impl Interpolation {
    // Smart shares the cubic path
    pub fn cubic_reconstruction(self) -> bool {
        matches!(self, Interpolation::Cubic | Interpolation::Smart)
    }
}

/// Per-image metadata plus the handle to the pixel storage. This is what a
/// resolved texture lookup works from; it never changes after registration.
#[derive(Clone)]
pub struct ImageDesc {
    pub width: u32,
    pub height: u32,
    pub format: TexelFormat,
    pub interpolation: Interpolation,
    pub object: Arc<SampledImage>,
}

impl ImageDesc {
    pub fn new(object: Arc<SampledImage>) -> Self {
        Self {
            width: object.width(),
            height: object.height(),
            format: object.format(),
            interpolation: object.interpolation(),
            object,
        }
    }
}
