use super::*;
use image::{DynamicImage, GenericImageView};
use std::sync::Arc;

impl SampledImage {
    /// Builds a sampled image from a decoded `image` buffer. Gray and
    /// high-bit-depth sources keep their storage class; everything else
    /// converts to 8-bit RGBA.
    pub fn from_image(
        source: &DynamicImage,
        interpolation: Interpolation,
        wrap: WrapMode,
    ) -> Arc<SampledImage> {
        let (width, height) = source.dimensions();

        let data = match source {
            DynamicImage::ImageLuma8(gray) => TexelData::GrayU8(gray.as_raw().clone()),
            DynamicImage::ImageLuma16(gray) => TexelData::GrayU16(gray.as_raw().clone()),
            DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
                let rgba = source.to_rgba32f();
                TexelData::RgbaF32(rgba.pixels().map(|p| p.0).collect())
            }
            DynamicImage::ImageRgb16(_)
            | DynamicImage::ImageRgba16(_)
            | DynamicImage::ImageLumaA16(_) => {
                let rgba = source.to_rgba16();
                TexelData::RgbaU16(rgba.pixels().map(|p| p.0).collect())
            }
            _ => {
                let rgba = source.to_rgba8();
                TexelData::RgbaU8(rgba.pixels().map(|p| p.0).collect())
            }
        };

        SampledImage::new(width, height, interpolation, wrap, data)
    }
}
