use half::f16;
use mosaic::texture::*;
use std::sync::Arc;

/// Two-tone checkerboard, built as an 8-bit RGBA image and run through the
/// importer.
pub fn checker(size: u32, cells: u32, interpolation: Interpolation) -> Arc<SampledImage> {
    let buffer = image::RgbaImage::from_fn(size, size, |x, y| {
        let cx = x * cells / size;
        let cy = y * cells / size;
        if (cx + cy) % 2 == 0 {
            image::Rgba([230, 95, 40, 255])
        } else {
            image::Rgba([35, 35, 45, 255])
        }
    });
    let source = image::DynamicImage::ImageRgba8(buffer);
    SampledImage::from_image(&source, interpolation, WrapMode::Repeat)
}

/// Concentric rings around the center, single-channel float.
pub fn rings(size: u32, interpolation: Interpolation) -> Arc<SampledImage> {
    let mut texels = Vec::with_capacity((size * size) as usize);
    for y in 0..size {
        for x in 0..size {
            let dx = (x as f32 + 0.5) / size as f32 - 0.5;
            let dy = (y as f32 + 0.5) / size as f32 - 0.5;
            let r = (dx * dx + dy * dy).sqrt();
            texels.push(0.5 + 0.5 * (r * 40.0).sin());
        }
    }
    SampledImage::new(size, size, interpolation, WrapMode::Clamp, TexelData::GrayF32(texels))
}

/// Horizontal gradient stored in half floats.
pub fn ramp(size: u32, interpolation: Interpolation) -> Arc<SampledImage> {
    let mut texels = Vec::with_capacity((size * size) as usize);
    for _y in 0..size {
        for x in 0..size {
            texels.push(f16::from_f32(x as f32 / (size - 1) as f32));
        }
    }
    SampledImage::new(size, size, interpolation, WrapMode::Clamp, TexelData::GrayF16(texels))
}
