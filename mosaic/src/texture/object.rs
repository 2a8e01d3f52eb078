use super::*;
use crate::math::*;
use half::f16;
use std::sync::Arc;

/// Typed texel storage, one vector per supported format.
pub enum TexelData {
    RgbaF32(Vec<[f32; 4]>),
    RgbaF16(Vec<[f16; 4]>),
    RgbaU16(Vec<[u16; 4]>),
    RgbaU8(Vec<[u8; 4]>),
    GrayF32(Vec<f32>),
    GrayF16(Vec<f16>),
    GrayU16(Vec<u16>),
    GrayU8(Vec<u8>),
}

impl TexelData {
    pub fn format(&self) -> TexelFormat {
        match self {
            TexelData::RgbaF32(_) => TexelFormat::RgbaF32,
            TexelData::RgbaF16(_) => TexelFormat::RgbaF16,
            TexelData::RgbaU16(_) => TexelFormat::RgbaU16,
            TexelData::RgbaU8(_) => TexelFormat::RgbaU8,
            TexelData::GrayF32(_) => TexelFormat::GrayF32,
            TexelData::GrayF16(_) => TexelFormat::GrayF16,
            TexelData::GrayU16(_) => TexelFormat::GrayU16,
            TexelData::GrayU8(_) => TexelFormat::GrayU8,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TexelData::RgbaF32(texels) => texels.len(),
            TexelData::RgbaF16(texels) => texels.len(),
            TexelData::RgbaU16(texels) => texels.len(),
            TexelData::RgbaU8(texels) => texels.len(),
            TexelData::GrayF32(texels) => texels.len(),
            TexelData::GrayF16(texels) => texels.len(),
            TexelData::GrayU16(texels) => texels.len(),
            TexelData::GrayU8(texels) => texels.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Immutable pixel storage behind an `ImageDesc`. Reads take normalized
/// coordinates under the texel-center convention: texel (i, j) sits at
/// ((i + 0.5) / width, (j + 0.5) / height).
pub struct SampledImage {
    width: u32,
    height: u32,
    interpolation: Interpolation,
    wrap: WrapMode,
    data: TexelData,
}

/// Normalized-coordinate fetch returning either a full color or a scalar,
/// filtered per the image's interpolation (nearest or bilinear).
pub trait TexelRead<T> {
    fn read(&self, u: f32, v: f32) -> T;
}

impl SampledImage {
    pub fn new(
        width: u32,
        height: u32,
        interpolation: Interpolation,
        wrap: WrapMode,
        data: TexelData,
    ) -> Arc<Self> {
        assert!(width > 0);
        assert!(height > 0);
        assert_eq!(
            data.len(),
            width as usize * height as usize,
            "texel count {} does not match {}x{}",
            data.len(),
            width,
            height
        );
        Arc::new(Self { width, height, interpolation, wrap, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> TexelFormat {
        self.data.format()
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn wrap(&self) -> WrapMode {
        self.wrap
    }

    // Applies the wrap mode to a texel coordinate; None is the Clip border.
    fn address(&self, x: i32, y: i32) -> Option<usize> {
        let x = wrap_texel(self.wrap, x, self.width as i32)?;
        let y = wrap_texel(self.wrap, y, self.height as i32)?;
        Some(y as usize * self.width as usize + x as usize)
    }

    // Fetches one texel with wrap addressing; the Clip border reads as zero.
    fn texel<T: SampleValue>(&self, x: i32, y: i32, decode: fn(&SampledImage, usize) -> T) -> T {
        match self.address(x, y) {
            Some(index) => decode(self, index),
            None => T::ZERO,
        }
    }

    fn decode_vec4(&self, index: usize) -> Vec4 {
        match &self.data {
            TexelData::RgbaF32(texels) => {
                let [r, g, b, a] = texels[index];
                Vec4::new(r, g, b, a)
            }
            TexelData::RgbaF16(texels) => {
                let [r, g, b, a] = texels[index];
                Vec4::new(r.to_f32(), g.to_f32(), b.to_f32(), a.to_f32())
            }
            TexelData::RgbaU16(texels) => {
                let [r, g, b, a] = texels[index];
                Vec4::new(normalize_u16(r), normalize_u16(g), normalize_u16(b), normalize_u16(a))
            }
            TexelData::RgbaU8(texels) => {
                let [r, g, b, a] = texels[index];
                Vec4::new(normalize_u8(r), normalize_u8(g), normalize_u8(b), normalize_u8(a))
            }
            // Single-channel storage: missing components read as (0, 0, 0, 1)
            _ => {
                let f = self.decode_f32(index);
                Vec4::new(f, 0.0, 0.0, 1.0)
            }
        }
    }

    fn decode_f32(&self, index: usize) -> f32 {
        match &self.data {
            TexelData::GrayF32(texels) => texels[index],
            TexelData::GrayF16(texels) => texels[index].to_f32(),
            TexelData::GrayU16(texels) => normalize_u16(texels[index]),
            TexelData::GrayU8(texels) => normalize_u8(texels[index]),
            // Four-channel storage: a scalar read takes the first channel
            TexelData::RgbaF32(texels) => texels[index][0],
            TexelData::RgbaF16(texels) => texels[index][0].to_f32(),
            TexelData::RgbaU16(texels) => normalize_u16(texels[index][0]),
            TexelData::RgbaU8(texels) => normalize_u8(texels[index][0]),
        }
    }

    // Shared nearest/bilinear machinery; the decode function picks the type.
    fn read_filtered<T: SampleValue>(
        &self,
        u: f32,
        v: f32,
        decode: fn(&SampledImage, usize) -> T,
    ) -> T {
        let width = self.width as f32;
        let height = self.height as f32;

        if self.interpolation == Interpolation::Nearest {
            let x = (u * width).floor() as i32;
            let y = (v * height).floor() as i32;
            return self.texel(x, y, decode);
        }

        // Bilinear, in the same half-texel convention the taps assume
        let x = u * width - 0.5;
        let y = v * height - 0.5;
        let px = x.floor();
        let py = y.floor();
        let fx = x - px;
        let fy = y - py;
        let x0 = px as i32;
        let y0 = py as i32;

        let t00 = self.texel(x0, y0, decode);
        let t10 = self.texel(x0 + 1, y0, decode);
        let t01 = self.texel(x0, y0 + 1, decode);
        let t11 = self.texel(x0 + 1, y0 + 1, decode);

        (t00 * (1.0 - fx) + t10 * fx) * (1.0 - fy) + (t01 * (1.0 - fx) + t11 * fx) * fy
    }
}

impl TexelRead<Vec4> for SampledImage {
    fn read(&self, u: f32, v: f32) -> Vec4 {
        self.read_filtered(u, v, SampledImage::decode_vec4)
    }
}

impl TexelRead<f32> for SampledImage {
    fn read(&self, u: f32, v: f32) -> f32 {
        self.read_filtered(u, v, SampledImage::decode_f32)
    }
}

fn wrap_texel(mode: WrapMode, i: i32, n: i32) -> Option<i32> {
    match mode {
        WrapMode::Repeat => Some(i.rem_euclid(n)),
        WrapMode::Clamp => Some(i.clamp(0, n - 1)),
        WrapMode::Mirror => {
            let m = i.rem_euclid(2 * n);
            Some(if m < n { m } else { 2 * n - 1 - m })
        }
        WrapMode::Clip => {
            if i < 0 || i >= n {
                None
            } else {
                Some(i)
            }
        }
    }
}

fn normalize_u8(v: u8) -> f32 {
    v as f32 / 255.0
}

fn normalize_u16(v: u16) -> f32 {
    v as f32 / 65535.0
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2x2 gray checker:
    //   0.0  1.0
    //   1.0  0.0
    fn gray_checker(interpolation: Interpolation, wrap: WrapMode) -> Arc<SampledImage> {
        SampledImage::new(2, 2, interpolation, wrap, TexelData::GrayF32(vec![0.0, 1.0, 1.0, 0.0]))
    }

    #[test]
    fn test_wrap_texel_repeat() {
        assert_eq!(wrap_texel(WrapMode::Repeat, 0, 4), Some(0));
        assert_eq!(wrap_texel(WrapMode::Repeat, 5, 4), Some(1));
        assert_eq!(wrap_texel(WrapMode::Repeat, -1, 4), Some(3));
        assert_eq!(wrap_texel(WrapMode::Repeat, -5, 4), Some(3));
    }

    #[test]
    fn test_wrap_texel_clamp() {
        assert_eq!(wrap_texel(WrapMode::Clamp, -3, 4), Some(0));
        assert_eq!(wrap_texel(WrapMode::Clamp, 2, 4), Some(2));
        assert_eq!(wrap_texel(WrapMode::Clamp, 9, 4), Some(3));
    }

    #[test]
    fn test_wrap_texel_mirror() {
        // n = 2 reflects as 0 1 | 1 0 | 0 1 ...
        assert_eq!(wrap_texel(WrapMode::Mirror, -1, 2), Some(0));
        assert_eq!(wrap_texel(WrapMode::Mirror, 0, 2), Some(0));
        assert_eq!(wrap_texel(WrapMode::Mirror, 1, 2), Some(1));
        assert_eq!(wrap_texel(WrapMode::Mirror, 2, 2), Some(1));
        assert_eq!(wrap_texel(WrapMode::Mirror, 3, 2), Some(0));
        assert_eq!(wrap_texel(WrapMode::Mirror, 4, 2), Some(0));
    }

    #[test]
    fn test_wrap_texel_clip() {
        assert_eq!(wrap_texel(WrapMode::Clip, -1, 4), None);
        assert_eq!(wrap_texel(WrapMode::Clip, 0, 4), Some(0));
        assert_eq!(wrap_texel(WrapMode::Clip, 3, 4), Some(3));
        assert_eq!(wrap_texel(WrapMode::Clip, 4, 4), None);
    }

    #[test]
    fn test_nearest_read() {
        let image = gray_checker(Interpolation::Nearest, WrapMode::Clamp);

        // (0.3, 0.7) falls in texel (0, 1) = 1.0
        let value: f32 = image.read(0.3, 0.7);
        assert_eq!(value, 1.0);

        // (0.7, 0.7) falls in texel (1, 1) = 0.0
        let value: f32 = image.read(0.7, 0.7);
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_bilinear_read_at_center() {
        let image = gray_checker(Interpolation::Linear, WrapMode::Clamp);

        // The exact center blends all four texels evenly:
        // 0.25*0 + 0.25*1 + 0.25*1 + 0.25*0 = 0.5
        let value: f32 = image.read(0.5, 0.5);
        assert!((value - 0.5).abs() < 1e-6, "center read: {}", value);

        // (0.25, 0.25) is the center of texel (0, 0), zero phase
        let value: f32 = image.read(0.25, 0.25);
        assert!((value - 0.0).abs() < 1e-6, "texel-center read: {}", value);
    }

    #[test]
    fn test_clip_reads_zero_border() {
        let image = gray_checker(Interpolation::Nearest, WrapMode::Clip);

        let inside: f32 = image.read(0.3, 0.7);
        assert_eq!(inside, 1.0);

        let outside: f32 = image.read(-0.3, 0.7);
        assert_eq!(outside, 0.0);

        // Bilinear at the very edge blends toward the zero border:
        // u = 0.0 is halfway between the border and texel (0, 1) = 1.0
        let image = gray_checker(Interpolation::Linear, WrapMode::Clip);
        let edge: f32 = image.read(0.0, 0.75);
        assert!((edge - 0.5).abs() < 1e-6, "edge read: {}", edge);
    }

    #[test]
    fn test_repeat_reads_from_the_opposite_edge() {
        let image = gray_checker(Interpolation::Linear, WrapMode::Repeat);

        // u = 0.0 is halfway between texel (1, .) and texel (0, .):
        // row 0 blends 0.5*1 + 0.5*0 = 0.5
        let value: f32 = image.read(0.0, 0.25);
        assert!((value - 0.5).abs() < 1e-6, "seam read: {}", value);
    }

    #[test]
    fn test_integer_format_normalization() {
        let image = SampledImage::new(
            2,
            1,
            Interpolation::Nearest,
            WrapMode::Clamp,
            TexelData::GrayU8(vec![0, 51]),
        );
        let value: f32 = image.read(0.75, 0.5);
        // 51 / 255 = 0.2
        assert!((value - 0.2).abs() < 1e-6);

        let image = SampledImage::new(
            2,
            1,
            Interpolation::Nearest,
            WrapMode::Clamp,
            TexelData::GrayU16(vec![0, 13107]),
        );
        let value: f32 = image.read(0.75, 0.5);
        // 13107 / 65535 = 0.2
        assert!((value - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_half_format_decoding() {
        let texels = vec![[f16::from_f32(0.25), f16::ZERO, f16::from_f32(1.0), f16::ONE]];
        let image =
            SampledImage::new(1, 1, Interpolation::Nearest, WrapMode::Clamp, TexelData::RgbaF16(texels));
        let color: Vec4 = image.read(0.5, 0.5);
        assert_eq!(color, Vec4::new(0.25, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_scalar_read_of_rgba_takes_first_channel() {
        let image = SampledImage::new(
            1,
            1,
            Interpolation::Nearest,
            WrapMode::Clamp,
            TexelData::RgbaF32(vec![[0.3, 0.6, 0.9, 1.0]]),
        );
        let value: f32 = image.read(0.5, 0.5);
        assert_eq!(value, 0.3);
    }

    #[test]
    fn test_color_read_of_gray_fills_missing_channels() {
        let image = SampledImage::new(
            1,
            1,
            Interpolation::Nearest,
            WrapMode::Clamp,
            TexelData::GrayF32(vec![0.6]),
        );
        let color: Vec4 = image.read(0.5, 0.5);
        assert_eq!(color, Vec4::new(0.6, 0.0, 0.0, 1.0));
    }
}
