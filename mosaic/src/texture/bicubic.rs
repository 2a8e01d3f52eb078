use super::*;
use crate::math::*;

/// A value the filtering arithmetic can weight and accumulate. The same tap
/// combination runs on full RGBA colors and on single-channel scalars.
pub trait SampleValue:
    Copy + std::ops::Add<Output = Self> + std::ops::Mul<f32, Output = Self>
{
    const ZERO: Self;
}

impl SampleValue for f32 {
    const ZERO: f32 = 0.0;
}

impl SampleValue for Vec4 {
    const ZERO: Vec4 = Vec4::new(0.0, 0.0, 0.0, 0.0);
}

// w0..w3 are the four cubic B-spline basis functions
pub fn cubic_w0(a: f32) -> f32 {
    (1.0 / 6.0) * (a * (a * (-a + 3.0) - 3.0) + 1.0)
}

pub fn cubic_w1(a: f32) -> f32 {
    (1.0 / 6.0) * (a * a * (3.0 * a - 6.0) + 4.0)
}

pub fn cubic_w2(a: f32) -> f32 {
    (1.0 / 6.0) * (a * (a * (-3.0 * a + 3.0) + 3.0) + 1.0)
}

pub fn cubic_w3(a: f32) -> f32 {
    (1.0 / 6.0) * (a * a * a)
}

// g0 and g1 are the two amplitude functions
pub fn cubic_g0(a: f32) -> f32 {
    cubic_w0(a) + cubic_w1(a)
}

pub fn cubic_g1(a: f32) -> f32 {
    cubic_w2(a) + cubic_w3(a)
}

// h0 and h1 are the two offset functions
pub fn cubic_h0(a: f32) -> f32 {
    (cubic_w1(a) / cubic_g0(a)) - 1.0
}

pub fn cubic_h1(a: f32) -> f32 {
    (cubic_w3(a) / cubic_g1(a)) + 1.0
}

/// Cubic B-spline reconstruction built from four bilinear reads.
///
/// The full 16-texel weighted sum factorizes per axis: the four basis weights
/// collapse into two amplitudes (g0, g1) applied at two fractional offsets
/// (h0, h1), so 2x2 bilinear taps touch exactly the texels the full sum would.
pub fn sample_bicubic<T>(image: &SampledImage, uv: Vec2) -> T
where
    T: SampleValue,
    SampledImage: TexelRead<T>,
{
    let width = image.width() as f32;
    let height = image.height() as f32;

    let x = uv.x * width - 0.5;
    let y = uv.y * height - 0.5;
    let px = x.floor();
    let py = y.floor();
    let fx = x - px;
    let fy = y - py;

    let g0x = cubic_g0(fx);
    let g1x = cubic_g1(fx);

    // Tap positions carry a half-texel offset because the read primitive
    // addresses texel centers.
    let x0 = (px + cubic_h0(fx) + 0.5) / width;
    let x1 = (px + cubic_h1(fx) + 0.5) / width;
    let y0 = (py + cubic_h0(fy) + 0.5) / height;
    let y1 = (py + cubic_h1(fy) + 0.5) / height;

    let s00: T = image.read(x0, y0);
    let s10: T = image.read(x1, y0);
    let s01: T = image.read(x0, y1);
    let s11: T = image.read(x1, y1);

    (s00 * g0x + s10 * g1x) * cubic_g0(fy) + (s01 * g0x + s11 * g1x) * cubic_g1(fy)
}
