use crate::math::*;

/// Screen-space derivatives of a 2D coordinate: how far `uv` moves per
/// horizontal and per vertical output pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Differential2 {
    pub dx: Vec2,
    pub dy: Vec2,
}

impl Differential2 {
    pub const ZERO: Differential2 =
        Differential2 { dx: Vec2::new(0.0, 0.0), dy: Vec2::new(0.0, 0.0) };

    pub const fn new(dx: Vec2, dy: Vec2) -> Differential2 {
        Differential2 { dx, dy }
    }
}

impl Default for Differential2 {
    fn default() -> Differential2 {
        Differential2::ZERO
    }
}
