use super::*;
use crate::math::*;

/// How coordinates outside [0, 1] map back into the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    Repeat,
    Clamp,
    Mirror,
    /// Outside coordinates do not resolve at all; lookups yield
    /// transparent black instead of wrapped texels.
    Clip,
}

/// Applies the wrap mode to a normalized coordinate in place. Returns false
/// when the coordinate is rejected, which only Clip does.
pub fn wrap_uv(mode: WrapMode, uv: &mut Vec2) -> bool {
    match mode {
        WrapMode::Repeat => {
            *uv = *uv - uv.floored();
            true
        }
        WrapMode::Clamp => {
            *uv = uv.clamped(0.0, 1.0);
            true
        }
        WrapMode::Mirror => {
            uv.x = mirror(uv.x);
            uv.y = mirror(uv.y);
            true
        }
        WrapMode::Clip => uv.x >= 0.0 && uv.x <= 1.0 && uv.y >= 0.0 && uv.y <= 1.0,
    }
}

// Triangle wave with period 2: 0..1 maps forward, 1..2 maps backward
fn mirror(x: f32) -> f32 {
    let m = x.rem_euclid(2.0);
    1.0 - (m - 1.0).abs()
}

/// Residency of one tile. Loaded tiles carry the slot of their pixel data;
/// the two fallback states render as the average color and the missing
/// sentinel respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    Loaded(ImageSlot),
    /// Registered but not streamed in yet.
    NotLoaded,
    /// Permanently absent; loading was attempted and gave up.
    Failed,
}

/// A fixed grid of tile states covering the unit square.
pub struct TileGrid {
    tiles_x: u32,
    tiles_y: u32,
    tiles: Vec<TileState>,
}

impl TileGrid {
    pub fn new(tiles_x: u32, tiles_y: u32) -> Self {
        assert!(tiles_x > 0);
        assert!(tiles_y > 0);
        let tiles = vec![TileState::NotLoaded; (tiles_x * tiles_y) as usize];
        Self { tiles_x, tiles_y, tiles }
    }

    pub fn from_states(tiles_x: u32, tiles_y: u32, tiles: Vec<TileState>) -> Self {
        assert!(tiles_x > 0);
        assert!(tiles_y > 0);
        assert_eq!(
            tiles.len(),
            (tiles_x * tiles_y) as usize,
            "tile count {} does not match {}x{}",
            tiles.len(),
            tiles_x,
            tiles_y
        );
        Self { tiles_x, tiles_y, tiles }
    }

    pub fn tiles_x(&self) -> u32 {
        self.tiles_x
    }

    pub fn tiles_y(&self) -> u32 {
        self.tiles_y
    }

    pub fn state(&self, x: u32, y: u32) -> TileState {
        assert!(x < self.tiles_x, "tile x out of bounds: {} >= {}", x, self.tiles_x);
        assert!(y < self.tiles_y, "tile y out of bounds: {} >= {}", y, self.tiles_y);
        self.tiles[(y * self.tiles_x + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, state: TileState) {
        assert!(x < self.tiles_x, "tile x out of bounds: {} >= {}", x, self.tiles_x);
        assert!(y < self.tiles_y, "tile y out of bounds: {} >= {}", y, self.tiles_y);
        self.tiles[(y * self.tiles_x + x) as usize] = state;
    }

    /// Locates the tile under an already wrapped coordinate and returns its
    /// state together with the position inside the tile, both in [0, 1].
    pub fn locate(&self, uv: Vec2) -> (TileState, Vec2) {
        let sx = uv.x * self.tiles_x as f32;
        let sy = uv.y * self.tiles_y as f32;

        // uv = 1.0 lands on the far edge of the last tile, not past it
        let tx = (sx.floor() as u32).min(self.tiles_x - 1);
        let ty = (sy.floor() as u32).min(self.tiles_y - 1);

        let local = Vec2::new(sx - tx as f32, sy - ty as f32);
        (self.state(tx, ty), local)
    }
}
