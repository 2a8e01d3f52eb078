use super::*;
use crate::math::*;
use std::sync::Arc;

/// Handle into the texture entry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureId(pub u32);

impl TextureId {
    /// "Nothing bound". Sampling it yields `TEXTURE_MISSING` without any
    /// table access.
    pub const NONE: TextureId = TextureId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == TextureId::NONE
    }
}

/// Handle naming a virtual tiled (UDIM) image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageId(pub u32);

/// Handle into the image descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSlot(pub u32);

/// One texture binding. A texture resolves either through a single image or
/// through a tile grid, never both.
pub enum TextureEntry {
    /// Directly addressed image; None means nothing is bound.
    Single(Option<ImageSlot>),
    /// Virtual tiled storage: the residency grid, the wrap policy applied
    /// before tile lookup, and the average color shown while tiles stream in.
    Atlas { grid: TileGrid, wrap: WrapMode, average: Vec4 },
}

/// Table access the sampler works through. Tables stay read-only for the
/// duration of a sampling pass, so lookups hand out plain references.
pub trait TextureTables {
    fn texture_entry(&self, id: TextureId) -> &TextureEntry;

    fn image_desc(&self, slot: ImageSlot) -> &ImageDesc;

    /// Resolves an atlas position to a tile. `uv` must already be wrapped
    /// into [0, 1]. For a loaded tile the returned position is in the
    /// resolved image's own pixel space; for fallback states it is zero.
    fn map_tile(&self, entry: &TextureEntry, uv: Vec2, duv: Differential2) -> (TileState, Vec2);

    /// Maps a virtual image and coordinate to the texture of the tile under
    /// it, rebasing `uv` into that tile's unit square. `TextureId::NONE`
    /// when no tile covers the coordinate.
    fn map_udim(&self, id: ImageId, uv: &mut Vec2) -> TextureId;
}

/// A UDIM set: unit uv squares at integer offsets, each bound to its own
/// texture.
#[derive(Default)]
pub struct UdimImage {
    tiles: Vec<(u32, u32, TextureId)>,
}

impl UdimImage {
    pub fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// Binds the unit square with its origin at (x, y) to `texture`.
    pub fn bind(&mut self, x: u32, y: u32, texture: TextureId) {
        self.tiles.push((x, y, texture));
    }

    pub fn lookup(&self, x: u32, y: u32) -> TextureId {
        for &(tx, ty, id) in &self.tiles {
            if tx == x && ty == y {
                return id;
            }
        }
        TextureId::NONE
    }
}

/// Owns all three tables: texture entries, image descriptors and UDIM sets.
/// Registration happens up front; sampling borrows the store immutably.
#[derive(Default)]
pub struct TextureStore {
    textures: Vec<TextureEntry>,
    images: Vec<ImageDesc>,
    udims: Vec<UdimImage>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self { textures: Vec::new(), images: Vec::new(), udims: Vec::new() }
    }

    pub fn add_image(&mut self, object: Arc<SampledImage>) -> ImageSlot {
        self.images.push(ImageDesc::new(object));
        ImageSlot(self.images.len() as u32 - 1)
    }

    pub fn add_texture(&mut self, entry: TextureEntry) -> TextureId {
        self.textures.push(entry);
        TextureId(self.textures.len() as u32 - 1)
    }

    pub fn add_udim(&mut self, udim: UdimImage) -> ImageId {
        self.udims.push(udim);
        ImageId(self.udims.len() as u32 - 1)
    }

    /// Updates tile residency, e.g. when a streaming load finishes or fails.
    pub fn set_tile_state(&mut self, id: TextureId, x: u32, y: u32, state: TileState) {
        assert!((id.0 as usize) < self.textures.len(), "texture id out of bounds: {:?}", id);
        match &mut self.textures[id.0 as usize] {
            TextureEntry::Atlas { grid, .. } => grid.set(x, y, state),
            TextureEntry::Single(_) => panic!("texture {:?} is not an atlas", id),
        }
    }
}

impl TextureTables for TextureStore {
    fn texture_entry(&self, id: TextureId) -> &TextureEntry {
        assert!(
            (id.0 as usize) < self.textures.len(),
            "texture id out of bounds: {} >= {}",
            id.0,
            self.textures.len()
        );
        &self.textures[id.0 as usize]
    }

    fn image_desc(&self, slot: ImageSlot) -> &ImageDesc {
        assert!(
            (slot.0 as usize) < self.images.len(),
            "image slot out of bounds: {} >= {}",
            slot.0,
            self.images.len()
        );
        &self.images[slot.0 as usize]
    }

    fn map_tile(&self, entry: &TextureEntry, uv: Vec2, _duv: Differential2) -> (TileState, Vec2) {
        match entry {
            TextureEntry::Atlas { grid, .. } => {
                let (state, local) = grid.locate(uv);
                match state {
                    TileState::Loaded(slot) => {
                        // Tiles of one atlas may differ in resolution, so the
                        // position is rebased into the resolved image's own
                        // pixel space.
                        let desc = self.image_desc(slot);
                        let xy =
                            Vec2::new(local.x * desc.width as f32, local.y * desc.height as f32);
                        (state, xy)
                    }
                    TileState::NotLoaded | TileState::Failed => (state, Vec2::new(0.0, 0.0)),
                }
            }
            TextureEntry::Single(_) => panic!("map_tile called on a single-image entry"),
        }
    }

    fn map_udim(&self, id: ImageId, uv: &mut Vec2) -> TextureId {
        assert!(
            (id.0 as usize) < self.udims.len(),
            "image id out of bounds: {} >= {}",
            id.0,
            self.udims.len()
        );
        let udim = &self.udims[id.0 as usize];

        let tile = uv.floored();
        if tile.x < 0.0 || tile.y < 0.0 {
            return TextureId::NONE;
        }

        let found = udim.lookup(tile.x as u32, tile.y as u32);
        if !found.is_none() {
            *uv = *uv - tile;
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_gray(size: u32, value: f32) -> Arc<SampledImage> {
        SampledImage::new(
            size,
            size,
            Interpolation::Linear,
            WrapMode::Clamp,
            TexelData::GrayF32(vec![value; (size * size) as usize]),
        )
    }

    #[test]
    fn test_registration_round_trip() {
        let mut store = TextureStore::new();
        let slot = store.add_image(flat_gray(2, 0.5));
        let id = store.add_texture(TextureEntry::Single(Some(slot)));

        assert_eq!(slot, ImageSlot(0));
        assert_eq!(id, TextureId(0));
        assert_eq!(store.image_desc(slot).width, 2);
        match store.texture_entry(id) {
            TextureEntry::Single(Some(s)) => assert_eq!(*s, slot),
            _ => panic!("expected a single-image entry"),
        }
    }

    #[test]
    fn test_map_tile_rebases_into_tile_resolution() {
        let mut store = TextureStore::new();
        let big = store.add_image(flat_gray(4, 0.25));
        let small = store.add_image(flat_gray(2, 0.75));

        let mut grid = TileGrid::new(2, 1);
        grid.set(0, 0, TileState::Loaded(big));
        grid.set(1, 0, TileState::Loaded(small));
        let entry = TextureEntry::Atlas {
            grid,
            wrap: WrapMode::Repeat,
            average: Vec4::new(0.5, 0.5, 0.5, 1.0),
        };

        // The middle of the left tile, in the 4x4 image: (2, 2)
        let (state, xy) = store.map_tile(&entry, Vec2::new(0.25, 0.5), Differential2::ZERO);
        assert_eq!(state, TileState::Loaded(big));
        assert!((xy.x - 2.0).abs() < 1e-6);
        assert!((xy.y - 2.0).abs() < 1e-6);

        // The middle of the right tile, in the 2x2 image: (1, 1)
        let (state, xy) = store.map_tile(&entry, Vec2::new(0.75, 0.5), Differential2::ZERO);
        assert_eq!(state, TileState::Loaded(small));
        assert!((xy.x - 1.0).abs() < 1e-6);
        assert!((xy.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_map_tile_fallback_states_return_zero_position() {
        let store = TextureStore::new();
        let mut grid = TileGrid::new(2, 1);
        grid.set(1, 0, TileState::Failed);
        let entry = TextureEntry::Atlas {
            grid,
            wrap: WrapMode::Repeat,
            average: Vec4::new(0.0, 0.0, 0.0, 0.0),
        };

        let (state, xy) = store.map_tile(&entry, Vec2::new(0.25, 0.5), Differential2::ZERO);
        assert_eq!(state, TileState::NotLoaded);
        assert_eq!(xy, Vec2::new(0.0, 0.0));

        let (state, xy) = store.map_tile(&entry, Vec2::new(0.75, 0.5), Differential2::ZERO);
        assert_eq!(state, TileState::Failed);
        assert_eq!(xy, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_map_udim_rebases_uv() {
        let mut store = TextureStore::new();
        let slot = store.add_image(flat_gray(2, 0.5));
        let tex_a = store.add_texture(TextureEntry::Single(Some(slot)));
        let tex_b = store.add_texture(TextureEntry::Single(Some(slot)));

        let mut udim = UdimImage::new();
        udim.bind(0, 0, tex_a);
        udim.bind(1, 0, tex_b);
        let image = store.add_udim(udim);

        let mut uv = Vec2::new(1.25, 0.5);
        let id = store.map_udim(image, &mut uv);
        assert_eq!(id, tex_b);
        assert!((uv.x - 0.25).abs() < 1e-6);
        assert!((uv.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_map_udim_misses() {
        let mut store = TextureStore::new();
        let mut udim = UdimImage::new();
        udim.bind(0, 0, TextureId(0));
        let image = store.add_udim(udim);

        // an uncovered tile
        let mut uv = Vec2::new(2.5, 0.5);
        assert_eq!(store.map_udim(image, &mut uv), TextureId::NONE);
        // uv stays untouched on a miss
        assert_eq!(uv, Vec2::new(2.5, 0.5));

        // negative coordinates never resolve
        let mut uv = Vec2::new(-0.5, 0.5);
        assert_eq!(store.map_udim(image, &mut uv), TextureId::NONE);
    }

    #[test]
    fn test_set_tile_state() {
        let mut store = TextureStore::new();
        let slot = store.add_image(flat_gray(2, 0.5));
        let id = store.add_texture(TextureEntry::Atlas {
            grid: TileGrid::new(1, 1),
            wrap: WrapMode::Repeat,
            average: Vec4::new(0.5, 0.5, 0.5, 1.0),
        });

        store.set_tile_state(id, 0, 0, TileState::Loaded(slot));
        match store.texture_entry(id) {
            TextureEntry::Atlas { grid, .. } => {
                assert_eq!(grid.state(0, 0), TileState::Loaded(slot));
            }
            _ => panic!("expected an atlas entry"),
        }
    }
}
