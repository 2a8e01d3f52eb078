use super::*;
use crate::math::*;

/// Returned whenever a lookup cannot be resolved at all: no texture bound,
/// a tile that permanently failed to load, or a UDIM miss.
pub const TEXTURE_MISSING: Vec4 = Vec4::new(1.0, 0.0, 1.0, 1.0);

/// Samples a texture at `uv`. This is the whole resolution chain: figure out
/// which image the texture points at (directly, or through wrap + tile
/// lookup), then filter that image at the rebased coordinate.
///
/// The three failure colors stay distinct on purpose: an unbound or failed
/// lookup shows `TEXTURE_MISSING`, a Clip rejection is transparent black,
/// and a tile that merely has not streamed in yet shows the atlas average.
pub fn sample<Tables>(tables: &Tables, id: TextureId, uv: Vec2, duv: Differential2) -> Vec4
where
    Tables: TextureTables + ?Sized,
{
    if id.is_none() {
        return TEXTURE_MISSING;
    }

    let entry = tables.texture_entry(id);
    let desc;
    let mut uv = uv;

    match entry {
        TextureEntry::Atlas { wrap, average, .. } => {
            if !wrap_uv(*wrap, &mut uv) {
                // Clip rejection: outside the atlas there is valid "nothing"
                return Vec4::new(0.0, 0.0, 0.0, 0.0);
            }

            let (state, xy) = tables.map_tile(entry, uv, duv);
            match state {
                TileState::Loaded(slot) => {
                    desc = tables.image_desc(slot);
                    // Back from tile pixel space to the resolved image's
                    // normalized coordinates
                    uv = Vec2::new(xy.x / desc.width as f32, xy.y / desc.height as f32);
                }
                TileState::NotLoaded => return *average,
                TileState::Failed => return TEXTURE_MISSING,
            }
        }
        TextureEntry::Single(Some(slot)) => {
            desc = tables.image_desc(*slot);
        }
        TextureEntry::Single(None) => return TEXTURE_MISSING,
    }

    sample_image(desc, uv)
}

/// Samples a resolved image: four-channel formats filter as full RGBA,
/// single-channel formats filter as a scalar broadcast to opaque gray.
pub fn sample_image(desc: &ImageDesc, uv: Vec2) -> Vec4 {
    let object = desc.object.as_ref();

    if desc.format.channels() == 4 {
        if desc.interpolation.cubic_reconstruction() {
            sample_bicubic::<Vec4>(object, uv)
        } else {
            object.read(uv.x, uv.y)
        }
    } else {
        let value: f32 = if desc.interpolation.cubic_reconstruction() {
            sample_bicubic::<f32>(object, uv)
        } else {
            object.read(uv.x, uv.y)
        };
        Vec4::new(value, value, value, 1.0)
    }
}

/// Samples a virtual tiled image: resolves the UDIM tile under `uv` first,
/// then samples the tile's texture with the rebased coordinate.
pub fn sample_udim<Tables>(tables: &Tables, image: ImageId, uv: Vec2, duv: Differential2) -> Vec4
where
    Tables: TextureTables + ?Sized,
{
    let mut uv = uv;
    let id = tables.map_udim(image, &mut uv);
    if id.is_none() {
        return TEXTURE_MISSING;
    }
    sample(tables, id, uv, duv)
}
