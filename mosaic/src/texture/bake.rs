use super::*;
use crate::math::*;
use rayon::prelude::*;
use std::ops::Range;

/// Evaluates `sample` at every pixel center of a width x height target
/// covering the unit uv square. Rows run in parallel; sampling only reads
/// the tables.
pub fn bake<Tables>(tables: &Tables, id: TextureId, width: usize, height: usize) -> Buffer<RGBA>
where
    Tables: TextureTables + Sync + ?Sized,
{
    bake_with(|uv, duv| sample(tables, id, uv, duv), 0.0..1.0, 0.0..1.0, width, height)
}

/// Same as `bake` for a virtual tiled image over an arbitrary uv window,
/// e.g. 0.0..2.0 horizontally to cover a two-tile UDIM row.
pub fn bake_udim<Tables>(
    tables: &Tables,
    image: ImageId,
    u: Range<f32>,
    v: Range<f32>,
    width: usize,
    height: usize,
) -> Buffer<RGBA>
where
    Tables: TextureTables + Sync + ?Sized,
{
    bake_with(|uv, duv| sample_udim(tables, image, uv, duv), u, v, width, height)
}

fn bake_with<F>(eval: F, u: Range<f32>, v: Range<f32>, width: usize, height: usize) -> Buffer<RGBA>
where
    F: Fn(Vec2, Differential2) -> Vec4 + Sync,
{
    assert!(width > 0);
    assert!(height > 0);

    let mut target = Buffer::<RGBA>::new(width, height);
    let du = (u.end - u.start) / width as f32;
    let dv = (v.end - v.start) / height as f32;

    // One output pixel step in uv space
    let duv = Differential2::new(Vec2::new(du, 0.0), Vec2::new(0.0, dv));

    let stride = target.stride;
    target.elems.par_chunks_mut(stride).enumerate().for_each(|(y, row)| {
        let cy = v.start + (y as f32 + 0.5) * dv;
        for (x, out) in row.iter_mut().enumerate() {
            let cx = u.start + (x as f32 + 0.5) * du;
            *out = RGBA::from_vec4(eval(Vec2::new(cx, cy), duv));
        }
    });

    target
}
