use mosaic::math::*;
use mosaic::texture::*;

mod textures;

fn add_single(store: &mut TextureStore, object: std::sync::Arc<SampledImage>) -> TextureId {
    let slot = store.add_image(object);
    store.add_texture(TextureEntry::Single(Some(slot)))
}

fn save_png(target: &Buffer<RGBA>, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let png = image::RgbaImage::from_raw(
        target.width as u32,
        target.height as u32,
        target.as_u8_slice().to_vec(),
    )
    .ok_or("bake buffer does not match its dimensions")?;
    png.save(path)?;
    println!("wrote {}", path);
    Ok(())
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("bakes")?;

    let mut store = TextureStore::new();

    // The same low-resolution checker under each filter, to eyeball blocky
    // vs smoothed vs reconstructed upscaling
    let nearest = add_single(&mut store, textures::checker(16, 8, Interpolation::Nearest));
    let linear = add_single(&mut store, textures::checker(16, 8, Interpolation::Linear));
    let cubic = add_single(&mut store, textures::checker(16, 8, Interpolation::Cubic));
    save_png(&bake(&store, nearest, 512, 512), "bakes/checker_nearest.png")?;
    save_png(&bake(&store, linear, 512, 512), "bakes/checker_bilinear.png")?;
    save_png(&bake(&store, cubic, 512, 512), "bakes/checker_bicubic.png")?;

    // Single-channel sources broadcast to opaque gray
    let rings = add_single(&mut store, textures::rings(64, Interpolation::Cubic));
    save_png(&bake(&store, rings, 512, 512), "bakes/rings_bicubic.png")?;

    let ramp = add_single(&mut store, textures::ramp(32, Interpolation::Linear));
    save_png(&bake(&store, ramp, 256, 256), "bakes/ramp_f16.png")?;

    // A 2x2 atlas with every tile state on display: two loaded tiles of
    // different resolutions, one still streaming, one permanently failed
    let coarse = store.add_image(textures::checker(16, 8, Interpolation::Linear));
    let fine = store.add_image(textures::rings(64, Interpolation::Cubic));
    let mut grid = TileGrid::new(2, 2);
    grid.set(0, 0, TileState::Loaded(coarse));
    grid.set(1, 1, TileState::Loaded(fine));
    grid.set(1, 0, TileState::NotLoaded);
    grid.set(0, 1, TileState::Failed);
    let atlas = store.add_texture(TextureEntry::Atlas {
        grid,
        wrap: WrapMode::Repeat,
        average: Vec4::new(0.45, 0.3, 0.2, 1.0),
    });
    save_png(&bake(&store, atlas, 512, 512), "bakes/atlas_states.png")?;

    // Three UDIM tiles along u, the rightmost left unbound on purpose
    let mut udim = UdimImage::new();
    udim.bind(0, 0, linear);
    udim.bind(1, 0, rings);
    let tiled = store.add_udim(udim);
    save_png(&bake_udim(&store, tiled, 0.0..3.0, 0.0..1.0, 768, 256), "bakes/udim_row.png")?;

    Ok(())
}
