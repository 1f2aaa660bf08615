//! PNG export of a single redraw frame

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::game::scene::Scene;
use crate::io::error::{FovError, Result, file_system_error, invalid_parameter};
use crate::io::render::classify;
use crate::spatial::map::TileMap;

/// Paint the scene with `scale` pixels per cell
///
/// A scale of zero is treated as one.
pub fn render_frame<M: TileMap>(scene: &Scene<M>, player: (i32, i32), scale: u32) -> RgbaImage {
    let scale = scale.max(1);
    let map = scene.map();
    let width = map.width().max(0) as u32;
    let height = map.height().max(0) as u32;

    RgbaImage::from_fn(width * scale, height * scale, |px, py| {
        let x = (px / scale) as i32;
        let y = (py / scale) as i32;
        Rgba(classify(scene, player, x, y).color())
    })
}

/// Render the scene and save it as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The scaled image would not fit in `u32` pixel dimensions
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png<M: TileMap>(
    scene: &Scene<M>,
    player: (i32, i32),
    scale: u32,
    output_path: &Path,
) -> Result<()> {
    let map = scene.map();
    let fits = |side: i32| (side.max(0) as u32).checked_mul(scale.max(1)).is_some();
    if !fits(map.width()) || !fits(map.height()) {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &"scaled image exceeds the maximum image size",
        ));
    }

    let img = render_frame(scene, player, scale);
    ensure_parent_dir(output_path)?;
    img.save(output_path).map_err(|e| FovError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    log::info!(
        "wrote {}x{} frame to '{}'",
        img.width(),
        img.height(),
        output_path.display()
    );
    Ok(())
}

/// Create the parent directory of `path` if it has one
///
/// # Errors
///
/// Returns a file system error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }
    Ok(())
}
