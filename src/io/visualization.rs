//! Frame capture and GIF generation for a walk through the scene

use std::path::Path;

use image::{Delay, Frame, RgbaImage};

use crate::game::scene::Scene;
use crate::io::configuration::FINAL_FRAME_HOLD;
use crate::io::error::{FovError, Result, file_system_error};
use crate::io::image::{ensure_parent_dir, render_frame};
use crate::spatial::map::TileMap;

/// Records one rendered frame per tick
#[derive(Debug, Clone)]
pub struct WalkCapture {
    frames: Vec<RgbaImage>,
    scale: u32,
}

impl WalkCapture {
    /// Create an empty capture painting `scale` pixels per cell
    pub const fn new(scale: u32) -> Self {
        Self {
            frames: Vec::new(),
            scale,
        }
    }

    /// Render and store the current scene
    pub fn record<M: TileMap>(&mut self, scene: &Scene<M>, player: (i32, i32)) {
        self.frames.push(render_frame(scene, player, self.scale));
    }

    /// Number of recorded frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Recorded frames in capture order
    pub fn frames(&self) -> &[RgbaImage] {
        &self.frames
    }

    /// Export the captured frames as an animated GIF
    ///
    /// The last frame is held [`FINAL_FRAME_HOLD`] times longer so the end
    /// of the walk stays readable when the animation loops.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(FovError::EmptyCapture);
        }

        ensure_parent_dir(output_path)?;
        let file = std::fs::File::create(output_path)
            .map_err(|e| file_system_error(output_path, "create file", e))?;

        let last = self.frames.len() - 1;
        let frames = self.frames.iter().enumerate().map(|(index, img)| {
            let delay = if index == last {
                frame_delay_ms.saturating_mul(FINAL_FRAME_HOLD)
            } else {
                frame_delay_ms
            };
            Frame::from_parts(img.clone(), 0, 0, Delay::from_numer_denom_ms(delay, 1))
        });

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| FovError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        log::info!(
            "wrote {} frame walk to '{}'",
            self.frames.len(),
            output_path.display()
        );
        Ok(())
    }
}
