//! Tests for frame rendering and PNG export

#[cfg(test)]
mod tests {
    use image::Rgba;
    use shadowfov::io::configuration::{
        LIT_FLOOR_COLOR, LIT_WALL_COLOR, PLAYER_COLOR, UNSEEN_COLOR,
    };
    use shadowfov::io::image::{ensure_parent_dir, export_png, render_frame};
    use shadowfov::{GridMap, Scene, TileMap};
    use tempfile::TempDir;

    fn corridor_scene() -> Scene {
        let mut scene = Scene::new(GridMap::new(5, 1).unwrap());
        scene.map_mut().set_blocked(3, 0, true);
        scene.compute_fov(1, 0, 4);
        scene
    }

    // Tests each cell becomes a scale-sized block of its glyph color
    // Verified by painting walls with the floor color
    #[test]
    fn test_render_frame_colors() {
        let scene = corridor_scene();
        let img = render_frame(&scene, (1, 0), 3);

        assert_eq!(img.dimensions(), (15, 3));
        assert_eq!(*img.get_pixel(0, 0), Rgba(LIT_FLOOR_COLOR));
        assert_eq!(*img.get_pixel(4, 2), Rgba(PLAYER_COLOR));
        assert_eq!(*img.get_pixel(9, 1), Rgba(LIT_WALL_COLOR));
        assert_eq!(*img.get_pixel(14, 2), Rgba(UNSEEN_COLOR));
    }

    // Tests a zero scale still paints one pixel per cell
    // Verified by multiplying by the raw scale
    #[test]
    fn test_render_frame_zero_scale() {
        let scene = corridor_scene();
        assert_eq!(render_frame(&scene, (1, 0), 0).dimensions(), (5, 1));
    }

    // Tests PNG export creates missing directories and a readable image
    // Verified by skipping directory creation
    #[test]
    fn test_export_png_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("frames").join("final.png");

        export_png(&corridor_scene(), (1, 0), 2, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (10, 2));
        assert_eq!(*loaded.get_pixel(2, 0), Rgba(PLAYER_COLOR));
    }

    // Tests a scale overflowing the image size is rejected before rendering
    // Verified by removing the overflow check
    #[test]
    fn test_export_png_rejects_huge_scale() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("huge.png");

        let result = export_png(&corridor_scene(), (1, 0), u32::MAX, &path);
        assert!(result.is_err());
        assert!(!path.exists());
    }

    // Tests bare file names need no directory
    // Verified by creating the empty parent
    #[test]
    fn test_ensure_parent_dir_bare_name() {
        ensure_parent_dir(std::path::Path::new("frame.png")).unwrap();
    }
}
