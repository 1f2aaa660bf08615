//! Tests for walk capture and GIF export

#[cfg(test)]
mod tests {
    use shadowfov::io::visualization::WalkCapture;
    use shadowfov::{FovError, GridMap, Scene};
    use tempfile::TempDir;

    // Tests every recorded frame is kept at the capture scale
    // Verified by overwriting the previous frame
    #[test]
    fn test_record_frames() {
        let mut scene = Scene::new(GridMap::new(4, 3).unwrap());
        let mut capture = WalkCapture::new(2);
        assert_eq!(capture.frame_count(), 0);

        scene.compute_fov(0, 0, 3);
        capture.record(&scene, (0, 0));
        scene.clear_fov();
        scene.compute_fov(1, 0, 3);
        capture.record(&scene, (1, 0));

        assert_eq!(capture.frame_count(), 2);
        assert!(capture.frames().iter().all(|f| f.dimensions() == (8, 6)));
        assert_ne!(capture.frames()[0], capture.frames()[1]);
    }

    // Tests an empty capture cannot be exported
    // Verified by writing an empty GIF
    #[test]
    fn test_export_empty_capture() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("walk.gif");

        let result = WalkCapture::new(4).export_gif(&path, 100);
        assert!(matches!(result, Err(FovError::EmptyCapture)));
        assert!(!path.exists());
    }

    // Tests the exported animation decodes with all frames
    // Verified by encoding only the last frame
    #[test]
    fn test_export_gif_frames() {
        use image::AnimationDecoder;
        use image::codecs::gif::GifDecoder;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("walk.gif");
        let mut scene = Scene::new(GridMap::new(3, 3).unwrap());
        let mut capture = WalkCapture::new(1);
        for x in 0..3 {
            scene.clear_fov();
            scene.compute_fov(x, 1, 1);
            capture.record(&scene, (x, 1));
        }

        capture.export_gif(&path, 50).unwrap();

        let file = std::io::BufReader::new(std::fs::File::open(&path).unwrap());
        let frames = GifDecoder::new(file)
            .unwrap()
            .into_frames()
            .collect_frames()
            .unwrap();
        assert_eq!(frames.len(), 3);
    }
}
