//! Tests for glyph classification and ASCII rendering

#[cfg(test)]
mod tests {
    use shadowfov::io::render::{Glyph, classify, describe, render_ascii};
    use shadowfov::{GridMap, Scene, TileMap};

    fn corridor_scene() -> Scene {
        let mut scene = Scene::new(GridMap::new(5, 1).unwrap());
        scene.map_mut().set_blocked(3, 0, true);
        scene.compute_fov(1, 0, 4);
        scene
    }

    // Tests visibility decides lit versus unseen and blocking picks the lit glyph
    // Verified by checking blocking before visibility
    #[test]
    fn test_classify_cells() {
        let scene = corridor_scene();

        assert_eq!(classify(&scene, (1, 0), 1, 0), Glyph::Player);
        assert_eq!(classify(&scene, (1, 0), 0, 0), Glyph::LitFloor);
        assert_eq!(classify(&scene, (1, 0), 3, 0), Glyph::LitWall);
        assert_eq!(classify(&scene, (1, 0), 4, 0), Glyph::Unseen);
        assert_eq!(classify(&scene, (1, 0), -1, 0), Glyph::Unseen);
    }

    // Tests the text frame has one full-width line per row
    // Verified by trimming trailing spaces
    #[test]
    fn test_render_ascii_frame() {
        let scene = corridor_scene();
        assert_eq!(render_ascii(&scene, (1, 0)), ".@.# \n");

        let mut tall = Scene::new(GridMap::new(3, 2).unwrap());
        tall.compute_fov(0, 0, 0);
        assert_eq!(render_ascii(&tall, (0, 0)), "@  \n   \n");
    }

    // Tests the player glyph wins even outside the view
    // Verified by classifying visibility before the player check
    #[test]
    fn test_player_drawn_when_unlit() {
        let scene = Scene::new(GridMap::new(2, 2).unwrap());
        assert!(!scene.is_in_fov(1, 1));
        assert_eq!(classify(&scene, (1, 1), 1, 1), Glyph::Player);
    }

    // Tests each glyph has its own symbol and color
    // Verified by mapping walls to the floor symbol
    #[test]
    fn test_glyph_symbols_and_colors() {
        let glyphs = [Glyph::Player, Glyph::LitWall, Glyph::LitFloor, Glyph::Unseen];
        let symbols: Vec<_> = glyphs.iter().map(|glyph| glyph.symbol()).collect();
        assert_eq!(symbols, vec!['@', '#', '.', ' ']);
        assert_ne!(Glyph::LitWall.color(), Glyph::LitFloor.color());
    }

    // Tests the summary counts lit floor and walls but not the player
    // Verified by counting the player cell as floor
    #[test]
    fn test_describe_counts() {
        let scene = corridor_scene();
        assert!(scene.map().is_blocked(3, 0));
        assert_eq!(
            describe(&scene, (1, 0)),
            "viewer at (1, 0) sees 2 floor and 1 wall cells"
        );
    }
}
