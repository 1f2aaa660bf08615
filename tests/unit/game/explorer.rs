//! Tests for the player-driven tick handler

#[cfg(test)]
mod tests {

    use shadowfov::game::host::parse_commands;
    use shadowfov::game::{Command, Direction, Explorer, Flow, HostLoop, TickHandler};
    use shadowfov::io::visualization::WalkCapture;
    use shadowfov::{FovError, GridMap, Scene, TileMap};

    fn open_scene(width: i32, height: i32) -> Scene {
        Scene::new(GridMap::new(width, height).unwrap())
    }

    // Tests starting cells outside the map or on a wall are rejected
    // Verified by skipping the blocked start check
    #[test]
    fn test_new_rejects_invalid_start() {
        let mut scene = open_scene(5, 5);
        scene.map_mut().set_blocked(2, 2, true);

        for start in [(-1, 0), (5, 5), (2, 2)] {
            let result = Explorer::new(&mut scene, start, 3);
            assert!(
                matches!(
                    result,
                    Err(FovError::InvalidParameter {
                        parameter: "start",
                        ..
                    })
                ),
                "{start:?} should be rejected"
            );
        }
    }

    // Tests the first view is computed on placement
    // Verified by deferring the first computation to the first tick
    #[test]
    fn test_new_computes_initial_view() {
        let mut scene = open_scene(9, 9);

        let explorer = Explorer::new(&mut scene, (4, 4), 2).unwrap();

        assert_eq!(explorer.position(), (4, 4));
        assert_eq!(explorer.radius(), 2);
        assert!(scene.is_in_fov(4, 4));
        assert!(scene.is_in_fov(6, 6));
        assert!(!scene.is_in_fov(7, 4));
    }

    // Tests a move recomputes from the new cell and drops the old view
    // Verified by computing without clearing first
    #[test]
    fn test_move_clears_previous_view() {
        let mut scene = open_scene(30, 5);
        let mut explorer = Explorer::new(&mut scene, (2, 2), 2).unwrap();
        assert!(scene.is_in_fov(0, 2));

        let ticks =
            HostLoop::run(&mut scene, &mut explorer, parse_commands("RRRRR").unwrap()).unwrap();

        assert_eq!(ticks, 5);
        assert_eq!(explorer.position(), (7, 2));
        assert!(scene.is_in_fov(9, 2));
        assert!(!scene.is_in_fov(0, 2));
        assert!(!scene.is_in_fov(4, 2));
    }

    // Tests walls and the map edge refuse the step
    // Verified by checking bounds but not walls before stepping
    #[test]
    fn test_blocked_moves_are_refused() {
        let mut scene = open_scene(6, 6);
        scene.map_mut().set_blocked(3, 2, true);
        let mut explorer = Explorer::new(&mut scene, (2, 2), 3).unwrap();

        let flow = explorer
            .tick(&mut scene, Command::Move(Direction::Right))
            .unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(explorer.position(), (2, 2));

        let mut cornered = Explorer::new(&mut scene, (0, 0), 3).unwrap();
        cornered
            .tick(&mut scene, Command::Move(Direction::Left))
            .unwrap();
        cornered
            .tick(&mut scene, Command::Move(Direction::Up))
            .unwrap();
        assert_eq!(cornered.position(), (0, 0));
        assert!(scene.map().is_blocked(-1, 0));
    }

    // Tests waiting keeps going while quitting asks the loop to stop
    // Verified by returning Continue for every non-move command
    #[test]
    fn test_wait_and_quit_flows() {
        let mut scene = open_scene(4, 4);
        let mut explorer = Explorer::new(&mut scene, (1, 1), 2).unwrap();

        assert_eq!(
            explorer.tick(&mut scene, Command::Wait).unwrap(),
            Flow::Continue
        );
        assert_eq!(explorer.tick(&mut scene, Command::Quit).unwrap(), Flow::Stop);
        assert_eq!(explorer.position(), (1, 1));
    }

    // Tests one frame is captured per tick and the capture can be taken once
    // Verified by recording frames in tick instead of redraw
    #[test]
    fn test_capture_records_each_redraw() {
        let mut scene = open_scene(6, 6);
        let mut explorer = Explorer::new(&mut scene, (1, 1), 2)
            .unwrap()
            .with_capture(WalkCapture::new(1));

        HostLoop::run(&mut scene, &mut explorer, parse_commands("RD.").unwrap()).unwrap();

        assert_eq!(explorer.capture().map(WalkCapture::frame_count), Some(3));
        assert!(explorer.take_capture().is_some());
        assert!(explorer.take_capture().is_none());
    }
}
