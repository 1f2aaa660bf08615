//! Player-driven tick handler that recomputes the view after every step

use crate::game::host::{Command, Flow, TickHandler};
use crate::game::scene::Scene;
use crate::io::error::{Result, invalid_parameter};
use crate::io::visualization::WalkCapture;
use crate::spatial::map::TileMap;

/// A viewer walking the map with a fixed sight radius
///
/// Moves into blocked or out-of-bounds cells are refused and leave the
/// current view untouched. Every accepted move clears the field of view
/// before recomputing it from the new position.
#[derive(Debug)]
pub struct Explorer {
    position: (i32, i32),
    radius: i32,
    capture: Option<WalkCapture>,
}

impl Explorer {
    /// Place the explorer at `start` and compute its first view
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `start` is out of bounds or
    /// blocked.
    pub fn new<M: TileMap>(scene: &mut Scene<M>, start: (i32, i32), radius: i32) -> Result<Self> {
        let map = scene.map();
        if !map.is_in_bounds(start.0, start.1) {
            return Err(invalid_parameter(
                "start",
                &format!("{},{}", start.0, start.1),
                &format!("outside the {}x{} map", map.width(), map.height()),
            ));
        }
        if map.is_blocked(start.0, start.1) {
            return Err(invalid_parameter(
                "start",
                &format!("{},{}", start.0, start.1),
                &"starting cell is blocked",
            ));
        }

        let explorer = Self {
            position: start,
            radius,
            capture: None,
        };
        explorer.refresh(scene);
        Ok(explorer)
    }

    /// Record a frame of the scene after every tick
    #[must_use]
    pub fn with_capture(mut self, capture: WalkCapture) -> Self {
        self.capture = Some(capture);
        self
    }

    /// Current cell of the explorer
    pub const fn position(&self) -> (i32, i32) {
        self.position
    }

    /// Sight radius used for every recomputation
    pub const fn radius(&self) -> i32 {
        self.radius
    }

    /// Frames recorded so far, if capturing
    pub const fn capture(&self) -> Option<&WalkCapture> {
        self.capture.as_ref()
    }

    /// Detach the frame capture, leaving the explorer without one
    pub const fn take_capture(&mut self) -> Option<WalkCapture> {
        self.capture.take()
    }

    fn refresh<M: TileMap>(&self, scene: &mut Scene<M>) {
        scene.clear_fov();
        scene.compute_fov(self.position.0, self.position.1, self.radius);
    }
}

impl<M: TileMap> TickHandler<M> for Explorer {
    fn tick(&mut self, scene: &mut Scene<M>, command: Command) -> Result<Flow> {
        let Command::Move(direction) = command else {
            return Ok(if command == Command::Quit {
                Flow::Stop
            } else {
                Flow::Continue
            });
        };

        let (dx, dy) = direction.delta();
        let target = (self.position.0 + dx, self.position.1 + dy);
        if scene.map().is_blocked(target.0, target.1) {
            log::debug!(
                "refused {direction:?} from {:?}: {target:?} is blocked",
                self.position
            );
            return Ok(Flow::Continue);
        }

        self.position = target;
        self.refresh(scene);
        log::debug!(
            "moved {direction:?} to {target:?}, {} cells visible",
            scene.fov().visible_count()
        );
        Ok(Flow::Continue)
    }

    fn redraw(&mut self, scene: &Scene<M>) -> Result<()> {
        if let Some(capture) = self.capture.as_mut() {
            capture.record(scene, self.position);
        }
        Ok(())
    }
}
