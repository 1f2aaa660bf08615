//! Synchronous host loop feeding commands to a per-tick strategy object

use std::fmt;
use std::str::FromStr;

use crate::game::scene::Scene;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::map::TileMap;

/// Cardinal movement direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller `y`
    Up,
    /// Towards larger `y`
    Down,
    /// Towards smaller `x`
    Left,
    /// Towards larger `x`
    Right,
}

impl Direction {
    /// Cell offset `(dx, dy)` of a single step
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// One unit of host input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Step one cell in a direction
    Move(Direction),
    /// Spend a tick without moving
    Wait,
    /// Stop the loop before the next tick
    Quit,
}

impl Command {
    /// Interpret a single key
    ///
    /// Accepts `U`, `D`, `L` and `R` for movement, `.` for waiting and `Q`
    /// for quitting, in either case.
    pub const fn from_key(key: char) -> Option<Self> {
        let command = match key.to_ascii_uppercase() {
            'U' => Self::Move(Direction::Up),
            'D' => Self::Move(Direction::Down),
            'L' => Self::Move(Direction::Left),
            'R' => Self::Move(Direction::Right),
            '.' => Self::Wait,
            'Q' => Self::Quit,
            _ => return None,
        };
        Some(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(direction) => write!(f, "move {direction:?}"),
            Self::Wait => write!(f, "wait"),
            Self::Quit => write!(f, "quit"),
        }
    }
}

/// Parse a key sequence such as `"RRDD.L"` into commands
///
/// Whitespace and commas are ignored.
///
/// # Errors
///
/// Returns an invalid parameter error naming the first unknown key.
pub fn parse_commands(keys: &str) -> Result<Vec<Command>> {
    keys.chars()
        .filter(|key| !key.is_whitespace() && *key != ',')
        .map(|key| {
            Command::from_key(key)
                .ok_or_else(|| invalid_parameter("moves", &key, &"unknown movement key"))
        })
        .collect()
}

/// Newtype over a parsed key sequence for use as a CLI argument
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandScript(pub Vec<Command>);

impl FromStr for CommandScript {
    type Err = crate::io::error::FovError;

    fn from_str(keys: &str) -> Result<Self> {
        parse_commands(keys).map(Self)
    }
}

/// Whether the host loop should keep ticking
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Run the next tick
    Continue,
    /// Stop after this tick's redraw
    Stop,
}

/// Per-tick hook supplied by the host
///
/// Called synchronously once per command: [`TickHandler::tick`] applies the
/// command, then [`TickHandler::redraw`] observes the updated scene.
pub trait TickHandler<M: TileMap> {
    /// Apply one command to the scene
    ///
    /// # Errors
    ///
    /// Returning an error aborts the loop.
    fn tick(&mut self, scene: &mut Scene<M>, command: Command) -> Result<Flow>;

    /// Observe the scene after a tick
    ///
    /// # Errors
    ///
    /// Returning an error aborts the loop.
    fn redraw(&mut self, _scene: &Scene<M>) -> Result<()> {
        Ok(())
    }
}

/// Drives a [`TickHandler`] over a finite command stream
#[derive(Clone, Copy, Debug, Default)]
pub struct HostLoop;

impl HostLoop {
    /// Feed `commands` to `handler` until input ends, `Quit`, or [`Flow::Stop`]
    ///
    /// Returns the number of ticks run. `Quit` ends the loop without a tick.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by the handler.
    pub fn run<M, H, I>(scene: &mut Scene<M>, handler: &mut H, commands: I) -> Result<usize>
    where
        M: TileMap,
        H: TickHandler<M> + ?Sized,
        I: IntoIterator<Item = Command>,
    {
        let mut ticks = 0;

        for command in commands {
            if command == Command::Quit {
                log::debug!("quit requested after {ticks} ticks");
                break;
            }

            let flow = handler.tick(scene, command)?;
            handler.redraw(scene)?;
            ticks += 1;

            if flow == Flow::Stop {
                log::debug!("handler stopped the loop after {ticks} ticks");
                break;
            }
        }

        Ok(ticks)
    }
}
