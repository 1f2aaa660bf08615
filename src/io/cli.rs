//! Command-line interface for walking a viewer through a generated map

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::fov::FovAlgorithm;
use crate::game::explorer::Explorer;
use crate::game::host::{CommandScript, HostLoop};
use crate::game::scene::Scene;
use crate::io::configuration::{
    DEFAULT_CELL_SCALE, DEFAULT_DENSITY, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DEFAULT_SEED,
    DEFAULT_SIGHT_RADIUS, DEFAULT_START, GIF_FRAME_DELAY_MS,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::image::export_png;
use crate::io::render::{describe, render_ascii};
use crate::io::visualization::WalkCapture;
use crate::spatial::layout::{Layout, parse_ascii};
use crate::spatial::map::{GridMap, TileMap};

#[derive(Parser, Debug)]
#[command(name = "shadowfov")]
#[command(
    author,
    version,
    about = "Walk a viewer through a tile map and render its field of view"
)]
/// Command-line arguments for the field of view demo
pub struct Cli {
    /// Map width in cells (ignored with --map)
    #[arg(short = 'W', long, default_value_t = DEFAULT_MAP_WIDTH)]
    pub width: i32,

    /// Map height in cells (ignored with --map)
    #[arg(short = 'H', long, default_value_t = DEFAULT_MAP_HEIGHT)]
    pub height: i32,

    /// Sight radius of the viewer
    #[arg(short, long, default_value_t = DEFAULT_SIGHT_RADIUS, allow_negative_numbers = true)]
    pub radius: i32,

    /// Starting cell as X,Y (defaults to the map's '@' or 5,5)
    #[arg(long, value_parser = parse_position)]
    pub start: Option<(i32, i32)>,

    /// Generated layout (ignored with --map)
    #[arg(short, long, value_enum, default_value_t = Layout::Pillars)]
    pub layout: Layout,

    /// Fraction of blocked cells for the random layout
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Random seed for reproducible layouts
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// ASCII map file using '#' for walls, '.' for floor and '@' for the start
    #[arg(long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// Movement keys to replay, e.g. "RRDD.L" (U/D/L/R, '.' waits, Q quits)
    #[arg(short, long)]
    pub moves: Option<CommandScript>,

    /// Visibility algorithm
    #[arg(short, long, value_enum, default_value_t = FovAlgorithm::Symmetric)]
    pub algorithm: FovAlgorithm,

    /// Write the final frame as a PNG image
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Write every frame of the walk as an animated GIF
    #[arg(long, value_name = "GIF")]
    pub animate: Option<PathBuf>,

    /// Pixels per cell in exported images
    #[arg(long, default_value_t = DEFAULT_CELL_SCALE)]
    pub scale: u32,

    /// Do not print the final frame
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse an `X,Y` cell position
///
/// # Errors
///
/// Returns a message if the value is not two comma-separated integers.
pub fn parse_position(value: &str) -> std::result::Result<(i32, i32), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but found '{value}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid coordinate '{part}': {e}"))
    };
    Ok((parse(x)?, parse(y)?))
}

/// Result of a finished demo run
#[derive(Debug)]
pub struct DemoOutcome {
    /// Final scene after all moves
    pub scene: Scene,
    /// Final viewer position
    pub position: (i32, i32),
    /// Number of ticks the host loop ran
    pub ticks: usize,
}

/// Builds the scene described by the CLI and replays its moves
pub struct Demo {
    cli: Cli,
}

impl Demo {
    /// Create a demo from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the walk, print the final frame and write any requested images
    ///
    /// # Errors
    ///
    /// Returns an error if the map cannot be built, the start cell is
    /// invalid, or an export fails.
    pub fn run(&self) -> Result<()> {
        let outcome = self.simulate()?;
        log::info!("{}", describe(&outcome.scene, outcome.position));

        if !self.cli.quiet {
            let frame = render_ascii(&outcome.scene, outcome.position);
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(frame.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| file_system_error("<stdout>", "write frame", e))?;
        }

        if let Some(path) = &self.cli.output {
            export_png(&outcome.scene, outcome.position, self.cli.scale, path)?;
        }

        Ok(())
    }

    /// Build the scene and run every move without printing
    ///
    /// Writes the animated GIF when `--animate` was given, since the frames
    /// only exist during the walk.
    ///
    /// # Errors
    ///
    /// Returns an error if the map cannot be built, the start cell is
    /// invalid, or the GIF export fails.
    pub fn simulate(&self) -> Result<DemoOutcome> {
        let (map, marked_start) = self.build_map()?;
        let start = self.cli.start.or(marked_start).unwrap_or(DEFAULT_START);
        log::info!(
            "{}x{} map with {} blocked cells, viewer at {start:?} radius {}",
            map.width(),
            map.height(),
            map.blocked_count(),
            self.cli.radius
        );

        let mut scene = Scene::with_algorithm(map, self.cli.algorithm);
        let mut explorer = Explorer::new(&mut scene, start, self.cli.radius)?;

        if self.cli.animate.is_some() {
            let mut capture = WalkCapture::new(self.cli.scale);
            capture.record(&scene, start);
            explorer = explorer.with_capture(capture);
        }

        let commands = self.cli.moves.clone().unwrap_or_default().0;
        let ticks = HostLoop::run(&mut scene, &mut explorer, commands)?;

        if let (Some(path), Some(capture)) = (&self.cli.animate, explorer.take_capture()) {
            capture.export_gif(path, GIF_FRAME_DELAY_MS)?;
        }

        Ok(DemoOutcome {
            position: explorer.position(),
            scene,
            ticks,
        })
    }

    fn build_map(&self) -> Result<(GridMap, Option<(i32, i32)>)> {
        if let Some(path) = &self.cli.map {
            let parsed = parse_ascii(&Self::read_map(path)?)?;
            return Ok((parsed.map, parsed.start));
        }

        let mut map = self.cli.layout.build(
            self.cli.width,
            self.cli.height,
            self.cli.seed,
            self.cli.density,
        )?;

        // Random scatter must not bury the default starting cell.
        if self.cli.layout == Layout::Random {
            let (x, y) = self.cli.start.unwrap_or(DEFAULT_START);
            map.set_blocked(x, y, false);
        }
        Ok((map, None))
    }

    fn read_map(path: &Path) -> Result<String> {
        if !path.is_file() {
            return Err(invalid_parameter(
                "map",
                &path.display(),
                &"map file does not exist",
            ));
        }
        std::fs::read_to_string(path).map_err(|e| file_system_error(path, "read map", e))
    }
}
