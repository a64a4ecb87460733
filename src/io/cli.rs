//! Command-line interface for walking a source image's tile grid

use crate::algorithm::resolution::SelectionPolicy;
use crate::algorithm::rng::{RandomSource, SineRng, StdRandomSource};
use crate::algorithm::session::{SessionConfig, WalkSession};
use crate::io::configuration::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_PLAYER_START_X, DEFAULT_PLAYER_START_Y,
    DEFAULT_SCALING_FACTOR, DEFAULT_SEED, DEFAULT_WALK_SEED, GIF_FRAME_DELAY_MS, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{SourceImage, export_png, render_walk};
use crate::io::input::{parse_key_codes, parse_move_script, random_walk};
use crate::io::progress::WalkProgress;
use crate::io::visualization::WalkCapture;
use crate::spatial::{BoundedGrid, Direction, GridStore, SparseGrid};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Draw source selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RngKind {
    /// Reproducible sine-hash generator
    #[default]
    Sine,
    /// Standard seeded generator
    Std,
}

#[derive(Parser)]
#[command(name = "tilewalk")]
#[command(
    author,
    version,
    about = "Walk an infinite grid that tiles itself from a source image"
)]
/// Command-line arguments for the walk tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Source image the parts are cut from
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Move script of w/a/s/d letters
    #[arg(short, long, default_value = "")]
    pub moves: String,

    /// Comma-separated key codes (KeyW, ArrowUp, ...) appended to the moves
    #[arg(short, long)]
    pub keys: Option<String>,

    /// Number of random moves appended after the scripted ones
    #[arg(short, long, default_value_t = 0)]
    pub walk: usize,

    /// Seed for generating random moves
    #[arg(long, default_value_t = DEFAULT_WALK_SEED)]
    pub walk_seed: u64,

    /// Seed for part selection
    #[arg(short, long, default_value_t = DEFAULT_SEED, allow_negative_numbers = true)]
    pub seed: i64,

    /// Draw source for part selection
    #[arg(long, value_enum, default_value_t = RngKind::Sine)]
    pub rng: RngKind,

    /// Candidate policy for cells next to the anchor
    #[arg(short, long, value_enum, default_value_t = SelectionPolicy::NeighborPool)]
    pub policy: SelectionPolicy,

    /// Also resolve the four neighbors of every visited cell
    #[arg(short, long)]
    pub lookahead: bool,

    /// Use a fixed grid sized to the canvas instead of an unbounded one
    #[arg(short, long)]
    pub bounded: bool,

    /// Canvas width in pixels (bounded grid)
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub canvas_width: usize,

    /// Canvas height in pixels (bounded grid)
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub canvas_height: usize,

    /// Edge length of one grid cell in pixels
    #[arg(long, default_value_t = DEFAULT_SCALING_FACTOR)]
    pub scale: usize,

    /// Player start column
    #[arg(long, default_value_t = DEFAULT_PLAYER_START_X, allow_negative_numbers = true)]
    pub start_x: i32,

    /// Player start row
    #[arg(long, default_value_t = DEFAULT_PLAYER_START_Y, allow_negative_numbers = true)]
    pub start_y: i32,

    /// Output PNG path (defaults to <source>_walk.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also export the walk as an animated GIF
    #[arg(long)]
    pub visualize: bool,

    /// Suppress progress and informational output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Engine-facing subset of the arguments
    pub const fn session_config(&self) -> SessionConfig {
        SessionConfig {
            policy: self.policy,
            lookahead: self.lookahead,
            start: [self.start_x, self.start_y],
        }
    }

    /// Full move sequence: script, then key codes, then random moves
    ///
    /// # Errors
    ///
    /// Returns an error if the move script contains invalid characters
    pub fn moves(&self) -> Result<Vec<Direction>> {
        let mut moves = parse_move_script(&self.moves)?;
        if let Some(keys) = &self.keys {
            moves.extend(parse_key_codes(keys));
        }
        moves.extend(random_walk(self.walk, self.walk_seed));
        Ok(moves)
    }

    /// Validated cell size in pixels
    ///
    /// # Errors
    ///
    /// Returns an error if the scale is zero or does not fit in `u32`
    pub fn scaling_factor(&self) -> Result<u32> {
        u32::try_from(self.scale)
            .ok()
            .filter(|&scale| scale > 0)
            .ok_or_else(|| {
                invalid_parameter("scale", &self.scale, &"must be a positive pixel count")
            })
    }

    /// Output PNG path
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| sibling_path(&self.source, OUTPUT_SUFFIX, "png"))
    }

    /// Animated GIF path, next to the PNG output
    pub fn visualization_path(&self) -> PathBuf {
        self.output.as_ref().map_or_else(
            || sibling_path(&self.source, OUTPUT_SUFFIX, "gif"),
            |output| output.with_extension("gif"),
        )
    }
}

fn sibling_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

/// Summary of a finished walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkSummary {
    /// Moves executed
    pub moves: usize,
    /// Tiles generated over the whole walk
    pub tiles_generated: usize,
    /// Visits that left a cell unfilled
    pub unresolved_visits: usize,
    /// Final player position
    pub final_position: [i32; 2],
}

/// Orchestrates one walk: load, simulate, export
pub struct WalkRunner {
    cli: Cli,
}

impl WalkRunner {
    /// Create a runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the walk described by the CLI arguments and write the outputs
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Arguments are invalid
    /// - The source image cannot be loaded
    /// - The catalog is empty or the grid rejects a write
    /// - Exporting the outputs fails
    pub fn run(&self) -> Result<WalkSummary> {
        let scaling_factor = self.cli.scaling_factor()?;
        let moves = self.cli.moves()?;
        let source = SourceImage::open(&self.cli.source)?;
        let catalog = source.catalog();

        let grid: Box<dyn GridStore> = if self.cli.bounded {
            Box::new(BoundedGrid::for_canvas(
                self.cli.canvas_width,
                self.cli.canvas_height,
                self.cli.scale,
            ))
        } else {
            Box::new(SparseGrid::new())
        };

        let rng: Box<dyn RandomSource> = match self.cli.rng {
            RngKind::Sine => Box::new(SineRng::new(self.cli.seed)),
            RngKind::Std => Box::new(StdRandomSource::new(self.cli.seed.unsigned_abs())),
        };

        let mut session = WalkSession::new(catalog, grid, rng, self.cli.session_config());
        let mut capture = self.cli.visualize.then(|| WalkCapture::new(moves.len()));

        let progress = self.cli.should_show_progress().then(|| {
            let name = self
                .cli
                .source
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            WalkProgress::new(&name, moves.len())
        });

        let mut unresolved_visits = 0;
        let start = session.start()?;
        unresolved_visits += start.unresolved.len();
        if let Some(capture) = capture.as_mut() {
            capture.record(&start);
        }

        for direction in moves.iter().copied() {
            let report = session.move_player(direction)?;
            unresolved_visits += report.unresolved.len();
            if let Some(capture) = capture.as_mut() {
                capture.record(&report);
            }
            if let Some(progress) = &progress {
                progress.advance(session.history().len());
            }
        }

        if let Some(progress) = &progress {
            progress.finish();
        }

        let image = render_walk(
            session.history(),
            Some(session.position()),
            session.catalog(),
            &source,
            scaling_factor,
        )?;
        export_png(&image, &self.cli.output_path())?;

        if let Some(capture) = &capture {
            capture.export_gif(
                session.catalog(),
                &source,
                scaling_factor,
                &self.cli.visualization_path(),
                GIF_FRAME_DELAY_MS,
            )?;
        }

        let summary = WalkSummary {
            moves: session.steps(),
            tiles_generated: session.history().len(),
            unresolved_visits,
            final_position: session.position(),
        };

        log::info!(
            "walk finished: {} moves, {} tiles, {} unresolved visits",
            summary.moves,
            summary.tiles_generated,
            summary.unresolved_visits
        );

        Ok(summary)
    }
}
