//! Engine constants and runtime configuration defaults

// Deterministic draw parameters
/// Initial seed of the sine generator
pub const DEFAULT_SEED: i64 = 12345;
/// Multiplier applied to `sin(seed)` before truncation
pub const SINE_AMPLITUDE: f64 = 10_000.0;

// Canvas geometry
/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: usize = 1024;
/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: usize = 1024;
/// Default edge length of one grid cell in pixels
pub const DEFAULT_SCALING_FACTOR: usize = 16;

// Player
/// Default player start column
pub const DEFAULT_PLAYER_START_X: i32 = 16;
/// Default player start row
pub const DEFAULT_PLAYER_START_Y: i32 = 12;
/// Marker offset from the cell corner, as a fraction of the cell size
pub const PLAYER_MARKER_INSET: f64 = 0.125;
/// Marker edge length, as a fraction of the cell size
pub const PLAYER_MARKER_SIZE: f64 = 0.75;
/// Marker fill color
pub const PLAYER_MARKER_COLOR: [u8; 4] = [255, 0, 0, 255];

// Random walks
/// Seed used to generate random move sequences
pub const DEFAULT_WALK_SEED: u64 = 42;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_walk";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Background color of rendered canvases
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 0];
