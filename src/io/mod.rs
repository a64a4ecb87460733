//! Input/output operations at the edge of the engine

/// Command-line interface and walk orchestration
pub mod cli;
/// Default constants
pub mod configuration;
/// Error types
pub mod error;
/// Source image loading and tile rendering
pub mod image;
/// Key code and move script parsing
pub mod input;
/// Stderr logging backend
pub mod logging;
/// Progress bar over walks
pub mod progress;
/// Animated GIF export of walks
pub mod visualization;
