//! Frame capture and GIF generation for walk visualization

use image::{Delay, Frame};
use std::path::Path;

use crate::algorithm::session::StepReport;
use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{AlgorithmError, Result};
use crate::io::image::{CellBounds, SourceImage, TileCanvas};
use crate::spatial::{PartCatalog, Tile};

/// Tiles generated by one event and where the player stood afterwards
#[derive(Debug, Clone)]
pub struct WalkFrame {
    /// Player cell after the event
    pub player: [i32; 2],
    /// Tiles placed by the event
    pub generated: Vec<Tile>,
}

/// Captures walk events for visualization
///
/// Records one frame per start or move event so the growth of the grid can
/// be replayed as an animation.
#[derive(Debug, Clone, Default)]
pub struct WalkCapture {
    frames: Vec<WalkFrame>,
}

impl WalkCapture {
    /// Create an empty capture, reserving room for `expected_steps` frames
    pub fn new(expected_steps: usize) -> Self {
        Self {
            frames: Vec::with_capacity(expected_steps + 1),
        }
    }

    /// Record the outcome of one event
    pub fn record(&mut self, report: &StepReport) {
        self.frames.push(WalkFrame {
            player: report.position,
            generated: report.generated.clone(),
        });
    }

    /// Recorded frames in event order
    pub fn frames(&self) -> &[WalkFrame] {
        &self.frames
    }

    /// Number of recorded events
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured walk as a GIF with automatic frame skipping
    ///
    /// Frames faster than viewers reliably support are merged so the
    /// apparent speed of the walk is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No events were captured or no tile was ever generated
    /// - A tile cannot be drawn from the source image
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        catalog: &PartCatalog,
        source: &SourceImage,
        scaling_factor: u32,
        output_path: &Path,
        frame_delay_ms: u32,
    ) -> Result<()> {
        let bounds = self
            .final_bounds()
            .ok_or_else(|| AlgorithmError::InvalidSourceData {
                reason: "No walk events captured for visualization".to_string(),
            })?;

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let frames = self.generate_frames(
            bounds,
            catalog,
            source,
            scaling_factor,
            effective_delay_ms,
            skip_factor,
        )?;

        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| AlgorithmError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| AlgorithmError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        log::info!("wrote {}", output_path.display());
        Ok(())
    }

    fn final_bounds(&self) -> Option<CellBounds> {
        if self.frames.iter().all(|frame| frame.generated.is_empty()) {
            return None;
        }

        CellBounds::covering(self.frames.iter().flat_map(|frame| {
            std::iter::once(frame.player).chain(frame.generated.iter().map(|tile| tile.position))
        }))
    }

    fn generate_frames(
        &self,
        bounds: CellBounds,
        catalog: &PartCatalog,
        source: &SourceImage,
        scaling_factor: u32,
        delay_ms: u32,
        skip_factor: usize,
    ) -> Result<Vec<Frame>> {
        let mut tiles = TileCanvas::new(bounds, scaling_factor);
        let mut frames = Vec::new();
        let skip_factor = skip_factor.max(1);

        for (index, frame) in self.frames.iter().enumerate() {
            for tile in &frame.generated {
                tiles.draw_tile(tile, catalog, source)?;
            }

            let is_last = index + 1 == self.frames.len();
            if index % skip_factor == 0 || is_last {
                frames.push(Self::render_frame(&tiles, frame.player, delay_ms));
            }
        }

        // Final frame displays longer for better visibility
        if let Some(last) = self.frames.last() {
            frames.push(Self::render_frame(&tiles, last.player, delay_ms * 25));
        }

        Ok(frames)
    }

    fn render_frame(tiles: &TileCanvas, player: [i32; 2], delay_ms: u32) -> Frame {
        let mut canvas = tiles.clone();
        canvas.draw_player(player);
        Frame::from_parts(
            canvas.into_image(),
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        )
    }
}
