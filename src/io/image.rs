//! Source image loading and tile canvas rendering
//!
//! The engine only knows part ids and grid cells. This module turns those
//! into pixels: each tile's source rectangle is cropped from the source
//! image, scaled to the cell size, and placed on a canvas that covers the
//! visited area.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

use crate::io::configuration::{
    BACKGROUND_COLOR, PLAYER_MARKER_COLOR, PLAYER_MARKER_INSET, PLAYER_MARKER_SIZE,
};
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::{PartCatalog, Tile, catalog::SourceRect};

/// Decoded source image that parts are cut from
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbaImage,
    path: Option<PathBuf>,
}

impl SourceImage {
    /// Load a source image from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let img = image::open(&path_buf).map_err(|e| AlgorithmError::ImageLoad {
            path: path_buf.clone(),
            source: e,
        })?;

        let pixels = img.to_rgba8();
        log::info!(
            "loaded source '{}' ({}x{})",
            path_buf.display(),
            pixels.width(),
            pixels.height()
        );

        Ok(Self {
            pixels,
            path: Some(path_buf),
        })
    }

    /// Wrap pixels that are already in memory
    pub const fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels, path: None }
    }

    /// Pixel dimensions (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Build the part catalog for this image
    pub fn catalog(&self) -> PartCatalog {
        let (width, height) = self.dimensions();
        PartCatalog::build(width, height)
    }

    /// File the image was loaded from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Crop a source rectangle and scale it up to the cell size
    ///
    /// # Errors
    ///
    /// Returns an error if the rectangle lies outside the image
    pub fn crop_part(&self, rect: &SourceRect, scaling_factor: u32) -> Result<RgbaImage> {
        let (width, height) = self.dimensions();
        if rect.end_x > width || rect.end_y > height || rect.width() == 0 || rect.height() == 0 {
            return Err(AlgorithmError::InvalidSourceData {
                reason: format!(
                    "source rectangle ({}, {})..({}, {}) outside {width}x{height} image",
                    rect.start_x, rect.start_y, rect.end_x, rect.end_y
                ),
            });
        }

        let cropped =
            imageops::crop_imm(&self.pixels, rect.start_x, rect.start_y, rect.width(), rect.height())
                .to_image();
        Ok(imageops::resize(
            &cropped,
            rect.width() * scaling_factor,
            rect.height() * scaling_factor,
            FilterType::Triangle,
        ))
    }
}

/// Inclusive rectangle of grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    /// Smallest (x, y)
    pub min: [i32; 2],
    /// Largest (x, y)
    pub max: [i32; 2],
}

impl CellBounds {
    /// Smallest rectangle containing every given cell
    pub fn covering<I>(cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = [i32; 2]>,
    {
        cells.into_iter().fold(None, |bounds, cell| {
            Some(bounds.map_or(Self { min: cell, max: cell }, |b: Self| Self {
                min: [b.min[0].min(cell[0]), b.min[1].min(cell[1])],
                max: [b.max[0].max(cell[0]), b.max[1].max(cell[1])],
            }))
        })
    }

    /// Width in cells
    pub const fn columns(&self) -> u32 {
        self.max[0].abs_diff(self.min[0]) + 1
    }

    /// Height in cells
    pub const fn rows(&self) -> u32 {
        self.max[1].abs_diff(self.min[1]) + 1
    }
}

/// Canvas covering a rectangle of grid cells
#[derive(Debug, Clone)]
pub struct TileCanvas {
    image: RgbaImage,
    bounds: CellBounds,
    scaling_factor: u32,
}

impl TileCanvas {
    /// Create a blank canvas for the given cells
    pub fn new(bounds: CellBounds, scaling_factor: u32) -> Self {
        let scale = scaling_factor.max(1);
        Self {
            image: RgbaImage::from_pixel(
                bounds.columns() * scale,
                bounds.rows() * scale,
                Rgba(BACKGROUND_COLOR),
            ),
            bounds,
            scaling_factor: scale,
        }
    }

    fn pixel_origin(&self, position: [i32; 2]) -> (i64, i64) {
        let scale = i64::from(self.scaling_factor);
        (
            (i64::from(position[0]) - i64::from(self.bounds.min[0])) * scale,
            (i64::from(position[1]) - i64::from(self.bounds.min[1])) * scale,
        )
    }

    /// Draw one tile into its cell
    ///
    /// # Errors
    ///
    /// Returns an error if the tile's part is not in the catalog or its
    /// source rectangle lies outside the source image
    pub fn draw_tile(
        &mut self,
        tile: &Tile,
        catalog: &PartCatalog,
        source: &SourceImage,
    ) -> Result<()> {
        let part = catalog
            .get(tile.part)
            .ok_or_else(|| AlgorithmError::InvalidSourceData {
                reason: format!("part {} is not in the catalog", tile.part),
            })?;
        let scaled = source.crop_part(&part.source_rect, self.scaling_factor)?;
        let (x, y) = self.pixel_origin(tile.position);
        imageops::replace(&mut self.image, &scaled, x, y);
        Ok(())
    }

    /// Draw the player marker, a square inset inside its cell
    pub fn draw_player(&mut self, position: [i32; 2]) {
        let scale = f64::from(self.scaling_factor);
        let (x, y) = self.pixel_origin(position);
        let inset = (PLAYER_MARKER_INSET * scale).round() as i64;
        let size = ((PLAYER_MARKER_SIZE * scale).round() as i64).max(1);

        let (width, height) = self.image.dimensions();
        for py in (y + inset)..(y + inset + size) {
            for px in (x + inset)..(x + inset + size) {
                let (Ok(px), Ok(py)) = (u32::try_from(px), u32::try_from(py)) else {
                    continue;
                };
                if px < width && py < height {
                    self.image.put_pixel(px, py, Rgba(PLAYER_MARKER_COLOR));
                }
            }
        }
    }

    /// Rendered pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the canvas and return its pixels
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Render generated tiles, and optionally the player, onto one image
///
/// # Errors
///
/// Returns an error if:
/// - No tiles were generated
/// - A tile refers to a part that cannot be drawn
pub fn render_walk(
    tiles: &[Tile],
    player: Option<[i32; 2]>,
    catalog: &PartCatalog,
    source: &SourceImage,
    scaling_factor: u32,
) -> Result<RgbaImage> {
    if tiles.is_empty() {
        return Err(AlgorithmError::InvalidSourceData {
            reason: "No tiles have been generated".to_string(),
        });
    }

    let cells = tiles.iter().map(|tile| tile.position).chain(player);
    let bounds = CellBounds::covering(cells).ok_or_else(|| AlgorithmError::InvalidSourceData {
        reason: "No tiles have been generated".to_string(),
    })?;

    let mut canvas = TileCanvas::new(bounds, scaling_factor);
    for tile in tiles {
        canvas.draw_tile(tile, catalog, source)?;
    }
    if let Some(position) = player {
        canvas.draw_player(position);
    }

    Ok(canvas.into_image())
}

/// Save a rendered image as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::info!("wrote {}", output_path.display());
    Ok(())
}
