//! Part catalog and taxi-distance adjacency
//!
//! Every pixel of the source image becomes a part covering that pixel. Two
//! parts are neighbors when their source coordinates are one step apart
//! horizontally or vertically. The catalog is built once and read-only after.

use std::collections::HashMap;
use std::fmt;

/// Identifier of a part, derived from its source pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartId {
    /// Source column
    pub x: u32,
    /// Source row
    pub y: u32,
}

impl PartId {
    /// Create an id for the part cut from source pixel `(x, y)`
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance between the source coordinates of two parts
    pub const fn taxi_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Rectangle in source-image pixel space, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRect {
    /// Left edge (inclusive)
    pub start_x: u32,
    /// Top edge (inclusive)
    pub start_y: u32,
    /// Right edge (exclusive)
    pub end_x: u32,
    /// Bottom edge (exclusive)
    pub end_y: u32,
}

impl SourceRect {
    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.end_x - self.start_x
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.end_y - self.start_y
    }
}

/// Immutable catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    /// Unique identifier
    pub id: PartId,
    /// Region of the source image this part is cropped from
    pub source_rect: SourceRect,
    /// Parts allowed next to this one, in catalog order, without repeats
    pub neighbors: Vec<PartId>,
}

impl Part {
    const fn unit(x: u32, y: u32) -> Self {
        Self {
            id: PartId::new(x, y),
            source_rect: SourceRect {
                start_x: x,
                start_y: y,
                end_x: x + 1,
                end_y: y + 1,
            },
            neighbors: Vec::new(),
        }
    }
}

/// All parts of a source image with their adjacency lists
///
/// Parts are stored in construction order (column-major: `x` outer, `y`
/// inner). Unconstrained picks index into this order, so it is part of the
/// reproducibility contract.
#[derive(Debug, Clone, Default)]
pub struct PartCatalog {
    parts: Vec<Part>,
    index: HashMap<PartId, usize>,
    source_dimensions: (u32, u32),
}

impl PartCatalog {
    /// Build the catalog for a source image of the given pixel dimensions
    ///
    /// The adjacency pass compares every ordered pair of parts, which is
    /// quadratic in the pixel count. Source images are expected to be tiny.
    pub fn build(source_width: u32, source_height: u32) -> Self {
        let mut parts = Vec::with_capacity((source_width as usize) * (source_height as usize));
        for x in 0..source_width {
            for y in 0..source_height {
                parts.push(Part::unit(x, y));
            }
        }

        let ids: Vec<PartId> = parts.iter().map(|part| part.id).collect();
        for part in &mut parts {
            for &other in &ids {
                if part.id.taxi_distance(other) == 1 && !part.neighbors.contains(&other) {
                    part.neighbors.push(other);
                }
            }
        }

        let index = parts
            .iter()
            .enumerate()
            .map(|(i, part)| (part.id, i))
            .collect();

        log::debug!(
            "built part catalog: {} parts from {source_width}x{source_height} source",
            parts.len()
        );

        Self {
            parts,
            index,
            source_dimensions: (source_width, source_height),
        }
    }

    /// Look up a part by id
    pub fn get(&self, id: PartId) -> Option<&Part> {
        self.index.get(&id).and_then(|&i| self.parts.get(i))
    }

    /// Part at a position in catalog order
    pub fn part_at(&self, index: usize) -> Option<&Part> {
        self.parts.get(index)
    }

    /// Position of a part in catalog order
    pub fn index_of(&self, id: PartId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Number of parts
    pub const fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the catalog has no parts
    pub const fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Iterate parts in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Part> {
        self.parts.iter()
    }

    /// Pixel dimensions (width, height) the catalog was built from
    pub const fn source_dimensions(&self) -> (u32, u32) {
        self.source_dimensions
    }
}

impl<'a> IntoIterator for &'a PartCatalog {
    type Item = &'a Part;
    type IntoIter = std::slice::Iter<'a, Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
