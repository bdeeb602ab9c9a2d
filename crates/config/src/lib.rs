//! Shared configuration for Easel
//!
//! This crate provides the single source of truth for canvas dimensions,
//! history limits, brush sizes, and the color palette. The engine crate
//! receives a [`Settings`] at construction and never reads configuration
//! from anywhere else.

use serde::{Deserialize, Serialize};

/// Default canvas width in pixels (internal drawing resolution)
pub const DEFAULT_CANVAS_WIDTH: u32 = 1700;

/// Default canvas height in pixels (internal drawing resolution)
pub const DEFAULT_CANVAS_HEIGHT: u32 = 900;

/// Default number of snapshots retained on each history stack
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Canvas background color, also used by the eraser
pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];

/// Brush diameters offered by the size selector, in pixels
pub const BRUSH_SIZES: [u32; 5] = [7, 14, 21, 28, 35];

/// Index into [`BRUSH_SIZES`] selected at startup
pub const DEFAULT_BRUSH_INDEX: usize = 0;

/// The fixed color palette, two rows of thirteen
pub const PALETTE: [[u8; 3]; 26] = [
    [255, 255, 255],
    [193, 193, 193],
    [239, 19, 11],
    [255, 113, 0],
    [255, 228, 0],
    [0, 204, 0],
    [1, 255, 145],
    [0, 178, 255],
    [35, 31, 211],
    [163, 0, 186],
    [223, 105, 167],
    [255, 172, 142],
    [160, 82, 45],
    [0, 0, 0],
    [80, 80, 80],
    [116, 11, 7],
    [194, 56, 0],
    [232, 162, 0],
    [0, 70, 25],
    [0, 120, 93],
    [0, 86, 158],
    [14, 8, 101],
    [85, 0, 105],
    [135, 53, 84],
    [204, 119, 77],
    [99, 48, 13],
];

/// Canvas and tool configuration injected into the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Background/base fill color (RGB)
    pub background: [u8; 3],
    /// Maximum snapshots retained per history stack
    pub history_capacity: usize,
    /// Available brush diameters in pixels
    pub brush_sizes: Vec<u32>,
    /// Index of the brush diameter selected at startup
    pub default_brush_index: usize,
    /// Colors offered by the palette (RGB)
    pub palette: Vec<[u8; 3]>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            background: BACKGROUND_COLOR,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            brush_sizes: BRUSH_SIZES.to_vec(),
            default_brush_index: DEFAULT_BRUSH_INDEX,
            palette: PALETTE.to_vec(),
        }
    }
}

impl Settings {
    /// Create settings with the given canvas dimensions
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            ..Self::default()
        }
    }

    /// Get the brush diameter selected at startup
    ///
    /// Falls back to the first configured size if the index is stale.
    pub fn default_brush_size(&self) -> u32 {
        self.brush_sizes
            .get(self.default_brush_index)
            .or_else(|| self.brush_sizes.first())
            .copied()
            .unwrap_or(BRUSH_SIZES[DEFAULT_BRUSH_INDEX])
    }

    /// Look up a palette color by index
    pub fn palette_color(&self, index: usize) -> Option<[u8; 3]> {
        self.palette.get(index).copied()
    }
}
