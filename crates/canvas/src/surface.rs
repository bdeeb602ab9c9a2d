//! CPU surface for the canvas - dense 8-bit RGBA storage with snapshots

use std::hash::{DefaultHasher, Hash, Hasher};

use thiserror::Error;

use crate::color::Rgba;

/// Errors raised by surface construction and snapshot restore
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Snapshot is {snapshot_width}x{snapshot_height} but surface is {width}x{height}")]
    SnapshotMismatch {
        width: u32,
        height: u32,
        snapshot_width: u32,
        snapshot_height: u32,
    },
}

/// Content hash of a pixel buffer, used for cheap snapshot equality
///
/// Only ever compared against the previous history entry to suppress
/// duplicate saves, so a rare collision costs one skipped entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint(u64);

impl Fingerprint {
    fn of_bytes(bytes: &[u8]) -> Self {
        let mut hasher = DefaultHasher::new();
        bytes.hash(&mut hasher);
        Self(hasher.finish())
    }
}

/// An immutable copy of a surface's pixels at one instant
///
/// Once pushed onto a history stack the snapshot is owned by that entry;
/// the live surface always keeps its own independently mutable buffer.
#[derive(Debug, Clone)]
pub struct Snapshot {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
    fingerprint: Fingerprint,
}

impl Snapshot {
    /// Snapshot width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Snapshot height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Content fingerprint of the captured pixels
    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }
}

/// An 8-bit RGBA CPU surface, fixed-size for its lifetime
pub struct Surface {
    /// Surface dimensions
    pub width: u32,
    pub height: u32,
    /// Pixel data in row-major order
    pixels: Vec<Rgba>,
}

impl Surface {
    /// Create a new surface with every pixel set to `fill_color`
    ///
    /// Fails only on zero dimensions.
    pub fn new(width: u32, height: u32, fill_color: Rgba) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        let pixel_count = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            pixels: vec![fill_color; pixel_count],
        })
    }

    /// Set every pixel to a solid color
    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        Some(self.pixels[index])
    }

    /// Set a pixel at the given coordinates
    ///
    /// Internal callers must pre-clamp; out-of-bounds writes are a bug and
    /// trip the debug assertion, in release they are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        debug_assert!(
            x < self.width && y < self.height,
            "set_pixel out of bounds: ({}, {}) on {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels[index] = color;
    }

    /// Capture the full pixel buffer together with its fingerprint
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
            fingerprint: self.fingerprint(),
        }
    }

    /// Overwrite the live buffer with a snapshot's pixels
    ///
    /// The snapshot must have been taken from a surface of the same size.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), CanvasError> {
        if snapshot.width != self.width || snapshot.height != self.height {
            return Err(CanvasError::SnapshotMismatch {
                width: self.width,
                height: self.height,
                snapshot_width: snapshot.width,
                snapshot_height: snapshot.height,
            });
        }
        self.pixels.copy_from_slice(&snapshot.pixels);
        Ok(())
    }

    /// Compute the content fingerprint of the current pixels
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of_bytes(self.as_bytes())
    }

    /// Produce a bilinear-resampled copy for display
    ///
    /// Read-only; the live surface is untouched.
    pub fn scaled_copy(&self, target_width: u32, target_height: u32) -> image::RgbaImage {
        let full = image::RgbaImage::from_raw(self.width, self.height, self.as_bytes().to_vec())
            .expect("pixel buffer length matches surface dimensions");
        image::imageops::resize(
            &full,
            target_width,
            target_height,
            image::imageops::FilterType::Triangle,
        )
    }

    /// Get raw pixel data as bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Get direct access to pixel data (for advanced operations)
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Get mutable access to pixel data (for advanced operations)
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }
}
