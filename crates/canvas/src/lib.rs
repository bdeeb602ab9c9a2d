//! Easel canvas engine - pixel raster, flood fill, strokes, and history
//!
//! This crate provides the core of the paint application:
//! - [`color::Rgba`] - 8-bit RGBA pixel color
//! - [`surface`] - CPU pixel surface with snapshot/restore
//! - [`fill`] - 4-connected scanline flood fill
//! - [`brush`] - dab and stroke rasterization
//! - [`history`] - bounded, deduplicated undo/redo over snapshots
//! - [`tools`] - tool state and the pointer lifecycle
//!
//! The UI layer maps pointer coordinates onto the canvas, drives the
//! [`tools`] helpers, and reads back [`surface::Surface::scaled_copy`] for
//! display; everything else stays inside this crate.

pub mod brush;
pub mod color;
pub mod fill;
pub mod history;
pub mod surface;
pub mod tools;

pub use brush::*;
pub use color::*;
pub use fill::*;
pub use history::*;
pub use surface::*;
pub use tools::*;
