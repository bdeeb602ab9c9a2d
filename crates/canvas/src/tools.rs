//! Tool selection and pointer lifecycle
//!
//! The UI layer owns a [`ToolState`] and forwards already-mapped canvas
//! coordinates; the helpers here compose the brush, fill, and history
//! operations those pointer events trigger.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use easel_config::{BRUSH_SIZES, DEFAULT_BRUSH_INDEX, Settings};

use crate::brush::paint_stroke;
use crate::color::Rgba;
use crate::fill::flood_fill;
use crate::history::CanvasHistory;

/// Drawing tool selected in the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    Brush,
    Eraser,
    Fill,
}

/// Shared mutable tool state, passed explicitly instead of living as a
/// global
///
/// `last_pos` is transient gesture state and is skipped on serialization;
/// the rest round-trips so the UI can persist the selected tool setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolState {
    /// Currently selected tool
    pub active_tool: Tool,
    /// Color used by the brush and fill tools
    pub brush_color: Rgba,
    /// Brush diameter in pixels
    pub brush_size: u32,
    /// Previous pointer position while a draw gesture is active
    #[serde(skip)]
    pub last_pos: Option<IVec2>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            active_tool: Tool::Brush,
            brush_color: Rgba::BLACK,
            brush_size: BRUSH_SIZES[DEFAULT_BRUSH_INDEX],
            last_pos: None,
        }
    }
}

impl ToolState {
    /// Tool state matching the configured startup defaults
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            brush_size: settings.default_brush_size(),
            ..Self::default()
        }
    }

    /// Select a different tool
    pub fn update_tool(&mut self, tool: Tool) {
        self.active_tool = tool;
    }

    /// Brush radius in pixels (half the configured diameter)
    pub fn brush_radius(&self) -> i32 {
        (self.brush_size / 2) as i32
    }

    /// Effective stroke color: the eraser paints the background
    pub fn stroke_color(&self, background: Rgba) -> Rgba {
        match self.active_tool {
            Tool::Eraser => background,
            Tool::Brush | Tool::Fill => self.brush_color,
        }
    }
}

/// Handle a pointer press at an already-mapped canvas position
///
/// A fill click completes immediately and is snapshotted. Brush and eraser
/// presses stamp the initial dab and start a draw gesture; the return value
/// says whether a gesture is now active.
pub fn pointer_pressed(state: &mut ToolState, history: &mut CanvasHistory, pos: IVec2) -> bool {
    match state.active_tool {
        Tool::Fill => {
            if flood_fill(history.surface_mut(), pos, state.brush_color) {
                history.save_state();
            }
            false
        }
        Tool::Brush | Tool::Eraser => {
            let color = state.stroke_color(history.background());
            paint_stroke(history.surface_mut(), None, pos, state.brush_radius(), color);
            state.last_pos = Some(pos);
            true
        }
    }
}

/// Handle a pointer motion sample during a draw gesture
///
/// No-op unless a brush or eraser gesture is active.
pub fn pointer_moved(state: &mut ToolState, history: &mut CanvasHistory, pos: IVec2) {
    if !matches!(state.active_tool, Tool::Brush | Tool::Eraser) {
        return;
    }
    let Some(last) = state.last_pos else {
        return;
    };
    let color = state.stroke_color(history.background());
    paint_stroke(
        history.surface_mut(),
        Some(last),
        pos,
        state.brush_radius(),
        color,
    );
    state.last_pos = Some(pos);
}

/// Handle a pointer release: the finished edit becomes a history entry
pub fn pointer_released(state: &mut ToolState, history: &mut CanvasHistory) {
    state.last_pos = None;
    history.save_state();
}
