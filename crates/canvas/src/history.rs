//! Bounded, deduplicated undo/redo over full-canvas snapshots

use std::collections::VecDeque;

use tracing::debug;

use easel_config::Settings;

use crate::color::Rgba;
use crate::surface::{CanvasError, Snapshot, Surface};

/// Owns the live canvas surface and its undo/redo history
///
/// Both stacks hold at most `capacity` snapshots; pushing past that drops
/// the oldest entry silently. The undo stack always retains the base state,
/// so a depth of 1 means there is nothing left to undo.
pub struct CanvasHistory {
    surface: Surface,
    undo_stack: VecDeque<Snapshot>,
    redo_stack: VecDeque<Snapshot>,
    capacity: usize,
    background: Rgba,
}

impl CanvasHistory {
    /// Create a history around a freshly filled surface
    ///
    /// The base state is snapshotted immediately. A capacity below 1 could
    /// not hold the base state and is clamped.
    pub fn new(
        width: u32,
        height: u32,
        background: Rgba,
        capacity: usize,
    ) -> Result<Self, CanvasError> {
        let surface = Surface::new(width, height, background)?;
        let base = surface.snapshot();
        let mut undo_stack = VecDeque::new();
        undo_stack.push_back(base);
        Ok(Self {
            surface,
            undo_stack,
            redo_stack: VecDeque::new(),
            capacity: capacity.max(1),
            background,
        })
    }

    /// Create a history from injected settings
    pub fn from_settings(settings: &Settings) -> Result<Self, CanvasError> {
        Self::new(
            settings.canvas_width,
            settings.canvas_height,
            Rgba::from(settings.background),
            settings.history_capacity,
        )
    }

    /// Snapshot the live surface onto the undo stack
    ///
    /// Skips the push (returning false) when the canvas content matches the
    /// most recent saved state, so zero-length strokes and repeated saves
    /// do not pile up identical entries. A successful push clears the redo
    /// stack.
    pub fn save_state(&mut self) -> bool {
        let snapshot = self.surface.snapshot();
        if let Some(top) = self.undo_stack.back() {
            if top.fingerprint() == snapshot.fingerprint() {
                debug!("save_state: canvas unchanged, skipping");
                return false;
            }
        }
        push_bounded(&mut self.undo_stack, snapshot, self.capacity);
        self.redo_stack.clear();
        debug!("save_state: {} undo entries", self.undo_stack.len());
        true
    }

    /// Revert the live surface to the previous saved state
    ///
    /// Returns false when only the base state remains.
    pub fn undo(&mut self) -> bool {
        if self.undo_stack.len() <= 1 {
            debug!("undo: at base state, nothing to undo");
            return false;
        }
        let Some(current) = self.undo_stack.pop_back() else {
            return false;
        };
        push_bounded(&mut self.redo_stack, current, self.capacity);
        if let Some(top) = self.undo_stack.back() {
            self.surface
                .restore(top)
                .expect("history snapshots match the live surface");
        }
        debug!(
            "undo: {} undo / {} redo entries",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    /// Reapply the most recently undone state
    ///
    /// Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.redo_stack.pop_back() else {
            debug!("redo: nothing to redo");
            return false;
        };
        self.surface
            .restore(&snapshot)
            .expect("history snapshots match the live surface");
        push_bounded(&mut self.undo_stack, snapshot, self.capacity);
        debug!(
            "redo: {} undo / {} redo entries",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    /// Blank the canvas, recording both the pre-clear and the blank state
    ///
    /// Undo directly after a clear brings the painting back; redo blanks it
    /// again. Clearing an already blank canvas records nothing.
    pub fn clear(&mut self) {
        self.save_state();
        self.surface.fill(self.background);
        self.save_state();
        debug!("clear: canvas blanked");
    }

    /// The live surface
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Mutable access to the live surface for brush and fill operations
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// The configured background color
    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Whether an undo would change the canvas
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    /// Whether a redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots on the undo stack, including the base state
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of snapshots on the redo stack
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}

fn push_bounded(stack: &mut VecDeque<Snapshot>, snapshot: Snapshot, capacity: usize) {
    stack.push_back(snapshot);
    while stack.len() > capacity {
        stack.pop_front();
        debug!("history: capacity reached, dropped oldest snapshot");
    }
}
