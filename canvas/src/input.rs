//! Input model: the active tool and the gesture state machine.
//!
//! `Tool` captures the user's intent at the time of a pointer event.
//! `CaptureState` is the active stroke gesture being tracked between
//! pointer-down and pointer-up, carrying the accumulated point path needed
//! to render incremental segments and emit the final operation on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;
use crate::op::OpKind;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand pen (default).
    #[default]
    Draw,
    /// Eraser.
    Erase,
}

impl Tool {
    /// The operation kind a stroke made with this tool produces.
    #[must_use]
    pub fn kind(self) -> OpKind {
        match self {
            Self::Draw => OpKind::Draw,
            Self::Erase => OpKind::Erase,
        }
    }
}

/// Internal state for the stroke capture state machine.
///
/// Transitions are owned by [`crate::engine::EngineCore`]:
/// `Idle → Capturing` on pointer-down, `Capturing → Idle` on
/// pointer-up/pointer-leave.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// A stroke gesture is in progress.
    Capturing {
        /// Points accumulated so far, in gesture order. The pending path is
        /// ephemeral — discarded on finalization or when the gesture ends
        /// with fewer than two points.
        points: Vec<Point>,
    },
}

impl Default for CaptureState {
    fn default() -> Self {
        Self::Idle
    }
}

impl CaptureState {
    /// Whether a gesture is currently being tracked.
    #[must_use]
    pub fn is_capturing(&self) -> bool {
        matches!(self, Self::Capturing { .. })
    }
}
