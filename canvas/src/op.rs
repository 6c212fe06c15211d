//! Operation model: strokes, path payloads, and wire records.
//!
//! An operation is one persisted stroke or erasure, immutable once written.
//! [`DrawingPath`] is the client-side form produced by the capture state
//! machine; [`PathData`] is the payload that goes over the wire and into the
//! store; [`OperationRecord`] is the committed row shape shared by the load
//! path and the realtime channel. Timestamps are milliseconds since the Unix
//! epoch everywhere.

#[cfg(test)]
#[path = "op_test.rs"]
mod op_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::MIN_STROKE_POINTS;
use crate::geometry::Point;

/// The kind of a drawing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    /// Paint an opaque stroke over existing content.
    Draw,
    /// Paint transparency, revealing the background.
    Erase,
}

impl OpKind {
    /// Wire name of this kind (`"draw"` / `"erase"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::Erase => "erase",
        }
    }

    /// Parse a wire name back into a kind.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draw" => Some(Self::Draw),
            "erase" => Some(Self::Erase),
            _ => None,
        }
    }
}

/// A finalized stroke gesture: the point sequence, the tool kind active at
/// release, and the client-side timestamp taken at finalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingPath {
    pub points: Vec<Point>,
    #[serde(rename = "type")]
    pub kind: OpKind,
    pub timestamp: i64,
}

impl DrawingPath {
    /// Whether this path has enough points to carry a visual effect.
    /// Paths below the threshold must not be persisted or drawn.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= MIN_STROKE_POINTS
    }

    /// The persistable payload for this path.
    #[must_use]
    pub fn path_data(&self) -> PathData {
        PathData { points: self.points.clone(), timestamp: self.timestamp }
    }
}

/// The path payload persisted with an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    pub points: Vec<Point>,
    /// Client-side timestamp (ms) taken when the gesture finalized.
    pub timestamp: i64,
}

/// A committed operation as returned by the store and carried by realtime
/// insert events. `id` and `created_at` are server-assigned; `created_at`
/// is the total order used for replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub id: Uuid,
    pub canvas_id: Uuid,
    pub operation_type: OpKind,
    pub path_data: PathData,
    /// Server commit time, ms since the Unix epoch.
    pub created_at: i64,
}

impl OperationRecord {
    /// Parse a realtime event payload (one JSON record per insert).
    ///
    /// # Errors
    ///
    /// Returns a deserialization error if the payload does not match the
    /// record shape.
    pub fn parse_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Current time as milliseconds since the Unix epoch.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

/// Current time as milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn now_ms() -> i64 {
    #[allow(clippy::cast_possible_truncation)]
    {
        js_sys::Date::now() as i64
    }
}
