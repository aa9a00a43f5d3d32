//! Gesture sessions and swipe resolution.
//!
//! A session spans one down event and its matching up/cancel. While it is
//! open, every move of the owning source is turned into a vertical delta
//! (`start_y - current_y`, positive means upward) and compared against the
//! threshold of that source.

use serde::{Deserialize, Serialize};

/// Default swipe threshold for touch input, in logical px.
pub const TOUCH_THRESHOLD_PX: f32 = 50.0;

/// Default swipe threshold for mouse drags, in logical px.
pub const MOUSE_THRESHOLD_PX: f32 = 30.0;

/// Input family that owns a gesture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureSource {
    Touch,
    Mouse,
}

impl GestureSource {
    pub fn name(&self) -> &'static str {
        match self {
            GestureSource::Touch => "touch",
            GestureSource::Mouse => "mouse",
        }
    }
}

/// Direction of a resolved swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Up,
    Down,
}

/// Minimum vertical delta per input family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub touch: f32,
    pub mouse: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            touch: TOUCH_THRESHOLD_PX,
            mouse: MOUSE_THRESHOLD_PX,
        }
    }
}

impl Thresholds {
    /// Threshold for the given source.
    pub fn for_source(&self, source: GestureSource) -> f32 {
        match source {
            GestureSource::Touch => self.touch,
            GestureSource::Mouse => self.mouse,
        }
    }
}

/// Resolve a delta into a swipe once it reaches the threshold in either direction.
pub fn resolve_swipe(delta: f32, threshold: f32) -> Option<SwipeDirection> {
    if delta >= threshold {
        Some(SwipeDirection::Up)
    } else if delta <= -threshold {
        Some(SwipeDirection::Down)
    } else {
        None
    }
}

/// An open gesture session.
///
/// `start_y` is cleared once the session fires a transition, which makes the
/// rest of that drag inert while the source keeps ownership until its up event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    source: GestureSource,
    start_y: Option<f32>,
    last_y: f32,
}

impl GestureSession {
    /// Begin a session at the given vertical coordinate.
    pub fn begin(source: GestureSource, y: f32) -> Self {
        Self {
            source,
            start_y: Some(y),
            last_y: y,
        }
    }

    pub fn source(&self) -> GestureSource {
        self.source
    }

    /// Start coordinate, or `None` once the session has been consumed.
    pub fn start_y(&self) -> Option<f32> {
        self.start_y
    }

    /// Latest coordinate seen by this session.
    pub fn last_y(&self) -> f32 {
        self.last_y
    }

    pub fn is_consumed(&self) -> bool {
        self.start_y.is_none()
    }

    /// Record a move and return the current delta, or `None` if consumed.
    pub fn track(&mut self, y: f32) -> Option<f32> {
        self.last_y = y;
        self.start_y.map(|start| start - y)
    }

    /// Delta between start and the latest move, if the session is live.
    pub fn delta(&self) -> Option<f32> {
        self.start_y.map(|start| start - self.last_y)
    }

    /// Mark the session as having fired its transition.
    pub fn consume(&mut self) {
        self.start_y = None;
    }
}
