//! Phone screen state management.
//!
//! This module holds everything the phone remembers between frames: which
//! screen is visible, the control center switches and the gesture session
//! currently being tracked. Rendering code only reads it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                   ScreenMachine                      │
//! ├──────────────────────────────────────────────────────┤
//! │  ┌────────────────┐    ┌──────────────────────────┐  │
//! │  │ ScreenMode     │    │ GestureSession           │  │
//! │  │ - Locked       │    │ - source (touch/mouse)   │  │
//! │  │ - Home         │    │ - start_y / last_y       │  │
//! │  │ - ControlCenter│    └──────────────────────────┘  │
//! │  │ - AppOverlay   │    ┌──────────────────────────┐  │
//! │  └────────────────┘    │ ControlToggleSet         │  │
//! │                        │ ScrollLock (capability)  │  │
//! │                        └──────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod controls;
pub mod gesture;
pub mod machine;
pub mod screen;
pub mod scroll_lock;

pub use controls::{ControlSwitch, ControlToggleSet, MAX_BRIGHTNESS};
pub use gesture::{
    GestureSession, GestureSource, SwipeDirection, Thresholds, MOUSE_THRESHOLD_PX,
    TOUCH_THRESHOLD_PX,
};
pub use machine::{ScreenMachine, Transition, TransitionCause};
pub use screen::{AppId, ScreenMode};
pub use scroll_lock::{NoScrollLock, ScrollLatch, ScrollLock};
