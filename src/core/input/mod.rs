//=========================================================================
// Input System
//=========================================================================
//
// Pointer input handling for stages.
//
// Architecture:
//   InputEvent (platform) → PointerInput (primary button)
//        → PointerRouter (hit regions) → PointerEvent per control
//
// Only the primary button drives controls; other buttons and unknown
// events are dropped at conversion.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod action;
mod pointer_router;

//=== Public API ==========================================================

pub use action::Action;
pub use event::{InputEvent, MouseButton};
pub use pointer_router::{ControlId, HitTarget, PointerRouter};

//=== PointerInput ========================================================

/// Pointer activity as seen by a stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Pointer moved to canvas coordinates.
    Moved { x: f32, y: f32 },

    /// Primary button pressed at the current position.
    Pressed,

    /// Primary button released at the current position.
    Released,

    /// Pointer left the canvas; nothing is under it until the next move.
    Left,
}

impl PointerInput {
    /// Converts a platform event, dropping anything that isn't the
    /// primary button or cursor movement.
    pub fn from_event(event: &InputEvent) -> Option<Self> {
        match *event {
            InputEvent::MouseMoved { x, y } => Some(Self::Moved { x, y }),
            InputEvent::MouseButtonDown { button: MouseButton::Left } => Some(Self::Pressed),
            InputEvent::MouseButtonUp { button: MouseButton::Left } => Some(Self::Released),
            InputEvent::CursorLeft => Some(Self::Left),
            _ => None,
        }
    }
}

//=== PointerEvent ========================================================

/// Per-control pointer event produced by hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    Enter,
    Leave,
    Down,
    Up,
}

//=========================================================================
// Unit Tests
//=========================================================================
