//=========================================================================
// System Event Types
//
// Defines the internal representation of low-level pointer events.
//
// This module abstracts away platform-specific input (e.g. Winit)
// into a unified, engine-friendly format used by the input subsystem.
//
// Responsibilities:
// - Represent mouse buttons and cursor movement in a portable way
// - Classify events as discrete (order significant) or continuous
//   (coalescable, last position wins)
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    PointerInput (primary button only)
//         ↓
//    PointerRouter → InteractiveControl
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// Abstracts Winit's `MouseButton` into a stable, portable enum. The
/// `Other` variant covers side buttons and any non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left). Drives every control.
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons, macro keys).
    Other,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// # Event Types
///
/// - **MouseButtonDown/MouseButtonUp**: Discrete button events
/// - **MouseMoved**: Continuous cursor position updates
/// - **Unidentified**: Unknown/unsupported events (ignored by the core)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed.
    MouseButtonDown { button: MouseButton },

    /// Mouse button released.
    MouseButtonUp { button: MouseButton },

    /// Mouse cursor moved to new position.
    ///
    /// Coordinates are in canvas space (pixels, top-left origin).
    /// Consecutive moves are coalesced by the platform layer.
    MouseMoved { x: f32, y: f32 },

    /// Cursor left the window.
    CursorLeft,

    /// Unrecognized or unsupported event.
    Unidentified,
}

impl InputEvent {
    /// Returns `true` for events where only the latest value matters.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::MouseMoved { .. })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_mouse_moves_are_continuous() {
        assert!(InputEvent::MouseMoved { x: 1.0, y: 2.0 }.is_continuous());
        assert!(!InputEvent::MouseButtonDown { button: MouseButton::Left }.is_continuous());
        assert!(!InputEvent::MouseButtonUp { button: MouseButton::Left }.is_continuous());
        assert!(!InputEvent::CursorLeft.is_continuous());
        assert!(!InputEvent::Unidentified.is_continuous());
    }

    #[test]
    fn equality_compares_payload() {
        let a = InputEvent::MouseButtonDown { button: MouseButton::Left };
        let b = InputEvent::MouseButtonDown { button: MouseButton::Right };
        assert_ne!(a, b, "Different buttons must not compare equal");
        assert_eq!(
            InputEvent::MouseMoved { x: 3.0, y: 4.0 },
            InputEvent::MouseMoved { x: 3.0, y: 4.0 }
        );
    }
}
