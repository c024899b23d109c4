//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit pointer events into engine InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent (engine type) → InputBuffer
//
// Cursor positions arrive in physical pixels and are converted to the
// logical canvas space stages lay out in.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton as WinitMouseButton},
};

//=== Internal Dependencies ===============================================

use crate::core::input::event::{InputEvent, MouseButton};

//=== InputProcessor ======================================================

/// Converts Winit events to engine InputEvents.
pub(crate) struct InputProcessor {
    scale_factor: f64,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self { scale_factor: 1.0 }
    }

    //--- Window State -----------------------------------------------------

    /// Updates the DPI scale used to map cursor positions.
    pub(crate) fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a Winit mouse button event.
    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let button = MouseButton::from(button);

        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown { button },
            ElementState::Released => InputEvent::MouseButtonUp { button },
        }
    }

    /// Converts a physical cursor position to a logical move event.
    pub(crate) fn process_mouse_move(&self, position: PhysicalPosition<f64>) -> InputEvent {
        let logical = position.to_logical::<f32>(self.scale_factor);
        InputEvent::MouseMoved {
            x: logical.x,
            y: logical.y,
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
