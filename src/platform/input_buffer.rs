//=========================================================================
// Input Buffer
//=========================================================================
//
// Collects pointer input between two frame boundaries.
//
// Responsibilities:
// - Keep events in arrival order (press/move/release order decides
//   which control a click lands on)
// - Coalesce runs of consecutive cursor moves into the latest one
// - Drop exact repeats of a discrete event
// - Hand the frame's events over via `drain()`
//
// The buffer is reused across frames; draining keeps its capacity.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== InputBuffer =========================================================

/// Transient event store for one platform frame.
pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 64;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    //--- Event Handling ---------------------------------------------------

    /// Appends an event.
    ///
    /// A cursor move directly after another cursor move replaces it. A
    /// discrete event identical to the previous one is ignored.
    pub(crate) fn push(&mut self, event: InputEvent) {
        if let Some(last) = self.events.last_mut() {
            if event.is_continuous() && last.is_continuous() {
                *last = event;
                return;
            }
            if *last == event {
                return;
            }
        }
        self.events.push(event);
    }

    //--- Drain ------------------------------------------------------------

    /// Returns the frame's events and empties the buffer, or `None` if
    /// nothing arrived.
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(self.events.drain(..).collect())
    }

    //--- Utilities --------------------------------------------------------

    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
