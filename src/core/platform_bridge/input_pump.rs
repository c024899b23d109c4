//=========================================================================
// Input Pump
//=========================================================================
//
// Turns the platform channel into one flat list of input per core frame.
//
// The pump blocks for at most the frame budget waiting for the first
// batch, then drains whatever else has already arrived. Batches are
// concatenated in arrival order so a press/move/release sequence split
// across two redraws still reaches the router in order.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

/// Batches drained per frame before the rest is left for the next one.
const MAX_BATCHES_PER_FRAME: usize = 64;

//=== FrameInput ==========================================================

/// What the core thread gets for one frame.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FrameInput {
    /// Input that arrived since the previous frame, possibly empty.
    Events(Vec<InputEvent>),

    /// The window closed or the platform dropped its sender.
    Closed,
}

//=== InputPump ===========================================================

pub(crate) struct InputPump {
    receiver: Receiver<PlatformEvent>,
}

impl InputPump {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self { receiver }
    }

    /// Waits up to `budget` for input, then returns everything pending.
    pub(crate) fn next_frame(&mut self, budget: Duration) -> FrameInput {
        let mut events = Vec::new();

        let first = match self.receiver.recv_timeout(budget) {
            Ok(event) => event,
            Err(RecvTimeoutError::Timeout) => return FrameInput::Events(events),
            Err(RecvTimeoutError::Disconnected) => return FrameInput::Closed,
        };

        let mut pending = Some(first);
        let mut batches = 0;

        while let Some(event) = pending.take() {
            match event {
                PlatformEvent::Inputs(batch) => events.extend(batch),
                PlatformEvent::WindowClosed => return FrameInput::Closed,
            }
            batches += 1;

            if batches == MAX_BATCHES_PER_FRAME {
                warn!(
                    "Input backlog: {} batches this frame, {} still queued",
                    batches,
                    self.receiver.len()
                );
                break;
            }

            pending = match self.receiver.try_recv() {
                Ok(event) => Some(event),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => return FrameInput::Closed,
            };
        }

        trace!("Frame input: {} events from {} batches", events.len(), batches);
        FrameInput::Events(events)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
