//=========================================================================
// Core Systems Orchestrator
//=========================================================================
//
// Central coordinator for everything running on the logic
// (non-platform) thread.
//
// Responsibilities:
// - Start the initial stage
// - Pull each frame's platform input through the input pump
// - Run GlobalSystems (pointer dispatch, then tick) at a fixed rate
// - Exit when the window closes or the platform disconnects
//
// Communication with the platform happens only through the bounded
// crossbeam channel; all game state lives on this thread.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod animation;
pub mod assets;
pub mod background;
pub mod config;
pub mod display;
pub mod globals;
pub mod input;
pub(crate) mod platform_bridge;
pub mod scene;
pub mod tween;
pub mod ui;

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use log::{error, info};

//=== Internal Dependencies ===============================================

use globals::{GlobalContext, GlobalSystems};
use platform_bridge::{FrameInput, InputPump, PlatformEvent};
use scene::StageKey;

//=== CoreSystemsOrchestrator =============================================

/// Owns the engine systems and runs them on the core thread.
pub(crate) struct CoreSystemsOrchestrator<S: StageKey> {
    systems: GlobalSystems<S>,
    context: GlobalContext<S>,
}

impl<S: StageKey> CoreSystemsOrchestrator<S> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(systems: GlobalSystems<S>, context: GlobalContext<S>) -> Self {
        Self { systems, context }
    }

    //--- spawn_core_thread() ---------------------------------------------

    /// Spawns the logic thread at `tps` ticks per second.
    ///
    /// Each tick:
    ///  1. Waits for platform input, at most one frame (exits on close)
    ///  2. Dispatches input and ticks the current stage
    ///  3. Sleeps to maintain fixed pacing
    pub(crate) fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        initial: S,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut systems = self.systems;
            let mut context = self.context;
            let mut pump = InputPump::new(receiver);

            if let Err(e) = systems.stage_manager.start(initial, &mut context) {
                error!("Initial stage {:?} did not start: {}", initial.name(), e);
            }

            let mut last_tick = Instant::now();

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                let events = match pump.next_frame(frame_duration) {
                    FrameInput::Events(events) => events,
                    FrameInput::Closed => {
                        info!("Core thread exiting.");
                        break;
                    }
                };

                //--- Step 2: Update systems --------------------------------
                let delta = last_tick.elapsed();
                last_tick = Instant::now();
                systems.update(&mut context, &events, delta);

                //--- Step 3: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }
}
