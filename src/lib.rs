//=========================================================================
// Tap to Claim: Library Root
//
// Stage-driven front end for the Tap to Claim game.
//
// Responsibilities:
// - Expose the runtime entry point (`Engine`, `EngineBuilder`)
// - Expose the stage, UI and asset building blocks (`core`)
// - Ship the game's own stage set (`stages`)
// - Keep the windowing layer (`platform`) private
//
// Typical usage:
// ```no_run
// use tap_claim::stages::{self, GameStage};
// use tap_claim::EngineBuilder;
//
// fn main() {
//     EngineBuilder::new()
//         .build(stages::registry())
//         .run(GameStage::Boot);
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything that runs on the logic thread: stage lifecycle,
// pointer routing, display list, tweens, assets and the ambient pool.
//
// `stages` is the game itself: Boot → Preloader → MainMenu → Game →
// GameOver.
//
pub mod core;
pub mod prelude;
pub mod stages;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the Winit window and event loop and is not part of
// the public API surface.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
