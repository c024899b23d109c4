//=========================================================================
// Stage System
//=========================================================================
//
// Stage lifecycle and destructive stage switching.
//
// Architecture:
//   StageManager
//     ├─ registry: StageRegistry<S>    (ordered key → factory)
//     ├─ loader: Box<dyn AssetLoader>
//     └─ current: one live stage instance
//
// Activation:
//   setup() → prepare_assets() → loader (load_progress) → build() → live
//
// Per frame:
//   pointer() for each input → tick() once
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::animation::AnimationRegistry;
use crate::core::assets::{AssetCache, AssetQueue};
use crate::core::config::GameConfig;
use crate::core::input::PointerInput;

//=== Module Declarations =================================================

mod stage_manager;
mod transition_queue;

//=== Public API ==========================================================

pub use stage_manager::{StageError, StageFactory, StageManager, StageRegistry};
pub use transition_queue::TransitionQueue;

//=== StageKey ============================================================

/// Identifier of a stage in the fixed sequence.
///
/// Typically a game-specific enum.
pub trait StageKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {
    /// Textual name, used by [`StageManager::start_named`] and in logs.
    fn name(&self) -> &'static str;
}

//=== StageContext ========================================================

/// Engine state a stage may use during its hooks.
pub struct StageContext<'a, S: StageKey> {
    pub config: &'a GameConfig,
    pub assets: &'a AssetCache,
    pub animations: &'a mut AnimationRegistry,
    transitions: &'a mut TransitionQueue<S>,
}

impl<'a, S: StageKey> StageContext<'a, S> {
    pub fn new(
        config: &'a GameConfig,
        assets: &'a AssetCache,
        animations: &'a mut AnimationRegistry,
        transitions: &'a mut TransitionQueue<S>,
    ) -> Self {
        Self {
            config,
            assets,
            animations,
            transitions,
        }
    }

    /// Requests a switch to `stage` once the current hook returns.
    pub fn start(&mut self, stage: S) {
        self.transitions.push(stage);
    }
}

//=== Stage Trait =========================================================

/// A presentation stage.
///
/// A fresh instance is created on every activation and dropped when the
/// next stage starts. Only `build()` is required:
///
/// ```rust
/// # use tap_claim::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Screen { Title }
/// # impl StageKey for Screen {
/// #     fn name(&self) -> &'static str { "Title" }
/// # }
/// struct Title;
///
/// impl Stage<Screen> for Title {
///     fn build(&mut self, _ctx: &mut StageContext<'_, Screen>) {
///         // Place display objects and controls
///     }
/// }
/// ```
pub trait Stage<S: StageKey>: Send {
    /// Stage-local initialization, before any asset is requested.
    fn setup(&mut self, _ctx: &mut StageContext<'_, S>) {}

    /// Declares the assets to fetch before `build()`.
    fn prepare_assets(&mut self, _queue: &mut AssetQueue) {}

    /// Called after each declared asset finishes loading.
    fn load_progress(&mut self, _fraction: f32) {}

    /// Constructs visible objects and wires input. The stage is live
    /// afterwards.
    fn build(&mut self, ctx: &mut StageContext<'_, S>);

    /// One pointer input, delivered before `tick()` in a frame.
    fn pointer(&mut self, _input: PointerInput, _ctx: &mut StageContext<'_, S>) {}

    /// Once per frame while live.
    fn tick(&mut self, _delta: Duration, _ctx: &mut StageContext<'_, S>) {}
}
