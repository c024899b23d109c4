//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for stages.
//
// Contains state that outlives any single stage:
// - config: read-only game configuration
// - assets: everything loaded so far
// - animations: named frame animations
// - transitions: command queue for stage changes
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::animation::AnimationRegistry;
use crate::core::assets::AssetCache;
use crate::core::config::GameConfig;
use crate::core::scene::{StageContext, StageKey, TransitionQueue};

//=== GlobalContext =======================================================

/// Engine-owned data handed to stages during their hooks.
///
/// Stages see it through a [`StageContext`], which keeps the config and
/// asset cache read-only.
pub struct GlobalContext<S: StageKey> {
    /// Configuration fixed at engine build time.
    pub config: GameConfig,

    /// Assets loaded by every stage activated so far.
    pub assets: AssetCache,

    /// Animations registered by any stage.
    pub animations: AnimationRegistry,

    /// Pending stage switches, applied by the stage manager.
    pub transitions: TransitionQueue<S>,
}

impl<S: StageKey> GlobalContext<S> {
    /// Creates a context with empty caches.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            assets: AssetCache::new(),
            animations: AnimationRegistry::new(),
            transitions: TransitionQueue::new(),
        }
    }

    /// Borrows the parts a stage hook may use.
    pub fn stage_context(&mut self) -> StageContext<'_, S> {
        StageContext::new(
            &self.config,
            &self.assets,
            &mut self.animations,
            &mut self.transitions,
        )
    }
}
