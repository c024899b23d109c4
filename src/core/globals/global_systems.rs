//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Systems operate on GlobalContext data once per core tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::input::{InputEvent, PointerInput};
use crate::core::scene::{StageKey, StageManager};

//=== GlobalSystems =======================================================

/// Container for engine-level logic systems.
///
/// # Available Systems
///
/// - `stage_manager`: lifecycle of the current stage
pub struct GlobalSystems<S: StageKey> {
    pub stage_manager: StageManager<S>,
}

impl<S: StageKey> GlobalSystems<S> {
    pub fn new(stage_manager: StageManager<S>) -> Self {
        Self { stage_manager }
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one frame.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Input conversion**: platform events → primary-button pointer input
    /// 2. **Dispatch**: each pointer input to the live stage
    /// 3. **Tick**: the live stage, once
    ///
    /// Stage errors have already been logged where they occurred; the
    /// frame carries on with whichever stage is current afterwards.
    pub fn update(&mut self, context: &mut GlobalContext<S>, events: &[InputEvent], delta: Duration) {
        //--- 1. Input conversion ------------------------------------------
        let pointer: Vec<PointerInput> = events.iter().filter_map(PointerInput::from_event).collect();
        if !pointer.is_empty() {
            trace!("Dispatching {} pointer inputs", pointer.len());
        }

        //--- 2. Dispatch --------------------------------------------------
        if let Err(e) = self.stage_manager.dispatch_pointer(&pointer, context) {
            debug!("Pointer dispatch stopped: {}", e);
        }

        //--- 3. Tick ------------------------------------------------------
        if let Err(e) = self.stage_manager.tick(delta, context) {
            debug!("Tick stopped: {}", e);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::core::assets::{AssetError, AssetLoader, AssetRequest, LoadedAsset};
    use crate::core::config::GameConfig;
    use crate::core::input::MouseButton;
    use crate::core::scene::{Stage, StageContext, StageRegistry};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestStage {
        Only,
    }

    impl StageKey for TestStage {
        fn name(&self) -> &'static str {
            "Only"
        }
    }

    struct NoAssets;

    impl AssetLoader for NoAssets {
        fn load(&mut self, request: &AssetRequest) -> Result<LoadedAsset, AssetError> {
            Err(AssetError::Missing {
                key: request.key.clone(),
                path: request.path.clone(),
            })
        }
    }

    #[derive(Clone)]
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl Stage<TestStage> for Recorder {
        fn build(&mut self, _ctx: &mut StageContext<'_, TestStage>) {}

        fn pointer(&mut self, input: PointerInput, _ctx: &mut StageContext<'_, TestStage>) {
            self.0.lock().expect("log lock").push(format!("{:?}", input));
        }

        fn tick(&mut self, _delta: Duration, _ctx: &mut StageContext<'_, TestStage>) {
            self.0.lock().expect("log lock").push("tick".to_string());
        }
    }

    #[test]
    fn input_is_dispatched_before_tick() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let recorder = Recorder(log.clone());
        let registry = StageRegistry::new().with(TestStage::Only, move || recorder.clone());
        let mut systems = GlobalSystems::new(StageManager::new(registry, Box::new(NoAssets)));
        let mut context = GlobalContext::new(GameConfig::default());
        systems
            .stage_manager
            .start(TestStage::Only, &mut context)
            .expect("stage starts");

        let events = [
            InputEvent::MouseMoved { x: 1.0, y: 2.0 },
            InputEvent::MouseButtonDown { button: MouseButton::Right },
            InputEvent::MouseButtonDown { button: MouseButton::Left },
        ];
        systems.update(&mut context, &events, Duration::from_millis(16));

        assert_eq!(
            *log.lock().expect("log lock"),
            vec!["Moved { x: 1.0, y: 2.0 }", "Pressed", "tick"]
        );
    }
}
