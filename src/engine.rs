//=========================================================================
// Engine
//
// Main entry point and coordinator for the game runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build(registry)──>  Engine  ──run(initial)──>  [Runtime]
//         │                                  │
//         ├─ with_tps()                      └─ spawns core thread
//         ├─ with_channel_capacity()            runs platform
//         ├─ with_canvas_size()                 blocks until exit
//         ├─ with_asset_root()
//         ├─ with_title()
//         └─ with_loader()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::assets::{AssetLoader, FsAssetLoader};
use crate::core::config::GameConfig;
use crate::core::globals::{GlobalContext, GlobalSystems};
use crate::core::platform_bridge::PlatformEvent;
use crate::core::scene::{StageKey, StageManager, StageRegistry};
use crate::core::CoreSystemsOrchestrator;
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Canvas**: 1024 x 768
/// - **Asset root**: `assets`
/// - **Loader**: filesystem loader under the asset root
///
/// # Examples
///
/// ```no_run
/// use tap_claim::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Screen { Title }
/// impl StageKey for Screen {
///     fn name(&self) -> &'static str { "Title" }
/// }
///
/// struct Title;
/// impl Stage<Screen> for Title {
///     fn build(&mut self, _ctx: &mut StageContext<'_, Screen>) {}
/// }
///
/// let registry = StageRegistry::new().with(Screen::Title, || Title);
///
/// EngineBuilder::<Screen>::new()
///     .with_tps(120.0)
///     .with_asset_root("data")
///     .build(registry)
///     .run(Screen::Title);
/// ```
pub struct EngineBuilder<S: StageKey> {
    tps: f64,
    channel_capacity: usize,
    config: GameConfig,
    loader: Option<Box<dyn AssetLoader>>,
    _phantom: std::marker::PhantomData<S>,
}

impl<S: StageKey> EngineBuilder<S> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            config: GameConfig::default(),
            loader: None,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the logical canvas size, which is also the window's inner size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_canvas_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Canvas size must be positive, got {}x{}", width, height);
        self.config.canvas_width = width;
        self.config.canvas_height = height;
        self
    }

    /// Directory asset paths are resolved against.
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.asset_root = root.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Replaces the filesystem loader, e.g. with an in-memory one.
    pub fn with_loader(mut self, loader: Box<dyn AssetLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Builds the engine around the given stage set.
    pub fn build(self, registry: StageRegistry<S>) -> Engine<S> {
        info!(
            "Building engine (TPS: {}, channel: {}, stages: {})",
            self.tps,
            self.channel_capacity,
            registry.len()
        );

        let loader = match self.loader {
            Some(loader) => loader,
            None => Box::new(FsAssetLoader::new(self.config.asset_root.clone())),
        };

        let systems = GlobalSystems::new(StageManager::new(registry, loader));
        let context = GlobalContext::new(self.config.clone());

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(systems, context),
            config: self.config,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl<S: StageKey> Default for EngineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Game runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► StageManager → current Stage
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Pointer Input
///
/// Communication: bounded channel (PlatformEvent)
/// ```
pub struct Engine<S: StageKey> {
    orchestrator: CoreSystemsOrchestrator<S>,
    config: GameConfig,
    tps: f64,
    channel_capacity: usize,
}

impl<S: StageKey> Engine<S> {
    /// Configuration the engine was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    //--- Execution --------------------------------------------------------

    /// Starts the runtime at `initial` and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the bounded channel for platform → core communication
    /// 2. Spawns the logic thread, which starts `initial`
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: platform exits → core thread terminates
    pub fn run(self, initial: S) {
        info!("Starting engine runtime at {} (TPS: {})", initial.name(), self.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(rx, initial, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, &self.config);

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assets::{AssetError, AssetRequest, LoadedAsset};
    use crate::core::scene::{Stage, StageContext};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestStage {
        Main,
    }

    impl StageKey for TestStage {
        fn name(&self) -> &'static str {
            "Main"
        }
    }

    struct Empty;

    impl Stage<TestStage> for Empty {
        fn build(&mut self, _ctx: &mut StageContext<'_, TestStage>) {}
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

    fn registry() -> StageRegistry<TestStage> {
        StageRegistry::new().with(TestStage::Main, || Empty)
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::<TestStage>::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.config, GameConfig::default());
        assert!(builder.loader.is_none());
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::<TestStage>::new().with_tps(120.0);
        assert_eq!(builder.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::<TestStage>::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::<TestStage>::new().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::<TestStage>::new().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Canvas size must be positive")]
    fn builder_with_canvas_size_panics_on_zero() {
        EngineBuilder::<TestStage>::new().with_canvas_size(0, 768);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::<TestStage>::new()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .with_canvas_size(800, 600)
            .with_asset_root("data")
            .with_title("Demo")
            .with_loader(Box::new(NoAssets))
            .build(registry());

        assert_eq!(engine.tps, 120.0);
        assert_eq!(engine.channel_capacity, 256);
        assert_eq!(engine.config().canvas_width, 800);
        assert_eq!(engine.config().canvas_height, 600);
        assert_eq!(engine.config().asset_root, PathBuf::from("data"));
        assert_eq!(engine.config().title, "Demo");
    }

    #[test]
    fn build_without_loader_uses_filesystem_defaults() {
        let engine = EngineBuilder::<TestStage>::new().build(registry());
        assert_eq!(engine.config().asset_root, PathBuf::from("assets"));
    }
}
