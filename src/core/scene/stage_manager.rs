//=========================================================================
// Stage Manager
//=========================================================================
//
// Owns the stage registry and the single current stage.
//
// Stages are created from their factory on every activation, so a
// stage never carries state from an earlier visit. Switching is
// destructive: the previous instance is dropped before the next one's
// `setup()` runs.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::time::Duration;

use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use super::{Stage, StageKey};
use crate::core::assets::{load_queue, AssetError, AssetLoader, AssetQueue};
use crate::core::globals::GlobalContext;
use crate::core::input::PointerInput;

//=== Constants ===========================================================

/// Upper bound on activations triggered by one hook before the chain is
/// treated as a loop.
const MAX_CHAINED_TRANSITIONS: usize = 16;

//=== StageError ==========================================================

/// Stage activation failures.
#[derive(Debug)]
pub enum StageError {
    /// No registered stage has this name.
    UnknownStage(String),

    /// The key exists but was never registered.
    Unregistered(&'static str),

    /// An asset declared by the stage failed to load.
    AssetLoad {
        stage: &'static str,
        source: AssetError,
    },

    /// Stages kept requesting transitions from their own activation.
    TransitionLoop { limit: usize },
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStage(name) => write!(f, "Unknown stage {:?}", name),
            Self::Unregistered(name) => write!(f, "Stage {:?} is not registered", name),
            Self::AssetLoad { stage, source } => {
                write!(f, "Stage {:?} failed to load its assets: {}", stage, source)
            }
            Self::TransitionLoop { limit } => {
                write!(f, "More than {} chained stage transitions", limit)
            }
        }
    }
}

impl std::error::Error for StageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AssetLoad { source, .. } => Some(source),
            _ => None,
        }
    }
}

//=== StageRegistry =======================================================

/// Creates a fresh stage instance.
pub type StageFactory<S> = Box<dyn Fn() -> Box<dyn Stage<S>> + Send>;

struct StageDescriptor<S: StageKey> {
    key: S,
    factory: StageFactory<S>,
}

/// Ordered list of the stages a game is made of.
pub struct StageRegistry<S: StageKey> {
    stages: Vec<StageDescriptor<S>>,
}

impl<S: StageKey> StageRegistry<S> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage. Registering a key twice replaces its factory in
    /// place.
    pub fn register<F, T>(&mut self, key: S, factory: F)
    where
        F: Fn() -> T + Send + 'static,
        T: Stage<S> + 'static,
    {
        let factory: StageFactory<S> = Box::new(move || Box::new(factory()));

        if let Some(existing) = self.stages.iter_mut().find(|d| d.key == key) {
            warn!("Stage {:?} was already registered and has been replaced", key.name());
            existing.factory = factory;
        } else {
            self.stages.push(StageDescriptor { key, factory });
        }
    }

    /// Chaining form of [`register`](Self::register).
    pub fn with<F, T>(mut self, key: S, factory: F) -> Self
    where
        F: Fn() -> T + Send + 'static,
        T: Stage<S> + 'static,
    {
        self.register(key, factory);
        self
    }

    pub fn find_by_name(&self, name: &str) -> Option<S> {
        self.stages
            .iter()
            .map(|d| d.key)
            .find(|key| key.name() == name)
    }

    /// Position in the registration order.
    pub fn position(&self, key: S) -> Option<usize> {
        self.stages.iter().position(|d| d.key == key)
    }

    pub fn contains(&self, key: S) -> bool {
        self.position(key).is_some()
    }

    pub fn keys(&self) -> Vec<S> {
        self.stages.iter().map(|d| d.key).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    fn instantiate(&self, key: S) -> Option<Box<dyn Stage<S>>> {
        self.stages
            .iter()
            .find(|d| d.key == key)
            .map(|d| (d.factory)())
    }
}

impl<S: StageKey> Default for StageRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=== StageManager ========================================================

struct ActiveStage<S: StageKey> {
    key: S,
    stage: Box<dyn Stage<S>>,
    live: bool,
}

/// Drives the current stage through its lifecycle and applies
/// transitions.
pub struct StageManager<S: StageKey> {
    registry: StageRegistry<S>,
    loader: Box<dyn AssetLoader>,
    current: Option<ActiveStage<S>>,
}

impl<S: StageKey> StageManager<S> {
    //--- Construction -----------------------------------------------------

    pub fn new(registry: StageRegistry<S>, loader: Box<dyn AssetLoader>) -> Self {
        Self {
            registry,
            loader,
            current: None,
        }
    }

    pub fn registry(&self) -> &StageRegistry<S> {
        &self.registry
    }

    /// Key of the current stage, live or not.
    pub fn current(&self) -> Option<S> {
        self.current.as_ref().map(|active| active.key)
    }

    /// Whether the current stage finished `build()`.
    pub fn is_live(&self) -> bool {
        self.current.as_ref().is_some_and(|active| active.live)
    }

    //--- Transitions ------------------------------------------------------

    /// Activates `key` immediately, replacing the current stage, then
    /// applies any transitions the activation requested.
    pub fn start(&mut self, key: S, context: &mut GlobalContext<S>) -> Result<(), StageError> {
        if let Err(e) = self.activate(key, context) {
            context.transitions.clear();
            return Err(e);
        }
        self.process_transitions(context)
    }

    /// Like [`start`](Self::start), looking the stage up by name.
    pub fn start_named(
        &mut self,
        name: &str,
        context: &mut GlobalContext<S>,
    ) -> Result<(), StageError> {
        let Some(key) = self.registry.find_by_name(name) else {
            error!(
                "Unknown stage {:?}, staying on {:?}",
                name,
                self.current().map(|key| key.name())
            );
            return Err(StageError::UnknownStage(name.to_string()));
        };
        self.start(key, context)
    }

    //--- Frame Processing -------------------------------------------------

    /// Delivers pointer input to the live stage, one input at a time.
    ///
    /// A transition requested while handling an input takes effect before
    /// the next input is delivered.
    pub fn dispatch_pointer(
        &mut self,
        inputs: &[PointerInput],
        context: &mut GlobalContext<S>,
    ) -> Result<(), StageError> {
        for &input in inputs {
            match self.current.as_mut() {
                Some(active) if active.live => {
                    active.stage.pointer(input, &mut context.stage_context());
                }
                _ => return Ok(()),
            }
            self.process_transitions(context)?;
        }
        Ok(())
    }

    /// Ticks the live stage once.
    pub fn tick(&mut self, delta: Duration, context: &mut GlobalContext<S>) -> Result<(), StageError> {
        match self.current.as_mut() {
            Some(active) if active.live => {
                active.stage.tick(delta, &mut context.stage_context());
            }
            _ => return Ok(()),
        }
        self.process_transitions(context)
    }

    /// Applies queued transitions in FIFO order until the queue is empty.
    fn process_transitions(&mut self, context: &mut GlobalContext<S>) -> Result<(), StageError> {
        let mut applied = 0;

        while let Some(next) = context.transitions.pop() {
            if applied == MAX_CHAINED_TRANSITIONS {
                error!(
                    "Stage transitions did not settle after {} activations, dropping {} pending",
                    applied,
                    context.transitions.len() + 1
                );
                context.transitions.clear();
                return Err(StageError::TransitionLoop {
                    limit: MAX_CHAINED_TRANSITIONS,
                });
            }
            applied += 1;

            if let Err(e) = self.activate(next, context) {
                context.transitions.clear();
                return Err(e);
            }
        }

        Ok(())
    }

    //--- Internal Helpers -------------------------------------------------

    fn activate(&mut self, key: S, context: &mut GlobalContext<S>) -> Result<(), StageError> {
        let Some(mut stage) = self.registry.instantiate(key) else {
            error!(
                "Stage {:?} is not registered, staying on {:?}",
                key.name(),
                self.current().map(|key| key.name())
            );
            return Err(StageError::Unregistered(key.name()));
        };

        if let Some(previous) = self.current.take() {
            debug!("Leaving stage {:?}", previous.key.name());
        }

        info!("Starting stage {:?}", key.name());
        stage.setup(&mut context.stage_context());

        let mut queue = AssetQueue::new();
        stage.prepare_assets(&mut queue);
        if !queue.is_empty() {
            debug!("Stage {:?} requested {} assets", key.name(), queue.len());
        }

        let loaded = load_queue(self.loader.as_mut(), &queue, &mut context.assets, |fraction| {
            stage.load_progress(fraction)
        });

        if let Err(source) = loaded {
            error!("Stage {:?} failed to load: {}", key.name(), source);
            self.current = Some(ActiveStage {
                key,
                stage,
                live: false,
            });
            return Err(StageError::AssetLoad {
                stage: key.name(),
                source,
            });
        }

        stage.build(&mut context.stage_context());
        self.current = Some(ActiveStage {
            key,
            stage,
            live: true,
        });
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
