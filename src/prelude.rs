//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use tap_claim::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};

// Global systems and context
pub use crate::core::config::GameConfig;
pub use crate::core::globals::{GlobalContext, GlobalSystems};

// Input system
pub use crate::core::input::{Action, InputEvent, MouseButton, PointerInput};

// Stage system
pub use crate::core::scene::{Stage, StageContext, StageError, StageKey, StageManager, StageRegistry};

// Assets
pub use crate::core::assets::{AssetLoader, AssetQueue};

// Display and UI
pub use crate::core::display::{DisplayObject, ElementId, FrameRef, TextStyle};
pub use crate::core::ui::{ControlVisuals, DialogGroup, ProgressBar, UiLayer};
