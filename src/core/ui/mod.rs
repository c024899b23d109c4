//=========================================================================
// UI Components
//=========================================================================
//
// Building blocks stages assemble their screens from.
//
// Components:
// - `control`: pointer state machine (TextButton / CoinButton visuals)
// - `dialog`: modal group toggled as one unit
// - `progress`: loading bar driven by a fraction
// - `layer`: per-stage bundle of display, tweens, controls and routing
//
//=========================================================================

//=== Module Declarations =================================================

mod control;
mod dialog;
mod layer;
mod progress;

//=== Public API ==========================================================

pub use control::{
    ControlState, ControlVisuals, EffectTarget, InteractiveControl, VisualEffect,
    TEXT_BUTTON_ACTIVE_FILL, TEXT_BUTTON_HOVER_FILL, TEXT_BUTTON_REST_FILL,
};
pub use dialog::DialogGroup;
pub use layer::UiLayer;
pub use progress::{ProgressBar, BAR_MAX_WIDTH, BAR_MIN_WIDTH};
