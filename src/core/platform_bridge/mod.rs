//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with core systems.
//
// This module defines the contract between the platform implementation
// and core logic, so the core never touches windowing types.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `input_pump`: Core-side draining of input into per-frame lists
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod input_pump;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use input_pump::{FrameInput, InputPump};
pub(crate) use interface::{PlatformError, PlatformEvent};
