//=========================================================================
// Pointer Router
//=========================================================================
//
// Explicit dispatch table from hit regions to interactive controls.
//
// Architecture:
//   PointerInput → topmost interactive region under the pointer
//                → Enter/Leave on hover change
//                → Down/Up to the hovered control
//
// Hover is re-evaluated on every input, so elements hidden or moved
// since the last event are picked up without a separate refresh. While
// the pointer is outside the canvas nothing is hovered.
// Blocking regions absorb input without owning a control, occluding
// everything beneath them.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{PointerEvent, PointerInput};
use crate::core::display::{DisplayList, ElementId};

//=== ControlId ===========================================================

/// Handle to a control registered with a stage's UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub(crate) usize);

//=== HitTarget ===========================================================

/// What receives input that lands on a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Input is routed to the control.
    Control(ControlId),

    /// Input is swallowed (e.g. a modal dimmer).
    Blocker,
}

#[derive(Debug, Clone, Copy)]
struct HitRegion {
    element: ElementId,
    target: HitTarget,
}

//=== PointerRouter =======================================================

/// Routes pointer input to the topmost interactive region.
#[derive(Debug, Default)]
pub struct PointerRouter {
    regions: Vec<HitRegion>,
    pointer: (f32, f32),
    outside: bool,
    hovered: Option<HitTarget>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `element` as a hit region for `target`.
    pub fn register(&mut self, element: ElementId, target: HitTarget) {
        self.regions.push(HitRegion { element, target });
    }

    /// Target currently under the pointer, if any.
    pub fn hovered(&self) -> Option<HitTarget> {
        self.hovered
    }

    pub fn pointer_position(&self) -> (f32, f32) {
        self.pointer
    }

    /// Translates one pointer input into per-control events.
    ///
    /// Leave is always emitted before Enter when hover moves between
    /// controls.
    pub fn route(
        &mut self,
        input: PointerInput,
        display: &DisplayList,
    ) -> Vec<(ControlId, PointerEvent)> {
        let mut routed = Vec::new();

        match input {
            PointerInput::Moved { x, y } => {
                self.pointer = (x, y);
                self.outside = false;
            }
            PointerInput::Left => self.outside = true,
            PointerInput::Pressed | PointerInput::Released => {}
        }

        //--- Hover tracking -----------------------------------------------
        let under_pointer = self.topmost(display);
        if under_pointer != self.hovered {
            if let Some(HitTarget::Control(id)) = self.hovered {
                routed.push((id, PointerEvent::Leave));
            }
            if let Some(HitTarget::Control(id)) = under_pointer {
                routed.push((id, PointerEvent::Enter));
            }
            self.hovered = under_pointer;
        }

        //--- Button events ------------------------------------------------
        let button = match input {
            PointerInput::Pressed => Some(PointerEvent::Down),
            PointerInput::Released => Some(PointerEvent::Up),
            PointerInput::Moved { .. } | PointerInput::Left => None,
        };
        if let (Some(event), Some(HitTarget::Control(id))) = (button, self.hovered) {
            routed.push((id, event));
        }

        routed
    }

    //--- Internal Helpers -------------------------------------------------

    fn topmost(&self, display: &DisplayList) -> Option<HitTarget> {
        if self.outside {
            return None;
        }
        let (px, py) = self.pointer;

        self.regions
            .iter()
            .filter_map(|region| {
                let object = display.get(region.element)?;
                (object.is_interactive() && object.contains(px, py))
                    .then_some((object.depth, region.element, region.target))
            })
            .max_by_key(|(depth, element, _)| (*depth, *element))
            .map(|(_, _, target)| target)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
