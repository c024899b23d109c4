//=========================================================================
// Dialog Group
//=========================================================================
//
// Modal overlay toggled as one unit.
//
// Members flip `active` and `visible` together. The dimmer behind the
// dialog and an optional status text are not members but are hidden
// along with it.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::display::{DisplayList, ElementId};

//=== DialogGroup =========================================================

/// Ordered set of elements shown and hidden together.
#[derive(Debug, Clone)]
pub struct DialogGroup {
    members: Vec<ElementId>,
    dimmer: Option<ElementId>,
    status: Option<ElementId>,
    active: bool,
    visible: bool,
}

impl DialogGroup {
    /// Groups elements that are currently shown.
    pub fn new(members: Vec<ElementId>) -> Self {
        Self {
            members,
            dimmer: None,
            status: None,
            active: true,
            visible: true,
        }
    }

    /// Full-screen backdrop hidden with the dialog.
    pub fn with_dimmer(mut self, dimmer: ElementId) -> Self {
        self.dimmer = Some(dimmer);
        self
    }

    /// Status text hidden with the dialog, never shown by it.
    pub fn with_status(mut self, status: ElementId) -> Self {
        self.status = Some(status);
        self
    }

    pub fn members(&self) -> &[ElementId] {
        &self.members
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Shows and activates every member and the dimmer.
    ///
    /// Returns `false` if the dialog was already shown.
    pub fn show(&mut self, display: &mut DisplayList) -> bool {
        if self.active && self.visible {
            return false;
        }

        for &id in self.members.iter().chain(&self.dimmer) {
            if let Some(object) = display.get_mut(id) {
                object.active = true;
                object.visible = true;
            }
        }

        self.active = true;
        self.visible = true;
        debug!("Dialog shown ({} members)", self.members.len());
        true
    }

    /// Hides and deactivates every member, then hides the dimmer and
    /// the status text.
    ///
    /// Returns `false` if the dialog was already hidden.
    pub fn hide(&mut self, display: &mut DisplayList) -> bool {
        if !self.active && !self.visible {
            return false;
        }

        for &id in &self.members {
            if let Some(object) = display.get_mut(id) {
                object.active = false;
                object.visible = false;
            }
        }
        for &id in self.dimmer.iter().chain(&self.status) {
            if let Some(object) = display.get_mut(id) {
                object.visible = false;
            }
        }

        self.active = false;
        self.visible = false;
        debug!("Dialog hidden ({} members)", self.members.len());
        true
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
