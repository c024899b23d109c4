//=========================================================================
// Progress Bar
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::display::{DisplayList, ElementId};

//=== Constants ===========================================================

/// Bar width at zero progress.
pub const BAR_MIN_WIDTH: f32 = 4.0;

/// Bar width when loading completes.
pub const BAR_MAX_WIDTH: f32 = 464.0;

//=== ProgressBar =========================================================

/// Grows a rectangle with the loader's progress.
///
/// The bar only mirrors the fraction it is given; a regressing source
/// shrinks it.
#[derive(Debug, Clone, Copy)]
pub struct ProgressBar {
    element: ElementId,
}

impl ProgressBar {
    pub fn new(element: ElementId) -> Self {
        Self { element }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Width for a loaded fraction, clamped to `[0, 1]`. NaN counts as 0.
    pub fn width_for(fraction: f32) -> f32 {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        BAR_MIN_WIDTH + (BAR_MAX_WIDTH - BAR_MIN_WIDTH) * fraction
    }

    /// Resizes the bar and returns the new width.
    pub fn report(&self, fraction: f32, display: &mut DisplayList) -> f32 {
        let width = Self::width_for(fraction);
        if let Some(object) = display.get_mut(self.element) {
            object.width = width;
        }
        width
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::display::DisplayObject;

    #[test]
    fn width_endpoints_and_clamping() {
        assert_eq!(ProgressBar::width_for(0.0), 4.0);
        assert_eq!(ProgressBar::width_for(1.0), 464.0);
        assert_eq!(ProgressBar::width_for(0.5), 234.0);
        assert_eq!(ProgressBar::width_for(1.5), 464.0);
        assert_eq!(ProgressBar::width_for(-0.3), 4.0);
        assert_eq!(ProgressBar::width_for(f32::NAN), 4.0);
    }

    #[test]
    fn report_resizes_and_may_shrink() {
        let mut display = DisplayList::new();
        let bar = ProgressBar::new(display.add(DisplayObject::rectangle(282.0, 384.0, 4.0, 28.0)));

        assert_eq!(bar.report(0.75, &mut display), 349.0);
        assert_eq!(display.get(bar.element()).unwrap().width, 349.0);

        bar.report(0.25, &mut display);
        assert_eq!(display.get(bar.element()).unwrap().width, 119.0);
    }
}
