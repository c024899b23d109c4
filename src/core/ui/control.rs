//=========================================================================
// Interactive Control
//=========================================================================
//
// Pointer state machine wrapping one display element.
//
// Transitions:
// ```text
//   Rest   ── Enter ──► Hover    (hover effect)
//   Hover  ── Leave ──► Rest     (rest effect)
//   Active ── Leave ──► Rest     (rest effect)
//   Hover  ── Down  ──► Active   (active effect)
//   Active ── Up    ──► Hover    (hover effect, then action fires)
// ```
// Any other (event, state) pair is dropped without effect.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::display::{DisplayList, ElementId};
use crate::core::input::{Action, PointerEvent};
use crate::core::tween::{Ease, TweenCompletion, TweenConfig, TweenManager, TweenProperty};

//=== Button Constants ====================================================

pub const TEXT_BUTTON_REST_FILL: &str = "#0f0";
pub const TEXT_BUTTON_HOVER_FILL: &str = "#ff0";
pub const TEXT_BUTTON_ACTIVE_FILL: &str = "#0ff";

const COIN_SPIN_ROTATION: f32 = 180.0;
const COIN_SPIN_SCALE: f32 = 1.5;
const COIN_SPIN_DURATION: Duration = Duration::from_millis(1000);
const COIN_FADED_ALPHA: f32 = 0.5;

//=== ControlState ========================================================

/// Pointer state of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlState {
    #[default]
    Rest,
    Hover,
    Active,
}

//=== Visual Effects ======================================================

/// What a visual effect may touch.
pub struct EffectTarget<'a> {
    pub element: ElementId,
    pub display: &'a mut DisplayList,
    pub tweens: &'a mut TweenManager,
}

/// Visual feedback applied on entering a state.
pub type VisualEffect = fn(&mut EffectTarget<'_>);

/// Per-state visual effects. Button variants differ only in these.
#[derive(Debug, Clone, Copy)]
pub struct ControlVisuals {
    pub rest: VisualEffect,
    pub hover: VisualEffect,
    pub active: VisualEffect,
}

impl ControlVisuals {
    /// Text label recolored per state.
    pub fn text_button() -> Self {
        Self {
            rest: |target| set_fill(target, TEXT_BUTTON_REST_FILL),
            hover: |target| set_fill(target, TEXT_BUTTON_HOVER_FILL),
            active: |target| set_fill(target, TEXT_BUTTON_ACTIVE_FILL),
        }
    }

    /// Coin sprite that spins up and back on press.
    pub fn coin_button() -> Self {
        Self {
            rest: |target| debug!("Coin button {:?} at rest", target.element),
            hover: |target| debug!("Coin button {:?} hovered", target.element),
            active: spin_coin,
        }
    }
}

fn set_fill(target: &mut EffectTarget<'_>, color: &str) {
    if let Some(object) = target.display.get_mut(target.element) {
        object.set_text_fill(color);
    }
}

fn spin_coin(target: &mut EffectTarget<'_>) {
    let config = TweenConfig::new(target.element, COIN_SPIN_DURATION)
        .property(TweenProperty::Rotation, COIN_SPIN_ROTATION)
        .property(TweenProperty::ScaleX, COIN_SPIN_SCALE)
        .property(TweenProperty::ScaleY, COIN_SPIN_SCALE)
        .ease(Ease::Power1)
        .yoyo()
        .on_complete(TweenCompletion::SetAlpha(COIN_FADED_ALPHA));

    target.tweens.add(config, target.display);
}

//=== InteractiveControl ==================================================

/// A display element driven by pointer events.
pub struct InteractiveControl<A: Action> {
    element: ElementId,
    state: ControlState,
    visuals: ControlVisuals,
    action: Option<A>,
}

impl<A: Action> InteractiveControl<A> {
    pub fn new(element: ElementId, visuals: ControlVisuals, action: Option<A>) -> Self {
        Self {
            element,
            state: ControlState::Rest,
            visuals,
            action,
        }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    /// Applies one pointer event.
    ///
    /// Returns the bound action when a press completes (Active → Hover).
    pub fn handle(
        &mut self,
        event: PointerEvent,
        display: &mut DisplayList,
        tweens: &mut TweenManager,
    ) -> Option<A> {
        let (next, effect) = match (self.state, event) {
            (ControlState::Rest, PointerEvent::Enter) => (ControlState::Hover, self.visuals.hover),
            (ControlState::Hover | ControlState::Active, PointerEvent::Leave) => {
                (ControlState::Rest, self.visuals.rest)
            }
            (ControlState::Hover, PointerEvent::Down) => (ControlState::Active, self.visuals.active),
            (ControlState::Active, PointerEvent::Up) => (ControlState::Hover, self.visuals.hover),
            _ => return None,
        };

        debug!(
            "Control {:?}: {:?} --{:?}--> {:?}",
            self.element, self.state, event, next
        );

        let released = self.state == ControlState::Active && next == ControlState::Hover;
        self.state = next;
        effect(&mut EffectTarget {
            element: self.element,
            display,
            tweens,
        });

        if released {
            self.action
        } else {
            None
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::display::{DisplayObject, FrameRef, TextStyle};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Claim,
    }

    impl Action for TestAction {}

    struct Fixture {
        display: DisplayList,
        tweens: TweenManager,
        control: InteractiveControl<TestAction>,
    }

    impl Fixture {
        fn text() -> Self {
            let mut display = DisplayList::new();
            let element = display.add(DisplayObject::text(0.0, 0.0, "Go", TextStyle::sized(20.0)));
            Self {
                display,
                tweens: TweenManager::new(),
                control: InteractiveControl::new(
                    element,
                    ControlVisuals::text_button(),
                    Some(TestAction::Claim),
                ),
            }
        }

        fn coin() -> Self {
            let mut display = DisplayList::new();
            let element = display.add(DisplayObject::sprite(
                0.0,
                0.0,
                "coin_atlas",
                FrameRef::Named("Coin1.png".to_string()),
                (64.0, 64.0),
            ));
            Self {
                display,
                tweens: TweenManager::new(),
                control: InteractiveControl::new(
                    element,
                    ControlVisuals::coin_button(),
                    Some(TestAction::Claim),
                ),
            }
        }

        fn send(&mut self, events: &[PointerEvent]) -> Vec<TestAction> {
            events
                .iter()
                .filter_map(|&event| {
                    self.control
                        .handle(event, &mut self.display, &mut self.tweens)
                })
                .collect()
        }

        fn fill(&self) -> Option<&str> {
            self.display.get(self.control.element()).and_then(|o| o.text_fill())
        }
    }

    //=== State Machine ===================================================

    #[test]
    fn full_click_fires_action_once() {
        let mut fixture = Fixture::text();
        let fired = fixture.send(&[PointerEvent::Enter, PointerEvent::Down, PointerEvent::Up]);

        assert_eq!(fired, vec![TestAction::Claim]);
        assert_eq!(fixture.control.state(), ControlState::Hover);
    }

    #[test]
    fn press_from_rest_is_ignored() {
        let mut fixture = Fixture::text();
        let fired = fixture.send(&[PointerEvent::Down]);

        assert!(fired.is_empty());
        assert_eq!(fixture.control.state(), ControlState::Rest);
        assert_eq!(fixture.fill(), Some("#ffffff"), "No effect applied");
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut fixture = Fixture::text();
        let fired = fixture.send(&[PointerEvent::Enter, PointerEvent::Up, PointerEvent::Up]);
        assert!(fired.is_empty());
        assert_eq!(fixture.control.state(), ControlState::Hover);
    }

    #[test]
    fn leaving_while_pressed_cancels() {
        let mut fixture = Fixture::text();
        let fired = fixture.send(&[
            PointerEvent::Enter,
            PointerEvent::Down,
            PointerEvent::Leave,
            PointerEvent::Up,
        ]);

        assert!(fired.is_empty());
        assert_eq!(fixture.control.state(), ControlState::Rest);
    }

    #[test]
    fn second_click_fires_again() {
        let mut fixture = Fixture::text();
        let fired = fixture.send(&[
            PointerEvent::Enter,
            PointerEvent::Down,
            PointerEvent::Up,
            PointerEvent::Down,
            PointerEvent::Up,
        ]);
        assert_eq!(fired.len(), 2);
    }

    //=== Text Button Visuals =============================================

    #[test]
    fn text_button_recolors_per_state() {
        let mut fixture = Fixture::text();

        fixture.send(&[PointerEvent::Enter]);
        assert_eq!(fixture.fill(), Some(TEXT_BUTTON_HOVER_FILL));

        fixture.send(&[PointerEvent::Down]);
        assert_eq!(fixture.fill(), Some(TEXT_BUTTON_ACTIVE_FILL));

        fixture.send(&[PointerEvent::Up]);
        assert_eq!(fixture.fill(), Some(TEXT_BUTTON_HOVER_FILL));

        fixture.send(&[PointerEvent::Leave]);
        assert_eq!(fixture.fill(), Some(TEXT_BUTTON_REST_FILL));
    }

    //=== Coin Button Visuals =============================================

    #[test]
    fn coin_press_starts_spin_tween() {
        let mut fixture = Fixture::coin();
        fixture.send(&[PointerEvent::Enter]);
        assert!(fixture.tweens.is_empty(), "Hover only logs");

        fixture.send(&[PointerEvent::Down]);
        assert_eq!(fixture.tweens.len(), 1);

        fixture
            .tweens
            .update(Duration::from_millis(2000), &mut fixture.display);
        let coin = fixture.display.get(fixture.control.element()).unwrap();
        assert!(fixture.tweens.is_empty());
        assert!((coin.scale_x - 1.0).abs() < 1e-4, "Yoyo returns to start scale");
        assert_eq!(coin.alpha, COIN_FADED_ALPHA);
    }

    #[test]
    fn repeated_coin_presses_overlap() {
        let mut fixture = Fixture::coin();
        fixture.send(&[
            PointerEvent::Enter,
            PointerEvent::Down,
            PointerEvent::Up,
            PointerEvent::Down,
        ]);
        assert_eq!(fixture.tweens.len(), 2);
    }
}
