//=========================================================================
// UI Layer
//=========================================================================
//
// Everything a stage puts on screen, bundled with what drives it.
//
// Architecture:
//   UiLayer<A>
//     ├─ display: DisplayList
//     ├─ tweens: TweenManager
//     ├─ controls: Vec<InteractiveControl<A>>  (indexed by ControlId)
//     ├─ router: PointerRouter
//     └─ players: Vec<(ElementId, AnimationPlayer)>
//
// Flow:
//   handle_pointer(input) → router → control.handle() → fired actions
//   update(delta)         → tweens + frame animations
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;
use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::{ControlVisuals, InteractiveControl};
use crate::core::animation::{AnimationDef, AnimationPlayer};
use crate::core::display::{DisplayList, DisplayObject, ElementId, FrameRef};
use crate::core::input::{Action, ControlId, HitTarget, PointerInput, PointerRouter};
use crate::core::tween::{TweenConfig, TweenId, TweenManager};

//=== UiLayer =============================================================

/// Stage-owned display, input and animation state.
///
/// Dropped with its stage, taking running tweens and controls with it.
pub struct UiLayer<A: Action> {
    display: DisplayList,
    tweens: TweenManager,
    controls: Vec<InteractiveControl<A>>,
    router: PointerRouter,
    players: Vec<(ElementId, AnimationPlayer)>,
}

impl<A: Action> UiLayer<A> {
    pub fn new() -> Self {
        Self {
            display: DisplayList::new(),
            tweens: TweenManager::new(),
            controls: Vec::new(),
            router: PointerRouter::new(),
            players: Vec::new(),
        }
    }

    //--- Construction -----------------------------------------------------

    /// Adds a passive element.
    pub fn add_element(&mut self, object: DisplayObject) -> ElementId {
        self.display.add(object)
    }

    /// Adds an element driven by pointer input.
    pub fn add_control(
        &mut self,
        object: DisplayObject,
        visuals: ControlVisuals,
        action: Option<A>,
    ) -> ControlId {
        let element = self.display.add(object);
        let id = ControlId(self.controls.len());
        self.controls
            .push(InteractiveControl::new(element, visuals, action));
        self.router.register(element, HitTarget::Control(id));
        id
    }

    /// Adds an element that swallows pointer input beneath it.
    pub fn add_blocker(&mut self, object: DisplayObject) -> ElementId {
        let element = self.display.add(object);
        self.router.register(element, HitTarget::Blocker);
        element
    }

    /// Starts a frame animation on a sprite and shows its first frame.
    pub fn play_animation(&mut self, element: ElementId, def: Arc<AnimationDef>) {
        let player = AnimationPlayer::new(def);
        if let (Some(object), Some(frame)) =
            (self.display.get_mut(element), player.current_frame())
        {
            object.set_frame(FrameRef::Named(frame.to_string()));
        }
        self.players.push((element, player));
    }

    /// Starts a tween on one of this layer's elements.
    pub fn add_tween(&mut self, config: TweenConfig) -> Option<TweenId> {
        self.tweens.add(config, &self.display)
    }

    //--- Frame Processing -------------------------------------------------

    /// Routes one pointer input and returns the actions it fired.
    pub fn handle_pointer(&mut self, input: PointerInput) -> Vec<A> {
        let routed = self.router.route(input, &self.display);

        routed
            .into_iter()
            .filter_map(|(id, event)| {
                let control = self.controls.get_mut(id.0)?;
                control.handle(event, &mut self.display, &mut self.tweens)
            })
            .collect()
    }

    /// Advances tweens and frame animations.
    pub fn update(&mut self, delta: Duration) {
        self.tweens.update(delta, &mut self.display);

        for (element, player) in &mut self.players {
            if player.update(delta) {
                if let (Some(object), Some(frame)) =
                    (self.display.get_mut(*element), player.current_frame())
                {
                    object.set_frame(FrameRef::Named(frame.to_string()));
                }
            }
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn display(&self) -> &DisplayList {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut DisplayList {
        &mut self.display
    }

    pub fn tweens(&self) -> &TweenManager {
        &self.tweens
    }

    pub fn control(&self, id: ControlId) -> Option<&InteractiveControl<A>> {
        self.controls.get(id.0)
    }

    pub fn get(&self, element: ElementId) -> Option<&DisplayObject> {
        self.display.get(element)
    }

    pub fn get_mut(&mut self, element: ElementId) -> Option<&mut DisplayObject> {
        self.display.get_mut(element)
    }
}

impl<A: Action> Default for UiLayer<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::animation::generate_frame_names;
    use crate::core::display::TextStyle;
    use crate::core::tween::Repeat;
    use crate::core::ui::ControlState;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Press,
    }

    impl Action for TestAction {}

    fn click_at(layer: &mut UiLayer<TestAction>, x: f32, y: f32) -> Vec<TestAction> {
        let mut fired = layer.handle_pointer(PointerInput::Moved { x, y });
        fired.extend(layer.handle_pointer(PointerInput::Pressed));
        fired.extend(layer.handle_pointer(PointerInput::Released));
        fired
    }

    fn button(layer: &mut UiLayer<TestAction>) -> ControlId {
        let label = DisplayObject::text(100.0, 100.0, "Press", TextStyle::sized(20.0))
            .with_origin(0.5, 0.5);
        layer.add_control(label, ControlVisuals::text_button(), Some(TestAction::Press))
    }

    #[test]
    fn click_on_control_fires_action() {
        let mut layer = UiLayer::new();
        let id = button(&mut layer);

        assert_eq!(click_at(&mut layer, 100.0, 100.0), vec![TestAction::Press]);
        assert_eq!(layer.control(id).map(|c| c.state()), Some(ControlState::Hover));
    }

    #[test]
    fn click_elsewhere_fires_nothing() {
        let mut layer = UiLayer::new();
        button(&mut layer);
        assert!(click_at(&mut layer, 600.0, 600.0).is_empty());
    }

    #[test]
    fn pointer_leaving_window_rests_pressed_control() {
        let mut layer = UiLayer::new();
        let id = button(&mut layer);

        layer.handle_pointer(PointerInput::Moved { x: 100.0, y: 100.0 });
        layer.handle_pointer(PointerInput::Pressed);
        assert_eq!(layer.control(id).map(|c| c.state()), Some(ControlState::Active));

        assert!(layer.handle_pointer(PointerInput::Left).is_empty());
        assert_eq!(layer.control(id).map(|c| c.state()), Some(ControlState::Rest));
        assert!(layer.handle_pointer(PointerInput::Released).is_empty());
    }

    #[test]
    fn blocker_swallows_clicks_until_hidden() {
        let mut layer = UiLayer::new();
        button(&mut layer);
        let dimmer = layer.add_blocker(DisplayObject::rectangle(0.0, 0.0, 1e6, 1e6));

        assert!(click_at(&mut layer, 100.0, 100.0).is_empty());

        if let Some(object) = layer.get_mut(dimmer) {
            object.visible = false;
        }
        assert_eq!(click_at(&mut layer, 101.0, 100.0), vec![TestAction::Press]);
    }

    #[test]
    fn animation_updates_sprite_frame() {
        let mut layer = UiLayer::<TestAction>::new();
        let coin = layer.add_element(DisplayObject::sprite(
            0.0,
            0.0,
            "coin_atlas",
            FrameRef::Index(0),
            (10.0, 10.0),
        ));
        layer.play_animation(
            coin,
            Arc::new(AnimationDef {
                key: "spin".to_string(),
                texture: "coin_atlas".to_string(),
                frames: generate_frame_names("TurningCoin", ".png", 1, 4, 0),
                frame_rate: 10.0,
                repeat: Repeat::Infinite,
            }),
        );
        assert_eq!(
            layer.get(coin).and_then(|o| o.frame()),
            Some(&FrameRef::Named("TurningCoin1.png".to_string()))
        );

        layer.update(Duration::from_millis(110));
        assert_eq!(
            layer.get(coin).and_then(|o| o.frame()),
            Some(&FrameRef::Named("TurningCoin2.png".to_string()))
        );
    }
}
