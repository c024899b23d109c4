//=========================================================================
// Game Stage
//=========================================================================
//
// Placeholder play field: a title and a button that ends the round.
//
//=========================================================================

use std::time::Duration;

use log::info;

use crate::core::display::DisplayObject;
use crate::core::input::{Action, ControlId, PointerInput};
use crate::core::scene::{Stage, StageContext};
use crate::core::ui::{ControlState, ControlVisuals, UiLayer, TEXT_BUTTON_REST_FILL};

use super::{background, pixel_text, GameStage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    Finish,
}

impl Action for GameAction {}

pub struct Game {
    ui: UiLayer<GameAction>,
    finish: Option<ControlId>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            ui: UiLayer::new(),
            finish: None,
        }
    }

    pub fn ui(&self) -> &UiLayer<GameAction> {
        &self.ui
    }

    pub fn finish_state(&self) -> Option<ControlState> {
        self.ui.control(self.finish?).map(|c| c.state())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage<GameStage> for Game {
    fn build(&mut self, ctx: &mut StageContext<'_, GameStage>) {
        let (cx, _) = ctx.config.center();

        self.ui.add_element(background(ctx.config));
        self.ui
            .add_element(DisplayObject::text(cx, 300.0, "Game", pixel_text(64.0)).with_origin(0.5, 0.5));

        self.finish = Some(self.ui.add_control(
            DisplayObject::text(
                cx,
                460.0,
                "Finish",
                pixel_text(40.0).with_fill(TEXT_BUTTON_REST_FILL),
            )
            .with_origin(0.5, 0.5),
            ControlVisuals::text_button(),
            Some(GameAction::Finish),
        ));
    }

    fn pointer(&mut self, input: PointerInput, ctx: &mut StageContext<'_, GameStage>) {
        for action in self.ui.handle_pointer(input) {
            match action {
                GameAction::Finish => {
                    info!("Round finished");
                    ctx.start(GameStage::GameOver);
                }
            }
        }
    }

    fn tick(&mut self, delta: Duration, _ctx: &mut StageContext<'_, GameStage>) {
        self.ui.update(delta);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
