//=========================================================================
// Game Over Stage
//=========================================================================
//
// Final screen. Starts nothing.
//
//=========================================================================

use crate::core::display::{DisplayList, DisplayObject};
use crate::core::scene::{Stage, StageContext};

use super::{background, pixel_text, GameStage};

pub struct GameOver {
    display: DisplayList,
}

impl GameOver {
    pub fn new() -> Self {
        Self {
            display: DisplayList::new(),
        }
    }

    pub fn display(&self) -> &DisplayList {
        &self.display
    }
}

impl Default for GameOver {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage<GameStage> for GameOver {
    fn build(&mut self, ctx: &mut StageContext<'_, GameStage>) {
        let (cx, cy) = ctx.config.center();

        self.display.add(background(ctx.config));
        self.display.add(
            DisplayObject::text(cx, cy, "Game Over", pixel_text(64.0).with_stroke("#000000", 8.0))
                .with_origin(0.5, 0.5),
        );
    }
}
