//=========================================================================
// Preloader Stage
//=========================================================================
//
// Shows a progress bar while the menu's assets load, then registers the
// turning coin animation and moves on to the main menu.
//
// Layout:
// ```text
//   outline  468 x 32, centered on (512, 384), 1px white stroke
//   bar      starts at x = 512 - 230, 4..464 wide, 28 high
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::animation::{generate_frame_names, AnimationDef};
use crate::core::assets::AssetQueue;
use crate::core::display::{DisplayList, DisplayObject};
use crate::core::scene::{Stage, StageContext};
use crate::core::tween::Repeat;
use crate::core::ui::{ProgressBar, BAR_MIN_WIDTH};

use super::{background, GameStage, COIN_ANIM, COIN_ATLAS, PLATFORMS};

//=== Layout ==============================================================

const OUTLINE_WIDTH: f32 = 468.0;
const OUTLINE_HEIGHT: f32 = 32.0;
const BAR_HEIGHT: f32 = 28.0;
const BAR_INSET: f32 = 230.0;
const WHITE: u32 = 0xffffff;

const PLATFORM_FRAME: (u32, u32) = (64, 16);
const COIN_FRAME_RATE: f32 = 3.0;

//=== Preloader ===========================================================

pub struct Preloader {
    display: DisplayList,
    bar: Option<ProgressBar>,
}

impl Preloader {
    pub fn new() -> Self {
        Self {
            display: DisplayList::new(),
            bar: None,
        }
    }

    /// Current width of the progress bar, once it exists.
    pub fn bar_width(&self) -> Option<f32> {
        let bar = self.bar?;
        self.display.get(bar.element()).map(|object| object.width)
    }

    pub fn display(&self) -> &DisplayList {
        &self.display
    }
}

impl Default for Preloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage<GameStage> for Preloader {
    fn setup(&mut self, ctx: &mut StageContext<'_, GameStage>) {
        let (cx, cy) = ctx.config.center();

        self.display.add(background(ctx.config));
        self.display.add(
            DisplayObject::rectangle(cx, cy, OUTLINE_WIDTH, OUTLINE_HEIGHT).with_stroke(1.0, WHITE),
        );

        let bar = self.display.add(
            DisplayObject::rectangle(cx - BAR_INSET, cy, BAR_MIN_WIDTH, BAR_HEIGHT)
                .with_fill(WHITE, 1.0)
                .with_origin(0.0, 0.5),
        );
        self.bar = Some(ProgressBar::new(bar));
    }

    fn prepare_assets(&mut self, queue: &mut AssetQueue) {
        queue.spritesheet(
            PLATFORMS,
            "images/platforms.png",
            PLATFORM_FRAME.0,
            PLATFORM_FRAME.1,
        );
        queue.atlas(COIN_ATLAS, "images/coin.png", "images/coin.json");
    }

    fn load_progress(&mut self, fraction: f32) {
        if let Some(bar) = self.bar {
            let width = bar.report(fraction, &mut self.display);
            debug!("Loading {:.0}% (bar {}px)", fraction * 100.0, width);
        }
    }

    fn build(&mut self, ctx: &mut StageContext<'_, GameStage>) {
        ctx.animations.create(AnimationDef {
            key: COIN_ANIM.to_string(),
            texture: COIN_ATLAS.to_string(),
            frames: generate_frame_names("TurningCoin", ".png", 1, 4, 0),
            frame_rate: COIN_FRAME_RATE,
            repeat: Repeat::Infinite,
        });

        ctx.start(GameStage::MainMenu);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
