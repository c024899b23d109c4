//=========================================================================
// Main Menu Stage
//=========================================================================
//
// Title screen with the claimable coin and the wallet dialog.
//
// Layers, bottom to top:
// ```text
//   background, drifting platforms (ambient pool)
//   title, spinning coin + counter, coin button
//   dimmer (blocks everything beneath while the dialog is up)
//   pointer glyphs, "Connect Wallet" button
//   "Loading..." (hidden until the coin is claimed)
// ```
//
// Connect Wallet dismisses the dialog; claiming the coin reveals the
// loading text, and one full reveal cycle later the game starts.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

//=== Internal Dependencies ===============================================

use crate::core::background::{AmbientPool, AmbientSpawn, WrapBounds};
use crate::core::config::Palette;
use crate::core::display::{DisplayObject, ElementId, FrameRef, TextStyle};
use crate::core::input::{Action, ControlId, PointerInput};
use crate::core::scene::{Stage, StageContext};
use crate::core::tween::{Repeat, TweenConfig, TweenProperty};
use crate::core::ui::{ControlState, ControlVisuals, DialogGroup, UiLayer};

use super::{background, pixel_text, GameStage, COIN_ANIM, COIN_ATLAS, PLATFORMS};

//=== Layout ==============================================================

const TITLE: &str = "Tap to Claim!";
const COUNTER: &str = "001000";
const WHITE: &str = "#ffffff";

const PLATFORM_WRAP_MARGIN: f32 = 50.0;
const PLATFORM_FRAME: (f32, f32) = (64.0, 16.0);
const COIN_FRAME: (f32, f32) = (128.0, 128.0);
const COIN_ICON_SCALE: f32 = 0.2;

const DIMMER_SIZE: f32 = 1_000_000.0;
const DIMMER_ALPHA: f32 = 0.95;

const REVEAL_DURATION: Duration = Duration::from_millis(2000);
const REVEAL_HOLD: Duration = Duration::from_millis(500);

/// How long "Loading..." stays up before the game starts.
const LOADING_CYCLE: Duration = Duration::from_millis(2500);

//=== MenuAction ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    ClaimCoin,
    ConnectWallet,
}

impl Action for MenuAction {}

//=== MainMenu ============================================================

/// Handles to what `build()` created.
struct Widgets {
    pool: AmbientPool,
    platforms: Vec<ElementId>,
    coin_button: ControlId,
    connect_button: ControlId,
    dialog: DialogGroup,
    loading: ElementId,
}

pub struct MainMenu {
    ui: UiLayer<MenuAction>,
    rng: StdRng,
    widgets: Option<Widgets>,
    loading_for: Option<Duration>,
    leaving: bool,
}

impl MainMenu {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Deterministic platform layout.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            ui: UiLayer::new(),
            rng,
            widgets: None,
            loading_for: None,
            leaving: false,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn ui(&self) -> &UiLayer<MenuAction> {
        &self.ui
    }

    pub fn pool(&self) -> Option<&AmbientPool> {
        self.widgets.as_ref().map(|w| &w.pool)
    }

    pub fn dialog(&self) -> Option<&DialogGroup> {
        self.widgets.as_ref().map(|w| &w.dialog)
    }

    pub fn is_loading(&self) -> bool {
        self.widgets
            .as_ref()
            .and_then(|w| self.ui.get(w.loading))
            .is_some_and(|text| text.visible)
    }

    pub fn coin_button_state(&self) -> Option<ControlState> {
        let widgets = self.widgets.as_ref()?;
        self.ui.control(widgets.coin_button).map(|c| c.state())
    }

    pub fn connect_button_state(&self) -> Option<ControlState> {
        let widgets = self.widgets.as_ref()?;
        self.ui.control(widgets.connect_button).map(|c| c.state())
    }

    //--- Construction Helpers ---------------------------------------------

    fn spawn_platforms(&mut self, ctx: &StageContext<'_, GameStage>) -> (AmbientPool, Vec<ElementId>) {
        let config = ctx.config;
        let bounds = WrapBounds::for_canvas(config.canvas_width, PLATFORM_WRAP_MARGIN, -10.0);
        let pool = AmbientPool::spawn(
            &AmbientSpawn::platforms(config.canvas_height),
            bounds,
            &mut self.rng,
        )
        .unwrap_or_else(|e| {
            error!("Platforms not spawned: {}", e);
            AmbientPool::from_actors(Vec::new(), bounds)
        });

        let size = ctx
            .assets
            .sheet_frame_size(PLATFORMS)
            .unwrap_or(PLATFORM_FRAME);

        let sprites = pool
            .actors()
            .iter()
            .map(|actor| {
                self.ui.add_element(
                    DisplayObject::sprite(actor.x, actor.y, PLATFORMS, FrameRef::Index(actor.frame()), size)
                        .with_scale(actor.scale())
                        .with_alpha(actor.alpha()),
                )
            })
            .collect();

        (pool, sprites)
    }

    fn coin_sprite(ctx: &StageContext<'_, GameStage>, x: f32, y: f32, frame: &str) -> DisplayObject {
        let size = ctx
            .assets
            .atlas_frame_size(COIN_ATLAS, frame)
            .unwrap_or(COIN_FRAME);
        DisplayObject::sprite(x, y, COIN_ATLAS, FrameRef::Named(frame.to_string()), size)
    }

    //--- Actions ----------------------------------------------------------

    fn apply(&mut self, action: MenuAction) {
        let Some(widgets) = self.widgets.as_mut() else {
            return;
        };

        match action {
            MenuAction::ClaimCoin => {
                if let Some(text) = self.ui.get_mut(widgets.loading) {
                    text.visible = true;
                }
                if self.loading_for.is_none() {
                    info!("Coin claimed, loading game");
                    self.loading_for = Some(Duration::ZERO);
                }
            }
            MenuAction::ConnectWallet => {
                if widgets.dialog.hide(self.ui.display_mut()) {
                    info!("Wallet dialog dismissed");
                }
                self.loading_for = None;
            }
        }
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage<GameStage> for MainMenu {
    fn build(&mut self, ctx: &mut StageContext<'_, GameStage>) {
        let (cx, _) = ctx.config.center();

        self.ui.add_element(background(ctx.config));
        let (pool, platforms) = self.spawn_platforms(ctx);

        //--- Title and coin -----------------------------------------------
        self.ui.add_element(
            DisplayObject::text(cx, 100.0, TITLE, pixel_text(52.0).with_fill(WHITE).with_stroke(WHITE, 1.0))
                .with_origin(0.5, 0.5),
        );

        let coin = self.ui.add_element(
            Self::coin_sprite(ctx, cx - 100.0, 200.0, "TurningCoin1.png").with_scale(COIN_ICON_SCALE),
        );
        match ctx.animations.get(COIN_ANIM) {
            Some(anim) => self.ui.play_animation(coin, anim),
            None => warn!("Animation {:?} missing, coin stays still", COIN_ANIM),
        }

        self.ui.add_element(
            DisplayObject::text(
                cx + 50.0,
                200.0,
                COUNTER,
                pixel_text(40.0)
                    .with_fill(WHITE)
                    .with_stroke(Palette::DarkGold.with_hash(), 2.0),
            )
            .with_origin(0.5, 0.5),
        );

        let coin_button = self.ui.add_control(
            Self::coin_sprite(ctx, cx, 500.0, "Coin1.png"),
            ControlVisuals::coin_button(),
            Some(MenuAction::ClaimCoin),
        );

        //--- Wallet dialog ------------------------------------------------
        let dimmer = self.ui.add_blocker(
            DisplayObject::rectangle(0.0, 0.0, DIMMER_SIZE, DIMMER_SIZE).with_fill(0x000000, DIMMER_ALPHA),
        );

        let glyph = TextStyle::sized(50.0);
        let down = self
            .ui
            .add_element(DisplayObject::text(cx, 284.0, "🔽", glyph.clone()).with_origin(0.5, 0.5));
        let up = self
            .ui
            .add_element(DisplayObject::text(cx, 484.0, "🔼", glyph).with_origin(0.5, 0.5));

        let connect_button = self.ui.add_control(
            DisplayObject::text(
                cx,
                384.0,
                "Connect Wallet",
                pixel_text(40.0)
                    .with_fill(Palette::DarkGold.with_hash())
                    .with_stroke(Palette::Yellow.with_hash(), 3.0),
            )
            .with_origin(0.5, 0.5),
            ControlVisuals::text_button(),
            Some(MenuAction::ConnectWallet),
        );

        let mut members = vec![down, up];
        members.extend(self.ui.control(connect_button).map(|c| c.element()));

        //--- Loading text -------------------------------------------------
        let mut loading_text =
            DisplayObject::text(cx, 384.0, "Loading...", pixel_text(30.0)).with_origin(0.5, 0.5).hidden();
        loading_text.reveal = 0.0;
        let loading = self.ui.add_element(loading_text);

        self.ui.add_tween(
            TweenConfig::new(loading, REVEAL_DURATION)
                .property(TweenProperty::Reveal, 1.0)
                .hold(REVEAL_HOLD)
                .repeat(Repeat::Infinite),
        );

        let dialog = DialogGroup::new(members)
            .with_dimmer(dimmer)
            .with_status(loading);

        debug!("Main menu built with {} elements", self.ui.display().len());

        self.widgets = Some(Widgets {
            pool,
            platforms,
            coin_button,
            connect_button,
            dialog,
            loading,
        });
    }

    fn pointer(&mut self, input: PointerInput, _ctx: &mut StageContext<'_, GameStage>) {
        for action in self.ui.handle_pointer(input) {
            self.apply(action);
        }
    }

    fn tick(&mut self, delta: Duration, ctx: &mut StageContext<'_, GameStage>) {
        self.ui.update(delta);

        if let Some(widgets) = self.widgets.as_mut() {
            widgets.pool.tick();
            for (actor, &sprite) in widgets.pool.actors().iter().zip(&widgets.platforms) {
                if let Some(object) = self.ui.get_mut(sprite) {
                    object.x = actor.x;
                }
            }
        }

        if let Some(elapsed) = self.loading_for.as_mut() {
            *elapsed += delta;
            if *elapsed >= LOADING_CYCLE && !self.leaving {
                self.leaving = true;
                ctx.start(GameStage::Game);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
