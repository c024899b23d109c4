//=========================================================================
// Game Stages
//=========================================================================
//
// The stage set of Tap to Claim.
//
// Flow:
// ```text
//   Boot ──► Preloader ──► MainMenu ──► Game ──► GameOver
//    │          │             │           │
//    │          │             │           └─ Finish button
//    │          │             └─ "Loading..." shown for one reveal cycle
//    │          └─ assets loaded, coin animation registered
//    └─ background loaded
// ```
//
// Asset keys and shared layout helpers live here; each stage owns its
// display state and is rebuilt from scratch on every activation.
//
//=========================================================================

//=== Module Declarations =================================================

mod boot;
mod game;
mod game_over;
mod main_menu;
mod preloader;

#[cfg(test)]
pub(crate) mod testing;

//=== Public API ==========================================================

pub use boot::Boot;
pub use game::{Game, GameAction};
pub use game_over::GameOver;
pub use main_menu::{MainMenu, MenuAction};
pub use preloader::Preloader;

//=== Internal Dependencies ===============================================

use crate::core::config::GameConfig;
use crate::core::display::{DisplayObject, TextAlign, TextStyle};
use crate::core::scene::{StageKey, StageRegistry};

//=== Asset Keys ==========================================================

pub const BACKGROUND: &str = "background";
pub const PLATFORMS: &str = "platforms";
pub const COIN_ATLAS: &str = "coin_atlas";
pub const COIN_ANIM: &str = "turning_coin_anim";

/// Font every stage renders text with.
pub const FONT_FAMILY: &str = "PixelOperator";

//=== GameStage ===========================================================

/// Stages of the game, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStage {
    Boot,
    Preloader,
    MainMenu,
    Game,
    GameOver,
}

impl StageKey for GameStage {
    fn name(&self) -> &'static str {
        match self {
            GameStage::Boot => "Boot",
            GameStage::Preloader => "Preloader",
            GameStage::MainMenu => "MainMenu",
            GameStage::Game => "Game",
            GameStage::GameOver => "GameOver",
        }
    }
}

/// Registry of the full stage set.
pub fn registry() -> StageRegistry<GameStage> {
    StageRegistry::new()
        .with(GameStage::Boot, || Boot)
        .with(GameStage::Preloader, Preloader::new)
        .with(GameStage::MainMenu, MainMenu::new)
        .with(GameStage::Game, Game::new)
        .with(GameStage::GameOver, GameOver::new)
}

//=== Layout Helpers ======================================================

/// Full-canvas background image, centered.
pub(crate) fn background(config: &GameConfig) -> DisplayObject {
    let (cx, cy) = config.center();
    let size = (config.canvas_width as f32, config.canvas_height as f32);
    DisplayObject::image(cx, cy, BACKGROUND, size)
}

/// Centered PixelOperator text style.
pub(crate) fn pixel_text(size: f32) -> TextStyle {
    TextStyle::sized(size)
        .with_family(FONT_FAMILY)
        .with_align(TextAlign::Center)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::testing::{harness, MemoryLoader};
    use super::*;
    use crate::core::globals::GlobalContext;
    use crate::core::input::PointerInput;
    use crate::core::scene::{StageError, StageManager};

    //=====================================================================
    // Registry
    //=====================================================================

    #[test]
    fn registry_holds_every_stage_in_order() {
        let registry = registry();
        assert_eq!(
            registry.keys(),
            vec![
                GameStage::Boot,
                GameStage::Preloader,
                GameStage::MainMenu,
                GameStage::Game,
                GameStage::GameOver
            ]
        );
    }

    #[test]
    fn stages_are_found_by_name() {
        let registry = registry();
        for key in registry.keys() {
            assert_eq!(registry.find_by_name(key.name()), Some(key));
        }
        assert_eq!(registry.find_by_name("Credits"), None);
    }

    #[test]
    fn loading_stage_is_registered_as_preloader() {
        let registry = registry();
        let names: Vec<_> = registry.keys().into_iter().map(|key| key.name()).collect();
        assert_eq!(names, ["Boot", "Preloader", "MainMenu", "Game", "GameOver"]);
        assert_eq!(registry.find_by_name("Preload"), None);
    }

    //=====================================================================
    // Full Flow
    //=====================================================================

    #[test]
    fn boot_chains_through_to_main_menu() {
        let (mut manager, mut context) = harness(MemoryLoader::complete());

        manager.start(GameStage::Boot, &mut context).expect("boot chain");

        assert_eq!(manager.current(), Some(GameStage::MainMenu));
        assert!(manager.is_live());
        assert!(context.assets.contains(BACKGROUND));
        assert!(context.assets.contains(PLATFORMS));
        assert!(context.assets.contains(COIN_ATLAS));
        assert!(context.animations.contains(COIN_ANIM));
    }

    #[test]
    fn missing_asset_stops_at_requesting_stage() {
        let (mut manager, mut context) = harness(MemoryLoader::complete().without(COIN_ATLAS));

        let result = manager.start(GameStage::Boot, &mut context);

        assert!(matches!(result, Err(StageError::AssetLoad { stage: "Preloader", .. })));
        assert_eq!(manager.current(), Some(GameStage::Preloader));
        assert!(!manager.is_live());
    }

    #[test]
    fn unknown_stage_name_keeps_menu() {
        let (mut manager, mut context) = harness(MemoryLoader::complete());
        manager.start(GameStage::Boot, &mut context).expect("boot chain");

        let result = manager.start_named("Credits", &mut context);

        assert!(matches!(result, Err(StageError::UnknownStage(_))));
        assert_eq!(manager.current(), Some(GameStage::MainMenu));
        assert!(manager.is_live());
    }

    fn click(manager: &mut StageManager<GameStage>, ctx: &mut GlobalContext<GameStage>, x: f32, y: f32) {
        let inputs = [
            PointerInput::Moved { x, y },
            PointerInput::Pressed,
            PointerInput::Released,
        ];
        manager.dispatch_pointer(&inputs, ctx).expect("dispatch");
    }

    #[test]
    fn wallet_then_coin_then_loading_reaches_game_over() {
        let (mut manager, mut context) = harness(MemoryLoader::complete());
        manager.start(GameStage::Boot, &mut context).expect("boot chain");

        // Coin is behind the dimmer until the dialog is dismissed.
        click(&mut manager, &mut context, 512.0, 500.0);
        for _ in 0..200 {
            manager.tick(Duration::from_millis(20), &mut context).expect("tick");
        }
        assert_eq!(manager.current(), Some(GameStage::MainMenu));

        click(&mut manager, &mut context, 512.0, 384.0);
        click(&mut manager, &mut context, 512.0, 500.0);
        for _ in 0..130 {
            manager.tick(Duration::from_millis(20), &mut context).expect("tick");
        }
        assert_eq!(manager.current(), Some(GameStage::Game));

        click(&mut manager, &mut context, 512.0, 460.0);
        assert_eq!(manager.current(), Some(GameStage::GameOver));
        assert!(manager.is_live());
    }
}
