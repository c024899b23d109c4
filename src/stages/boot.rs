//=========================================================================
// Boot Stage
//=========================================================================
//
// Loads the background the preloader draws behind its progress bar,
// then hands over to the preloader.
//
//=========================================================================

use crate::core::assets::AssetQueue;
use crate::core::scene::{Stage, StageContext};

use super::{GameStage, BACKGROUND};

/// First stage. Has nothing to show.
pub struct Boot;

impl Stage<GameStage> for Boot {
    fn prepare_assets(&mut self, queue: &mut AssetQueue) {
        queue.image(BACKGROUND, "images/background.png");
    }

    fn build(&mut self, ctx: &mut StageContext<'_, GameStage>) {
        ctx.start(GameStage::Preloader);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::globals::GlobalContext;
    use std::path::PathBuf;

    #[test]
    fn requests_only_the_background() {
        let mut queue = AssetQueue::new();
        Boot.prepare_assets(&mut queue);

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.requests()[0].key, BACKGROUND);
        assert_eq!(queue.requests()[0].path, PathBuf::from("images/background.png"));
    }

    #[test]
    fn build_requests_preloader() {
        let mut context = GlobalContext::<GameStage>::new(GameConfig::default());
        Boot.build(&mut context.stage_context());

        assert_eq!(context.transitions.pop(), Some(GameStage::Preloader));
        assert!(context.transitions.is_empty());
    }
}
