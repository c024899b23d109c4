//=========================================================================
// Stage Test Support
//=========================================================================
//
// In-memory asset loader and a ready-made stage manager for driving the
// real stage set without touching the filesystem.
//
//=========================================================================

use crate::core::assets::{
    AssetError, AssetKind, AssetLoader, AssetRequest, AtlasManifest, LoadedAsset,
};
use crate::core::config::GameConfig;
use crate::core::globals::GlobalContext;
use crate::core::scene::StageManager;

use super::{registry, GameStage};

/// Coin atlas with the static coin and the four turning frames.
pub(crate) const COIN_MANIFEST: &str = r#"{
    "frames": {
        "Coin1.png":        { "frame": { "x": 0,   "y": 0, "w": 128, "h": 128 } },
        "TurningCoin1.png": { "frame": { "x": 128, "y": 0, "w": 128, "h": 128 } },
        "TurningCoin2.png": { "frame": { "x": 256, "y": 0, "w": 96,  "h": 128 } },
        "TurningCoin3.png": { "frame": { "x": 352, "y": 0, "w": 32,  "h": 128 } },
        "TurningCoin4.png": { "frame": { "x": 384, "y": 0, "w": 96,  "h": 128 } }
    }
}"#;

/// Serves every request from memory, except keys marked missing.
pub(crate) struct MemoryLoader {
    missing: Vec<&'static str>,
}

impl MemoryLoader {
    pub(crate) fn complete() -> Self {
        Self { missing: Vec::new() }
    }

    pub(crate) fn without(mut self, key: &'static str) -> Self {
        self.missing.push(key);
        self
    }
}

impl AssetLoader for MemoryLoader {
    fn load(&mut self, request: &AssetRequest) -> Result<LoadedAsset, AssetError> {
        if self.missing.contains(&request.key.as_str()) {
            return Err(AssetError::Missing {
                key: request.key.clone(),
                path: request.path.clone(),
            });
        }

        match &request.kind {
            AssetKind::Image => Ok(LoadedAsset::Image { bytes: 1024 }),
            AssetKind::SpriteSheet {
                frame_width,
                frame_height,
            } => Ok(LoadedAsset::SpriteSheet {
                bytes: 1024,
                frame_width: *frame_width,
                frame_height: *frame_height,
            }),
            AssetKind::Atlas { .. } => {
                let manifest =
                    AtlasManifest::from_json(COIN_MANIFEST).map_err(|source| AssetError::Manifest {
                        key: request.key.clone(),
                        source,
                    })?;
                Ok(LoadedAsset::Atlas {
                    bytes: 1024,
                    manifest,
                })
            }
        }
    }
}

/// Stage manager over the full registry plus a fresh context.
pub(crate) fn harness(
    loader: MemoryLoader,
) -> (StageManager<GameStage>, GlobalContext<GameStage>) {
    (
        StageManager::new(registry(), Box::new(loader)),
        GlobalContext::new(GameConfig::default()),
    )
}
