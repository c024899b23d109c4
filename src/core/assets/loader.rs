//=========================================================================
// File-System Asset Loader
//=========================================================================
//
// Reads declared assets from disk relative to an asset root.
//
// Images and sprite sheets are read whole (their byte size is recorded;
// decoding belongs to a renderer). Atlases additionally parse their
// JSON frame manifest.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

//=== Internal Dependencies ===============================================

use super::{AssetError, AssetKind, AssetLoader, AssetRequest, AtlasManifest, LoadedAsset};

//=== FsAssetLoader =======================================================

/// Loads assets from a directory tree.
#[derive(Debug, Clone)]
pub struct FsAssetLoader {
    root: PathBuf,
}

impl FsAssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, key: &str, relative: &Path) -> Result<Vec<u8>, AssetError> {
        let path = self.root.join(relative);
        fs::read(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => AssetError::Missing {
                key: key.to_string(),
                path,
            },
            _ => AssetError::Io {
                key: key.to_string(),
                source,
            },
        })
    }
}

impl AssetLoader for FsAssetLoader {
    fn load(&mut self, request: &AssetRequest) -> Result<LoadedAsset, AssetError> {
        let bytes = self.read(&request.key, &request.path)?.len();

        match &request.kind {
            AssetKind::Image => Ok(LoadedAsset::Image { bytes }),

            AssetKind::SpriteSheet {
                frame_width,
                frame_height,
            } => Ok(LoadedAsset::SpriteSheet {
                bytes,
                frame_width: *frame_width,
                frame_height: *frame_height,
            }),

            AssetKind::Atlas { manifest } => {
                let raw = self.read(&request.key, manifest)?;
                let manifest =
                    AtlasManifest::from_slice(&raw).map_err(|source| AssetError::Manifest {
                        key: request.key.clone(),
                        source,
                    })?;
                Ok(LoadedAsset::Atlas { bytes, manifest })
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assets::AssetQueue;

    /// Fresh scratch directory under the system temp dir.
    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "tap_claim_loader_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("images")).expect("create scratch dir");
        dir
    }

    #[test]
    fn loads_image_bytes() {
        let root = scratch("image");
        fs::write(root.join("images/background.png"), [1u8, 2, 3]).expect("write fixture");

        let mut queue = AssetQueue::new();
        queue.image("background", "images/background.png");

        let mut loader = FsAssetLoader::new(&root);
        let asset = loader.load(&queue.requests()[0]).expect("image loads");
        assert_eq!(asset, LoadedAsset::Image { bytes: 3 });
    }

    #[test]
    fn missing_file_is_reported_as_missing() {
        let root = scratch("missing");
        let mut queue = AssetQueue::new();
        queue.image("background", "images/nope.png");

        let mut loader = FsAssetLoader::new(&root);
        let error = loader.load(&queue.requests()[0]).unwrap_err();
        assert!(matches!(error, AssetError::Missing { ref key, .. } if key == "background"));
    }

    #[test]
    fn atlas_parses_manifest() {
        let root = scratch("atlas");
        fs::write(root.join("images/coin.png"), [0u8; 8]).expect("write texture");
        fs::write(
            root.join("images/coin.json"),
            r#"{"frames":{"Coin1.png":{"frame":{"x":0,"y":0,"w":32,"h":32}}}}"#,
        )
        .expect("write manifest");

        let mut queue = AssetQueue::new();
        queue.atlas("coin_atlas", "images/coin.png", "images/coin.json");

        let mut loader = FsAssetLoader::new(&root);
        match loader.load(&queue.requests()[0]).expect("atlas loads") {
            LoadedAsset::Atlas { bytes, manifest } => {
                assert_eq!(bytes, 8);
                assert!(manifest.frame("Coin1.png").is_some());
            }
            other => panic!("Expected atlas, got {:?}", other),
        }
    }

    #[test]
    fn malformed_manifest_is_rejected() {
        let root = scratch("bad_manifest");
        fs::write(root.join("images/coin.png"), [0u8; 8]).expect("write texture");
        fs::write(root.join("images/coin.json"), "{").expect("write manifest");

        let mut queue = AssetQueue::new();
        queue.atlas("coin_atlas", "images/coin.png", "images/coin.json");

        let mut loader = FsAssetLoader::new(&root);
        let error = loader.load(&queue.requests()[0]).unwrap_err();
        assert!(matches!(error, AssetError::Manifest { .. }));
    }

    #[test]
    fn non_utf8_frame_name_is_a_manifest_error() {
        let root = scratch("non_utf8");
        fs::write(root.join("images/coin.png"), [0u8; 8]).expect("write texture");

        let mut manifest = br#"{"frames":{"Coin"#.to_vec();
        manifest.push(0xff);
        manifest.extend_from_slice(br#"1.png":{"frame":{"x":0,"y":0,"w":32,"h":32}}}}"#);
        fs::write(root.join("images/coin.json"), manifest).expect("write manifest");

        let mut queue = AssetQueue::new();
        queue.atlas("coin_atlas", "images/coin.png", "images/coin.json");

        let mut loader = FsAssetLoader::new(&root);
        let error = loader.load(&queue.requests()[0]).unwrap_err();
        assert!(
            matches!(error, AssetError::Manifest { ref key, .. } if key == "coin_atlas"),
            "Expected a manifest error, got {:?}",
            error
        );
    }
}
