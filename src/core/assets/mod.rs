//=========================================================================
// Asset Pipeline
//=========================================================================
//
// Declared assets, the loader contract, and the engine-owned cache.
//
// Flow:
//   Stage::prepare_assets() → AssetQueue
//        → load_queue(loader) → progress notifications → AssetCache
//
// The first failing asset aborts the queue. Nothing is retried.
//
//=========================================================================

//=== Module Declarations =================================================

mod atlas;
mod loader;

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;

//=== Public API ==========================================================

pub use atlas::{AtlasFrame, AtlasManifest};
pub use loader::FsAssetLoader;

//=== AssetKind ===========================================================

/// How an asset file is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    SpriteSheet { frame_width: u32, frame_height: u32 },
    Atlas { manifest: PathBuf },
}

/// One declared asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    pub key: String,
    pub path: PathBuf,
    pub kind: AssetKind,
}

//=== AssetQueue ==========================================================

/// Assets a stage wants fetched before it builds.
#[derive(Debug, Default)]
pub struct AssetQueue {
    base_path: PathBuf,
    requests: Vec<AssetRequest>,
}

impl AssetQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix applied to every path declared afterwards.
    pub fn set_path(&mut self, path: impl AsRef<Path>) {
        self.base_path = path.as_ref().to_path_buf();
    }

    pub fn image(&mut self, key: &str, path: impl AsRef<Path>) {
        self.push(key, path, AssetKind::Image);
    }

    pub fn spritesheet(
        &mut self,
        key: &str,
        path: impl AsRef<Path>,
        frame_width: u32,
        frame_height: u32,
    ) {
        self.push(
            key,
            path,
            AssetKind::SpriteSheet {
                frame_width,
                frame_height,
            },
        );
    }

    pub fn atlas(&mut self, key: &str, texture: impl AsRef<Path>, manifest: impl AsRef<Path>) {
        let manifest = self.base_path.join(manifest);
        self.push(key, texture, AssetKind::Atlas { manifest });
    }

    pub fn requests(&self) -> &[AssetRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    fn push(&mut self, key: &str, path: impl AsRef<Path>, kind: AssetKind) {
        self.requests.push(AssetRequest {
            key: key.to_string(),
            path: self.base_path.join(path),
            kind,
        });
    }
}

//=== LoadedAsset =========================================================

/// Result of loading one request.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedAsset {
    Image {
        bytes: usize,
    },
    SpriteSheet {
        bytes: usize,
        frame_width: u32,
        frame_height: u32,
    },
    Atlas {
        bytes: usize,
        manifest: AtlasManifest,
    },
}

//=== AssetCache ==========================================================

/// Engine-owned store of loaded assets, shared by every stage.
#[derive(Debug, Default)]
pub struct AssetCache {
    assets: HashMap<String, LoadedAsset>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, asset: LoadedAsset) {
        self.assets.insert(key.to_string(), asset);
    }

    pub fn get(&self, key: &str) -> Option<&LoadedAsset> {
        self.assets.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.assets.contains_key(key)
    }

    /// Pixel size of a named atlas frame.
    pub fn atlas_frame_size(&self, key: &str, frame: &str) -> Option<(f32, f32)> {
        match self.assets.get(key)? {
            LoadedAsset::Atlas { manifest, .. } => manifest
                .frame(frame)
                .map(|f| (f.width as f32, f.height as f32)),
            _ => None,
        }
    }

    /// Frame size of a sprite sheet.
    pub fn sheet_frame_size(&self, key: &str) -> Option<(f32, f32)> {
        match self.assets.get(key)? {
            LoadedAsset::SpriteSheet {
                frame_width,
                frame_height,
                ..
            } => Some((*frame_width as f32, *frame_height as f32)),
            _ => None,
        }
    }
}

//=== AssetError ==========================================================

/// Asset loading failures.
#[derive(Debug)]
pub enum AssetError {
    /// The file does not exist.
    Missing { key: String, path: PathBuf },

    /// The file exists but could not be read.
    Io { key: String, source: std::io::Error },

    /// An atlas manifest is not valid JSON of the expected shape.
    Manifest {
        key: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { key, path } => {
                write!(f, "Asset {:?} not found at {}", key, path.display())
            }
            Self::Io { key, source } => write!(f, "Asset {:?} could not be read: {}", key, source),
            Self::Manifest { key, source } => {
                write!(f, "Atlas {:?} has an invalid manifest: {}", key, source)
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Missing { .. } => None,
            Self::Io { source, .. } => Some(source),
            Self::Manifest { source, .. } => Some(source),
        }
    }
}

//=== AssetLoader =========================================================

/// Fetches a single declared asset.
///
/// Implementations run on the core thread.
pub trait AssetLoader: Send {
    fn load(&mut self, request: &AssetRequest) -> Result<LoadedAsset, AssetError>;
}

/// Loads every queued asset in order, reporting the loaded fraction
/// after each one.
///
/// An empty queue completes without any progress notification.
pub fn load_queue<F>(
    loader: &mut dyn AssetLoader,
    queue: &AssetQueue,
    cache: &mut AssetCache,
    mut on_progress: F,
) -> Result<(), AssetError>
where
    F: FnMut(f32),
{
    let total = queue.len();

    for (done, request) in queue.requests().iter().enumerate() {
        let asset = loader.load(request)?;
        debug!("Loaded asset {:?} from {}", request.key, request.path.display());
        cache.insert(&request.key, asset);
        on_progress((done + 1) as f32 / total as f32);
    }

    Ok(())
}

//=========================================================================
// Unit Tests
//=========================================================================
