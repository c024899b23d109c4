//=========================================================================
// Atlas Manifest
//=========================================================================
//
// Frame manifests for texture atlases.
//
// Accepts the two common TexturePacker JSON layouts:
// ```text
//   hash:  { "frames": { "Coin1.png": { "frame": {x,y,w,h} }, ... } }
//   array: { "frames": [ { "filename": "Coin1.png", "frame": {...} } ] }
// ```
//
// Frames keep the order they are listed in for both layouts; the hash
// layout relies on serde_json's `preserve_order` map.
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::Deserialize;
use serde_json::{Map, Value};

//=== Wire Format =========================================================

#[derive(Debug, Deserialize)]
struct RawRect {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    frame: RawRect,
}

#[derive(Debug, Deserialize)]
struct RawNamedEntry {
    filename: String,
    frame: RawRect,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawFrames {
    Hash(Map<String, Value>),
    Array(Vec<RawNamedEntry>),
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    frames: RawFrames,
}

//=== AtlasManifest =======================================================

/// Region of the atlas texture occupied by one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasFrame {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Parsed atlas manifest, frames in manifest order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AtlasManifest {
    frames: Vec<AtlasFrame>,
}

impl AtlasManifest {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        Self::from_raw(serde_json::from_str(text)?)
    }

    /// Parses manifest bytes as read from disk. Invalid UTF-8 is an error.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        Self::from_raw(serde_json::from_slice(bytes)?)
    }

    fn from_raw(raw: RawManifest) -> Result<Self, serde_json::Error> {
        let frames = match raw.frames {
            RawFrames::Hash(entries) => entries
                .into_iter()
                .map(|(name, value)| {
                    let entry: RawEntry = serde_json::from_value(value)?;
                    Ok(AtlasFrame::new(name, entry.frame))
                })
                .collect::<Result<_, serde_json::Error>>()?,
            RawFrames::Array(entries) => entries
                .into_iter()
                .map(|entry| AtlasFrame::new(entry.filename, entry.frame))
                .collect(),
        };

        Ok(Self { frames })
    }

    pub fn frame(&self, name: &str) -> Option<&AtlasFrame> {
        self.frames.iter().find(|frame| frame.name == name)
    }

    pub fn frames(&self) -> &[AtlasFrame] {
        &self.frames
    }
}

impl AtlasFrame {
    fn new(name: String, rect: RawRect) -> Self {
        Self {
            name,
            x: rect.x,
            y: rect.y,
            width: rect.w,
            height: rect.h,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hash_layout() {
        let json = r#"{
            "frames": {
                "Coin1.png": { "frame": { "x": 0, "y": 0, "w": 128, "h": 128 } },
                "TurningCoin1.png": { "frame": { "x": 128, "y": 0, "w": 96, "h": 128 } }
            },
            "meta": { "image": "coin.png" }
        }"#;

        let manifest = AtlasManifest::from_json(json).expect("valid manifest");
        assert_eq!(manifest.frames().len(), 2);
        let turning = manifest.frame("TurningCoin1.png").expect("frame present");
        assert_eq!((turning.x, turning.width, turning.height), (128, 96, 128));
    }

    #[test]
    fn parses_array_layout() {
        let json = r#"{
            "frames": [
                { "filename": "Coin1.png", "frame": { "x": 0, "y": 0, "w": 64, "h": 64 } }
            ]
        }"#;

        let manifest = AtlasManifest::from_json(json).expect("valid manifest");
        assert_eq!(manifest.frame("Coin1.png").map(|f| f.width), Some(64));
    }

    #[test]
    fn hash_layout_keeps_listed_order() {
        let json = r#"{
            "frames": {
                "Z.png": { "frame": { "x": 0, "y": 0, "w": 8, "h": 8 } },
                "A.png": { "frame": { "x": 8, "y": 0, "w": 8, "h": 8 } }
            }
        }"#;

        let manifest = AtlasManifest::from_json(json).expect("valid manifest");
        let names: Vec<_> = manifest.frames().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Z.png", "A.png"]);
    }

    #[test]
    fn rejects_missing_frames() {
        assert!(AtlasManifest::from_json(r#"{ "meta": {} }"#).is_err());
        assert!(AtlasManifest::from_json("not json").is_err());
    }

    #[test]
    fn rejects_malformed_hash_entry() {
        let json = r#"{ "frames": { "Coin1.png": { "frame": { "x": 0 } } } }"#;
        assert!(AtlasManifest::from_json(json).is_err());
    }

    #[test]
    fn from_slice_rejects_invalid_utf8_names() {
        let mut bytes = br#"{ "frames": { "Coin"#.to_vec();
        bytes.push(0xff);
        bytes.extend_from_slice(br#"1.png": { "frame": { "x": 0, "y": 0, "w": 1, "h": 1 } } } }"#);

        assert!(AtlasManifest::from_slice(&bytes).is_err());
        assert!(AtlasManifest::from_slice(&bytes[..0]).is_err());
    }
}
