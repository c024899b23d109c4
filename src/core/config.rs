//=========================================================================
// Game Configuration
//=========================================================================
//
// Static, read-only configuration shared by every stage.
//
// Contents:
// - Canvas dimensions and clear color
// - Asset root and window title
// - The closed gold palette used by text styles
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

//=== Canvas Constants ====================================================

/// Logical canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 1024;

/// Logical canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 768;

/// Clear color behind every stage.
pub const BACKGROUND_COLOR: &str = "#028af8";

//=== GameConfig ==========================================================

/// Read-only configuration handed to stages through their context.
///
/// Built by [`crate::EngineBuilder`]; never mutated once the engine runs.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub background_color: String,
    pub asset_root: PathBuf,
    pub title: String,
}

impl GameConfig {
    /// Canvas center point, used for most layout.
    pub fn center(&self) -> (f32, f32) {
        (self.canvas_width as f32 / 2.0, self.canvas_height as f32 / 2.0)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            background_color: BACKGROUND_COLOR.to_string(),
            asset_root: PathBuf::from("assets"),
            title: "Tap to Claim".to_string(),
        }
    }
}

//=== Palette =============================================================

/// Named gold tones, stored in `0x` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    Yellow,
    RichGold,
    DarkGold,
    WarmGold,
    DeepGold,
    LightGold,
    MetallicGold,
    ChampagneGold,
}

impl Palette {
    /// All palette entries in declaration order.
    pub const ALL: [Palette; 8] = [
        Palette::Yellow,
        Palette::RichGold,
        Palette::DarkGold,
        Palette::WarmGold,
        Palette::DeepGold,
        Palette::LightGold,
        Palette::MetallicGold,
        Palette::ChampagneGold,
    ];

    /// Color in `0x`-prefixed form.
    pub const fn hex(self) -> &'static str {
        match self {
            Palette::Yellow => "0xffff00",
            Palette::RichGold => "0xd4af37",
            Palette::DarkGold => "0xbd9258",
            Palette::WarmGold => "0xc29b57",
            Palette::DeepGold => "0xb58863",
            Palette::LightGold => "0xe8c899",
            Palette::MetallicGold => "0xb8860b",
            Palette::ChampagneGold => "0xd8b07d",
        }
    }

    /// Color in `#`-prefixed form, as text styles expect.
    pub fn with_hash(self) -> String {
        color_with_hash(self.hex())
    }
}

/// Swaps a `0x` prefix for `#`.
///
/// Plain string substitution: the hex digits are not validated.
pub fn color_with_hash(color: &str) -> String {
    color.replace("0x", "#")
}

//=========================================================================
// Unit Tests
//=========================================================================
