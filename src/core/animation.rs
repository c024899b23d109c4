//=========================================================================
// Frame Animations
//=========================================================================
//
// Named, frame-based sprite animations.
//
// Architecture:
//   AnimationRegistry (engine-owned, survives stage switches)
//     └─ key → Arc<AnimationDef>
//   AnimationPlayer (stage-owned, one per playing sprite)
//     └─ advances frames from elapsed time
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::tween::Repeat;

//=== Frame Names =========================================================

/// Builds `prefix + n + suffix` for every `n` in `start..=end`.
///
/// `zero_pad` left-pads the number with zeros to at least that many
/// digits. A descending range produces frames in descending order.
pub fn generate_frame_names(
    prefix: &str,
    suffix: &str,
    start: u32,
    end: u32,
    zero_pad: usize,
) -> Vec<String> {
    let name = |n: u32| format!("{prefix}{n:0zero_pad$}{suffix}");
    if start <= end {
        (start..=end).map(name).collect()
    } else {
        (end..=start).rev().map(name).collect()
    }
}

//=== AnimationDef ========================================================

/// A named frame sequence on one texture.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    pub key: String,
    pub texture: String,
    pub frames: Vec<String>,
    /// Frames per second.
    pub frame_rate: f32,
    pub repeat: Repeat,
}

impl AnimationDef {
    /// Time each frame stays on screen.
    ///
    /// Rates too slow to represent hold the frame forever; never shorter
    /// than one nanosecond.
    pub fn frame_duration(&self) -> Duration {
        if self.frame_rate > 0.0 && self.frame_rate.is_finite() {
            Duration::try_from_secs_f32(1.0 / self.frame_rate)
                .unwrap_or(Duration::MAX)
                .max(Duration::from_nanos(1))
        } else {
            Duration::MAX
        }
    }
}

//=== AnimationRegistry ===================================================

/// Engine-wide store of animation definitions.
#[derive(Debug, Default)]
pub struct AnimationRegistry {
    animations: HashMap<String, Arc<AnimationDef>>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an animation.
    ///
    /// Returns `false` and keeps the existing definition if the key is
    /// already taken, so re-entering a stage cannot redefine it.
    pub fn create(&mut self, def: AnimationDef) -> bool {
        if self.animations.contains_key(&def.key) {
            warn!("Animation {:?} already exists, keeping the original", def.key);
            return false;
        }
        debug!("Created animation {:?} ({} frames)", def.key, def.frames.len());
        self.animations.insert(def.key.clone(), Arc::new(def));
        true
    }

    pub fn get(&self, key: &str) -> Option<Arc<AnimationDef>> {
        self.animations.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.animations.contains_key(key)
    }
}

//=== AnimationPlayer =====================================================

/// Plays one animation, tracking the current frame.
#[derive(Debug, Clone)]
pub struct AnimationPlayer {
    def: Arc<AnimationDef>,
    index: usize,
    completed_loops: u32,
    accumulator: Duration,
    finished: bool,
}

impl AnimationPlayer {
    pub fn new(def: Arc<AnimationDef>) -> Self {
        let finished = def.frames.is_empty();
        Self {
            def,
            index: 0,
            completed_loops: 0,
            accumulator: Duration::ZERO,
            finished,
        }
    }

    pub fn key(&self) -> &str {
        &self.def.key
    }

    /// Name of the frame currently shown.
    pub fn current_frame(&self) -> Option<&str> {
        self.def.frames.get(self.index).map(String::as_str)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Steps to the next frame, wrapping according to the repeat policy.
    pub fn advance_frame(&mut self) {
        if self.finished {
            return;
        }

        let next = self.index + 1;
        if next < self.def.frames.len() {
            self.index = next;
            return;
        }

        match self.def.repeat {
            Repeat::Infinite => self.index = 0,
            Repeat::Times(extra) if self.completed_loops < extra => {
                self.completed_loops += 1;
                self.index = 0;
            }
            Repeat::Times(_) => self.finished = true,
        }
    }

    /// Advances by elapsed time. Returns `true` if the frame changed.
    pub fn update(&mut self, delta: Duration) -> bool {
        let step = self.def.frame_duration();
        let before = self.index;

        self.accumulator += delta;
        while self.accumulator >= step && !self.finished {
            self.accumulator -= step;
            self.advance_frame();
        }

        self.index != before
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
