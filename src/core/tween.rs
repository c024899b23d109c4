//=========================================================================
// Tweens
//=========================================================================
//
// Time-based interpolation of display object properties.
//
// Timeline of one iteration:
// ```text
//   |---- duration ----|-- hold --|---- duration (yoyo only) ----|
//   from ───────────► to ──────── to ─────────────────────────► from
// ```
//
// Tweens capture their start values when added, so triggering a second
// tween on a property that is already moving starts from wherever the
// first one left it. Nothing prevents overlap.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::display::{DisplayList, DisplayObject, ElementId};

//=== Easing ==============================================================

/// Easing curve applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Linear,

    /// Quadratic ease-out.
    Power1,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1 => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

//=== Repeat ==============================================================

/// How many times a timeline replays after the first run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Times(u32),
    Infinite,
}

impl Default for Repeat {
    fn default() -> Self {
        Self::Times(0)
    }
}

//=== TweenProperty =======================================================

/// Animatable properties of a display object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenProperty {
    Rotation,
    ScaleX,
    ScaleY,
    Alpha,
    Reveal,
}

impl TweenProperty {
    pub fn read(self, object: &DisplayObject) -> f32 {
        match self {
            TweenProperty::Rotation => object.rotation,
            TweenProperty::ScaleX => object.scale_x,
            TweenProperty::ScaleY => object.scale_y,
            TweenProperty::Alpha => object.alpha,
            TweenProperty::Reveal => object.reveal,
        }
    }

    pub fn write(self, object: &mut DisplayObject, value: f32) {
        match self {
            TweenProperty::Rotation => object.rotation = value,
            TweenProperty::ScaleX => object.scale_x = value,
            TweenProperty::ScaleY => object.scale_y = value,
            TweenProperty::Alpha => object.alpha = value,
            TweenProperty::Reveal => object.reveal = value,
        }
    }
}

//=== Completion ==========================================================

/// Side effect applied to the target once a finite tween finishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenCompletion {
    SetAlpha(f32),
}

impl TweenCompletion {
    fn apply(self, object: &mut DisplayObject) {
        match self {
            TweenCompletion::SetAlpha(alpha) => object.alpha = alpha,
        }
    }
}

//=== TweenConfig =========================================================

/// Description of a tween before it is bound to start values.
#[derive(Debug, Clone, PartialEq)]
pub struct TweenConfig {
    pub target: ElementId,
    pub to: Vec<(TweenProperty, f32)>,
    pub duration: Duration,
    pub hold: Duration,
    pub yoyo: bool,
    pub repeat: Repeat,
    pub ease: Ease,
    pub on_complete: Option<TweenCompletion>,
}

impl TweenConfig {
    pub fn new(target: ElementId, duration: Duration) -> Self {
        Self {
            target,
            to: Vec::new(),
            duration,
            hold: Duration::ZERO,
            yoyo: false,
            repeat: Repeat::default(),
            ease: Ease::default(),
            on_complete: None,
        }
    }

    pub fn property(mut self, property: TweenProperty, to: f32) -> Self {
        self.to.push((property, to));
        self
    }

    pub fn hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }

    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn on_complete(mut self, completion: TweenCompletion) -> Self {
        self.on_complete = Some(completion);
        self
    }
}

//=== Tween ===============================================================

/// Identifies a running tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(u64);

#[derive(Debug, Clone, Copy)]
struct Track {
    property: TweenProperty,
    from: f32,
    to: f32,
}

#[derive(Debug)]
struct Tween {
    id: TweenId,
    target: ElementId,
    tracks: Vec<Track>,
    duration: Duration,
    hold: Duration,
    yoyo: bool,
    repeat: Repeat,
    ease: Ease,
    on_complete: Option<TweenCompletion>,
    elapsed: Duration,
}

impl Tween {
    fn cycle(&self) -> Duration {
        let back = if self.yoyo { self.duration } else { Duration::ZERO };
        self.duration + self.hold + back
    }

    /// Progress at the end of the timeline.
    fn final_progress(&self) -> f32 {
        if self.yoyo {
            0.0
        } else {
            1.0
        }
    }

    fn is_finished(&self) -> bool {
        match self.repeat {
            Repeat::Infinite => false,
            Repeat::Times(extra) => {
                let total = self.cycle().saturating_mul(extra.saturating_add(1));
                self.elapsed >= total
            }
        }
    }

    /// Normalized progress within the current iteration, before easing.
    fn progress(&self) -> f32 {
        let cycle = self.cycle().as_nanos();
        if cycle == 0 || self.duration.is_zero() {
            return self.final_progress();
        }

        let within = Duration::from_nanos((self.elapsed.as_nanos() % cycle) as u64);
        let forward_end = self.duration;
        let hold_end = self.duration + self.hold;

        if within < forward_end {
            within.as_secs_f32() / self.duration.as_secs_f32()
        } else if within < hold_end {
            1.0
        } else {
            1.0 - (within - hold_end).as_secs_f32() / self.duration.as_secs_f32()
        }
    }

    fn write(&self, object: &mut DisplayObject, progress: f32) {
        let eased = self.ease.apply(progress);
        for track in &self.tracks {
            track
                .property
                .write(object, track.from + (track.to - track.from) * eased);
        }
    }
}

//=== TweenManager ========================================================

/// Owns and advances the tweens of one stage.
///
/// Dropping the manager discards every tween in flight.
#[derive(Debug, Default)]
pub struct TweenManager {
    tweens: Vec<Tween>,
    next_id: u64,
}

impl TweenManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a tween from the target's current property values.
    ///
    /// Returns `None` if the target doesn't exist.
    pub fn add(&mut self, config: TweenConfig, display: &DisplayList) -> Option<TweenId> {
        let object = display.get(config.target)?;
        let tracks = config
            .to
            .iter()
            .map(|&(property, to)| Track {
                property,
                from: property.read(object),
                to,
            })
            .collect();

        let id = TweenId(self.next_id);
        self.next_id += 1;

        trace!("Tween {:?} started on {:?}", id, config.target);
        self.tweens.push(Tween {
            id,
            target: config.target,
            tracks,
            duration: config.duration,
            hold: config.hold,
            yoyo: config.yoyo,
            repeat: config.repeat,
            ease: config.ease,
            on_complete: config.on_complete,
            elapsed: Duration::ZERO,
        });
        Some(id)
    }

    /// Advances every tween and writes property values.
    ///
    /// Finished tweens snap to their final values, apply their completion
    /// effect, and are removed.
    pub fn update(&mut self, delta: Duration, display: &mut DisplayList) {
        self.tweens.retain_mut(|tween| {
            tween.elapsed += delta;

            let Some(object) = display.get_mut(tween.target) else {
                return false;
            };

            if tween.is_finished() {
                tween.write(object, tween.final_progress());
                if let Some(completion) = tween.on_complete {
                    completion.apply(object);
                }
                trace!("Tween {:?} complete", tween.id);
                return false;
            }

            tween.write(object, tween.progress());
            true
        });
    }

    pub fn is_running(&self, id: TweenId) -> bool {
        self.tweens.iter().any(|tween| tween.id == id)
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
