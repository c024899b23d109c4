//=========================================================================
// Ambient Background
//=========================================================================
//
// Fixed-size pool of decorative actors drifting across the canvas.
//
// Architecture:
//   AmbientPool
//     ├─ actors: Vec<AmbientActor>   (plain records)
//     └─ bounds: WrapBounds          (shared by every actor)
//
// Actors are recycled by wraparound instead of being destroyed. Speed,
// scale and frame are fixed at spawn; only `x` changes afterwards.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use log::debug;
use rand::Rng;

//=== SpawnError ==========================================================

/// Rejected ambient actor parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SpawnError {
    /// Speed is negative, NaN or infinite.
    InvalidSpeed(f32),

    /// Scale is negative, NaN or infinite.
    InvalidScale(f32),

    /// Pool parameters leave nothing to choose from.
    EmptyRange(&'static str),
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpeed(speed) => {
                write!(f, "Actor speed must be a non-negative finite number, got {}", speed)
            }
            Self::InvalidScale(scale) => {
                write!(f, "Actor scale must be a non-negative finite number, got {}", scale)
            }
            Self::EmptyRange(what) => write!(f, "Spawn range for {} is empty", what),
        }
    }
}

impl std::error::Error for SpawnError {}

//=== WrapBounds ==========================================================

/// Horizontal recycling boundary shared by a pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapBounds {
    /// Actors at or beyond this x are recycled.
    pub limit_x: f32,

    /// Where recycled actors restart.
    pub reset_x: f32,
}

impl WrapBounds {
    /// Recycles once an actor is `margin` pixels past the right edge.
    pub fn for_canvas(canvas_width: u32, margin: f32, reset_x: f32) -> Self {
        Self {
            limit_x: canvas_width as f32 + margin,
            reset_x,
        }
    }
}

//=== AmbientActor ========================================================

/// One decorative actor.
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientActor {
    pub x: f32,
    pub y: f32,
    scale: f32,
    alpha: f32,
    speed: f32,
    frame: usize,
}

impl AmbientActor {
    pub fn new(
        x: f32,
        y: f32,
        speed: f32,
        scale: f32,
        alpha: f32,
        frame: usize,
    ) -> Result<Self, SpawnError> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(SpawnError::InvalidSpeed(speed));
        }
        if !scale.is_finite() || scale < 0.0 {
            return Err(SpawnError::InvalidScale(scale));
        }

        Ok(Self {
            x,
            y,
            scale,
            alpha,
            speed,
            frame,
        })
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    fn step(&mut self, bounds: &WrapBounds) {
        self.x += self.speed;
        if self.x >= bounds.limit_x {
            self.x = bounds.reset_x;
        }
    }
}

//=== AmbientSpawn ========================================================

/// Randomization parameters for a pool.
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientSpawn {
    pub count: usize,

    /// Exclusive upper bound of the integer speed.
    pub max_speed: u32,

    /// Exclusive upper bound of the scale.
    pub max_scale: f32,

    pub alpha: f32,

    /// Number of sprite-sheet frames to pick from.
    pub frame_count: usize,

    pub start_x: f32,

    /// Actors spawn at y in `[1, canvas_height + 1)`.
    pub canvas_height: f32,
}

impl AmbientSpawn {
    /// Drifting platforms behind the main menu.
    pub fn platforms(canvas_height: u32) -> Self {
        Self {
            count: 10,
            max_speed: 15,
            max_scale: 5.0,
            alpha: 0.25,
            frame_count: 4,
            start_x: -10.0,
            canvas_height: canvas_height as f32,
        }
    }
}

//=== AmbientPool =========================================================

/// Owns the actors of one stage and moves them every tick.
#[derive(Debug, Clone)]
pub struct AmbientPool {
    actors: Vec<AmbientActor>,
    bounds: WrapBounds,
}

impl AmbientPool {
    /// Spawns `params.count` randomized actors.
    pub fn spawn<R: Rng + ?Sized>(
        params: &AmbientSpawn,
        bounds: WrapBounds,
        rng: &mut R,
    ) -> Result<Self, SpawnError> {
        if params.max_speed == 0 {
            return Err(SpawnError::EmptyRange("speed"));
        }
        if params.frame_count == 0 {
            return Err(SpawnError::EmptyRange("frame"));
        }
        if !params.max_scale.is_finite() || params.max_scale < 0.0 {
            return Err(SpawnError::InvalidScale(params.max_scale));
        }

        let actors = (0..params.count)
            .map(|_| {
                let frame = rng.random_range(0..params.frame_count);
                let speed = rng.random_range(0..params.max_speed) as f32;
                let y = params.canvas_height * rng.random::<f32>() + 1.0;
                let scale = params.max_scale * rng.random::<f32>();
                AmbientActor::new(params.start_x, y, speed, scale, params.alpha, frame)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Spawned {} ambient actors", actors.len());
        Ok(Self::from_actors(actors, bounds))
    }

    /// Pool over pre-built actors.
    pub fn from_actors(actors: Vec<AmbientActor>, bounds: WrapBounds) -> Self {
        Self { actors, bounds }
    }

    /// Advances every actor by its speed, recycling those past the bound.
    pub fn tick(&mut self) {
        let bounds = self.bounds;
        for actor in &mut self.actors {
            actor.step(&bounds);
        }
    }

    pub fn actors(&self) -> &[AmbientActor] {
        &self.actors
    }

    pub fn bounds(&self) -> WrapBounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn canvas_bounds() -> WrapBounds {
        WrapBounds::for_canvas(1024, 50.0, -10.0)
    }

    //=== Spawning ========================================================

    #[test]
    fn spawn_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = AmbientPool::spawn(&AmbientSpawn::platforms(768), canvas_bounds(), &mut rng)
            .expect("valid parameters");

        assert_eq!(pool.len(), 10);
        for actor in pool.actors() {
            assert_eq!(actor.x, -10.0);
            assert!(actor.y >= 1.0 && actor.y < 769.0);
            assert!(actor.speed() >= 0.0 && actor.speed() < 15.0);
            assert_eq!(actor.speed().fract(), 0.0, "Speeds are whole pixels");
            assert!(actor.scale() >= 0.0 && actor.scale() < 5.0);
            assert!(actor.frame() < 4);
            assert_eq!(actor.alpha(), 0.25);
        }
    }

    #[test]
    fn same_seed_same_pool() {
        let params = AmbientSpawn::platforms(768);
        let a = AmbientPool::spawn(&params, canvas_bounds(), &mut StdRng::seed_from_u64(3))
            .expect("valid parameters");
        let b = AmbientPool::spawn(&params, canvas_bounds(), &mut StdRng::seed_from_u64(3))
            .expect("valid parameters");
        assert_eq!(a.actors(), b.actors());
    }

    #[test]
    fn invalid_actor_parameters_are_rejected() {
        assert_eq!(
            AmbientActor::new(0.0, 0.0, -1.0, 1.0, 1.0, 0),
            Err(SpawnError::InvalidSpeed(-1.0))
        );
        assert!(matches!(
            AmbientActor::new(0.0, 0.0, f32::NAN, 1.0, 1.0, 0),
            Err(SpawnError::InvalidSpeed(_))
        ));
        assert_eq!(
            AmbientActor::new(0.0, 0.0, 1.0, f32::INFINITY, 1.0, 0),
            Err(SpawnError::InvalidScale(f32::INFINITY))
        );
    }

    #[test]
    fn empty_ranges_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut params = AmbientSpawn::platforms(768);
        params.max_speed = 0;
        assert_eq!(
            AmbientPool::spawn(&params, canvas_bounds(), &mut rng).unwrap_err(),
            SpawnError::EmptyRange("speed")
        );

        let mut params = AmbientSpawn::platforms(768);
        params.frame_count = 0;
        assert!(AmbientPool::spawn(&params, canvas_bounds(), &mut rng).is_err());
    }

    //=== Motion ==========================================================

    #[test]
    fn actor_moves_linearly_until_wrap() {
        let actor = AmbientActor::new(-10.0, 100.0, 7.0, 1.0, 0.25, 0).expect("valid");
        let mut pool = AmbientPool::from_actors(vec![actor], canvas_bounds());

        // -10 + 7k stays below 1074 through k = 154
        for k in 1..=154 {
            pool.tick();
            assert_eq!(pool.actors()[0].x, -10.0 + 7.0 * k as f32, "tick {}", k);
        }

        // 1068 + 7 = 1075 reaches the bound and resets on the same tick
        pool.tick();
        assert_eq!(pool.actors()[0].x, -10.0);

        pool.tick();
        assert_eq!(pool.actors()[0].x, -3.0);
    }

    #[test]
    fn wrap_triggers_on_exact_bound() {
        let actor = AmbientActor::new(1064.0, 0.0, 10.0, 1.0, 0.25, 0).expect("valid");
        let mut pool = AmbientPool::from_actors(vec![actor], canvas_bounds());
        pool.tick();
        assert_eq!(pool.actors()[0].x, -10.0);
    }

    #[test]
    fn stationary_actor_never_moves() {
        let actor = AmbientActor::new(-10.0, 5.0, 0.0, 2.0, 0.25, 1).expect("valid");
        let mut pool = AmbientPool::from_actors(vec![actor.clone()], canvas_bounds());
        for _ in 0..100 {
            pool.tick();
        }
        assert_eq!(pool.actors()[0], actor);
    }
}
