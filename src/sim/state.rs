//! Game state and core simulation types
//!
//! The `Court` is the single owned state record shared by the input handler
//! and the per-frame update; nothing outside the sim mutates it directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Outcome of a shot, raised at most once each per shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// Ball descended cleanly through the hoop
    Scored,
    /// Ball hit the floor or left the field
    Missed,
}

/// Ball lifecycle: `Idle → Dragging → Flight → Idle`
///
/// Velocity is non-zero only in `Flight`. `can_score` latches true the first
/// time the ball's top edge clears the rim plane while rising and never
/// resets until the ball does; `scored` latches once the make is detected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BallPhase {
    /// Resting at the start position, waiting for a grab
    Idle,
    /// Pointer is down on the ball; no velocity yet
    Dragging { start: Vec2, current: Vec2 },
    /// Launched and under physics
    Flight { can_score: bool, scored: bool },
}

/// The ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub phase: BallPhase,
}

impl Ball {
    pub fn at_rest(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            phase: BallPhase::Idle,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    /// Hit test for pointer grabs
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance_squared(point) <= self.radius * self.radius
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, BallPhase::Dragging { .. })
    }

    pub fn in_flight(&self) -> bool {
        matches!(self.phase, BallPhase::Flight { .. })
    }
}

/// Backboard plane: a vertical segment the ball bounces off moving rightward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Backboard {
    pub x: f32,
    pub top: f32,
    pub bottom: f32,
}

/// The hoop: fixed during play, recomputed on viewport resize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hoop {
    /// Rim center
    pub pos: Vec2,
    /// Rim half-width
    pub radius: f32,
    /// Radial thickness of the rim tube
    pub thickness: f32,
}

impl Hoop {
    /// Position the hoop for a field of the given size
    pub fn layout(field: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(field.x * 0.5, field.y * 0.2),
            radius: tuning.hoop_radius,
            thickness: tuning.rim_thickness,
        }
    }

    /// Radius of the combined ball-vs-rim contact circle
    #[inline]
    pub fn contact_radius(&self, ball_radius: f32) -> f32 {
        ball_radius + self.radius - self.thickness * 0.5
    }

    /// Half-width of the horizontal window that counts as a make
    #[inline]
    pub fn score_window(&self) -> f32 {
        self.radius * SCORE_WINDOW
    }

    /// Backboard segment to the right of the rim
    pub fn backboard(&self, tuning: &Tuning) -> Backboard {
        Backboard {
            x: self.pos.x + self.radius + self.thickness,
            top: self.pos.y - tuning.backboard_height,
            bottom: self.pos.y + tuning.backboard_drop,
        }
    }
}

/// Physics configuration, fixed at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Downward acceleration (px/frame²)
    pub gravity: f32,
    /// Rim restitution
    pub bounce: f32,
    /// Wall/backboard restitution
    pub wall_damping: f32,
    pub ball_radius: f32,
    pub hoop_radius: f32,
    pub rim_thickness: f32,
    /// Drags at or below this length are cancelled gestures (px)
    pub min_drag_dist: f32,
    /// Drag vector to launch velocity scale
    pub drag_scale: f32,
    pub backboard_height: f32,
    pub backboard_drop: f32,
    /// Frames between a make and the ball reset
    pub score_reset_delay: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            bounce: RIM_BOUNCE,
            wall_damping: WALL_DAMPING,
            ball_radius: BALL_RADIUS,
            hoop_radius: HOOP_RADIUS,
            rim_thickness: RIM_THICKNESS,
            min_drag_dist: MIN_DRAG_DIST,
            drag_scale: DRAG_SCALE,
            backboard_height: BACKBOARD_HEIGHT,
            backboard_drop: BACKBOARD_DROP,
            score_reset_delay: SCORE_RESET_DELAY_FRAMES,
        }
    }
}

/// A scheduled post-score ball reset
///
/// Tagged with the court generation so a countdown started in one session
/// can never reset a ball belonging to a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReset {
    pub generation: u32,
    pub frames_left: u32,
}

/// Complete simulation state for one court
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    /// Field size in field pixels (CSS pixels on the web host)
    pub field: Vec2,
    pub tuning: Tuning,
    pub ball: Ball,
    pub hoop: Hoop,
    /// Post-score reset countdown, if any
    pub pending_reset: Option<PendingReset>,
    /// Bumped on session restart and resize; invalidates stale countdowns
    pub generation: u32,
}

impl Court {
    pub fn new(width: f32, height: f32, tuning: Tuning) -> Self {
        let field = Vec2::new(width, height);
        let hoop = Hoop::layout(field, &tuning);
        let mut court = Self {
            field,
            ball: Ball::at_rest(Vec2::ZERO, tuning.ball_radius),
            hoop,
            tuning,
            pending_reset: None,
            generation: 0,
        };
        court.ball.pos = court.start_pos();
        court
    }

    /// Fixed serve position: bottom center, just above the floor margin
    pub fn start_pos(&self) -> Vec2 {
        let margin = (self.field.y * START_MARGIN_FRAC).max(START_MARGIN_MIN);
        Vec2::new(
            self.field.x * 0.5,
            self.field.y - self.tuning.ball_radius - margin,
        )
    }

    /// True while a launched shot is still unresolved
    pub fn shot_in_flight(&self) -> bool {
        matches!(
            self.ball.phase,
            BallPhase::Flight { scored: false, .. }
        )
    }

    /// Return the ball to the serve position with zero velocity. Idempotent.
    pub fn reset_ball(&mut self) {
        self.ball = Ball::at_rest(self.start_pos(), self.tuning.ball_radius);
    }

    /// Handle a viewport resize: reposition the hoop and reset the ball,
    /// discarding any in-flight shot without raising an outcome.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field = Vec2::new(width, height);
        self.hoop = Hoop::layout(self.field, &self.tuning);
        self.generation = self.generation.wrapping_add(1);
        self.pending_reset = None;
        self.reset_ball();
        log::info!(
            "court resized to {}x{}, hoop at ({:.0}, {:.0})",
            width,
            height,
            self.hoop.pos.x,
            self.hoop.pos.y
        );
    }

    /// Start a fresh session on this court: cancel any pending reset and
    /// return the ball to the serve position.
    pub fn new_session(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending_reset = None;
        self.reset_ball();
    }
}
