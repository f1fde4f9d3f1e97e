//! Hoop Shot - a drag-and-flick basketball hoop game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (drag input, ball physics, rim/backboard collisions)
//! - `session`: Score/lives bookkeeping driven by shot outcomes
//!
//! The browser host (canvas, pointer events, frame scheduling, HUD) lives in
//! `main.rs`; everything here is platform-free.

pub mod session;
pub mod sim;

pub use session::{Session, SessionPhase};
pub use sim::{Ball, BallPhase, Court, Hoop, PointerEvent, ShotOutcome, Tuning};

/// Game configuration constants
///
/// All motion constants are in field pixels per display frame; the sim is
/// advanced exactly once per `requestAnimationFrame` callback.
pub mod consts {
    /// Downward acceleration (px/frame²)
    pub const GRAVITY: f32 = 0.35;
    /// Fraction of incoming speed retained after a rim bounce
    pub const RIM_BOUNCE: f32 = 0.7;
    /// Fraction of incoming speed retained after a wall/backboard bounce
    pub const WALL_DAMPING: f32 = 0.7;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 24.0;

    /// Hoop defaults
    pub const HOOP_RADIUS: f32 = 38.0;
    pub const RIM_THICKNESS: f32 = 6.0;
    /// Horizontal window for a clean make, as a fraction of hoop radius
    pub const SCORE_WINDOW: f32 = 0.8;

    /// Backboard extent above the rim plane
    pub const BACKBOARD_HEIGHT: f32 = 110.0;
    /// Backboard extent below the rim plane
    pub const BACKBOARD_DROP: f32 = 12.0;

    /// Drags shorter than this are cancelled gestures, not shots (px)
    pub const MIN_DRAG_DIST: f32 = 5.0;
    /// Drag vector to launch velocity scale
    pub const DRAG_SCALE: f32 = 0.06;

    /// Frames of visual feedback before a made shot resets (~400 ms at 60 Hz)
    pub const SCORE_RESET_DELAY_FRAMES: u32 = 24;

    /// Ball start position floor clearance: max(START_MARGIN_FRAC * height, START_MARGIN_MIN)
    pub const START_MARGIN_FRAC: f32 = 0.05;
    pub const START_MARGIN_MIN: f32 = 24.0;

    /// Session defaults
    pub const STARTING_LIVES: u8 = 5;
    pub const POINTS_PER_BASKET: u32 = 2;
}
