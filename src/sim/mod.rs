//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Advanced exactly once per display frame
//! - No rendering or platform dependencies
//! - Pointer events arrive already mapped into field coordinates
//!
//! The host feeds pointer events through [`handle_pointer`], calls [`tick`]
//! once per frame, and forwards the returned [`ShotOutcome`]s to the session.

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{Contact, hits_backboard, reflect_restitution, rim_contact, rim_deflects};
pub use input::{PointerEvent, handle_pointer};
pub use state::{Backboard, Ball, BallPhase, Court, Hoop, PendingReset, ShotOutcome, Tuning};
pub use tick::tick;
