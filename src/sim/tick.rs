//! Per-frame simulation update
//!
//! Advances a launched ball by one display frame in a fixed order: gravity,
//! integration, the can-score latch, rim and backboard collisions, wall
//! bounces, the floor miss, the scoring check, and the out-of-bounds
//! catch-all. Returns at most one `ShotOutcome` per call.
//!
//! Miss precedence: floor contact is the canonical bottom-exit miss; the
//! out-of-bounds check only covers lateral exits (a ball wholly past a
//! horizontal edge), which ordinary flight cannot produce because the wall
//! bounces clamp inward. Both are suppressed once a shot has scored, so the
//! delayed reset alone resolves a made shot.

use super::collision;
use super::state::{BallPhase, Court, PendingReset, ShotOutcome};

/// Advance the court by one display frame.
pub fn tick(court: &mut Court) -> Option<ShotOutcome> {
    tick_pending_reset(court);

    if !court.ball.in_flight() {
        return None;
    }

    // Gravity, then position
    court.ball.vel.y += court.tuning.gravity;
    let vel = court.ball.vel;
    court.ball.pos += vel;

    // Latch can-score the first frame the top edge clears the rim plane
    // while still rising
    let rising = court.ball.vel.y < 0.0;
    let cleared = court.ball.top() < court.hoop.pos.y;
    if let BallPhase::Flight {
        ref mut can_score, ..
    } = court.ball.phase
    {
        if !*can_score && rising && cleared {
            *can_score = true;
        }
    }

    // Rim
    if let Some(contact) = collision::rim_contact(&court.ball, &court.hoop) {
        if collision::rim_deflects(&court.ball, &court.hoop) {
            court.ball.vel =
                collision::reflect_restitution(court.ball.vel, contact.normal, court.tuning.bounce);
            court.ball.pos += contact.normal * contact.penetration;
        }
    }

    // Backboard
    let board = court.hoop.backboard(&court.tuning);
    if collision::hits_backboard(&court.ball, &board) {
        court.ball.vel.x = -court.ball.vel.x * court.tuning.wall_damping;
        court.ball.pos.x = board.x - court.ball.radius;
    }

    let scored = matches!(court.ball.phase, BallPhase::Flight { scored: true, .. });
    let damping = court.tuning.wall_damping;

    // Side and top walls reflect; the floor is a miss
    if court.ball.left() < 0.0 && court.ball.vel.x < 0.0 {
        court.ball.pos.x = court.ball.radius;
        court.ball.vel.x = -court.ball.vel.x * damping;
    } else if court.ball.right() > court.field.x && court.ball.vel.x > 0.0 {
        court.ball.pos.x = court.field.x - court.ball.radius;
        court.ball.vel.x = -court.ball.vel.x * damping;
    }
    if court.ball.top() < 0.0 && court.ball.vel.y < 0.0 {
        court.ball.pos.y = court.ball.radius;
        court.ball.vel.y = -court.ball.vel.y * damping;
    }

    if !scored && court.ball.bottom() >= court.field.y {
        court.reset_ball();
        return Some(ShotOutcome::Missed);
    }

    // Scoring: descending through the hoop window with the latch set
    if let BallPhase::Flight {
        can_score: true,
        scored: false,
    } = court.ball.phase
    {
        let descending = court.ball.vel.y > 0.0;
        let through = court.ball.bottom() > court.hoop.pos.y;
        let centered =
            (court.ball.pos.x - court.hoop.pos.x).abs() < court.hoop.score_window();
        if descending && through && centered {
            court.ball.phase = BallPhase::Flight {
                can_score: true,
                scored: true,
            };
            court.pending_reset = Some(PendingReset {
                generation: court.generation,
                frames_left: court.tuning.score_reset_delay,
            });
            return Some(ShotOutcome::Scored);
        }
    }

    // Catch-all for lateral exits
    if court.shot_in_flight()
        && (court.ball.top() > court.field.y
            || court.ball.right() < 0.0
            || court.ball.left() > court.field.x)
    {
        court.reset_ball();
        return Some(ShotOutcome::Missed);
    }

    None
}

/// Count down a scheduled post-score reset, discarding it if the court
/// generation has moved on since it was scheduled.
fn tick_pending_reset(court: &mut Court) {
    let Some(pending) = court.pending_reset else {
        return;
    };
    if pending.generation != court.generation {
        court.pending_reset = None;
        return;
    }
    if pending.frames_left == 0 {
        court.pending_reset = None;
        court.reset_ball();
    } else {
        court.pending_reset = Some(PendingReset {
            frames_left: pending.frames_left - 1,
            ..pending
        });
    }
}
