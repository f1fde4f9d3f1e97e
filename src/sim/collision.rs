//! Collision detection and response for the rim and backboard
//!
//! The rim is modeled as a single contact circle around the hoop center with
//! radius `ball.radius + hoop.radius - rim_thickness / 2`: touching that
//! circle from above means the ball is touching the rim tube. Whether a
//! candidate contact actually deflects depends on the shot - balls dropping
//! centrally pass through, balls grazing the rim edge or still rising bounce.

use glam::Vec2;

use super::state::{Backboard, Ball, Hoop};

/// A resolved contact: surface normal (toward the ball) and penetration depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub normal: Vec2,
    pub penetration: f32,
}

/// Check the ball against the rim contact circle.
///
/// Candidates exist only while the ball's lower edge is still above the rim
/// plane (approaching from above) and the center lies inside the combined
/// radius. Returns the outward normal and how deep the ball has sunk in.
pub fn rim_contact(ball: &Ball, hoop: &Hoop) -> Option<Contact> {
    if ball.bottom() >= hoop.pos.y {
        return None;
    }

    let combined = hoop.contact_radius(ball.radius);
    let offset = ball.pos - hoop.pos;
    let dist = offset.length();
    if dist >= combined {
        return None;
    }

    // Degenerate center-on-center overlap: push straight up
    let normal = if dist > f32::EPSILON {
        offset / dist
    } else {
        Vec2::NEG_Y
    };

    Some(Contact {
        normal,
        penetration: combined - dist,
    })
}

/// Should a rim candidate actually bounce?
///
/// Rising balls always deflect; descending balls deflect only when their
/// horizontal offset from the hoop center exceeds the scoring window, so a
/// centered drop falls through clean.
pub fn rim_deflects(ball: &Ball, hoop: &Hoop) -> bool {
    ball.vel.y < 0.0 || (ball.pos.x - hoop.pos.x).abs() > hoop.score_window()
}

/// Reflect the velocity component along `normal`, scaled by `(1 + restitution)`.
///
/// Only applies while the velocity is closing (`v·n < 0`); separating
/// velocities pass through unchanged so a contact can't re-capture a ball
/// that is already leaving.
#[inline]
pub fn reflect_restitution(vel: Vec2, normal: Vec2, restitution: f32) -> Vec2 {
    let closing = vel.dot(normal);
    if closing >= 0.0 {
        return vel;
    }
    vel - (1.0 + restitution) * closing * normal
}

/// Backboard test: the ball's right edge has reached the board plane within
/// its vertical extent, moving rightward, with the center still left of the
/// plane (so a ball wholly behind the board is never captured).
pub fn hits_backboard(ball: &Ball, board: &Backboard) -> bool {
    ball.vel.x > 0.0
        && ball.right() >= board.x
        && ball.pos.x < board.x
        && ball.pos.y >= board.top
        && ball.pos.y <= board.bottom
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::BallPhase;

    fn hoop() -> Hoop {
        Hoop {
            pos: Vec2::new(400.0, 120.0),
            radius: 38.0,
            thickness: 6.0,
        }
    }

    fn flight_ball(pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            pos,
            vel,
            radius: 24.0,
            phase: BallPhase::Flight {
                can_score: false,
                scored: false,
            },
        }
    }

    #[test]
    fn no_candidate_below_rim_plane() {
        let hoop = hoop();
        // Center exactly on the hoop, but lower edge below the rim plane
        let ball = flight_ball(hoop.pos, Vec2::new(0.0, 4.0));
        assert!(rim_contact(&ball, &hoop).is_none());
    }

    #[test]
    fn no_candidate_outside_contact_circle() {
        let hoop = hoop();
        let combined = hoop.contact_radius(24.0);
        let ball = flight_ball(
            hoop.pos + Vec2::new(-(combined + 1.0), -40.0),
            Vec2::new(2.0, 2.0),
        );
        assert!(rim_contact(&ball, &hoop).is_none());
    }

    #[test]
    fn candidate_reports_normal_and_penetration() {
        let hoop = hoop();
        // 50 px up-left of the hoop center, well inside the 59 px contact circle
        let ball = flight_ball(hoop.pos + Vec2::new(-30.0, -40.0), Vec2::new(0.0, 4.0));
        let contact = rim_contact(&ball, &hoop).expect("candidate expected");

        let combined = hoop.contact_radius(24.0);
        assert!((contact.penetration - (combined - 50.0)).abs() < 1e-4);
        // Normal points from hoop center toward the ball
        assert!(contact.normal.x < 0.0 && contact.normal.y < 0.0);
        assert!((contact.normal.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn rising_ball_always_deflects() {
        let hoop = hoop();
        let ball = flight_ball(hoop.pos + Vec2::new(0.0, -40.0), Vec2::new(0.0, -6.0));
        assert!(rim_deflects(&ball, &hoop));
    }

    #[test]
    fn central_descending_ball_passes_through() {
        let hoop = hoop();
        // Offset 10 px, well inside the 30.4 px scoring window
        let ball = flight_ball(hoop.pos + Vec2::new(10.0, -40.0), Vec2::new(0.0, 6.0));
        assert!(!rim_deflects(&ball, &hoop));
    }

    #[test]
    fn edge_descending_ball_deflects() {
        let hoop = hoop();
        // Offset 34 px exceeds the 0.8 * 38 = 30.4 px window
        let ball = flight_ball(hoop.pos + Vec2::new(34.0, -40.0), Vec2::new(0.0, 6.0));
        assert!(rim_deflects(&ball, &hoop));
    }

    #[test]
    fn reflect_restitution_reverses_closing_component() {
        // Falling onto a surface whose normal points up (screen coords: -y)
        let out = reflect_restitution(Vec2::new(0.0, 5.0), Vec2::NEG_Y, 0.7);
        assert!((out.y - (-3.5)).abs() < 1e-5);
        assert_eq!(out.x, 0.0);
    }

    #[test]
    fn reflect_restitution_ignores_separating_velocity() {
        let vel = Vec2::new(0.0, -5.0);
        let out = reflect_restitution(vel, Vec2::NEG_Y, 0.7);
        assert_eq!(out, vel);
    }

    #[test]
    fn backboard_requires_rightward_motion_within_extent() {
        let board = Backboard {
            x: 444.0,
            top: 10.0,
            bottom: 132.0,
        };
        let hit = flight_ball(Vec2::new(425.0, 60.0), Vec2::new(5.0, 1.0));
        assert!(hits_backboard(&hit, &board));

        // Moving leftward: no contact
        let leaving = flight_ball(Vec2::new(425.0, 60.0), Vec2::new(-5.0, 1.0));
        assert!(!hits_backboard(&leaving, &board));

        // Below the board's extent
        let under = flight_ball(Vec2::new(425.0, 200.0), Vec2::new(5.0, 1.0));
        assert!(!hits_backboard(&under, &board));

        // Wholly behind the plane already
        let behind = flight_ball(Vec2::new(470.0, 60.0), Vec2::new(5.0, 1.0));
        assert!(!hits_backboard(&behind, &board));
    }
}
