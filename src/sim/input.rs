//! Pointer input: drag gestures and the launch mapping
//!
//! The host delivers pointer events already mapped into field coordinates.
//! A drag begins only on a pointer-down inside the ball, release converts
//! the drag vector straight into launch velocity, and everything that
//! doesn't fit the gesture (downs that miss, ups with no drag, drags below
//! the minimum length) is silently ignored.

use glam::Vec2;

use super::state::{BallPhase, Court};

/// A pointer event in field coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up(Vec2),
    Cancel,
}

/// Feed one pointer event into the court.
pub fn handle_pointer(court: &mut Court, event: PointerEvent) {
    match event {
        PointerEvent::Down(point) => {
            if matches!(court.ball.phase, BallPhase::Idle) && court.ball.contains(point) {
                court.ball.phase = BallPhase::Dragging {
                    start: point,
                    current: point,
                };
            }
        }
        PointerEvent::Move(point) => {
            if let BallPhase::Dragging {
                ref mut current, ..
            } = court.ball.phase
            {
                *current = point;
            }
        }
        PointerEvent::Up(point) => {
            if let BallPhase::Dragging { start, .. } = court.ball.phase {
                court.ball.phase = BallPhase::Dragging {
                    start,
                    current: point,
                };
                release(court);
            }
        }
        // Pointer-cancel resolves the drag at its last known point
        PointerEvent::Cancel => {
            if court.ball.is_dragging() {
                release(court);
            }
        }
    }
}

/// Resolve an active drag: launch if the gesture is long enough, otherwise
/// treat it as cancelled.
fn release(court: &mut Court) {
    let BallPhase::Dragging { start, current } = court.ball.phase else {
        return;
    };

    let drag = current - start;
    if drag.length() > court.tuning.min_drag_dist {
        court.ball.vel = drag * court.tuning.drag_scale;
        court.ball.phase = BallPhase::Flight {
            can_score: false,
            scored: false,
        };
    } else {
        court.ball.phase = BallPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Tuning;
    use proptest::prelude::*;

    fn court() -> Court {
        Court::new(800.0, 600.0, Tuning::default())
    }

    #[test]
    fn down_outside_ball_is_ignored() {
        let mut court = court();
        let far = court.ball.pos + Vec2::new(100.0, 0.0);
        handle_pointer(&mut court, PointerEvent::Down(far));
        assert_eq!(court.ball.phase, BallPhase::Idle);
    }

    #[test]
    fn down_on_ball_starts_drag() {
        let mut court = court();
        let grab = court.ball.pos + Vec2::new(5.0, -5.0);
        handle_pointer(&mut court, PointerEvent::Down(grab));
        assert_eq!(
            court.ball.phase,
            BallPhase::Dragging {
                start: grab,
                current: grab
            }
        );
        assert_eq!(court.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn move_updates_current_point_only() {
        let mut court = court();
        let grab = court.ball.pos;
        handle_pointer(&mut court, PointerEvent::Down(grab));
        let dragged = grab + Vec2::new(-40.0, 60.0);
        handle_pointer(&mut court, PointerEvent::Move(dragged));
        assert_eq!(
            court.ball.phase,
            BallPhase::Dragging {
                start: grab,
                current: dragged
            }
        );
        assert_eq!(court.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut court = court();
        handle_pointer(&mut court, PointerEvent::Move(Vec2::new(10.0, 10.0)));
        assert_eq!(court.ball.phase, BallPhase::Idle);
    }

    #[test]
    fn up_without_drag_is_ignored() {
        let mut court = court();
        handle_pointer(&mut court, PointerEvent::Up(Vec2::new(10.0, 10.0)));
        assert_eq!(court.ball.phase, BallPhase::Idle);
        assert_eq!(court.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn short_drag_cancels_without_launch() {
        let mut court = court();
        let grab = court.ball.pos;
        handle_pointer(&mut court, PointerEvent::Down(grab));
        handle_pointer(&mut court, PointerEvent::Up(grab + Vec2::new(3.0, 0.0)));
        assert_eq!(court.ball.phase, BallPhase::Idle);
        assert_eq!(court.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn long_drag_launches_with_scaled_velocity() {
        let mut court = court();
        let grab = court.ball.pos;
        let drag = Vec2::new(-50.0, -120.0);
        handle_pointer(&mut court, PointerEvent::Down(grab));
        handle_pointer(&mut court, PointerEvent::Up(grab + drag));

        assert_eq!(
            court.ball.phase,
            BallPhase::Flight {
                can_score: false,
                scored: false
            }
        );
        assert_eq!(court.ball.vel, drag * court.tuning.drag_scale);
        assert!(court.shot_in_flight());
    }

    #[test]
    fn cancel_resolves_at_last_move_point() {
        let mut court = court();
        let grab = court.ball.pos;
        let drag = Vec2::new(30.0, -90.0);
        handle_pointer(&mut court, PointerEvent::Down(grab));
        handle_pointer(&mut court, PointerEvent::Move(grab + drag));
        handle_pointer(&mut court, PointerEvent::Cancel);

        assert_eq!(court.ball.vel, drag * court.tuning.drag_scale);
        assert!(court.ball.in_flight());
    }

    #[test]
    fn cannot_grab_ball_in_flight() {
        let mut court = court();
        let grab = court.ball.pos;
        handle_pointer(&mut court, PointerEvent::Down(grab));
        handle_pointer(&mut court, PointerEvent::Up(grab + Vec2::new(0.0, -100.0)));
        assert!(court.ball.in_flight());

        let pos = court.ball.pos;
        handle_pointer(&mut court, PointerEvent::Down(pos));
        assert!(court.ball.in_flight());
    }

    proptest! {
        /// Drags at or below the minimum distance never launch
        #[test]
        fn short_drags_never_launch(dx in -5.0f32..=5.0, dy in -5.0f32..=5.0) {
            let mut court = court();
            let grab = court.ball.pos;
            let end = grab + Vec2::new(dx, dy);
            // The gesture the sim sees is end - grab, not the raw offsets
            prop_assume!((end - grab).length() <= 5.0);

            handle_pointer(&mut court, PointerEvent::Down(grab));
            handle_pointer(&mut court, PointerEvent::Move(end));
            handle_pointer(&mut court, PointerEvent::Up(end));

            prop_assert_eq!(court.ball.phase, BallPhase::Idle);
            prop_assert_eq!(court.ball.vel, Vec2::ZERO);
        }

        /// Drags past the minimum distance launch with exactly `drag * scale`
        #[test]
        fn launch_velocity_is_exact(dx in -300.0f32..=300.0, dy in -300.0f32..=300.0) {
            let mut court = court();
            let grab = court.ball.pos;
            let end = grab + Vec2::new(dx, dy);
            let drag = end - grab;
            prop_assume!(drag.length() > 5.0);

            handle_pointer(&mut court, PointerEvent::Down(grab));
            handle_pointer(&mut court, PointerEvent::Up(end));

            prop_assert!(court.ball.in_flight());
            prop_assert_eq!(court.ball.vel, drag * court.tuning.drag_scale);
        }
    }
}
