//! Pointer gesture recognition for the active card.
//!
//! Mouse and touch input are folded into one [`PointerEvent`] shape. A
//! [`GestureSession`] lives from pointer-down until the gesture resolves,
//! and owns everything the resolution needs (origin, start time, target).

use crate::flip::Direction;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PointerSource {
    Mouse,
    Touch,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub source: PointerSource,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, source: PointerSource, x: f32, y: f32) -> Self {
        Self { phase, source, x, y }
    }

    pub fn mouse(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self::new(phase, PointerSource::Mouse, x, y)
    }

    pub fn touch(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self::new(phase, PointerSource::Touch, x, y)
    }
}

/// Identity of a card binding. A new id is handed out every time the
/// carousel binds its active card.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct CardId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    pub source: PointerSource,
    pub target: CardId,
    pub origin_x: f32,
    pub started_at: f32,
    pub last_x: f32,
    pub moved: bool,
}

impl GestureSession {
    pub fn delta(&self) -> f32 {
        self.last_x - self.origin_x
    }
}

/// Result of tracking a pointer move.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Motion {
    pub delta: f32,
    /// px/ms since pointer-down, `None` when no time has passed yet.
    pub speed: Option<f32>,
    pub fling: Option<Direction>,
}

/// How a finished gesture should be resolved.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Resolution {
    Tap,
    SnapBack,
    Flip(Direction),
    /// Pressed and released without moving, but not over the card.
    Ignored,
}

/// A resolved gesture together with the session it closed.
#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    pub resolution: Resolution,
    pub session: GestureSession,
}

#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    fling_speed: Option<f32>,
    session: Option<GestureSession>,
}

impl GestureRecognizer {
    pub fn new(fling_speed: Option<f32>) -> Self {
        Self {
            fling_speed,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Open a session. Returns `false` if one is already live.
    pub fn begin(&mut self, event: &PointerEvent, target: CardId, now: f32) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(GestureSession {
            source: event.source,
            target,
            origin_x: event.x,
            started_at: now,
            last_x: event.x,
            moved: false,
        });
        true
    }

    /// Track a move. Events from the other pointer source are ignored.
    pub fn track(&mut self, event: &PointerEvent, now: f32) -> Option<Motion> {
        let session = self.session.as_mut()?;
        if session.source != event.source {
            return None;
        }
        session.moved = true;
        session.last_x = event.x;
        let delta = session.delta();

        let elapsed_ms = (now - session.started_at) * 1000.0;
        let speed = (elapsed_ms > 0.0).then(|| delta.abs() / elapsed_ms);
        let fling = match (speed, self.fling_speed) {
            (Some(speed), Some(limit)) if delta != 0.0 && speed > limit => {
                Some(Direction::of(delta))
            }
            _ => None,
        };
        Some(Motion { delta, speed, fling })
    }

    /// Resolve the session on pointer-up. `over_card` tells whether the
    /// release landed on the card the session started on.
    pub fn release(&mut self, event: &PointerEvent, width: f32, over_card: bool) -> Option<Release> {
        if self.session.as_ref()?.source != event.source {
            return None;
        }
        let mut session = self.session.take()?;
        if !session.moved {
            let resolution = if over_card {
                Resolution::Tap
            } else {
                Resolution::Ignored
            };
            return Some(Release { resolution, session });
        }
        session.last_x = event.x;
        let delta = session.delta();
        let resolution = if delta.abs() < width / 2.0 {
            Resolution::SnapBack
        } else {
            Resolution::Flip(Direction::of(delta))
        };
        Some(Release { resolution, session })
    }

    /// Abort the session, e.g. on touch-cancel.
    pub fn cancel(&mut self) -> Option<Release> {
        let session = self.session.take()?;
        let resolution = if session.moved {
            Resolution::SnapBack
        } else {
            Resolution::Ignored
        };
        Some(Release { resolution, session })
    }

    /// Drop the session without resolving it (fling, teardown).
    pub fn clear(&mut self) -> Option<GestureSession> {
        self.session.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(x: f32) -> PointerEvent {
        PointerEvent::mouse(PointerPhase::Down, x, 10.0)
    }

    #[test]
    fn second_down_is_rejected() {
        let mut rec = GestureRecognizer::new(None);
        assert!(rec.begin(&down(0.0), CardId(1), 0.0));
        assert!(!rec.begin(&down(50.0), CardId(1), 0.1));
        assert_eq!(rec.session().unwrap().origin_x, 0.0);
    }

    #[test]
    fn release_without_move_is_a_tap() {
        let mut rec = GestureRecognizer::new(None);
        rec.begin(&down(20.0), CardId(1), 0.0);
        let up = PointerEvent::mouse(PointerPhase::Up, 20.0, 10.0);
        let release = rec.release(&up, 300.0, true).unwrap();
        assert_eq!(release.resolution, Resolution::Tap);
        assert!(!rec.is_active());
    }

    #[test]
    fn release_threshold_is_half_the_width() {
        let mut rec = GestureRecognizer::new(None);
        rec.begin(&down(0.0), CardId(1), 0.0);
        rec.track(&PointerEvent::mouse(PointerPhase::Move, -149.0, 0.0), 1.0);
        let up = PointerEvent::mouse(PointerPhase::Up, -149.0, 0.0);
        assert_eq!(rec.release(&up, 300.0, true).unwrap().resolution, Resolution::SnapBack);

        rec.begin(&down(0.0), CardId(1), 0.0);
        rec.track(&PointerEvent::mouse(PointerPhase::Move, -150.0, 0.0), 1.0);
        let up = PointerEvent::mouse(PointerPhase::Up, -150.0, 0.0);
        assert_eq!(
            rec.release(&up, 300.0, false).unwrap().resolution,
            Resolution::Flip(Direction::Left)
        );
    }

    #[test]
    fn fast_move_reports_fling() {
        let mut rec = GestureRecognizer::new(Some(0.75));
        rec.begin(&down(0.0), CardId(1), 0.0);
        let slow = rec.track(&PointerEvent::mouse(PointerPhase::Move, 50.0, 0.0), 0.1).unwrap();
        assert_eq!(slow.fling, None);
        let fast = rec.track(&PointerEvent::mouse(PointerPhase::Move, 100.0, 0.0), 0.12).unwrap();
        assert_eq!(fast.fling, Some(Direction::Right));
    }

    #[test]
    fn move_in_the_same_instant_has_no_speed() {
        let mut rec = GestureRecognizer::new(Some(0.75));
        rec.begin(&down(0.0), CardId(1), 2.0);
        let motion = rec.track(&PointerEvent::mouse(PointerPhase::Move, 80.0, 0.0), 2.0).unwrap();
        assert_eq!(motion.speed, None);
        assert_eq!(motion.fling, None);
    }

    #[test]
    fn other_source_does_not_touch_the_session() {
        let mut rec = GestureRecognizer::new(None);
        rec.begin(&PointerEvent::touch(PointerPhase::Down, 0.0, 0.0), CardId(1), 0.0);
        assert!(rec.track(&PointerEvent::mouse(PointerPhase::Move, 90.0, 0.0), 0.5).is_none());
        assert!(rec.release(&PointerEvent::mouse(PointerPhase::Up, 0.0, 0.0), 300.0, true).is_none());
        assert!(rec.is_active());
        assert!(!rec.session().unwrap().moved);
    }

    #[test]
    fn cancel_after_move_snaps_back() {
        let mut rec = GestureRecognizer::new(None);
        rec.begin(&down(0.0), CardId(1), 0.0);
        rec.track(&PointerEvent::mouse(PointerPhase::Move, 200.0, 0.0), 1.0);
        assert_eq!(rec.cancel().unwrap().resolution, Resolution::SnapBack);
        assert!(rec.cancel().is_none());
    }
}
