use raylib::prelude::*;
use swipe_deck::{PointerEvent, PointerPhase};

/// Raw pointer state for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSample {
    pub touch: Option<(f32, f32)>,
    pub mouse: (f32, f32),
    pub mouse_pressed: bool,
    pub mouse_down: bool,
    pub mouse_released: bool,
}

impl InputSample {
    pub fn capture(rl: &RaylibHandle) -> Self {
        let touch = if rl.get_touch_point_count() > 0 {
            let p = rl.get_touch_position(0);
            Some((p.x, p.y))
        } else {
            None
        };
        let m = rl.get_mouse_position();
        Self {
            touch,
            mouse: (m.x, m.y),
            mouse_pressed: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            mouse_down: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
            mouse_released: rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
        }
    }
}

/// Turns per-frame polling into down/move/up events.
///
/// Touch wins over mouse: while a finger is down (and on the frame it
/// lifts) the emulated mouse state is ignored.
#[derive(Debug, Default)]
pub struct PointerTracker {
    touch: Option<(f32, f32)>,
    mouse: Option<(f32, f32)>,
}

impl PointerTracker {
    pub fn step(&mut self, sample: InputSample) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        match (self.touch, sample.touch) {
            (None, Some((x, y))) => {
                events.push(PointerEvent::touch(PointerPhase::Down, x, y));
                self.touch = Some((x, y));
            }
            (Some(last), Some((x, y))) => {
                if last != (x, y) {
                    events.push(PointerEvent::touch(PointerPhase::Move, x, y));
                    self.touch = Some((x, y));
                }
            }
            (Some((x, y)), None) => {
                events.push(PointerEvent::touch(PointerPhase::Up, x, y));
                self.touch = None;
                return events;
            }
            (None, None) => {}
        }
        if self.touch.is_some() {
            return events;
        }

        let (x, y) = sample.mouse;
        if sample.mouse_pressed && self.mouse.is_none() {
            events.push(PointerEvent::mouse(PointerPhase::Down, x, y));
            self.mouse = Some((x, y));
        } else if let Some(last) = self.mouse {
            if sample.mouse_released || !sample.mouse_down {
                events.push(PointerEvent::mouse(PointerPhase::Up, x, y));
                self.mouse = None;
            } else if last != (x, y) {
                events.push(PointerEvent::mouse(PointerPhase::Move, x, y));
                self.mouse = Some((x, y));
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phases(events: &[PointerEvent]) -> Vec<PointerPhase> {
        events.iter().map(|e| e.phase).collect()
    }

    #[test]
    fn mouse_press_drag_release() {
        let mut tracker = PointerTracker::default();
        let press = InputSample {
            mouse: (10.0, 10.0),
            mouse_pressed: true,
            mouse_down: true,
            ..Default::default()
        };
        assert_eq!(phases(&tracker.step(press)), vec![PointerPhase::Down]);

        let drag = InputSample {
            mouse: (60.0, 12.0),
            mouse_down: true,
            ..Default::default()
        };
        assert_eq!(phases(&tracker.step(drag)), vec![PointerPhase::Move]);
        assert!(tracker.step(drag).is_empty());

        let release = InputSample {
            mouse: (60.0, 12.0),
            mouse_released: true,
            ..Default::default()
        };
        let events = tracker.step(release);
        assert_eq!(phases(&events), vec![PointerPhase::Up]);
        assert_eq!(events[0].x, 60.0);
    }

    #[test]
    fn touch_suppresses_emulated_mouse() {
        let mut tracker = PointerTracker::default();
        let touch = InputSample {
            touch: Some((5.0, 5.0)),
            mouse: (5.0, 5.0),
            mouse_pressed: true,
            mouse_down: true,
            ..Default::default()
        };
        let events = tracker.step(touch);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].source, swipe_deck::PointerSource::Touch);

        let lift = InputSample {
            mouse: (5.0, 5.0),
            mouse_released: true,
            ..Default::default()
        };
        let events = tracker.step(lift);
        assert_eq!(phases(&events), vec![PointerPhase::Up]);
        assert_eq!(events[0].source, swipe_deck::PointerSource::Touch);
        assert!(tracker.step(InputSample::default()).is_empty());
    }
}
