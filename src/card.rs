/// Cursor shown over the active card.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Cursor {
    Grab,
    Grabbing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    start_offset: f32,
    start_opacity: f32,
    end_offset: f32,
    end_opacity: f32,
    timer: f32,
    duration: f32,
}

/// Visual state of the topmost card: horizontal offset, opacity and cursor.
///
/// The host reads these every frame to draw the card; the carousel writes
/// them while dragging, snapping back and flipping.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    offset: f32,
    opacity: f32,
    cursor: Cursor,
    pub dragging: bool,
    transition: Option<Transition>,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Card {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            opacity: 1.0,
            cursor: Cursor::Grab,
            dragging: false,
            transition: None,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn is_at_rest(&self) -> bool {
        self.transition.is_none() && self.offset == 0.0 && self.opacity == 1.0
    }

    /// Track the pointer 1:1. Opacity fades to zero at one card width.
    pub fn follow(&mut self, delta: f32, width: f32) {
        self.transition = None;
        self.offset = delta;
        self.opacity = fade_for(delta, width);
        self.cursor = Cursor::Grabbing;
    }

    pub fn animate_to(&mut self, offset: f32, opacity: f32, duration: f32) {
        self.cursor = Cursor::Grab;
        if duration <= 0.0 {
            self.transition = None;
            self.offset = offset;
            self.opacity = opacity.clamp(0.0, 1.0);
            return;
        }
        self.transition = Some(Transition {
            start_offset: self.offset,
            start_opacity: self.opacity,
            end_offset: offset,
            end_opacity: opacity.clamp(0.0, 1.0),
            timer: 0.0,
            duration,
        });
    }

    /// Jump to rest with no transition.
    pub fn reset(&mut self) {
        self.transition = None;
        self.offset = 0.0;
        self.opacity = 1.0;
        self.cursor = Cursor::Grab;
        self.dragging = false;
    }

    pub fn update(&mut self, dt: f32) {
        let Some(tr) = self.transition.as_mut() else {
            return;
        };
        tr.timer += dt;
        let t = (tr.timer / tr.duration).min(1.0);
        self.offset = lerp(tr.start_offset, tr.end_offset, t);
        self.opacity = lerp(tr.start_opacity, tr.end_opacity, t);

        if tr.timer >= tr.duration {
            self.offset = tr.end_offset;
            self.opacity = tr.end_opacity;
            self.transition = None;
        }
    }
}

/// Opacity for a given drag distance, clamped to [0, 1].
pub fn fade_for(delta: f32, width: f32) -> f32 {
    if width <= 0.0 {
        return if delta == 0.0 { 1.0 } else { 0.0 };
    }
    (1.0 - delta.abs() / width).clamp(0.0, 1.0)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_fades_linearly_and_clamps() {
        let mut card = Card::new();
        card.follow(150.0, 300.0);
        assert_eq!(card.offset(), 150.0);
        assert!((card.opacity() - 0.5).abs() < 1e-6);
        assert_eq!(card.cursor(), Cursor::Grabbing);

        card.follow(-450.0, 300.0);
        assert_eq!(card.opacity(), 0.0);
    }

    #[test]
    fn transition_reaches_its_target() {
        let mut card = Card::new();
        card.follow(100.0, 300.0);
        card.animate_to(0.0, 1.0, 0.2);
        card.update(0.1);
        assert!((card.offset() - 50.0).abs() < 1e-3);
        assert!(card.is_animating());
        card.update(0.15);
        assert!(card.is_at_rest());
        assert_eq!(card.cursor(), Cursor::Grab);
    }

    #[test]
    fn reset_is_instant() {
        let mut card = Card::new();
        card.dragging = true;
        card.animate_to(300.0, 0.0, 0.2);
        card.update(0.05);
        card.reset();
        assert!(card.is_at_rest());
        assert!(!card.dragging);
    }

    #[test]
    fn zero_width_card_does_not_divide_by_zero() {
        assert_eq!(fade_for(0.0, 0.0), 1.0);
        assert_eq!(fade_for(3.0, 0.0), 0.0);
    }
}
