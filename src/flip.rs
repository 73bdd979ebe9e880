use crate::card::Card;

/// Horizontal direction a card leaves in.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Sign of a drag delta. Zero counts as right.
    pub fn of(delta: f32) -> Self {
        if delta < 0.0 { Direction::Left } else { Direction::Right }
    }

    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// What started a flip.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FlipTrigger {
    Drag,
    Fling,
    Idle,
    Manual,
}

/// Exit phase of a flip: the card slides a full width away while fading
/// out. When it reports completion the caller resets the card and advances
/// the deck, which happens off-screen so nothing visibly snaps.
#[derive(Debug, Clone)]
pub struct FlipAnimation {
    direction: Direction,
    trigger: FlipTrigger,
    timer: f32,
    duration: f32,
}

impl FlipAnimation {
    pub fn start(
        card: &mut Card,
        direction: Direction,
        trigger: FlipTrigger,
        width: f32,
        duration: f32,
    ) -> Self {
        card.animate_to(direction.sign() * width, 0.0, duration);
        Self {
            direction,
            trigger,
            timer: 0.0,
            duration,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn trigger(&self) -> FlipTrigger {
        self.trigger
    }

    /// Returns `true` once the exit duration has elapsed.
    pub fn update(&mut self, dt: f32) -> bool {
        self.timer += dt;
        self.timer >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_moves_card_a_full_width_away() {
        let mut card = Card::new();
        let mut flip = FlipAnimation::start(&mut card, Direction::Left, FlipTrigger::Drag, 300.0, 0.2);
        card.update(0.2);
        assert_eq!(card.offset(), -300.0);
        assert_eq!(card.opacity(), 0.0);
        assert!(!flip.update(0.1));
        assert!(flip.update(0.1));
    }

    #[test]
    fn direction_follows_delta_sign() {
        assert_eq!(Direction::of(-0.5), Direction::Left);
        assert_eq!(Direction::of(12.0), Direction::Right);
        assert_eq!(Direction::Left.sign(), -1.0);
    }
}
