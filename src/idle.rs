/// Whether an auto-advance is pending.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum IdleState {
    Disarmed,
    Armed { remaining: f32 },
}

/// Single-flight idle timer. Arming always replaces the pending deadline,
/// so there is never more than one outstanding.
#[derive(Debug, Clone)]
pub struct IdleTimer {
    delay: f32,
    state: IdleState,
}

impl IdleTimer {
    pub fn new(delay: f32) -> Self {
        Self {
            delay,
            state: IdleState::Disarmed,
        }
    }

    pub fn state(&self) -> IdleState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, IdleState::Armed { .. })
    }

    pub fn remaining(&self) -> Option<f32> {
        match self.state {
            IdleState::Armed { remaining } => Some(remaining),
            IdleState::Disarmed => None,
        }
    }

    pub fn arm(&mut self) {
        self.state = IdleState::Armed {
            remaining: self.delay,
        };
    }

    pub fn disarm(&mut self) {
        self.state = IdleState::Disarmed;
    }

    /// Count down. Returns `true` exactly once when the deadline passes.
    pub fn update(&mut self, dt: f32) -> bool {
        let IdleState::Armed { remaining } = self.state else {
            return false;
        };
        let remaining = remaining - dt;
        if remaining <= 0.0 {
            self.state = IdleState::Disarmed;
            true
        } else {
            self.state = IdleState::Armed { remaining };
            false
        }
    }
}
