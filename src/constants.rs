use std::time::Duration;

pub const CARD_WIDTH: f32 = 300.0;            // Default card width (px)
pub const CARD_HEIGHT: f32 = 200.0;           // Default card height (px)

pub const FLIP_DURATION: Duration = Duration::from_millis(200);      // Exit animation of a flipped card
pub const SNAP_BACK_DURATION: Duration = Duration::from_millis(200); // Return of a released card to rest
pub const IDLE_DELAY: Duration = Duration::from_secs(3);             // Auto-advance after this much inactivity
pub const FLING_SPEED: f32 = 0.75;            // Drag speed that flips without release (px/ms)
