//! Swipeable two-card carousel.
//!
//! The library is headless: a host forwards pointer events and frame times
//! to a [`Carousel`] and draws the active card from its [`Card`] state.

pub mod card;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod deck;
pub mod error;
pub mod flip;
pub mod gesture;
pub mod idle;
pub mod state;

pub use card::{Card, Cursor};
pub use carousel::{Bounds, Carousel, CarouselEvent};
pub use config::{CarouselConfig, CarouselEntry, Configuration};
pub use deck::Deck;
pub use error::CarouselError;
pub use flip::{Direction, FlipTrigger};
pub use gesture::{PointerEvent, PointerPhase, PointerSource};
pub use state::CarouselPhase;
