use std::fmt;

use tracing::{debug, trace, warn};

use crate::card::Card;
use crate::config::CarouselConfig;
use crate::deck::Deck;
use crate::error::{CarouselError, Result};
use crate::flip::{Direction, FlipAnimation, FlipTrigger};
use crate::gesture::{
    CardId, GestureRecognizer, GestureSession, PointerEvent, PointerPhase, Resolution,
};
use crate::idle::IdleTimer;
use crate::state::CarouselPhase;

/// Notifications surfaced to the host, collected with [`Carousel::drain_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent<T> {
    /// The resting card was tapped; carries the item shown at the time.
    Tapped(T),
    Flipped {
        index: usize,
        direction: Direction,
        trigger: FlipTrigger,
    },
    SnappedBack,
}

/// Screen rectangle of the active card at rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// A two-card swipeable carousel.
///
/// The host feeds it pointer events and frame times; the carousel owns its
/// gesture session, flip animation and idle timer, so several instances can
/// run side by side without sharing any state.
pub struct Carousel<T> {
    config: CarouselConfig,
    deck: Deck<T>,
    card: Card,
    binding: Option<CardId>,
    bindings_issued: u64,
    origin: (f32, f32),
    gesture: GestureRecognizer,
    flip: Option<FlipAnimation>,
    idle: IdleTimer,
    pending_tap: Option<T>,
    clock: f32,
    events: Vec<CarouselEvent<T>>,
}

impl<T: fmt::Debug> fmt::Debug for Carousel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("index", &self.deck.index())
            .field("current", self.deck.current())
            .field("binding", &self.binding)
            .field("idle", &self.idle.state())
            .field("flipping", &self.flip.is_some())
            .field("dragging", &self.gesture.is_active())
            .finish()
    }
}

impl<T: Clone + fmt::Debug> Carousel<T> {
    pub fn new(config: CarouselConfig, items: Vec<T>) -> Result<Self> {
        config.validate()?;
        let deck = Deck::new(items, config.initial_index)?;
        let idle = IdleTimer::new(config.idle_delay.as_secs_f32());
        let gesture = GestureRecognizer::new(config.fling_speed);
        Ok(Self {
            config,
            deck,
            card: Card::new(),
            binding: None,
            bindings_issued: 0,
            origin: (0.0, 0.0),
            gesture,
            flip: None,
            idle,
            pending_tap: None,
            clock: 0.0,
            events: Vec::new(),
        })
    }

    // --- Lifecycle ---

    /// Bind the active card and start the idle cycle.
    pub fn mount(&mut self) -> CardId {
        let id = match self.binding {
            Some(id) => id,
            None => self.bind_card(),
        };
        if self.flip.is_none() && !self.gesture.is_active() {
            self.idle.arm();
        }
        debug!(card = id.0, items = self.deck.len(), "carousel mounted");
        id
    }

    /// Attach a fresh render binding for the active card.
    pub fn bind_card(&mut self) -> CardId {
        self.bindings_issued += 1;
        let id = CardId(self.bindings_issued);
        self.binding = Some(id);
        if self.flip.is_none() {
            self.card.reset();
        }
        id
    }

    /// Drop the render binding without touching timers.
    pub fn unbind_card(&mut self) -> Option<CardId> {
        self.binding.take()
    }

    /// Cancel everything. Nothing fires after this until `mount` is called again.
    pub fn teardown(&mut self) {
        self.idle.disarm();
        self.gesture.clear();
        self.flip = None;
        self.pending_tap = None;
        self.binding = None;
        self.card.reset();
        debug!("carousel torn down");
    }

    // --- Accessors ---

    pub fn current(&self) -> &T {
        self.deck.current()
    }

    pub fn next(&self) -> &T {
        self.deck.next()
    }

    pub fn index(&self) -> usize {
        self.deck.index()
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn binding(&self) -> Option<CardId> {
        self.binding
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.gesture.session()
    }

    pub fn idle(&self) -> &IdleTimer {
        &self.idle
    }

    pub fn is_idle_armed(&self) -> bool {
        self.idle.is_armed()
    }

    pub fn has_pending_tap(&self) -> bool {
        self.pending_tap.is_some()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.origin.0,
            y: self.origin.1,
            width: self.config.width,
            height: self.config.height,
        }
    }

    pub fn set_origin(&mut self, x: f32, y: f32) {
        self.origin = (x, y);
    }

    pub fn phase(&self) -> CarouselPhase {
        if self.flip.is_some() {
            CarouselPhase::Flipping
        } else if self.binding.is_none() {
            CarouselPhase::Unmounted
        } else if self.gesture.is_active() {
            CarouselPhase::Dragging
        } else if self.card.is_animating() {
            CarouselPhase::SnappingBack
        } else {
            CarouselPhase::Resting
        }
    }

    pub fn drain_events(&mut self) -> Vec<CarouselEvent<T>> {
        std::mem::take(&mut self.events)
    }

    /// Replace the whole item list. The index is folded into the new length.
    pub fn set_items(&mut self, items: Vec<T>) -> Result<()> {
        self.deck.replace(items)?;
        debug!(items = self.deck.len(), index = self.deck.index(), "items replaced");
        Ok(())
    }

    // --- Input ---

    /// Feed one pointer event. Returns `true` if the carousel consumed it.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        match event.phase {
            PointerPhase::Down => self.pointer_down(event),
            PointerPhase::Move => self.pointer_move(event),
            PointerPhase::Up => self.pointer_up(event),
            PointerPhase::Cancel => self.pointer_cancel(),
        }
    }

    fn pointer_down(&mut self, event: &PointerEvent) -> bool {
        let Some(target) = self.binding else {
            return false;
        };
        if !self.bounds().contains(event.x, event.y) {
            return false;
        }
        if self.gesture.is_active() || self.flip.is_some() || self.pending_tap.is_some() {
            trace!(source = ?event.source, "pointer-down throttled");
            return false;
        }
        self.idle.disarm();
        self.gesture.begin(event, target, self.clock);
        self.card.dragging = true;
        trace!(source = ?event.source, x = event.x, "gesture started");
        true
    }

    fn pointer_move(&mut self, event: &PointerEvent) -> bool {
        let Some(motion) = self.gesture.track(event, self.clock) else {
            return false;
        };
        if self.targets_bound_card() {
            self.card.follow(motion.delta, self.config.width);
        }
        if let Some(direction) = motion.fling {
            if let Some(session) = self.gesture.clear() {
                debug!(speed = ?motion.speed, ?direction, "fling");
                self.resolve_flip(&session, direction, FlipTrigger::Fling);
            }
        }
        true
    }

    fn pointer_up(&mut self, event: &PointerEvent) -> bool {
        let over_card = self.bounds().contains(event.x, event.y);
        let Some(release) = self.gesture.release(event, self.config.width, over_card) else {
            return false;
        };
        match release.resolution {
            Resolution::Tap => {
                self.card.dragging = false;
                self.pending_tap = Some(self.deck.current().clone());
                self.idle.arm();
            }
            Resolution::Ignored => {
                self.card.dragging = false;
                self.idle.arm();
            }
            Resolution::SnapBack => self.snap_back(&release.session),
            Resolution::Flip(direction) => {
                self.resolve_flip(&release.session, direction, FlipTrigger::Drag)
            }
        }
        true
    }

    fn pointer_cancel(&mut self) -> bool {
        let Some(release) = self.gesture.cancel() else {
            return false;
        };
        match release.resolution {
            Resolution::SnapBack => self.snap_back(&release.session),
            _ => {
                self.card.dragging = false;
                self.idle.arm();
            }
        }
        true
    }

    fn targets_bound_card(&self) -> bool {
        match (self.gesture.session(), self.binding) {
            (Some(session), Some(bound)) => session.target == bound,
            _ => false,
        }
    }

    fn snap_back(&mut self, session: &GestureSession) {
        if self.binding == Some(session.target) {
            self.card.dragging = false;
            let duration = self.config.snap_back_duration.as_secs_f32();
            self.card.animate_to(0.0, 1.0, duration);
            self.events.push(CarouselEvent::SnappedBack);
            debug!(delta = session.delta(), "snap back");
        }
        self.idle.arm();
    }

    fn resolve_flip(&mut self, session: &GestureSession, direction: Direction, trigger: FlipTrigger) {
        if self.binding != Some(session.target) {
            warn!(card = session.target.0, "dragged card is no longer bound, skipping flip");
            self.idle.arm();
            return;
        }
        self.begin_flip(direction, trigger);
    }

    // --- Flips ---

    /// Flip the active card away programmatically.
    pub fn flip(&mut self, direction: Direction) -> Result<()> {
        if self.binding.is_none() {
            return Err(CarouselError::MissingActiveCard);
        }
        if self.flip.is_some() {
            return Err(CarouselError::FlipInFlight);
        }
        self.gesture.clear();
        self.begin_flip(direction, FlipTrigger::Manual);
        Ok(())
    }

    fn begin_flip(&mut self, direction: Direction, trigger: FlipTrigger) {
        self.idle.disarm();
        self.card.dragging = true;
        self.flip = Some(FlipAnimation::start(
            &mut self.card,
            direction,
            trigger,
            self.config.width,
            self.config.flip_duration.as_secs_f32(),
        ));
        debug!(?direction, ?trigger, index = self.deck.index(), "flip started");
    }

    fn finish_flip(&mut self) {
        let Some(flip) = self.flip.take() else {
            return;
        };
        self.card.reset();
        let index = self.deck.advance();
        self.idle.arm();
        self.events.push(CarouselEvent::Flipped {
            index,
            direction: flip.direction(),
            trigger: flip.trigger(),
        });
        debug!(index, current = ?self.deck.current(), "flip finished");
    }

    // --- Time ---

    /// Advance time by `dt` seconds.
    ///
    /// Fails with [`CarouselError::MissingActiveCard`] when the idle timer
    /// fires while no card is bound; the timer is left disarmed.
    pub fn update(&mut self, dt: f32) -> Result<()> {
        self.clock += dt;

        // 1. Deliver a tap queued by the previous pointer-up
        if let Some(item) = self.pending_tap.take() {
            debug!(?item, "tap");
            self.events.push(CarouselEvent::Tapped(item));
        }

        // 2. Move the card along its transition (snap-back or exit)
        self.card.update(dt);

        // 3. Finish the flip once the card is off-screen; this rearms the idle timer
        let finished = self.flip.as_mut().is_some_and(|flip| flip.update(dt));
        if finished {
            self.finish_flip();
            // Freshly armed: the countdown starts next frame
            return Ok(());
        }

        // 4. Count down to the next auto-advance
        if self.idle.update(dt) {
            if self.binding.is_none() {
                // Binding lost: stop the cycle and report it
                self.idle.disarm();
                return Err(CarouselError::MissingActiveCard);
            }
            self.begin_flip(Direction::Right, FlipTrigger::Idle);
        }
        Ok(())
    }
}
