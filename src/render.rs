use raylib::prelude::*;
use swipe_deck::Carousel;

use crate::palette::Swatch;

pub const HEADING_SIZE: i32 = 32;
pub const LABEL_SIZE: i32 = 20;
pub const CARD_GAP: f32 = 40.0;
pub const CARD_ROUNDNESS: f32 = 0.08;
pub const TOAST_DURATION: f32 = 2.0;

/// Message shown after a tap, fades out over its lifetime.
#[derive(Debug)]
pub struct Toast {
    text: String,
    remaining: f32,
}

impl Toast {
    pub fn new(text: String) -> Self {
        Self {
            text,
            remaining: TOAST_DURATION,
        }
    }

    /// Returns `false` once the toast has expired.
    pub fn update(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining > 0.0
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, screen_width: i32, screen_height: i32) {
        let alpha = (self.remaining / TOAST_DURATION).clamp(0.0, 1.0);
        let width = screen_width - 40;
        let y = screen_height - 60;
        d.draw_rectangle(20, y, width, 40, Color::DARKGRAY.fade(alpha * 0.9));
        d.draw_text(&self.text, 32, y + 10, LABEL_SIZE, Color::WHITE.fade(alpha));
    }
}

fn draw_card(d: &mut RaylibDrawHandle, rect: Rectangle, swatch: &Swatch, alpha: f32) {
    d.draw_rectangle_rounded(rect, CARD_ROUNDNESS, 8, swatch.color.fade(alpha));
    d.draw_text(
        &swatch.name,
        (rect.x + 16.0) as i32,
        (rect.y + 16.0) as i32,
        LABEL_SIZE,
        swatch.label_color().fade(alpha),
    );
}

/// Next card underneath, active card on top at its drag offset and opacity.
pub fn draw_carousel(d: &mut RaylibDrawHandle, carousel: &Carousel<Swatch>, overlay: bool) {
    let bounds = carousel.bounds();
    let rest = Rectangle::new(bounds.x, bounds.y, bounds.width, bounds.height);

    draw_card(d, rest, carousel.next(), 1.0);

    let card = carousel.card();
    let active = Rectangle::new(bounds.x + card.offset(), bounds.y, bounds.width, bounds.height);
    draw_card(d, active, carousel.current(), card.opacity());

    if overlay {
        let idle = match carousel.idle().remaining() {
            Some(remaining) => format!("{remaining:.1}s"),
            None => "-".to_string(),
        };
        let text = format!(
            "State: {:?}  Idx: {}  Idle: {}",
            carousel.phase(),
            carousel.index(),
            idle
        );
        d.draw_text(
            &text,
            bounds.x as i32,
            (bounds.y + bounds.height + 4.0) as i32,
            10,
            Color::DARKGRAY,
        );
    }
}
