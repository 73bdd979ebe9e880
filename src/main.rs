//! Binary entrypoint: hosts the configured carousels in a raylib window.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use raylib::prelude::*;
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, fmt};

use swipe_deck::config::{self, CarouselEntry, Configuration};
use swipe_deck::{Carousel, CarouselEvent, Cursor};

mod input;
mod palette;
mod render;

use crate::input::{InputSample, PointerTracker};
use crate::palette::Swatch;
use crate::render::{CARD_GAP, HEADING_SIZE, Toast, draw_carousel};

#[derive(Debug, Parser)]
#[command(name = "swipe-deck", about = "Swipeable card carousel")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show a single carousel with these colors instead
    #[arg(long, value_name = "COLORS", value_delimiter = ',')]
    items: Option<Vec<String>>,

    /// Override the idle auto-advance delay (e.g. "5s", "1500ms")
    #[arg(long, value_name = "DURATION", value_parser = humantime::parse_duration)]
    idle_delay: Option<Duration>,

    /// Draw per-carousel state under each card
    #[arg(long)]
    overlay: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("swipe_deck={level}").parse()?);
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

fn load_configuration(cli: &Cli) -> Result<Configuration> {
    let mut cfg = match &cli.config {
        Some(path) => config::from_yaml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Configuration::default(),
    };
    if let Some(items) = &cli.items {
        cfg.carousels = vec![CarouselEntry::new(items.iter().cloned())];
    }
    if let Some(delay) = cli.idle_delay {
        for entry in cfg.carousels.iter_mut() {
            entry.options.idle_delay = delay;
        }
    }
    cfg.validate().context("validating configuration")?;
    Ok(cfg)
}

fn build_carousels(cfg: &Configuration) -> Result<Vec<Carousel<Swatch>>> {
    let mut carousels = Vec::with_capacity(cfg.carousels.len());
    let mut y = HEADING_SIZE as f32 + 2.0 * CARD_GAP;
    for (i, entry) in cfg.carousels.iter().enumerate() {
        let swatches = entry
            .items
            .iter()
            .map(|item| palette::parse(item))
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("parsing colors of carousel {i}"))?;
        let mut carousel = Carousel::new(entry.options.clone(), swatches)
            .with_context(|| format!("creating carousel {i}"))?;
        let x = (cfg.window.width as f32 - entry.options.width) / 2.0;
        carousel.set_origin(x, y);
        carousel.mount();
        y += entry.options.height + CARD_GAP;
        carousels.push(carousel);
    }
    Ok(carousels)
}

fn pick_cursor(carousels: &[Carousel<Swatch>], mouse: Vector2) -> MouseCursor {
    if carousels
        .iter()
        .any(|c| c.card().cursor() == Cursor::Grabbing)
    {
        MouseCursor::MOUSE_CURSOR_RESIZE_EW
    } else if carousels.iter().any(|c| c.bounds().contains(mouse.x, mouse.y)) {
        MouseCursor::MOUSE_CURSOR_POINTING_HAND
    } else {
        MouseCursor::MOUSE_CURSOR_DEFAULT
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let cfg = load_configuration(&cli)?;
    info!(carousels = cfg.carousels.len(), "configuration loaded");

    let (mut rl, thread) = raylib::init()
        .size(cfg.window.width, cfg.window.height)
        .title(&cfg.window.title)
        .vsync()
        .build();
    rl.set_target_fps(cfg.window.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut carousels = build_carousels(&cfg)?;
    let mut pointer = PointerTracker::default();
    let mut toast: Option<Toast> = None;
    let mut cursor = MouseCursor::MOUSE_CURSOR_DEFAULT;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time(); // realtime, unlike the fixed-step recorder

        // 1. Route pointer input. Each carousel hit-tests its own card.
        for event in pointer.step(InputSample::capture(&rl)) {
            for carousel in carousels.iter_mut() {
                carousel.handle_pointer(&event);
            }
        }

        // 2. Advance timers and collect notifications
        for carousel in carousels.iter_mut() {
            carousel.update(dt).context("updating carousel")?;
            for event in carousel.drain_events() {
                match event {
                    CarouselEvent::Tapped(swatch) => {
                        info!(item = %swatch.name, "card clicked");
                        toast = Some(Toast::new(format!("CLICK: {}", swatch.name)));
                    }
                    CarouselEvent::Flipped { index, direction, trigger } => {
                        debug!(index, ?direction, ?trigger, "card flipped");
                    }
                    CarouselEvent::SnappedBack => {} // nothing to show, the card animates itself
                }
            }
        }
        // 3. Fade out the tap toast
        if let Some(t) = toast.as_mut() {
            if !t.update(dt) {
                toast = None;
            }
        }

        // 4. Cursor follows the card under (or held by) the pointer
        let wanted = pick_cursor(&carousels, rl.get_mouse_position());
        if wanted != cursor {
            rl.set_mouse_cursor(wanted);
            cursor = wanted;
        }

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);

        // Heading, then each carousel (next card below, active card on top)
        let sw = d.get_screen_width();
        let sh = d.get_screen_height();
        d.draw_text(&cfg.window.title, CARD_GAP as i32, CARD_GAP as i32, HEADING_SIZE, Color::DARKGRAY);

        for carousel in carousels.iter() {
            draw_carousel(&mut d, carousel, cli.overlay);
        }
        // Toast last so it stays above the cards
        if let Some(t) = toast.as_ref() {
            t.draw(&mut d, sw, sh);
        }
    }

    // Cancel pending idle timers before the window goes away
    for carousel in carousels.iter_mut() {
        carousel.teardown();
    }
    Ok(())
}
