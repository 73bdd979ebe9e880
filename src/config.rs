use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::constants::*;
use crate::error::{CarouselError, Result};

/// Per-carousel geometry and timing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CarouselConfig {
    #[serde(default = "CarouselConfig::default_width")]
    pub width: f32,
    #[serde(default = "CarouselConfig::default_height")]
    pub height: f32,
    #[serde(default)]
    pub initial_index: usize,
    #[serde(default = "CarouselConfig::default_idle_delay", with = "humantime_serde")]
    pub idle_delay: Duration,
    #[serde(default = "CarouselConfig::default_flip_duration", with = "humantime_serde")]
    pub flip_duration: Duration,
    #[serde(
        default = "CarouselConfig::default_snap_back_duration",
        with = "humantime_serde"
    )]
    pub snap_back_duration: Duration,
    /// px/ms; `null` turns fling detection off.
    #[serde(default = "CarouselConfig::default_fling_speed")]
    pub fling_speed: Option<f32>,
}

impl CarouselConfig {
    fn default_width() -> f32 {
        CARD_WIDTH
    }

    fn default_height() -> f32 {
        CARD_HEIGHT
    }

    fn default_idle_delay() -> Duration {
        IDLE_DELAY
    }

    fn default_flip_duration() -> Duration {
        FLIP_DURATION
    }

    fn default_snap_back_duration() -> Duration {
        SNAP_BACK_DURATION
    }

    fn default_fling_speed() -> Option<f32> {
        Some(FLING_SPEED)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(CarouselError::InvalidConfig(format!(
                "card size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.idle_delay.is_zero() {
            return Err(CarouselError::InvalidConfig(
                "idle-delay must be greater than zero".into(),
            ));
        }
        if let Some(speed) = self.fling_speed {
            if !(speed > 0.0) {
                return Err(CarouselError::InvalidConfig(format!(
                    "fling-speed must be positive, got {speed}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
            initial_index: 0,
            idle_delay: Self::default_idle_delay(),
            flip_duration: Self::default_flip_duration(),
            snap_back_duration: Self::default_snap_back_duration(),
            fling_speed: Self::default_fling_speed(),
        }
    }
}

/// One carousel on the page: its colors and options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CarouselEntry {
    pub items: Vec<String>,
    #[serde(flatten)]
    pub options: CarouselConfig,
}

impl CarouselEntry {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            options: CarouselConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WindowOptions {
    #[serde(default = "WindowOptions::default_width")]
    pub width: i32,
    #[serde(default = "WindowOptions::default_height")]
    pub height: i32,
    #[serde(default = "WindowOptions::default_title")]
    pub title: String,
    #[serde(default = "WindowOptions::default_fps")]
    pub fps: u32,
}

impl WindowOptions {
    fn default_width() -> i32 {
        800
    }

    fn default_height() -> i32 {
        600
    }

    fn default_title() -> String {
        "Swipable Cards".to_string()
    }

    fn default_fps() -> u32 {
        60
    }
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
            title: Self::default_title(),
            fps: Self::default_fps(),
        }
    }
}

/// Top-level configuration of the demo window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    #[serde(default)]
    pub window: WindowOptions,
    #[serde(default = "Configuration::default_carousels")]
    pub carousels: Vec<CarouselEntry>,
}

impl Configuration {
    fn default_carousels() -> Vec<CarouselEntry> {
        vec![
            CarouselEntry::new(["red", "orange", "green", "blue"]),
            CarouselEntry::new(["purple", "indigo"]),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(CarouselError::InvalidConfig(
                "window size must be positive".into(),
            ));
        }
        if self.window.fps == 0 {
            return Err(CarouselError::InvalidConfig("fps must be positive".into()));
        }
        if self.carousels.is_empty() {
            return Err(CarouselError::InvalidConfig(
                "at least one carousel is required".into(),
            ));
        }
        for (i, entry) in self.carousels.iter().enumerate() {
            if entry.items.is_empty() {
                return Err(CarouselError::InvalidConfig(format!(
                    "carousel {i} has no items"
                )));
            }
            entry.options.validate()?;
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            window: WindowOptions::default(),
            carousels: Self::default_carousels(),
        }
    }
}

pub fn from_yaml_str(yaml: &str) -> Result<Configuration> {
    Ok(serde_yaml::from_str(yaml)?)
}

pub fn from_yaml_file(path: &Path) -> Result<Configuration> {
    let text = fs::read_to_string(path)?;
    from_yaml_str(&text)
}
