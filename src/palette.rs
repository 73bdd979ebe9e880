use anyhow::{Context, Result, bail};
use raylib::prelude::*;

/// A carousel item: the text shown on the card and its background.
#[derive(Debug, Clone)]
pub struct Swatch {
    pub name: String,
    pub color: Color,
}

impl Swatch {
    /// Dark text on light backgrounds, white otherwise.
    pub fn label_color(&self) -> Color {
        let c = self.color;
        let luma = 0.299 * c.r as f32 + 0.587 * c.g as f32 + 0.114 * c.b as f32;
        if luma > 150.0 { Color::BLACK } else { Color::WHITE }
    }
}

const NAMED: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("gray", (128, 128, 128)),
    ("red", (255, 0, 0)),
    ("orange", (255, 165, 0)),
    ("yellow", (255, 255, 0)),
    ("gold", (255, 215, 0)),
    ("green", (0, 128, 0)),
    ("lime", (0, 255, 0)),
    ("teal", (0, 128, 128)),
    ("cyan", (0, 255, 255)),
    ("blue", (0, 0, 255)),
    ("navy", (0, 0, 128)),
    ("indigo", (75, 0, 130)),
    ("purple", (128, 0, 128)),
    ("violet", (238, 130, 238)),
    ("magenta", (255, 0, 255)),
    ("pink", (255, 192, 203)),
    ("brown", (165, 42, 42)),
];

/// Parse a color name or `#rrggbb`.
pub fn parse(text: &str) -> Result<Swatch> {
    let name = text.trim();
    let lower = name.to_lowercase();
    let color = if let Some(hex) = lower.strip_prefix('#') {
        if hex.len() != 6 {
            bail!("expected #rrggbb, got {name:?}");
        }
        Color::from_hex(hex).with_context(|| format!("bad hex color {name:?}"))?
    } else {
        match NAMED.iter().find(|(n, _)| *n == lower) {
            Some((_, (r, g, b))) => Color::new(*r, *g, *b, 255),
            None => bail!("unknown color {name:?}"),
        }
    };
    Ok(Swatch {
        name: name.to_string(),
        color,
    })
}
