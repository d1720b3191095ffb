//! Color-stop providers. Each group yields the stop list for one wallpaper; palette choice is
//! driven by a seeded generator so a seed always reproduces the same wallpaper.

use crate::foundation::{
    core::Rgb8,
    error::{WallpaperError, WallpaperResult},
    rng::Rng64,
};

/// Names accepted by [`gradient_group`]; the first one is the default.
pub const GRADIENT_GROUPS: &[&str] = &["random", "base", "sky"];

/// Source of color stops for a wallpaper.
pub trait GradientGroup {
    /// Stable name used on the command line and in config files.
    fn name(&self) -> &'static str;

    /// Produce the next ordered stop list (always at least two stops).
    fn gradient_colors(&mut self) -> Vec<Rgb8>;
}

/// Look up a group by name.
pub fn gradient_group(name: &str, seed: u64) -> WallpaperResult<Box<dyn GradientGroup>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "random" => Ok(Box::new(RandomGradientGroup::new(seed))),
        "base" => Ok(Box::new(BaseGradientGroup::new(seed))),
        "sky" => Ok(Box::new(SkyGradientGroup::new(seed))),
        other => Err(WallpaperError::invalid_argument(format!(
            "unknown gradient group \"{other}\" (expected one of: {})",
            GRADIENT_GROUPS.join(", ")
        ))),
    }
}

/// Two to four uniformly random stops.
#[derive(Clone, Debug)]
pub struct RandomGradientGroup {
    rng: Rng64,
}

impl RandomGradientGroup {
    /// Seeded group.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng64::new(seed),
        }
    }
}

impl GradientGroup for RandomGradientGroup {
    fn name(&self) -> &'static str {
        "random"
    }

    fn gradient_colors(&mut self) -> Vec<Rgb8> {
        let count = self.rng.range_inclusive(2, 4);
        (0..count)
            .map(|_| Rgb8::new(self.rng.next_u8(), self.rng.next_u8(), self.rng.next_u8()))
            .collect()
    }
}

const fn hex(v: u32) -> Rgb8 {
    Rgb8::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

const BASE_PALETTES: &[&[Rgb8]] = &[
    &[hex(0x0F2027), hex(0x203A43), hex(0x2C5364)],
    &[hex(0xFF512F), hex(0xDD2476)],
    &[hex(0x11998E), hex(0x38EF7D)],
    &[hex(0x8E2DE2), hex(0x4A00E0)],
    &[hex(0xF7971E), hex(0xFFD200)],
    &[hex(0x000000), hex(0x434343)],
    &[hex(0xEE0979), hex(0xFF6A00)],
    &[hex(0x1D2B64), hex(0xF8CDDA)],
];

const SKY_PALETTES: &[&[Rgb8]] = &[
    // dawn
    &[hex(0x2C3E50), hex(0xFD746C), hex(0xFFD194)],
    // noon
    &[hex(0x2980B9), hex(0x6DD5FA), hex(0xFFFFFF)],
    // dusk
    &[hex(0x0B486B), hex(0xF56217)],
    // twilight
    &[hex(0x141E30), hex(0x243B55), hex(0x6A3093)],
    // night
    &[hex(0x000000), hex(0x0F2027), hex(0x1C1C3C)],
    // overcast
    &[hex(0x757F9A), hex(0xD7DDE8)],
];

fn pick(rng: &mut Rng64, palettes: &[&[Rgb8]]) -> Vec<Rgb8> {
    palettes[rng.index(palettes.len())].to_vec()
}

/// Hand-picked general purpose palettes.
#[derive(Clone, Debug)]
pub struct BaseGradientGroup {
    rng: Rng64,
}

impl BaseGradientGroup {
    /// Seeded group.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng64::new(seed),
        }
    }
}

impl GradientGroup for BaseGradientGroup {
    fn name(&self) -> &'static str {
        "base"
    }

    fn gradient_colors(&mut self) -> Vec<Rgb8> {
        pick(&mut self.rng, BASE_PALETTES)
    }
}

/// Palettes modelled on the sky at different times of day.
#[derive(Clone, Debug)]
pub struct SkyGradientGroup {
    rng: Rng64,
}

impl SkyGradientGroup {
    /// Seeded group.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng64::new(seed),
        }
    }
}

impl GradientGroup for SkyGradientGroup {
    fn name(&self) -> &'static str {
        "sky"
    }

    fn gradient_colors(&mut self) -> Vec<Rgb8> {
        pick(&mut self.rng, SKY_PALETTES)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/groups.rs"]
mod tests;
