//! 8-bit RGB/CMY colour mixing.
//!
//! Additive mixing works in RGB with per-channel saturation; subtractive
//! mixing converts both colours to CMY, subtracts there, and converts back.

use log::trace;

/// An 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An 8-bit CMY colour, the channel-wise complement of [`Rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmy {
    pub c: u8,
    pub m: u8,
    pub y: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn to_cmy(self) -> Cmy {
        Cmy {
            c: 255 - self.r,
            m: 255 - self.g,
            y: 255 - self.b,
        }
    }

    /// Additive mix, saturating each channel at 255.
    pub fn add(self, other: Rgb) -> Rgb {
        Rgb::new(
            self.r.saturating_add(other.r),
            self.g.saturating_add(other.g),
            self.b.saturating_add(other.b),
        )
    }

    /// Subtractive mix: `cmy(self) - cmy(other)` saturating at 0, back to RGB.
    pub fn subtract(self, other: Rgb) -> Rgb {
        let (a, b) = (self.to_cmy(), other.to_cmy());
        Cmy {
            c: a.c.saturating_sub(b.c),
            m: a.m.saturating_sub(b.m),
            y: a.y.saturating_sub(b.y),
        }
        .to_rgb()
    }

    /// Linear blend `self·(1−α) + other·α`, truncated per channel.
    ///
    /// `alpha` is clamped to `[0, 1]`.
    pub fn blend(self, other: Rgb, alpha: f64) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) * (1.0 - alpha) + f64::from(b) * alpha) as u8;
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

impl Cmy {
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        Rgb::new(255 - self.c, 255 - self.m, 255 - self.y)
    }
}

/// How a newly applied colour combines with the previous result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlendMode {
    #[default]
    Add,
    Subtract,
    Replace,
}

impl BlendMode {
    pub fn apply(self, previous: Rgb, current: Rgb) -> Rgb {
        match self {
            BlendMode::Add => previous.add(current),
            BlendMode::Subtract => previous.subtract(current),
            BlendMode::Replace => current,
        }
    }
}

/// Running colour accumulator: each application mixes into the last result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMixer {
    previous: Rgb,
    result: Rgb,
}

impl ColorMixer {
    pub fn new(initial: Rgb) -> Self {
        Self {
            previous: initial,
            result: initial,
        }
    }

    #[inline]
    pub fn result(&self) -> Rgb {
        self.result
    }

    #[inline]
    pub fn previous(&self) -> Rgb {
        self.previous
    }

    /// Combines `current` into the running result with `mode`.
    pub fn apply(&mut self, mode: BlendMode, current: Rgb) -> Rgb {
        self.previous = self.result;
        self.result = mode.apply(self.previous, current);
        trace!("{:?}: {:?} + {:?} -> {:?}", mode, self.previous, current, self.result);
        self.result
    }
}
