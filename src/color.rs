//! Driver-depth color and the spectrum color wheel.
//!
//! Colors here are 12 bits per component, matching the grayscale depth of
//! the driver chips. The spectrum wheel maps a single integer position to a
//! fully saturated color, which keeps animation state down to one number per
//! voxel.

use smart_leds::RGB8;

/// Positions on the spectrum wheel, including the off position.
pub const SPECTRUM_COLORS: u16 = 12288;

/// Steps per wheel segment (red to green, green to blue, blue to red).
const SEGMENT: u16 = 4096;

/// One color at the driver's 12-bit component depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GsRgb {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl GsRgb {
    /// All components dark.
    pub const OFF: Self = Self { r: 0, g: 0, b: 0 };

    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }
}

impl From<RGB8> for GsRgb {
    /// Widen 8-bit components to 12 bits by bit replication, so full scale
    /// stays full scale (255 maps to 4095, not 4080).
    fn from(color: RGB8) -> Self {
        Self {
            r: widen(color.r),
            g: widen(color.g),
            b: widen(color.b),
        }
    }
}

#[allow(clippy::cast_lossless)]
const fn widen(value: u8) -> u16 {
    ((value as u16) << 4) | ((value as u16) >> 4)
}

/// Decode a wheel position into its color.
///
/// The wheel runs through three 4096-step segments: red fading into green,
/// green into blue, blue back into red. Position 0 is off, as is anything
/// past the end of the wheel.
pub const fn spectrum_rgb(spectrum: u16) -> GsRgb {
    if spectrum == 0 || spectrum >= SPECTRUM_COLORS {
        return GsRgb::OFF;
    }
    let step = spectrum % SEGMENT;
    match spectrum / SEGMENT {
        0 => GsRgb::new(SEGMENT - 1 - step, step, 0),
        1 => GsRgb::new(0, SEGMENT - 1 - step, step),
        _ => GsRgb::new(step, 0, SEGMENT - 1 - step),
    }
}

/// Red component of a wheel position.
pub const fn spectrum_red(spectrum: u16) -> u16 {
    spectrum_rgb(spectrum).r
}

/// Green component of a wheel position.
pub const fn spectrum_green(spectrum: u16) -> u16 {
    spectrum_rgb(spectrum).g
}

/// Blue component of a wheel position.
pub const fn spectrum_blue(spectrum: u16) -> u16 {
    spectrum_rgb(spectrum).b
}

/// Find the wheel position of a color, the inverse of [`spectrum_rgb`].
///
/// Lossy: any color with equal components, black and white included,
/// collapses to 0. Colors that never appear on the wheel land in the
/// segment whose zero component they share.
pub const fn spectrum_from_rgb(r: u16, g: u16, b: u16) -> u16 {
    if r == g && g == b {
        0
    } else if b == 0 && r != 0 {
        g
    } else if r == 0 && g != 0 {
        SEGMENT + b
    } else {
        2 * SEGMENT + r
    }
}

/// Stateful cursor walking the spectrum wheel.
///
/// Wraps past the end of the wheel and skips the off position, so a
/// continuously advancing cursor never blanks the display.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpectrumCycler {
    position: u16,
}

impl SpectrumCycler {
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    /// Start the cursor at a fixed wheel position.
    pub const fn starting_at(position: u16) -> Self {
        Self {
            position: position % SPECTRUM_COLORS,
        }
    }

    /// Current wheel position.
    pub const fn position(&self) -> u16 {
        self.position
    }

    /// Advance the cursor, returning the new position.
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&mut self, amount: u16) -> u16 {
        let mut next = (u32::from(self.position) + u32::from(amount)) % u32::from(SPECTRUM_COLORS);
        if next == 0 {
            next = 1;
        }
        self.position = next as u16;
        self.position
    }
}
