//! In-memory model of the strip: eight pixels plus the global display flags.
//!
//! See [`Strip`] for the whole model and [`Pixels`] for the fixed-size pixel frame.

use core::ops::{Deref, DerefMut};

use smart_leds::RGB8;

use crate::mask;

/// Number of LEDs on the strip.
pub const PIXEL_COUNT: usize = 8;

/// Brightness given to every pixel by [`Strip::clear_pixels`].
pub const DEFAULT_BRIGHTNESS: u8 = 7;

/// Largest brightness the 5-bit control field can hold.
pub const MAX_BRIGHTNESS: u8 = 0b1_1111;

/// One LED: a 5-bit brightness and an RGB color.
///
/// Only the low 5 bits of `brightness` reach the strip.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pixel {
    /// Global brightness, 0 to 31.
    pub brightness: u8,
    /// Color channels, no gamma applied.
    pub color: RGB8,
}

impl Pixel {
    /// Brightness 7, black.
    pub const DEFAULT: Self = Self::new(DEFAULT_BRIGHTNESS, RGB8::new(0, 0, 0));

    /// Create a pixel.
    #[must_use]
    pub const fn new(brightness: u8, color: RGB8) -> Self {
        Self { brightness, color }
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Global display settings shared by all pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Flags {
    /// Logical pixel 0 is physical pixel 0 when true, physical pixel 7 when false.
    pub left_to_right: bool,
    /// Master on/off.
    pub leds_on: bool,
    /// Model changes are saved but not shown.
    pub holding: bool,
    /// Show `binary_mask` as an on/off overlay.
    pub binary_on: bool,
    /// Bit `k` lights physical pixel `k` while `binary_on` is set.
    pub binary_mask: u8,
}

impl Flags {
    /// Left to right, on, not holding, binary off with every bit set.
    pub const DEFAULT: Self = Self {
        left_to_right: true,
        leds_on: true,
        holding: false,
        binary_on: false,
        binary_mask: mask::ALL_PIXELS,
    };
}

impl Default for Flags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Pixel data for the strip in physical order.
///
/// Derefs to `[Pixel; PIXEL_COUNT]`, so pixels can be indexed, iterated, and rotated directly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pixels(pub [Pixel; PIXEL_COUNT]);

impl Pixels {
    /// Number of pixels.
    pub const LEN: usize = PIXEL_COUNT;

    /// Every pixel at its default.
    #[must_use]
    pub const fn new() -> Self {
        Self([Pixel::DEFAULT; PIXEL_COUNT])
    }

    /// Iterate mutably over the pixels whose bit is set in a physical-order `selection`.
    pub fn selected_mut(&mut self, selection: u8) -> impl Iterator<Item = &mut Pixel> {
        self.0
            .iter_mut()
            .enumerate()
            .filter(move |(index, _)| mask::is_set(selection, *index))
            .map(|(_, pixel)| pixel)
    }
}

impl Deref for Pixels {
    type Target = [Pixel; PIXEL_COUNT];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Pixels {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<[Pixel; PIXEL_COUNT]> for Pixels {
    fn from(array: [Pixel; PIXEL_COUNT]) -> Self {
        Self(array)
    }
}

impl From<Pixels> for [Pixel; PIXEL_COUNT] {
    fn from(pixels: Pixels) -> Self {
        pixels.0
    }
}

impl Default for Pixels {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the strip remembers between invocations.
///
/// ```
/// use blinkt::strip::{DEFAULT_BRIGHTNESS, Strip};
///
/// let mut strip = Strip::new();
/// strip.flags.left_to_right = false;
/// strip.pixels[3].brightness = 31;
///
/// strip.clear_pixels();
/// assert_eq!(strip.pixels[3].brightness, DEFAULT_BRIGHTNESS);
/// assert!(!strip.flags.left_to_right);
///
/// strip.init_defaults();
/// assert!(strip.flags.left_to_right);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Strip {
    /// Global display settings.
    pub flags: Flags,
    /// Per-pixel settings in physical order.
    pub pixels: Pixels,
}

impl Strip {
    /// A strip with default flags and pixels.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            flags: Flags::DEFAULT,
            pixels: Pixels::new(),
        }
    }

    /// Reset both the flags and the pixels.
    pub fn init_defaults(&mut self) {
        self.flags = Flags::DEFAULT;
        self.clear_pixels();
    }

    /// Reset the pixels, leaving the flags alone.
    pub fn clear_pixels(&mut self) {
        self.pixels = Pixels::new();
    }
}
