//! Named colors accepted as directives.
//!
//! The values are tuned for the strip rather than taken from CSS, so `aqua` and `purple`
//! are much dimmer than their web namesakes.

use smart_leds::RGB8;

/// Every named color, in the order `help` lists them.
pub const NAMED_COLORS: [(&str, RGB8); 13] = [
    ("red", RGB8::new(255, 0, 0)),
    ("coral", RGB8::new(255, 8, 0)),
    ("orange", RGB8::new(255, 20, 0)),
    ("gold", RGB8::new(255, 60, 0)),
    ("yellow", RGB8::new(255, 88, 0)),
    ("lime", RGB8::new(160, 255, 0)),
    ("green", RGB8::new(0, 255, 0)),
    ("aqua", RGB8::new(0, 80, 24)),
    ("blue", RGB8::new(0, 0, 255)),
    ("purple", RGB8::new(72, 0, 120)),
    ("pink", RGB8::new(220, 0, 40)),
    ("white", RGB8::new(255, 255, 255)),
    ("black", RGB8::new(0, 0, 0)),
];

/// Look up a color by its exact, lower-case name.
///
/// ```
/// use blinkt::colors::named_color;
/// use smart_leds::RGB8;
///
/// assert_eq!(named_color("coral"), Some(RGB8::new(255, 8, 0)));
/// assert_eq!(named_color("Coral"), None);
/// ```
#[must_use]
pub fn named_color(name: &str) -> Option<RGB8> {
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, color)| *color)
}
