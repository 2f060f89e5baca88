//! Display brightness scaling.

use crate::color::Argb;

/// Scale the 8-bit backlight level of a packed color into `0..=max`.
///
/// Only the low byte of `color` is used. Integer division, rounding down.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale_display_brightness(color: u32, max: u16) -> u32 {
    let level = Argb::new(color).brightness_level() as u32;
    level * max as u32 / 0xFF
}
