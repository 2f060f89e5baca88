use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Packed 0xAARRGGBB light color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Argb(pub u32);

impl Argb {
    pub const fn new(color: u32) -> Self {
        Self(color)
    }

    /// Alpha channel, used as brightness by LED drivers
    #[allow(clippy::cast_possible_truncation)]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Color channels without alpha
    #[allow(clippy::cast_possible_truncation)]
    pub const fn rgb(self) -> Rgb {
        Rgb {
            r: ((self.0 >> 16) & 0xFF) as u8,
            g: ((self.0 >> 8) & 0xFF) as u8,
            b: (self.0 & 0xFF) as u8,
        }
    }

    /// Raw backlight level carried in the low byte
    #[allow(clippy::cast_possible_truncation)]
    pub const fn brightness_level(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl From<u32> for Argb {
    fn from(color: u32) -> Self {
        Self(color)
    }
}
