/// Maximum native brightness of the stock panel.
pub const DEFAULT_MAX_DISPLAY_BRIGHTNESS: u16 = 3514;

/// Configuration for the light controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightsConfig {
    /// Native brightness range of the backlight driver, `0..=max`
    pub max_display_brightness: u16,
}

impl LightsConfig {
    pub const fn new() -> Self {
        Self {
            max_display_brightness: DEFAULT_MAX_DISPLAY_BRIGHTNESS,
        }
    }

    #[must_use]
    pub const fn with_max_display_brightness(mut self, max: u16) -> Self {
        self.max_display_brightness = max;
        self
    }
}

impl Default for LightsConfig {
    fn default() -> Self {
        Self::new()
    }
}
