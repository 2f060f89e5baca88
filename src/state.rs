//! Light state as requested by callers and as consumed by legacy drivers.

use crate::color::Argb;
use crate::light_type::LightType;

const FLASH_MODE_NONE: i32 = 0;
const FLASH_MODE_TIMED: i32 = 1;
const FLASH_MODE_HARDWARE: i32 = 2;

const BRIGHTNESS_MODE_USER: i32 = 0;
const BRIGHTNESS_MODE_SENSOR: i32 = 1;
const BRIGHTNESS_MODE_LOW_PERSISTENCE: i32 = 2;

/// How the light should flash
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(i32)]
pub enum FlashMode {
    /// Steady light
    #[default]
    None = FLASH_MODE_NONE,
    /// Software timed flashing using `flash_on_ms`/`flash_off_ms`
    Timed = FLASH_MODE_TIMED,
    /// Flashing driven by the hardware itself
    Hardware = FLASH_MODE_HARDWARE,
}

impl FlashMode {
    pub const fn from_raw(value: i32) -> Option<Self> {
        Some(match value {
            FLASH_MODE_NONE => Self::None,
            FLASH_MODE_TIMED => Self::Timed,
            FLASH_MODE_HARDWARE => Self::Hardware,
            _ => return None,
        })
    }
}

/// Who controls the brightness
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(i32)]
pub enum BrightnessMode {
    /// Brightness set by the user
    #[default]
    User = BRIGHTNESS_MODE_USER,
    /// Brightness managed by the light sensor
    Sensor = BRIGHTNESS_MODE_SENSOR,
    /// Low persistence mode for VR displays
    LowPersistence = BRIGHTNESS_MODE_LOW_PERSISTENCE,
}

impl BrightnessMode {
    pub const fn from_raw(value: i32) -> Option<Self> {
        Some(match value {
            BRIGHTNESS_MODE_USER => Self::User,
            BRIGHTNESS_MODE_SENSOR => Self::Sensor,
            BRIGHTNESS_MODE_LOW_PERSISTENCE => Self::LowPersistence,
            _ => return None,
        })
    }
}

/// Requested state of a light
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HwLightState {
    /// Packed 0xAARRGGBB color, alpha is the brightness
    pub color: u32,
    pub flash_mode: FlashMode,
    pub flash_on_ms: i32,
    pub flash_off_ms: i32,
    pub brightness_mode: BrightnessMode,
}

impl HwLightState {
    /// Steady light of the given color
    pub const fn solid(color: u32) -> Self {
        Self {
            color,
            flash_mode: FlashMode::None,
            flash_on_ms: 0,
            flash_off_ms: 0,
            brightness_mode: BrightnessMode::User,
        }
    }

    /// Decoded color channels
    pub const fn argb(&self) -> Argb {
        Argb::new(self.color)
    }
}

/// Flat state record handed to a legacy driver.
///
/// Layout follows the driver's C struct, field for field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(C)]
pub struct LegacyLightState {
    pub color: u32,
    pub flash_mode: i32,
    pub flash_on_ms: i32,
    pub flash_off_ms: i32,
    pub brightness_mode: i32,
}

impl From<&HwLightState> for LegacyLightState {
    fn from(state: &HwLightState) -> Self {
        Self {
            color: state.color,
            flash_mode: state.flash_mode as i32,
            flash_on_ms: state.flash_on_ms,
            flash_off_ms: state.flash_off_ms,
            brightness_mode: state.brightness_mode as i32,
        }
    }
}

/// A light exposed to callers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HwLight {
    pub id: i32,
    pub light_type: LightType,
    /// Instance index among lights of the same type, always 0
    pub ordinal: i32,
}

impl HwLight {
    pub(crate) const fn new(light_type: LightType) -> Self {
        Self {
            id: light_type.id(),
            light_type,
            ordinal: 0,
        }
    }
}
