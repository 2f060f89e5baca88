#![no_std]

pub mod brightness;
pub mod color;
pub mod config;
pub mod device;
pub mod error;
pub mod light_type;
pub mod lights;
pub mod state;

pub use brightness::scale_display_brightness;
pub use config::{DEFAULT_MAX_DISPLAY_BRIGHTNESS, LightsConfig};
pub use device::{LightDevice, LightDeviceMut, LightRegistry, SharedDevice};
pub use error::{ENOSYS, LightError, NOT_IMPLEMENTED, OpenError};
pub use light_type::{LIGHT_TYPE_COUNT, LOGICAL_LIGHTS, LightType};
pub use lights::{AvailableLights, Lights};
pub use state::{BrightnessMode, FlashMode, HwLight, HwLightState, LegacyLightState};

pub use color::{Argb, Rgb};
