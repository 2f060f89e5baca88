//! Light controller
//!
//! Probes the fixed set of logical lights once and routes state requests to
//! the devices that opened.

use heapless::{LinearMap, Vec};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::brightness::scale_display_brightness;
use crate::config::LightsConfig;
use crate::device::{LightDevice, LightRegistry};
use crate::error::LightError;
use crate::light_type::{LIGHT_TYPE_COUNT, LOGICAL_LIGHTS, LightType};
use crate::state::{HwLight, HwLightState, LegacyLightState};

/// List of lights available to callers
pub type AvailableLights = Vec<HwLight, LIGHT_TYPE_COUNT>;

/// Light controller over legacy per-light devices
pub struct Lights<D: LightDevice> {
    devices: LinearMap<i32, D, LIGHT_TYPE_COUNT>,
    available: AvailableLights,
    /// Number of light types probed, opened or not
    max_lights: i32,
    config: LightsConfig,
}

impl<D: LightDevice> Lights<D> {
    /// Probe every logical light against the registry.
    ///
    /// Lights whose device fails to open are left out.
    pub fn new<R>(registry: &mut R, config: LightsConfig) -> Self
    where
        R: LightRegistry<Device = D>,
    {
        let mut devices = LinearMap::new();
        let mut available = Vec::new();
        let mut max_lights = 0;

        for (light_type, name) in LOGICAL_LIGHTS {
            let device = registry.open(name);
            max_lights += 1;
            match device {
                Ok(device) => {
                    let light = HwLight::new(light_type);
                    // Both collections hold one entry per light type at most
                    let _ = devices.insert(light.id, device);
                    let _ = available.push(light);
                }
                Err(_e) => {
                    #[cfg(feature = "esp32-log")]
                    println!("[Lights.new] failed to open {}: {}", name, _e);
                }
            }
        }

        Self {
            devices,
            available,
            max_lights,
            config,
        }
    }

    /// Probe with the default configuration
    pub fn with_defaults<R>(registry: &mut R) -> Self
    where
        R: LightRegistry<Device = D>,
    {
        Self::new(registry, LightsConfig::default())
    }

    /// Copy of the available lights, in discovery order
    pub fn get_lights(&self) -> AvailableLights {
        self.available.clone()
    }

    /// Available lights, in discovery order
    pub fn available_lights(&self) -> &[HwLight] {
        &self.available
    }

    pub const fn config(&self) -> &LightsConfig {
        &self.config
    }

    /// Device behind the light id, if it opened
    pub fn device(&self, id: i32) -> Option<&D> {
        self.devices.get(&id)
    }

    /// Apply the state to the light with the given id
    pub fn set_light_state(&self, id: i32, state: &HwLightState) -> Result<(), LightError> {
        if id >= self.max_lights {
            #[cfg(feature = "esp32-log")]
            println!("[Lights.set_light_state] invalid light id: {}", id);
            return Err(LightError::UnsupportedOperation);
        }
        let Some(device) = self.devices.get(&id) else {
            #[cfg(feature = "esp32-log")]
            println!("[Lights.set_light_state] light {} not supported", id);
            return Err(LightError::UnsupportedOperation);
        };

        let legacy_state = self.translate(id, state);
        let status = device.set_light(&legacy_state);
        if status != 0 {
            #[cfg(feature = "esp32-log")]
            println!("[Lights.set_light_state] light {} returned {}", id, status);
        }

        LightError::from_status(status)
    }

    /// Convert a request into the driver record for the light id
    pub fn translate(&self, id: i32, state: &HwLightState) -> LegacyLightState {
        let mut legacy_state = LegacyLightState::from(state);
        if id == LightType::Backlight.id() {
            legacy_state.color =
                scale_display_brightness(state.color, self.config.max_display_brightness);
        }
        legacy_state
    }
}
