mod tests {
    use myrtio_light_hal::{BrightnessMode, FlashMode, HwLightState, LegacyLightState};

    #[test]
    fn test_modes_from_raw() {
        assert_eq!(FlashMode::from_raw(0), Some(FlashMode::None));
        assert_eq!(FlashMode::from_raw(1), Some(FlashMode::Timed));
        assert_eq!(FlashMode::from_raw(2), Some(FlashMode::Hardware));
        assert_eq!(FlashMode::from_raw(3), None);
        assert_eq!(BrightnessMode::from_raw(1), Some(BrightnessMode::Sensor));
        assert_eq!(
            BrightnessMode::from_raw(2),
            Some(BrightnessMode::LowPersistence)
        );
        assert_eq!(BrightnessMode::from_raw(-1), None);
    }

    #[test]
    fn test_legacy_state_from_request() {
        let state = HwLightState {
            color: 0xFF12_3456,
            flash_mode: FlashMode::Hardware,
            flash_on_ms: 250,
            flash_off_ms: 750,
            brightness_mode: BrightnessMode::Sensor,
        };
        assert_eq!(
            LegacyLightState::from(&state),
            LegacyLightState {
                color: 0xFF12_3456,
                flash_mode: 2,
                flash_on_ms: 250,
                flash_off_ms: 750,
                brightness_mode: 1,
            }
        );
    }

    #[test]
    fn test_solid_state() {
        let state = HwLightState::solid(0xFF00_FF00);
        assert_eq!(state.flash_mode, FlashMode::None);
        assert_eq!(state.brightness_mode, BrightnessMode::User);
        assert_eq!(state.argb().alpha(), 0xFF);
        assert_eq!(state, HwLightState { color: 0xFF00_FF00, ..HwLightState::default() });
    }
}
