mod tests {
    use myrtio_light_hal::{LOGICAL_LIGHTS, LightType};

    #[test]
    fn test_light_type_ids_are_stable() {
        assert_eq!(LightType::Backlight.id(), 0);
        assert_eq!(LightType::Keyboard.id(), 1);
        assert_eq!(LightType::Buttons.id(), 2);
        assert_eq!(LightType::Battery.id(), 3);
        assert_eq!(LightType::Notifications.id(), 4);
        assert_eq!(LightType::Attention.id(), 5);
        assert_eq!(LightType::Bluetooth.id(), 6);
        assert_eq!(LightType::Wifi.id(), 7);
    }

    #[test]
    fn test_light_type_from_raw() {
        assert_eq!(LightType::from_raw(0), Some(LightType::Backlight));
        assert_eq!(LightType::from_raw(7), Some(LightType::Wifi));
        assert_eq!(LightType::from_raw(8), None);
        assert_eq!(LightType::from_raw(-1), None);
    }

    #[test]
    fn test_light_type_names() {
        assert_eq!(LightType::Backlight.as_str(), "backlight");
        assert_eq!(LightType::Notifications.as_str(), "notifications");
        assert_eq!(
            LightType::parse_from_str("bluetooth"),
            Some(LightType::Bluetooth)
        );
        assert_eq!(LightType::parse_from_str("microphone"), None);
    }

    #[test]
    fn test_logical_lights_table() {
        for (index, (light_type, name)) in LOGICAL_LIGHTS.iter().enumerate() {
            assert_eq!(light_type.id(), index as i32);
            assert_eq!(light_type.as_str(), *name);
        }
    }
}
