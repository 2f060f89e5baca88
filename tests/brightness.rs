mod tests {
    use myrtio_light_hal::{
        Argb, DEFAULT_MAX_DISPLAY_BRIGHTNESS, LightsConfig, Rgb, scale_display_brightness,
    };

    #[test]
    fn test_scale_display_brightness() {
        assert_eq!(scale_display_brightness(0x00FF_FFFF, 3514), 3514);
        assert_eq!(scale_display_brightness(0xFFFF_FF00, 3514), 0);
        assert_eq!(scale_display_brightness(0x0000_0080, 3514), 1763);
        assert_eq!(scale_display_brightness(0x0000_0001, 3514), 13);
    }

    #[test]
    fn test_scale_display_brightness_full_range() {
        assert_eq!(scale_display_brightness(0xFF, u16::MAX), u32::from(u16::MAX));
        assert_eq!(scale_display_brightness(0xFF, 0), 0);
        assert_eq!(scale_display_brightness(0xFF, 255), 255);
    }

    #[test]
    fn test_default_config() {
        assert_eq!(DEFAULT_MAX_DISPLAY_BRIGHTNESS, 3514);
        assert_eq!(LightsConfig::default().max_display_brightness, 3514);
        assert_eq!(
            LightsConfig::new()
                .with_max_display_brightness(255)
                .max_display_brightness,
            255
        );
    }

    #[test]
    fn test_argb_channels() {
        let color = Argb::new(0x80FF_4020);
        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.rgb(), Rgb::new(0xFF, 0x40, 0x20));
        assert_eq!(color.brightness_level(), 0x20);
        assert_eq!(Argb::from(0xFF00_0000).rgb(), Rgb::new(0, 0, 0));
    }
}
