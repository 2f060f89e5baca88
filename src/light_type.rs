//! Logical light categories and the driver names they resolve to.
//!
//! The numeric values are the externally visible light ids, so they must stay
//! stable across releases.

const LIGHT_NAME_BACKLIGHT: &str = "backlight";
const LIGHT_NAME_KEYBOARD: &str = "keyboard";
const LIGHT_NAME_BUTTONS: &str = "buttons";
const LIGHT_NAME_BATTERY: &str = "battery";
const LIGHT_NAME_NOTIFICATIONS: &str = "notifications";
const LIGHT_NAME_ATTENTION: &str = "attention";
const LIGHT_NAME_BLUETOOTH: &str = "bluetooth";
const LIGHT_NAME_WIFI: &str = "wifi";

const LIGHT_ID_BACKLIGHT: i32 = 0;
const LIGHT_ID_KEYBOARD: i32 = 1;
const LIGHT_ID_BUTTONS: i32 = 2;
const LIGHT_ID_BATTERY: i32 = 3;
const LIGHT_ID_NOTIFICATIONS: i32 = 4;
const LIGHT_ID_ATTENTION: i32 = 5;
const LIGHT_ID_BLUETOOTH: i32 = 6;
const LIGHT_ID_WIFI: i32 = 7;

/// Number of logical light categories
pub const LIGHT_TYPE_COUNT: usize = 8;

/// Logical light categories a caller can address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum LightType {
    Backlight = LIGHT_ID_BACKLIGHT,
    Keyboard = LIGHT_ID_KEYBOARD,
    Buttons = LIGHT_ID_BUTTONS,
    Battery = LIGHT_ID_BATTERY,
    Notifications = LIGHT_ID_NOTIFICATIONS,
    Attention = LIGHT_ID_ATTENTION,
    Bluetooth = LIGHT_ID_BLUETOOTH,
    Wifi = LIGHT_ID_WIFI,
}

/// Logical lights probed at startup, in discovery order.
pub const LOGICAL_LIGHTS: [(LightType, &str); LIGHT_TYPE_COUNT] = [
    (LightType::Backlight, LIGHT_NAME_BACKLIGHT),
    (LightType::Keyboard, LIGHT_NAME_KEYBOARD),
    (LightType::Buttons, LIGHT_NAME_BUTTONS),
    (LightType::Battery, LIGHT_NAME_BATTERY),
    (LightType::Notifications, LIGHT_NAME_NOTIFICATIONS),
    (LightType::Attention, LIGHT_NAME_ATTENTION),
    (LightType::Bluetooth, LIGHT_NAME_BLUETOOTH),
    (LightType::Wifi, LIGHT_NAME_WIFI),
];

impl LightType {
    pub const fn from_raw(value: i32) -> Option<Self> {
        Some(match value {
            LIGHT_ID_BACKLIGHT => Self::Backlight,
            LIGHT_ID_KEYBOARD => Self::Keyboard,
            LIGHT_ID_BUTTONS => Self::Buttons,
            LIGHT_ID_BATTERY => Self::Battery,
            LIGHT_ID_NOTIFICATIONS => Self::Notifications,
            LIGHT_ID_ATTENTION => Self::Attention,
            LIGHT_ID_BLUETOOTH => Self::Bluetooth,
            LIGHT_ID_WIFI => Self::Wifi,
            _ => return None,
        })
    }

    /// Externally visible light id
    pub const fn id(self) -> i32 {
        self as i32
    }

    /// Driver name used to open the device
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlight => LIGHT_NAME_BACKLIGHT,
            Self::Keyboard => LIGHT_NAME_KEYBOARD,
            Self::Buttons => LIGHT_NAME_BUTTONS,
            Self::Battery => LIGHT_NAME_BATTERY,
            Self::Notifications => LIGHT_NAME_NOTIFICATIONS,
            Self::Attention => LIGHT_NAME_ATTENTION,
            Self::Bluetooth => LIGHT_NAME_BLUETOOTH,
            Self::Wifi => LIGHT_NAME_WIFI,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            LIGHT_NAME_BACKLIGHT => Some(Self::Backlight),
            LIGHT_NAME_KEYBOARD => Some(Self::Keyboard),
            LIGHT_NAME_BUTTONS => Some(Self::Buttons),
            LIGHT_NAME_BATTERY => Some(Self::Battery),
            LIGHT_NAME_NOTIFICATIONS => Some(Self::Notifications),
            LIGHT_NAME_ATTENTION => Some(Self::Attention),
            LIGHT_NAME_BLUETOOTH => Some(Self::Bluetooth),
            LIGHT_NAME_WIFI => Some(Self::Wifi),
            _ => None,
        }
    }
}
