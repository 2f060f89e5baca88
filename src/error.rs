use core::fmt;

/// `ENOSYS` errno value
pub const ENOSYS: i32 = 38;

/// Status a legacy driver returns for operations it does not implement
pub const NOT_IMPLEMENTED: i32 = -ENOSYS;

/// Failure of a light request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightError {
    /// Unknown light id, or the driver does not support the request
    UnsupportedOperation,
    /// Driver-specific status code, passed through as is
    ServiceSpecific(i32),
}

impl LightError {
    /// Map a driver return code to a result
    pub const fn from_status(status: i32) -> Result<(), Self> {
        match status {
            0 => Ok(()),
            NOT_IMPLEMENTED => Err(Self::UnsupportedOperation),
            code => Err(Self::ServiceSpecific(code)),
        }
    }
}

impl fmt::Display for LightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedOperation => f.write_str("unsupported operation"),
            Self::ServiceSpecific(code) => write!(f, "service specific error: {code}"),
        }
    }
}

impl core::error::Error for LightError {}

/// Failure to open a light device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenError {
    /// The lights hardware module could not be loaded
    ModuleNotFound(i32),
    /// The module is present but the named device failed to open
    OpenFailed(i32),
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModuleNotFound(code) => write!(f, "lights module not found: {code}"),
            Self::OpenFailed(code) => write!(f, "light device open failed: {code}"),
        }
    }
}

impl core::error::Error for OpenError {}
