//! Legacy light device seams.
//!
//! A [`LightRegistry`] resolves driver names to devices. Devices are only
//! ever called through a shared reference; drivers that need exclusive access
//! can be wrapped into a [`SharedDevice`].

use core::cell::RefCell;

use critical_section::Mutex;

use crate::error::OpenError;
use crate::state::LegacyLightState;

/// A light device that can be driven through a shared reference.
///
/// Implementations must tolerate calls from several threads.
pub trait LightDevice {
    /// Apply the state, returning the driver status (0 on success)
    fn set_light(&self, state: &LegacyLightState) -> i32;
}

/// A light driver that needs exclusive access to apply a state
pub trait LightDeviceMut {
    /// Apply the state, returning the driver status (0 on success)
    fn set_light(&mut self, state: &LegacyLightState) -> i32;
}

/// Lookup of light devices by driver name
pub trait LightRegistry {
    type Device: LightDevice;

    /// Open the device registered under `name`
    fn open(&mut self, name: &str) -> Result<Self::Device, OpenError>;
}

/// Serializes access to a [`LightDeviceMut`] driver.
///
/// Calls are made inside a critical section, so the driver is never entered
/// twice at the same time.
pub struct SharedDevice<T> {
    inner: Mutex<RefCell<T>>,
}

impl<T> SharedDevice<T> {
    pub const fn new(driver: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(driver)),
        }
    }

    /// Run `f` with exclusive access to the wrapped driver
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        critical_section::with(|cs| {
            let mut driver = self.inner.borrow(cs).borrow_mut();
            f(&mut driver)
        })
    }

    pub fn into_inner(self) -> T {
        self.inner.into_inner().into_inner()
    }
}

impl<T: LightDeviceMut> LightDevice for SharedDevice<T> {
    fn set_light(&self, state: &LegacyLightState) -> i32 {
        self.with(|driver| driver.set_light(state))
    }
}

impl<D: LightDevice + ?Sized> LightDevice for &D {
    fn set_light(&self, state: &LegacyLightState) -> i32 {
        (**self).set_light(state)
    }
}
