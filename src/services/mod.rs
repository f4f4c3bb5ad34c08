//! Host services the watchface reads from

pub mod battery;

pub use battery::{BatteryInfo, BatteryService};

/// Activity bits reported by a health service
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActivityMask(u32);

impl ActivityMask {
    pub const NONE: Self = Self(0);
    pub const SLEEP: Self = Self(1 << 0);
    pub const RESTFUL_SLEEP: Self = Self(1 << 1);
    pub const WALK: Self = Self(1 << 2);
    pub const RUN: Self = Self(1 << 3);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    /// Sleep or restful sleep
    pub const fn is_sleeping(self) -> bool {
        self.contains(Self::SLEEP) || self.contains(Self::RESTFUL_SLEEP)
    }
}

impl core::ops::BitOr for ActivityMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Activity and step data
pub trait HealthService {
    /// Activities the wearer is engaged in right now
    fn current_activities(&self) -> ActivityMask;

    /// Steps since midnight, `None` if no data is available
    fn steps_today(&self) -> Option<u32>;

    /// Whether this device has a health service at all
    fn is_available(&self) -> bool {
        true
    }
}

impl<T: HealthService + ?Sized> HealthService for &T {
    fn current_activities(&self) -> ActivityMask {
        (**self).current_activities()
    }

    fn steps_today(&self) -> Option<u32> {
        (**self).steps_today()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

/// Health service for devices without one
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHealth;

impl HealthService for NullHealth {
    fn current_activities(&self) -> ActivityMask {
        ActivityMask::NONE
    }

    fn steps_today(&self) -> Option<u32> {
        None
    }

    fn is_available(&self) -> bool {
        false
    }
}
