//! Mapping of bounded quantities onto arc sweeps

use embedded_graphics::geometry::{Angle, AngleUnit};

/// One full turn in [`Sweep`] units
pub const MAX_ANGLE: u32 = 0x1_0000;

/// Angular extent of an arc, `MAX_ANGLE` being a full circle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sweep(u32);

impl Sweep {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(MAX_ANGLE);

    /// Sweep of `value` out of `range`, clamped to one full turn
    pub fn fraction(value: u32, range: u32) -> Self {
        let range = range.max(1) as u64;
        let value = (value as u64).min(range);
        Self((value * MAX_ANGLE as u64 / range) as u32)
    }

    pub const fn from_turn_units(units: u32) -> Self {
        Self(units)
    }

    pub const fn turn_units(self) -> u32 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Extent actually drawn: an empty sweep becomes a full circle so that a
    /// ring at its start still shows.
    pub fn drawn(self) -> Self {
        if self.is_zero() {
            Self::FULL
        } else {
            self.min(Self::FULL)
        }
    }

    /// Angle for `embedded-graphics`
    pub fn to_angle(self) -> Angle {
        (self.0 as f32 * 360.0 / MAX_ANGLE as f32).deg()
    }
}

/// Outer ring: progress towards the daily step goal
pub fn steps_sweep(steps: u32, goal: u32) -> Sweep {
    Sweep::fraction(steps, goal)
}

pub fn minutes_sweep(minute: u8) -> Sweep {
    Sweep::fraction((minute % 60) as u32, 60)
}

/// Hours on a 12 hour dial
pub fn hours_sweep(hour: u8) -> Sweep {
    Sweep::fraction((hour % 12) as u32, 12)
}

pub fn battery_sweep(percent: u8) -> Sweep {
    Sweep::fraction(percent as u32, 100)
}
