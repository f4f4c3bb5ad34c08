//! Watchface state

use chrono::Timelike;

use crate::services::{BatteryInfo, HealthService};

/// Everything the watchface shows, refreshed by the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockState {
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
    /// Steps walked today
    pub steps: u32,
    /// 0-100
    pub battery_percent: u8,
    pub is_charging: bool,
    pub is_sleeping: bool,
    /// Whether the host exposes health data at all
    pub sleep_data_available: bool,
}

impl ClockState {
    /// Take over the wall-clock time.
    ///
    /// Returns `true` if the displayed hour or minute changed.
    pub fn set_time<T: Timelike>(&mut self, time: &T) -> bool {
        let hour = time.hour() as u8;
        let minute = time.minute() as u8;
        let changed = hour != self.hour || minute != self.minute;

        self.hour = hour;
        self.minute = minute;
        self.second = time.second() as u8;

        changed
    }

    /// Take over a battery reading
    pub fn set_battery(&mut self, info: BatteryInfo) {
        self.battery_percent = info.percent.min(100);
        self.is_charging = info.charging;
    }

    /// Query the health service; missing data reads as zero steps, awake.
    pub fn set_health<H: HealthService>(&mut self, health: &H) {
        self.sleep_data_available = health.is_available();
        if self.sleep_data_available {
            self.is_sleeping = health.current_activities().is_sleeping();
            self.steps = health.steps_today().unwrap_or(0);
        } else {
            self.is_sleeping = false;
            self.steps = 0;
        }
    }
}
