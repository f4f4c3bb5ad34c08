//! Battery status check

use concentricity::services::battery::{millivolts_from_adc, percent_from_millivolts};
use concentricity::BatteryInfo;
use embassy_nrf::{gpio::Input, peripherals::P0_12, saadc::Saadc};

pub struct BatteryStatus<'a> {
    /// SAADC channel on P0.31 measuring half the battery voltage
    saadc: Saadc<'a, 1>,
    /// Pin P0.12: high = battery, low = charging
    pin_charge_indication: Input<'a, P0_12>,
    /// Last reading
    info: BatteryInfo,
}

impl<'a> BatteryStatus<'a> {
    /// Take a first reading on boot
    pub async fn init(pin_charge_indication: Input<'a, P0_12>, saadc: Saadc<'a, 1>) -> Self {
        let mut battery = Self {
            saadc,
            pin_charge_indication,
            info: BatteryInfo::default(),
        };
        battery.update().await;
        battery
    }

    /// Last reading, call `update()` first for fresh data.
    pub fn info(&self) -> BatteryInfo {
        self.info
    }

    /// Read charge state and voltage from the hardware.
    ///
    /// Returns whether the reading changed. Invalid samples keep the previous
    /// percentage.
    pub async fn update(&mut self) -> bool {
        let mut info = self.info;
        info.charging = self.pin_charge_indication.is_low();

        let mut buf = [0; 1];
        self.saadc.sample(&mut buf).await;
        match millivolts_from_adc(buf[0]) {
            Ok(millivolts) => info.percent = percent_from_millivolts(millivolts),
            Err(e) => defmt::warn!("Battery sample {} rejected: {}", buf[0], e),
        }

        let changed = info != self.info;
        self.info = info;
        changed
    }
}
