//! Battery status
//!
//! Conversion based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/battery.rs
//! and https://wiki.pine64.org/wiki/PineTime.

/// Snapshot of the battery state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryInfo {
    /// Charge in percent (0-100)
    pub percent: u8,
    pub charging: bool,
}

/// Synchronous access to the latest battery reading
pub trait BatteryService {
    fn peek(&self) -> BatteryInfo;
}

impl BatteryService for BatteryInfo {
    fn peek(&self) -> BatteryInfo {
        *self
    }
}

#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    InvalidMeasurement,
}

/// Convert a 12 bit SAADC sample into battery millivolts.
pub fn millivolts_from_adc(raw: i16) -> Result<u16, Error> {
    match raw {
        0..=4095 => {
            // Keep as 32 bit for the multiplication: ADC * 2 * 1000 mV / (2^12 / 3.3 V)
            let adc = raw as u32;
            Ok((adc * 2000 / 1241) as u16)
        }
        _ => Err(Error::InvalidMeasurement),
    }
}

/// Estimate the remaining capacity from the battery voltage.
///
/// Fixed data points with linear interpolation in between.
pub fn percent_from_millivolts(millivolts: u16) -> u8 {
    (match millivolts {
        0..=3449 => 0,
        3450..=3699 => (millivolts - 3450) / 5,
        3700..=4199 => 50 + (millivolts - 3700) / 10,
        _ => 100,
    }) as u8
}
