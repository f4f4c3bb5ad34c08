//! Backlight control
//!
//! Implementation based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/backlight.rs
//! and https://wiki.pine64.org/wiki/PineTime.

use embassy_nrf::{
    gpio::{Output, Pin},
    peripherals::{P0_14, P0_22, P0_23},
};

/// Three active-low pins, each switching a FET in series with a resistor
/// (low: 2.2 kΩ, mid: 100 Ω, high: 30 Ω). Their combinations give 7
/// brightness levels plus off.
pub struct Backlight<'a> {
    low: Output<'a, P0_14>,
    mid: Output<'a, P0_22>,
    high: Output<'a, P0_23>,

    /// Current level (0-7)
    brightness: u8,
}

impl<'a> Backlight<'a> {
    /// Initialize the backlight with the specified level (0-7).
    pub fn init(
        low: Output<'a, P0_14>,
        mid: Output<'a, P0_22>,
        high: Output<'a, P0_23>,
        brightness: u8,
    ) -> Result<Self, Error> {
        let mut backlight = Self {
            low,
            mid,
            high,
            brightness: 0,
        };
        backlight.set(brightness)?;
        Ok(backlight)
    }

    /// Set the brightness level between 0 (off) and 7 (max brightness).
    pub fn set(&mut self, brightness: u8) -> Result<(), Error> {
        if brightness > 7 {
            return Err(Error::OutOfBounds);
        }
        if brightness == self.brightness {
            return Ok(());
        }
        defmt::debug!("Setting backlight brightness to {}", brightness);

        drive(&mut self.low, brightness & 0x01 > 0);
        drive(&mut self.mid, brightness & 0x02 > 0);
        drive(&mut self.high, brightness & 0x04 > 0);
        self.brightness = brightness;
        Ok(())
    }
}

/// Pins are active low
fn drive<T: Pin>(pin: &mut Output<'_, T>, on: bool) {
    if on {
        pin.set_low();
    } else {
        pin.set_high();
    }
}

#[derive(Debug, defmt::Format)]
pub enum Error {
    OutOfBounds,
}
