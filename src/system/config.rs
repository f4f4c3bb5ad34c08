//! General system configuration

use embassy_nrf::config::{Config, HfclkSource, LfclkSource};

/// Offset of local time from UTC in seconds
pub const TIMEZONE: i64 = 3_600;

/// Backlight level while the wearer is awake
pub const BRIGHTNESS_ACTIVE: u8 = 3;
/// Backlight level for the resting display
pub const BRIGHTNESS_RESTING: u8 = 1;

pub struct SystemConfig;

impl SystemConfig {
    /// Create new system configuration
    pub fn new() -> Config {
        // `Config` is `non_exhaustive`, start from the default
        let mut config = Config::default();

        // External crystals keep the clock accurate
        config.hfclk_source = HfclkSource::ExternalXtal;
        config.lfclk_source = LfclkSource::ExternalXtal;

        // DC/DC regulator massively reduces runtime current consumption
        config.dcdc.reg1 = true;

        config
    }
}
