#![no_std]
#![no_main]

mod peripherals;
mod system;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

use core::cell::Cell;

// Device
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{Input, Level, Output, OutputDrive, Pull},
    peripherals::SPI2,
    saadc::{self, ChannelConfig, Resolution, Saadc},
    spim,
};
use embassy_sync::{
    blocking_mutex::{raw::ThreadModeRawMutex, Mutex},
    channel::Channel,
};
use embassy_time::{Duration, Timer};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use concentricity::{
    ui::RenderMode, BatteryInfo, BatteryService, FaceConfig, NullHealth, Palette, RenderContext,
};
use peripherals::{backlight::Backlight, battery::BatteryStatus, display::Display};
use system::{
    config::{SystemConfig, BRIGHTNESS_ACTIVE, BRIGHTNESS_RESTING, TIMEZONE},
    time::{TimeManager, TimeReference},
};

// Others
use chrono::{NaiveDateTime, Timelike};

// Include current UTC epoch at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

/// Why the watchface has to be repainted
enum Redraw {
    /// A new minute started
    Tick(NaiveDateTime),
    /// Something else on screen changed
    Dirty,
}

// Communication channels
static REDRAW: Channel<ThreadModeRawMutex, Redraw, 4> = Channel::new();
static BATTERY_STATUS: Mutex<ThreadModeRawMutex, Cell<BatteryInfo>> =
    Mutex::new(Cell::new(BatteryInfo {
        percent: 0,
        charging: false,
    }));

/// Latest reading published by `update_battery_status`
struct SharedBattery;

impl BatteryService for SharedBattery {
    fn peek(&self) -> BatteryInfo {
        BATTERY_STATUS.lock(|info| info.get())
    }
}

/// Fetch the battery status from the hardware.
#[embassy_executor::task(pool_size = 1)]
async fn update_battery_status(mut battery: BatteryStatus<'static>) {
    loop {
        if battery.update().await {
            let info = battery.info();
            defmt::info!(
                "Battery status: {}% ({})",
                info.percent,
                if info.charging {
                    "charging"
                } else {
                    "discharging"
                }
            );
            BATTERY_STATUS.lock(|shared| shared.set(info));
            REDRAW.send(Redraw::Dirty).await;
        }

        // Re-schedule the timer interrupt in 10s
        Timer::after(Duration::from_secs(10)).await;
    }
}

/// Deliver the wall-clock time at every full minute.
#[embassy_executor::task(pool_size = 1)]
async fn minute_tick(clock: TimeManager) {
    loop {
        let now = clock.now();
        defmt::info!(
            "Current time: {}:{}:{}",
            now.hour(),
            now.minute(),
            now.second()
        );
        REDRAW.send(Redraw::Tick(now)).await;

        Timer::after(clock.until_next_minute()).await;
    }
}

/// Repaint the watchface on request.
#[embassy_executor::task(pool_size = 1)]
async fn update_lcd(mut display: Display<'static, SPI2>, mut backlight: Backlight<'static>) {
    let mut context = RenderContext::new(
        Palette::default(),
        FaceConfig::default(),
        NullHealth,
        SharedBattery,
    );

    loop {
        match REDRAW.receive().await {
            Redraw::Tick(time) => context.update_time(&time),
            Redraw::Dirty => context.mark_dirty(),
        }

        match display.draw(&mut context) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                defmt::warn!("Failed to draw watchface: {}", e);
                continue;
            }
        }

        let level = match context.mode() {
            RenderMode::Active => BRIGHTNESS_ACTIVE,
            RenderMode::Suspended => BRIGHTNESS_RESTING,
        };
        if let Err(e) = backlight.set(level) {
            defmt::warn!("Backlight: {}", e);
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let mut p = embassy_nrf::init(SystemConfig::new());
    defmt::info!("Initializing");

    // Initialize SAADC
    let mut saadc_config = saadc::Config::default();
    // Set resolution to 12bit, necessary for correct battery status calculation
    saadc_config.resolution = Resolution::_12BIT;
    // Pin P0.31: Voltage level
    let channel_config = ChannelConfig::single_ended(&mut p.P0_31);
    let saadc = Saadc::new(p.SAADC, Irqs, saadc_config, [channel_config]);
    saadc.calibrate().await;

    // Initialize Backlight
    let backlight = unwrap!(Backlight::init(
        Output::new(p.P0_14, Level::High, OutputDrive::Standard),
        Output::new(p.P0_22, Level::High, OutputDrive::Standard),
        Output::new(p.P0_23, Level::High, OutputDrive::Standard),
        BRIGHTNESS_ACTIVE,
    ));

    // Initialize Battery
    let battery = BatteryStatus::init(Input::new(p.P0_12, Pull::None), saadc).await;
    BATTERY_STATUS.lock(|shared| shared.set(battery.info()));

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
    ));

    // Initialize clock
    let reference = unwrap!(TimeReference::from_timestamp(UTC_TIME + TIMEZONE));
    let clock = TimeManager::new(reference);

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(update_lcd(display, backlight)));
    unwrap!(spawner.spawn(update_battery_status(battery)));
    unwrap!(spawner.spawn(minute_tick(clock)));
}
