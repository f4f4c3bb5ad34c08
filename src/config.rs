//! Watchface configuration

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Colors of the three time rings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Outermost ring (step progress)
    pub seconds: Rgb565,
    pub minutes: Rgb565,
    /// Innermost ring
    pub hours: Rgb565,
}

impl Palette {
    /// Dark candy-apple red
    pub const STEPS_RED: Rgb565 = Rgb565::new(0xAA >> 3, 0, 0);
    /// Jaeger green
    pub const MINUTES_GREEN: Rgb565 = Rgb565::new(0, 0xAA >> 2, 0x55 >> 3);
    /// Blue moon
    pub const HOURS_BLUE: Rgb565 = Rgb565::new(0, 0x55 >> 2, 0xFF >> 3);
    /// Electric blue, used for the resting display
    pub const RESTING_ACCENT: Rgb565 = Rgb565::new(0x55 >> 3, 0xFF >> 2, 0xFF >> 3);
    pub const RESTING_MUTED: Rgb565 = Rgb565::BLACK;
    /// Screen color behind the rings
    pub const BACKGROUND: Rgb565 = Rgb565::BLACK;

    pub const LABEL: Rgb565 = Rgb565::WHITE;
    pub const BATTERY_CHARGING: Rgb565 = Rgb565::GREEN;
    pub const BATTERY_LOW: Rgb565 = Rgb565::RED;
    pub const BATTERY_NORMAL: Rgb565 = Rgb565::WHITE;
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            seconds: Self::STEPS_RED,
            minutes: Self::MINUTES_GREEN,
            hours: Self::HOURS_BLUE,
        }
    }
}

/// Layout and policy constants of the watchface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceConfig {
    /// Space unit between rings
    pub padding: u32,
    /// Number of padding units between two neighbouring rings
    pub ring_spacing: u32,
    /// Stroke width of the time rings
    pub arc_thickness: u32,
    /// Stroke width of the battery indicator
    pub battery_thickness: u32,
    /// Radius of the label badge
    pub badge_radius: u32,
    /// Edge length of the square label text box
    pub label_box: u32,
    /// Vertical distance between a ring's top edge and its badge center
    pub label_offset: i32,
    /// Edge length of the square battery indicator box
    pub battery_box: u32,
    /// Distance of the battery box from the left edge
    pub battery_margin_x: i32,
    /// Distance of the battery box top from the bottom edge
    pub battery_margin_y: i32,
    /// Steps needed to fill the outer ring
    pub daily_step_goal: u32,
    /// Charge (in percent) at or below which the battery turns red
    pub low_battery_percent: u8,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            padding: 6,
            ring_spacing: 3,
            arc_thickness: 15,
            battery_thickness: 15,
            badge_radius: 7,
            label_box: 20,
            label_offset: 18,
            battery_box: 20,
            battery_margin_x: 4,
            battery_margin_y: 24,
            daily_step_goal: 10_000,
            low_battery_percent: 20,
        }
    }
}

impl FaceConfig {
    /// Inset applied on every side per ring index
    pub fn ring_inset(&self) -> u32 {
        self.padding * self.ring_spacing
    }
}
