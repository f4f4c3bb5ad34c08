//! Concentric rings watchface

use embedded_graphics::{pixelcolor::Rgb565, primitives::Rectangle};

use super::{
    angle::{battery_sweep, hours_sweep, minutes_sweep, steps_sweep, Sweep},
    canvas::Canvas,
    layout::{battery_rect, Ring, RingGeometry},
    WatchFace,
};
use crate::{
    config::{FaceConfig, Palette},
    state::ClockState,
};

/// What the face shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderMode {
    /// Full information display
    Active,
    /// Wearer is asleep, only a resting ring is shown
    Suspended,
}

impl RenderMode {
    pub fn of(state: &ClockState) -> Self {
        if state.sleep_data_available && state.is_sleeping {
            RenderMode::Suspended
        } else {
            RenderMode::Active
        }
    }
}

/// Color of the battery arc
pub fn battery_color(percent: u8, charging: bool, config: &FaceConfig) -> Rgb565 {
    if charging {
        Palette::BATTERY_CHARGING
    } else if percent <= config.low_battery_percent {
        Palette::BATTERY_LOW
    } else {
        Palette::BATTERY_NORMAL
    }
}

/// Sweeps of the steps, minutes, hours and battery arcs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sweeps {
    pub steps: Sweep,
    pub minutes: Sweep,
    pub hours: Sweep,
    pub battery: Sweep,
}

impl Sweeps {
    pub fn of(state: &ClockState, mode: RenderMode, config: &FaceConfig) -> Self {
        match mode {
            RenderMode::Active => Self {
                steps: steps_sweep(state.steps, config.daily_step_goal),
                minutes: minutes_sweep(state.minute),
                hours: hours_sweep(state.hour),
                battery: battery_sweep(state.battery_percent),
            },
            RenderMode::Suspended => Self {
                steps: Sweep::ZERO,
                minutes: Sweep::ZERO,
                hours: Sweep::ZERO,
                battery: Sweep::ZERO,
            },
        }
    }
}

/// Steps, minutes and hours as nested rings with a battery arc in the corner
#[derive(Clone, Copy, Debug, Default)]
pub struct ConcentricWatchface {
    palette: Palette,
    config: FaceConfig,
}

impl ConcentricWatchface {
    pub fn new(palette: Palette, config: FaceConfig) -> Self {
        Self { palette, config }
    }

    /// Arc from 12 o'clock over `sweep` in `color`. The rest of the track is
    /// painted in the background color, so the screen needs no clearing
    /// between frames.
    fn draw_track<C: Canvas>(
        &self,
        canvas: &mut C,
        rect: Rectangle,
        thickness: u32,
        color: Rgb565,
        sweep: Sweep,
    ) -> Result<(), C::Error> {
        let end = sweep.drawn();
        if end < Sweep::FULL {
            canvas.set_color(Palette::BACKGROUND);
            canvas.fill_radial(rect, thickness, end, Sweep::FULL)?;
        }
        canvas.set_color(color);
        canvas.fill_radial(rect, thickness, Sweep::ZERO, end)
    }

    fn draw_ring<C: Canvas>(
        &self,
        canvas: &mut C,
        ring: Ring,
        color: Rgb565,
        sweep: Sweep,
        label: &str,
    ) -> Result<(), C::Error> {
        let geometry = RingGeometry::new(canvas.bounds(), ring, &self.config);
        self.draw_track(canvas, geometry.rect, self.config.arc_thickness, color, sweep)?;
        canvas.fill_circle(geometry.badge, self.config.badge_radius)?;
        if !label.is_empty() {
            canvas.draw_text(label, geometry.label, Palette::LABEL)?;
        }
        Ok(())
    }

    fn draw_battery<C: Canvas>(
        &self,
        canvas: &mut C,
        color: Rgb565,
        sweep: Sweep,
    ) -> Result<(), C::Error> {
        let rect = battery_rect(canvas.bounds(), &self.config);
        self.draw_track(canvas, rect, self.config.battery_thickness, color, sweep)
    }

    fn render_active<C: Canvas>(
        &self,
        state: &ClockState,
        canvas: &mut C,
    ) -> Result<(), C::Error> {
        let sweeps = Sweeps::of(state, RenderMode::Active, &self.config);

        self.draw_ring(
            canvas,
            Ring::Steps,
            self.palette.seconds,
            sweeps.steps,
            Ring::Steps.label(),
        )?;
        self.draw_ring(
            canvas,
            Ring::Minutes,
            self.palette.minutes,
            sweeps.minutes,
            Ring::Minutes.label(),
        )?;
        self.draw_ring(
            canvas,
            Ring::Hours,
            self.palette.hours,
            sweeps.hours,
            Ring::Hours.label(),
        )?;

        let color = battery_color(state.battery_percent, state.is_charging, &self.config);
        self.draw_battery(canvas, color, sweeps.battery)
    }

    fn render_suspended<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        self.draw_ring(canvas, Ring::Steps, Palette::RESTING_ACCENT, Sweep::ZERO, "")?;
        self.draw_ring(canvas, Ring::Minutes, Palette::RESTING_MUTED, Sweep::ZERO, "")?;
        self.draw_ring(canvas, Ring::Hours, Palette::RESTING_MUTED, Sweep::ZERO, "")?;
        self.draw_battery(canvas, Palette::RESTING_MUTED, Sweep::ZERO)
    }
}

impl WatchFace for ConcentricWatchface {
    fn render<C: Canvas>(&self, state: &ClockState, canvas: &mut C) -> Result<(), C::Error> {
        match RenderMode::of(state) {
            RenderMode::Active => self.render_active(state, canvas),
            RenderMode::Suspended => self.render_suspended(canvas),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use embedded_graphics::{
        geometry::{OriginDimensions, Point, Size},
        pixelcolor::RgbColor,
        prelude::{DrawTarget, Pixel},
        primitives::Rectangle,
    };

    use super::*;
    use crate::ui::{angle::MAX_ANGLE, canvas::Painter};

    #[derive(Debug, PartialEq)]
    enum Op {
        Radial {
            rect: Rectangle,
            thickness: u32,
            start: Sweep,
            end: Sweep,
            color: Rgb565,
        },
        Circle { center: Point, radius: u32 },
        Text { text: String, rect: Rectangle },
    }

    /// Canvas remembering every call
    struct Recorder {
        bounds: Rectangle,
        color: Rgb565,
        ops: Vec<Op>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                bounds: Rectangle::new(Point::zero(), Size::new(144, 168)),
                color: Rgb565::WHITE,
                ops: Vec::new(),
            }
        }

        /// Arcs drawn from 12 o'clock, with their color
        fn arcs(&self) -> Vec<(Rgb565, Sweep)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Radial {
                        start, end, color, ..
                    } if start.is_zero() => Some((*color, *end)),
                    _ => None,
                })
                .collect()
        }

        /// Track remainders painted after an arc
        fn erased(&self) -> Vec<(Rgb565, Sweep, Sweep)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Radial {
                        start, end, color, ..
                    } if !start.is_zero() => Some((*color, *start, *end)),
                    _ => None,
                })
                .collect()
        }

        fn sweeps(&self) -> Vec<Sweep> {
            self.arcs().into_iter().map(|(_, sweep)| sweep).collect()
        }

        fn colors(&self) -> Vec<Rgb565> {
            self.arcs().into_iter().map(|(color, _)| color).collect()
        }

        fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Canvas for Recorder {
        type Error = Infallible;

        fn bounds(&self) -> Rectangle {
            self.bounds
        }

        fn set_color(&mut self, color: Rgb565) {
            self.color = color;
        }

        fn fill_radial(
            &mut self,
            rect: Rectangle,
            thickness: u32,
            start: Sweep,
            end: Sweep,
        ) -> Result<(), Infallible> {
            self.ops.push(Op::Radial {
                rect,
                thickness,
                start,
                end,
                color: self.color,
            });
            Ok(())
        }

        fn fill_circle(&mut self, center: Point, radius: u32) -> Result<(), Infallible> {
            self.ops.push(Op::Circle { center, radius });
            Ok(())
        }

        fn draw_text(
            &mut self,
            text: &str,
            rect: Rectangle,
            _color: Rgb565,
        ) -> Result<(), Infallible> {
            self.ops.push(Op::Text {
                text: text.into(),
                rect,
            });
            Ok(())
        }
    }

    /// In-memory screen
    struct FrameBuffer {
        size: Size,
        pixels: Vec<Rgb565>,
    }

    impl FrameBuffer {
        fn new(width: u32, height: u32) -> Self {
            Self {
                size: Size::new(width, height),
                pixels: vec![Rgb565::BLACK; (width * height) as usize],
            }
        }

        fn count(&self, color: Rgb565) -> usize {
            self.pixels.iter().filter(|&&p| p == color).count()
        }
    }

    impl OriginDimensions for FrameBuffer {
        fn size(&self) -> Size {
            self.size
        }
    }

    impl DrawTarget for FrameBuffer {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0
                    && point.y >= 0
                    && (point.x as u32) < self.size.width
                    && (point.y as u32) < self.size.height
                {
                    let index = point.y as u32 * self.size.width + point.x as u32;
                    self.pixels[index as usize] = color;
                }
            }
            Ok(())
        }
    }

    fn awake(hour: u8, minute: u8, steps: u32, battery_percent: u8, is_charging: bool) -> ClockState {
        ClockState {
            hour,
            minute,
            steps,
            battery_percent,
            is_charging,
            sleep_data_available: true,
            ..Default::default()
        }
    }

    #[test]
    fn battery_colors() {
        let config = FaceConfig::default();
        for p in 0..=100u8 {
            let expected = if p <= 20 {
                Palette::BATTERY_LOW
            } else {
                Palette::BATTERY_NORMAL
            };
            assert_eq!(battery_color(p, false, &config), expected);
            assert_eq!(battery_color(p, true, &config), Palette::BATTERY_CHARGING);
        }
    }

    #[test]
    fn sleeping_requires_health_data() {
        let mut state = ClockState {
            is_sleeping: true,
            ..Default::default()
        };
        assert_eq!(RenderMode::of(&state), RenderMode::Active);
        state.sleep_data_available = true;
        assert_eq!(RenderMode::of(&state), RenderMode::Suspended);
        state.is_sleeping = false;
        assert_eq!(RenderMode::of(&state), RenderMode::Active);
    }

    #[test]
    fn sweeps_of_sample_state() {
        let config = FaceConfig::default();
        let state = awake(3, 45, 5000, 50, false);
        let sweeps = Sweeps::of(&state, RenderMode::Active, &config);

        assert_eq!(sweeps.hours.turn_units(), 3 * MAX_ANGLE / 12);
        assert_eq!(sweeps.minutes.turn_units(), 45 * MAX_ANGLE / 60);
        assert_eq!(sweeps.steps.turn_units(), MAX_ANGLE / 2);
        assert_eq!(sweeps.battery.turn_units(), MAX_ANGLE / 2);
        assert_eq!(
            battery_color(state.battery_percent, state.is_charging, &config),
            Palette::BATTERY_NORMAL
        );
    }

    #[test]
    fn active_render_sequence() {
        let face = ConcentricWatchface::default();
        let mut canvas = Recorder::new();
        face.render(&awake(3, 45, 5000, 50, false), &mut canvas).unwrap();

        let palette = Palette::default();
        assert_eq!(
            canvas.colors(),
            vec![
                palette.seconds,
                palette.minutes,
                palette.hours,
                Palette::BATTERY_NORMAL
            ]
        );
        assert_eq!(
            canvas.sweeps(),
            vec![
                Sweep::from_turn_units(MAX_ANGLE / 2),
                Sweep::from_turn_units(45 * MAX_ANGLE / 60),
                Sweep::from_turn_units(MAX_ANGLE / 4),
                Sweep::from_turn_units(MAX_ANGLE / 2),
            ]
        );
        assert_eq!(canvas.texts(), vec!["St", "M", "H"]);
    }

    #[test]
    fn partial_arcs_blank_the_rest_of_their_track() {
        let face = ConcentricWatchface::default();
        let mut canvas = Recorder::new();
        face.render(&awake(3, 45, 5000, 50, false), &mut canvas).unwrap();

        let bg = Palette::BACKGROUND;
        assert_eq!(
            canvas.erased(),
            vec![
                (bg, Sweep::from_turn_units(MAX_ANGLE / 2), Sweep::FULL),
                (bg, Sweep::from_turn_units(45 * MAX_ANGLE / 60), Sweep::FULL),
                (bg, Sweep::from_turn_units(MAX_ANGLE / 4), Sweep::FULL),
                (bg, Sweep::from_turn_units(MAX_ANGLE / 2), Sweep::FULL),
            ]
        );

        // The blanking precedes the arc on the same track
        let first_radials: Vec<_> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Radial { start, .. } => Some(*start),
                _ => None,
            })
            .take(2)
            .collect();
        assert_eq!(
            first_radials,
            vec![Sweep::from_turn_units(MAX_ANGLE / 2), Sweep::ZERO]
        );
    }

    #[test]
    fn full_tracks_need_no_blanking() {
        let face = ConcentricWatchface::default();
        let mut canvas = Recorder::new();
        face.render(&awake(12, 0, 0, 100, false), &mut canvas).unwrap();
        assert!(canvas.erased().is_empty());
    }

    #[test]
    fn rings_at_start_draw_full_circles() {
        let face = ConcentricWatchface::default();
        let mut canvas = Recorder::new();
        face.render(&awake(12, 0, 0, 0, true), &mut canvas).unwrap();

        assert_eq!(canvas.sweeps(), vec![Sweep::FULL; 4]);
        assert_eq!(canvas.colors()[3], Palette::BATTERY_CHARGING);
    }

    #[test]
    fn charging_battery_keeps_its_sweep() {
        let face = ConcentricWatchface::default();
        let mut canvas = Recorder::new();
        face.render(&awake(1, 1, 1, 75, true), &mut canvas).unwrap();

        assert_eq!(
            canvas.sweeps()[3],
            Sweep::from_turn_units(75 * MAX_ANGLE / 100)
        );
    }

    #[test]
    fn sleeping_render_is_blank() {
        let face = ConcentricWatchface::default();
        let mut canvas = Recorder::new();
        let state = ClockState {
            is_sleeping: true,
            ..awake(9, 30, 8000, 10, false)
        };
        face.render(&state, &mut canvas).unwrap();

        assert_eq!(canvas.sweeps(), vec![Sweep::FULL; 4]);
        assert_eq!(
            canvas.colors(),
            vec![
                Palette::RESTING_ACCENT,
                Palette::RESTING_MUTED,
                Palette::RESTING_MUTED,
                Palette::RESTING_MUTED
            ]
        );
        assert!(canvas.erased().is_empty());
        assert!(canvas.texts().is_empty());
        assert_eq!(
            Sweeps::of(&state, RenderMode::Suspended, &FaceConfig::default()),
            Sweeps {
                steps: Sweep::ZERO,
                minutes: Sweep::ZERO,
                hours: Sweep::ZERO,
                battery: Sweep::ZERO,
            }
        );
    }

    #[test]
    fn ring_geometry_is_forwarded() {
        let face = ConcentricWatchface::default();
        let mut canvas = Recorder::new();
        face.render(&awake(0, 0, 0, 100, false), &mut canvas).unwrap();

        let circles: Vec<_> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Circle { center, radius } => Some((*center, *radius)),
                _ => None,
            })
            .collect();
        assert_eq!(
            circles,
            vec![
                (Point::new(72, 18), 7),
                (Point::new(72, 36), 7),
                (Point::new(72, 54), 7)
            ]
        );

        let thicknesses: Vec<_> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Radial { thickness, rect, .. } => Some((*thickness, rect.size)),
                _ => None,
            })
            .collect();
        assert_eq!(
            thicknesses,
            vec![
                (15, Size::new(144, 168)),
                (15, Size::new(108, 132)),
                (15, Size::new(72, 96)),
                (15, Size::new(20, 20)),
            ]
        );
    }

    #[test]
    fn paints_palette_on_screen() {
        let face = ConcentricWatchface::default();
        let mut screen = FrameBuffer::new(144, 168);
        face.render(&awake(3, 45, 5000, 50, false), &mut Painter::new(&mut screen))
            .unwrap();

        let palette = Palette::default();
        assert!(screen.count(palette.seconds) > 0);
        assert!(screen.count(palette.minutes) > 0);
        assert!(screen.count(palette.hours) > 0);
        assert!(screen.count(Palette::LABEL) > 0);
    }

    #[test]
    fn redraw_without_clearing_drops_old_charge() {
        let face = ConcentricWatchface::default();
        let mut screen = FrameBuffer::new(144, 168);
        face.render(&awake(3, 45, 5000, 90, true), &mut Painter::new(&mut screen))
            .unwrap();
        let charged = screen.count(Palette::BATTERY_CHARGING);
        assert!(charged > 0);

        // Same screen, no clear in between
        let low = awake(3, 45, 5000, 10, false);
        face.render(&low, &mut Painter::new(&mut screen)).unwrap();

        let mut fresh = FrameBuffer::new(144, 168);
        face.render(&low, &mut Painter::new(&mut fresh)).unwrap();

        assert_eq!(
            screen.count(Palette::BATTERY_LOW),
            fresh.count(Palette::BATTERY_LOW)
        );
        assert!(screen.count(Palette::BATTERY_CHARGING) * 10 < charged);
    }

    #[test]
    fn resting_screen_only_shows_accent() {
        let face = ConcentricWatchface::default();
        let mut screen = FrameBuffer::new(144, 168);
        let state = ClockState {
            is_sleeping: true,
            ..awake(3, 45, 5000, 50, false)
        };
        face.render(&state, &mut Painter::new(&mut screen)).unwrap();

        let palette = Palette::default();
        assert!(screen.count(Palette::RESTING_ACCENT) > 0);
        assert_eq!(screen.count(palette.minutes), 0);
        assert_eq!(screen.count(palette.hours), 0);
        assert_eq!(
            screen.count(Palette::RESTING_ACCENT) + screen.count(Rgb565::BLACK),
            144 * 168
        );
    }
}
