//! Render context owned by the host

use chrono::Timelike;

use crate::{
    config::{FaceConfig, Palette},
    fmt,
    services::{BatteryService, HealthService},
    state::ClockState,
    ui::{Canvas, ConcentricWatchface, RenderMode, WatchFace},
};

/// State, services and face of one watchface window.
///
/// Created when the window opens and dropped when it closes. The host calls
/// [`RenderContext::update_time`] on every minute tick and
/// [`RenderContext::render`] whenever the screen has to be repainted.
pub struct RenderContext<H, B> {
    face: ConcentricWatchface,
    health: H,
    battery: B,
    state: ClockState,
    mode: RenderMode,
    dirty: bool,
}

impl<H, B> RenderContext<H, B>
where
    H: HealthService,
    B: BatteryService,
{
    pub fn new(palette: Palette, config: FaceConfig, health: H, battery: B) -> Self {
        Self {
            face: ConcentricWatchface::new(palette, config),
            health,
            battery,
            state: ClockState::default(),
            mode: RenderMode::Active,
            dirty: true,
        }
    }

    pub fn state(&self) -> &ClockState {
        &self.state
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Minute tick from the time source. Requests a repaint only if the
    /// displayed hour or minute changed.
    pub fn update_time<T: Timelike>(&mut self, time: &T) {
        if self.state.set_time(time) {
            fmt::debug!("Time is now {}:{}", self.state.hour, self.state.minute);
            self.dirty = true;
        }
    }

    /// Request a repaint on the next [`RenderContext::render_if_dirty`]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Poll health and battery, then draw the face.
    pub fn render<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), C::Error> {
        self.state.set_health(&self.health);
        self.state.set_battery(self.battery.peek());

        let mode = RenderMode::of(&self.state);
        if mode != self.mode {
            match mode {
                RenderMode::Suspended => fmt::info!("The user is sleeping."),
                RenderMode::Active => fmt::info!("The user is awake."),
            }
            self.mode = mode;
        }

        self.face.render(&self.state, canvas)?;
        self.dirty = false;
        Ok(())
    }

    /// Draw only if something changed since the last render.
    ///
    /// Returns whether the face was drawn.
    pub fn render_if_dirty<C: Canvas>(&mut self, canvas: &mut C) -> Result<bool, C::Error> {
        if !self.dirty {
            return Ok(false);
        }
        self.render(canvas)?;
        Ok(true)
    }
}
