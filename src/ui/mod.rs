//! UI definitions module

pub mod angle;
pub mod canvas;
pub mod concentric;
pub mod layout;

pub use canvas::{Canvas, Painter};
pub use concentric::{ConcentricWatchface, RenderMode};

use crate::state::ClockState;

pub trait WatchFace {
    /// Draw the face for `state`
    fn render<C: Canvas>(&self, state: &ClockState, canvas: &mut C) -> Result<(), C::Error>;
}
