//! Ring geometry

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

use crate::config::FaceConfig;

/// The three time rings, outermost first
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ring {
    Steps = 0,
    Minutes = 1,
    Hours = 2,
}

impl Ring {
    pub const ALL: [Ring; 3] = [Ring::Steps, Ring::Minutes, Ring::Hours];

    pub fn index(self) -> u32 {
        self as u32
    }

    /// Badge text
    pub fn label(self) -> &'static str {
        match self {
            Ring::Steps => "St",
            Ring::Minutes => "M",
            Ring::Hours => "H",
        }
    }
}

/// Where a ring and its label badge go on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingGeometry {
    /// Rectangle the arc is fitted into
    pub rect: Rectangle,
    /// Center of the label badge
    pub badge: Point,
    /// Box the label text is centered in
    pub label: Rectangle,
}

impl RingGeometry {
    pub fn new(bounds: Rectangle, ring: Ring, config: &FaceConfig) -> Self {
        let rect = inset(bounds, config.ring_inset() * ring.index());
        let badge = Point::new(
            bounds.top_left.x + (bounds.size.width / 2) as i32,
            rect.top_left.y + config.label_offset,
        );
        let corner = config.badge_radius as i32 + 1;
        let label = Rectangle::new(
            badge - Point::new(corner, corner),
            Size::new(config.label_box, config.label_box),
        );

        Self { rect, badge, label }
    }
}

/// Shrink `rect` by `amount` on every side
pub fn inset(rect: Rectangle, amount: u32) -> Rectangle {
    let shrink = amount.saturating_mul(2);
    Rectangle::new(
        rect.top_left + Point::new(amount as i32, amount as i32),
        Size::new(
            rect.size.width.saturating_sub(shrink),
            rect.size.height.saturating_sub(shrink),
        ),
    )
}

/// Box of the battery indicator, bottom left corner of the screen
pub fn battery_rect(bounds: Rectangle, config: &FaceConfig) -> Rectangle {
    Rectangle::new(
        Point::new(
            bounds.top_left.x + config.battery_margin_x,
            bounds.top_left.y + bounds.size.height as i32 - config.battery_margin_y,
        ),
        Size::new(config.battery_box, config.battery_box),
    )
}

/// Largest circle fitting into `rect`, as center and diameter
pub fn fit_circle(rect: Rectangle) -> (Point, u32) {
    let diameter = rect.size.width.min(rect.size.height);
    (rect.center(), diameter)
}
