//! Drawing surface

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{AngleUnit, Point},
    mono_font::MonoTextStyle,
    pixelcolor::{Rgb565, RgbColor},
    primitives::{
        Arc, Circle, Primitive, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle,
        StrokeAlignment,
    },
    Drawable,
};
use embedded_text::{
    alignment::{HorizontalAlignment, VerticalAlignment},
    style::TextBoxStyleBuilder,
    TextBox,
};

use super::{angle::Sweep, layout::fit_circle};

/// Vector drawing primitives the watchface is rendered with.
///
/// Like a pen, the canvas keeps a current color that applies to both fills
/// and strokes until it is changed again.
pub trait Canvas {
    type Error;

    /// Drawable area
    fn bounds(&self) -> Rectangle;

    /// Color for subsequent fills and strokes
    fn set_color(&mut self, color: Rgb565);

    /// Annulus of `thickness` inside the circle fitted into `rect`, from
    /// `start` to `end`, clockwise from 12 o'clock.
    fn fill_radial(
        &mut self,
        rect: Rectangle,
        thickness: u32,
        start: Sweep,
        end: Sweep,
    ) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Point, radius: u32) -> Result<(), Self::Error>;

    /// Text centered in `rect`, wrapped at word boundaries
    fn draw_text(&mut self, text: &str, rect: Rectangle, color: Rgb565)
        -> Result<(), Self::Error>;
}

/// [`Canvas`] on top of any `embedded-graphics` draw target
pub struct Painter<'a, D> {
    target: &'a mut D,
    color: Rgb565,
}

impl<'a, D> Painter<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self {
            target,
            color: Rgb565::WHITE,
        }
    }

    /// Paint the whole target in one color
    pub fn clear(&mut self, color: Rgb565) -> Result<(), D::Error> {
        self.target.clear(color)
    }
}

impl<D> Canvas for Painter<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn bounds(&self) -> Rectangle {
        self.target.bounding_box()
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
    ) -> Result<(), Self::Error> {
        let (center, diameter) = fit_circle(rect);
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(self.color)
            .stroke_width(thickness)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();

        let extent = end.turn_units().saturating_sub(start.turn_units());
        if extent >= Sweep::FULL.turn_units() {
            return Circle::with_center(center, diameter)
                .into_styled(style)
                .draw(&mut *self.target);
        }

        // 0° is 3 o'clock for embedded-graphics
        let from = start.to_angle() - 90.0.deg();
        Arc::with_center(center, diameter, from, Sweep::from_turn_units(extent).to_angle())
            .into_styled(style)
            .draw(&mut *self.target)
    }

    fn fill_circle(&mut self, center: Point, radius: u32) -> Result<(), Self::Error> {
        Circle::with_center(center, radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(self.color))
            .draw(&mut *self.target)
    }

    fn draw_text(
        &mut self,
        text: &str,
        rect: Rectangle,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        let character_style = MonoTextStyle::new(&profont::PROFONT_9_POINT, color);
        let textbox_style = TextBoxStyleBuilder::new()
            .alignment(HorizontalAlignment::Center)
            .vertical_alignment(VerticalAlignment::Middle)
            .build();

        TextBox::with_textbox_style(text, rect, character_style, textbox_style)
            .draw(&mut *self.target)?;
        Ok(())
    }
}
