//! Display control module for PineTime

use display_interface_spi::SPIInterface;
use embassy_nrf::{
    gpio::Output,
    peripherals::{P0_18, P0_25, P0_26},
    spim::{self, Spim},
};
use embassy_time::Delay;
use mipidsi::{models::ST7789, Builder, Orientation};

use concentricity::{ui::Painter, BatteryService, HealthService, Palette, RenderContext};

const LCD_W: u16 = 240;
const LCD_H: u16 = 240;

type Lcd<'a, SPI> = mipidsi::Display<
    SPIInterface<Spim<'a, SPI>, Output<'a, P0_18>, Output<'a, P0_25>>,
    ST7789,
    Output<'a, P0_26>,
>;

/// ST7789 LCD driven over SPI
pub struct Display<'a, SPI>
where
    SPI: spim::Instance,
{
    lcd: Lcd<'a, SPI>,
}

impl<'a, SPI> Display<'a, SPI>
where
    SPI: spim::Instance,
{
    /// Configure display settings on boot
    pub fn init(
        spim: Spim<'a, SPI>,
        cs_pin: Output<'a, P0_25>,
        dc_pin: Output<'a, P0_18>,
        rst_pin: Output<'a, P0_26>,
    ) -> Result<Self, Error> {
        let mut lcd = Builder::st7789(SPIInterface::new(spim, dc_pin, cs_pin))
            .with_display_size(LCD_W, LCD_H)
            .with_orientation(Orientation::Portrait(false))
            .init(&mut Delay, Some(rst_pin))
            .map_err(|_| Error::Init)?;

        // The only full clear; frames repaint their tracks in place
        Painter::new(&mut lcd)
            .clear(Palette::BACKGROUND)
            .map_err(|_| Error::Draw)?;

        Ok(Self { lcd })
    }

    /// Repaint the watchface if the context requested it.
    ///
    /// Returns whether anything was drawn.
    pub fn draw<H, B>(&mut self, context: &mut RenderContext<H, B>) -> Result<bool, Error>
    where
        H: HealthService,
        B: BatteryService,
    {
        context
            .render_if_dirty(&mut Painter::new(&mut self.lcd))
            .map_err(|_| Error::Draw)
    }
}

#[derive(Debug, defmt::Format)]
pub enum Error {
    /// Controller did not come up
    Init,
    /// SPI transfer failed while drawing
    Draw,
}
