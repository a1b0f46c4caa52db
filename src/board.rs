//! Pico W board bring-up: buttons and the ILI9341 panel.

use defmt::info;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::{
    PIN_10, PIN_11, PIN_12, PIN_13, PIN_14, PIN_15, PIN_2, PIN_3, PIN_4, PIN_5, PIN_6, PIN_7,
    PIN_8, SPI1,
};
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embassy_time::Delay;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::interface::SpiInterface;
use mipidsi::models::ILI9341Rgb565;
use mipidsi::options::{ColorOrder, Orientation, Rotation};
use mipidsi::Builder;
use rcpad::config::DISPLAY_SPI_HZ;
use rcpad::{Error, InputPins};
use static_cell::StaticCell;

type PanelSpi = ExclusiveDevice<Spi<'static, SPI1, Blocking>, Output<'static>, NoDelay>;

/// Concrete panel driver.
pub type Panel =
    mipidsi::Display<SpiInterface<'static, PanelSpi, Output<'static>>, ILI9341Rgb565, Output<'static>>;

/// Joystick + key lines, all pulled up.
pub fn buttons(
    up: PIN_2,
    down: PIN_3,
    left: PIN_4,
    right: PIN_5,
    press: PIN_6,
    key_b: PIN_7,
    key_c: PIN_8,
) -> InputPins<Input<'static>> {
    InputPins {
        up: Input::new(up, Pull::Up),
        down: Input::new(down, Pull::Up),
        left: Input::new(left, Pull::Up),
        right: Input::new(right, Pull::Up),
        stick_press: Input::new(press, Pull::Up),
        key_b: Input::new(key_b, Pull::Up),
        key_c: Input::new(key_c, Pull::Up),
    }
}

/// Bring up SPI1 and initialise the panel in landscape.
pub fn panel(
    spi: SPI1,
    sck: PIN_10,
    mosi: PIN_11,
    miso: PIN_12,
    cs: PIN_13,
    dc: PIN_14,
    rst: PIN_15,
) -> Result<Panel, Error> {
    let mut config = SpiConfig::default();
    config.frequency = DISPLAY_SPI_HZ;
    let bus = Spi::new_blocking(spi, sck, mosi, miso, config);

    let cs = Output::new(cs, Level::High);
    let dc = Output::new(dc, Level::Low);
    let rst = Output::new(rst, Level::High);

    let device = ExclusiveDevice::new_no_delay(bus, cs).map_err(|_| Error::DisplayInit)?;

    static BUFFER: StaticCell<[u8; 512]> = StaticCell::new();
    let interface = SpiInterface::new(device, dc, BUFFER.init([0; 512]));

    let panel = Builder::new(ILI9341Rgb565, interface)
        .reset_pin(rst)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .color_order(ColorOrder::Bgr)
        .init(&mut Delay)
        .map_err(|_| Error::DisplayInit)?;

    info!("Display: ILI9341 ready");
    Ok(panel)
}
