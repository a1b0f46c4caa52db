//! rcpad firmware - handheld Wi-Fi remote on a Raspberry Pi Pico W.
//!
//! Startup:
//! 1. Buttons and ILI9341 panel up, "CONNECTING..." splash.
//! 2. CYW43 radio joins the access point (retried forever), DHCP lease.
//! 3. UDP socket bound, dashboard drawn.
//!
//! Then one tick every 50 ms: sample buttons → controller → UDP datagrams
//! → dashboard redraw.

#![no_std]
#![no_main]

mod board;
mod net;

use defmt::{info, unwrap};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::{Instant, Timer};
use panic_probe as _;
use rcpad::config::TICK_MS;
use rcpad::link;
use rcpad::ui::{Dashboard, GraphicsCanvas};
use rcpad::Controller;

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    info!("rcpad starting");
    let p = embassy_rp::init(Default::default());

    let mut buttons = board::buttons(p.PIN_2, p.PIN_3, p.PIN_4, p.PIN_5, p.PIN_6, p.PIN_7, p.PIN_8);
    let panel = unwrap!(board::panel(
        p.SPI1, p.PIN_10, p.PIN_11, p.PIN_12, p.PIN_13, p.PIN_14, p.PIN_15
    ));
    let mut canvas = GraphicsCanvas::new(panel);
    let mut dashboard = Dashboard::new();
    dashboard.draw_connecting(&mut canvas);

    let radio = net::Radio {
        pwr: p.PIN_23,
        cs: p.PIN_25,
        dio: p.PIN_24,
        clk: p.PIN_29,
        pio: p.PIO0,
        dma: p.DMA_CH0,
    };
    let stack = net::connect(spawner, radio).await;
    let mut transport = unwrap!(net::UdpTransport::bind(stack));

    let mut controller = Controller::new();
    dashboard.draw_initial(&mut canvas, &controller.toggles());
    info!("rcpad ready");

    loop {
        let input = buttons.sample();
        let out = controller.tick(&input, Instant::now().as_millis());

        link::dispatch(&mut transport, &out.datagrams).await;
        dashboard.render(&mut canvas, &out.redraw, &controller.toggles());

        Timer::after_millis(TICK_MS).await;
    }
}
