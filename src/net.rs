//! Wi-Fi station bring-up and the UDP command transport.
//!
//! The CYW43439 is driven over PIO-SPI. Two background tasks service it:
//! `wifi_task` runs the chip driver and `net_task` runs the IP stack. The
//! main task only ever touches the UDP socket.

use cyw43::JoinOptions;
use cyw43_pio::{PioSpi, DEFAULT_CLOCK_DIVIDER};
use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_net::udp::{PacketMetadata, SendError, UdpSocket};
use embassy_net::{Config, Ipv4Address, Stack, StackResources};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{DMA_CH0, PIN_23, PIN_24, PIN_25, PIN_29, PIO0};
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_time::Timer;
use rcpad::config::{UDP_PORT, WIFI_PASSWORD, WIFI_RETRY_MS, WIFI_SSID};
use rcpad::{Datagram, Error, NetError, Transport};
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

#[embassy_executor::task]
async fn wifi_task(
    runner: cyw43::Runner<'static, Output<'static>, PioSpi<'static, PIO0, 0, DMA_CH0>>,
) -> ! {
    runner.run().await
}

#[embassy_executor::task]
async fn net_task(mut runner: embassy_net::Runner<'static, cyw43::NetDriver<'static>>) -> ! {
    runner.run().await
}

/// On-board radio wiring of the Pico W.
pub struct Radio {
    pub pwr: PIN_23,
    pub cs: PIN_25,
    pub dio: PIN_24,
    pub clk: PIN_29,
    pub pio: PIO0,
    pub dma: DMA_CH0,
}

/// Power the radio, join the access point and wait for a DHCP lease.
///
/// Blocks until the join succeeds; there is no timeout.
pub async fn connect(spawner: Spawner, radio: Radio) -> Stack<'static> {
    let fw = cyw43_firmware::CYW43_43439A0;
    let clm = cyw43_firmware::CYW43_43439A0_CLM;

    let pwr = Output::new(radio.pwr, Level::Low);
    let cs = Output::new(radio.cs, Level::High);
    let mut pio = Pio::new(radio.pio, Irqs);
    let spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        cs,
        radio.dio,
        radio.clk,
        radio.dma,
    );

    static STATE: StaticCell<cyw43::State> = StaticCell::new();
    let state = STATE.init(cyw43::State::new());
    let (net_device, mut control, runner) = cyw43::new(state, pwr, spi, fw).await;
    unwrap!(spawner.spawn(wifi_task(runner)));

    control.init(clm).await;
    // Lowest latency: the controller sends every 50 ms.
    control
        .set_power_management(cyw43::PowerManagementMode::Performance)
        .await;

    let config = Config::dhcpv4(Default::default());
    let seed = 0x7263_7061_6421_5eed;

    static RESOURCES: StaticCell<StackResources<3>> = StaticCell::new();
    let (stack, runner) = embassy_net::new(
        net_device,
        config,
        RESOURCES.init(StackResources::<3>::new()),
        seed,
    );
    unwrap!(spawner.spawn(net_task(runner)));

    info!("Wi-Fi: joining {=str}", WIFI_SSID);
    loop {
        match control
            .join(WIFI_SSID, JoinOptions::new(WIFI_PASSWORD.as_bytes()))
            .await
        {
            Ok(()) => break,
            Err(err) => {
                let e = Error::from(NetError::JoinFailed(err.status));
                warn!("Wi-Fi: join failed ({}), retrying", e);
                Timer::after_millis(WIFI_RETRY_MS).await;
            }
        }
    }

    info!("Wi-Fi: joined, waiting for DHCP");
    stack.wait_config_up().await;
    if let Some(v4) = stack.config_v4() {
        info!("Wi-Fi: address {}", v4.address);
    }
    stack
}

struct SocketBuffers {
    rx_meta: [PacketMetadata; 1],
    rx: [u8; 64],
    tx_meta: [PacketMetadata; 8],
    tx: [u8; 256],
}

/// Command sender over a UDP socket bound to [`UDP_PORT`].
pub struct UdpTransport {
    socket: UdpSocket<'static>,
}

impl UdpTransport {
    /// Open and bind the command socket. Callable once.
    pub fn bind(stack: Stack<'static>) -> Result<Self, Error> {
        static BUFFERS: StaticCell<SocketBuffers> = StaticCell::new();
        let SocketBuffers {
            rx_meta,
            rx,
            tx_meta,
            tx,
        } = BUFFERS.init(SocketBuffers {
            rx_meta: [PacketMetadata::EMPTY; 1],
            rx: [0; 64],
            tx_meta: [PacketMetadata::EMPTY; 8],
            tx: [0; 256],
        });

        let mut socket = UdpSocket::new(stack, rx_meta, rx, tx_meta, tx);
        socket.bind(UDP_PORT).map_err(|_| NetError::BindFailed)?;
        info!("UDP: bound to port {=u16}", UDP_PORT);
        Ok(Self { socket })
    }
}

impl Transport for UdpTransport {
    type Error = NetError;

    async fn send(&mut self, datagram: Datagram) -> Result<(), NetError> {
        let [a, b, c, d] = datagram.peer.address();
        let remote = (Ipv4Address::new(a, b, c, d), UDP_PORT);
        self.socket
            .send_to(datagram.token.as_bytes(), remote)
            .await
            .map_err(|e| match e {
                SendError::NoRoute => NetError::NoRoute,
                _ => NetError::SendFailed,
            })
    }
}
