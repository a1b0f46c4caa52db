//! Application-wide constants and compile-time configuration.
//!
//! All pin assignments, timing parameters, and network constants live
//! here so they can be tuned in one place. Nothing is read at runtime.

// Timing

/// Fixed sleep at the end of every tick (ms). 50 ms ≈ 20 Hz.
pub const TICK_MS: u64 = 50;

/// The dispense overlay stays up until this long after the last
/// dispense signal (ms).
pub const DISPENSE_HOLD_MS: u64 = 500;

/// Delay between Wi-Fi join attempts at startup (ms).
pub const WIFI_RETRY_MS: u64 = 200;

// Network

/// UDP port used both for the local socket and for both peers.
pub const UDP_PORT: u16 = 5000;

/// Vehicle (drive motors + arm servo).
pub const VEHICLE_ADDR: [u8; 4] = [172, 20, 10, 3];

/// Dispenser (single servo).
pub const DISPENSER_ADDR: [u8; 4] = [172, 20, 10, 4];

/// Upper bound on datagrams one tick can emit:
/// direction + dispense + arm + speed.
pub const MAX_DATAGRAMS_PER_TICK: usize = 4;

/// Access point the controller joins. Override at build time with
/// `RCPAD_WIFI_SSID=... cargo build ...`.
pub const WIFI_SSID: &str = match option_env!("RCPAD_WIFI_SSID") {
    Some(ssid) => ssid,
    None => "rcpad-hotspot",
};

/// WPA2 passphrase for [`WIFI_SSID`]. Override with `RCPAD_WIFI_PASSWORD`.
pub const WIFI_PASSWORD: &str = match option_env!("RCPAD_WIFI_PASSWORD") {
    Some(pass) => pass,
    None => "12345678",
};

// Display

/// Panel resolution in landscape orientation.
pub const SCREEN_WIDTH: u32 = 320;
pub const SCREEN_HEIGHT: u32 = 240;

/// SPI clock for the ILI9341 (Hz).
pub const DISPLAY_SPI_HZ: u32 = 32_000_000;

// GPIO pin assignments (Pico W)
//
// These are logical names; the actual `embassy_rp::peripherals::*` are
// picked in `main.rs`. All buttons are active-low with internal pull-up.
//
//   Joystick UP     → GP2
//   Joystick DOWN   → GP3
//   Joystick LEFT   → GP4
//   Joystick RIGHT  → GP5
//   Joystick PRESS  → GP6   (speed toggle)
//   Key B           → GP7   (arm toggle)
//   Key C           → GP8   (dispense)
//
//   Display SCK     → GP10 (SPI1)
//   Display MOSI    → GP11 (SPI1)
//   Display MISO    → GP12 (SPI1)
//   Display CS      → GP13
//   Display DC      → GP14
//   Display RST     → GP15
//
//   CYW43 (on-board): PWR GP23, CS GP25, DIO GP24, CLK GP29
