//! Controller logic for the rcpad handheld remote.
//!
//! Everything in this library is hardware-agnostic and builds on the host,
//! so the tick logic, command mapping and dashboard rendering can be unit
//! tested without a board attached.
//!
//! Usage: `cargo test --lib` / `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and only compiles with `--features embedded` for `thumbv6m-none-eabi`.
//! It drives this library from a fixed-interval polling loop:
//!
//! ```text
//!  InputPins::sample ─► Controller::tick ─┬─► link::dispatch   (UDP datagrams)
//!                                         └─► Dashboard::render (display)
//! ```

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod command;
pub mod config;
pub mod controller;
pub mod dispense;
pub mod error;
pub mod input;
pub mod latch;
pub mod link;
pub mod ui;

pub use command::Direction;
pub use controller::{Controller, Overlay, Redraw, TickOutput, Toggles};
pub use error::{Error, NetError};
pub use input::{InputPins, InputSnapshot};
pub use link::{Datagram, Peer, Token, Transport};
