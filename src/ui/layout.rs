//! Fixed screen geometry, 320×240 landscape.
//!
//! ```text
//!  0          60        160        260      320
//!  ┌──────────────────────────────────────────┐ 0
//!  │ RC CONTROL                            ●  │ header
//!  ├──────────────────────────────┬───────────┤ 30
//!  │        ┌──────────────────── │ ARM: UP   │ 35..60
//!  │        │          │          └───────────┤
//!  │        │ ─────────┼───────── │           │ 140
//!  │        │          │          │           │
//!  ├────────┤  indicator zone     │           │ 200
//!  │ FAST   │                     │           │
//!  └──────────────────────────────────────────┘ 240
//! ```

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use super::canvas::Color;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

// Header

pub const HEADER: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(SCREEN_WIDTH, 30));
pub const HEADER_TITLE: &str = "RC CONTROL";
pub const HEADER_TITLE_AT: Point = Point::new(10, 8);
pub const LINK_DOT_CENTER: Point = Point::new(300, 15);
pub const LINK_DOT_RADIUS: u32 = 6;

// Crosshair

pub const CROSSHAIR_VERTICAL: (Point, Point) = (Point::new(160, 60), Point::new(160, 220));
pub const CROSSHAIR_HORIZONTAL: (Point, Point) = (Point::new(60, 140), Point::new(260, 140));

// Centre indicator

pub const INDICATOR_ZONE: Rectangle = Rectangle::new(Point::new(60, 40), Size::new(200, 190));
pub const CENTER: Point = Point::new(160, 140);

pub const STOP_RADIUS: u32 = 40;
pub const STOP_COLOR: Color = Color::Red;

pub const FORWARD_SHAPE: [Point; 3] =
    [Point::new(160, 60), Point::new(100, 160), Point::new(220, 160)];
pub const FORWARD_COLOR: Color = Color::Green;

pub const BACKWARD_SHAPE: [Point; 3] =
    [Point::new(160, 210), Point::new(100, 120), Point::new(220, 120)];
pub const BACKWARD_COLOR: Color = Color::Blue;

pub const LEFT_SHAPE: [Point; 3] =
    [Point::new(60, 140), Point::new(140, 80), Point::new(140, 200)];
pub const RIGHT_SHAPE: [Point; 3] =
    [Point::new(260, 140), Point::new(180, 80), Point::new(180, 200)];
pub const TURN_COLOR: Color = Color::Yellow;

// Status regions

pub const ARM_ZONE: Rectangle = Rectangle::new(Point::new(200, 35), Size::new(120, 25));
pub const ARM_TEXT_AT: Point = Point::new(215, 40);

pub const SPEED_ZONE: Rectangle =
    Rectangle::new(Point::new(0, 200), Size::new(120, SCREEN_HEIGHT - 200));
pub const SPEED_TEXT_AT: Point = Point::new(10, 210);

// Dispense overlay

pub const OVERLAY_ZONE: Rectangle = Rectangle::new(Point::new(50, 40), Size::new(220, 190));
pub const OVERLAY_RADIUS: u32 = 70;
pub const OVERLAY_TEXT: &str = "DISPENSE";
pub const OVERLAY_TEXT_AT: Point = Point::new(160, 130);

// Splash

pub const SPLASH_TEXT: &str = "CONNECTING...";
pub const SPLASH_TEXT_AT: Point = Point::new(160, 100);
