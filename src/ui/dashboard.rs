//! Dashboard renderer.
//!
//! Only the centre indicator is memoized: asking for the direction that is
//! already on screen draws nothing. The status regions are cheap and change
//! only on a button press, so they repaint whenever asked.

use super::canvas::{Canvas, Color, TextSize, TextStyle};
use super::layout::*;
use crate::command::Direction;
use crate::controller::{Overlay, Redraw, Toggles};

pub struct Dashboard {
    /// Direction currently painted in the indicator zone, if any.
    shown: Option<Direction>,
}

impl Dashboard {
    pub const fn new() -> Self {
        Self { shown: None }
    }

    pub fn shown(&self) -> Option<Direction> {
        self.shown
    }

    /// Splash shown while the Wi-Fi join is pending.
    pub fn draw_connecting<C: Canvas>(&mut self, canvas: &mut C) {
        canvas.fill_screen(Color::Black);
        canvas.draw_text(
            SPLASH_TEXT,
            SPLASH_TEXT_AT,
            TextStyle::new(TextSize::Normal, Color::White).centered(),
        );
        self.shown = None;
    }

    /// Header, link dot and crosshair on a black screen.
    pub fn draw_background<C: Canvas>(&mut self, canvas: &mut C) {
        canvas.fill_screen(Color::Black);
        canvas.fill_rect(HEADER, Color::DarkGrey);
        canvas.draw_text(
            HEADER_TITLE,
            HEADER_TITLE_AT,
            TextStyle::new(TextSize::Normal, Color::White).on(Color::DarkGrey),
        );
        canvas.fill_circle(LINK_DOT_CENTER, LINK_DOT_RADIUS, Color::Green);
        draw_crosshair(canvas);
        self.shown = None;
    }

    /// First full frame once the link is up.
    pub fn draw_initial<C: Canvas>(&mut self, canvas: &mut C, toggles: &Toggles) {
        self.draw_background(canvas);
        self.update_direction(canvas, Direction::Stop);
        draw_arm_status(canvas, toggles.arm_raised);
        draw_speed_status(canvas, toggles.fast_mode);
    }

    /// Apply one tick's redraw request.
    pub fn render<C: Canvas>(&mut self, canvas: &mut C, redraw: &Redraw, toggles: &Toggles) {
        match redraw.overlay {
            Some(Overlay::Show) => self.show_overlay(canvas),
            Some(Overlay::Hide) => self.hide_overlay(canvas),
            None => {}
        }
        if let Some(direction) = redraw.direction {
            self.update_direction(canvas, direction);
        }
        if redraw.arm {
            draw_arm_status(canvas, toggles.arm_raised);
        }
        if redraw.speed {
            draw_speed_status(canvas, toggles.fast_mode);
        }
    }

    /// Repaint the indicator if `direction` differs from what is shown.
    pub fn update_direction<C: Canvas>(&mut self, canvas: &mut C, direction: Direction) {
        if self.shown == Some(direction) {
            return;
        }

        canvas.fill_rect(INDICATOR_ZONE, Color::Black);
        draw_crosshair(canvas);

        match direction {
            Direction::Stop => canvas.fill_circle(CENTER, STOP_RADIUS, STOP_COLOR),
            Direction::Forward => canvas.fill_triangle(FORWARD_SHAPE, FORWARD_COLOR),
            Direction::Backward => canvas.fill_triangle(BACKWARD_SHAPE, BACKWARD_COLOR),
            Direction::Left => canvas.fill_triangle(LEFT_SHAPE, TURN_COLOR),
            Direction::Right => canvas.fill_triangle(RIGHT_SHAPE, TURN_COLOR),
        }

        self.shown = Some(direction);
    }

    fn show_overlay<C: Canvas>(&mut self, canvas: &mut C) {
        canvas.fill_rect(OVERLAY_ZONE, Color::Black);
        canvas.fill_circle(CENTER, OVERLAY_RADIUS, Color::Blue);
        canvas.draw_text(
            OVERLAY_TEXT,
            OVERLAY_TEXT_AT,
            TextStyle::new(TextSize::Large, Color::White)
                .on(Color::Blue)
                .centered(),
        );
        self.shown = None;
    }

    /// The crosshair comes back with the next direction update.
    fn hide_overlay<C: Canvas>(&mut self, canvas: &mut C) {
        canvas.fill_rect(OVERLAY_ZONE, Color::Black);
        self.shown = None;
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_crosshair<C: Canvas>(canvas: &mut C) {
    let (top, bottom) = CROSSHAIR_VERTICAL;
    canvas.draw_line(top, bottom, Color::DarkGrey);
    let (left, right) = CROSSHAIR_HORIZONTAL;
    canvas.draw_line(left, right, Color::DarkGrey);
}

/// The label names what the next press will do.
fn draw_arm_status<C: Canvas>(canvas: &mut C, raised: bool) {
    canvas.fill_rect(ARM_ZONE, Color::Black);
    let (label, color) = if raised {
        ("ARM: DWN", Color::Cyan)
    } else {
        ("ARM: UP", Color::Magenta)
    };
    canvas.draw_text(
        label,
        ARM_TEXT_AT,
        TextStyle::new(TextSize::Normal, color).on(Color::Black),
    );
}

fn draw_speed_status<C: Canvas>(canvas: &mut C, fast: bool) {
    canvas.fill_rect(SPEED_ZONE, Color::Black);
    let (label, color) = if fast {
        ("FAST", Color::Green)
    } else {
        ("SLOW", Color::Orange)
    };
    canvas.draw_text(
        label,
        SPEED_TEXT_AT,
        TextStyle::new(TextSize::Normal, color).on(Color::Black),
    );
}
