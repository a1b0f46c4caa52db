//! Drawing surface used by the dashboard.
//!
//! [`Canvas`] is the small set of primitives the dashboard needs. The
//! firmware wraps its `embedded-graphics` panel driver in
//! [`GraphicsCanvas`]; tests substitute a recorder.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_9X15};
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

/// Fixed palette (RGB565 values of the usual TFT colour names).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    White,
    DarkGrey,
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    Orange,
}

impl Color {
    pub const fn raw(self) -> u16 {
        match self {
            Color::Black => 0x0000,
            Color::White => 0xFFFF,
            Color::DarkGrey => 0x7BEF,
            Color::Red => 0xF800,
            Color::Green => 0x07E0,
            Color::Blue => 0x001F,
            Color::Yellow => 0xFFE0,
            Color::Cyan => 0x07FF,
            Color::Magenta => 0xF81F,
            Color::Orange => 0xFDA0,
        }
    }
}

impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self {
        Rgb565::from(RawU16::new(color.raw()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    /// Status labels.
    Normal,
    /// Overlay banner.
    Large,
}

/// Horizontal anchor of the text position. Vertically the position is
/// always the top of the glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Anchor {
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    pub size: TextSize,
    pub color: Color,
    /// Opaque glyph background; `None` draws glyphs only.
    pub background: Option<Color>,
    pub anchor: Anchor,
}

impl TextStyle {
    pub const fn new(size: TextSize, color: Color) -> Self {
        Self {
            size,
            color,
            background: None,
            anchor: Anchor::Left,
        }
    }

    pub const fn on(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    pub const fn centered(mut self) -> Self {
        self.anchor = Anchor::Center;
        self
    }
}

/// Primitive drawing operations. Failures are not reported; a dropped
/// frame is repainted on the next change.
pub trait Canvas {
    fn fill_screen(&mut self, color: Color);
    fn fill_rect(&mut self, area: Rectangle, color: Color);
    fn fill_triangle(&mut self, vertices: [Point; 3], color: Color);
    fn fill_circle(&mut self, center: Point, radius: u32, color: Color);
    fn draw_line(&mut self, from: Point, to: Point, color: Color);
    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle);
}

/// [`Canvas`] over any RGB565 `embedded-graphics` draw target.
pub struct GraphicsCanvas<D> {
    target: D,
}

impl<D> GraphicsCanvas<D> {
    pub fn new(target: D) -> Self {
        Self { target }
    }

    pub fn inner(&self) -> &D {
        &self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> Canvas for GraphicsCanvas<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn fill_screen(&mut self, color: Color) {
        let _ = self.target.clear(color.into());
    }

    fn fill_rect(&mut self, area: Rectangle, color: Color) {
        let _ = area
            .into_styled(PrimitiveStyle::with_fill(color.into()))
            .draw(&mut self.target);
    }

    fn fill_triangle(&mut self, vertices: [Point; 3], color: Color) {
        let [a, b, c] = vertices;
        let _ = Triangle::new(a, b, c)
            .into_styled(PrimitiveStyle::with_fill(color.into()))
            .draw(&mut self.target);
    }

    fn fill_circle(&mut self, center: Point, radius: u32, color: Color) {
        let _ = Circle::with_center(center, radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(color.into()))
            .draw(&mut self.target);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let _ = Line::new(from, to)
            .into_styled(PrimitiveStyle::with_stroke(color.into(), 1))
            .draw(&mut self.target);
    }

    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle) {
        let font = match style.size {
            TextSize::Normal => &FONT_9X15,
            TextSize::Large => &FONT_10X20,
        };
        let mut glyphs = MonoTextStyleBuilder::new()
            .font(font)
            .text_color(style.color.into());
        if let Some(bg) = style.background {
            glyphs = glyphs.background_color(bg.into());
        }
        let alignment = match style.anchor {
            Anchor::Left => Alignment::Left,
            Anchor::Center => Alignment::Center,
        };
        let layout = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(Baseline::Top)
            .build();
        let _ = Text::with_text_style(text, at, glyphs.build(), layout).draw(&mut self.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_graphics::prelude::*;
    use embedded_graphics::Pixel;

    /// 320×240 RGB565 frame buffer.
    struct Frame {
        pixels: std::vec::Vec<Rgb565>,
    }

    impl Frame {
        fn new() -> Self {
            Self {
                pixels: vec![Rgb565::BLACK; 320 * 240],
            }
        }

        fn at(&self, x: i32, y: i32) -> Rgb565 {
            self.pixels[(y * 320 + x) as usize]
        }

        fn count(&self, color: Color) -> usize {
            let c: Rgb565 = color.into();
            self.pixels.iter().filter(|&&p| p == c).count()
        }
    }

    impl OriginDimensions for Frame {
        fn size(&self) -> Size {
            Size::new(320, 240)
        }
    }

    impl DrawTarget for Frame {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, c) in pixels {
                if (0..320).contains(&p.x) && (0..240).contains(&p.y) {
                    self.pixels[(p.y * 320 + p.x) as usize] = c;
                }
            }
            Ok(())
        }
    }

    #[test]
    fn palette_maps_to_rgb565() {
        assert_eq!(Rgb565::from(Color::Red), Rgb565::RED);
        assert_eq!(Rgb565::from(Color::Green), Rgb565::GREEN);
        assert_eq!(Rgb565::from(Color::Blue), Rgb565::BLUE);
        assert_eq!(Rgb565::from(Color::Black), Rgb565::BLACK);
        assert_eq!(Rgb565::from(Color::White), Rgb565::WHITE);
    }

    #[test]
    fn fill_rect_covers_exactly_the_area() {
        let mut canvas = GraphicsCanvas::new(Frame::new());
        canvas.fill_rect(Rectangle::new(Point::new(10, 20), Size::new(5, 4)), Color::Cyan);
        let frame = canvas.into_inner();
        assert_eq!(frame.count(Color::Cyan), 20);
        assert_eq!(frame.at(10, 20), Color::Cyan.into());
        assert_eq!(frame.at(14, 23), Color::Cyan.into());
        assert_eq!(frame.at(15, 23), Rgb565::BLACK);
    }

    #[test]
    fn circle_radius_reaches_edge() {
        let mut canvas = GraphicsCanvas::new(Frame::new());
        canvas.fill_circle(Point::new(160, 140), 40, Color::Red);
        let frame = canvas.inner();
        assert_eq!(frame.at(160, 140), Color::Red.into());
        assert_eq!(frame.at(160, 140 - 40), Color::Red.into());
        assert_eq!(frame.at(160, 140 - 42), Rgb565::BLACK);
    }

    #[test]
    fn fill_screen_clears_everything() {
        let mut canvas = GraphicsCanvas::new(Frame::new());
        canvas.fill_screen(Color::Orange);
        assert_eq!(canvas.inner().count(Color::Orange), 320 * 240);
    }

    #[test]
    fn text_with_background_paints_its_box() {
        let mut canvas = GraphicsCanvas::new(Frame::new());
        canvas.draw_text(
            "FAST",
            Point::new(10, 210),
            TextStyle::new(TextSize::Normal, Color::Green).on(Color::Blue),
        );
        let frame = canvas.inner();
        assert!(frame.count(Color::Green) > 0);
        assert!(frame.count(Color::Blue) > 0);
        // Top-left anchored: nothing above the requested row.
        assert!((0..320).all(|x| frame.at(x, 209) == Rgb565::BLACK));
    }

    #[test]
    fn line_draws_both_ends() {
        let mut canvas = GraphicsCanvas::new(Frame::new());
        canvas.draw_line(Point::new(60, 140), Point::new(260, 140), Color::DarkGrey);
        let frame = canvas.inner();
        assert_eq!(frame.at(60, 140), Color::DarkGrey.into());
        assert_eq!(frame.at(260, 140), Color::DarkGrey.into());
        assert_eq!(frame.count(Color::DarkGrey), 201);
    }
}
