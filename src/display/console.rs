use embedded_graphics::{
    mono_font::{ascii::FONT_10X20, MonoTextStyle, MonoTextStyleBuilder},
    pixelcolor::Rgb888,
    prelude::*,
    text::{Baseline, Text},
};

use crate::display::color::{Color, DEFAULT_ATTRIBUTE};
use crate::display::cursor::TextCursor;
use crate::display::DisplayWriter;

pub const CELL_WIDTH: u32 = 10;
pub const CELL_HEIGHT: u32 = 20;

const REPLACEMENT: char = '?';

/// A text screen drawn onto any RGB draw target.
///
/// Bytes are cells: printable ASCII is drawn, `\n` moves to the next row,
/// anything else shows as `?`. When the cursor runs off the last row the
/// screen is cleared and writing resumes at the top.
pub struct TextConsole<T> {
    target: T,
    cursor: TextCursor,
    style: MonoTextStyle<'static, Rgb888>,
    background: Color,
}

impl<T> TextConsole<T>
where
    T: DrawTarget<Color = Rgb888> + OriginDimensions,
{
    pub fn new(target: T) -> Self {
        let size = target.size();
        let (foreground, background) = Color::from_attribute(DEFAULT_ATTRIBUTE);
        let style = MonoTextStyleBuilder::new()
            .font(&FONT_10X20)
            .text_color(foreground.to_rgb888())
            .background_color(background.to_rgb888())
            .build();

        Self {
            target,
            cursor: TextCursor::new(
                (size.width / CELL_WIDTH) as usize,
                (size.height / CELL_HEIGHT) as usize,
            ),
            style,
            background,
        }
    }

    pub fn cursor(&self) -> &TextCursor {
        &self.cursor
    }

    pub fn clear(&mut self) {
        self.target.clear(self.background.to_rgb888()).ok();
        self.cursor.reset();
    }

    pub fn write_bytes(&mut self, text: &[u8]) {
        for &byte in text {
            self.write_byte(byte);
        }
    }

    fn write_byte(&mut self, byte: u8) {
        let wrapped = match byte {
            b'\n' => self.cursor.newline(),
            _ => {
                self.draw_cell(byte);
                self.cursor.advance()
            }
        };
        if wrapped {
            self.clear();
        }
    }

    fn draw_cell(&mut self, byte: u8) {
        let ch = if byte.is_ascii_graphic() || byte == b' ' {
            byte as char
        } else {
            REPLACEMENT
        };
        let (column, row) = self.cursor.position();
        let origin = Point::new(
            (column as u32 * CELL_WIDTH) as i32,
            (row as u32 * CELL_HEIGHT) as i32,
        );

        let mut buf = [0u8; 4];
        Text::with_baseline(ch.encode_utf8(&mut buf), origin, self.style, Baseline::Top)
            .draw(&mut self.target)
            .ok();
    }
}

impl<T> DisplayWriter for TextConsole<T>
where
    T: DrawTarget<Color = Rgb888> + OriginDimensions,
{
    fn write_line(&mut self, text: &[u8]) {
        self.write_bytes(text);
    }

    fn write_line_with_newline(&mut self, text: &[u8]) {
        self.write_bytes(text);
        self.write_byte(b'\n');
    }
}
