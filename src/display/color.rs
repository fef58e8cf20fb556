//! Color representation and the 16-color text palette
use embedded_graphics::pixelcolor::Rgb888;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Light gray on black, the classic text-mode attribute.
pub const DEFAULT_ATTRIBUTE: u8 = 0x07;

const PALETTE: [Color; 16] = [
    Color::new(0, 0, 0),
    Color::new(0, 0, 170),
    Color::new(0, 170, 0),
    Color::new(0, 170, 170),
    Color::new(170, 0, 0),
    Color::new(170, 0, 170),
    Color::new(170, 85, 0),
    Color::new(170, 170, 170),
    Color::new(85, 85, 85),
    Color::new(85, 85, 255),
    Color::new(85, 255, 85),
    Color::new(85, 255, 255),
    Color::new(255, 85, 85),
    Color::new(255, 85, 255),
    Color::new(255, 255, 85),
    Color::new(255, 255, 255),
];

impl Color {
    pub const BLACK: Color = PALETTE[0];
    pub const LIGHT_GRAY: Color = PALETTE[7];
    pub const WHITE: Color = PALETTE[15];

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Splits a text attribute byte into (foreground, background).
    pub fn from_attribute(attribute: u8) -> (Color, Color) {
        (
            PALETTE[usize::from(attribute & 0x0F)],
            PALETTE[usize::from((attribute >> 4) & 0x0F)],
        )
    }

    pub fn to_rgb888(self) -> Rgb888 {
        Rgb888::new(self.r, self.g, self.b)
    }
}
