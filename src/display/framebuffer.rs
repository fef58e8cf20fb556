//! Framebuffer writer using embedded-graphics
use bootloader_api::info::{FrameBuffer, PixelFormat};
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::{Rgb888, RgbColor},
    Pixel,
};

pub struct FramebufferWriter {
    framebuffer: &'static mut [u8],
    pub width: usize,
    pub height: usize,
    pub stride: usize,
    pub bytes_per_pixel: usize,
    format: PixelFormat,
}

impl FramebufferWriter {
    pub fn new(framebuffer: &'static mut FrameBuffer) -> Self {
        let info = framebuffer.info();

        Self {
            framebuffer: framebuffer.buffer_mut(),
            width: info.width,
            height: info.height,
            stride: info.stride,
            bytes_per_pixel: info.bytes_per_pixel,
            format: info.pixel_format,
        }
    }

    fn write_pixel(&mut self, x: usize, y: usize, color: Rgb888) {
        let offset = (y * self.stride + x) * self.bytes_per_pixel;
        let Some(pixel) = self.framebuffer.get_mut(offset..offset + self.bytes_per_pixel) else {
            return;
        };

        match self.format {
            PixelFormat::Bgr => {
                pixel[0] = color.b();
                pixel[1] = color.g();
                pixel[2] = color.r();
            }
            PixelFormat::U8 => {
                let luma = (u16::from(color.r()) + u16::from(color.g()) + u16::from(color.b())) / 3;
                pixel[0] = luma as u8;
            }
            _ => {
                pixel[0] = color.r();
                pixel[1] = color.g();
                pixel[2] = color.b();
            }
        }
        if self.bytes_per_pixel == 4 {
            pixel[3] = 255;
        }
    }
}

impl DrawTarget for FramebufferWriter {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
                continue;
            }
            self.write_pixel(x as usize, y as usize, color);
        }
        Ok(())
    }
}

impl OriginDimensions for FramebufferWriter {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}
