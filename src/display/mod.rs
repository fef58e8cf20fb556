//! # Display
//!
//! The display writer: where completed serial lines end up.
//!
//! ## Modules
//!
//! - `framebuffer`: `FramebufferWriter`, an embedded-graphics draw target over
//!   the bootloader's linear framebuffer
//! - `console`: `TextConsole`, a cell grid with a cursor on any draw target
//! - `cursor`: cursor arithmetic for the grid
//! - `color`: `Color` and the 16-color text palette
//!
//! ## Locking
//!
//! `CONSOLE` is only taken with interrupts disabled: boot wraps its writes
//! in `without_interrupts`, and the serial handler runs behind an interrupt
//! gate. Neither can spin on a lock the other holds.

use bootloader_api::BootInfo;
use spin::Mutex;
use x86_64::instructions::interrupts;

use crate::config::DISPLAY_BANNER;

pub mod color;
pub mod console;
pub mod cursor;
pub mod framebuffer;

use console::TextConsole;
use framebuffer::FramebufferWriter;

/// Consumer of completed lines. Synchronous and infallible from the
/// caller's side.
pub trait DisplayWriter {
    fn write_line(&mut self, text: &[u8]);
    fn write_line_with_newline(&mut self, text: &[u8]);
}

pub static CONSOLE: Mutex<Option<TextConsole<FramebufferWriter>>> = Mutex::new(None);

pub fn init_console(boot_info: &'static mut BootInfo) -> Result<(), &'static str> {
    let framebuffer = boot_info
        .framebuffer
        .as_mut()
        .ok_or("bootloader provided no framebuffer")?;

    let mut console = TextConsole::new(FramebufferWriter::new(framebuffer));
    console.clear();
    console.write_line_with_newline(DISPLAY_BANNER);

    interrupts::without_interrupts(|| *CONSOLE.lock() = Some(console));
    Ok(())
}

/// The process-wide console as a [`DisplayWriter`]. Writes are dropped
/// while no console is installed.
pub struct ConsoleHandle;

impl DisplayWriter for ConsoleHandle {
    fn write_line(&mut self, text: &[u8]) {
        if let Some(console) = CONSOLE.lock().as_mut() {
            console.write_line(text);
        }
    }

    fn write_line_with_newline(&mut self, text: &[u8]) {
        if let Some(console) = CONSOLE.lock().as_mut() {
            console.write_line_with_newline(text);
        }
    }
}
