//! Compile-time configuration.
//!
//! The kernel takes no command line and reads no environment; everything
//! tunable lives here.

use bootloader_api::{config::Mapping, BootloaderConfig};

/// Bytes the serial line buffer holds before input is dropped.
pub const LINE_CAPACITY: usize = 256;

/// COM1.
pub const SERIAL_BASE: u16 = 0x3F8;
/// IRQ line COM1 raises on the primary controller.
pub const SERIAL_IRQ: u8 = 4;

/// Written to the display in front of every completed line.
pub const PROMPT: &[u8] = b"> ";
/// Echoed once per buffered byte when a line completes.
pub const ERASE_MARKER: u8 = b'-';

pub const SERIAL_BANNER: &str = "\n\nminimal kernel with serial communication support\n\n";
pub const DISPLAY_BANNER: &[u8] = b"minimal kernel with framebuffer text console";

pub const BOOTLOADER_CONFIG: BootloaderConfig = {
    let mut config = BootloaderConfig::new_default();
    config.mappings.framebuffer = Mapping::Dynamic;
    config.kernel_stack_size = 64 * 1024;
    config
};
