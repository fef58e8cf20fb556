//! Port I/O seam.
//!
//! Everything that programs hardware registers goes through [`PortIo`], so
//! the controller driver and the terminal can run against a fake bus in
//! host tests.

use x86_64::instructions::port::Port;

pub trait PortIo {
    fn read_byte(&mut self, port: u16) -> u8;
    fn write_byte(&mut self, port: u16, value: u8);
}

/// The real I/O address space.
#[derive(Debug)]
pub struct HardwarePorts {
    _private: (),
}

impl HardwarePorts {
    /// # Safety
    ///
    /// Reads and writes through the returned value reach real devices. The
    /// caller must be kernel code running at CPL 0 and must only touch ports
    /// whose side effects it owns.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl PortIo for HardwarePorts {
    fn read_byte(&mut self, port: u16) -> u8 {
        unsafe { Port::<u8>::new(port).read() }
    }

    fn write_byte(&mut self, port: u16, value: u8) {
        unsafe { Port::<u8>::new(port).write(value) }
    }
}
