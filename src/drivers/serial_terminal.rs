//! # Serial Line Terminal
//!
//! The COM1 receive handler: echoes every byte, assembles lines in a
//! fixed-capacity buffer and hands completed lines to the display.
//!
//! ## Per Interrupt
//!
//! 1. Acknowledge the controller, unconditionally and first.
//! 2. If the UART reports no pending interrupt, stop (spurious or foreign
//!    cause on the shared vector).
//! 3. Drain every byte the UART holds, one [`SerialTerminal::feed`] each.
//!
//! ## Per Byte
//!
//! - CR is read as LF.
//! - The byte is echoed before anything else, so the user sees it even
//!   when the buffer is full and it is about to be dropped.
//! - LF completes the line: forward it (if there was room for the
//!   terminator), echo one erase marker per buffered byte plus LF, reset.
//! - Anything else is buffered, or dropped once the buffer is full.

use crate::config::{ERASE_MARKER, PROMPT};
use crate::display::DisplayWriter;
use crate::drivers::line_buffer::LineBuffer;
use crate::drivers::uart::UartRegisters;
use crate::interrupts::pic::ChainedControllers;
use crate::port::PortIo;

const CARRIAGE_RETURN: u8 = b'\r';
const LINE_FEED: u8 = b'\n';

pub struct SerialTerminal<const C: usize> {
    uart: UartRegisters,
    irq: u8,
    line: LineBuffer<C>,
}

impl<const C: usize> SerialTerminal<C> {
    pub const fn new(uart: UartRegisters, irq: u8) -> Self {
        Self {
            uart,
            irq,
            line: LineBuffer::new(),
        }
    }

    pub fn line(&self) -> &LineBuffer<C> {
        &self.line
    }

    /// Handler body. Must run with maskable interrupts disabled.
    pub fn on_interrupt(
        &mut self,
        io: &mut impl PortIo,
        controllers: &ChainedControllers,
        display: &mut impl DisplayWriter,
    ) {
        // Before any early return: a missed EOI silences the line for good.
        controllers.acknowledge(io, self.irq);

        if !self.uart.interrupt_pending(io) {
            return;
        }

        while self.uart.data_ready(io) {
            let byte = self.uart.read_data(io);
            self.feed(byte, io, display);
        }
    }

    pub fn feed(&mut self, byte: u8, io: &mut impl PortIo, display: &mut impl DisplayWriter) {
        let byte = if byte == CARRIAGE_RETURN { LINE_FEED } else { byte };

        self.uart.write_data(io, byte);

        if byte == LINE_FEED {
            self.complete_line(io, display);
        } else {
            self.line.push(byte);
        }
    }

    fn complete_line(&mut self, io: &mut impl PortIo, display: &mut impl DisplayWriter) {
        if let Some(text) = self.line.completed_line() {
            display.write_line(PROMPT);
            display.write_line_with_newline(text);
        }

        // One marker per buffered byte, capped at C even if more was typed.
        for _ in 0..self.line.len() {
            self.uart.write_data(io, ERASE_MARKER);
        }
        self.uart.write_data(io, LINE_FEED);

        self.line.clear();
    }
}
