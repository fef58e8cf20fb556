//! 16550 UART register access for the interrupt path.
//!
//! Line settings are programmed once at boot by `uart_16550`; the handler
//! only needs the status, identification and data registers, which it reads
//! through [`PortIo`] so the terminal can be tested off-target.

use crate::port::PortIo;

const DATA: u16 = 0;
const INTERRUPT_ENABLE: u16 = 1;
const INTERRUPT_IDENTIFICATION: u16 = 2;
const LINE_STATUS: u16 = 5;

/// IIR bit 0 is active low: clear means an interrupt is pending.
const IIR_NO_INTERRUPT_PENDING: u8 = 0x01;
const LSR_DATA_READY: u8 = 0x01;
const IER_RECEIVED_DATA: u8 = 0x01;

#[derive(Debug, Clone, Copy)]
pub struct UartRegisters {
    base: u16,
}

impl UartRegisters {
    pub const fn new(base: u16) -> Self {
        Self { base }
    }

    pub fn base(&self) -> u16 {
        self.base
    }

    pub fn interrupt_pending(&self, io: &mut impl PortIo) -> bool {
        io.read_byte(self.base + INTERRUPT_IDENTIFICATION) & IIR_NO_INTERRUPT_PENDING == 0
    }

    pub fn data_ready(&self, io: &mut impl PortIo) -> bool {
        io.read_byte(self.base + LINE_STATUS) & LSR_DATA_READY != 0
    }

    pub fn read_data(&self, io: &mut impl PortIo) -> u8 {
        io.read_byte(self.base + DATA)
    }

    pub fn write_data(&self, io: &mut impl PortIo, byte: u8) {
        io.write_byte(self.base + DATA, byte);
    }

    pub fn disable_interrupts(&self, io: &mut impl PortIo) {
        io.write_byte(self.base + INTERRUPT_ENABLE, 0);
    }

    pub fn enable_receive_interrupt(&self, io: &mut impl PortIo) {
        io.write_byte(self.base + INTERRUPT_ENABLE, IER_RECEIVED_DATA);
    }
}
