//! # Programmable Interrupt Controller (8259 PIC)
//!
//! Drives the two cascaded 8259 chips directly over port I/O.
//!
//! ## PIC Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │   PIC 1     │     │   PIC 2     │
//! │  (Primary)  │◀────│ (Secondary) │
//! │ IRQ 0-7     │     │ IRQ 8-15    │
//! │ 0x20 / 0x21 │     │ 0xA0 / 0xA1 │
//! └─────────────┘     └─────────────┘
//!       │
//!       ▼
//!     CPU
//! ```
//!
//! ## Vector Remapping
//!
//! Out of reset the controllers raise vectors that collide with CPU
//! exceptions. `remap` moves them:
//! - PIC 1: vectors 0x20-0x27 (IRQ 0-7)
//! - PIC 2: vectors 0x28-0x2F (IRQ 8-15)
//!
//! and leaves every line masked. A device opts in with `unmask` only after
//! its vector is installed.

use crate::port::PortIo;

pub const PRIMARY_COMMAND: u16 = 0x20;
pub const PRIMARY_DATA: u16 = 0x21;
pub const SECONDARY_COMMAND: u16 = 0xA0;
pub const SECONDARY_DATA: u16 = 0xA1;

pub const PRIMARY_OFFSET: u8 = 0x20;
pub const SECONDARY_OFFSET: u8 = 0x28;

/// ICW1: edge triggered, cascade, ICW4 follows.
const ICW1_INIT: u8 = 0x11;
/// ICW3 as written to both chips.
const ICW3_CASCADE: u8 = 0x00;
/// ICW4: 8086 mode.
const ICW4_8086: u8 = 0x01;
const END_OF_INTERRUPT: u8 = 0x20;
const ALL_MASKED: u8 = 0xFF;

const LINES_PER_CONTROLLER: u8 = 8;

#[derive(Debug, Clone, Copy)]
struct Controller {
    offset: u8,
    command: u16,
    data: u16,
}

impl Controller {
    fn handles_vector(&self, vector: u8) -> bool {
        self.offset <= vector && vector < self.offset + LINES_PER_CONTROLLER
    }

    fn end_of_interrupt(&self, io: &mut impl PortIo) {
        io.write_byte(self.command, END_OF_INTERRUPT);
    }

    fn read_mask(&self, io: &mut impl PortIo) -> u8 {
        io.read_byte(self.data)
    }

    fn write_mask(&self, io: &mut impl PortIo, mask: u8) {
        io.write_byte(self.data, mask);
    }
}

/// The primary/secondary pair. Holds only wiring; the mask state lives in
/// the chips and is read back on every change.
#[derive(Debug)]
pub struct ChainedControllers {
    primary: Controller,
    secondary: Controller,
}

impl ChainedControllers {
    pub const fn new() -> Self {
        Self {
            primary: Controller {
                offset: PRIMARY_OFFSET,
                command: PRIMARY_COMMAND,
                data: PRIMARY_DATA,
            },
            secondary: Controller {
                offset: SECONDARY_OFFSET,
                command: SECONDARY_COMMAND,
                data: SECONDARY_DATA,
            },
        }
    }

    /// Runs the ICW1-ICW4 handshake on both chips and masks every line.
    ///
    /// Each step goes to both controllers before the next step starts.
    pub fn remap(&self, io: &mut impl PortIo) {
        io.write_byte(self.primary.command, ICW1_INIT);
        io.write_byte(self.secondary.command, ICW1_INIT);

        io.write_byte(self.primary.data, self.primary.offset);
        io.write_byte(self.secondary.data, self.secondary.offset);

        io.write_byte(self.primary.data, ICW3_CASCADE);
        io.write_byte(self.secondary.data, ICW3_CASCADE);

        io.write_byte(self.primary.data, ICW4_8086);
        io.write_byte(self.secondary.data, ICW4_8086);

        self.primary.write_mask(io, ALL_MASKED);
        self.secondary.write_mask(io, ALL_MASKED);
    }

    pub fn mask(&self, io: &mut impl PortIo, irq: u8) {
        let (controller, bit) = self.owner(irq);
        let mask = controller.read_mask(io) | bit;
        controller.write_mask(io, mask);
    }

    /// Lets `irq` reach the CPU. Its vector must already be installed.
    pub fn unmask(&self, io: &mut impl PortIo, irq: u8) {
        let (controller, bit) = self.owner(irq);
        let mask = controller.read_mask(io) & !bit;
        controller.write_mask(io, mask);
    }

    /// (primary, secondary) mask registers; a set bit is a disabled line.
    pub fn masks(&self, io: &mut impl PortIo) -> (u8, u8) {
        (self.primary.read_mask(io), self.secondary.read_mask(io))
    }

    /// Sends EOI for `irq`. Lines on the secondary need both chips told.
    pub fn acknowledge(&self, io: &mut impl PortIo, irq: u8) {
        if irq >= LINES_PER_CONTROLLER {
            self.secondary.end_of_interrupt(io);
        }
        self.primary.end_of_interrupt(io);
    }

    pub fn vector_for(&self, irq: u8) -> u8 {
        let (controller, _) = self.owner(irq);
        controller.offset + irq % LINES_PER_CONTROLLER
    }

    pub fn handles_vector(&self, vector: u8) -> bool {
        self.primary.handles_vector(vector) || self.secondary.handles_vector(vector)
    }

    fn owner(&self, irq: u8) -> (&Controller, u8) {
        debug_assert!(irq < 2 * LINES_PER_CONTROLLER, "IRQ line {} does not exist", irq);
        if irq < LINES_PER_CONTROLLER {
            (&self.primary, 1 << irq)
        } else {
            (&self.secondary, 1 << (irq - LINES_PER_CONTROLLER))
        }
    }
}

impl Default for ChainedControllers {
    fn default() -> Self {
        Self::new()
    }
}

pub static CONTROLLERS: ChainedControllers = ChainedControllers::new();
