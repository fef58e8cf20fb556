//! Hardware entry points.
//!
//! | IRQ  | Vector | Handler                   |
//! |------|--------|---------------------------|
//! | IRQ4 | 0x24   | COM1 line terminal        |

use x86_64::instructions::interrupts;
use x86_64::structures::idt::InterruptStackFrame;

use crate::config::{LINE_CAPACITY, SERIAL_BASE, SERIAL_IRQ};
use crate::display::ConsoleHandle;
use crate::drivers::handler_cell::HandlerCell;
use crate::drivers::serial_terminal::SerialTerminal;
use crate::drivers::uart::UartRegisters;
use crate::interrupts::pic::CONTROLLERS;
use crate::port::HardwarePorts;

pub type InterruptHandler = extern "x86-interrupt" fn(InterruptStackFrame);

static SERIAL_TERMINAL: HandlerCell<SerialTerminal<LINE_CAPACITY>> =
    HandlerCell::new(SerialTerminal::new(UartRegisters::new(SERIAL_BASE), SERIAL_IRQ));

pub extern "x86-interrupt" fn serial_interrupt_handler(_stack_frame: InterruptStackFrame) {
    debug_assert!(!interrupts::are_enabled(), "serial handler entered with IF set");

    let mut ports = unsafe { HardwarePorts::new() };
    let mut display = ConsoleHandle;

    // Installed as an interrupt gate: IF stays clear until iretq, and this
    // is the cell's only user.
    unsafe {
        SERIAL_TERMINAL
            .with_exclusive(|terminal| terminal.on_interrupt(&mut ports, &CONTROLLERS, &mut display));
    }
}

pub fn handler_address(handler: InterruptHandler) -> u64 {
    handler as usize as u64
}
