//! Device drivers.
//!
//! - `uart`: 16550 register access on the interrupt path
//! - `line_buffer`: fixed-capacity line with drop-on-full
//! - `serial_terminal`: the COM1 receive state machine
//! - `handler_cell`: lock-free ownership of handler state

pub mod handler_cell;
pub mod line_buffer;
pub mod serial_terminal;
pub mod uart;
