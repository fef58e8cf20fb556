//! # Serial Line Terminal Kernel
//!
//! A minimal x86_64 kernel whose only job is to bring interrupt dispatch
//! online and service one device: COM1, driven as a line-buffered, echoing
//! terminal. Completed lines are shown on the framebuffer console.
//!
//! ## Layout
//!
//! - `interrupts`: GDT, vector table, 8259 controller driver, hardware entry points
//! - `drivers`: UART registers and the serial line terminal state machine
//! - `display`: framebuffer text console (the display writer)
//! - `kernel`: boot sequence and component status tracking
//! - `port`: port I/O seam shared by everything that touches hardware
//! - `serial`: kernel log output over COM1
//!
//! The library builds as `no_std` for the kernel and links `std` only for
//! host unit tests, where `testing::FakeBus` stands in for the port bus.

#![cfg_attr(not(test), no_std)]
#![feature(abi_x86_interrupt)]

pub mod config;
pub mod display;
pub mod drivers;
pub mod interrupts;
pub mod kernel;
pub mod port;
pub mod serial;

#[cfg(test)]
mod testing;

pub fn hlt_loop() -> ! {
    loop {
        x86_64::instructions::hlt();
    }
}
