//! # Interrupt Handling Module
//!
//! Brings interrupt dispatch online for the one device this kernel drives.
//!
//! - **GDT**: kernel code at selector 0x08, the selector every gate uses
//! - **Descriptor / IDT**: explicit 16-byte gates in a 256-entry table
//! - **PIC**: 8259 remap, per-line masking and EOI
//! - **Handlers**: the COM1 entry point
//!
//! ## Boot Order
//!
//! ```text
//! gdt::init → idt::init → idt::install_irq_handler(4, ..)
//!           → CONTROLLERS.remap → CONTROLLERS.unmask(4) → sti
//! ```
//!
//! A line is unmasked only after its vector is installed; nothing checks
//! this at runtime, the order in `kernel::init` is the guarantee.

pub mod descriptor;
pub mod gdt;
pub mod handlers;
pub mod idt;
pub mod pic;
