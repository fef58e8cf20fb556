//! Kernel initialization phases
use bootloader_api::BootInfo;

use crate::config::{SERIAL_BANNER, SERIAL_BASE, SERIAL_IRQ};
use crate::display;
use crate::drivers::uart::UartRegisters;
use crate::interrupts::handlers::{handler_address, serial_interrupt_handler};
use crate::interrupts::{gdt, idt, pic::CONTROLLERS};
use crate::kernel::status::{register_component, update_component_status, InitStatus};
use crate::port::HardwarePorts;
use crate::{log_error, log_info, serial, serial_print, serial_println};

const COM1: UartRegisters = UartRegisters::new(SERIAL_BASE);

const PHASES: [&str; 7] = [
    "Serial Console",
    "Segmentation",
    "Vector Table",
    "Serial Vector",
    "Interrupt Controller",
    "Serial Receive",
    "Display",
];

/// Boot sequence. Strictly ordered: the vector is installed before its line
/// is unmasked, and the controllers are remapped before interrupts are on.
pub fn init_kernel(boot_info: &'static mut BootInfo) -> Result<(), &'static str> {
    for name in PHASES {
        register_component(name)?;
    }

    init_phase("Serial Console", init_serial_console)?;

    serial_println!("╔════════════════════════════════════════╗");
    serial_println!("║     Serial Terminal Kernel Startup     ║");
    serial_println!("╚════════════════════════════════════════╝\n");

    init_phase("Segmentation", gdt::init)?;
    init_phase("Vector Table", idt::init)?;
    init_phase("Serial Vector", install_serial_vector)?;
    init_phase("Interrupt Controller", init_controllers)?;
    init_phase("Serial Receive", enable_serial_receive)?;

    x86_64::instructions::interrupts::enable();

    // Headless is fine: completed lines are simply not shown.
    if let Err(e) = init_phase("Display", || display::init_console(boot_info)) {
        log_error!("continuing without display: {}", e);
    }

    serial_print!("{}", SERIAL_BANNER);
    Ok(())
}

fn init_phase(
    name: &'static str,
    init_fn: impl FnOnce() -> Result<(), &'static str>,
) -> Result<(), &'static str> {
    update_component_status(name, InitStatus::InProgress);

    match init_fn() {
        Ok(()) => {
            update_component_status(name, InitStatus::Completed);
            log_info!("{} initialized", name);
            Ok(())
        }
        Err(e) => {
            update_component_status(name, InitStatus::Failed(e));
            log_error!("{} failed: {}", name, e);
            Err(e)
        }
    }
}

/// Line settings for logging, with the receive interrupt held off until the
/// vector exists.
fn init_serial_console() -> Result<(), &'static str> {
    serial::init_serial()?;
    let mut ports = unsafe { HardwarePorts::new() };
    COM1.disable_interrupts(&mut ports);
    Ok(())
}

fn install_serial_vector() -> Result<(), &'static str> {
    let handler = handler_address(serial_interrupt_handler);
    idt::install_irq_handler(SERIAL_IRQ, handler);

    let vector = CONTROLLERS.vector_for(SERIAL_IRQ);
    if idt::installed_entry(vector).handler_address() != handler {
        return Err("serial vector did not take");
    }
    log_info!("IRQ{} -> vector {:#x} -> {:#x}", SERIAL_IRQ, vector, handler);
    Ok(())
}

fn init_controllers() -> Result<(), &'static str> {
    let mut ports = unsafe { HardwarePorts::new() };
    CONTROLLERS.remap(&mut ports);
    CONTROLLERS.unmask(&mut ports, SERIAL_IRQ);

    let (primary, secondary) = CONTROLLERS.masks(&mut ports);
    log_info!("PIC masks {:#04x}/{:#04x}", primary, secondary);
    Ok(())
}

fn enable_serial_receive() -> Result<(), &'static str> {
    let mut ports = unsafe { HardwarePorts::new() };
    COM1.enable_receive_interrupt(&mut ports);
    Ok(())
}
