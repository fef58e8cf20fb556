#![no_std]
#![no_main]

extern crate rlibc;

use bootloader_api::{entry_point, BootInfo};
use core::panic::PanicInfo;

use serialterm_kernel::config::BOOTLOADER_CONFIG;
use serialterm_kernel::kernel::{all_components_ready, init_kernel};
use serialterm_kernel::{hlt_loop, log_error, log_info, serial_println};

entry_point!(kernel_main, config = &BOOTLOADER_CONFIG);

pub fn kernel_main(boot_info: &'static mut BootInfo) -> ! {
    match init_kernel(boot_info) {
        Ok(()) if all_components_ready() => log_info!("all components ready, idling"),
        Ok(()) => log_info!("running with reduced components, idling"),
        Err(e) => log_error!("kernel initialization failed: {}", e),
    }

    // Everything from here on happens in the serial interrupt handler.
    hlt_loop()
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    let msg = info.message();
    let loc = info.location();
    serial_println!("PANIC : {} | {:?}", msg, loc);

    hlt_loop()
}
