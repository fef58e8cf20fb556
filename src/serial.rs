use crate::config::SERIAL_BASE;
use spin::Mutex;
use uart_16550::SerialPort;

pub static SERIAL: Mutex<SerialPort> = Mutex::new(unsafe { SerialPort::new(SERIAL_BASE) });

/// Programs baud rate, framing, FIFO and modem control on COM1.
///
/// `SerialPort::init` finishes by enabling the received-data interrupt; the
/// boot sequence switches it off again until the vector is installed.
pub fn init_serial() -> Result<(), &'static str> {
    x86_64::instructions::interrupts::without_interrupts(|| SERIAL.lock().init());
    Ok(())
}

#[doc(hidden)]
pub fn _print(args: ::core::fmt::Arguments) {
    use core::fmt::Write;
    use x86_64::instructions::interrupts;

    // A log line must not interleave with the terminal handler's echo.
    interrupts::without_interrupts(|| {
        let _ = SERIAL.lock().write_fmt(args);
    });
}

/// Prints to the host through the serial interface.
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {
        $crate::serial::_print(format_args!($($arg)*))
    };
}

/// Prints to the host through the serial interface, appending a newline.
#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($fmt:expr) => ($crate::serial_print!(concat!($fmt, "\n")));
    ($fmt:expr, $($arg:tt)*) => ($crate::serial_print!(
        concat!($fmt, "\n"), $($arg)*));
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::serial_println!("[INFO] {}", format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::serial_println!("[ERR] {}", format_args!($($arg)*))
    };
}
