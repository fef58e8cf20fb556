//! # Interrupt Vector Table
//!
//! Owns the 256-entry table and loads it into the IDTR.
//!
//! ## Vector Layout
//!
//! | Vector    | Owner                                  |
//! |-----------|----------------------------------------|
//! | 0x00-0x1F | CPU exceptions, never written here     |
//! | 0x20-0x27 | primary controller, IRQ 0-7            |
//! | 0x24      | COM1 (IRQ 4), the only installed entry |
//! | 0x28-0x2F | secondary controller, IRQ 8-15         |
//!
//! The table is loaded once, before interrupts are enabled. After that only
//! the serial slot is written, still during boot with IF clear.

use core::sync::atomic::{AtomicBool, Ordering};

use spin::Mutex;
use x86_64::instructions::tables::lidt;
use x86_64::structures::DescriptorTablePointer;
use x86_64::VirtAddr;

use crate::interrupts::descriptor::{VectorDescriptor, DESCRIPTOR_SIZE};

pub const VECTOR_COUNT: usize = 256;
/// First vector past the CPU-reserved range; IRQ `n` lands on `IRQ_VECTOR_BASE + n`.
pub const IRQ_VECTOR_BASE: u8 = 0x20;
pub const TABLE_LIMIT: u16 = (VECTOR_COUNT * DESCRIPTOR_SIZE - 1) as u16;

#[repr(C, align(16))]
pub struct VectorTable {
    entries: [VectorDescriptor; VECTOR_COUNT],
}

impl VectorTable {
    pub const fn new() -> Self {
        Self {
            entries: [VectorDescriptor::missing(); VECTOR_COUNT],
        }
    }

    pub fn install_vector(&mut self, vector: u8, handler: u64) {
        self.entries[usize::from(vector)] = VectorDescriptor::interrupt_gate(handler);
    }

    pub fn install_irq_handler(&mut self, irq: u8, handler: u64) {
        debug_assert!(irq < 16, "IRQ line {} does not exist", irq);
        self.install_vector(IRQ_VECTOR_BASE + irq, handler);
    }

    pub fn entry(&self, vector: u8) -> &VectorDescriptor {
        &self.entries[usize::from(vector)]
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &VectorDescriptor)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(vector, entry)| (vector as u8, entry))
    }

    /// Base and limit as `lidt` expects them.
    pub fn pointer(&self) -> DescriptorTablePointer {
        DescriptorTablePointer {
            limit: TABLE_LIMIT,
            base: VirtAddr::new(self as *const Self as u64),
        }
    }
}

impl Default for VectorTable {
    fn default() -> Self {
        Self::new()
    }
}

static VECTOR_TABLE: Mutex<VectorTable> = Mutex::new(VectorTable::new());
static LOADED: AtomicBool = AtomicBool::new(false);

/// Points the IDTR at the process-wide table. Only the first call loads.
pub fn init() -> Result<(), &'static str> {
    if LOADED.swap(true, Ordering::AcqRel) {
        return Err("vector table already loaded");
    }

    // The table lives in a static, so its address is stable for the life of
    // the kernel even though the guard is dropped.
    let pointer = VECTOR_TABLE.lock().pointer();
    unsafe { lidt(&pointer) };
    Ok(())
}

pub fn install_irq_handler(irq: u8, handler: u64) {
    VECTOR_TABLE.lock().install_irq_handler(irq, handler);
}

pub fn installed_entry(vector: u8) -> VectorDescriptor {
    *VECTOR_TABLE.lock().entry(vector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interrupts::descriptor::{INTERRUPT_GATE, KERNEL_CODE_SELECTOR};

    #[test]
    fn limit_covers_every_descriptor() {
        assert_eq!(TABLE_LIMIT, 0x0FFF);
        let table = VectorTable::new();
        let pointer = table.pointer();
        assert_eq!(pointer.limit, 0x0FFF);
        assert_eq!(pointer.base.as_u64(), &table as *const VectorTable as u64);
        assert_eq!(pointer.base.as_u64() % 16, 0);
    }

    #[test]
    fn new_table_is_all_missing() {
        let table = VectorTable::new();
        assert!(table.iter().all(|(_, entry)| entry.is_missing()));
        assert_eq!(table.iter().count(), VECTOR_COUNT);
    }

    #[test]
    fn irq_handler_lands_above_reserved_range() {
        let mut table = VectorTable::new();
        table.install_irq_handler(4, 0x0010_2030);

        let entry = table.entry(0x24);
        assert_eq!(entry.handler_address(), 0x0010_2030);
        assert_eq!(entry.selector(), KERNEL_CODE_SELECTOR);
        assert_eq!(entry.type_attr(), INTERRUPT_GATE);
    }

    #[test]
    fn installing_serial_vector_leaves_every_other_slot_untouched() {
        let mut table = VectorTable::new();
        table.install_irq_handler(4, 0xFFFF_8000_0000_1000);

        for (vector, entry) in table.iter() {
            if vector == 0x24 {
                assert!(entry.is_present());
            } else {
                assert!(entry.is_missing(), "vector {:#x} was written", vector);
            }
        }
    }

    #[test]
    fn install_vector_reaches_the_last_slot() {
        let mut table = VectorTable::new();
        table.install_vector(255, 0xABCD);
        assert_eq!(table.entry(255).handler_address(), 0xABCD);
        assert!(table.entry(254).is_missing());
    }
}
