//! # Vector Descriptor
//!
//! One 16-byte long-mode gate. The layout is spelled out field by field and
//! serialised explicitly by [`VectorDescriptor::to_bytes`]; nothing relies on
//! the compiler's choice of layout beyond `repr(C)` with no padding, which a
//! const assertion checks.
//!
//! ```text
//! byte  0..2   handler offset bits 0..16
//! byte  2..4   code segment selector (0x08)
//! byte  4      reserved, zero (IST slot)
//! byte  5      gate type 0x8E: present, DPL 0, interrupt gate
//! byte  6..8   handler offset bits 16..32
//! byte  8..12  handler offset bits 32..64
//! byte 12..16  reserved, zero
//! ```

use core::fmt;

pub const KERNEL_CODE_SELECTOR: u16 = 0x08;
/// Interrupt gate: the CPU clears IF on entry, so the handler never nests.
pub const INTERRUPT_GATE: u8 = 0x8E;
pub const DESCRIPTOR_SIZE: usize = 16;

const PRESENT: u8 = 0x80;

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct VectorDescriptor {
    offset_low: u16,
    selector: u16,
    zero: u8,
    type_attr: u8,
    offset_high: u16,
    offset_upper: u32,
    reserved: u32,
}

const _: () = assert!(core::mem::size_of::<VectorDescriptor>() == DESCRIPTOR_SIZE);

impl VectorDescriptor {
    /// The zero-initialised, not-present descriptor.
    pub const fn missing() -> Self {
        Self {
            offset_low: 0,
            selector: 0,
            zero: 0,
            type_attr: 0,
            offset_high: 0,
            offset_upper: 0,
            reserved: 0,
        }
    }

    pub const fn interrupt_gate(handler: u64) -> Self {
        Self {
            offset_low: (handler & 0xFFFF) as u16,
            selector: KERNEL_CODE_SELECTOR,
            zero: 0,
            type_attr: INTERRUPT_GATE,
            offset_high: ((handler >> 16) & 0xFFFF) as u16,
            offset_upper: (handler >> 32) as u32,
            reserved: 0,
        }
    }

    pub fn handler_address(&self) -> u64 {
        u64::from(self.offset_low)
            | (u64::from(self.offset_high) << 16)
            | (u64::from(self.offset_upper) << 32)
    }

    pub fn selector(&self) -> u16 {
        self.selector
    }

    pub fn type_attr(&self) -> u8 {
        self.type_attr
    }

    pub fn is_present(&self) -> bool {
        self.type_attr & PRESENT != 0
    }

    pub fn is_missing(&self) -> bool {
        *self == Self::missing()
    }

    /// The descriptor exactly as the CPU reads it from memory.
    pub fn to_bytes(&self) -> [u8; DESCRIPTOR_SIZE] {
        let mut bytes = [0u8; DESCRIPTOR_SIZE];
        bytes[0..2].copy_from_slice(&self.offset_low.to_le_bytes());
        bytes[2..4].copy_from_slice(&self.selector.to_le_bytes());
        bytes[4] = self.zero;
        bytes[5] = self.type_attr;
        bytes[6..8].copy_from_slice(&self.offset_high.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.offset_upper.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.reserved.to_le_bytes());
        bytes
    }
}

impl Default for VectorDescriptor {
    fn default() -> Self {
        Self::missing()
    }
}

impl fmt::Debug for VectorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorDescriptor")
            .field("handler", &format_args!("{:#x}", self.handler_address()))
            .field("selector", &format_args!("{:#x}", self.selector))
            .field("type_attr", &format_args!("{:#x}", self.type_attr))
            .field("present", &self.is_present())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_is_sixteen_bytes() {
        assert_eq!(core::mem::size_of::<VectorDescriptor>(), 16);
    }

    #[test]
    fn missing_descriptor_is_all_zero() {
        let entry = VectorDescriptor::missing();
        assert_eq!(entry.to_bytes(), [0u8; 16]);
        assert!(!entry.is_present());
        assert!(entry.is_missing());
    }

    #[test]
    fn gate_below_4g_packs_low_and_high_halves() {
        let entry = VectorDescriptor::interrupt_gate(0x0012_3456);
        assert_eq!(
            entry.to_bytes(),
            [
                0x56, 0x34, // offset bits 0..16
                0x08, 0x00, // selector
                0x00, // zero
                0x8E, // interrupt gate
                0x12, 0x00, // offset bits 16..32
                0x00, 0x00, 0x00, 0x00, // offset bits 32..64
                0x00, 0x00, 0x00, 0x00, // reserved
            ]
        );
    }

    #[test]
    fn gate_in_higher_half_carries_upper_dword() {
        let handler = 0xFFFF_8000_1234_5678;
        let entry = VectorDescriptor::interrupt_gate(handler);
        assert_eq!(
            entry.to_bytes(),
            [
                0x78, 0x56, 0x08, 0x00, 0x00, 0x8E, 0x34, 0x12, 0x00, 0x80, 0xFF, 0xFF, 0x00,
                0x00, 0x00, 0x00,
            ]
        );
        assert_eq!(entry.handler_address(), handler);
        assert_eq!(entry.selector(), KERNEL_CODE_SELECTOR);
        assert_eq!(entry.type_attr(), INTERRUPT_GATE);
        assert!(entry.is_present());
    }
}
