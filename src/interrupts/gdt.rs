// gdt.rs
use spin::Lazy;
use x86_64::structures::gdt::{Descriptor, GlobalDescriptorTable, SegmentSelector};

use crate::interrupts::descriptor::KERNEL_CODE_SELECTOR;

struct Selectors {
    code_selector: SegmentSelector,
    data_selector: SegmentSelector,
}

// Null at index 0, so kernel code is selector 0x08: the value every vector
// descriptor is built with.
static GDT: Lazy<(GlobalDescriptorTable, Selectors)> = Lazy::new(|| {
    let mut gdt = GlobalDescriptorTable::new();

    let code_selector = gdt.append(Descriptor::kernel_code_segment());
    let data_selector = gdt.append(Descriptor::kernel_data_segment());

    (
        gdt,
        Selectors {
            code_selector,
            data_selector,
        },
    )
});

pub fn init() -> Result<(), &'static str> {
    let (gdt, selectors) = &*GDT;
    if selectors.code_selector.0 != KERNEL_CODE_SELECTOR {
        return Err("kernel code segment is not at selector 0x08");
    }

    gdt.load();

    unsafe {
        use x86_64::instructions::segmentation::{Segment, CS, DS, ES, SS};

        CS::set_reg(selectors.code_selector);
        DS::set_reg(selectors.data_selector);
        ES::set_reg(selectors.data_selector);
        SS::set_reg(selectors.data_selector);
    }
    Ok(())
}
