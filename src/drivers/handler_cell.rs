use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicBool, Ordering};

/// State owned by exactly one interrupt handler.
///
/// The handler runs behind an interrupt gate, so the CPU holds IF clear for
/// its whole body and it cannot be entered again until it returns. That
/// makes the handler the only owner of the value at any moment without a
/// lock. Debug builds check the contract with an entry flag.
pub struct HandlerCell<T> {
    active: AtomicBool,
    value: UnsafeCell<T>,
}

unsafe impl<T: Send> Sync for HandlerCell<T> {}

impl<T> HandlerCell<T> {
    pub const fn new(value: T) -> Self {
        Self {
            active: AtomicBool::new(false),
            value: UnsafeCell::new(value),
        }
    }

    /// Runs `f` with exclusive access to the value.
    ///
    /// # Safety
    ///
    /// Only the single handler that owns this cell may call this, with
    /// maskable interrupts disabled for the duration of the call.
    pub unsafe fn with_exclusive<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let reentered = self.active.swap(true, Ordering::Acquire);
        debug_assert!(!reentered, "interrupt handler state entered re-entrantly");

        let result = f(unsafe { &mut *self.value.get() });

        self.active.store(false, Ordering::Release);
        result
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_persists_between_entries() {
        let cell = HandlerCell::new(0u32);
        for _ in 0..3 {
            unsafe { cell.with_exclusive(|count| *count += 1) };
        }
        assert_eq!(unsafe { cell.with_exclusive(|count| *count) }, 3);
        assert!(!cell.is_active());
    }

    #[test]
    fn flag_is_raised_only_inside() {
        let cell = HandlerCell::new(());
        unsafe { cell.with_exclusive(|_| assert!(cell.is_active())) };
        assert!(!cell.is_active());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "re-entrantly")]
    fn nested_entry_is_caught() {
        let cell = HandlerCell::new(0u8);
        unsafe {
            cell.with_exclusive(|_| {
                cell.with_exclusive(|_| ());
            })
        };
    }
}
