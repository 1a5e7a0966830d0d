use crate::MEMORY_SIZE;

/// Abstraction over the memory bus seen by the CPU.
///
/// Addresses are `u16`, so every access is already wrapped into the 64 KiB
/// address space; implementations never see an out-of-range address.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Side-effect-free read used by inspection code (register dumps,
    /// debuggers). It must never change bus state.
    fn peek8(&self, addr: u16) -> u8;

    /// Advance bus-side peripherals by a single CPU machine cycle.
    ///
    /// Called once at the end of every executed machine cycle. The default
    /// implementation does nothing; buses that emulate timers or video can
    /// override this to run them in lock-step with the core.
    fn tick_mcycle(&mut self) {}
}

/// A flat 64 KiB array is the simplest bus: every address maps to one byte.
impl Bus for [u8; MEMORY_SIZE] {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self[addr as usize]
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self[addr as usize] = value;
    }

    #[inline]
    fn peek8(&self, addr: u16) -> u8 {
        self[addr as usize]
    }
}

/// Lets the core borrow a caller-owned bus instead of owning it.
impl<B: Bus + ?Sized> Bus for &mut B {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        (**self).read8(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        (**self).write8(addr, value)
    }

    #[inline]
    fn peek8(&self, addr: u16) -> u8 {
        (**self).peek8(addr)
    }

    #[inline]
    fn tick_mcycle(&mut self) {
        (**self).tick_mcycle()
    }
}
