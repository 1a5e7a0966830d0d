pub mod alu;
mod bus;
pub mod decode;
mod debug;
mod exec;
mod helpers;
mod init;
pub mod regs;
pub mod snapshot;
mod step;

use std::fmt;

pub use bus::Bus;

use decode::Instr;
use regs::{Flags, Registers};

/// Position of the sequencer inside the in-flight instruction.
///
/// `Boundary` means the opcode register holds a freshly fetched opcode that
/// has not been decoded yet; the next tick decodes it and runs its first
/// machine cycle. `InFlight(n)` means the current instruction still owes `n`
/// machine cycles after the one the next tick runs, so `InFlight(0)` is the
/// last cycle, which also performs the overlapped fetch of the next opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cycle {
    Boundary,
    InFlight(u8),
}

/// Per-instruction scratch registers latched across machine cycles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Latch {
    /// Immediate byte fetched from the instruction stream.
    pub(crate) imm8: u8,
    /// 16-bit immediate, assembled little-endian one byte per cycle.
    pub(crate) imm16: u16,
}

/// Reason the core stopped executing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    /// The opcode at `addr` does not belong to any implemented family.
    Unimplemented { opcode: u8, addr: u16 },
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Unimplemented { opcode, addr } => {
                write!(f, "unimplemented opcode 0x{opcode:02X} at 0x{addr:04X}")
            }
        }
    }
}

impl std::error::Error for Fault {}

/// Sharp LR35902 instruction core, advanced one machine cycle per `tick`.
///
/// The core borrows (or owns) a [`Bus`] covering the whole 64 KiB address
/// space. It never allocates memory itself.
#[derive(Clone, Debug)]
pub struct Cpu<B: Bus> {
    pub regs: Registers,
    bus: B,
    /// Opcode of the in-flight instruction (or the one about to be decoded).
    opcode: u8,
    /// Family decoded from `opcode` on the boundary tick.
    instr: Instr,
    cycle: Cycle,
    latch: Latch,
    /// Set when the core has locked up; ticks are ignored from then on.
    fault: Option<Fault>,
    mcycles: u64,
}

impl<B: Bus> Cpu<B> {
    #[inline]
    pub fn get_flag(&self, flag: Flags) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.regs.set_flag(flag, value);
    }

    #[inline]
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    #[inline]
    pub fn instr(&self) -> Instr {
        self.instr
    }

    #[inline]
    pub fn cycle(&self) -> Cycle {
        self.cycle
    }

    /// The fault that locked the core, if any.
    #[inline]
    pub fn fault(&self) -> Option<Fault> {
        self.fault
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.fault.is_some()
    }

    /// Number of machine cycles executed since power-on.
    #[inline]
    pub fn mcycles(&self) -> u64 {
        self.mcycles
    }

    #[inline]
    pub fn bus(&self) -> &B {
        &self.bus
    }

    #[inline]
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Tear the core down and hand the bus back to the caller.
    pub fn into_bus(self) -> B {
        self.bus
    }
}
