//! Point-in-time copy of the register file.

use std::fmt;

use super::regs::{RegisterPair, Registers};
use super::{Bus, Cpu};

/// Register state captured from a [`Cpu`] at one instant.
///
/// The snapshot owns plain copies of every register, so it can be kept,
/// edited and compared freely without reaching back into the live core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuSnapshot {
    pub af: RegisterPair,
    pub bc: RegisterPair,
    pub de: RegisterPair,
    pub hl: RegisterPair,
    pub sp: u16,
    pub pc: u16,
}

impl CpuSnapshot {
    pub fn capture<B: Bus>(cpu: &Cpu<B>) -> Self {
        Self::from(&cpu.regs)
    }

    /// All four pairs fused into one value: AF in bits 63-48, then BC, DE
    /// and HL in bits 15-0.
    pub fn all_registers(&self) -> u64 {
        (self.af.get() as u64) << 48
            | (self.bc.get() as u64) << 32
            | (self.de.get() as u64) << 16
            | self.hl.get() as u64
    }

    /// SP in bits 31-16, PC in bits 15-0.
    pub fn pointers(&self) -> u32 {
        (self.sp as u32) << 16 | self.pc as u32
    }
}

impl From<&Registers> for CpuSnapshot {
    fn from(regs: &Registers) -> Self {
        Self {
            af: regs.af,
            bc: regs.bc,
            de: regs.de,
            hl: regs.hl,
            sp: regs.sp,
            pc: regs.pc,
        }
    }
}

impl fmt::Display for CpuSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X}",
            self.af.get(),
            self.bc.get(),
            self.de.get(),
            self.hl.get(),
            self.sp,
            self.pc
        )
    }
}

impl<B: Bus> Cpu<B> {
    /// Take an independent copy of the current register state.
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot::capture(self)
    }
}
