pub mod cpu;

pub use cpu::alu::{AluOp, AluOutput};
pub use cpu::decode::{HlStep, Instr, Operand, StackPair, WidePair};
pub use cpu::regs::{Flags, Reg8, RegisterPair, Registers};
pub use cpu::snapshot::CpuSnapshot;
pub use cpu::{Bus, Cpu, Cycle, Fault};

/// Size of the flat address space the core expects its bus to cover (64 KiB).
pub const MEMORY_SIZE: usize = 0x10000;
