//! Opcode classification.
//!
//! The LR35902 encoding is regular enough that families can be told apart by
//! the two nibbles of the opcode and the 3-bit register fields, so decoding
//! is one ordered match rather than a 256-entry table. Every opcode maps to
//! exactly one [`Instr`]; opcodes outside the implemented families map to
//! [`Instr::Unimplemented`].

use std::fmt;

use super::alu::AluOp;
use super::regs::Reg8;

/// 8-bit operand selected by a 3-bit register field.
///
/// The encoding matches the standard Game Boy register order used by opcode
/// tables: 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    Reg(Reg8),
    /// The byte in memory at the address held in HL.
    HlIndirect,
}

impl Operand {
    pub fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Operand::Reg(Reg8::B),
            1 => Operand::Reg(Reg8::C),
            2 => Operand::Reg(Reg8::D),
            3 => Operand::Reg(Reg8::E),
            4 => Operand::Reg(Reg8::H),
            5 => Operand::Reg(Reg8::L),
            6 => Operand::HlIndirect,
            _ => Operand::Reg(Reg8::A),
        }
    }
}

/// Destination of a 16-bit immediate load (bits 5-4 of `0x01/0x11/0x21/0x31`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidePair {
    BC,
    DE,
    HL,
    SP,
}

/// Register pair moved by PUSH/POP (bits 5-4 of `0xC1..=0xF5`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackPair {
    BC,
    DE,
    HL,
    AF,
}

/// Adjustment applied to HL after an indirect access through it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HlStep {
    #[default]
    None,
    Inc,
    Dec,
}

/// Instruction family of one opcode, with the operands its encoding selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instr {
    Nop,
    /// LD r,r'
    LdRR { dst: Reg8, src: Reg8 },
    /// LD r,d8
    LdRImm { dst: Reg8 },
    /// LD r,(HL) and LD A,(HL+)/LD A,(HL-)
    LdRFromHl { dst: Reg8, step: HlStep },
    /// LD (HL),r and LD (HL+),A/LD (HL-),A
    LdHlFromR { src: Reg8, step: HlStep },
    /// LD (HL),d8
    LdHlImm,
    /// LD A,(BC) / LD A,(DE)
    LdAFromPair { pair: WidePair },
    /// LD (BC),A / LD (DE),A
    LdPairFromA { pair: WidePair },
    /// LD A,(C)
    LdhAFromC,
    /// LD (C),A
    LdhCFromA,
    /// LDH A,(a8)
    LdhAFromA8,
    /// LDH (a8),A
    LdhA8FromA,
    /// LD A,(a16)
    LdAFromA16,
    /// LD (a16),A
    LdA16FromA,
    /// LD rr,d16
    LdWideImm { dst: WidePair },
    /// LD (a16),SP
    LdA16FromSp,
    /// LD SP,HL
    LdSpHl,
    Push { pair: StackPair },
    Pop { pair: StackPair },
    /// LD HL,SP+r8
    LdHlSpOffset,
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,r
    AluReg { op: AluOp, src: Reg8 },
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,(HL)
    AluHl { op: AluOp },
    Unimplemented,
}

impl Instr {
    /// Classify `opcode` into its instruction family.
    pub fn decode(opcode: u8) -> Self {
        let hi = opcode >> 4;
        let lo = opcode & 0x0F;
        let x = (opcode >> 3) & 0x07;
        let z = opcode & 0x07;

        match opcode {
            0x00 => Instr::Nop,
            0x08 => Instr::LdA16FromSp,
            0x36 => Instr::LdHlImm,
            // HALT occupies the LD (HL),(HL) slot; it is not a load.
            0x76 => Instr::Unimplemented,

            0x40..=0x7F => match (Operand::from_index(x), Operand::from_index(z)) {
                (Operand::Reg(dst), Operand::Reg(src)) => Instr::LdRR { dst, src },
                (Operand::Reg(dst), Operand::HlIndirect) => Instr::LdRFromHl {
                    dst,
                    step: HlStep::None,
                },
                (Operand::HlIndirect, Operand::Reg(src)) => Instr::LdHlFromR {
                    src,
                    step: HlStep::None,
                },
                (Operand::HlIndirect, Operand::HlIndirect) => Instr::Unimplemented,
            },

            0x80..=0xBF => {
                let op = AluOp::from_bits(x);
                match Operand::from_index(z) {
                    Operand::Reg(src) => Instr::AluReg { op, src },
                    Operand::HlIndirect => Instr::AluHl { op },
                }
            }

            // Upper quarter: 16-bit immediates, indirect accumulator loads
            // and 8-bit immediates, selected by the low nibble.
            _ if hi <= 0x3 => match lo {
                0x1 => Instr::LdWideImm {
                    dst: wide_pair(hi),
                },
                0x2 => match hi {
                    0x0 => Instr::LdPairFromA { pair: WidePair::BC },
                    0x1 => Instr::LdPairFromA { pair: WidePair::DE },
                    0x2 => Instr::LdHlFromR {
                        src: Reg8::A,
                        step: HlStep::Inc,
                    },
                    _ => Instr::LdHlFromR {
                        src: Reg8::A,
                        step: HlStep::Dec,
                    },
                },
                0xA => match hi {
                    0x0 => Instr::LdAFromPair { pair: WidePair::BC },
                    0x1 => Instr::LdAFromPair { pair: WidePair::DE },
                    0x2 => Instr::LdRFromHl {
                        dst: Reg8::A,
                        step: HlStep::Inc,
                    },
                    _ => Instr::LdRFromHl {
                        dst: Reg8::A,
                        step: HlStep::Dec,
                    },
                },
                0x6 | 0xE => match Operand::from_index(x) {
                    Operand::Reg(dst) => Instr::LdRImm { dst },
                    // 0x36 is matched above.
                    Operand::HlIndirect => Instr::LdHlImm,
                },
                _ => Instr::Unimplemented,
            },

            // Lower quarter: stack and high-page traffic.
            _ if hi >= 0xC => match (hi, lo) {
                (_, 0x1) => Instr::Pop {
                    pair: stack_pair(hi),
                },
                (_, 0x5) => Instr::Push {
                    pair: stack_pair(hi),
                },
                (0xE, 0x0) => Instr::LdhA8FromA,
                (0xF, 0x0) => Instr::LdhAFromA8,
                (0xE, 0x2) => Instr::LdhCFromA,
                (0xF, 0x2) => Instr::LdhAFromC,
                (0xE, 0xA) => Instr::LdA16FromA,
                (0xF, 0xA) => Instr::LdAFromA16,
                (0xF, 0x8) => Instr::LdHlSpOffset,
                (0xF, 0x9) => Instr::LdSpHl,
                _ => Instr::Unimplemented,
            },

            _ => Instr::Unimplemented,
        }
    }

    /// Number of machine cycles the family occupies, counting the tick that
    /// decodes it and the final tick that overlaps the next opcode fetch.
    /// Zero for `Unimplemented`.
    pub fn cycles(self) -> u8 {
        match self {
            Instr::Nop | Instr::LdRR { .. } | Instr::AluReg { .. } => 1,
            Instr::LdRImm { .. }
            | Instr::LdRFromHl { .. }
            | Instr::LdHlFromR { .. }
            | Instr::LdAFromPair { .. }
            | Instr::LdPairFromA { .. }
            | Instr::LdhAFromC
            | Instr::LdhCFromA
            | Instr::LdSpHl
            | Instr::AluHl { .. } => 2,
            Instr::LdHlImm
            | Instr::LdhAFromA8
            | Instr::LdhA8FromA
            | Instr::LdWideImm { .. }
            | Instr::Pop { .. }
            | Instr::LdHlSpOffset => 3,
            Instr::LdAFromA16 | Instr::LdA16FromA | Instr::Push { .. } => 4,
            Instr::LdA16FromSp => 5,
            Instr::Unimplemented => 0,
        }
    }

    #[inline]
    pub fn is_implemented(self) -> bool {
        self != Instr::Unimplemented
    }
}

fn wide_pair(hi: u8) -> WidePair {
    match hi & 0x03 {
        0 => WidePair::BC,
        1 => WidePair::DE,
        2 => WidePair::HL,
        _ => WidePair::SP,
    }
}

fn stack_pair(hi: u8) -> StackPair {
    match hi & 0x03 {
        0 => StackPair::BC,
        1 => StackPair::DE,
        2 => StackPair::HL,
        _ => StackPair::AF,
    }
}

fn reg_name(reg: Reg8) -> &'static str {
    match reg {
        Reg8::A => "A",
        Reg8::F => "F",
        Reg8::B => "B",
        Reg8::C => "C",
        Reg8::D => "D",
        Reg8::E => "E",
        Reg8::H => "H",
        Reg8::L => "L",
    }
}

fn hl_name(step: HlStep) -> &'static str {
    match step {
        HlStep::None => "(HL)",
        HlStep::Inc => "(HL+)",
        HlStep::Dec => "(HL-)",
    }
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instr::Nop => write!(f, "NOP"),
            Instr::LdRR { dst, src } => write!(f, "LD {},{}", reg_name(dst), reg_name(src)),
            Instr::LdRImm { dst } => write!(f, "LD {},d8", reg_name(dst)),
            Instr::LdRFromHl { dst, step } => write!(f, "LD {},{}", reg_name(dst), hl_name(step)),
            Instr::LdHlFromR { src, step } => write!(f, "LD {},{}", hl_name(step), reg_name(src)),
            Instr::LdHlImm => write!(f, "LD (HL),d8"),
            Instr::LdAFromPair { pair } => write!(f, "LD A,({pair:?})"),
            Instr::LdPairFromA { pair } => write!(f, "LD ({pair:?}),A"),
            Instr::LdhAFromC => write!(f, "LD A,(C)"),
            Instr::LdhCFromA => write!(f, "LD (C),A"),
            Instr::LdhAFromA8 => write!(f, "LDH A,(a8)"),
            Instr::LdhA8FromA => write!(f, "LDH (a8),A"),
            Instr::LdAFromA16 => write!(f, "LD A,(a16)"),
            Instr::LdA16FromA => write!(f, "LD (a16),A"),
            Instr::LdWideImm { dst } => write!(f, "LD {dst:?},d16"),
            Instr::LdA16FromSp => write!(f, "LD (a16),SP"),
            Instr::LdSpHl => write!(f, "LD SP,HL"),
            Instr::Push { pair } => write!(f, "PUSH {pair:?}"),
            Instr::Pop { pair } => write!(f, "POP {pair:?}"),
            Instr::LdHlSpOffset => write!(f, "LD HL,SP+r8"),
            Instr::AluReg { op, src } => write!(f, "{} A,{}", op.mnemonic(), reg_name(src)),
            Instr::AluHl { op } => write!(f, "{} A,(HL)", op.mnemonic()),
            Instr::Unimplemented => write!(f, "???"),
        }
    }
}
