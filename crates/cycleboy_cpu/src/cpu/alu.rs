//! 8-bit arithmetic-logic unit.
//!
//! The ALU itself is stateless: [`apply`] takes the accumulator, the operand
//! and the incoming carry, and returns the new accumulator together with the
//! complete flags byte. [`Cpu::alu`] wires it to the register file.

use super::regs::Flags;
use super::{Bus, Cpu};

/// ALU operation, in opcode order (bits 5-3 of `0x80..=0xBF`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    /// Select the operation from the 3-bit field of an ALU opcode.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            AluOp::Add => "ADD",
            AluOp::Adc => "ADC",
            AluOp::Sub => "SUB",
            AluOp::Sbc => "SBC",
            AluOp::And => "AND",
            AluOp::Xor => "XOR",
            AluOp::Or => "OR",
            AluOp::Cp => "CP",
        }
    }
}

/// Result of one ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluOutput {
    /// New accumulator value (the old one for CP).
    pub value: u8,
    pub flags: Flags,
}

/// Compute `acc <op> operand`.
///
/// `carry_in` is only consulted by ADC and SBC. All four flags are written by
/// every operation; the returned flags byte never has bits 3-0 set.
pub fn apply(op: AluOp, acc: u8, operand: u8, carry_in: bool) -> AluOutput {
    match op {
        AluOp::Add => add(acc, operand, false),
        AluOp::Adc => add(acc, operand, carry_in),
        AluOp::Sub => sub(acc, operand, false),
        AluOp::Sbc => sub(acc, operand, carry_in),
        AluOp::And => logic(acc & operand, true),
        AluOp::Xor => logic(acc ^ operand, false),
        AluOp::Or => logic(acc | operand, false),
        AluOp::Cp => {
            // Flags exactly as SUB, but A is not written back.
            let flags = sub(acc, operand, false).flags;
            AluOutput { value: acc, flags }
        }
    }
}

fn add(acc: u8, operand: u8, carry_in: bool) -> AluOutput {
    let carry = carry_in as u8;
    let half = (acc & 0x0F) + (operand & 0x0F) + carry;
    let full = acc as u16 + operand as u16 + carry as u16;
    let value = full as u8;

    let mut flags = Flags::empty();
    flags.set(Flags::ZERO, value == 0);
    flags.set(Flags::HALF_CARRY, half & 0x10 != 0);
    flags.set(Flags::CARRY, full > 0xFF);
    AluOutput { value, flags }
}

fn sub(acc: u8, operand: u8, carry_in: bool) -> AluOutput {
    let borrow = carry_in as i16;
    let half = (acc & 0x0F) as i16 - (operand & 0x0F) as i16 - borrow;
    let full = acc as i16 - operand as i16 - borrow;
    let value = full as u8;

    let mut flags = Flags::SUBTRACT;
    flags.set(Flags::ZERO, value == 0);
    flags.set(Flags::HALF_CARRY, half < 0);
    flags.set(Flags::CARRY, full < 0);
    AluOutput { value, flags }
}

fn logic(value: u8, half_carry: bool) -> AluOutput {
    let mut flags = Flags::empty();
    flags.set(Flags::ZERO, value == 0);
    flags.set(Flags::HALF_CARRY, half_carry);
    AluOutput { value, flags }
}

/// Add a signed 8-bit displacement to a 16-bit base (`LD HL,SP+e`).
///
/// The displacement is sign-extended for the sum, but H and C come from the
/// unsigned addition of the base's low byte and the raw displacement byte.
/// Z and N are cleared.
pub fn add_signed_offset(base: u16, offset: u8) -> (u16, Flags) {
    let value = base.wrapping_add(offset as i8 as i16 as u16);
    let low = base as u8;

    let mut flags = Flags::empty();
    flags.set(Flags::HALF_CARRY, (low & 0x0F) + (offset & 0x0F) > 0x0F);
    flags.set(Flags::CARRY, low as u16 + offset as u16 > 0xFF);
    (value, flags)
}

impl<B: Bus> Cpu<B> {
    /// Run `op` against A and commit the result and flags.
    pub(super) fn alu(&mut self, op: AluOp, operand: u8) {
        let out = apply(op, self.regs.a(), operand, self.get_flag(Flags::CARRY));
        self.regs.set_a(out.value);
        self.regs.set_flags(out.flags);
    }
}
