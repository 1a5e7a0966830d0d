mod alu;
mod ld;
mod stack;

use super::decode::Instr;
use super::{Bus, Cpu};

impl<B: Bus> Cpu<B> {
    /// Run machine cycle `step` (0-based) of the in-flight instruction.
    ///
    /// Each family handler matches on `step` and does that cycle's bus or
    /// register work; cycles without an arm are internal wait cycles. The
    /// overlapped opcode fetch of the last cycle is done by `tick`, after
    /// the handler returns.
    pub(super) fn exec_mcycle(&mut self, step: u8) {
        match self.instr {
            Instr::Nop => {}
            Instr::LdRR { dst, src } => self.step_ld_r_r(dst, src),
            Instr::LdRImm { dst } => self.step_ld_r_d8(dst, step),
            Instr::LdRFromHl { dst, step: hl } => self.step_ld_r_from_hl(dst, hl, step),
            Instr::LdHlFromR { src, step: hl } => self.step_ld_hl_from_r(src, hl, step),
            Instr::LdHlImm => self.step_ld_hl_d8(step),
            Instr::LdAFromPair { pair } => self.step_ld_a_from_pair(pair, step),
            Instr::LdPairFromA { pair } => self.step_ld_pair_from_a(pair, step),
            Instr::LdhAFromC => self.step_ldh_a_from_c(step),
            Instr::LdhCFromA => self.step_ldh_c_from_a(step),
            Instr::LdhAFromA8 => self.step_ldh_a_from_a8(step),
            Instr::LdhA8FromA => self.step_ldh_a8_from_a(step),
            Instr::LdAFromA16 => self.step_ld_a_from_a16(step),
            Instr::LdA16FromA => self.step_ld_a16_from_a(step),
            Instr::LdWideImm { dst } => self.step_ld_rr_d16(dst, step),
            Instr::LdA16FromSp => self.step_ld_a16_from_sp(step),
            Instr::LdSpHl => self.step_ld_sp_hl(step),
            Instr::Push { pair } => self.step_push(pair, step),
            Instr::Pop { pair } => self.step_pop(pair, step),
            Instr::LdHlSpOffset => self.step_ld_hl_sp_r8(step),
            Instr::AluReg { op, src } => self.step_alu_r(op, src),
            Instr::AluHl { op } => self.step_alu_hl(op, step),
            // `tick` locks the core before an unimplemented family can
            // reach execution.
            Instr::Unimplemented => {}
        }
    }
}
