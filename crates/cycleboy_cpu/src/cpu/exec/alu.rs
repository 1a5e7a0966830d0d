use crate::cpu::alu::AluOp;
use crate::cpu::decode::Operand;
use crate::cpu::regs::Reg8;
use crate::cpu::{Bus, Cpu};

impl<B: Bus> Cpu<B> {
    pub(super) fn step_alu_r(&mut self, op: AluOp, src: Reg8) {
        let value = self.read_operand(Operand::Reg(src));
        self.alu(op, value);
    }

    pub(super) fn step_alu_hl(&mut self, op: AluOp, step: u8) {
        if step == 0 {
            let value = self.read_operand(Operand::HlIndirect);
            self.alu(op, value);
        }
    }
}
