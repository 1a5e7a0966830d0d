use crate::cpu::decode::{HlStep, Operand, WidePair};
use crate::cpu::regs::Reg8;
use crate::cpu::{Bus, Cpu};

/// Base of the high page used by LDH and LD (C).
const HIGH_PAGE: u16 = 0xFF00;

impl<B: Bus> Cpu<B> {
    pub(super) fn step_ld_r_r(&mut self, dst: Reg8, src: Reg8) {
        let value = self.read_operand(Operand::Reg(src));
        self.write_operand(Operand::Reg(dst), value);
    }

    pub(super) fn step_ld_r_d8(&mut self, dst: Reg8, step: u8) {
        match step {
            // M1: read the immediate.
            0 => self.fetch_imm8(),
            // M2: commit it.
            1 => self.write_operand(Operand::Reg(dst), self.latch.imm8),
            _ => {}
        }
    }

    pub(super) fn step_ld_r_from_hl(&mut self, dst: Reg8, hl: HlStep, step: u8) {
        if step == 0 {
            let value = self.read_hl_step(hl);
            self.write_operand(Operand::Reg(dst), value);
        }
    }

    pub(super) fn step_ld_hl_from_r(&mut self, src: Reg8, hl: HlStep, step: u8) {
        if step == 0 {
            let value = self.read_operand(Operand::Reg(src));
            self.write_hl_step(hl, value);
        }
    }

    pub(super) fn step_ld_hl_d8(&mut self, step: u8) {
        match step {
            0 => self.fetch_imm8(),
            1 => {
                // Internal delay before the memory write.
            }
            2 => self.write_operand(Operand::HlIndirect, self.latch.imm8),
            _ => {}
        }
    }

    pub(super) fn step_ld_a_from_pair(&mut self, pair: WidePair, step: u8) {
        if step == 0 {
            let addr = self.wide_pair(pair);
            let value = self.bus.read8(addr);
            self.regs.set_a(value);
        }
    }

    pub(super) fn step_ld_pair_from_a(&mut self, pair: WidePair, step: u8) {
        if step == 0 {
            let addr = self.wide_pair(pair);
            self.bus.write8(addr, self.regs.a());
        }
    }

    pub(super) fn step_ldh_a_from_c(&mut self, step: u8) {
        if step == 0 {
            let addr = HIGH_PAGE | self.regs.get8(Reg8::C) as u16;
            let value = self.bus.read8(addr);
            self.regs.set_a(value);
        }
    }

    pub(super) fn step_ldh_c_from_a(&mut self, step: u8) {
        if step == 0 {
            let addr = HIGH_PAGE | self.regs.get8(Reg8::C) as u16;
            self.bus.write8(addr, self.regs.a());
        }
    }

    pub(super) fn step_ldh_a_from_a8(&mut self, step: u8) {
        match step {
            0 => self.fetch_imm8(),
            2 => {
                let addr = HIGH_PAGE | self.latch.imm8 as u16;
                let value = self.bus.read8(addr);
                self.regs.set_a(value);
            }
            _ => {}
        }
    }

    pub(super) fn step_ldh_a8_from_a(&mut self, step: u8) {
        match step {
            0 => self.fetch_imm8(),
            2 => {
                let addr = HIGH_PAGE | self.latch.imm8 as u16;
                self.bus.write8(addr, self.regs.a());
            }
            _ => {}
        }
    }

    pub(super) fn step_ld_a_from_a16(&mut self, step: u8) {
        match step {
            0 => self.fetch_imm16_lo(),
            1 => self.fetch_imm16_hi(),
            2 => {
                let value = self.bus.read8(self.latch.imm16);
                self.regs.set_a(value);
            }
            _ => {}
        }
    }

    pub(super) fn step_ld_a16_from_a(&mut self, step: u8) {
        match step {
            0 => self.fetch_imm16_lo(),
            1 => self.fetch_imm16_hi(),
            2 => self.bus.write8(self.latch.imm16, self.regs.a()),
            _ => {}
        }
    }

    pub(super) fn step_ld_rr_d16(&mut self, dst: WidePair, step: u8) {
        match step {
            0 => self.fetch_imm16_lo(),
            1 => self.fetch_imm16_hi(),
            2 => self.set_wide_pair(dst, self.latch.imm16),
            _ => {}
        }
    }
}
