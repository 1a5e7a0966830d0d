use crate::cpu::alu::add_signed_offset;
use crate::cpu::decode::StackPair;
use crate::cpu::{Bus, Cpu};

impl<B: Bus> Cpu<B> {
    pub(super) fn step_ld_a16_from_sp(&mut self, step: u8) {
        match step {
            0 => self.fetch_imm16_lo(),
            1 => self.fetch_imm16_hi(),
            2 => {
                let lo = self.regs.sp as u8;
                self.bus.write8(self.latch.imm16, lo);
            }
            3 => {
                let hi = (self.regs.sp >> 8) as u8;
                self.bus.write8(self.latch.imm16.wrapping_add(1), hi);
            }
            _ => {}
        }
    }

    pub(super) fn step_ld_sp_hl(&mut self, step: u8) {
        if step == 0 {
            self.regs.sp = self.regs.hl();
        }
    }

    pub(super) fn step_push(&mut self, pair: StackPair, step: u8) {
        // Leaves the low byte at SP and the high byte at SP+1.
        match step {
            0 => {
                self.regs.sp = self.regs.sp.wrapping_sub(1);
            }
            1 => {
                let hi = (self.stack_pair(pair) >> 8) as u8;
                self.bus.write8(self.regs.sp, hi);
                self.regs.sp = self.regs.sp.wrapping_sub(1);
            }
            2 => {
                let lo = self.stack_pair(pair) as u8;
                self.bus.write8(self.regs.sp, lo);
            }
            _ => {}
        }
    }

    pub(super) fn step_pop(&mut self, pair: StackPair, step: u8) {
        match step {
            0 => {
                let lo = self.bus.read8(self.regs.sp);
                self.regs.sp = self.regs.sp.wrapping_add(1);
                self.latch.imm16 = (self.latch.imm16 & 0xFF00) | lo as u16;
            }
            1 => {
                let hi = self.bus.read8(self.regs.sp);
                self.regs.sp = self.regs.sp.wrapping_add(1);
                self.latch.imm16 = ((hi as u16) << 8) | (self.latch.imm16 & 0x00FF);
                self.set_stack_pair(pair, self.latch.imm16);
            }
            _ => {}
        }
    }

    pub(super) fn step_ld_hl_sp_r8(&mut self, step: u8) {
        match step {
            0 => self.fetch_imm8(),
            1 => {
                let (value, flags) = add_signed_offset(self.regs.sp, self.latch.imm8);
                self.regs.set_flags(flags);
                self.regs.set_hl(value);
            }
            _ => {}
        }
    }
}
