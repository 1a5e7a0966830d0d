use super::decode::{HlStep, Operand, StackPair, WidePair};
use super::{Bus, Cpu};

impl<B: Bus> Cpu<B> {
    /// Read an 8-bit operand: a register half or the byte at (HL).
    #[inline]
    pub(super) fn read_operand(&mut self, operand: Operand) -> u8 {
        match operand {
            Operand::Reg(reg) => self.regs.get8(reg),
            Operand::HlIndirect => self.bus.read8(self.regs.hl()),
        }
    }

    /// Write an 8-bit operand. The encoding matches `read_operand`.
    #[inline]
    pub(super) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Reg(reg) => self.regs.set8(reg, value),
            Operand::HlIndirect => self.bus.write8(self.regs.hl(), value),
        }
    }

    /// Read the byte at PC and advance PC.
    #[inline]
    pub(super) fn fetch8(&mut self) -> u8 {
        let value = self.bus.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Fetch an immediate byte into the 8-bit latch.
    #[inline]
    pub(super) fn fetch_imm8(&mut self) {
        self.latch.imm8 = self.fetch8();
    }

    /// Fetch the low byte of a 16-bit immediate into the latch.
    #[inline]
    pub(super) fn fetch_imm16_lo(&mut self) {
        let lo = self.fetch8();
        self.latch.imm16 = (self.latch.imm16 & 0xFF00) | lo as u16;
    }

    /// Fetch the high byte of a 16-bit immediate into the latch.
    ///
    /// Immediates are little-endian: the byte fetched first is the low one.
    #[inline]
    pub(super) fn fetch_imm16_hi(&mut self) {
        let hi = self.fetch8();
        self.latch.imm16 = ((hi as u16) << 8) | (self.latch.imm16 & 0x00FF);
    }

    /// Overlapped fetch of the next opcode on an instruction's last cycle.
    #[inline]
    pub(super) fn fetch_opcode(&mut self) {
        self.opcode = self.fetch8();
    }

    /// Read through HL and apply the post-increment/decrement, if any.
    #[inline]
    pub(super) fn read_hl_step(&mut self, step: HlStep) -> u8 {
        let addr = self.regs.hl();
        let value = self.bus.read8(addr);
        self.apply_hl_step(addr, step);
        value
    }

    /// Write through HL and apply the post-increment/decrement, if any.
    #[inline]
    pub(super) fn write_hl_step(&mut self, step: HlStep, value: u8) {
        let addr = self.regs.hl();
        self.bus.write8(addr, value);
        self.apply_hl_step(addr, step);
    }

    #[inline]
    fn apply_hl_step(&mut self, addr: u16, step: HlStep) {
        match step {
            HlStep::None => {}
            HlStep::Inc => self.regs.set_hl(addr.wrapping_add(1)),
            HlStep::Dec => self.regs.set_hl(addr.wrapping_sub(1)),
        }
    }

    #[inline]
    pub(super) fn wide_pair(&self, pair: WidePair) -> u16 {
        match pair {
            WidePair::BC => self.regs.bc(),
            WidePair::DE => self.regs.de(),
            WidePair::HL => self.regs.hl(),
            WidePair::SP => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn set_wide_pair(&mut self, pair: WidePair, value: u16) {
        match pair {
            WidePair::BC => self.regs.set_bc(value),
            WidePair::DE => self.regs.set_de(value),
            WidePair::HL => self.regs.set_hl(value),
            WidePair::SP => self.regs.sp = value,
        }
    }

    #[inline]
    pub(super) fn stack_pair(&self, pair: StackPair) -> u16 {
        match pair {
            StackPair::BC => self.regs.bc(),
            StackPair::DE => self.regs.de(),
            StackPair::HL => self.regs.hl(),
            StackPair::AF => self.regs.af(),
        }
    }

    #[inline]
    pub(super) fn set_stack_pair(&mut self, pair: StackPair, value: u16) {
        match pair {
            StackPair::BC => self.regs.set_bc(value),
            StackPair::DE => self.regs.set_de(value),
            StackPair::HL => self.regs.set_hl(value),
            // POP AF drops the low nibble of F.
            StackPair::AF => self.regs.set_af(value),
        }
    }
}
