use bitflags::bitflags;

/// A 16-bit register addressable as two 8-bit halves.
///
/// Only the 16-bit value is stored; the halves are views over it, so the two
/// representations can never disagree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RegisterPair(u16);

impl RegisterPair {
    #[inline]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn set(&mut self, value: u16) {
        self.0 = value;
    }

    #[inline]
    pub const fn hi(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    #[inline]
    pub const fn lo(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    #[inline]
    pub fn set_hi(&mut self, value: u8) {
        self.0 = u16::from_be_bytes([value, self.lo()]);
    }

    #[inline]
    pub fn set_lo(&mut self, value: u8) {
        self.0 = u16::from_be_bytes([self.hi(), value]);
    }
}

impl From<u16> for RegisterPair {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<RegisterPair> for u16 {
    fn from(pair: RegisterPair) -> Self {
        pair.0
    }
}

bitflags! {
    /// Flag bits in the F register.
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 are always zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const ZERO = 1 << 7;
        const SUBTRACT = 1 << 6;
        const HALF_CARRY = 1 << 5;
        const CARRY = 1 << 4;
    }
}

/// Symbolic name of an 8-bit register half.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg8 {
    A,
    F,
    B,
    C,
    D,
    E,
    H,
    L,
}

/// Registers for the Game Boy CPU (LR35902).
///
/// The core is Z80-like with an 8-bit ALU and a 16-bit address space. The
/// four general pairs are stored as [`RegisterPair`]s; `SP` and `PC` are
/// plain 16-bit pointers that wrap on overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub af: RegisterPair,
    pub bc: RegisterPair,
    pub de: RegisterPair,
    pub hl: RegisterPair,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    /// Read one 8-bit half by name.
    pub fn get8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::A => self.af.hi(),
            Reg8::F => self.af.lo(),
            Reg8::B => self.bc.hi(),
            Reg8::C => self.bc.lo(),
            Reg8::D => self.de.hi(),
            Reg8::E => self.de.lo(),
            Reg8::H => self.hl.hi(),
            Reg8::L => self.hl.lo(),
        }
    }

    /// Write one 8-bit half by name. The other half of the pair is untouched.
    pub fn set8(&mut self, reg: Reg8, value: u8) {
        match reg {
            Reg8::A => self.af.set_hi(value),
            // Lower 4 bits of F are always zero.
            Reg8::F => self.af.set_lo(value & 0xF0),
            Reg8::B => self.bc.set_hi(value),
            Reg8::C => self.bc.set_lo(value),
            Reg8::D => self.de.set_hi(value),
            Reg8::E => self.de.set_lo(value),
            Reg8::H => self.hl.set_hi(value),
            Reg8::L => self.hl.set_lo(value),
        }
    }

    #[inline]
    pub fn a(&self) -> u8 {
        self.af.hi()
    }

    #[inline]
    pub fn set_a(&mut self, value: u8) {
        self.af.set_hi(value);
    }

    #[inline]
    pub fn af(&self) -> u16 {
        self.af.get()
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        // Lower 4 bits of F are always zero.
        self.af.set(value & 0xFFF0);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        self.bc.get()
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        self.bc.set(value);
    }

    #[inline]
    pub fn de(&self) -> u16 {
        self.de.get()
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        self.de.set(value);
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        self.hl.get()
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        self.hl.set(value);
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        Flags::from_bits_truncate(self.af.lo())
    }

    #[inline]
    pub fn set_flags(&mut self, flags: Flags) {
        self.af.set_lo(flags.bits());
    }

    #[inline]
    pub fn flag(&self, flag: Flags) -> bool {
        self.flags().contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        let mut flags = self.flags();
        flags.set(flag, value);
        self.set_flags(flags);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [u16; 8] = [0x0000, 0x0001, 0x00FF, 0x0100, 0x1234, 0x8000, 0xABCD, 0xFFFF];

    #[test]
    fn halves_recombine_into_pair() {
        for value in 0..=u16::MAX {
            let pair = RegisterPair::new(value);
            let recombined = ((pair.hi() as u16) << 8) | pair.lo() as u16;
            assert_eq!(recombined, value);
        }
    }

    #[test]
    fn every_pair_round_trips_through_halves() {
        let mut regs = Registers::default();
        for &value in &SAMPLES {
            regs.set_bc(value);
            regs.set_de(value);
            regs.set_hl(value);
            regs.set_af(value);

            for (hi, lo, full) in [
                (Reg8::B, Reg8::C, regs.bc()),
                (Reg8::D, Reg8::E, regs.de()),
                (Reg8::H, Reg8::L, regs.hl()),
            ] {
                assert_eq!(full, value);
                let recombined = ((regs.get8(hi) as u16) << 8) | regs.get8(lo) as u16;
                assert_eq!(recombined, value);
            }

            // AF drops the low nibble of F on the way in.
            let recombined = ((regs.get8(Reg8::A) as u16) << 8) | regs.get8(Reg8::F) as u16;
            assert_eq!(recombined, value & 0xFFF0);
            assert_eq!(regs.af(), value & 0xFFF0);
        }
    }

    #[test]
    fn writing_a_half_preserves_the_other_half() {
        let mut regs = Registers::default();
        regs.set_hl(0x1234);
        regs.set8(Reg8::H, 0xAB);
        assert_eq!(regs.hl(), 0xAB34);
        regs.set8(Reg8::L, 0xCD);
        assert_eq!(regs.hl(), 0xABCD);

        regs.set_bc(0xFFFF);
        regs.set8(Reg8::C, 0x00);
        assert_eq!(regs.get8(Reg8::B), 0xFF);
        assert_eq!(regs.bc(), 0xFF00);
    }

    #[test]
    fn flag_bits_live_in_the_high_nibble_of_f() {
        let mut regs = Registers::default();
        regs.set_flag(Flags::ZERO, true);
        assert_eq!(regs.get8(Reg8::F), 0x80);
        regs.set_flag(Flags::CARRY, true);
        assert_eq!(regs.get8(Reg8::F), 0x90);
        regs.set_flag(Flags::ZERO, false);
        assert_eq!(regs.get8(Reg8::F), 0x10);
        assert!(regs.flag(Flags::CARRY));
        assert!(!regs.flag(Flags::HALF_CARRY));

        regs.set8(Reg8::F, 0xFF);
        assert_eq!(regs.get8(Reg8::F), 0xF0);
        assert!(regs.flag(Flags::SUBTRACT));
    }

    #[test]
    fn flag_writes_leave_a_untouched() {
        let mut regs = Registers::default();
        regs.set_a(0x42);
        regs.set_flags(Flags::all());
        assert_eq!(regs.a(), 0x42);
        assert_eq!(regs.af(), 0x42F0);
    }
}
