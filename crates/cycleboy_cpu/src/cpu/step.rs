use super::decode::Instr;
use super::{Bus, Cpu, Cycle, Fault};

impl<B: Bus> Cpu<B> {
    /// Advance the CPU and bus by exactly one machine cycle.
    ///
    /// On an instruction boundary the opcode fetched on the previous tick is
    /// decoded and its first cycle runs. On the instruction's last cycle the
    /// next opcode is fetched in the same tick, as the hardware pipeline
    /// does. Once locked, ticks do nothing.
    pub fn tick(&mut self) {
        if self.fault.is_some() {
            // Hard-locked cores never advance time.
            return;
        }

        let step = match self.cycle {
            Cycle::Boundary => {
                self.instr = Instr::decode(self.opcode);
                if !self.instr.is_implemented() {
                    self.lock_unimplemented();
                    return;
                }
                log::trace!(
                    "0x{pc:04X}: {instr} (opcode 0x{opcode:02X})",
                    pc = self.regs.pc.wrapping_sub(1),
                    instr = self.instr,
                    opcode = self.opcode,
                );
                0
            }
            Cycle::InFlight(remaining) => {
                debug_assert!(remaining < self.instr.cycles());
                self.instr.cycles() - 1 - remaining
            }
        };

        self.exec_mcycle(step);

        let last = self.instr.cycles() - 1;
        if step == last {
            self.fetch_opcode();
            self.cycle = Cycle::Boundary;
        } else {
            self.cycle = Cycle::InFlight(last - step - 1);
        }

        self.bus.tick_mcycle();
        self.mcycles += 1;
    }

    /// Tick `count` machine cycles, stopping early if the core locks.
    pub fn run_mcycles(&mut self, count: u64) {
        for _ in 0..count {
            if self.is_locked() {
                break;
            }
            self.tick();
        }
    }

    fn lock_unimplemented(&mut self) {
        // PC already points past the opcode.
        let addr = self.regs.pc.wrapping_sub(1);
        log::error!(
            "CPU locked: unimplemented opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
            opcode = self.opcode,
            pc = addr,
            sp = self.regs.sp,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
        self.fault = Some(Fault::Unimplemented {
            opcode: self.opcode,
            addr,
        });
    }
}
