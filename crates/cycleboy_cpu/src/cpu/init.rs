use super::decode::Instr;
use super::regs::Registers;
use super::{Bus, Cpu, Cycle, Latch};

impl<B: Bus> Cpu<B> {
    /// Build a core over `bus` in its power-on state.
    ///
    /// All registers and pointers start at zero. The pipeline starts as if a
    /// NOP were in its last machine cycle, so the first `tick` only fetches
    /// the opcode at 0x0000.
    pub fn new(bus: B) -> Self {
        Self {
            regs: Registers::default(),
            bus,
            opcode: 0x00,
            instr: Instr::Nop,
            cycle: Cycle::InFlight(0),
            latch: Latch::default(),
            fault: None,
            mcycles: 0,
        }
    }

    /// Reset the CPU to its power-on state, keeping the bus.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.opcode = 0x00;
        self.instr = Instr::Nop;
        self.cycle = Cycle::InFlight(0);
        self.latch = Latch::default();
        self.fault = None;
        self.mcycles = 0;
    }
}
