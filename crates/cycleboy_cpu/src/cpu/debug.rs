use std::fmt::Write as _;

use super::decode::Instr;
use super::regs::Reg8;
use super::{Bus, Cpu, Cycle};

impl<B: Bus> Cpu<B> {
    /// Human-readable dump of registers, pointers and sequencer state.
    ///
    /// Purely observational: memory is only looked at through `peek8`.
    pub fn register_dump(&self) -> String {
        let r = &self.regs;
        let mut out = String::new();
        let _ = writeln!(out, "A: {:02X} F: {:02X}", r.get8(Reg8::A), r.get8(Reg8::F));
        let _ = writeln!(out, "B: {:02X} C: {:02X}", r.get8(Reg8::B), r.get8(Reg8::C));
        let _ = writeln!(out, "D: {:02X} E: {:02X}", r.get8(Reg8::D), r.get8(Reg8::E));
        let _ = writeln!(out, "H: {:02X} L: {:02X}", r.get8(Reg8::H), r.get8(Reg8::L));
        let _ = writeln!(out, "SP: {:04X}", r.sp);
        let _ = writeln!(out, "PC: {:04X} (next byte {:02X})", r.pc, self.bus.peek8(r.pc));
        // On a boundary the opcode register already holds the next opcode.
        let (instr, cycle) = match self.cycle {
            Cycle::Boundary => (Instr::decode(self.opcode), "boundary".to_string()),
            Cycle::InFlight(n) => (self.instr, format!("in flight, {n} left")),
        };
        let _ = write!(out, "Opcode: {:02X} ({instr}), Cycle: {cycle}", self.opcode);
        if let Some(fault) = self.fault {
            let _ = write!(out, "\nLocked: {fault}");
        }
        out
    }

    /// Send `register_dump` to the `debug` log level.
    pub fn log_register_dump(&self) {
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("CPU state after {} M-cycles\n{}", self.mcycles, self.register_dump());
        }
    }
}
