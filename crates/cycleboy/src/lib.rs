use anyhow::{bail, Result};
use typed_builder::TypedBuilder;

use cycleboy_cpu::{Cpu, CpuSnapshot, Fault, MEMORY_SIZE};

/// Program run when no image is given on the command line:
/// `LD B,0xFF ; LD C,B`, then NOPs.
pub const DEMO_PROGRAM: &[u8] = &[0x06, 0xFF, 0x48];

#[derive(Debug, Clone, TypedBuilder)]
pub struct RunConfig {
    /// Raw program image copied into memory at `load_address`.
    pub program: Vec<u8>,
    #[builder(default = 0x0000)]
    pub load_address: u16,
    /// Machine cycles to execute.
    #[builder(default = 64)]
    pub ticks: u64,
    /// Log a register dump every `n` machine cycles.
    #[builder(default, setter(strip_option))]
    pub trace_every: Option<u64>,
    /// Report a locked core as an error instead of a normal result.
    #[builder(default = true)]
    pub stop_on_fault: bool,
}

/// Outcome of one headless run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub snapshot: CpuSnapshot,
    pub mcycles: u64,
    pub fault: Option<Fault>,
    pub memory: Box<[u8; MEMORY_SIZE]>,
}

/// Place the program in a fresh 64 KiB address space and tick the core.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    let start = config.load_address as usize;
    let end = start + config.program.len();
    if end > MEMORY_SIZE {
        bail!(
            "program of {} bytes does not fit at 0x{:04X} (ends at 0x{:X})",
            config.program.len(),
            config.load_address,
            end
        );
    }

    let mut memory: Box<[u8; MEMORY_SIZE]> = Box::new([0; MEMORY_SIZE]);
    memory[start..end].copy_from_slice(&config.program);

    log::info!(
        "Running {} bytes at 0x{:04X} for {} M-cycles",
        config.program.len(),
        config.load_address,
        config.ticks
    );

    let (snapshot, mcycles, fault) = {
        let mut cpu = Cpu::new(&mut *memory);
        // The first tick fetches from PC.
        cpu.regs.pc = config.load_address;

        for tick in 1..=config.ticks {
            cpu.tick();
            if cpu.is_locked() {
                break;
            }
            if matches!(config.trace_every, Some(n) if n != 0 && tick % n == 0) {
                cpu.log_register_dump();
            }
        }
        cpu.log_register_dump();
        (cpu.snapshot(), cpu.mcycles(), cpu.fault())
    };

    if let Some(fault) = fault {
        if config.stop_on_fault {
            return Err(anyhow::Error::new(fault)
                .context(format!("core locked after {mcycles} M-cycles ({snapshot})")));
        }
        log::warn!("Core locked after {mcycles} M-cycles: {fault}");
    }

    log::info!("Finished after {mcycles} M-cycles: {snapshot}");
    Ok(RunReport {
        snapshot,
        mcycles,
        fault,
        memory,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_program_loads_b_then_c() {
        let config = RunConfig::builder()
            .program(DEMO_PROGRAM.to_vec())
            .ticks(4)
            .build();
        let report = run(&config).unwrap();
        assert_eq!(report.snapshot.bc.get(), 0xFFFF);
        assert_eq!(report.mcycles, 4);
        assert_eq!(report.fault, None);
    }

    #[test]
    fn program_is_placed_at_the_load_address() {
        // LD A,0x5A ; LD (0xC000),A
        let config = RunConfig::builder()
            .program(vec![0x3E, 0x5A, 0xEA, 0x00, 0xC0])
            .load_address(0x0150)
            .ticks(1 + 2 + 4)
            .trace_every(2)
            .build();
        let report = run(&config).unwrap();
        assert_eq!(report.memory[0x0150], 0x3E);
        assert_eq!(report.memory[0xC000], 0x5A);
        assert_eq!(report.snapshot.pc, 0x0150 + 6);
    }

    #[test]
    fn oversized_program_is_rejected() {
        let config = RunConfig::builder()
            .program(vec![0; 0x20])
            .load_address(0xFFF0)
            .build();
        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("does not fit"), "{err}");
    }

    #[test]
    fn locked_core_is_an_error_unless_allowed() {
        let program = vec![0x00, 0xCB, 0x00];
        let config = RunConfig::builder().program(program.clone()).build();
        let err = run(&config).unwrap_err();
        assert!(err.downcast_ref::<Fault>().is_some(), "{err:#}");

        let config = RunConfig::builder()
            .program(program)
            .stop_on_fault(false)
            .build();
        let report = run(&config).unwrap();
        assert_eq!(
            report.fault,
            Some(Fault::Unimplemented {
                opcode: 0xCB,
                addr: 0x0001
            })
        );
        assert_eq!(report.mcycles, 2);
    }
}
