use anyhow::{Context, Result};

use cycleboy::{RunConfig, DEMO_PROGRAM};

fn parse_u16(text: &str) -> Result<u16> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => text.parse(),
    }
    .with_context(|| format!("invalid load address '{text}'"))
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let program_path = args.next().unwrap_or_default();

    let program = if program_path.is_empty() {
        log::info!("No program path provided, running bundled demo");
        DEMO_PROGRAM.to_vec()
    } else {
        log::info!("Loading program: '{}'", program_path);
        std::fs::read(&program_path)
            .with_context(|| format!("failed to read program '{program_path}'"))?
    };

    let ticks = match args.next() {
        Some(text) => text
            .parse()
            .with_context(|| format!("invalid tick count '{text}'"))?,
        None => 64,
    };
    let load_address = match args.next() {
        Some(text) => parse_u16(&text)?,
        None => 0,
    };

    let config = RunConfig::builder()
        .program(program)
        .ticks(ticks)
        .load_address(load_address)
        .build();
    let report = cycleboy::run(&config)?;

    println!("{}", report.snapshot);
    Ok(())
}
