//! # Simulator Tests

use std::io::Write;
use std::time::{Duration, Instant};

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;
use ls8_core::config::{ClockConfig, Config, ConfigError};
use ls8_core::sim::{Clock, Exit, SimError, Simulator};
use ls8_core::soc::Ram;
use tempfile::NamedTempFile;

#[test]
fn test_run_reports_halt() {
    let mut ctx = TestContext::new(&ProgramBuilder::new().hlt().build());
    assert_eq!(ctx.run(), Ok(Exit::Halted));
}

#[test]
fn test_tick_limit_stops_infinite_loop() {
    // 0: LDI R0,3  3: JMP R0
    let program = ProgramBuilder::new().ldi(0, 3).jmp(0).build();
    let mut config = TestContext::config();
    config.general.max_ticks = Some(50);

    let mut ctx = TestContext::with_config(&program, &config);
    assert_eq!(ctx.run(), Ok(Exit::TickLimit));
    assert_eq!(ctx.cpu().stats.ticks, 50);
    assert!(!ctx.cpu().is_halted());
}

#[test]
fn test_load_rejects_invalid_config() {
    let mut config = TestContext::config();
    config.memory.ram_size = 0;
    let err = Simulator::load(&[1], &config, Vec::new()).unwrap_err();
    assert!(matches!(err, SimError::Config(ConfigError::Invalid(_))));
}

#[test]
fn test_load_rejects_program_larger_than_ram() {
    let mut config = TestContext::config();
    config.memory.ram_size = 4;
    config.memory.stack_top = 3;
    let err = Simulator::load(&[1; 5], &config, Vec::new()).unwrap_err();
    assert!(matches!(err, SimError::Load(_)));
}

#[test]
fn test_with_output_over_prepared_ram() {
    let mut ram = Ram::default();
    ram.write_slice(0, &ProgramBuilder::new().ldi(0, 9).prn(0).hlt().build())
        .unwrap();
    let mut sim = Simulator::with_output(ram, &TestContext::config(), Vec::new());
    assert_eq!(sim.run(), Ok(Exit::Halted));
    assert_eq!(sim.cpu.output(), b"9\n");
}

#[test]
fn test_from_file_loads_program() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"00000001 # HLT\n").unwrap();
    file.flush().unwrap();

    let sim = Simulator::from_file(file.path(), &TestContext::config()).unwrap();
    assert_eq!(sim.cpu.ram.read(0), Ok(1));
}

#[test]
fn test_unpaced_clock_never_sleeps() {
    let mut clock = Clock::new(&ClockConfig {
        tick_period_us: 1_000_000,
        paced: false,
    });
    assert_eq!(clock.period(), None);
    let start = Instant::now();
    for _ in 0..100 {
        clock.wait();
    }
    assert!(start.elapsed() < Duration::from_millis(500));
}

#[test]
fn test_paced_clock_spaces_ticks() {
    let mut clock = Clock::new(&ClockConfig {
        tick_period_us: 2_000,
        paced: true,
    });
    assert_eq!(clock.period(), Some(Duration::from_micros(2_000)));

    let start = Instant::now();
    for _ in 0..6 {
        clock.wait();
    }
    // The first wait is free; five periods follow.
    assert!(start.elapsed() >= Duration::from_millis(10));
}

#[test]
fn test_paced_run_produces_same_output() {
    let program = ProgramBuilder::new().ldi(0, 10).ldi(1, 20).mul(0, 1).prn(0).hlt().build();
    let mut config = Config::default();
    config.clock.tick_period_us = 100;

    let mut sim = Simulator::load(&program, &config, Vec::new()).unwrap();
    assert_eq!(sim.run(), Ok(Exit::Halted));
    assert_eq!(sim.cpu.output(), b"200\n");
}
