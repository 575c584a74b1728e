//! Simulator: owns the CPU and the clock that paces it.
//!
//! The reference machine ticks at 1 kHz. Pacing is approximate and never changes what
//! a program computes; with `clock.paced = false` ticks run back to back. Halting
//! ends the loop, so no tick runs after the CPU reaches Halted.

use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{info, warn};

use super::loader::{self, LoadError};
use crate::common::Fault;
use crate::config::{ClockConfig, Config, ConfigError};
use crate::core::Cpu;
use crate::soc::Ram;

/// How a run ended without a fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    /// The program executed `HLT`.
    Halted,
    /// `general.max_ticks` ran out first.
    TickLimit,
}

/// Anything that can stop a simulation from being built or completed.
#[derive(Debug, Error)]
pub enum SimError {
    /// Fatal CPU fault.
    #[error(transparent)]
    Fault(#[from] Fault),
    /// Program could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Fixed-period tick pacer.
#[derive(Clone, Debug)]
pub struct Clock {
    period: Option<Duration>,
    deadline: Option<Instant>,
}

impl Clock {
    /// A clock following `config`; unpaced clocks never sleep.
    pub const fn new(config: &ClockConfig) -> Self {
        let period = if config.paced {
            Some(Duration::from_micros(config.tick_period_us))
        } else {
            None
        };
        Self {
            period,
            deadline: None,
        }
    }

    /// Tick period, if paced.
    pub const fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Blocks until the next tick is due.
    ///
    /// The first call returns immediately. A clock that has fallen more than one period
    /// behind restarts from now instead of bursting to catch up.
    pub fn wait(&mut self) {
        let Some(period) = self.period else {
            return;
        };
        let now = Instant::now();
        let due = match self.deadline {
            Some(deadline) if deadline + period >= now => deadline,
            _ => now,
        };
        if due > now {
            thread::sleep(due - now);
        }
        self.deadline = Some(due + period);
    }
}

/// Top-level simulator: CPU plus clock.
#[derive(Debug)]
pub struct Simulator<W = io::Stdout> {
    /// CPU state, including its RAM.
    pub cpu: Cpu<W>,
    clock: Clock,
    max_ticks: Option<u64>,
}

impl Simulator<io::Stdout> {
    /// Validates `config`, loads the program file at `path` and builds a simulator
    /// that prints to standard output.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`] or [`SimError::Load`].
    pub fn from_file(path: impl AsRef<Path>, config: &Config) -> Result<Self, SimError> {
        let program = loader::read_program(path)?;
        Self::load(&program, config, io::stdout())
    }
}

impl<W: Write> Simulator<W> {
    /// Creates a simulator over already-loaded RAM, printing to `out`.
    pub fn with_output(ram: Ram, config: &Config, out: W) -> Self {
        Self {
            cpu: Cpu::with_output(ram, config, out),
            clock: Clock::new(&config.clock),
            max_ticks: config.general.max_ticks,
        }
    }

    /// Validates `config`, allocates RAM, writes `program` into it from address 0 and
    /// builds a simulator printing to `out`.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`] for an invalid configuration, [`SimError::Load`] if the
    /// program does not fit.
    pub fn load(program: &[u8], config: &Config, out: W) -> Result<Self, SimError> {
        config.validate()?;
        let mut ram = Ram::new(config.memory.ram_size);
        let len = loader::load_into(&mut ram, program)?;
        info!(bytes = len, "program loaded");
        Ok(Self::with_output(ram, config, out))
    }

    /// Advances the CPU by one tick without pacing.
    ///
    /// # Errors
    ///
    /// The [`Fault`] that halted the CPU.
    pub fn tick(&mut self) -> Result<(), Fault> {
        self.cpu.tick()
    }

    /// Runs the CPU on the clock until it halts or the tick limit is reached.
    ///
    /// # Errors
    ///
    /// The [`Fault`] that halted the CPU.
    pub fn run(&mut self) -> Result<Exit, Fault> {
        self.cpu.start();
        while !self.cpu.is_halted() {
            if self
                .max_ticks
                .is_some_and(|limit| self.cpu.stats.ticks >= limit)
            {
                warn!(ticks = self.cpu.stats.ticks, "tick limit reached");
                return Ok(Exit::TickLimit);
            }
            self.clock.wait();
            self.cpu.tick()?;
        }
        Ok(Exit::Halted)
    }
}
