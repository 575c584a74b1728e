//! CPU lifecycle.

use std::fmt;

/// Where the CPU is in its lifecycle.
///
/// `Idle` on construction, `Running` once the clock starts, `Halted` after `HLT` or a
/// fault. `Halted` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CpuState {
    /// Constructed, no tick has run yet.
    #[default]
    Idle,
    /// Ticking.
    Running,
    /// Stopped; no further ticks are processed.
    Halted,
}

impl CpuState {
    /// Returns `true` once the CPU has halted.
    pub const fn is_halted(self) -> bool {
        matches!(self, Self::Halted)
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Halted => "halted",
        }
    }
}

impl fmt::Display for CpuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
