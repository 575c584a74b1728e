//! Run statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Ticks and retirement:** Clock ticks elapsed and instructions retired.
//! 2. **Instruction mix:** Counts by class (ALU, load, branch, I/O, interrupt, system).
//! 3. **Control flow:** Taken branches and interrupts serviced.
//!
//! The report goes to stderr; stdout belongs to the program's `PRN` output.

use std::fmt::Write as _;
use std::time::Instant;

use crate::isa::InstructionClass;

/// Run statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Clock ticks processed.
    pub ticks: u64,
    /// Instructions that executed to completion.
    pub instructions_retired: u64,

    /// Retired ALU instructions.
    pub inst_alu: u64,
    /// Retired `LDI`s.
    pub inst_load: u64,
    /// Retired jumps and calls, taken or not.
    pub inst_branch: u64,
    /// Retired `PRN`s.
    pub inst_io: u64,
    /// Retired `INT`/`IRET`s.
    pub inst_interrupt: u64,
    /// Retired `HLT`s.
    pub inst_system: u64,

    /// Jumps, calls and interrupt returns that redirected the PC.
    pub branches_taken: u64,
    /// Interrupts dispatched to a handler.
    pub interrupts_serviced: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            ticks: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_branch: 0,
            inst_io: 0,
            inst_interrupt: 0,
            inst_system: 0,
            branches_taken: 0,
            interrupts_serviced: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction of the given class.
    pub fn retire(&mut self, class: InstructionClass) {
        self.instructions_retired += 1;
        match class {
            InstructionClass::Alu => self.inst_alu += 1,
            InstructionClass::Load => self.inst_load += 1,
            InstructionClass::Branch => self.inst_branch += 1,
            InstructionClass::Io => self.inst_io += 1,
            InstructionClass::Interrupt => self.inst_interrupt += 1,
            InstructionClass::System => self.inst_system += 1,
        }
    }

    /// Formats the statistics report.
    pub fn report(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let retired = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / retired) * 100.0;

        let mut out = String::new();
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "LS-8 RUN STATISTICS");
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "host_seconds             {seconds:.4} s");
        let _ = writeln!(out, "sim_ticks                {}", self.ticks);
        let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "INSTRUCTION MIX");
        for (name, count) in [
            ("alu", self.inst_alu),
            ("load", self.inst_load),
            ("branch", self.inst_branch),
            ("io", self.inst_io),
            ("interrupt", self.inst_interrupt),
            ("system", self.inst_system),
        ] {
            let _ = writeln!(out, "  op.{name:<20} {count} ({:.2}%)", pct(count));
        }
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "branch.taken             {}", self.branches_taken);
        let _ = writeln!(out, "interrupts.serviced      {}", self.interrupts_serviced);
        let _ = writeln!(out, "==========================================================");
        out
    }

    /// Prints the report to stderr.
    pub fn print(&self) {
        eprint!("{}", self.report());
    }
}
