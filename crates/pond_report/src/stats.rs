//! Per-report tallies, reset at every report boundary (`spec.md` §4.7).

use pond_membank::BankCounters;
use pond_vm::VmOutcome;

/// Counters accumulated since the last statistics report, reset by
/// [`PeriodStats::reset`] after each report line is emitted.
#[derive(Clone, Default, Debug)]
pub struct PeriodStats {
    /// Per-opcode execution counts, indexed by opcode value.
    pub inst_freq: [u64; 32],
    /// Number of cell activations (cells with energy > 0 that were selected).
    pub cell_executions: u64,
    /// Viable replicators overwritten by a successful reproduction.
    pub viable_cells_replaced: u64,
    /// Viable replicators overwritten by a successful `KILL`.
    pub viable_cells_killed: u64,
    /// Successful `SHARE`s against a viable replicator.
    pub viable_cell_shares: u64,
    /// Per-bank memory access counters.
    pub mem: BankCounters,
}

impl PeriodStats {
    /// Folds one activation's outcome into the running tallies.
    pub fn record(&mut self, outcome: &VmOutcome) {
        if !outcome.executed {
            return;
        }
        self.cell_executions += 1;
        for (total, count) in self.inst_freq.iter_mut().zip(outcome.inst_freq.iter()) {
            *total += count;
        }
        self.viable_cells_replaced += outcome.viable_replaced as u64;
        self.viable_cells_killed += outcome.viable_killed as u64;
        self.viable_cell_shares += outcome.viable_shared as u64;
        self.mem.special_reads += outcome.counters.special_reads;
        self.mem.private_reads += outcome.counters.private_reads;
        self.mem.output_reads += outcome.counters.output_reads;
        self.mem.input_reads += outcome.counters.input_reads;
        self.mem.special_writes += outcome.counters.special_writes;
        self.mem.private_writes += outcome.counters.private_writes;
        self.mem.output_writes += outcome.counters.output_writes;
        self.mem.input_writes += outcome.counters.input_writes;
    }

    /// Resets every counter to zero, done after each report is emitted.
    pub fn reset(&mut self) {
        *self = PeriodStats::default();
    }
}
