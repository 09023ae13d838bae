//! The cell virtual machine: fetch-execute loop, mutation, and reproduction
//! handoff (`spec.md` §4.5).

#![warn(missing_docs)]

pub mod mutation;
pub mod opcodes;
pub mod reproduction;
pub mod state;

use pond_common::{Mt19937, Opcode};
use pond_config::SimConfig;
use pond_grid::CellStore;
use pond_membank::BankCounters;
use pond_topology::Topology;

use mutation::maybe_mutate;
use reproduction::post_execution;
use state::VmState;

/// Everything the statistics aggregator needs from one VM activation.
#[derive(Default)]
pub struct VmOutcome {
    /// Whether the cell actually ran (false if it had no energy to start).
    pub executed: bool,
    /// Per-opcode execution counts for this activation, indexed by opcode value.
    pub inst_freq: [u64; 32],
    /// Viable replicators overwritten by a successful `KILL`.
    pub viable_killed: u32,
    /// Successful `SHARE`s against a viable replicator.
    pub viable_shared: u32,
    /// Viable replicators overwritten by a successful reproduction.
    pub viable_replaced: u32,
    /// Per-bank memory access counters accumulated during the activation.
    pub counters: BankCounters,
}

/// Runs one full VM activation on the cell at `idx`: fetch-execute until
/// `STOP`, energy exhaustion, or a loop-stack overflow, then attempts
/// reproduction and RAM decay. A cell with no energy is not activated at
/// all (`spec.md` §8 boundary 8).
pub fn run_vm(
    store: &mut CellStore,
    idx: usize,
    topology: &Topology,
    cfg: &SimConfig,
    rng: &mut Mt19937,
    cell_id_counter: &mut u64,
) -> VmOutcome {
    if store.cell(idx).energy == 0 {
        return VmOutcome::default();
    }

    let pond_depth = store.pond_depth();
    let mut state = VmState::new(pond_depth, cfg.exec_start_inst);
    let mut outcome = VmOutcome {
        executed: true,
        ..VmOutcome::default()
    };

    while store.cell(idx).energy > 0 && !state.stop {
        let inst_raw = store.cell(idx).genome[state.inst_ptr];

        let inst = {
            let cell = store.cell_mut(idx);
            maybe_mutate(inst_raw, &mut state, &mut cell.ram, cfg.mutation_rate, rng)
        };

        {
            let cell = store.cell_mut(idx);
            cell.energy = cell.energy.saturating_sub(1);
        }

        let op = Opcode::from_u8(inst);
        let mut jumped = false;

        if state.false_loop_depth > 0 {
            match op {
                Opcode::Loop => state.false_loop_depth += 1,
                Opcode::Rep => state.false_loop_depth -= 1,
                _ => {}
            }
        } else {
            outcome.inst_freq[inst as usize] += 1;
            let effects = opcodes::execute(op, store, idx, topology, cfg, rng, &mut state, cell_id_counter);
            jumped = effects.jumped;
            outcome.viable_killed += effects.viable_killed;
            outcome.viable_shared += effects.viable_shared;
        }

        if !jumped {
            state.inst_ptr = if state.inst_ptr + 1 >= pond_depth {
                cfg.exec_start_inst
            } else {
                state.inst_ptr + 1
            };
        }
    }

    outcome.counters = state.counters;
    outcome.viable_replaced = post_execution(store, idx, topology, cfg, rng, &state, cell_id_counter);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use pond_config::DirectionCount;

    fn env(pond_depth: usize) -> (CellStore, Topology, SimConfig) {
        let store = CellStore::new(8, 8, pond_depth);
        let topology = Topology::new(8, 8, DirectionCount::Four);
        let cfg = SimConfig {
            mutation_rate: 0,
            ..Default::default()
        };
        (store, topology, cfg)
    }

    #[test]
    fn a_cell_with_zero_energy_is_never_executed() {
        let (mut store, topology, cfg) = env(16);
        let mut rng = Mt19937::new(1);
        let mut counter = 0u64;
        let outcome = run_vm(&mut store, 0, &topology, &cfg, &mut rng, &mut counter);
        assert!(!outcome.executed);
    }

    #[test]
    fn energy_decrements_by_exactly_one_per_fetched_instruction() {
        let (mut store, topology, cfg) = env(16);
        let mut rng = Mt19937::new(1);
        let mut counter = 0u64;
        let cell = store.cell_mut(0);
        cell.energy = 5;
        for i in 0..16 {
            cell.genome[i] = Opcode::Inc as u8;
        }
        let outcome = run_vm(&mut store, 0, &topology, &cfg, &mut rng, &mut counter);
        assert!(outcome.executed);
        assert_eq!(store.cell(0).energy, 0);
    }

    #[test]
    fn false_loop_is_not_counted_in_instruction_frequency() {
        let (mut store, topology, cfg) = env(16);
        let mut rng = Mt19937::new(1);
        let mut counter = 0u64;
        let cell = store.cell_mut(0);
        cell.energy = 20;
        let prog = [
            Opcode::Zero as u8,  // reg = 0
            Opcode::Loop as u8,  // reg == 0 -> false_loop_depth = 1
            Opcode::Inc as u8,   // skipped, not counted
            Opcode::Rep as u8,   // false_loop_depth -> 0
            Opcode::Stop as u8,
        ];
        for (i, &b) in prog.iter().enumerate() {
            cell.genome[i] = b;
        }
        for i in prog.len()..16 {
            cell.genome[i] = Opcode::Stop as u8;
        }
        let outcome = run_vm(&mut store, 0, &topology, &cfg, &mut rng, &mut counter);
        assert_eq!(outcome.inst_freq[Opcode::Inc as usize], 0);
        assert_eq!(outcome.inst_freq[Opcode::Zero as usize], 1);
    }
}
