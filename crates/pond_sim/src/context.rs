//! The simulation context and per-tick driver (`spec.md` §4.6).
//!
//! Grounded on `aion_sim::kernel::SimKernel`: process-wide mutable state
//! (event queue there, PRNG/cell-id counter/stats here) bundled into a
//! single struct with a `run_to_completion`-shaped driver, rather than a
//! loose collection of global variables.

use std::time::{SystemTime, UNIX_EPOCH};

use pond_common::Mt19937;
use pond_config::SimConfig;
use pond_grid::CellStore;
use pond_report::{ColorScheme, PeriodStats, Snapshot};
use pond_topology::Topology;
use pond_vm::run_vm;

use crate::hooks::{SimHooks, ViableEdge};
use crate::inflow::seed_inflow;

/// Process-wide simulation state: the grid, topology, PRNG, and the
/// counters the statistics aggregator and cell-id allocator need across
/// the whole run.
pub struct SimContext {
    /// The grid configuration this context was built from.
    pub cfg: SimConfig,
    /// The dense cell grid.
    pub store: CellStore,
    /// The neighbor topology derived from `cfg.directions`.
    pub topology: Topology,
    /// The shared pseudo-random generator.
    pub rng: Mt19937,
    /// Ticks elapsed since the simulation started.
    pub clock: u64,
    /// Monotonic cell-identity allocator.
    pub cell_id_counter: u64,
    /// Tallies accumulated since the last report.
    pub stats: PeriodStats,
    /// The aggregator snapshot computed at the most recent report.
    pub last_snapshot: Snapshot,
    /// The active visualization color scheme.
    pub color_scheme: ColorScheme,
}

impl SimContext {
    /// Builds a fresh context: allocates the grid, seeds the PRNG from
    /// `cfg.init_seed` (or the wall clock if unset), and zeroes every
    /// counter.
    pub fn new(cfg: SimConfig) -> Self {
        let seed = cfg.init_seed.unwrap_or_else(wall_clock_seed) as u32;
        let topology = Topology::new(cfg.pond_size_x, cfg.pond_size_y, cfg.directions);
        let store = CellStore::new(cfg.pond_size_x, cfg.pond_size_y, cfg.pond_depth);
        SimContext {
            cfg,
            store,
            topology,
            rng: Mt19937::new(seed),
            clock: 0,
            cell_id_counter: 0,
            stats: PeriodStats::default(),
            last_snapshot: Snapshot::default(),
            color_scheme: ColorScheme::default(),
        }
    }

    /// Runs exactly one tick: the ordering guarantee of `spec.md` §5 is
    /// stop/report/refresh/dump checks, then inflow seeding, then random
    /// cell execution. Returns `false` once `STOP_AT` has been reached.
    pub fn tick(&mut self, hooks: &mut dyn SimHooks) -> bool {
        if let Some(stop_at) = self.cfg.stop_at {
            if self.clock >= stop_at {
                hooks.on_dump(self.clock, &self.store);
                return false;
            }
        }

        if self.clock % self.cfg.report_frequency == 0 {
            let snap = Snapshot::sweep(&self.store);
            hooks.on_report(self.clock, &self.stats, &snap);

            let was_zero = self.last_snapshot.total_viable_replicators == 0;
            let is_zero = snap.total_viable_replicators == 0;
            if was_zero && !is_zero {
                hooks.on_viable_edge(self.clock, ViableEdge::Appeared);
            } else if !was_zero && is_zero {
                hooks.on_viable_edge(self.clock, ViableEdge::Vanished);
            }

            self.last_snapshot = snap;
            self.stats.reset();
        }

        if self.clock % self.cfg.refresh_frequency == 0 {
            hooks.on_refresh(self.clock, &self.store, self.color_scheme, &self.last_snapshot);
        }

        if self.clock % self.cfg.dump_frequency == 0 {
            hooks.on_dump(self.clock, &self.store);
        }

        if self.clock % self.cfg.inflow_frequency == 0 {
            seed_inflow(
                &mut self.store,
                &self.cfg,
                &mut self.rng,
                &mut self.cell_id_counter,
                self.last_snapshot.total_energy,
            );
        }

        let x = (self.rng.next_word() % self.store.width() as u64) as usize;
        let y = (self.rng.next_word() % self.store.height() as u64) as usize;
        let idx = self.store.idx_of(x, y);
        let outcome = run_vm(
            &mut self.store,
            idx,
            &self.topology,
            &self.cfg,
            &mut self.rng,
            &mut self.cell_id_counter,
        );
        self.stats.record(&outcome);

        self.clock += 1;
        true
    }

    /// Runs ticks until `tick` reports the simulation has stopped.
    pub fn run_until_stop(&mut self, hooks: &mut dyn SimHooks) {
        while self.tick(hooks) {}
    }
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
