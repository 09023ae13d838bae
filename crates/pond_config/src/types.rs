//! Configuration types deserialized from `pond.toml` (`spec.md` §6).

use serde::Deserialize;

/// The number of toroidal neighbors each cell has; selected at launch time
/// rather than by Cargo feature flag (`spec.md` §9).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionCount {
    /// 4-connected (N/E/S/W).
    Four,
    /// 6-connected hexagonal, offset-coordinate.
    Six,
    /// 8-connected (N/NE/E/SE/S/SW/W/NW).
    Eight,
}

impl Default for DirectionCount {
    fn default() -> Self {
        DirectionCount::Six
    }
}

/// The full launch-time parameter block (`spec.md` §6).
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Grid width.
    pub pond_size_x: usize,
    /// Grid height.
    pub pond_size_y: usize,
    /// Genome length in opcodes; must be a multiple of 16.
    pub pond_depth: usize,
    /// Neighbor topology.
    pub directions: DirectionCount,
    /// Per-instruction mutation probability, out of 2^32.
    pub mutation_rate: u32,
    /// Ticks between inflow seeding events.
    pub inflow_frequency: u64,
    /// Base energy added by an inflow event.
    pub inflow_rate_base: u64,
    /// Additional random energy range added by an inflow event, if any.
    pub inflow_rate_variation: Option<u64>,
    /// Cap on total grid energy beyond which inflow adds no energy.
    pub total_energy_cap: Option<u64>,
    /// Cap on a single cell's energy beyond which inflow adds no energy.
    pub cell_energy_cap: Option<u64>,
    /// Divisor applied to a cell's energy on a failed `KILL` of a viable target.
    pub failed_kill_penalty: u64,
    /// Energy cost charged to a cell on successful reproduction.
    pub reproduction_cost: u64,
    /// Ticks between statistics report snapshots.
    pub report_frequency: u64,
    /// Ticks between genome dumps.
    pub dump_frequency: u64,
    /// Ticks between visualization refreshes.
    pub refresh_frequency: u64,
    /// Tick at which the simulation terminates, if set.
    pub stop_at: Option<u64>,
    /// The `inst_ptr` value a fresh VM activation starts from.
    pub exec_start_inst: usize,
    /// The sense flag (0 = negative, 1 = positive) used by the `TURN` opcode.
    pub combine_sense: u8,
    /// When true, fresh RAM (inflow, reproduction) is zeroed; otherwise randomized.
    pub clear_ram: bool,
    /// When true, a cell that runs out of energy has one RAM byte scrambled.
    pub decay_ram: bool,
    /// The PRNG seed. If unset, the caller derives one from the wall clock.
    pub init_seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            pond_size_x: 640,
            pond_size_y: 480,
            pond_depth: 512,
            directions: DirectionCount::Six,
            mutation_rate: 100_000,
            inflow_frequency: 100,
            inflow_rate_base: 2000,
            inflow_rate_variation: Some(4000),
            total_energy_cap: None,
            cell_energy_cap: Some(10_000),
            failed_kill_penalty: 3,
            reproduction_cost: 20,
            report_frequency: 1_000_000,
            dump_frequency: 10_000_000,
            refresh_frequency: 20_000,
            stop_at: None,
            exec_start_inst: 0,
            combine_sense: 0,
            clear_ram: false,
            decay_ram: false,
            init_seed: None,
        }
    }
}
