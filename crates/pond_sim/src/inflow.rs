//! Periodic inflow seeding (`spec.md` §4.6 step 5).

use pond_common::{Mt19937, INST_MASK};
use pond_config::SimConfig;
use pond_grid::CellStore;

/// Picks a random grid position, resets its identity, and reseeds its
/// genome and RAM. Energy is added only while under the configured caps;
/// seeding still rewrites identity and genome even when the caps withhold
/// energy (`spec.md` §7 — failed inflow because of an energy cap).
///
/// `current_total_energy` is the aggregator's most recently computed total,
/// not a live recomputation — `spec.md` does not mandate a tick-by-tick
/// running total, and a full sweep every inflow tick would defeat the
/// point of a periodic statistics sweep.
pub fn seed_inflow(
    store: &mut CellStore,
    cfg: &SimConfig,
    rng: &mut Mt19937,
    cell_id_counter: &mut u64,
    current_total_energy: u64,
) {
    let x = (rng.next_word() % store.width() as u64) as usize;
    let y = (rng.next_word() % store.height() as u64) as usize;
    let idx = store.idx_of(x, y);

    *cell_id_counter += 1;
    let new_id = *cell_id_counter;
    let cell = store.cell_mut(idx);
    cell.reset_identity(new_id);

    let under_total_cap = cfg.total_energy_cap.map_or(true, |cap| current_total_energy < cap);
    let under_cell_cap = cfg.cell_energy_cap.map_or(true, |cap| cell.energy < cap);
    if under_total_cap && under_cell_cap {
        let variation = match cfg.inflow_rate_variation {
            Some(range) if range > 0 => rng.next_word() % range,
            _ => 0,
        };
        cell.energy += cfg.inflow_rate_base + variation;
    }

    for byte in cell.genome.iter_mut() {
        *byte = (rng.next_word() as u8) & INST_MASK;
    }

    if cfg.clear_ram {
        cell.ram = [0u8; 16];
    } else {
        for byte in cell.ram.iter_mut() {
            *byte = rng.next_word() as u8;
        }
    }
}
