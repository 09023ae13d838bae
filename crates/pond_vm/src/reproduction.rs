//! Post-execution reproduction and RAM decay (`spec.md` §4.5, final paragraphs).

use pond_access::access_allowed;
use pond_common::{Mt19937, Sense};
use pond_config::SimConfig;
use pond_grid::CellStore;
use pond_topology::Topology;

use crate::opcodes::facing_neighbor_idx;
use crate::state::VmState;

/// Runs the handoff from a halted activation's output buffer into the
/// facing neighbor, if the cell ended with enough energy and a non-`STOP`
/// first output byte. Returns 1 if the overwritten target was a viable
/// replicator, 0 otherwise.
pub fn post_execution(
    store: &mut CellStore,
    self_idx: usize,
    topology: &Topology,
    cfg: &SimConfig,
    rng: &mut Mt19937,
    state: &VmState,
    cell_id_counter: &mut u64,
) -> u32 {
    let mut viable_replaced = 0;
    let self_energy = store.cell(self_idx).energy;

    if self_energy >= cfg.reproduction_cost && state.output_buf[0] != pond_common::OPCODE_STOP {
        let facing = store.cell(self_idx).facing;
        let neighbor_idx = facing_neighbor_idx(store, topology, self_idx, facing);
        let (self_cell, neighbor_cell) = store.pair_mut(self_idx, neighbor_idx);

        if neighbor_cell.energy > 0 && access_allowed(neighbor_cell, state.reg, Sense::Negative, rng) {
            let was_viable = neighbor_cell.generation > 2;
            *cell_id_counter += 1;
            neighbor_cell.id = *cell_id_counter;
            neighbor_cell.parent_id = self_cell.id;
            neighbor_cell.lineage = self_cell.lineage;
            neighbor_cell.generation = self_cell.generation + 1;
            neighbor_cell.logo = 0;
            neighbor_cell.facing = 0;
            neighbor_cell.genome = state.output_buf.clone().into_boxed_slice();
            if cfg.clear_ram {
                neighbor_cell.ram = [0u8; 16];
            } else {
                for b in neighbor_cell.ram.iter_mut() {
                    *b = rng.next_word() as u8;
                }
            }
            self_cell.energy -= cfg.reproduction_cost;
            if was_viable {
                viable_replaced = 1;
            }
        }
    }

    if store.cell(self_idx).energy == 0 && cfg.decay_ram {
        let idx = (rng.next_word() % 16) as usize;
        let value = rng.next_word() as u8;
        store.cell_mut(self_idx).ram[idx] = value;
    }

    viable_replaced
}
