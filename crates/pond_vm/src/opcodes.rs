//! The 32-opcode execution table (`spec.md` §4.5).

use pond_access::access_allowed;
use pond_common::{Mt19937, Opcode, Sense, INST_MASK, MEM_MASK, OPCODE_STOP, REG_MASK};
use pond_config::SimConfig;
use pond_grid::CellStore;
use pond_membank::{read_mem, write_mem};
use pond_topology::Topology;

use crate::state::VmState;

/// Tallies produced by executing one opcode that affect the statistics
/// aggregator beyond the per-instruction frequency count.
#[derive(Default)]
pub struct OpcodeEffects {
    /// Set when `REP` actually jumped back to its matching `LOOP`; the
    /// caller must skip the normal end-of-cycle `inst_ptr` advance.
    pub jumped: bool,
    /// Incremented when `KILL` erases a viable replicator.
    pub viable_killed: u32,
    /// Incremented when `SHARE` executes against a viable replicator.
    pub viable_shared: u32,
}

/// Computes the flat grid index of the cell `self_idx` is facing.
pub(crate) fn facing_neighbor_idx(
    store: &CellStore,
    topology: &Topology,
    self_idx: usize,
    facing: u8,
) -> usize {
    let (x, y) = store.xy_of(self_idx);
    let (nx, ny) = topology.neighbor(x, y, facing);
    store.idx_of(nx, ny)
}

/// Executes one already-fetched, already-mutated opcode against the cell at
/// `self_idx`. Does not advance `inst_ptr` or decrement energy — those are
/// the caller's responsibility (`spec.md` §4.5 steps 3 and 5).
pub fn execute(
    op: Opcode,
    store: &mut CellStore,
    self_idx: usize,
    topology: &Topology,
    cfg: &SimConfig,
    rng: &mut Mt19937,
    state: &mut VmState,
    cell_id_counter: &mut u64,
) -> OpcodeEffects {
    let mut effects = OpcodeEffects::default();
    let pond_depth = store.pond_depth();

    match op {
        Opcode::Stop => state.stop = true,
        Opcode::Fwd => state.io_ptr = (state.io_ptr + 1) % pond_depth,
        Opcode::Back => state.io_ptr = (state.io_ptr + pond_depth - 1) % pond_depth,
        Opcode::Inc => state.reg = state.reg.wrapping_add(1) & REG_MASK,
        Opcode::Dec => state.reg = state.reg.wrapping_sub(1) & REG_MASK,
        Opcode::Readg => {
            let cell = store.cell(self_idx);
            state.reg = cell.genome[state.io_ptr];
        }
        Opcode::Writeg => {
            let cell = store.cell_mut(self_idx);
            cell.genome[state.io_ptr] = state.reg & INST_MASK;
        }
        Opcode::Reado => state.reg = state.output_buf[state.io_ptr],
        Opcode::Writeo => state.output_buf[state.io_ptr] = state.reg & INST_MASK,

        Opcode::Loop => {
            if state.reg != 0 && state.loop_stack.len() < pond_depth {
                state.loop_stack.push(state.inst_ptr);
            } else if state.loop_stack.len() >= pond_depth {
                state.stop = true;
            } else {
                state.false_loop_depth = 1;
            }
        }
        Opcode::Rep => {
            if let Some(target) = state.loop_stack.pop() {
                if state.reg != 0 {
                    state.inst_ptr = target;
                    effects.jumped = true;
                }
            }
        }

        Opcode::Turn => {
            let cell_generation = store.cell(self_idx).generation;
            let facing = store.cell(self_idx).facing;
            let io_ptr = state.io_ptr;
            let self_byte = store.cell(self_idx).genome[io_ptr];
            if cell_generation > 2 {
                let neighbor_idx = facing_neighbor_idx(store, topology, self_idx, facing);
                let (_self_cell, neighbor_cell) = store.pair_mut(self_idx, neighbor_idx);
                let combine_sense = Sense::from_config_flag(cfg.combine_sense);
                if neighbor_cell.generation > 2
                    && access_allowed(neighbor_cell, state.reg, combine_sense, rng)
                {
                    let from_self = (rng.next_word() & 1) != 0;
                    state.reg = if from_self {
                        self_byte
                    } else {
                        neighbor_cell.genome[io_ptr]
                    };
                } else {
                    state.reg = self_byte;
                }
            } else {
                state.reg = self_byte;
            }
        }

        Opcode::Xchg => {
            state.inst_ptr = if state.inst_ptr + 1 >= pond_depth {
                cfg.exec_start_inst
            } else {
                state.inst_ptr + 1
            };
            let cell = store.cell_mut(self_idx);
            let tmp = state.reg;
            state.reg = cell.genome[state.inst_ptr];
            cell.genome[state.inst_ptr] = tmp & INST_MASK;
        }

        Opcode::Kill => {
            let facing = store.cell(self_idx).facing;
            let neighbor_idx = facing_neighbor_idx(store, topology, self_idx, facing);
            let (self_cell, neighbor_cell) = store.pair_mut(self_idx, neighbor_idx);
            if access_allowed(neighbor_cell, state.reg, Sense::Negative, rng) {
                let was_viable = neighbor_cell.generation > 2;
                *cell_id_counter += 1;
                let new_id = *cell_id_counter;
                for b in neighbor_cell.genome.iter_mut() {
                    *b = OPCODE_STOP;
                }
                neighbor_cell.reset_identity(new_id);
                if was_viable {
                    effects.viable_killed = 1;
                }
            } else if neighbor_cell.generation > 2 {
                let penalty = self_cell.energy / cfg.failed_kill_penalty;
                self_cell.energy = self_cell.energy.saturating_sub(penalty);
            }
        }

        Opcode::Share => {
            let facing = store.cell(self_idx).facing;
            let neighbor_idx = facing_neighbor_idx(store, topology, self_idx, facing);
            let (self_cell, neighbor_cell) = store.pair_mut(self_idx, neighbor_idx);
            if access_allowed(neighbor_cell, state.reg, Sense::Positive, rng) {
                let total = self_cell.energy + neighbor_cell.energy;
                neighbor_cell.energy = total / 2;
                self_cell.energy = total - neighbor_cell.energy;
                if neighbor_cell.generation > 2 {
                    effects.viable_shared = 1;
                }
            }
        }

        Opcode::Zero => state.reg = 0,
        Opcode::Setp => state.io_ptr = (state.reg as usize) % pond_depth,
        Opcode::Nextb => state.mem_ptr = state.mem_ptr.wrapping_add(8) & MEM_MASK,
        Opcode::Prevb => state.mem_ptr = state.mem_ptr.wrapping_sub(8) & MEM_MASK,
        Opcode::Nextm => state.mem_ptr = state.mem_ptr.wrapping_add(1) & MEM_MASK,
        Opcode::Prevm => state.mem_ptr = state.mem_ptr.wrapping_sub(1) & MEM_MASK,

        Opcode::Readm => {
            let facing = store.cell(self_idx).facing;
            let neighbor_idx = facing_neighbor_idx(store, topology, self_idx, facing);
            let (self_cell, neighbor_cell) = store.pair_mut(self_idx, neighbor_idx);
            state.reg = read_mem(self_cell, Some(&*neighbor_cell), state.mem_ptr, &mut state.counters);
        }
        Opcode::Writem => {
            let facing = store.cell(self_idx).facing;
            let neighbor_idx = facing_neighbor_idx(store, topology, self_idx, facing);
            let reg = state.reg;
            let mem_ptr = state.mem_ptr;
            let (self_cell, neighbor_cell) = store.pair_mut(self_idx, neighbor_idx);
            write_mem(self_cell, Some(neighbor_cell), mem_ptr, reg, &mut state.counters, rng);
        }
        Opcode::Clearm => {
            let cell = store.cell_mut(self_idx);
            cell.ram = [0u8; 16];
        }
        Opcode::Add => {
            let facing = store.cell(self_idx).facing;
            let neighbor_idx = facing_neighbor_idx(store, topology, self_idx, facing);
            let (self_cell, neighbor_cell) = store.pair_mut(self_idx, neighbor_idx);
            let v = read_mem(self_cell, Some(&*neighbor_cell), state.mem_ptr, &mut state.counters);
            state.reg = state.reg.wrapping_add(v) & REG_MASK;
        }
        Opcode::Sub => {
            let facing = store.cell(self_idx).facing;
            let neighbor_idx = facing_neighbor_idx(store, topology, self_idx, facing);
            let (self_cell, neighbor_cell) = store.pair_mut(self_idx, neighbor_idx);
            let v = read_mem(self_cell, Some(&*neighbor_cell), state.mem_ptr, &mut state.counters);
            state.reg = state.reg.wrapping_sub(v) & REG_MASK;
        }
        Opcode::Mul => {
            let facing = store.cell(self_idx).facing;
            let neighbor_idx = facing_neighbor_idx(store, topology, self_idx, facing);
            let (self_cell, neighbor_cell) = store.pair_mut(self_idx, neighbor_idx);
            let v = read_mem(self_cell, Some(&*neighbor_cell), state.mem_ptr, &mut state.counters);
            state.reg = state.reg.wrapping_mul(v) & REG_MASK;
        }
        Opcode::Div => {
            let facing = store.cell(self_idx).facing;
            let neighbor_idx = facing_neighbor_idx(store, topology, self_idx, facing);
            let (self_cell, neighbor_cell) = store.pair_mut(self_idx, neighbor_idx);
            let zero_check = read_mem(self_cell, Some(&*neighbor_cell), state.mem_ptr, &mut state.counters);
            if zero_check == 0 {
                state.reg = 0;
            } else {
                let (self_cell, neighbor_cell) = store.pair_mut(self_idx, neighbor_idx);
                let divisor = read_mem(self_cell, Some(&*neighbor_cell), state.mem_ptr, &mut state.counters);
                state.reg = if divisor == 0 {
                    0
                } else {
                    (state.reg / divisor) & REG_MASK
                };
            }
        }
        Opcode::Shl => state.reg = (state.reg << 1) & REG_MASK,
        Opcode::Shr => state.reg >>= 1,
        Opcode::Setmp => state.mem_ptr = state.reg & MEM_MASK,
        Opcode::Rand => state.reg = (rng.next_word() as u8) & REG_MASK,
    }

    effects
}
