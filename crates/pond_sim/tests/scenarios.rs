//! End-to-end scenarios (`spec.md` §8), seed=1111, 64x64 grid, 4-connected.

use pond_common::{Mt19937, Opcode};
use pond_config::{DirectionCount, SimConfig};
use pond_grid::CellStore;
use pond_sim::{NullHooks, SimContext};
use pond_topology::Topology;
use pond_vm::opcodes::execute;
use pond_vm::run_vm;
use pond_vm::state::VmState;

fn base_cfg() -> SimConfig {
    SimConfig {
        pond_size_x: 64,
        pond_size_y: 64,
        pond_depth: 64,
        directions: DirectionCount::Four,
        init_seed: Some(1111),
        ..Default::default()
    }
}

/// S1: 10,000 ticks at the default `inflow_frequency` of 100 triggers
/// exactly `floor(10000 / 100) = 100` inflow events, and leaves the grid
/// with energy. `cell_id_counter` also allocates identities for any
/// reproduction or `KILL` a randomly-selected live cell happens to perform
/// during the run, so it can only ever be >= the 100 inflow allocations,
/// not exactly equal to them.
#[test]
fn s1_ten_thousand_ticks_seeds_at_least_one_hundred_cells() {
    let cfg = SimConfig {
        stop_at: Some(10_000),
        ..base_cfg()
    };
    let mut ctx = SimContext::new(cfg);
    let mut hooks = NullHooks;
    ctx.run_until_stop(&mut hooks);

    assert!(ctx.cell_id_counter >= 100);
    let total_energy: u64 = ctx.store.iter().map(|c| c.energy).sum();
    assert!(total_energy > 0);
}

/// S2: a hand-written `[INC, WRITEO, FWD, STOP, ...]` genome with
/// `MUTATION_RATE=0` is fully predictable: `WRITEO` writes `reg & 0x1f`
/// (1, after a single `INC`) into `output_buf[0]`, and the reproduction
/// handoff copies that buffer verbatim into the facing neighbor's genome.
#[test]
fn s2_predictable_genome_with_no_mutation() {
    let cfg = SimConfig {
        mutation_rate: 0,
        ..base_cfg()
    };
    let mut store = CellStore::new(4, 4, cfg.pond_depth);
    let topology = Topology::new(4, 4, cfg.directions);
    let mut rng = Mt19937::new(1111);
    let mut counter = 0u64;

    let idx = store.idx_of(0, 0);
    let neighbor_idx = store.idx_of(1, 0);
    {
        let cell = store.cell_mut(idx);
        cell.energy = 1000;
        cell.generation = 3;
        cell.facing = 1; // east, toward neighbor_idx under DirectionCount::Four
        let prog = [Opcode::Inc as u8, Opcode::Writeo as u8, Opcode::Fwd as u8, Opcode::Stop as u8];
        for (i, byte) in prog.iter().enumerate() {
            cell.genome[i] = *byte;
        }
    }
    store.cell_mut(neighbor_idx).energy = 1; // parentless, energy > 0: reproduction target

    let outcome = run_vm(&mut store, idx, &topology, &cfg, &mut rng, &mut counter);
    assert!(outcome.executed);
    assert_eq!(outcome.inst_freq[Opcode::Inc as usize], 1);
    assert_eq!(store.cell(neighbor_idx).genome[0], 1);
}

/// S3: two adjacent viable cells with matching logo, each sharing energy
/// 1000, keep the pair's total energy invariant across 1000 `SHARE`
/// activations (exercising the opcode directly, the same way
/// `pond_vm::opcodes`'s own unit test does, rather than through the full
/// fetch-execute loop which would exhaust a cell's energy on its own genome
/// before 1000 activations could happen).
#[test]
fn s3_share_conserves_energy_over_many_activations() {
    let cfg = SimConfig {
        mutation_rate: 0,
        ..base_cfg()
    };
    let mut store = CellStore::new(4, 4, cfg.pond_depth);
    let topology = Topology::new(4, 4, cfg.directions);
    let mut rng = Mt19937::new(1111);
    let mut counter = 0u64;

    let a = store.idx_of(0, 0);
    let b = store.idx_of(1, 0);
    for idx in [a, b] {
        let cell = store.cell_mut(idx);
        cell.energy = 1000;
        cell.generation = 3;
        cell.logo = 5;
    }
    store.cell_mut(a).facing = 1; // east, toward b under DirectionCount::Four

    for _ in 0..1000 {
        let before: u64 = [a, b].iter().map(|&i| store.cell(i).energy).sum();
        let mut state = VmState::new(cfg.pond_depth, 0);
        execute(
            Opcode::Share,
            &mut store,
            a,
            &topology,
            &cfg,
            &mut rng,
            &mut state,
            &mut counter,
        );
        let after: u64 = [a, b].iter().map(|&i| store.cell(i).energy).sum();
        assert_eq!(before, after);
    }
}

/// S4: a cell with energy=6 attempting `KILL` against a viable neighbor
/// whose access check fails drops to `6 - 6/3 = 4`. Whether a given seed's
/// draw denies access is itself a property of the stochastic check (already
/// covered in `pond_vm::opcodes`'s own unit test) — here a small seed sweep
/// finds a denying draw and checks the floor-based penalty arithmetic,
/// invoking the opcode directly (as `pond_vm::opcodes`'s own test does) so
/// the single energy decrement under test isn't conflated with the
/// fetch-loop's own per-instruction decrement.
#[test]
fn s4_failed_kill_penalty_is_floor_based() {
    let cfg = SimConfig {
        mutation_rate: 0,
        failed_kill_penalty: 3,
        ..base_cfg()
    };
    let topology = Topology::new(4, 4, cfg.directions);
    let mut found = false;
    for seed in 0..64u32 {
        let mut store = CellStore::new(4, 4, cfg.pond_depth);
        let mut rng = Mt19937::new(seed);
        let mut counter = 0u64;
        let mut state = VmState::new(cfg.pond_depth, 0);

        let a = store.idx_of(0, 0);
        let b = store.idx_of(1, 0);
        store.cell_mut(a).energy = 6;
        store.cell_mut(a).facing = 1; // east, toward b under DirectionCount::Four
        store.cell_mut(b).energy = 1000;
        store.cell_mut(b).generation = 5;
        store.cell_mut(b).logo = 31;
        store.cell_mut(b).parent_id = 1;

        execute(Opcode::Kill, &mut store, a, &topology, &cfg, &mut rng, &mut state, &mut counter);
        if store.cell(a).energy == 4 {
            found = true;
            break;
        }
    }
    assert!(found, "expected at least one seed to produce a failed kill with floor penalty");
}

/// S5: `MUTATION_RATE=0xffffffff` mutates every fetch, but the VM still
/// terminates (energy always decrements) and never writes an opcode value
/// above 31 into the genome.
#[test]
fn s5_max_mutation_rate_still_terminates_and_masks_opcodes() {
    let cfg = SimConfig {
        mutation_rate: 0xffff_ffff,
        ..base_cfg()
    };
    let mut store = CellStore::new(4, 4, cfg.pond_depth);
    let topology = Topology::new(4, 4, cfg.directions);
    let mut rng = Mt19937::new(1111);
    let mut counter = 0u64;

    let idx = store.idx_of(0, 0);
    let cell = store.cell_mut(idx);
    cell.energy = 500;
    cell.generation = 3;

    let outcome = run_vm(&mut store, idx, &topology, &cfg, &mut rng, &mut counter);
    assert!(outcome.executed);
    assert_eq!(store.cell(idx).energy, 0);
    assert!(store.cell(idx).genome.iter().all(|&b| b < 32));
}
