//! Per-activation VM execution state (`spec.md` §4.5).

use pond_membank::BankCounters;

/// Scratch state for one cell activation. Reinitialized at the start of
/// every activation; nothing here outlives a single `run_vm` call.
pub struct VmState {
    /// The 8-bit working register.
    pub reg: u8,
    /// Index into the genome and output buffer, `0..pond_depth`.
    pub io_ptr: usize,
    /// 5-bit memory pointer.
    pub mem_ptr: u8,
    /// Instruction pointer, `0..pond_depth`, wraps to `exec_start_inst`.
    pub inst_ptr: usize,
    /// Return-address stack for `LOOP`/`REP`, capacity `pond_depth`.
    pub loop_stack: Vec<usize>,
    /// Depth of LOOP/REP nesting being skipped because an outer `LOOP` was
    /// entered with `reg == 0`.
    pub false_loop_depth: u32,
    /// Set by `STOP`; also set on loop-stack overflow.
    pub stop: bool,
    /// Scratch genome-sized buffer a cell stages a candidate offspring into.
    pub output_buf: Vec<u8>,
    /// Per-bank memory access counters accumulated during this activation.
    pub counters: BankCounters,
}

impl VmState {
    /// Builds a fresh activation state for a genome of length `pond_depth`,
    /// starting execution at `exec_start_inst`.
    pub fn new(pond_depth: usize, exec_start_inst: usize) -> Self {
        VmState {
            reg: 0,
            io_ptr: 0,
            mem_ptr: 0,
            inst_ptr: exec_start_inst,
            loop_stack: Vec::new(),
            false_loop_depth: 0,
            stop: false,
            output_buf: vec![pond_common::OPCODE_STOP; pond_depth],
            counters: BankCounters::default(),
        }
    }
}
