//! Statistics report and genome dump line formatting (`spec.md` §6).

use std::fmt::Write as _;

use pond_common::INST_CHARS;
use pond_grid::Cell;

use crate::snapshot::Snapshot;
use crate::stats::PeriodStats;

/// Formats one statistics report line: pipe-separated sections,
/// comma-separated fields within a section, in the exact order `spec.md` §6
/// specifies. Instruction frequencies are `count / cellExecutions`, printed
/// with 4 decimals; all averages are `0.0` when their denominator is 0.
pub fn format_report_line(clock: u64, stats: &PeriodStats, snap: &Snapshot) -> String {
    let mut line = String::new();

    write!(
        line,
        "{},{},{},{},{:.4},{:.4}",
        clock,
        snap.total_energy,
        snap.max_cell_energy,
        snap.max_living_cell_energy,
        snap.avg_living_energy(),
        snap.avg_viable_energy(),
    )
    .unwrap();

    write!(
        line,
        "|{},{},{},{}",
        snap.total_active_cells,
        snap.total_living_cells,
        snap.total_viable_replicators,
        snap.max_generation,
    )
    .unwrap();

    write!(
        line,
        "|{},{},{},{},{},{},{},{}",
        stats.mem.special_reads,
        stats.mem.private_reads,
        stats.mem.output_reads,
        stats.mem.input_reads,
        stats.mem.special_writes,
        stats.mem.private_writes,
        stats.mem.output_writes,
        stats.mem.input_writes,
    )
    .unwrap();

    write!(
        line,
        "|{},{},{}",
        stats.viable_cells_replaced, stats.viable_cells_killed, stats.viable_cell_shares,
    )
    .unwrap();

    line.push('|');
    for (i, count) in stats.inst_freq.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        let freq = if stats.cell_executions == 0 {
            0.0
        } else {
            *count as f64 / stats.cell_executions as f64
        };
        write!(line, "{:.4}", freq).unwrap();
    }

    let total_instructions: u64 = stats.inst_freq.iter().sum();
    let avg_metabolism = if stats.cell_executions == 0 {
        0.0
    } else {
        total_instructions as f64 / stats.cell_executions as f64
    };
    write!(line, ",{:.4}", avg_metabolism).unwrap();

    line
}

/// Formats one genome dump line for a viable replicator (`generation > 2`):
/// `id, parent_id, lineage, generation, logo_char, facing_char,` followed by
/// the genome as `inst_chars` characters. Runs of `STOP` are abbreviated:
/// the first prints its character, the second through fourth print `.`, the
/// fifth and beyond are omitted until a non-`STOP` opcode resumes.
pub fn format_dump_line(cell: &Cell) -> String {
    let mut line = String::new();
    write!(
        line,
        "{},{},{},{},{},{},",
        cell.id,
        cell.parent_id,
        cell.lineage,
        cell.generation,
        INST_CHARS[cell.logo as usize] as char,
        INST_CHARS[cell.facing as usize] as char,
    )
    .unwrap();

    let mut stop_run = 0u32;
    for &op in cell.genome.iter() {
        if op == pond_common::OPCODE_STOP {
            stop_run += 1;
            if stop_run == 1 {
                line.push(INST_CHARS[op as usize] as char);
            } else if stop_run <= 4 {
                line.push('.');
            }
            // 5th and beyond: omitted.
        } else {
            stop_run = 0;
            line.push(INST_CHARS[op as usize] as char);
        }
    }
    line
}
