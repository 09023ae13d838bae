//! File-backed CSV writers: the default `SimHooks` collaborators (`spec.md`
//! §6). Grounded on the teacher's separate recorder objects that the
//! simulation kernel feeds and that flush themselves to disk on demand.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pond_grid::CellStore;

use crate::csv::{format_dump_line, format_report_line};
use crate::snapshot::Snapshot;
use crate::stats::PeriodStats;

/// Appends one line per report to a single growing CSV file.
pub struct CsvReportWriter {
    file: File,
}

impl CsvReportWriter {
    /// Opens (creating if necessary) `path` for appending report lines.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(CsvReportWriter { file })
    }

    /// Formats and appends one report line.
    pub fn write_report(&mut self, clock: u64, stats: &PeriodStats, snap: &Snapshot) -> io::Result<()> {
        let line = format_report_line(clock, stats, snap);
        writeln!(self.file, "{}", line)
    }
}

/// Writes one `<clock>.dump.csv` file per dump event, containing every
/// viable replicator (`generation > 2`) in the grid.
pub struct CsvDumpWriter {
    dir: PathBuf,
}

impl CsvDumpWriter {
    /// Dumps will be written as `<dir>/<clock>.dump.csv`.
    pub fn new(dir: PathBuf) -> Self {
        CsvDumpWriter { dir }
    }

    /// Sweeps `store` and writes every viable replicator's genome line.
    /// An I/O failure is logged to stderr and the simulation continues
    /// (`spec.md` §7 — dump failures are non-fatal).
    pub fn write_dump(&self, clock: u64, store: &CellStore) {
        let path = self.dir.join(format!("{}.dump.csv", clock));
        match File::create(&path) {
            Ok(mut file) => {
                for cell in store.iter() {
                    if cell.is_viable_replicator() {
                        if let Err(err) = writeln!(file, "{}", format_dump_line(cell)) {
                            eprintln!("pond: failed writing dump line to {}: {}", path.display(), err);
                            break;
                        }
                    }
                }
            }
            Err(err) => {
                eprintln!("pond: failed to open dump file {}: {}", path.display(), err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_writer_appends_lines() {
        let path = std::env::temp_dir().join("pond_test_report.csv");
        std::fs::remove_file(&path).ok();
        let mut writer = CsvReportWriter::open(&path).unwrap();
        let stats = PeriodStats::default();
        let snap = Snapshot::default();
        writer.write_report(0, &stats, &snap).unwrap();
        writer.write_report(1, &stats, &snap).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn dump_writer_only_includes_viable_replicators() {
        let dir = std::env::temp_dir();
        let mut store = CellStore::new(2, 1, 8);
        store.cell_mut(0).generation = 3;
        store.cell_mut(0).energy = 1;
        store.cell_mut(1).generation = 1;
        store.cell_mut(1).energy = 1;
        let writer = CsvDumpWriter::new(dir.clone());
        writer.write_dump(999, &store);
        let path = dir.join("999.dump.csv");
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        std::fs::remove_file(&path).ok();
    }
}
