//! Pond CLI — runs a nanopond-CH simulation to completion (or forever).
//!
//! A single binary, no subcommands: this system has exactly one mode of
//! operation, so the multi-subcommand shape of a toolchain front end would
//! be dead weight here. Config loading, CLI overrides, and stderr status
//! lines follow the same idiom as the teacher's `clap` front end.

#![warn(missing_docs)]

use std::path::PathBuf;
use std::process;

use clap::Parser;

use pond_diagnostics::PondError;
use pond_grid::CellStore;
use pond_report::{
    write_ppm, ColorScheme, CsvDumpWriter, CsvReportWriter, FrameBuffer, PeriodStats, Snapshot,
};
use pond_sim::{SimContext, SimHooks, ViableEdge};

/// Runs a nanopond-CH simulation from a `pond.toml` configuration.
#[derive(Parser, Debug)]
#[command(name = "pond", version, about = "A nanopond-CH artificial life simulator")]
struct Cli {
    /// Path to a `pond.toml` configuration file. Defaults to the built-in
    /// parameter block if omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the configuration's PRNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Overrides the configuration's stop tick.
    #[arg(long = "stop-at")]
    stop_at: Option<u64>,

    /// Suppress status lines; report/dump files are still written.
    #[arg(short, long)]
    quiet: bool,

    /// Path to the growing statistics report CSV.
    #[arg(long, default_value = "pond_report.csv")]
    report: PathBuf,

    /// Directory genome dump files (`<clock>.dump.csv`) are written to.
    #[arg(long, default_value = "dumps")]
    dump_dir: PathBuf,

    /// Path a PPM snapshot is written to on every visualization refresh.
    /// Omit to skip framebuffer rendering entirely.
    #[arg(long)]
    ppm: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32, PondError> {
    let mut config = match &cli.config {
        Some(path) => pond_config::load_config(path)?,
        None => pond_config::load_config_from_str("")?,
    };
    if let Some(seed) = cli.seed {
        config.init_seed = Some(seed);
    }
    if let Some(stop_at) = cli.stop_at {
        config.stop_at = Some(stop_at);
    }

    std::fs::create_dir_all(&cli.dump_dir)?;

    if !cli.quiet {
        eprintln!(
            "pond: {}x{} grid, depth {}, seed {:?}",
            config.pond_size_x, config.pond_size_y, config.pond_depth, config.init_seed,
        );
    }

    let mut ctx = SimContext::new(config);
    let frame = cli
        .ppm
        .as_ref()
        .map(|_| FrameBuffer::new(ctx.store.width(), ctx.store.height()));
    let mut hooks = PondHooks {
        quiet: cli.quiet,
        report: CsvReportWriter::open(&cli.report)?,
        dump: CsvDumpWriter::new(cli.dump_dir.clone()),
        frame,
        ppm_path: cli.ppm.clone(),
    };

    ctx.run_until_stop(&mut hooks);

    if !cli.quiet {
        eprintln!(
            "pond: stopped at tick {}, {} cell identities allocated",
            ctx.clock, ctx.cell_id_counter,
        );
    }

    Ok(0)
}

/// The default `SimHooks`: appends to a report CSV, writes dump files, and
/// optionally rasterizes the grid to a PPM snapshot on refresh.
struct PondHooks {
    quiet: bool,
    report: CsvReportWriter,
    dump: CsvDumpWriter,
    frame: Option<FrameBuffer>,
    ppm_path: Option<PathBuf>,
}

impl SimHooks for PondHooks {
    fn on_report(&mut self, clock: u64, stats: &PeriodStats, snap: &Snapshot) {
        if let Err(err) = self.report.write_report(clock, stats, snap) {
            eprintln!("pond: failed writing report at tick {clock}: {err}");
        }
        if !self.quiet {
            eprintln!(
                "tick {clock}: {} active, {} living, {} viable, energy {}",
                snap.total_active_cells,
                snap.total_living_cells,
                snap.total_viable_replicators,
                snap.total_energy,
            );
        }
    }

    fn on_viable_edge(&mut self, clock: u64, edge: ViableEdge) {
        if !self.quiet {
            match edge {
                ViableEdge::Appeared => eprintln!("tick {clock}: viable replicators appeared"),
                ViableEdge::Vanished => eprintln!("tick {clock}: viable replicators vanished"),
            }
        }
    }

    fn on_dump(&mut self, clock: u64, store: &CellStore) {
        self.dump.write_dump(clock, store);
    }

    fn on_refresh(&mut self, clock: u64, store: &CellStore, scheme: ColorScheme, snap: &Snapshot) {
        if let Some(frame) = self.frame.as_mut() {
            frame.redraw(store, scheme, snap);
            if let Some(path) = &self.ppm_path {
                if let Err(err) = write_ppm(frame, path) {
                    eprintln!("pond: failed writing frame at tick {clock}: {err}");
                }
            }
        }
    }
}
