//! The pluggable external-collaborator seam (`spec.md` §6): reporting,
//! dumping, and the visualization/UI surface. Grounded on the teacher's
//! `Option<Box<dyn WaveformRecorder>>` pattern, where the kernel calls out to
//! an optional recorder rather than owning file I/O itself.

use pond_grid::CellStore;
use pond_report::{ColorScheme, FrameBuffer, PeriodStats, Snapshot};

/// A transition of `totalViableReplicators` across the zero boundary
/// between two consecutive reports (`spec.md` §4.7).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViableEdge {
    /// The grid had zero viable replicators and now has at least one.
    Appeared,
    /// The grid had at least one viable replicator and now has zero.
    Vanished,
}

/// External collaborators a running simulation reports to. A CLI wires in
/// the CSV/PPM-backed default; tests and embedders can supply a no-op mock.
pub trait SimHooks {
    /// Called once per `REPORT_FREQUENCY` tick, after the grid sweep.
    fn on_report(&mut self, clock: u64, stats: &PeriodStats, snap: &Snapshot);

    /// Called immediately after `on_report` when `totalViableReplicators`
    /// crossed the zero boundary since the previous report.
    fn on_viable_edge(&mut self, clock: u64, edge: ViableEdge);

    /// Called once per `DUMP_FREQUENCY` tick, after the grid sweep.
    fn on_dump(&mut self, clock: u64, store: &CellStore);

    /// Called once per `REFRESH_FREQUENCY` tick, with the current snapshot
    /// and color scheme, to redraw the visualization surface.
    fn on_refresh(&mut self, clock: u64, store: &CellStore, scheme: ColorScheme, snap: &Snapshot);
}

/// A `SimHooks` that discards every event; the default for headless runs
/// and the baseline for tests.
#[derive(Default)]
pub struct NullHooks;

impl SimHooks for NullHooks {
    fn on_report(&mut self, _clock: u64, _stats: &PeriodStats, _snap: &Snapshot) {}
    fn on_viable_edge(&mut self, _clock: u64, _edge: ViableEdge) {}
    fn on_dump(&mut self, _clock: u64, _store: &CellStore) {}
    fn on_refresh(&mut self, _clock: u64, _store: &CellStore, _scheme: ColorScheme, _snap: &Snapshot) {}
}

/// A user-interface event, modeled as data only (`spec.md` §6) — no input
/// backend is wired up; a future frontend calls [`handle_ui_event`] with
/// whatever it decodes from its own event source.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum UiEvent {
    /// Left-click at a grid coordinate: dumps that cell's genome if viable.
    Click {
        /// Grid x coordinate.
        x: usize,
        /// Grid y coordinate.
        y: usize,
    },
    /// Right-click: cycles the active color scheme.
    CycleColorScheme,
    /// Terminates the simulation.
    Quit,
}

/// The outcome of handling one [`UiEvent`]: whether the caller should stop
/// the simulation, and the color scheme to use afterward.
pub struct UiEventOutcome {
    /// Set when the event was `Quit`.
    pub should_quit: bool,
    /// The (possibly unchanged) active color scheme after handling the event.
    pub scheme: ColorScheme,
}

/// Applies one UI event against the current grid and color scheme. A click
/// on a non-viable cell (or one with no energy) is a no-op beyond logging.
pub fn handle_ui_event(
    event: UiEvent,
    store: &CellStore,
    scheme: ColorScheme,
) -> UiEventOutcome {
    match event {
        UiEvent::Click { x, y } => {
            let idx = store.idx_of(x, y);
            let cell = store.cell(idx);
            if cell.energy > 0 && cell.is_viable_replicator() {
                eprintln!("{}", pond_report::format_dump_line(cell));
            }
            UiEventOutcome {
                should_quit: false,
                scheme,
            }
        }
        UiEvent::CycleColorScheme => UiEventOutcome {
            should_quit: false,
            scheme: scheme.next(),
        },
        UiEvent::Quit => UiEventOutcome {
            should_quit: true,
            scheme,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_on_non_viable_cell_does_not_quit() {
        let store = CellStore::new(4, 4, 16);
        let outcome = handle_ui_event(UiEvent::Click { x: 0, y: 0 }, &store, ColorScheme::Kinship);
        assert!(!outcome.should_quit);
        assert_eq!(outcome.scheme, ColorScheme::Kinship);
    }

    #[test]
    fn cycle_advances_scheme() {
        let store = CellStore::new(4, 4, 16);
        let outcome = handle_ui_event(UiEvent::CycleColorScheme, &store, ColorScheme::Kinship);
        assert_eq!(outcome.scheme, ColorScheme::Lineage);
    }

    #[test]
    fn quit_sets_the_flag() {
        let store = CellStore::new(4, 4, 16);
        let outcome = handle_ui_event(UiEvent::Quit, &store, ColorScheme::Kinship);
        assert!(outcome.should_quit);
    }
}
