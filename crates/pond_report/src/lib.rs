//! Statistics aggregation, CSV/dump formatting, and the visualization
//! framebuffer stand-in (`spec.md` §4.7, §6).

#![warn(missing_docs)]

pub mod color;
pub mod csv;
pub mod framebuffer;
pub mod snapshot;
pub mod stats;
pub mod writers;

pub use color::{color_for_cell, ColorScheme};
pub use csv::{format_dump_line, format_report_line};
pub use framebuffer::{write_ppm, FrameBuffer};
pub use snapshot::Snapshot;
pub use stats::PeriodStats;
pub use writers::{CsvDumpWriter, CsvReportWriter};
