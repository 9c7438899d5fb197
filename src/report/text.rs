//! # Reporte de Texto
//! src/report/text.rs
//!
//! ```text
//!
//! *********
//! FCFS
//!     Processes   Burst time  Waiting time    Turn around time
//!     1           10          0               10
//!
//! Average waiting time = 0.00
//! Average turn around time = 10.00
//! ```

use crate::driver::ScheduleReport;
use crate::process::Timeline;
use std::io::{self, Write};

/// Escribe todos los reportes uno tras otro
pub fn render_text<W: Write>(
    reports: &[ScheduleReport],
    show_timeline: bool,
    out: &mut W,
) -> io::Result<()> {
    for report in reports {
        render_report(report, show_timeline, out)?;
    }
    out.flush()
}

/// Escribe el reporte de un algoritmo
pub fn render_report<W: Write>(
    report: &ScheduleReport,
    show_timeline: bool,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n*********\n{}", report.label)?;
    writeln!(out, "\tProcesses\tBurst time\tWaiting time\tTurn around time")?;

    for p in &report.processes {
        writeln!(
            out,
            "\t{}\t\t{}\t\t{}\t\t{}",
            p.pid, p.burst_time, p.waiting_time, p.turnaround_time
        )?;
    }

    write!(out, "\nAverage waiting time = {:.2}", report.aggregates.average_waiting_time)?;
    writeln!(out, "\nAverage turn around time = {:.2}", report.aggregates.average_turnaround_time)?;

    if show_timeline {
        writeln!(out, "Timeline: {}", format_timeline(&report.timeline))?;
    }

    Ok(())
}

/// `| P1 0-2 | P2 2-4 |`
fn format_timeline(timeline: &Timeline) -> String {
    if timeline.is_empty() {
        return "(empty)".to_string();
    }

    let cells: Vec<String> = timeline
        .slices()
        .iter()
        .map(|s| format!(" P{} {}-{} ", s.pid, s.start, s.end))
        .collect();
    format!("|{}|", cells.join("|"))
}
