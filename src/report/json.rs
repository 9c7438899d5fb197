//! # Reporte JSON
//! src/report/json.rs

use crate::driver::ScheduleReport;
use crate::error::{Result, SchedError};
use std::io::Write;

/// Escribe los reportes como un arreglo JSON con formato legible
pub fn render_json<W: Write>(reports: &[ScheduleReport], out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out).map_err(SchedError::Report)?;
    out.flush().map_err(SchedError::Report)
}
