//! # Reporter
//! src/report/mod.rs
//!
//! Presenta los resultados de cada algoritmo:
//! - `text`: tabla por proceso + promedios (formato de referencia)
//! - `json`: arreglo de reportes serializado con serde

pub mod json;
pub mod text;

use crate::driver::ScheduleReport;
use crate::error::{Result, SchedError};
use clap::ValueEnum;
use std::io::Write;

pub use json::render_json;
pub use text::{render_report, render_text};

/// Formato de salida del reporte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Opciones de presentación
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Incluye el timeline en la salida de texto (JSON siempre lo incluye)
    pub show_timeline: bool,
}

/// Escribe todos los reportes en el formato pedido
pub fn render<W: Write>(
    reports: &[ScheduleReport],
    options: RenderOptions,
    out: &mut W,
) -> Result<()> {
    match options.format {
        OutputFormat::Text => {
            render_text(reports, options.show_timeline, out).map_err(SchedError::Report)
        }
        OutputFormat::Json => render_json(reports, out),
    }
}
