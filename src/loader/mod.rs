//! # Loader de Procesos
//! src/loader/mod.rs
//!
//! Lee la lista de procesos desde un archivo y la valida. Cualquier entrada
//! mal formada es fatal: el núcleo asume que nunca recibe registros inválidos.
//!
//! ## Formatos
//!
//! ### Texto
//! ```text
//! # pid arrival burst priority
//! 1 0 10 3
//! 2 0 5 1
//! ```
//!
//! ### JSON
//! ```json
//! [{"pid": 1, "arrival_time": 0, "burst_time": 10, "priority": 3}]
//! ```

pub mod json;
pub mod text;

use crate::error::{Result, SchedError};
use crate::process::{Pid, Process};
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

pub use json::parse_json;
pub use text::parse_text;

/// Formato del archivo de entrada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// `.json` → JSON, cualquier otra extensión → texto
    #[default]
    Auto,
    Text,
    Json,
}

impl InputFormat {
    /// Resuelve `Auto` según la extensión del archivo
    pub fn resolve(self, path: &Path) -> Self {
        match self {
            InputFormat::Auto => {
                let is_json = path
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case("json"))
                    .unwrap_or(false);
                if is_json {
                    InputFormat::Json
                } else {
                    InputFormat::Text
                }
            }
            other => other,
        }
    }
}

/// Registro tal como viene en la entrada, antes de validar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RawProcess {
    pub pid: Pid,
    #[serde(default)]
    pub arrival_time: i64,
    pub burst_time: i64,
    #[serde(default)]
    pub priority: i32,
}

impl RawProcess {
    /// Valida burst > 0 y arrival >= 0
    pub fn validate(self) -> Result<Process> {
        if self.burst_time <= 0 {
            return Err(SchedError::InvalidBurst {
                pid: self.pid,
                burst: self.burst_time,
            });
        }
        if self.arrival_time < 0 {
            return Err(SchedError::InvalidArrival {
                pid: self.pid,
                arrival: self.arrival_time,
            });
        }

        Ok(Process::new(
            self.pid,
            self.arrival_time as u64,
            self.burst_time as u64,
            self.priority,
        ))
    }
}

/// Valida un batch completo; debe tener al menos un proceso
///
/// Además exige que `max(arrival) + Σburst` y `n * (max(arrival) + Σburst)`
/// quepan en `u64`: ningún tiempo de espera, turnaround ni suma de ellos
/// supera esas cotas en ningún algoritmo.
pub fn validate_batch(raw: Vec<RawProcess>) -> Result<Vec<Process>> {
    if raw.is_empty() {
        return Err(SchedError::EmptyBatch);
    }
    let batch = raw
        .into_iter()
        .map(RawProcess::validate)
        .collect::<Result<Vec<Process>>>()?;
    check_horizon(&batch)?;
    Ok(batch)
}

fn check_horizon(batch: &[Process]) -> Result<()> {
    let max_arrival = batch.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    let horizon = batch
        .iter()
        .try_fold(max_arrival, |acc, p| acc.checked_add(p.burst_time))
        .ok_or(SchedError::BatchOverflow)?;

    horizon
        .checked_mul(batch.len() as u64)
        .map(|_| ())
        .ok_or(SchedError::BatchOverflow)
}

/// Parsea y valida contenido ya leído
pub fn load_str(content: &str, format: InputFormat) -> Result<Vec<Process>> {
    let raw = match format {
        InputFormat::Json => parse_json(content)?,
        InputFormat::Text | InputFormat::Auto => parse_text(content)?,
    };
    validate_batch(raw)
}

/// Lee, parsea y valida el archivo de procesos
pub fn load_file(path: &Path, format: InputFormat) -> Result<Vec<Process>> {
    let content = fs::read_to_string(path).map_err(|source| SchedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let format = format.resolve(path);
    let batch = load_str(&content, format)?;
    debug!(path = %path.display(), ?format, processes = batch.len(), "process list loaded");
    Ok(batch)
}
