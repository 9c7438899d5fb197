//! # Errores del Simulador
//! src/error.rs
//!
//! Taxonomía de errores del simulador. Todos son terminales: no hay
//! reintentos ni recuperación parcial, `main` los reporta y termina.

use std::path::PathBuf;
use thiserror::Error;

/// Errores que pueden ocurrir al cargar, validar o reportar un batch
#[derive(Debug, Error)]
pub enum SchedError {
    /// Error de configuración (argumentos faltantes o inválidos)
    #[error("{0}")]
    Usage(String),

    /// El archivo de entrada no existe o no se puede leer
    #[error("Error: Invalid filepath {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Línea mal formada en el archivo de procesos (1-based)
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Burst time debe ser > 0
    #[error("Process {pid}: burst time must be > 0 (got {burst})")]
    InvalidBurst { pid: u32, burst: i64 },

    /// Arrival time debe ser >= 0
    #[error("Process {pid}: arrival time must be >= 0 (got {arrival})")]
    InvalidArrival { pid: u32, arrival: i64 },

    /// Quantum de Round Robin debe ser > 0
    #[error("Round Robin quantum must be > 0 (got {0})")]
    InvalidQuantum(i64),

    /// El archivo no contiene procesos
    #[error("Process list is empty")]
    EmptyBatch,

    /// Los tiempos acumulados del batch no caben en `u64`
    #[error("Process list is too large: cumulative times overflow")]
    BatchOverflow,

    /// Entrada o salida JSON inválida
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Fallo al escribir el reporte
    #[error("Failed to write report: {0}")]
    Report(#[source] std::io::Error),
}

impl SchedError {
    /// Código de salida del proceso para este error
    ///
    /// Ningún error termina con 0, incluido el de archivo inválido.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, SchedError>;
