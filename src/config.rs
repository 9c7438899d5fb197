//! # Configuración del Simulador
//! src/config.rs
//!
//! Argumentos CLI con soporte para variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./schedsim processes.txt --quantum 4 \
//!   --algorithm fcfs,rr \
//!   --format json
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! SCHEDSIM_QUANTUM=3 SCHEDSIM_LOG=debug ./schedsim processes.txt
//! ```

use crate::error::{Result, SchedError};
use crate::loader::InputFormat;
use crate::report::{OutputFormat, RenderOptions};
use crate::scheduling::{Algorithm, DEFAULT_QUANTUM};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Algoritmos seleccionables desde la CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmKind {
    Fcfs,
    Sjf,
    Priority,
    Rr,
}

/// Configuración del simulador de planificación
#[derive(Debug, Clone, Parser)]
#[command(name = "schedsim")]
#[command(about = "Simulador de planificación de CPU: FCFS, SJF, Priority y Round Robin")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Archivo con la lista de procesos
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Quantum de Round Robin (debe ser > 0)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_QUANTUM as i64,
        env = "SCHEDSIM_QUANTUM",
        allow_negative_numbers = true
    )]
    pub quantum: i64,

    /// Algoritmos a ejecutar, en orden
    #[arg(
        short,
        long = "algorithm",
        value_enum,
        value_delimiter = ',',
        default_values_t = [
            AlgorithmKind::Fcfs,
            AlgorithmKind::Sjf,
            AlgorithmKind::Priority,
            AlgorithmKind::Rr,
        ],
        env = "SCHEDSIM_ALGORITHMS"
    )]
    pub algorithms: Vec<AlgorithmKind>,

    /// Formato de salida del reporte
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "SCHEDSIM_FORMAT")]
    pub format: OutputFormat,

    /// Formato del archivo de entrada
    #[arg(long = "input-format", value_enum, default_value_t = InputFormat::Auto)]
    pub input_format: InputFormat,

    /// Muestra el timeline de ejecución de cada algoritmo
    #[arg(long, env = "SCHEDSIM_TIMELINE")]
    pub timeline: bool,

    /// Filtro de logging (ej: warn, debug, schedsim=trace)
    #[arg(long = "log-level", default_value = "warn", env = "SCHEDSIM_LOG")]
    pub log_level: String,
}

impl Config {
    /// Parsea los argumentos del proceso
    ///
    /// Los errores de clap se devuelven como `SchedError::Usage`, salvo
    /// `--help`/`--version`, que clap imprime y terminan con 0.
    pub fn from_args() -> Result<Self> {
        Self::try_from_args(std::env::args_os())
    }

    /// Parsea una lista de argumentos arbitraria (usado en tests)
    pub fn try_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Config::try_parse_from(args).map_err(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => SchedError::Usage(e.to_string()),
        })
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<()> {
        if self.quantum <= 0 {
            return Err(SchedError::InvalidQuantum(self.quantum));
        }
        if self.algorithms.is_empty() {
            return Err(SchedError::Usage("At least one algorithm must be selected".to_string()));
        }
        Ok(())
    }

    /// Algoritmos a ejecutar, con el quantum ya validado
    pub fn algorithms(&self) -> Result<Vec<Algorithm>> {
        self.algorithms
            .iter()
            .map(|kind| match kind {
                AlgorithmKind::Fcfs => Ok(Algorithm::Fcfs),
                AlgorithmKind::Sjf => Ok(Algorithm::Sjf),
                AlgorithmKind::Priority => Ok(Algorithm::Priority),
                AlgorithmKind::Rr => Algorithm::round_robin(self.quantum),
            })
            .collect()
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: self.format,
            show_timeline: self.timeline,
        }
    }
}

impl Default for Config {
    /// Configuración por defecto (sin archivo de entrada)
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            quantum: DEFAULT_QUANTUM as i64,
            algorithms: vec![
                AlgorithmKind::Fcfs,
                AlgorithmKind::Sjf,
                AlgorithmKind::Priority,
                AlgorithmKind::Rr,
            ],
            format: OutputFormat::Text,
            input_format: InputFormat::Auto,
            timeline: false,
            log_level: "warn".to_string(),
        }
    }
}
