//! # Algoritmos de Planificación
//! src/scheduling/mod.rs
//!
//! Funciones puras que calculan el tiempo de espera de cada proceso bajo
//! cuatro disciplinas clásicas:
//!
//! - **fcfs**: First-Come-First-Served, orden de entrada
//! - **sjf**: Shortest Job First no expropiativo, simulado unidad por unidad
//! - **priority**: FCFS sobre la cola ordenada por prioridad (estable)
//! - **round_robin**: barridos sucesivos con quantum fijo
//!
//! Cada corrida trabaja sobre su propia copia del batch. El reloj simulado y
//! los contadores de tiempo restante son locales a cada invocación.

pub mod fcfs;
pub mod metrics;
pub mod priority;
pub mod round_robin;
pub mod sjf;

use crate::error::{Result, SchedError};
use crate::process::{Process, Timeline};
use serde::Serialize;
use std::fmt;
use std::num::NonZeroU64;

pub use fcfs::fcfs_waiting_time;
pub use metrics::{compute_turnaround_time, Aggregates};
pub use priority::{priority_order, priority_waiting_time};
pub use round_robin::round_robin_waiting_time;
pub use sjf::sjf_waiting_time;

/// Quantum por defecto de Round Robin
pub const DEFAULT_QUANTUM: u64 = 2;

/// Algoritmo de planificación a simular
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Algorithm {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin { quantum: NonZeroU64 },
}

impl Algorithm {
    /// Construye Round Robin validando el quantum (debe ser > 0)
    pub fn round_robin(quantum: i64) -> Result<Self> {
        u64::try_from(quantum)
            .ok()
            .and_then(NonZeroU64::new)
            .map(|quantum| Algorithm::RoundRobin { quantum })
            .ok_or(SchedError::InvalidQuantum(quantum))
    }

    /// Los cuatro algoritmos en el orden del reporte de referencia
    pub fn all(quantum: NonZeroU64) -> Vec<Self> {
        vec![
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::Priority,
            Algorithm::RoundRobin { quantum },
        ]
    }

    /// Encabezado del reporte
    pub fn label(&self) -> String {
        match self {
            Algorithm::Fcfs => "FCFS".to_string(),
            Algorithm::Sjf => "SJF".to_string(),
            Algorithm::Priority => "Priority".to_string(),
            Algorithm::RoundRobin { quantum } => format!("RR Quantum = {}", quantum),
        }
    }

    /// Calcula los tiempos de espera sobre una copia independiente del batch
    ///
    /// El batch original nunca se modifica. Priority devuelve los procesos en
    /// orden de prioridad; el resto conserva el orden de entrada.
    pub fn compute_waiting_times(&self, batch: &[Process]) -> (Vec<Process>, Timeline) {
        match self {
            Algorithm::Fcfs => {
                let mut working = batch.to_vec();
                let timeline = fcfs_waiting_time(&mut working);
                (working, timeline)
            }
            Algorithm::Sjf => {
                let mut working = batch.to_vec();
                let timeline = sjf_waiting_time(&mut working);
                (working, timeline)
            }
            Algorithm::Priority => priority_waiting_time(batch),
            Algorithm::RoundRobin { quantum } => {
                let mut working = batch.to_vec();
                let timeline = round_robin_waiting_time(&mut working, *quantum);
                (working, timeline)
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
