//! # Driver de Simulación
//! src/driver.rs
//!
//! Orquesta cada corrida: copia del batch → tiempos de espera → turnaround
//! → promedios. Las corridas son secuenciales e independientes; ninguna
//! comparte estado mutable con otra.

use crate::process::{Process, Timeline};
use crate::scheduling::{compute_turnaround_time, Aggregates, Algorithm};
use serde::Serialize;
use tracing::{debug, info};

/// Resultado completo de un algoritmo, listo para el reporter
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleReport {
    pub algorithm: Algorithm,
    pub label: String,
    pub processes: Vec<Process>,
    pub aggregates: Aggregates,
    pub timeline: Timeline,
}

/// Ejecuta un algoritmo sobre una copia independiente del batch
pub fn run_algorithm(algorithm: Algorithm, batch: &[Process]) -> ScheduleReport {
    debug!(algorithm = %algorithm, processes = batch.len(), "running algorithm");

    let (mut processes, timeline) = algorithm.compute_waiting_times(batch);
    compute_turnaround_time(&mut processes);
    let aggregates = Aggregates::from_batch(&processes);

    info!(
        algorithm = %algorithm,
        avg_waiting = aggregates.average_waiting_time,
        avg_turnaround = aggregates.average_turnaround_time,
        "algorithm finished"
    );

    ScheduleReport {
        algorithm,
        label: algorithm.label(),
        processes,
        aggregates,
        timeline,
    }
}

/// Ejecuta los algoritmos en el orden dado, cada uno con su propia copia
pub fn run_all(algorithms: &[Algorithm], batch: &[Process]) -> Vec<ScheduleReport> {
    algorithms
        .iter()
        .map(|&algorithm| run_algorithm(algorithm, batch))
        .collect()
}
