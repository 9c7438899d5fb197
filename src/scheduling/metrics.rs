//! # Métricas
//! src/scheduling/metrics.rs
//!
//! Paso compartido por todos los algoritmos: turnaround time y promedios.

use crate::process::{Process, Ticks};
use serde::Serialize;

/// Asigna `turnaround_time = burst_time + waiting_time` a cada proceso
///
/// Requiere que el algoritmo activo ya haya calculado `waiting_time`.
pub fn compute_turnaround_time(batch: &mut [Process]) {
    for p in batch.iter_mut() {
        p.turnaround_time = p.burst_time + p.waiting_time;
    }
}

/// Agregados de una corrida
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aggregates {
    pub total_waiting_time: Ticks,
    pub total_turnaround_time: Ticks,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
}

impl Aggregates {
    /// Calcula sumas y promedios (división real) de un batch ya procesado
    pub fn from_batch(batch: &[Process]) -> Self {
        let total_waiting_time: Ticks = batch.iter().map(|p| p.waiting_time).sum();
        let total_turnaround_time: Ticks = batch.iter().map(|p| p.turnaround_time).sum();

        let (average_waiting_time, average_turnaround_time) = if batch.is_empty() {
            (0.0, 0.0)
        } else {
            let n = batch.len() as f64;
            (total_waiting_time as f64 / n, total_turnaround_time as f64 / n)
        };

        Self {
            total_waiting_time,
            total_turnaround_time,
            average_waiting_time,
            average_turnaround_time,
        }
    }
}
