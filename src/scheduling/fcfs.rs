//! # First-Come-First-Served
//! src/scheduling/fcfs.rs
//!
//! Los procesos corren en el orden dado, uno tras otro y sin huecos.

use crate::process::{Process, Timeline};
use tracing::debug;

/// Calcula tiempos de espera FCFS en el orden actual del batch
///
/// - Primer proceso: `waiting_time = arrival_time`
/// - Proceso i: `waiting_time = waiting_time[i-1] + burst_time[i-1]`
///
/// El `waiting_time` de cada proceso es también su instante de inicio.
pub fn fcfs_waiting_time(batch: &mut [Process]) -> Timeline {
    let mut timeline = Timeline::new();

    let Some(first) = batch.first_mut() else {
        return timeline;
    };
    first.waiting_time = first.arrival_time;

    for i in 1..batch.len() {
        let start = batch[i - 1].waiting_time + batch[i - 1].burst_time;
        batch[i].waiting_time = start;
    }

    for p in batch.iter() {
        timeline.push(p.pid, p.waiting_time, p.completion_time());
    }

    debug!(processes = batch.len(), end = timeline.end(), "fcfs finished");
    timeline
}
