//! # Shortest Job First (no expropiativo)
//! src/scheduling/sjf.rs
//!
//! Simulación unidad por unidad. En cada tick se elige, entre los procesos
//! no terminados, el de menor burst time *original*. Como la comparación no
//! usa el tiempo restante, el elegido sigue ganando hasta terminar: el
//! resultado equivale a ejecutar por burst ascendente sin expropiación.

use crate::process::{Process, Ticks, Timeline};
use tracing::{debug, trace};

/// Calcula tiempos de espera SJF sobre el batch en su orden actual
///
/// Al terminar el proceso i en el instante `t`: `waiting_time = t - burst_time`.
pub fn sjf_waiting_time(batch: &mut [Process]) -> Timeline {
    let n = batch.len();
    let mut remaining: Vec<Ticks> = batch.iter().map(|p| p.burst_time).collect();
    let mut completed = remaining.iter().filter(|&&r| r == 0).count();
    let mut clock: Ticks = 0;
    let mut timeline = Timeline::new();

    while completed < n {
        let Some(idx) = shortest_pending(batch, &remaining) else {
            break;
        };

        timeline.push(batch[idx].pid, clock, clock + 1);
        remaining[idx] -= 1;
        clock += 1;

        if remaining[idx] == 0 {
            completed += 1;
            let process = &mut batch[idx];
            process.waiting_time = clock - process.burst_time;
            trace!(
                pid = process.pid,
                finish = clock,
                wait = process.waiting_time,
                "sjf completion"
            );
        }
    }

    debug!(processes = n, end = clock, "sjf finished");
    timeline
}

/// Índice del proceso pendiente con menor burst original
///
/// Desempate: gana el de menor índice (primer mínimo del recorrido lineal).
fn shortest_pending(batch: &[Process], remaining: &[Ticks]) -> Option<usize> {
    batch
        .iter()
        .enumerate()
        .filter(|(i, _)| remaining[*i] > 0)
        .min_by_key(|(_, p)| p.burst_time)
        .map(|(i, _)| i)
}
