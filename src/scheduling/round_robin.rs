//! # Round Robin
//! src/scheduling/round_robin.rs
//!
//! Barridos repetidos sobre todos los procesos en orden de entrada. La
//! rotación de la cola queda implícita en el orden del barrido.

use crate::process::{Process, Ticks, Timeline};
use std::num::NonZeroU64;
use tracing::{debug, trace};

/// Calcula tiempos de espera Round Robin con el quantum dado
///
/// En cada barrido, un proceso con tiempo restante mayor al quantum avanza
/// el reloj un quantum; si no, avanza lo que le falta, termina y registra
/// `waiting_time = clock - burst_time`.
pub fn round_robin_waiting_time(batch: &mut [Process], quantum: NonZeroU64) -> Timeline {
    let quantum = quantum.get();
    let n = batch.len();
    let mut remaining: Vec<Ticks> = batch.iter().map(|p| p.burst_time).collect();
    let mut completed = remaining.iter().filter(|&&r| r == 0).count();
    let mut clock: Ticks = 0;
    let mut sweeps = 0usize;
    let mut timeline = Timeline::new();

    for p in batch.iter_mut() {
        p.waiting_time = 0;
    }

    while completed < n {
        sweeps += 1;

        for (process, left) in batch.iter_mut().zip(remaining.iter_mut()) {
            if *left == 0 {
                continue;
            }

            if *left > quantum {
                timeline.push(process.pid, clock, clock + quantum);
                clock += quantum;
                *left -= quantum;
            } else {
                timeline.push(process.pid, clock, clock + *left);
                clock += *left;
                *left = 0;
                process.waiting_time = clock - process.burst_time;
                completed += 1;
                trace!(
                    pid = process.pid,
                    finish = clock,
                    wait = process.waiting_time,
                    "rr completion"
                );
            }
        }
    }

    debug!(processes = n, quantum, sweeps, end = clock, "round robin finished");
    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Slice;

    fn q(n: u64) -> NonZeroU64 {
        NonZeroU64::new(n).unwrap()
    }

    fn waits(batch: &[Process]) -> Vec<u64> {
        batch.iter().map(|p| p.waiting_time).collect()
    }

    // ==================== Scenarios ====================

    #[test]
    fn test_rr_quantum_two() {
        let mut batch = vec![
            Process::with_burst(1, 10),
            Process::with_burst(2, 5),
            Process::with_burst(3, 8),
        ];
        let timeline = round_robin_waiting_time(&mut batch, q(2));
        assert_eq!(waits(&batch), vec![13, 10, 13]);
        assert_eq!(timeline.end(), 23);
    }

    #[test]
    fn test_rr_trace_matches_sweeps() {
        let mut batch = vec![Process::with_burst(1, 3), Process::with_burst(2, 4)];
        let timeline = round_robin_waiting_time(&mut batch, q(2));
        assert_eq!(
            timeline.slices(),
            &[
                Slice { pid: 1, start: 0, end: 2 },
                Slice { pid: 2, start: 2, end: 4 },
                Slice { pid: 1, start: 4, end: 5 },
                Slice { pid: 2, start: 5, end: 7 },
            ]
        );
        assert_eq!(waits(&batch), vec![2, 3]);
    }

    #[test]
    fn test_rr_last_process_slices_merge() {
        let mut batch = vec![Process::with_burst(1, 1), Process::with_burst(2, 7)];
        let timeline = round_robin_waiting_time(&mut batch, q(2));
        assert_eq!(
            timeline.slices(),
            &[
                Slice { pid: 1, start: 0, end: 1 },
                Slice { pid: 2, start: 1, end: 8 },
            ]
        );
    }

    // ==================== Edge cases ====================

    #[test]
    fn test_rr_large_quantum_is_fcfs() {
        let mut batch = vec![
            Process::with_burst(1, 4),
            Process::with_burst(2, 6),
            Process::with_burst(3, 2),
        ];
        round_robin_waiting_time(&mut batch, q(6));
        assert_eq!(waits(&batch), vec![0, 4, 10]);
    }

    #[test]
    fn test_rr_quantum_one() {
        let mut batch = vec![Process::with_burst(1, 2), Process::with_burst(2, 2)];
        round_robin_waiting_time(&mut batch, q(1));
        // P1: 0-1, P2: 1-2, P1: 2-3 (fin 3), P2: 3-4 (fin 4)
        assert_eq!(waits(&batch), vec![1, 2]);
    }

    #[test]
    fn test_rr_ignores_arrival_time() {
        let mut batch = vec![Process::new(1, 5, 3, 0), Process::new(2, 9, 2, 0)];
        round_robin_waiting_time(&mut batch, q(2));
        // P1: 0-2, P2: 2-4 (fin), P1: 4-5 (fin)
        assert_eq!(waits(&batch), vec![2, 2]);
    }

    #[test]
    fn test_rr_resets_previous_waits() {
        let mut batch = vec![Process::with_burst(1, 2)];
        batch[0].waiting_time = 99;
        round_robin_waiting_time(&mut batch, q(2));
        assert_eq!(batch[0].waiting_time, 0);
    }

    #[test]
    fn test_rr_zero_burst_terminates() {
        let mut batch = vec![Process::with_burst(1, 0), Process::with_burst(2, 3)];
        let timeline = round_robin_waiting_time(&mut batch, q(2));
        assert_eq!(timeline.end(), 3);
    }
}
