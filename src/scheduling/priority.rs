//! # Planificación por Prioridad
//! src/scheduling/priority.rs
//!
//! FCFS aplicado a la cola ordenada por prioridad ascendente. No expropiativo.

use super::fcfs::fcfs_waiting_time;
use crate::process::{Process, Timeline};

/// Devuelve una copia del batch ordenada por prioridad (menor primero)
///
/// El orden es estable: procesos con igual prioridad conservan su orden
/// relativo de entrada. El batch original no se toca.
pub fn priority_order(batch: &[Process]) -> Vec<Process> {
    let mut ordered = batch.to_vec();
    // sort_by_key es estable
    ordered.sort_by_key(|p| p.priority);
    ordered
}

/// Ordena por prioridad y calcula los tiempos de espera FCFS sobre esa cola
pub fn priority_waiting_time(batch: &[Process]) -> (Vec<Process>, Timeline) {
    let mut ordered = priority_order(batch);
    let timeline = fcfs_waiting_time(&mut ordered);
    (ordered, timeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pids(batch: &[Process]) -> Vec<u32> {
        batch.iter().map(|p| p.pid).collect()
    }

    #[test]
    fn test_priority_order_ascending() {
        let batch = vec![
            Process::new(1, 0, 4, 3),
            Process::new(2, 0, 4, -1),
            Process::new(3, 0, 4, 0),
        ];
        assert_eq!(pids(&priority_order(&batch)), vec![2, 3, 1]);
    }

    #[test]
    fn test_priority_order_is_stable() {
        let batch = vec![
            Process::new(10, 0, 1, 2),
            Process::new(11, 0, 1, 1),
            Process::new(12, 0, 1, 2),
            Process::new(13, 0, 1, 1),
        ];
        assert_eq!(pids(&priority_order(&batch)), vec![11, 13, 10, 12]);
    }

    #[test]
    fn test_priority_waiting_times() {
        let batch = vec![
            Process::new(1, 0, 10, 3),
            Process::new(2, 0, 1, 1),
            Process::new(3, 0, 2, 4),
            Process::new(4, 0, 1, 5),
            Process::new(5, 0, 5, 2),
        ];
        let (ordered, timeline) = priority_waiting_time(&batch);

        assert_eq!(pids(&ordered), vec![2, 5, 1, 3, 4]);
        let waits: Vec<u64> = ordered.iter().map(|p| p.waiting_time).collect();
        assert_eq!(waits, vec![0, 1, 6, 16, 18]);
        assert_eq!(timeline.end(), 19);
    }

    #[test]
    fn test_priority_arrival_offset_follows_sorted_queue() {
        let batch = vec![Process::new(1, 5, 3, 9), Process::new(2, 2, 4, 0)];
        let (ordered, timeline) = priority_waiting_time(&batch);

        // El offset es el arrival del primero en la cola ordenada (pid 2)
        assert_eq!(pids(&ordered), vec![2, 1]);
        assert_eq!(ordered[0].waiting_time, 2);
        assert_eq!(ordered[1].waiting_time, 6);
        assert_eq!(timeline.end(), 9);
    }

    #[test]
    fn test_priority_original_untouched() {
        let batch = vec![Process::new(1, 0, 3, 9), Process::new(2, 0, 3, 0)];
        let _ = priority_waiting_time(&batch);
        assert_eq!(pids(&batch), vec![1, 2]);
        assert_eq!(batch[0].waiting_time, 0);
    }
}
