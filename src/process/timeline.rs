//! # Timeline de Ejecución
//! src/process/timeline.rs
//!
//! Cada algoritmo registra los intervalos en que cada proceso ocupó la CPU.
//! Unidades consecutivas del mismo proceso se fusionan en un solo slice.

use super::record::{Pid, Ticks};
use serde::Serialize;

/// Intervalo `[start, end)` en que `pid` tuvo la CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub pid: Pid,
    pub start: Ticks,
    pub end: Ticks,
}

impl Slice {
    pub fn len(&self) -> Ticks {
        self.end - self.start
    }
}

/// Secuencia ordenada de slices (diagrama de Gantt)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega un slice; si continúa al anterior del mismo proceso, lo extiende
    pub fn push(&mut self, pid: Pid, start: Ticks, end: Ticks) {
        if start == end {
            return;
        }

        if let Some(last) = self.slices.last_mut() {
            if last.pid == pid && last.end == start {
                last.end = end;
                return;
            }
        }

        self.slices.push(Slice { pid, start, end });
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Fin del último slice (tiempo total simulado)
    pub fn end(&self) -> Ticks {
        self.slices.last().map(|s| s.end).unwrap_or(0)
    }

    /// Tiempo total de CPU ocupada (suma de longitudes de slices)
    pub fn busy_time(&self) -> Ticks {
        self.slices.iter().map(Slice::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_merges_contiguous_same_pid() {
        let mut t = Timeline::new();
        t.push(1, 0, 1);
        t.push(1, 1, 2);
        t.push(1, 2, 3);
        assert_eq!(t.slices(), &[Slice { pid: 1, start: 0, end: 3 }]);
    }

    #[test]
    fn test_push_keeps_different_pids_apart() {
        let mut t = Timeline::new();
        t.push(1, 0, 2);
        t.push(2, 2, 4);
        t.push(1, 4, 6);
        assert_eq!(t.slices().len(), 3);
        assert_eq!(t.end(), 6);
        assert_eq!(t.busy_time(), 6);
    }

    #[test]
    fn test_push_gap_is_not_merged() {
        let mut t = Timeline::new();
        t.push(1, 3, 5);
        t.push(1, 6, 8);
        assert_eq!(t.slices().len(), 2);
        assert_eq!(t.end(), 8);
        assert_eq!(t.busy_time(), 4);
    }

    #[test]
    fn test_empty_slices_are_ignored() {
        let mut t = Timeline::new();
        t.push(1, 4, 4);
        assert!(t.is_empty());
        assert_eq!(t.end(), 0);
    }
}
