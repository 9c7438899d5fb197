//! # Registro de Proceso
//! src/process/record.rs
//!
//! Un `Process` se crea en el loader, se copia a cada corrida de algoritmo
//! y solo esa corrida escribe sus campos de salida.

use serde::Serialize;

pub type Pid = u32;
pub type Ticks = u64;

/// Un proceso del batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    /// Identificador del proceso (se espera único, no se fuerza)
    pub pid: Pid,

    /// Momento en que el proceso está disponible.
    ///
    /// Solo se usa como offset inicial de la cola FCFS (y por lo tanto de la
    /// cola ordenada por prioridad). SJF y Round Robin asumen llegada en 0.
    pub arrival_time: Ticks,

    /// Tiempo total de CPU requerido (siempre > 0)
    pub burst_time: Ticks,

    /// Menor valor = mayor prioridad
    pub priority: i32,

    /// Tiempo listo pero sin ejecutar (calculado)
    pub waiting_time: Ticks,

    /// `waiting_time + burst_time` (calculado)
    pub turnaround_time: Ticks,
}

impl Process {
    pub fn new(pid: Pid, arrival_time: Ticks, burst_time: Ticks, priority: i32) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    /// Proceso que llega en 0 con prioridad 0, útil en tests
    pub fn with_burst(pid: Pid, burst_time: Ticks) -> Self {
        Self::new(pid, 0, burst_time, 0)
    }

    /// Momento en que el proceso termina según las métricas calculadas
    pub fn completion_time(&self) -> Ticks {
        self.waiting_time + self.burst_time
    }
}
