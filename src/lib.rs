//! # Schedsim
//! src/lib.rs
//!
//! Simulador de planificación de CPU para demostrar conceptos de sistemas
//! operativos: calcula tiempo de espera y turnaround de un batch fijo de
//! procesos bajo FCFS, SJF, Priority y Round Robin.
//!
//! ## Arquitectura
//!
//! - `process`: registro de proceso y timeline de ejecución
//! - `scheduling`: los cuatro algoritmos y el cálculo de métricas
//! - `driver`: una corrida independiente por algoritmo
//! - `loader`: lectura y validación de la lista de procesos
//! - `report`: salida en texto o JSON
//! - `config`: argumentos CLI y variables de entorno
//! - `logging`: inicialización de `tracing`
//!
//! ## Ejemplo de uso
//!
//! ```
//! use schedsim::driver::run_algorithm;
//! use schedsim::process::Process;
//! use schedsim::scheduling::Algorithm;
//!
//! let batch = vec![
//!     Process::with_burst(1, 10),
//!     Process::with_burst(2, 5),
//!     Process::with_burst(3, 8),
//! ];
//! let report = run_algorithm(Algorithm::Sjf, &batch);
//! assert_eq!(format!("{:.2}", report.aggregates.average_waiting_time), "6.00");
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod loader;
pub mod logging;
pub mod process;
pub mod report;
pub mod scheduling;

pub use error::{Result, SchedError};
