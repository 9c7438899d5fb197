//! # Procesos
//! src/process/mod.rs
//!
//! Entidades de datos del simulador:
//! - `Process`: un registro de trabajo planificable (entradas + métricas calculadas)
//! - `Timeline`: secuencia de slices de ejecución producida por un algoritmo

pub mod record;
pub mod timeline;

pub use record::{Pid, Process, Ticks};
pub use timeline::{Slice, Timeline};
