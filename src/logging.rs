//! # Logging
//! src/logging.rs
//!
//! Inicializa `tracing` sobre stderr. La salida estándar queda reservada
//! para los reportes.

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Nivel usado cuando el filtro recibido no es válido
pub const DEFAULT_FILTER: &str = "warn";

/// Construye el filtro; si la directiva es inválida cae a `warn`
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Instala el subscriber global. Llamadas repetidas no tienen efecto.
pub fn init(directive: &str) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(build_filter(directive));

    // Falla solo si ya hay un subscriber instalado
    let _ = tracing_subscriber::registry().with(layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_build_filter_valid() {
        let filter = build_filter("debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_build_filter_invalid_falls_back() {
        let filter = build_filter("schedsim=loud");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init("warn");
        init("debug");
    }
}
