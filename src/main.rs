//! # Schedsim - Entry Point
//! src/main.rs
//!
//! Carga la lista de procesos y reporta las métricas de cada algoritmo.

use schedsim::config::Config;
use schedsim::driver::run_all;
use schedsim::loader::load_file;
use schedsim::report::render;
use schedsim::{logging, Result};
use std::io;
use tracing::error;

fn run() -> Result<()> {
    let config = Config::from_args()?;
    logging::init(&config.log_level);

    config.validate()?;
    let algorithms = config.algorithms()?;

    // Errores de entrada son fatales: no hay reintento
    let batch = load_file(&config.input, config.input_format)?;

    let reports = run_all(&algorithms, &batch);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&reports, config.render_options(), &mut out)
}

fn main() {
    if let Err(e) = run() {
        error!(error = %e, "schedsim failed");
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}
