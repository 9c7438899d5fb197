//! # Formato JSON
//! src/loader/json.rs

use super::RawProcess;
use crate::error::Result;

/// Parsea un arreglo JSON de procesos
///
/// `arrival_time` y `priority` son opcionales (default 0).
pub fn parse_json(content: &str) -> Result<Vec<RawProcess>> {
    Ok(serde_json::from_str(content)?)
}
