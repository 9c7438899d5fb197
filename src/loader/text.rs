//! # Formato de Texto
//! src/loader/text.rs
//!
//! Una línea por proceso: `pid arrival burst priority`, enteros separados por
//! espacios. Líneas vacías y comentarios (`#`) se ignoran.

use super::RawProcess;
use crate::error::{Result, SchedError};
use std::str::FromStr;

const FIELDS: usize = 4;

/// Parsea el contenido completo del archivo
pub fn parse_text(content: &str) -> Result<Vec<RawProcess>> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| parse_line(line_no, line))
        .collect()
}

fn parse_line(line_no: usize, line: &str) -> Result<RawProcess> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != FIELDS {
        return Err(SchedError::Parse {
            line: line_no,
            message: format!(
                "expected {} fields (pid arrival burst priority), got {}",
                FIELDS,
                fields.len()
            ),
        });
    }

    Ok(RawProcess {
        pid: parse_field(line_no, "pid", fields[0])?,
        arrival_time: parse_field(line_no, "arrival", fields[1])?,
        burst_time: parse_field(line_no, "burst", fields[2])?,
        priority: parse_field(line_no, "priority", fields[3])?,
    })
}

fn parse_field<T: FromStr>(line_no: usize, name: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| SchedError::Parse {
        line: line_no,
        message: format!("invalid {}: '{}'", name, value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let raw = parse_text("1 0 10 3\n2 2 5 1\n").unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[1], RawProcess { pid: 2, arrival_time: 2, burst_time: 5, priority: 1 });
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let content = "# pid arrival burst priority\n\n  1 0 4 0\n   \n# fin\n";
        let raw = parse_text(content).unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].burst_time, 4);
    }

    #[test]
    fn test_parse_tabs_and_negative_priority() {
        let raw = parse_text("7\t0\t3\t-2").unwrap();
        assert_eq!(raw[0].priority, -2);
    }

    #[test]
    fn test_parse_keeps_negative_burst_for_validation() {
        let raw = parse_text("1 0 -4 0").unwrap();
        assert_eq!(raw[0].burst_time, -4);
    }

    #[test]
    fn test_parse_wrong_field_count_reports_line() {
        let err = parse_text("1 0 4 0\n\n2 0 4\n").unwrap_err();
        match err {
            SchedError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("expected 4 fields"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_non_integer() {
        let err = parse_text("1 0 abc 0").unwrap_err();
        assert!(err.to_string().contains("invalid burst"));
    }

    #[test]
    fn test_parse_negative_pid_rejected() {
        assert!(matches!(parse_text("-1 0 4 0"), Err(SchedError::Parse { line: 1, .. })));
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse_text("").unwrap().is_empty());
    }
}
