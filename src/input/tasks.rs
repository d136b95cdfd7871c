// src/input/tasks.rs

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{Result, RiskorderError};
use crate::types::Task;

/// `<index>. <name>, <amount> <hour|hours|day|days>, <percent>[%]`
///
/// The pattern is anchored, so the lazy name group backtracks past commas
/// until the rest of the line matches; names may contain commas.
static TASK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d+)\.\s*(.+?)\s*,\s*(\d+(?:\.\d*)?|\.\d+)\s*((?i:hours?|days?))\s*,\s*(\d+(?:\.\d*)?|\.\d+)\s*%?$",
    )
    .expect("task line regex is valid")
});

const HOURS_PER_DAY: f64 = 24.0;

/// Parse one task line. `expected_index` is the number of tasks read so far.
///
/// The trailing number is the chance of success in percent; the stored
/// `failure_rate` is `(100 - percent) / 100`.
pub fn parse_task_line(line: &str, line_no: usize, expected_index: usize) -> Result<Task> {
    let caps = TASK_LINE.captures(line).ok_or_else(|| RiskorderError::Parse {
        line: line_no,
        message: format!(
            "expected `<index>. <name>, <amount> <hours|days>, <percent>`, got `{line}`"
        ),
    })?;

    let index: usize = caps[1].parse().map_err(|_| RiskorderError::Parse {
        line: line_no,
        message: format!("task index `{}` is too large", &caps[1]),
    })?;
    if index != expected_index {
        return Err(RiskorderError::IndexMismatch {
            line: line_no,
            expected: expected_index,
            found: index,
        });
    }

    let name = caps[2].to_string();
    let amount = parse_number(&caps[3], line_no)?;
    let duration_hours = if caps[4].to_lowercase().starts_with("day") {
        amount * HOURS_PER_DAY
    } else {
        amount
    };

    let percent = parse_number(&caps[5], line_no)?;
    if percent > 100.0 {
        return Err(RiskorderError::Parse {
            line: line_no,
            message: format!("percentage must be within 0..=100, got {percent}"),
        });
    }

    Ok(Task {
        index,
        name,
        duration_hours,
        failure_rate: (100.0 - percent) / 100.0,
    })
}

fn parse_number(s: &str, line_no: usize) -> Result<f64> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RiskorderError::Parse {
            line: line_no,
            message: format!("invalid number `{s}`"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hours_and_converts_percent() {
        let task = parse_task_line("0. Build the thing, 10 hours, 50", 1, 0).unwrap();
        assert_eq!(task.index, 0);
        assert_eq!(task.name, "Build the thing");
        assert_eq!(task.duration_hours, 10.0);
        assert!((task.failure_rate - 0.5).abs() < 1e-12);
    }

    #[test]
    fn days_are_converted_to_hours() {
        let task = parse_task_line("3. Review, 1.5 days, 90%", 4, 3).unwrap();
        assert_eq!(task.duration_hours, 36.0);
        assert!((task.failure_rate - 0.1).abs() < 1e-12);
    }

    #[test]
    fn names_may_contain_commas() {
        let task = parse_task_line("0. Read, think, write, 1 hour, 100", 1, 0).unwrap();
        assert_eq!(task.name, "Read, think, write");
        assert_eq!(task.failure_rate, 0.0);
    }

    #[test]
    fn out_of_sequence_index_is_reported() {
        match parse_task_line("2. Skipped, 1 hour, 50", 2, 1) {
            Err(RiskorderError::IndexMismatch {
                line,
                expected,
                found,
            }) => {
                assert_eq!((line, expected, found), (2, 1, 2));
            }
            other => panic!("expected IndexMismatch, got {other:?}"),
        }
    }

    #[test]
    fn malformed_lines_report_line_number() {
        for bad in [
            "0 Missing dot, 1 hour, 50",
            "0. No unit, 1, 50",
            "0. Weeks, 1 week, 50",
            "0. Too likely, 1 hour, 150",
            "0. Negative, -1 hour, 50",
        ] {
            match parse_task_line(bad, 7, 0) {
                Err(RiskorderError::Parse { line, .. }) => assert_eq!(line, 7, "{bad}"),
                other => panic!("expected Parse error for `{bad}`, got {other:?}"),
            }
        }
    }
}
