// src/errors.rs

//! Crate-wide error type.
//!
//! Every variant is fatal to a run: the binary prints it and exits non-zero.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskorderError {
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("task index mismatch on line {line}: expected {expected}, found {found}")]
    IndexMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("edge on line {line} references task {index}, but only {task_count} tasks are declared")]
    UnknownTask {
        line: usize,
        index: usize,
        task_count: usize,
    },

    #[error("Cycle detected in precedence graph: {0}")]
    CyclicGraph(String),

    #[error("search produced no schedule to score")]
    EmptyResult,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, RiskorderError>;
