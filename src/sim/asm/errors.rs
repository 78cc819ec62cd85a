use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmErrorKind {
    #[error("label {label} already exists at line {}", first + 1)]
    DuplicateLabel { label: String, first: usize },

    #[error("unknown data directive: {0}")]
    UnknownDirective(String),

    #[error("invalid data value: {0}")]
    InvalidData(String),
}

/// A load failure pinned to its (zero-based) source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsmError {
    pub line: usize,
    pub kind: AsmErrorKind,
}

impl fmt::Display for AsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line + 1, self.kind)
    }
}

impl std::error::Error for AsmError {}
