use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum RlfapError {
    #[error("failed to read instance file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not find a {kind} file for instance '{instance}' in '{}'", directory.display())]
    MissingInstanceFile {
        kind: &'static str,
        instance: String,
        directory: PathBuf,
    },

    #[error("line {line}: expected an integer, got '{token}'")]
    InvalidInteger { line: usize, token: String },

    #[error("line {line}: expected at least {expected} fields, got {actual}")]
    MissingFields {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("line {line}: expected {expected} domain values, got {actual}")]
    WrongValueCount {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("line {line}: unknown constraint operator '{operator}'")]
    UnknownOperator { line: usize, operator: String },

    #[error("line {line}: duplicate variable {variable}")]
    DuplicateVariable { line: usize, variable: i32 },

    #[error("line {line}: variable {variable} is constrained against itself")]
    SelfConstraint { line: usize, variable: i32 },

    #[error("variable {variable} references undefined domain {domain}")]
    UndefinedDomain { variable: i32, domain: i32 },

    #[error("constraint references undefined variable {variable}")]
    UndefinedVariable { variable: i32 },
}
