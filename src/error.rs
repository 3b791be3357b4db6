//! Error types for loading and generating dungeons.
//!
//! The search itself has no error path: discarded branches are ordinary
//! control flow and an exhausted budget is reported through
//! [`crate::solver::SearchStatus`].

use std::path::PathBuf;
use thiserror::Error;

/// Problems found while turning dungeon text into a [`crate::engine::Dungeon`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Dungeon has no rows")]
    EmptyDungeon,

    #[error("No start found ('S' on board)")]
    MissingStart,

    #[error("Multiple starts found: ({first_row}, {first_col}) and ({row}, {col})")]
    MultipleStarts {
        first_row: usize,
        first_col: usize,
        row: usize,
        col: usize,
    },

    #[error("Unrecognized character '{ch}' in row {row} col {col}")]
    UnrecognizedCharacter { ch: char, row: usize, col: usize },
}

/// Failure to load a dungeon from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Rejected random-dungeon requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Dungeon must be at least 3x3 to have a walled border, got {rows}x{cols}")]
    TooSmall { rows: usize, cols: usize },

    #[error("Interior has {available} cells but {requested} are needed (start, monsters and walls)")]
    TooCrowded { available: usize, requested: usize },
}
