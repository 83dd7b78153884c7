use std::io;
use std::num::ParseFloatError;

use thiserror::Error;

/// Error produced when an input file cannot be parsed into a graph.
///
/// Loading is all-or-nothing: the first malformed line aborts the load, so
/// a partially built graph never escapes.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("line {line}: expected two whitespace-separated city names")]
    Adjacency { line: usize },

    #[error("line {line}: expected `name, latitude, longitude`")]
    Coordinate { line: usize },

    #[error("line {line}: bad coordinate value")]
    BadNumber {
        line: usize,
        #[source]
        source: ParseFloatError,
    },

    #[error("failed to read input")]
    Io(#[from] io::Error),
}

/// Error produced when a search cannot start.
///
/// An unreachable destination is not an error; it is reported through
/// [crate::SearchOutcome] with `found` set to false.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("city {0:?} is not in the graph")]
    CityNotFound(String),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
