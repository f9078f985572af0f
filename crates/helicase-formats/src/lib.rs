//! Loading strand text resources for `helicase-core`.
//!
//! The on-disk format is one DNA strand per line; every line is validated
//! on the way in and the whole load fails on the first bad line.

pub mod strands;

use helicase_core::HelicaseError;
use thiserror::Error;

pub use strands::{load, parse, parse_with_separator};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid strand on line {line}: {source}")]
    InvalidStrand {
        line: usize,
        #[source]
        source: HelicaseError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
