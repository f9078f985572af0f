//! Simulates core transformations on strands of DNA bases: validating raw
//! text, locating a reading frame, transcribing to a complementary strand
//! (DNA or RNA), translating framed codons into a polypeptide, and
//! rendering the result at a chosen verbosity.

pub mod amino_acid;
pub mod codon;
pub mod frame;
pub mod represent;
pub mod strand;
pub mod transcribe;
pub mod translate;

use thiserror::Error;

pub use amino_acid::AminoAcid;
pub use codon::CodonTable;
pub use frame::{frame, Frame};
pub use represent::{represent, represent_level, Verbosity};
pub use strand::{Alphabet, Strand};
pub use transcribe::transcribe;
pub use translate::{translate, translate_unframed, Polypeptide};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HelicaseError {
    #[error("invalid base '{base}' at position {position} in {alphabet} input")]
    InvalidBase {
        base: char,
        position: usize,
        alphabet: Alphabet,
    },
    #[error("unknown verbosity level {0}, expected 0 (single char), 1 (normal) or 2 (verbose)")]
    InvalidVerbosity(u8),
}
