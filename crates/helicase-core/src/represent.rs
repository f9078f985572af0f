use serde::{Deserialize, Serialize};

use crate::amino_acid::AminoAcid;
use crate::HelicaseError;

/// How much detail a rendered polypeptide carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    /// One-letter IUPAC codes, no separator: `MPC`.
    SingleChar,
    /// Three-letter abbreviations joined by `/`: `Met/Pro/Cys`.
    Normal,
    /// Full names joined by `, `: `Methionine, Proline, Cysteine`.
    Verbose,
}

impl TryFrom<u8> for Verbosity {
    type Error = HelicaseError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Verbosity::SingleChar),
            1 => Ok(Verbosity::Normal),
            2 => Ok(Verbosity::Verbose),
            other => Err(HelicaseError::InvalidVerbosity(other)),
        }
    }
}

/// Render a polypeptide as text at the given verbosity. An empty
/// polypeptide renders as empty text at every level.
pub fn represent(polypeptide: &[AminoAcid], verbosity: Verbosity) -> String {
    let (parts, separator): (Vec<String>, &str) = match verbosity {
        Verbosity::SingleChar => (
            polypeptide.iter().map(|aa| aa.code.to_string()).collect(),
            "",
        ),
        Verbosity::Normal => (
            polypeptide.iter().map(|aa| aa.abbreviation.to_string()).collect(),
            "/",
        ),
        Verbosity::Verbose => (
            polypeptide.iter().map(|aa| aa.name.to_string()).collect(),
            ", ",
        ),
    };
    parts.join(separator)
}

/// Render at a raw numeric verbosity level (0, 1 or 2).
///
/// Any other level is an `InvalidVerbosity` error.
pub fn represent_level(polypeptide: &[AminoAcid], level: u8) -> Result<String, HelicaseError> {
    Ok(represent(polypeptide, Verbosity::try_from(level)?))
}
