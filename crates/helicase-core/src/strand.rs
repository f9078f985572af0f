use serde::{Deserialize, Serialize};

use crate::HelicaseError;

/// The two nucleic-acid alphabets a strand can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    Dna,
    Rna,
}

impl Alphabet {
    /// The four legal bases, canonical lowercase.
    pub fn bases(&self) -> [char; 4] {
        match self {
            Alphabet::Dna => ['a', 't', 'g', 'c'],
            Alphabet::Rna => ['a', 'u', 'g', 'c'],
        }
    }

    pub fn allows(&self, base: char) -> bool {
        self.bases().contains(&base)
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alphabet::Dna => write!(f, "dna"),
            Alphabet::Rna => write!(f, "rna"),
        }
    }
}

/// A validated strand of bases, immutable once constructed.
///
/// Every character is guaranteed to be a lowercase member of the strand's
/// alphabet; transforms produce new strands rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Strand {
    sequence: String,
    alphabet: Alphabet,
}

impl Strand {
    /// Validate raw text against an alphabet, trimming surrounding
    /// whitespace and lowercasing on the way in.
    ///
    /// The first character outside the alphabet fails the whole input; no
    /// partial or sanitized strand is ever returned. Uracil under the DNA
    /// alphabet is an error, never coerced.
    pub fn parse(text: &str, alphabet: Alphabet) -> Result<Self, HelicaseError> {
        let sequence = text.trim().to_ascii_lowercase();
        if let Some((position, base)) = sequence
            .chars()
            .enumerate()
            .find(|(_, c)| !alphabet.allows(*c))
        {
            return Err(HelicaseError::InvalidBase {
                base,
                position,
                alphabet,
            });
        }
        Ok(Self { sequence, alphabet })
    }

    /// Construct from a sequence already known to match the alphabet.
    pub(crate) fn from_validated(sequence: String, alphabet: Alphabet) -> Self {
        Self { sequence, alphabet }
    }

    pub fn as_str(&self) -> &str {
        &self.sequence
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercases_and_trims() {
        let strand = Strand::parse("  CATGtaacc\n", Alphabet::Dna).unwrap();
        assert_eq!(strand.as_str(), "catgtaacc");
        assert_eq!(strand.alphabet(), Alphabet::Dna);
        assert_eq!(strand.len(), 9);
    }

    #[test]
    fn test_parse_rejects_unknown_base() {
        let err = Strand::parse("aaaccctttnggg", Alphabet::Dna).unwrap_err();
        assert_eq!(
            err,
            HelicaseError::InvalidBase {
                base: 'n',
                position: 9,
                alphabet: Alphabet::Dna,
            }
        );
    }

    #[test]
    fn test_dna_rejects_uracil() {
        let err = Strand::parse("acgu", Alphabet::Dna).unwrap_err();
        assert!(matches!(err, HelicaseError::InvalidBase { base: 'u', .. }));
    }

    #[test]
    fn test_rna_accepts_uracil_rejects_thymine() {
        let strand = Strand::parse("acgu", Alphabet::Rna).unwrap();
        assert_eq!(strand.as_str(), "acgu");
        let err = Strand::parse("acgt", Alphabet::Rna).unwrap_err();
        assert!(matches!(err, HelicaseError::InvalidBase { base: 't', .. }));
    }

    #[test]
    fn test_empty_input_is_an_empty_strand() {
        let strand = Strand::parse("", Alphabet::Dna).unwrap();
        assert!(strand.is_empty());
    }
}
