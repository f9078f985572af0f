use crate::strand::{Alphabet, Strand};
use crate::HelicaseError;

/// Complement a single DNA base into the target alphabet.
fn complement(base: char, target: Alphabet) -> char {
    match (base, target) {
        ('a', Alphabet::Dna) => 't',
        ('a', Alphabet::Rna) => 'u',
        ('t', _) => 'a',
        ('g', _) => 'c',
        ('c', _) => 'g',
        (other, _) => other,
    }
}

/// Transcribe a DNA strand into its complementary strand, in either the
/// DNA or the RNA alphabet.
///
/// Transcription always starts from DNA: any base outside {a,t,g,c} in the
/// input, uracil included, is an `InvalidBase` error. The result is a new
/// strand of equal length tagged with the target alphabet.
pub fn transcribe(strand: &Strand, target: Alphabet) -> Result<Strand, HelicaseError> {
    if let Some((position, base)) = strand
        .as_str()
        .chars()
        .enumerate()
        .find(|(_, c)| !Alphabet::Dna.allows(*c))
    {
        return Err(HelicaseError::InvalidBase {
            base,
            position,
            alphabet: Alphabet::Dna,
        });
    }

    let sequence = strand
        .as_str()
        .chars()
        .map(|base| complement(base, target))
        .collect();
    Ok(Strand::from_validated(sequence, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dna(text: &str) -> Strand {
        Strand::parse(text, Alphabet::Dna).unwrap()
    }

    #[test]
    fn test_transcribe_to_dna() {
        let template = transcribe(&dna("atcg"), Alphabet::Dna).unwrap();
        assert_eq!(template.as_str(), "tagc");
        assert_eq!(template.alphabet(), Alphabet::Dna);
    }

    #[test]
    fn test_transcribe_to_rna() {
        let template = transcribe(&dna("atcg"), Alphabet::Rna).unwrap();
        assert_eq!(template.as_str(), "uagc");
        assert_eq!(template.alphabet(), Alphabet::Rna);
    }

    #[test]
    fn test_dna_transcription_is_an_involution() {
        let strand = dna("catgccccccccctaatct");
        let twice =
            transcribe(&transcribe(&strand, Alphabet::Dna).unwrap(), Alphabet::Dna).unwrap();
        assert_eq!(twice, strand);
    }

    #[test]
    fn test_rna_transcript_has_no_thymine_and_equal_length() {
        let strand = dna("attgcgtgaacct");
        let transcript = transcribe(&strand, Alphabet::Rna).unwrap();
        assert!(!transcript.as_str().contains('t'));
        assert_eq!(transcript.len(), strand.len());
    }

    #[test]
    fn test_cannot_transcribe_rna_input() {
        let rna = Strand::parse("acgu", Alphabet::Rna).unwrap();
        let err = transcribe(&rna, Alphabet::Dna).unwrap_err();
        assert_eq!(
            err,
            HelicaseError::InvalidBase {
                base: 'u',
                position: 3,
                alphabet: Alphabet::Dna,
            }
        );
    }

    #[test]
    fn test_transcribe_empty_strand() {
        let empty = transcribe(&dna(""), Alphabet::Rna).unwrap();
        assert!(empty.is_empty());
    }
}
