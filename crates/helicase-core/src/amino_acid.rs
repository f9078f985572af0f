use serde::Serialize;

/// One of the twenty standard amino acids, with its three text
/// representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AminoAcid {
    /// One-letter IUPAC code.
    pub code: char,
    /// Three-letter abbreviation.
    pub abbreviation: &'static str,
    /// Full chemical name.
    pub name: &'static str,
}

impl AminoAcid {
    const fn new(code: char, abbreviation: &'static str, name: &'static str) -> Self {
        Self {
            code,
            abbreviation,
            name,
        }
    }

    pub const PHE: AminoAcid = AminoAcid::new('F', "Phe", "Phenylalanine");
    pub const LEU: AminoAcid = AminoAcid::new('L', "Leu", "Leucine");
    pub const ILE: AminoAcid = AminoAcid::new('I', "Ile", "Isoleucine");
    pub const MET: AminoAcid = AminoAcid::new('M', "Met", "Methionine");
    pub const VAL: AminoAcid = AminoAcid::new('V', "Val", "Valine");
    pub const SER: AminoAcid = AminoAcid::new('S', "Ser", "Serine");
    pub const PRO: AminoAcid = AminoAcid::new('P', "Pro", "Proline");
    pub const THR: AminoAcid = AminoAcid::new('T', "Thr", "Threonine");
    pub const ALA: AminoAcid = AminoAcid::new('A', "Ala", "Alanine");
    pub const TYR: AminoAcid = AminoAcid::new('Y', "Tyr", "Tyrosine");
    pub const HIS: AminoAcid = AminoAcid::new('H', "His", "Histidine");
    pub const GLN: AminoAcid = AminoAcid::new('Q', "Gln", "Glutamine");
    pub const ASN: AminoAcid = AminoAcid::new('N', "Asn", "Asparagine");
    pub const LYS: AminoAcid = AminoAcid::new('K', "Lys", "Lysine");
    pub const ASP: AminoAcid = AminoAcid::new('D', "Asp", "Aspartic acid");
    pub const GLU: AminoAcid = AminoAcid::new('E', "Glu", "Glutamic acid");
    pub const CYS: AminoAcid = AminoAcid::new('C', "Cys", "Cysteine");
    pub const TRP: AminoAcid = AminoAcid::new('W', "Trp", "Tryptophan");
    pub const ARG: AminoAcid = AminoAcid::new('R', "Arg", "Arginine");
    pub const GLY: AminoAcid = AminoAcid::new('G', "Gly", "Glycine");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_representations() {
        assert_eq!(AminoAcid::MET.code, 'M');
        assert_eq!(AminoAcid::MET.abbreviation, "Met");
        assert_eq!(AminoAcid::MET.name, "Methionine");
        assert_eq!(AminoAcid::ASP.name, "Aspartic acid");
    }

    #[test]
    fn test_equality() {
        assert_eq!(AminoAcid::PRO, AminoAcid::PRO);
        assert_ne!(AminoAcid::PRO, AminoAcid::GLY);
    }
}
