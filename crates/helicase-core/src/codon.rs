use std::collections::HashMap;
use std::sync::LazyLock;

use crate::amino_acid::AminoAcid;

/// Start codon marking the translation origin.
pub const START_CODON: &str = "atg";

/// Stop codons marking the translation terminus.
pub const STOP_CODONS: [&str; 3] = ["taa", "tag", "tga"];

static STANDARD: LazyLock<CodonTable> = LazyLock::new(CodonTable::build_standard);

/// The standard genetic code: every one of the 61 coding codons maps to an
/// amino acid, and the 3 remaining triples are stop codons.
pub struct CodonTable {
    table: HashMap<&'static str, AminoAcid>,
}

impl CodonTable {
    /// Shared table for the standard genetic code, built on first use and
    /// never mutated.
    pub fn standard() -> &'static CodonTable {
        &STANDARD
    }

    fn build_standard() -> Self {
        let codons = [
            ("ttt", AminoAcid::PHE), ("ttc", AminoAcid::PHE),
            ("tta", AminoAcid::LEU), ("ttg", AminoAcid::LEU),
            ("ctt", AminoAcid::LEU), ("ctc", AminoAcid::LEU),
            ("cta", AminoAcid::LEU), ("ctg", AminoAcid::LEU),
            ("att", AminoAcid::ILE), ("atc", AminoAcid::ILE), ("ata", AminoAcid::ILE),
            ("atg", AminoAcid::MET),
            ("gtt", AminoAcid::VAL), ("gtc", AminoAcid::VAL),
            ("gta", AminoAcid::VAL), ("gtg", AminoAcid::VAL),
            ("tct", AminoAcid::SER), ("tcc", AminoAcid::SER),
            ("tca", AminoAcid::SER), ("tcg", AminoAcid::SER),
            ("agt", AminoAcid::SER), ("agc", AminoAcid::SER),
            ("cct", AminoAcid::PRO), ("ccc", AminoAcid::PRO),
            ("cca", AminoAcid::PRO), ("ccg", AminoAcid::PRO),
            ("act", AminoAcid::THR), ("acc", AminoAcid::THR),
            ("aca", AminoAcid::THR), ("acg", AminoAcid::THR),
            ("gct", AminoAcid::ALA), ("gcc", AminoAcid::ALA),
            ("gca", AminoAcid::ALA), ("gcg", AminoAcid::ALA),
            ("tat", AminoAcid::TYR), ("tac", AminoAcid::TYR),
            ("cat", AminoAcid::HIS), ("cac", AminoAcid::HIS),
            ("caa", AminoAcid::GLN), ("cag", AminoAcid::GLN),
            ("aat", AminoAcid::ASN), ("aac", AminoAcid::ASN),
            ("aaa", AminoAcid::LYS), ("aag", AminoAcid::LYS),
            ("gat", AminoAcid::ASP), ("gac", AminoAcid::ASP),
            ("gaa", AminoAcid::GLU), ("gag", AminoAcid::GLU),
            ("tgt", AminoAcid::CYS), ("tgc", AminoAcid::CYS),
            ("tgg", AminoAcid::TRP),
            ("cgt", AminoAcid::ARG), ("cgc", AminoAcid::ARG),
            ("cga", AminoAcid::ARG), ("cgg", AminoAcid::ARG),
            ("aga", AminoAcid::ARG), ("agg", AminoAcid::ARG),
            ("ggt", AminoAcid::GLY), ("ggc", AminoAcid::GLY),
            ("gga", AminoAcid::GLY), ("ggg", AminoAcid::GLY),
        ];

        let mut table = HashMap::with_capacity(codons.len());
        for (codon, aa) in codons {
            table.insert(codon, aa);
        }

        CodonTable { table }
    }

    /// Look up the amino acid coded by a codon.
    ///
    /// Returns `None` for stop codons and for anything that is not a
    /// 3-base DNA codon (a dangling partial codon, for instance).
    pub fn lookup(&self, codon: &str) -> Option<AminoAcid> {
        self.table.get(codon.to_ascii_lowercase().as_str()).copied()
    }

    pub fn is_start(&self, codon: &str) -> bool {
        codon.eq_ignore_ascii_case(START_CODON)
    }

    pub fn is_stop(&self, codon: &str) -> bool {
        STOP_CODONS.iter().any(|stop| codon.eq_ignore_ascii_case(stop))
    }
}
