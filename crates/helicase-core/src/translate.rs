use tracing::debug;

use crate::amino_acid::AminoAcid;
use crate::codon::CodonTable;
use crate::frame::{frame, Frame};
use crate::strand::Strand;

/// An ordered sequence of amino acids, the product of translation.
pub type Polypeptide = Vec<AminoAcid>;

/// Walk a frame's codons through the standard codon table.
///
/// The first stop codon terminates translation and is not itself appended.
/// A dangling partial codon acts as an implicit terminator: it can never
/// be a table key, so translation ends there silently.
pub fn translate(framed: &Frame) -> Polypeptide {
    let table = CodonTable::standard();
    let mut polypeptide = Polypeptide::new();
    for codon in &framed.codons {
        if table.is_stop(codon) {
            debug!(%codon, "stop codon reached");
            break;
        }
        let Some(amino_acid) = table.lookup(codon) else {
            debug!(%codon, "frame ends in a partial codon");
            break;
        };
        polypeptide.push(amino_acid);
    }
    polypeptide
}

/// Frame a raw strand and translate it.
///
/// Returns an empty polypeptide when the strand holds no reading frame.
pub fn translate_unframed(strand: &Strand) -> Polypeptide {
    match frame(strand) {
        Some(framed) => translate(&framed),
        None => Polypeptide::new(),
    }
}
