use serde::Serialize;
use tracing::debug;

use crate::codon::START_CODON;
use crate::strand::Strand;

/// A framed strand: the codons running from the first start codon to the
/// end of the source strand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// 0-based index of the start codon in the source strand.
    pub origin: usize,
    /// Consecutive non-overlapping 3-base chunks from the origin onward.
    /// The final chunk may hold 1 or 2 bases when the tail does not divide
    /// evenly into codons.
    pub codons: Vec<String>,
}

impl Frame {
    /// The trailing partial codon, if the framed tail was not a multiple
    /// of 3 bases long.
    pub fn dangling(&self) -> Option<&str> {
        self.codons
            .last()
            .map(String::as_str)
            .filter(|codon| codon.len() < 3)
    }
}

/// Scan a strand left to right for the first start codon and partition
/// everything from there into codons.
///
/// Returns `None` when the strand holds no start codon at all. The origin
/// is carried in the result, so a start codon at index 0 is
/// indistinguishable from one found deeper in only by its value, never by
/// a sentinel.
pub fn frame(strand: &Strand) -> Option<Frame> {
    let bytes = strand.as_str().as_bytes();
    let mut origin = None;

    // Rolling window over the last 3 scanned bases. The window only fills
    // with real bases from index 2 on, so `i - 2` cannot underflow on a
    // match.
    let mut window = [0u8; 3];
    for (i, &base) in bytes.iter().enumerate() {
        window[0] = window[1];
        window[1] = window[2];
        window[2] = base;
        if window[..] == *START_CODON.as_bytes() {
            origin = Some(i - 2);
            break;
        }
    }

    let origin = match origin {
        Some(origin) => origin,
        None => {
            debug!(strand = strand.as_str(), "no start codon in strand");
            return None;
        }
    };
    debug!(origin, "found start codon, strand is framed");

    let codons: Vec<String> = bytes[origin..]
        .chunks(3)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect();

    let framed = Frame { origin, codons };
    if let Some(partial) = framed.dangling() {
        debug!(partial, "framed strand terminates in a partial codon");
    }
    Some(framed)
}
