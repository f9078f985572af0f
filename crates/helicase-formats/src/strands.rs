use std::fs;
use std::path::Path;

use helicase_core::{Alphabet, Strand};
use tracing::info;

use crate::LoadError;

/// Parse one DNA strand per line.
///
/// Blank lines are skipped. The first line with a character outside the
/// DNA alphabet fails the whole batch; callers wanting partial success
/// must split their input and parse per strand.
pub fn parse(input: &str) -> Result<Vec<Strand>, LoadError> {
    parse_parts(input.lines())
}

/// Parse strands separated by an arbitrary character instead of newlines.
pub fn parse_with_separator(input: &str, separator: char) -> Result<Vec<Strand>, LoadError> {
    parse_parts(input.split(separator))
}

fn parse_parts<'a>(parts: impl Iterator<Item = &'a str>) -> Result<Vec<Strand>, LoadError> {
    let mut strands = Vec::new();
    for (index, part) in parts.enumerate() {
        if part.trim().is_empty() {
            continue;
        }
        let strand = Strand::parse(part, Alphabet::Dna).map_err(|source| {
            LoadError::InvalidStrand {
                line: index + 1,
                source,
            }
        })?;
        strands.push(strand);
    }
    info!(count = strands.len(), "validated and loaded strands");
    Ok(strands)
}

/// Read a strand file and parse it, one strand per line.
///
/// The file is read in one shot; missing files and permission failures
/// surface as `LoadError::Io` and are terminal for this load only.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Strand>, LoadError> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}
