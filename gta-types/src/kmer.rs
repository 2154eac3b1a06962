//! Protein k-mer generation over (possibly aligned) amino-acid sequences.

use crate::codon;

/// Largest supported protein k-mer.
pub const MAX_PROT_KMER_SIZE: usize = 24;

/// A protein k-mer together with the 1-based model column it starts at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtKmer {
    pub aas: Vec<u8>,
    pub model_position: usize,
}

/// Iterator over the protein k-mers of a sequence.
///
/// With `model_only`, the sequence is read as an aligned row: lowercase
/// residues (insertions) and `-`/`X` (unoccupied model columns) break the
/// current k-mer run, `-`/`X` still advance the model position, and `.`/`*`
/// are skipped outright.
///
/// Panics on residues outside the amino-acid alphabet.
pub struct ProtKmerGenerator<'a> {
    bases: &'a [u8],
    k: usize,
    model_only: bool,
    index: usize,
    // 1-based model column of the next residue.
    position: usize,
    window: Vec<u8>,
}

impl<'a> ProtKmerGenerator<'a> {
    pub fn new(seq: &'a [u8], k: usize) -> Self {
        Self::with_model_only(seq, k, false)
    }

    pub fn with_model_only(seq: &'a [u8], k: usize, model_only: bool) -> Self {
        assert!(k <= MAX_PROT_KMER_SIZE, "k-mer size cannot be larger than 24");
        assert!(seq.len() >= k, "sequence length is less than the k-mer length");
        ProtKmerGenerator {
            bases: seq,
            k,
            model_only,
            index: 0,
            position: 1,
            window: Vec::with_capacity(k),
        }
    }
}

impl Iterator for ProtKmerGenerator<'_> {
    type Item = ProtKmer;

    fn next(&mut self) -> Option<ProtKmer> {
        while self.index < self.bases.len() {
            let base = self.bases[self.index];
            self.index += 1;

            if self.model_only
                && (base.is_ascii_lowercase() || base == b'-' || base == b'X')
            {
                if base == b'-' || base == b'X' {
                    self.position += 1;
                }
                self.window.clear();
                continue;
            }
            if self.model_only && (base == b'.' || base == b'*') {
                continue;
            }
            assert!(
                codon::aa_index(base).is_some(),
                "unknown amino acid {:?}",
                base as char
            );

            self.window.push(base.to_ascii_uppercase());
            self.position += 1;
            if self.window.len() == self.k {
                let kmer = ProtKmer {
                    aas: self.window.clone(),
                    model_position: self.position - self.k,
                };
                self.window.remove(0);
                return Some(kmer);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kmers(seq: &[u8], k: usize, model_only: bool) -> Vec<(String, usize)> {
        ProtKmerGenerator::with_model_only(seq, k, model_only)
            .map(|km| (String::from_utf8(km.aas).unwrap(), km.model_position))
            .collect()
    }

    #[test]
    fn plain_sliding_window() {
        assert_eq!(
            kmers(b"MKWVT", 3, false),
            vec![
                ("MKW".to_string(), 1),
                ("KWV".to_string(), 2),
                ("WVT".to_string(), 3)
            ]
        );
    }

    #[test]
    fn model_only_breaks_on_insert_columns() {
        // 'v' is an insertion: the run restarts after it and the model
        // position does not advance.
        assert_eq!(
            kmers(b"MKvWVT", 3, true),
            vec![("WVT".to_string(), 3)]
        );
    }

    #[test]
    fn gap_columns_advance_the_model_position() {
        // The '-' occupies model column 3.
        assert_eq!(
            kmers(b"MK-WVT", 3, true),
            vec![("WVT".to_string(), 4)]
        );
    }

    #[test]
    #[should_panic(expected = "unknown amino acid")]
    fn rejects_unknown_residues() {
        kmers(b"MKB", 3, false);
    }
}
