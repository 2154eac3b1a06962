//! In-frame translation of encoded nucleotides to amino-acid symbols.
//!
//! Amino acids are represented as indices into [`AA_ALPHABET`], the HMMER
//! match-emission column order.

/// The 20 amino acids in HMMER column order.
pub const AA_ALPHABET: &[u8; 20] = b"ACDEFGHIKLMNPQRSTVWY";

/// Standard genetic code, first codon base outermost, bases in `A,C,G,T`
/// order. `*` marks a stop.
const GENETIC_CODE: &[u8; 64] = b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

/// Index of an amino-acid letter in [`AA_ALPHABET`], case-insensitive.
#[inline]
pub fn aa_index(aa: u8) -> Option<u8> {
    AA_ALPHABET
        .iter()
        .position(|&a| a == aa.to_ascii_uppercase())
        .map(|i| i as u8)
}

/// Translate one codon of encoded bases (`1..=4`). `None` for stop codons.
#[inline]
pub fn translate(codon: [u8; 3]) -> Option<u8> {
    let idx = (codon[0] as usize - 1) * 16 + (codon[1] as usize - 1) * 4 + codon[2] as usize - 1;
    match GENETIC_CODE[idx] {
        b'*' => None,
        aa => aa_index(aa),
    }
}

/// In-frame translation of a whole encoded sequence, truncated to whole
/// codons. `Err` reports the 0-based codon index of a stop.
pub fn translate_seq(codes: &[u8]) -> Result<Vec<u8>, usize> {
    codes
        .chunks_exact(3)
        .enumerate()
        .map(|(i, c)| translate([c[0], c[1], c[2]]).ok_or(i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dna;

    fn tr(s: &str) -> Option<u8> {
        let c = dna::encode_seq(s.as_bytes()).unwrap();
        translate([c[0], c[1], c[2]])
    }

    #[test]
    fn canonical_codons() {
        assert_eq!(tr("atg"), aa_index(b'M'));
        assert_eq!(tr("tgg"), aa_index(b'W'));
        assert_eq!(tr("aaa"), aa_index(b'K'));
        assert_eq!(tr("gat"), aa_index(b'D'));
        assert_eq!(tr("ttt"), aa_index(b'F'));
    }

    #[test]
    fn stops_have_no_symbol() {
        assert_eq!(tr("taa"), None);
        assert_eq!(tr("tag"), None);
        assert_eq!(tr("tga"), None);
    }

    #[test]
    fn in_frame_translation() {
        let codes = dna::encode_seq(b"atgaaatggc").unwrap();
        // Truncates the trailing 'c'.
        assert_eq!(
            translate_seq(&codes),
            Ok(vec![
                aa_index(b'M').unwrap(),
                aa_index(b'K').unwrap(),
                aa_index(b'W').unwrap()
            ])
        );
        let with_stop = dna::encode_seq(b"atgtaaaaa").unwrap();
        assert_eq!(translate_seq(&with_stop), Err(1));
    }
}
