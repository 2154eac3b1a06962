//! Nucleotide encoding and reverse-complement helpers.
//!
//! Bases are encoded as `1..=4` for `A,C,G,T`; `N` (rare in graph input)
//! shares the code of `G`. Code `0` never names a base.

/// `A,C,G,T,N` and their lowercase forms map to `1,2,3,4,3`; everything else
/// is invalid.
const DNA_MAP: [i8; 256] = build_dna_map();

const fn build_dna_map() -> [i8; 256] {
    let mut m = [-1i8; 256];
    let bases = *b"ACGTNacgtn";
    let codes = *b"1234312343";
    let mut i = 0;
    while i < bases.len() {
        m[bases[i] as usize] = (codes[i] - b'0') as i8;
        i += 1;
    }
    m
}

/// Encode one ASCII base, or `None` for bytes outside the alphabet.
#[inline]
pub fn encode(base: u8) -> Option<u8> {
    match DNA_MAP[base as usize] {
        -1 => None,
        c => Some(c as u8),
    }
}

/// Encode an ASCII sequence; the error carries the first offending byte.
pub fn encode_seq(seq: &[u8]) -> Result<Vec<u8>, u8> {
    seq.iter().map(|&b| encode(b).ok_or(b)).collect()
}

/// Lowercase ASCII for an encoded base.
#[inline]
pub fn to_char(code: u8) -> u8 {
    debug_assert!((1..=4).contains(&code));
    b"acgt"[code as usize - 1]
}

/// Complement of an encoded base. The encoding pairs `A<->T` and `C<->G`
/// around 5.
#[inline]
pub fn complement(code: u8) -> u8 {
    debug_assert!((1..=4).contains(&code));
    5 - code
}

/// Reverse complement of an encoded sequence.
pub fn revcomp(codes: &[u8]) -> Vec<u8> {
    codes.iter().rev().map(|&c| complement(c)).collect()
}

/// Complement of an emitted ASCII base; gaps pass through.
#[inline]
pub fn complement_ascii(base: u8) -> u8 {
    match base {
        b'A' | b'a' => b't',
        b'C' | b'c' => b'g',
        b'G' | b'g' => b'c',
        b'T' | b't' => b'a',
        b'N' | b'n' => b'n',
        b'-' => b'-',
        _ => unreachable!("invalid emitted base {}", base as char),
    }
}

/// Reverse complement of an emitted ASCII sequence.
pub fn revcomp_ascii(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement_ascii(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_follows_the_dna_map() {
        assert_eq!(encode(b'A'), Some(1));
        assert_eq!(encode(b'c'), Some(2));
        assert_eq!(encode(b'G'), Some(3));
        assert_eq!(encode(b't'), Some(4));
        assert_eq!(encode(b'N'), Some(3));
        assert_eq!(encode(b'x'), None);
        assert_eq!(encode_seq(b"acgt"), Ok(vec![1, 2, 3, 4]));
        assert_eq!(encode_seq(b"acQt"), Err(b'Q'));
    }

    #[test]
    fn revcomp_is_an_involution() {
        let codes = encode_seq(b"gattaca").unwrap();
        assert_eq!(revcomp(&revcomp(&codes)), codes);
        assert_eq!(revcomp(&codes), encode_seq(b"tgtaatc").unwrap());
    }

    #[test]
    fn ascii_revcomp_matches_encoded_revcomp() {
        let seq = b"gattaca";
        let via_codes: Vec<u8> = revcomp(&encode_seq(seq).unwrap())
            .iter()
            .map(|&c| to_char(c))
            .collect();
        assert_eq!(revcomp_ascii(seq), via_codes);
    }
}
