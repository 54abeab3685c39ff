pub mod single_byte {
    use rayon::prelude::*;

    use crate::corpus::Corpus;
    use crate::encrypt::xor::single_byte_xor;
    use crate::error::{CryptoError, Result};

    /// One decryption attempt out of the 256 possible single-byte keys.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Candidate {
        pub key: u8,
        pub plaintext: Vec<u8>,
        pub score: f64,
    }

    /// Orders candidates by score; equal scores prefer the lower key byte, so
    /// the winner is the same one an ascending sweep with a strict `>`
    /// comparison would keep, no matter in which order the keys were tried.
    fn rank(a: &Candidate, b: &Candidate) -> std::cmp::Ordering {
        a.score.total_cmp(&b.score).then(b.key.cmp(&a.key))
    }

    /// Tries all 256 single-byte keys against `ciphertext` and returns the
    /// candidate whose decryption scores best against `corpus`.
    ///
    /// The key space is scored in parallel; each candidate is a pure function
    /// of its own inputs and the winner falls out of the explicit [`rank`]
    /// comparator.
    pub fn break_single_byte(ciphertext: &[u8], corpus: &Corpus) -> Result<Candidate> {
        if ciphertext.is_empty() {
            return Err(CryptoError::EmptyInput);
        }

        let candidates = (0u16..=255)
            .into_par_iter()
            .map(|key| {
                let key = key as u8;
                let plaintext = single_byte_xor(ciphertext, key);
                let score = corpus.score_bytes(&plaintext)?;
                Ok(Candidate {
                    key,
                    plaintext,
                    score,
                })
            })
            .collect::<Result<Vec<Candidate>>>()?;

        candidates
            .into_iter()
            .max_by(rank)
            .ok_or(CryptoError::EmptyInput)
    }
}

pub mod multibyte {
    use rayon::prelude::*;

    use super::single_byte::break_single_byte;
    use crate::corpus::Corpus;
    use crate::error::{CryptoError, Result};

    /// Bounds of the repeating-key search. Keys longer than 40 bytes would
    /// make the column brute force intractable for the corpus sizes this
    /// model is good for.
    pub const MIN_KEY_LENGTH: usize = 2;
    pub const MAX_KEY_LENGTH: usize = 40;

    /// Number of differing bits between two byte slices of the same length.
    pub fn hamming_distance(bytes1: &[u8], bytes2: &[u8]) -> Result<usize> {
        if bytes1.len() != bytes2.len() {
            return Err(CryptoError::InvalidLength {
                left: bytes1.len(),
                right: bytes2.len(),
            });
        }
        Ok(bytes1
            .iter()
            .zip(bytes2.iter())
            .map(|(u, v)| (u ^ v).count_ones() as usize)
            .sum())
    }

    /// Estimates the length of the repeating key behind `ciphertext`.
    ///
    /// For every candidate length k in [2, 40] the bit distance between the
    /// two disjoint samples [0, 4k) and [4k, 8k) is normalized by k; the
    /// strictly lowest distance wins, ties going to the smaller k. Samples
    /// that start and end on key-period boundaries cancel the key entirely,
    /// leaving the characteristically low plaintext-vs-plaintext distance,
    /// while misaligned lengths measure near-uniform noise.
    ///
    /// Inputs shorter than 8 * 40 bytes cannot feed two full samples to the
    /// largest candidate and are rejected rather than scored on a silently
    /// narrowed range.
    pub fn estimate_key_length(ciphertext: &[u8]) -> Result<usize> {
        let needed = 8 * MAX_KEY_LENGTH;
        if ciphertext.len() < needed {
            return Err(CryptoError::InsufficientInput {
                needed,
                actual: ciphertext.len(),
            });
        }

        let mut best = (0usize, f64::MAX);
        for k in MIN_KEY_LENGTH..=MAX_KEY_LENGTH {
            let distance = hamming_distance(&ciphertext[..4 * k], &ciphertext[4 * k..8 * k])?;
            let normalized = distance as f64 / k as f64;
            if normalized < best.1 {
                best = (k, normalized);
            }
        }
        Ok(best.0)
    }

    /// Recovers the full repeating key from `ciphertext`.
    ///
    /// The ciphertext is transposed into one column per key position, column
    /// c holding the bytes at c, c + len, c + 2 * len, ... (trailing columns
    /// may run one byte short and are scored against their own length). Each
    /// column is a plain single-byte XOR cipher and is broken independently;
    /// the recovered bytes concatenated in column order are the key.
    ///
    /// Decrypting is then the caller's one-liner:
    /// [`crate::encrypt::xor::repeating_key_xor`] with the returned key.
    pub fn break_repeating_key(ciphertext: &[u8], corpus: &Corpus) -> Result<Vec<u8>> {
        let key_length = estimate_key_length(ciphertext)?;

        let columns: Vec<Vec<u8>> = (0..key_length)
            .map(|c| ciphertext.iter().skip(c).step_by(key_length).copied().collect())
            .collect();

        columns
            .par_iter()
            .map(|column| Ok(break_single_byte(column, corpus)?.key))
            .collect()
    }

    #[test]
    fn test_hamming_distance() {
        assert_eq!(hamming_distance(b"this is a test", b"wokka wokka!!!"), Ok(37));
        assert_eq!(hamming_distance(b"wokka wokka!!!", b"this is a test"), Ok(37));
        assert_eq!(hamming_distance(b"same", b"same"), Ok(0));
        assert_eq!(
            hamming_distance(b"one", b"four"),
            Err(CryptoError::InvalidLength { left: 3, right: 4 })
        );
    }

    #[test]
    fn test_short_input_is_rejected() {
        let short = vec![0u8; 319];
        assert_eq!(
            estimate_key_length(&short),
            Err(CryptoError::InsufficientInput {
                needed: 320,
                actual: 319
            })
        );
    }
}

pub mod cipher {
    use std::collections::HashSet;

    use crate::error::{CryptoError, Result};

    /// Scans fixed-size ciphertext blocks for an exact duplicate, the
    /// structural signature of ECB mode. Returns true on the first repeated
    /// block. The ciphertext must be a whole number of blocks; anything else
    /// is a caller contract error, not something to truncate quietly.
    pub fn detect_ecb(ciphertext: &[u8], block_size: usize) -> Result<bool> {
        if block_size == 0 || ciphertext.len() % block_size != 0 {
            return Err(CryptoError::InvalidLength {
                left: ciphertext.len(),
                right: block_size,
            });
        }

        let mut seen = HashSet::new();
        for block in ciphertext.chunks_exact(block_size) {
            if !seen.insert(block) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    #[test]
    fn test_detect_ecb() {
        let mut repeated = Vec::new();
        repeated.extend(0u8..16);
        repeated.extend(16u8..32);
        repeated.extend(0u8..16);
        assert_eq!(detect_ecb(&repeated, 16), Ok(true));

        let distinct: Vec<u8> = (0u8..64).collect();
        assert_eq!(detect_ecb(&distinct, 16), Ok(false));
    }

    #[test]
    fn test_detect_ecb_ragged_input() {
        assert_eq!(
            detect_ecb(&[0u8; 17], 16),
            Err(CryptoError::InvalidLength { left: 17, right: 16 })
        );
        assert_eq!(
            detect_ecb(&[0u8; 16], 0),
            Err(CryptoError::InvalidLength { left: 16, right: 0 })
        );
    }
}

#[cfg(test)]
mod tests {
    use super::multibyte::{break_repeating_key, estimate_key_length};
    use super::single_byte::break_single_byte;
    use crate::corpus::Corpus;
    use crate::encrypt::xor::{repeating_key_xor, single_byte_xor};
    use crate::error::CryptoError;

    // Stand-in for a reference corpus file. Long enough that every column of
    // a 29-byte key still sees a representative letter distribution.
    const SAMPLE: &str = "It is a truth universally acknowledged, that a single man in \
        possession of a good fortune, must be in want of a wife. However little known \
        the feelings or views of such a man may be on his first entering a \
        neighbourhood, this truth is so well fixed in the minds of the surrounding \
        families, that he is considered as the rightful property of some one or other \
        of their daughters. My dear Mr. Bennet, said his lady to him one day, have you \
        heard that Netherfield Park is let at last? Mr. Bennet replied that he had not. \
        But it is, returned she; for Mrs. Long has just been here, and she told me all \
        about it. Mr. Bennet made no answer. Do not you want to know who has taken it? \
        cried his wife impatiently. You want to tell me, and I have no objection to \
        hearing it. Why, my dear, you must know, Mrs. Long says that Netherfield is \
        taken by a young man of large fortune from the north of England; that he came \
        down on Monday in a chaise and four to see the place, and was so much \
        delighted with it that he agreed with Mr. Morris immediately; that he is to \
        take possession before Michaelmas, and some of his servants are to be in the \
        house by the end of next week.";

    // 29 has no harmonic in [2, 40], so only one candidate aligns with the
    // key period, and the byte-diverse key keeps every misaligned distance
    // high.
    const KEY: &[u8] = b"x9@Qz!Lm#4Wd^7Kt*2Jp&8Ns%5Rb+";

    #[test]
    fn single_byte_break_recovers_key() {
        let corpus = Corpus::from_text(SAMPLE).unwrap();
        let plaintext = b"a single man in possession of a good fortune";
        let ciphertext = single_byte_xor(plaintext, 0x58);

        let candidate = break_single_byte(&ciphertext, &corpus).unwrap();
        assert_eq!(candidate.key, 0x58);
        assert_eq!(candidate.plaintext, plaintext);
    }

    #[test]
    fn single_byte_break_tie_goes_to_lowest_key() {
        // With a corpus of one letter, only the two keys mapping one of the
        // two ciphertext bytes onto 'z' score at all, both equally. The
        // ascending-order winner is the lower key.
        let corpus = Corpus::from_text("zzzz").unwrap();
        let candidate = break_single_byte(&[0x00, 0x01], &corpus).unwrap();
        assert_eq!(candidate.key, b'z');
        assert_eq!(candidate.score, 0.5);
    }

    #[test]
    fn single_byte_break_rejects_empty_input() {
        let corpus = Corpus::from_text(SAMPLE).unwrap();
        assert_eq!(
            break_single_byte(&[], &corpus).unwrap_err(),
            CryptoError::EmptyInput
        );
    }

    #[test]
    fn key_length_estimate_finds_period() {
        let ciphertext = repeating_key_xor(SAMPLE.as_bytes(), KEY);
        assert_eq!(estimate_key_length(&ciphertext), Ok(KEY.len()));
    }

    #[test]
    fn repeating_key_break_recovers_key() {
        let corpus = Corpus::from_text(SAMPLE).unwrap();
        let ciphertext = repeating_key_xor(SAMPLE.as_bytes(), KEY);

        let key = break_repeating_key(&ciphertext, &corpus).unwrap();
        assert_eq!(key, KEY);
        assert_eq!(repeating_key_xor(&ciphertext, &key), SAMPLE.as_bytes());
    }

    #[test]
    fn ice_ciphertext_decrypts_end_to_end() {
        let ciphertext = hex::decode(
            "0b3637272a2b2e63622c2e69692a23693a2a3c6324202d623d63343c2a26226324272765272a28\
             2b2f20430a652e2c652a3124333a653e2b2027630c692b20283165286326302e27282f",
        )
        .unwrap();

        let plaintext = repeating_key_xor(&ciphertext, b"ICE");
        assert_eq!(
            plaintext,
            b"Burning 'em, if you ain't quick and nimble\nI go crazy when I hear a cymbal"
        );
    }
}
