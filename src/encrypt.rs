pub mod xor {
    use crate::error::{CryptoError, Result};

    /// XORs two byte slices of the same length.
    pub fn fixed_xor(bytes1: &[u8], bytes2: &[u8]) -> Result<Vec<u8>> {
        if bytes1.len() != bytes2.len() {
            return Err(CryptoError::InvalidLength {
                left: bytes1.len(),
                right: bytes2.len(),
            });
        }
        Ok(bytes1
            .iter()
            .zip(bytes2.iter())
            .map(|(u, v)| u ^ v)
            .collect())
    }

    /// XORs a byte slice with a single key byte. Applying the same key twice
    /// gives back the input.
    pub fn single_byte_xor(bytes: &[u8], key: u8) -> Vec<u8> {
        bytes.iter().map(|&u| u ^ key).collect()
    }

    /// XORs a byte slice with a repeating key, position i using
    /// key[i % key.len()]. This is also called Vigenere encryption.
    pub fn repeating_key_xor(bytes: &[u8], key: &[u8]) -> Vec<u8> {
        assert!(!key.is_empty(), "key must not be empty");
        bytes
            .iter()
            .zip(key.iter().cycle())
            .map(|(u, v)| u ^ v)
            .collect()
    }

    #[test]
    fn test_fixed_xor() {
        let first = hex::decode("1c0111001f010100061a024b53535009181c").unwrap();
        let second = hex::decode("686974207468652062756c6c277320657965").unwrap();
        let expected = hex::decode("746865206b696420646f6e277420706c6179").unwrap();

        assert_eq!(fixed_xor(&first, &second), Ok(expected));
    }

    #[test]
    fn test_fixed_xor_length_mismatch() {
        assert_eq!(
            fixed_xor(&[0x80], &[0x38, 0x12]),
            Err(CryptoError::InvalidLength { left: 1, right: 2 })
        );
    }

    #[test]
    fn test_single_byte_involution() {
        use rand::{Rng, RngCore, SeedableRng};

        let mut rng = rand::rngs::StdRng::seed_from_u64(0x1ce);
        for _ in 0..16 {
            let mut plain = vec![0u8; 64];
            rng.fill_bytes(&mut plain);
            let key: u8 = rng.gen();

            assert_eq!(single_byte_xor(&single_byte_xor(&plain, key), key), plain);
        }
    }

    #[test]
    fn test_repeating_key_involution() {
        use rand::{Rng, RngCore, SeedableRng};

        let mut rng = rand::rngs::StdRng::seed_from_u64(0xda7a);
        for key_len in 1..=40usize {
            let mut plain = vec![0u8; 200];
            rng.fill_bytes(&mut plain);
            let key: Vec<u8> = (0..key_len).map(|_| rng.gen()).collect();

            assert_eq!(
                repeating_key_xor(&repeating_key_xor(&plain, &key), &key),
                plain
            );
        }
    }

    #[test]
    fn test_repeating_key_ice() {
        let output = repeating_key_xor(
            b"Burning 'em, if you ain't quick and nimble\nI go crazy when I hear a cymbal",
            b"ICE",
        );
        let expected = hex::decode("0b3637272a2b2e63622c2e69692a23693a2a3c6324202d623d63343c2a26226324272765272a282b2f20430a652e2c652a3124333a653e2b2027630c692b20283165286326302e27282f").unwrap();

        assert_eq!(output, expected);
    }
}
