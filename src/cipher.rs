use openssl::{cipher::Cipher, cipher_ctx::CipherCtx};

use crate::error::{CryptoError, Result};

/// Seam for the block-cipher collaborator. The cryptanalysis core never
/// decrypts blocks itself; a consumer holding a known or recovered key plugs
/// an implementation in here.
pub trait BlockCipher {
    const BYTES: usize;

    fn init(key: &[u8]) -> Self;
    fn encrypt_block(&self, block: &[u8]) -> Vec<u8>;
    fn decrypt_block(&self, block: &[u8]) -> Vec<u8>;
}

/// Walks `ciphertext` block by block through the cipher. The input must be a
/// whole number of blocks; ECB carries no padding information that would
/// justify truncating.
pub fn decrypt_ecb<C: BlockCipher>(ciphertext: &[u8], cipher: &C) -> Result<Vec<u8>> {
    if ciphertext.len() % C::BYTES != 0 {
        return Err(CryptoError::InvalidLength {
            left: ciphertext.len(),
            right: C::BYTES,
        });
    }
    Ok(ciphertext
        .chunks_exact(C::BYTES)
        .flat_map(|block| cipher.decrypt_block(block))
        .collect())
}

/// Inverse of [`decrypt_ecb`], mainly useful for producing ECB fixtures to
/// feed the detector.
pub fn encrypt_ecb<C: BlockCipher>(plaintext: &[u8], cipher: &C) -> Result<Vec<u8>> {
    if plaintext.len() % C::BYTES != 0 {
        return Err(CryptoError::InvalidLength {
            left: plaintext.len(),
            right: C::BYTES,
        });
    }
    Ok(plaintext
        .chunks_exact(C::BYTES)
        .flat_map(|block| cipher.encrypt_block(block))
        .collect())
}

/// AES-128 on single blocks, backed by openssl with padding disabled.
pub struct Aes128 {
    key: Vec<u8>,
}

impl BlockCipher for Aes128 {
    const BYTES: usize = 16;

    fn init(key: &[u8]) -> Self {
        Self { key: key.to_vec() }
    }

    fn encrypt_block(&self, block: &[u8]) -> Vec<u8> {
        assert_eq!(block.len(), Self::BYTES);

        let mut cipher_ctx = CipherCtx::new().unwrap();

        cipher_ctx
            .encrypt_init(Some(Cipher::aes_128_ecb()), Some(&self.key), None)
            .unwrap();
        cipher_ctx.set_padding(false);

        let mut output = Vec::with_capacity(Self::BYTES);

        cipher_ctx.cipher_update_vec(block, &mut output).unwrap();
        cipher_ctx.cipher_final_vec(&mut output).unwrap();

        output
    }

    fn decrypt_block(&self, block: &[u8]) -> Vec<u8> {
        assert_eq!(block.len(), Self::BYTES);

        let mut cipher_ctx = CipherCtx::new().unwrap();

        cipher_ctx
            .decrypt_init(Some(Cipher::aes_128_ecb()), Some(&self.key), None)
            .unwrap();
        cipher_ctx.set_padding(false);

        let mut output = Vec::with_capacity(Self::BYTES);

        cipher_ctx.cipher_update_vec(block, &mut output).unwrap();
        cipher_ctx.cipher_final_vec(&mut output).unwrap();

        output
    }
}
