use std::sync::Arc;

use rayon::prelude::*;
use zeroize::Zeroize;

use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::cipher_types::CipherError;
use crate::crypto::utils::{apply_padding, padding_index, random_bytes, xor_block};

// Below this size the rayon fan-out costs more than it saves.
const PARALLEL_THRESHOLD: usize = 4 * 1024 * 1024;

/// ECB and CBC over any [`BlockCipher`].
///
/// Encryption pads with a 0x80 byte plus zeros when the input is not
/// block-aligned; decryption strips that padding heuristically (see
/// [`padding_index`]). CBC ciphertext carries its IV as the first block.
#[derive(Clone)]
pub struct CipherContext {
    algorithm: Arc<dyn BlockCipher>,
}

impl CipherContext {
    pub fn new(algorithm: Arc<dyn BlockCipher>) -> Self {
        CipherContext { algorithm }
    }

    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    fn for_each_block(&self, buf: &mut [u8], encrypt: bool) {
        let block_size = self.algorithm.block_size();
        let alg = &*self.algorithm;
        if buf.len() >= PARALLEL_THRESHOLD {
            buf.par_chunks_exact_mut(block_size).for_each(|block| {
                if encrypt {
                    alg.encrypt_block(block);
                } else {
                    alg.decrypt_block(block);
                }
            });
        } else {
            for block in buf.chunks_exact_mut(block_size) {
                if encrypt {
                    alg.encrypt_block(block);
                } else {
                    alg.decrypt_block(block);
                }
            }
        }
    }

    /// Strips bit padding, wiping the discarded tail first.
    fn trim_padding(&self, mut plain: Vec<u8>) -> Vec<u8> {
        if let Some(idx) = padding_index(&plain) {
            plain[idx..].zeroize();
            plain.truncate(idx);
        }
        plain
    }

    /// Encrypts each padded block independently. Empty input yields an
    /// empty ciphertext.
    pub fn encrypt_ecb(&self, data: &[u8]) -> Vec<u8> {
        if data.is_empty() {
            return Vec::new();
        }
        let mut out = apply_padding(data, self.algorithm.block_size());
        self.for_each_block(&mut out, true);
        out
    }

    /// Decrypts each block independently, then trims padding if present;
    /// unpadded data is returned whole.
    pub fn decrypt_ecb(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        if data.is_empty() {
            return Ok(Vec::new());
        }
        if data.len() % self.algorithm.block_size() != 0 {
            return Err(CipherError::InvalidCiphertextLength);
        }
        let mut out = data.to_vec();
        self.for_each_block(&mut out, false);
        Ok(self.trim_padding(out))
    }

    /// CBC encryption. A caller-supplied IV must be exactly one block and
    /// is never mutated; with `None` a fresh random IV is generated. The
    /// IV is always the first block of the returned ciphertext. Empty
    /// input yields an empty ciphertext, not an IV-only one.
    pub fn encrypt_cbc(&self, data: &[u8], iv: Option<&[u8]>) -> Result<Vec<u8>, CipherError> {
        if data.is_empty() {
            return Ok(Vec::new());
        }
        let block_size = self.algorithm.block_size();
        if let Some(iv) = iv {
            if iv.len() != block_size {
                return Err(CipherError::InvalidIvLength {
                    expected: block_size,
                    got: iv.len(),
                });
            }
        }

        let mut padded = apply_padding(data, block_size);
        let mut out = vec![0u8; padded.len() + block_size];
        match iv {
            Some(iv) => out[..block_size].copy_from_slice(iv),
            None => random_bytes(&mut out[..block_size]),
        }
        out[block_size..].copy_from_slice(&padded);
        padded.zeroize();

        for i in 0..out.len() / block_size - 1 {
            let (feedback, rest) = out.split_at_mut((i + 1) * block_size);
            let current = &mut rest[..block_size];
            xor_block(current, &feedback[i * block_size..]);
            self.algorithm.encrypt_block(current);
        }
        Ok(out)
    }

    /// CBC decryption; the first ciphertext block is taken as the IV.
    pub fn decrypt_cbc(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        if data.is_empty() {
            return Ok(Vec::new());
        }
        let block_size = self.algorithm.block_size();
        if data.len() % block_size != 0 {
            return Err(CipherError::InvalidCiphertextLength);
        }

        let mut out = data[block_size..].to_vec();
        for i in 0..out.len() / block_size {
            let block = &mut out[i * block_size..(i + 1) * block_size];
            self.algorithm.decrypt_block(block);
            // Feedback comes from the untouched input: the IV for the
            // first block, the previous ciphertext block after that.
            xor_block(block, &data[i * block_size..(i + 1) * block_size]);
        }
        Ok(self.trim_padding(out))
    }
}
