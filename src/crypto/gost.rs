use zeroize::Zeroize;

use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::cipher_types::CipherError;
use crate::crypto::utils::{load_u32, store_u32};

pub const BLOCK_SIZE: usize = 8;
pub const KEY_SIZE: usize = 32;

// The Central Bank of Russia S-box set, k1..k8.
const K8: [u8; 16] = [14, 4, 13, 1, 2, 15, 11, 8, 3, 10, 6, 12, 5, 9, 0, 7];
const K7: [u8; 16] = [15, 1, 8, 14, 6, 11, 3, 4, 9, 7, 2, 13, 12, 0, 5, 10];
const K6: [u8; 16] = [10, 0, 9, 14, 6, 3, 15, 5, 1, 13, 12, 7, 11, 4, 2, 8];
const K5: [u8; 16] = [7, 13, 14, 3, 0, 6, 9, 10, 1, 2, 8, 5, 11, 12, 4, 15];
const K4: [u8; 16] = [2, 12, 4, 1, 7, 10, 11, 6, 8, 5, 3, 15, 13, 0, 14, 9];
const K3: [u8; 16] = [12, 1, 10, 15, 9, 2, 6, 8, 0, 13, 3, 4, 14, 7, 5, 11];
const K2: [u8; 16] = [4, 11, 2, 14, 15, 0, 8, 13, 3, 12, 9, 7, 5, 10, 6, 1];
const K1: [u8; 16] = [13, 2, 8, 4, 6, 15, 11, 1, 10, 9, 3, 14, 5, 0, 12, 7];

/// GOST 28147-89 with a 256-bit key.
///
/// The eight 4-bit S-boxes are packed pairwise into byte tables at
/// construction so a round costs four byte lookups instead of eight
/// nibble lookups.
pub struct Gost {
    k: [u32; 8],
    k87: [u8; 256],
    k65: [u8; 256],
    k43: [u8; 256],
    k21: [u8; 256],
}

impl Gost {
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        if key.len() != KEY_SIZE {
            return Err(CipherError::InvalidKeyLength(key.len()));
        }

        let mut k = [0u32; 8];
        for (word, chunk) in k.iter_mut().zip(key.chunks_exact(4)) {
            *word = load_u32(chunk);
        }

        let mut cipher = Gost {
            k,
            k87: [0; 256],
            k65: [0; 256],
            k43: [0; 256],
            k21: [0; 256],
        };
        for i in 0..256 {
            let p1 = i >> 4;
            let p2 = i & 15;
            cipher.k87[i] = (K8[p1] << 4) | K7[p2];
            cipher.k65[i] = (K6[p1] << 4) | K5[p2];
            cipher.k43[i] = (K4[p1] << 4) | K3[p2];
            cipher.k21[i] = (K2[p1] << 4) | K1[p2];
        }
        Ok(cipher)
    }

    fn f(&self, x: u32) -> u32 {
        let w = u32::from(self.k87[(x >> 24) as usize & 0xff]) << 24
            | u32::from(self.k65[(x >> 16) as usize & 0xff]) << 16
            | u32::from(self.k43[(x >> 8) as usize & 0xff]) << 8
            | u32::from(self.k21[x as usize & 0xff]);
        w.rotate_left(11)
    }

    /// 32 rounds: the key words forward three times, then once reversed.
    /// Note the output swap.
    pub fn encrypt_words(&self, mut n1: u32, mut n2: u32) -> (u32, u32) {
        for _ in 0..3 {
            for j in (0..8).step_by(2) {
                n2 ^= self.f(n1.wrapping_add(self.k[j]));
                n1 ^= self.f(n2.wrapping_add(self.k[j + 1]));
            }
        }
        for j in (0..8).step_by(2).rev() {
            n2 ^= self.f(n1.wrapping_add(self.k[j + 1]));
            n1 ^= self.f(n2.wrapping_add(self.k[j]));
        }
        (n2, n1)
    }

    /// The key words once forward, then reversed three times.
    pub fn decrypt_words(&self, mut n1: u32, mut n2: u32) -> (u32, u32) {
        for j in (0..8).step_by(2) {
            n2 ^= self.f(n1.wrapping_add(self.k[j]));
            n1 ^= self.f(n2.wrapping_add(self.k[j + 1]));
        }
        for _ in 0..3 {
            for j in (0..8).step_by(2).rev() {
                n2 ^= self.f(n1.wrapping_add(self.k[j + 1]));
                n1 ^= self.f(n2.wrapping_add(self.k[j]));
            }
        }
        (n2, n1)
    }
}

impl BlockCipher for Gost {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        let (n1, n2) = self.encrypt_words(load_u32(&block[0..4]), load_u32(&block[4..8]));
        store_u32(n1, &mut block[0..4]);
        store_u32(n2, &mut block[4..8]);
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        let (n1, n2) = self.decrypt_words(load_u32(&block[0..4]), load_u32(&block[4..8]));
        store_u32(n1, &mut block[0..4]);
        store_u32(n2, &mut block[4..8]);
    }
}

impl Drop for Gost {
    fn drop(&mut self) {
        // The packed tables are key-independent constants; only the key
        // words are secret.
        self.k.zeroize();
    }
}
