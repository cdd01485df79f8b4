use zeroize::Zeroize;

use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::cipher_types::CipherError;
use crate::crypto::utils::{load_u32, store_u32};

pub const BLOCK_SIZE: usize = 12;
pub const KEY_SIZE: usize = 12;
pub const ROUND_COUNT: usize = 11;

// Published round constants; one table per direction, indices 0..=ROUND_COUNT.
const ERCON: [u32; 12] = [
    0x0b0b, 0x1616, 0x2c2c, 0x5858, 0xb0b0, 0x7171, 0xe2e2, 0xd5d5, 0xbbbb, 0x6767, 0xcece, 0x8d8d,
];
const DRCON: [u32; 12] = [
    0xb1b1, 0x7373, 0xe6e6, 0xdddd, 0xabab, 0x4747, 0x8e8e, 0x0d0d, 0x1a1a, 0x3434, 0x6868, 0xd0d0,
];

/// The non-linear layer.
pub fn gamma(a: [u32; 3]) -> [u32; 3] {
    [
        !a[0] ^ (!a[1] & a[2]),
        !a[1] ^ (!a[2] & a[0]),
        !a[2] ^ (!a[0] & a[1]),
    ]
}

/// Bit reversal of the 96-bit state: the bit order of the concatenation is
/// reversed, which also swaps the outer words.
pub fn mu(a: [u32; 3]) -> [u32; 3] {
    let [mut a0, mut a1, mut a2] = a;
    let mut b = [0u32; 3];
    for _ in 0..32 {
        b[0] = (b[0] << 1) | (a2 & 1);
        b[1] = (b[1] << 1) | (a1 & 1);
        b[2] = (b[2] << 1) | (a0 & 1);
        a0 >>= 1;
        a1 >>= 1;
        a2 >>= 1;
    }
    b
}

/// The linear diffusion layer.
pub fn theta(a: [u32; 3]) -> [u32; 3] {
    let [a0, a1, a2] = a;
    [
        a0 ^ (a0 >> 16)
            ^ (a1 << 16)
            ^ (a1 >> 16)
            ^ (a2 << 16)
            ^ (a1 >> 24)
            ^ (a2 << 8)
            ^ (a2 >> 8)
            ^ (a0 << 24)
            ^ (a2 >> 16)
            ^ (a0 << 16)
            ^ (a2 >> 24)
            ^ (a0 << 8),
        a1 ^ (a1 >> 16)
            ^ (a2 << 16)
            ^ (a2 >> 16)
            ^ (a0 << 16)
            ^ (a2 >> 24)
            ^ (a0 << 8)
            ^ (a0 >> 8)
            ^ (a1 << 24)
            ^ (a0 >> 16)
            ^ (a1 << 16)
            ^ (a0 >> 24)
            ^ (a1 << 8),
        a2 ^ (a2 >> 16)
            ^ (a0 << 16)
            ^ (a0 >> 16)
            ^ (a1 << 16)
            ^ (a0 >> 24)
            ^ (a1 << 8)
            ^ (a1 >> 8)
            ^ (a2 << 24)
            ^ (a1 >> 16)
            ^ (a2 << 16)
            ^ (a1 >> 24)
            ^ (a2 << 8),
    ]
}

pub fn pi_1(a: [u32; 3]) -> [u32; 3] {
    [a[0].rotate_left(22), a[1], a[2].rotate_left(1)]
}

pub fn pi_2(a: [u32; 3]) -> [u32; 3] {
    [a[0].rotate_left(1), a[1], a[2].rotate_left(22)]
}

/// One round: `pi_2 . gamma . pi_1 . theta`.
pub fn rho(a: [u32; 3]) -> [u32; 3] {
    pi_2(gamma(pi_1(theta(a))))
}

/// 3-Way with a 96-bit block and a 96-bit key.
///
/// Decryption reuses the encryption structure on `mu(theta(k))` with the
/// inverse round constants, sandwiched between two `mu` applications.
pub struct Way3 {
    k: [u32; 3],
    ki: [u32; 3],
}

impl Way3 {
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        if key.len() != KEY_SIZE {
            return Err(CipherError::InvalidKeyLength(key.len()));
        }
        let mut k = [0u32; 3];
        for (word, chunk) in k.iter_mut().zip(key.chunks_exact(4)) {
            *word = load_u32(chunk);
        }
        Ok(Way3 { k, ki: mu(theta(k)) })
    }

    pub fn encrypt_words(&self, mut a: [u32; 3]) -> [u32; 3] {
        for i in 0..ROUND_COUNT {
            a[0] ^= self.k[0] ^ (ERCON[i] << 16);
            a[1] ^= self.k[1];
            a[2] ^= self.k[2] ^ ERCON[i];
            a = rho(a);
        }
        a[0] ^= self.k[0] ^ (ERCON[ROUND_COUNT] << 16);
        a[1] ^= self.k[1];
        a[2] ^= self.k[2] ^ ERCON[ROUND_COUNT];
        theta(a)
    }

    pub fn decrypt_words(&self, a: [u32; 3]) -> [u32; 3] {
        let mut a = mu(a);
        for i in 0..ROUND_COUNT {
            a[0] ^= self.ki[0] ^ (DRCON[i] << 16);
            a[1] ^= self.ki[1];
            a[2] ^= self.ki[2] ^ DRCON[i];
            a = rho(a);
        }
        a[0] ^= self.ki[0] ^ (DRCON[ROUND_COUNT] << 16);
        a[1] ^= self.ki[1];
        a[2] ^= self.ki[2] ^ DRCON[ROUND_COUNT];
        mu(theta(a))
    }
}

impl BlockCipher for Way3 {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) {
        let a = self.encrypt_words([
            load_u32(&block[0..4]),
            load_u32(&block[4..8]),
            load_u32(&block[8..12]),
        ]);
        store_u32(a[0], &mut block[0..4]);
        store_u32(a[1], &mut block[4..8]);
        store_u32(a[2], &mut block[8..12]);
    }

    fn decrypt_block(&self, block: &mut [u8]) {
        let a = self.decrypt_words([
            load_u32(&block[0..4]),
            load_u32(&block[4..8]),
            load_u32(&block[8..12]),
        ]);
        store_u32(a[0], &mut block[0..4]);
        store_u32(a[1], &mut block[4..8]);
        store_u32(a[2], &mut block[8..12]);
    }
}

impl Drop for Way3 {
    fn drop(&mut self) {
        self.k.zeroize();
        self.ki.zeroize();
    }
}
