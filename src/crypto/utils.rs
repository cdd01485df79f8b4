use rand::rngs::OsRng;
use rand::TryRngCore;
use zeroize::Zeroize;

/// Fills the whole buffer from the OS entropy source, retrying until
/// every byte is written.
pub fn random_bytes(buf: &mut [u8]) {
    let mut rng = OsRng;
    while rng.try_fill_bytes(buf).is_err() {}
}

/// Overwrites the buffer with a random fill, then 0x55, 0xAA, 0xFF, and
/// finishes with a zeroizing pass the compiler is not allowed to elide.
pub fn clear_bytes(buf: &mut [u8]) {
    random_bytes(buf);
    for pattern in [0x55u8, 0xaa, 0xff] {
        buf.iter_mut().for_each(|byte| *byte = pattern);
    }
    buf.zeroize();
}

/// Locates bit padding: scanning from the end, zero bytes are skipped and
/// the first non-zero byte must be 0x80 for padding to be present. Returns
/// the index of that 0x80 byte, which is the unpadded data length.
///
/// This is a heuristic. Data that legitimately ends in 0x80 followed by
/// zeros is indistinguishable from padding.
pub fn padding_index(buf: &[u8]) -> Option<usize> {
    for (i, &byte) in buf.iter().enumerate().rev() {
        if byte != 0 {
            return if byte == 0x80 { Some(i) } else { None };
        }
    }
    None
}

/// Plain byte equality. Not constant-time; do not use for comparing
/// authentication tags.
pub fn compare_bytes(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

/// Appends bit padding (a single 0x80 byte then zeros) up to the next block
/// boundary. Data already on a boundary is returned unpadded.
pub fn apply_padding(data: &[u8], block_size: usize) -> Vec<u8> {
    let residue = data.len() % block_size;
    let mut padded = data.to_vec();
    if residue != 0 {
        padded.push(0x80);
        padded.resize(data.len() + block_size - residue, 0);
    }
    padded
}

pub fn xor_block(dst: &mut [u8], src: &[u8]) {
    dst.iter_mut().zip(src.iter()).for_each(|(d, s)| *d ^= s);
}

pub fn load_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes(bytes[..4].try_into().unwrap())
}

pub fn store_u32(word: u32, bytes: &mut [u8]) {
    bytes[..4].copy_from_slice(&word.to_le_bytes());
}
