/// Capability set shared by the block primitives.
///
/// A cipher is immutable once constructed, so a single instance may be
/// used from several threads at once as long as the buffers are disjoint.
/// Blocks are transformed in place; `block.len()` must equal
/// `block_size()`. All implementations view a block as little-endian
/// 32-bit words.
pub trait BlockCipher: Send + Sync {
    fn block_size(&self) -> usize;
    fn encrypt_block(&self, block: &mut [u8]);
    fn decrypt_block(&self, block: &mut [u8]);
}
