use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    #[error("invalid key length: {0} bytes")]
    InvalidKeyLength(usize),
    #[error("invalid IV length: expected {expected} bytes, got {got}")]
    InvalidIvLength { expected: usize, got: usize },
    #[error("ciphertext length is not a multiple of the block size")]
    InvalidCiphertextLength,
}
