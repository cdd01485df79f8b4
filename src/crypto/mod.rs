pub mod blowfish;
mod blowfish_tables;
pub mod cipher_context;
pub mod cipher_traits;
pub mod cipher_types;
pub mod gost;
pub mod utils;
pub mod way3;

pub use self::blowfish::Blowfish;
pub use self::cipher_context::CipherContext;
pub use self::cipher_traits::BlockCipher;
pub use self::cipher_types::CipherError;
pub use self::gost::Gost;
pub use self::way3::Way3;
