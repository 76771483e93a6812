//! Fixed-layout binary serialization.
//!
//! `CipherSerialize` and `CipherDeserialize` are analogs of the Serde
//! `Serialize` and `Deserialize` traits, but intended for the exact byte
//! layouts other address code depends on. `ReadCipherExt` extends `io::Read`
//! with helpers for reading fixed-size fields.

mod cipher_deserialize;
mod cipher_serialize;
mod error;
mod read_cipher;


pub use cipher_deserialize::{CipherDeserialize, CipherDeserializeInto};
pub use cipher_serialize::CipherSerialize;
pub use error::SerializationError;
pub use read_cipher::ReadCipherExt;
