//! The 160-bit hash carried by an address record.

use std::{fmt, io, str::FromStr};

use hex::FromHex;

use crate::{
    fmt::HexDebug,
    serialization::{CipherDeserialize, CipherSerialize, ReadCipherExt, SerializationError},
};

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;

#[cfg(test)]
mod tests;

/// A 20-byte RIPEMD-160 digest, as produced by hashing a public key or script.
///
/// The bytes are opaque here: nothing in this crate computes or checks them.
/// `Display` and `FromStr` use 40 lowercase hex characters, which is a
/// diagnostic format, not an address encoding.
#[derive(
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    serde_with::SerializeDisplay,
    serde_with::DeserializeFromStr,
)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub struct Ripemd160(pub [u8; 20]);

impl Ripemd160 {
    /// The size of the digest in bytes.
    pub const SIZE: usize = 20;

    /// Returns `true` if every byte of the digest is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0; Self::SIZE]
    }
}

impl fmt::Debug for Ripemd160 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Ripemd160").field(&HexDebug(self.0)).finish()
    }
}

impl fmt::Display for Ripemd160 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for Ripemd160 {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <[u8; 20]>::from_hex(s)
            .map(Ripemd160)
            .map_err(|_| SerializationError::Parse("hex decoding error"))
    }
}

impl AsRef<[u8]> for Ripemd160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 20]> for Ripemd160 {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<Ripemd160> for [u8; 20] {
    fn from(hash: Ripemd160) -> Self {
        hash.0
    }
}

impl TryFrom<&[u8]> for Ripemd160 {
    type Error = SerializationError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 20] = bytes.try_into().map_err(|_| {
            tracing::debug!(len = bytes.len(), "rejected hash with unexpected length");
            SerializationError::Parse("a RIPEMD-160 hash must be exactly 20 bytes")
        })?;

        Ok(Self(bytes))
    }
}

impl CipherSerialize for Ripemd160 {
    fn cipher_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_all(&self.0)
    }
}

impl CipherDeserialize for Ripemd160 {
    fn cipher_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        Ok(Ripemd160(reader.read_20_bytes()?))
    }
}
