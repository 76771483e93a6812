//! Address records: a version byte plus a 160-bit hash.

use std::{fmt, io};

use serde::{Deserialize, Serialize};
use static_assertions::{assert_eq_size, const_assert_eq};

use crate::{
    fmt::HexDebug,
    ripemd160::Ripemd160,
    serialization::{CipherDeserialize, CipherSerialize, ReadCipherExt, SerializationError},
};

#[cfg(any(test, feature = "proptest-impl"))]
mod arbitrary;

/// A Bitcoin-style address record.
///
/// In Bitcoin a single byte is used for the version field identifying the
/// address type and network, for example `0x00` for mainnet P2PKH and `0x6f`
/// for testnet P2PKH. Which version bytes are valid is decided by the code
/// that encodes or validates addresses, not by this type: every `u8` is
/// accepted and preserved unchanged.
///
/// The hash is usually `RIPEMD-160(SHA-256(public key))`, but it is treated
/// as opaque bytes here.
///
/// # Layout
///
/// The type is `#[repr(C)]` and both fields are byte-aligned, so it occupies
/// exactly 21 bytes with no padding. The binary form written by
/// [`CipherSerialize`] is always `version || hash`, independent of the
/// in-memory layout.
///
/// <https://en.bitcoin.it/wiki/Technical_background_of_version_1_Bitcoin_addresses>
#[derive(
    Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[repr(C)]
pub struct BitcoinAddress {
    /// Network and address type discriminator.
    version: u8,

    /// 20 bytes specifying a public key or script hash.
    hash: Ripemd160,
}

assert_eq_size!(BitcoinAddress, [u8; BitcoinAddress::SERIALIZED_SIZE]);
const_assert_eq!(std::mem::align_of::<BitcoinAddress>(), 1);

impl BitcoinAddress {
    /// The size of the binary layout: one version byte and a 20 byte hash.
    pub const SERIALIZED_SIZE: usize = 1 + Ripemd160::SIZE;

    /// Create an address record from a version byte and a hash.
    pub fn new(version: u8, hash: impl Into<Ripemd160>) -> Self {
        Self {
            version,
            hash: hash.into(),
        }
    }

    /// Returns the version byte.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Returns the hash.
    pub fn hash(&self) -> Ripemd160 {
        self.hash
    }

    /// Returns the raw hash bytes.
    pub fn hash_bytes(&self) -> [u8; 20] {
        self.hash.0
    }

    /// Returns `true` if this is the null address: version zero and an
    /// all-zero hash.
    ///
    /// The null address is the [`Default`], and is commonly used as a
    /// placeholder where no address has been set.
    pub fn is_null(&self) -> bool {
        self.version == 0 && self.hash.is_zero()
    }

    /// Returns the binary layout of this address, `version || hash`.
    pub fn to_bytes(&self) -> [u8; Self::SERIALIZED_SIZE] {
        let mut bytes = [0; Self::SERIALIZED_SIZE];
        bytes[0] = self.version;
        bytes[1..].copy_from_slice(&self.hash.0);
        bytes
    }

    /// Create an address from its binary layout, `version || hash`.
    pub fn from_bytes(bytes: [u8; Self::SERIALIZED_SIZE]) -> Self {
        let mut hash = [0; Ripemd160::SIZE];
        hash.copy_from_slice(&bytes[1..]);

        Self::new(bytes[0], hash)
    }
}

impl fmt::Debug for BitcoinAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BitcoinAddress")
            .field("version", &format_args!("{:#04x}", self.version))
            .field("hash", &HexDebug(self.hash.0))
            .finish()
    }
}

impl From<BitcoinAddress> for [u8; BitcoinAddress::SERIALIZED_SIZE] {
    fn from(address: BitcoinAddress) -> Self {
        address.to_bytes()
    }
}

impl From<[u8; BitcoinAddress::SERIALIZED_SIZE]> for BitcoinAddress {
    fn from(bytes: [u8; BitcoinAddress::SERIALIZED_SIZE]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for BitcoinAddress {
    type Error = SerializationError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; Self::SERIALIZED_SIZE] = bytes.try_into().map_err(|_| {
            tracing::debug!(len = bytes.len(), "rejected address with unexpected length");
            SerializationError::Parse("an address must be exactly 21 bytes")
        })?;

        Ok(Self::from_bytes(bytes))
    }
}

impl CipherSerialize for BitcoinAddress {
    fn cipher_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_all(&[self.version])?;
        self.hash.cipher_serialize(&mut writer)?;

        Ok(())
    }
}

impl CipherDeserialize for BitcoinAddress {
    fn cipher_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        let version = reader.read_version_byte()?;
        let hash = Ripemd160::cipher_deserialize(&mut reader)?;

        Ok(Self { version, hash })
    }
}
