//! Address record types: a one-byte version discriminator and a 160-bit hash.
//!
//! Producing these records (hashing public keys) and consuming them
//! (Base58Check or Bech32 encoding, network validation) is left to the
//! surrounding wallet or node code. This crate only guarantees that the two
//! fields are stored and transported unchanged.
// Standard lints
#![warn(missing_docs)]
#![allow(clippy::try_err)]
#![forbid(unsafe_code)]

pub mod address;
pub mod fmt;
pub mod ripemd160;
pub mod serialization;

pub use address::BitcoinAddress;
pub use ripemd160::Ripemd160;
