//! Raw 21-byte address records, as `version || hash` hex strings.

use hex::FromHex;
use once_cell::sync::Lazy;

/// The mainnet P2PKH address paid by the Bitcoin genesis coinbase,
/// `1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa`.
pub const GENESIS_COINBASE_ADDRESS_HEX: &str = "0062e907b15cbf27d5425399ebf6f0fb50ebb88f18";

/// Version `0x00` with hash bytes `0x01, 0x02, ..., 0x14`.
pub const SEQUENTIAL_HASH_ADDRESS_HEX: &str = "000102030405060708090a0b0c0d0e0f1011121314";

/// Version `0x6f` (testnet P2PKH) with an all-zero hash.
pub const TESTNET_ZERO_HASH_ADDRESS_HEX: &str = "6f0000000000000000000000000000000000000000";

/// The null address: version zero and an all-zero hash.
pub const NULL_ADDRESS_HEX: &str = "000000000000000000000000000000000000000000";

/// Version `0xff` with an all-`0xff` hash.
pub const SATURATED_ADDRESS_HEX: &str = "ffffffffffffffffffffffffffffffffffffffffff";

/// Every raw address vector, decoded from hex.
pub static ADDRESSES: Lazy<Vec<[u8; 21]>> = Lazy::new(|| {
    [
        GENESIS_COINBASE_ADDRESS_HEX,
        SEQUENTIAL_HASH_ADDRESS_HEX,
        TESTNET_ZERO_HASH_ADDRESS_HEX,
        NULL_ADDRESS_HEX,
        SATURATED_ADDRESS_HEX,
    ]
    .iter()
    .map(|hex| <[u8; 21]>::from_hex(hex).expect("address vectors are valid hex"))
    .collect()
});
