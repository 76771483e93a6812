//! Fixed test vectors for the hash value.

use std::io::Cursor;

use cipher_test::prelude::*;

use crate::serialization::{CipherDeserializeInto, CipherSerialize, SerializationError};

use super::Ripemd160;

const GENESIS_HASH_HEX: &str = "62e907b15cbf27d5425399ebf6f0fb50ebb88f18";

#[test]
fn hex_display_and_parse() -> Result<()> {
    cipher_test::init();

    let hash: Ripemd160 = GENESIS_HASH_HEX.parse()?;

    assert_eq!(hash.to_string(), GENESIS_HASH_HEX);
    assert_eq!(hash.0[0], 0x62);
    assert_eq!(hash.0[19], 0x18);

    Ok(())
}

#[test]
fn debug() -> Result<()> {
    cipher_test::init();

    let hash: Ripemd160 = GENESIS_HASH_HEX.parse()?;

    assert_eq!(
        format!("{hash:?}"),
        "Ripemd160(\"62e907b15cbf27d5425399ebf6f0fb50ebb88f18\")"
    );

    Ok(())
}

#[test]
fn parse_rejects_bad_hex() {
    cipher_test::init();

    // one byte short
    let short = &GENESIS_HASH_HEX[2..];
    assert!(matches!(
        short.parse::<Ripemd160>(),
        Err(SerializationError::Parse(_))
    ));

    // one byte long
    let long = format!("{GENESIS_HASH_HEX}00");
    assert!(long.parse::<Ripemd160>().is_err());

    // not hex at all
    assert!("zz".repeat(20).parse::<Ripemd160>().is_err());
}

#[test]
fn slice_length_is_checked() {
    cipher_test::init();

    assert!(Ripemd160::try_from(&[7u8; 20][..]).is_ok());
    assert!(Ripemd160::try_from(&[7u8; 19][..]).is_err());
    assert!(Ripemd160::try_from(&[7u8; 21][..]).is_err());
    assert!(Ripemd160::try_from(&[0u8; 0][..]).is_err());
}

#[test]
fn binary_layout_is_the_raw_bytes() -> Result<()> {
    cipher_test::init();

    let hash = Ripemd160::from([0xab; 20]);
    let bytes = hash.cipher_serialize_to_vec()?;

    assert_eq!(bytes, vec![0xab; 20]);

    let parsed: Ripemd160 = Cursor::new(&bytes).cipher_deserialize_into()?;
    assert_eq!(parsed, hash);

    let truncated: Result<Ripemd160, _> = Cursor::new(&bytes[..19]).cipher_deserialize_into();
    assert!(matches!(truncated, Err(SerializationError::Io(_))));

    Ok(())
}

#[test]
fn serde_uses_hex_strings() -> Result<()> {
    cipher_test::init();

    let hash: Ripemd160 = GENESIS_HASH_HEX.parse()?;
    let json = serde_json::to_string(&hash)?;

    assert_eq!(json, format!("\"{GENESIS_HASH_HEX}\""));
    assert_eq!(serde_json::from_str::<Ripemd160>(&json)?, hash);

    Ok(())
}

#[test]
fn zero_hash() {
    cipher_test::init();

    assert!(Ripemd160::default().is_zero());

    let mut bytes = [0; 20];
    bytes[19] = 1;
    assert!(!Ripemd160::from(bytes).is_zero());
}
