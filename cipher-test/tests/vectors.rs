//! Checks that the shared test vectors are usable from other crates.

// Standard lints
#![warn(missing_docs)]
#![allow(clippy::try_err)]
#![forbid(unsafe_code)]

use std::collections::HashSet;

use cipher_test::{prelude::*, vectors::ADDRESSES};

#[test]
fn init_can_be_called_repeatedly() {
    cipher_test::init();
    cipher_test::init();
}

#[test]
fn address_vectors_are_distinct() -> Result<()> {
    cipher_test::init();

    let distinct: HashSet<_> = ADDRESSES.iter().collect();
    assert_eq!(distinct.len(), ADDRESSES.len());

    let null = ADDRESSES
        .iter()
        .filter(|bytes| bytes.iter().all(|byte| *byte == 0))
        .count();
    assert_eq!(null, 1, "exactly one vector is the null address");

    Ok(())
}
