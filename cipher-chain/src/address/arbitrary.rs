use proptest::prelude::*;

use crate::ripemd160::Ripemd160;

use super::BitcoinAddress;

impl Arbitrary for BitcoinAddress {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (any::<u8>(), any::<Ripemd160>())
            .prop_map(|(version, hash)| BitcoinAddress::new(version, hash))
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

impl BitcoinAddress {
    /// Returns a strategy that produces addresses with the given `version`
    /// byte and an arbitrary hash.
    pub fn version_strategy(version: u8) -> BoxedStrategy<Self> {
        any::<Ripemd160>()
            .prop_map(move |hash| BitcoinAddress::new(version, hash))
            .boxed()
    }
}
