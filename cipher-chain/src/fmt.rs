//! Format wrappers for address types

use std::fmt;

/// Wrapper to override `Debug`, redirecting it to a quoted lowercase hex
/// string of the wrapped bytes.
///
/// Used for opaque hash fields, so debug output stays on one line.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct HexDebug<T: AsRef<[u8]>>(pub T);

impl<T: AsRef<[u8]>> fmt::Debug for HexDebug<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&hex::encode(self.0.as_ref()), f)
    }
}
