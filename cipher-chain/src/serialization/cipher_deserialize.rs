use std::io;

use super::SerializationError;

/// Fixed-layout binary deserialization.
///
/// The counterpart of [`CipherSerialize`](super::CipherSerialize): reads the
/// exact byte layout written by `cipher_serialize`.
pub trait CipherDeserialize: Sized {
    /// Try to read `self` from the given `reader`.
    ///
    /// This function has a `cipher_` prefix to alert the reader that the
    /// serialization in use is the fixed binary layout, rather than some
    /// other kind of serialization.
    fn cipher_deserialize<R: io::Read>(reader: R) -> Result<Self, SerializationError>;
}

/// Helper for deserializing more succinctly via type inference
pub trait CipherDeserializeInto {
    /// Deserialize based on type inference
    fn cipher_deserialize_into<T>(self) -> Result<T, SerializationError>
    where
        T: CipherDeserialize;
}

impl<R: io::Read> CipherDeserializeInto for R {
    fn cipher_deserialize_into<T>(self) -> Result<T, SerializationError>
    where
        T: CipherDeserialize,
    {
        T::cipher_deserialize(self)
    }
}
