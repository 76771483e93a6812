use std::io;

/// Fixed-layout binary serialization.
///
/// This trait writes the exact byte layout that address encoders and
/// validators read. In other contexts, such as JSON output or internal
/// storage, it would be preferable to use Serde.
pub trait CipherSerialize: Sized {
    /// Write `self` to the given `writer` using the canonical layout.
    ///
    /// This function has a `cipher_` prefix to alert the reader that the
    /// serialization in use is the fixed binary layout, rather than some
    /// other kind of serialization.
    ///
    /// Notice that the error type is [`std::io::Error`]; this indicates that
    /// serialization MUST be infallible up to errors in the underlying writer.
    /// In other words, any type implementing `CipherSerialize` must make illegal
    /// states unrepresentable.
    fn cipher_serialize<W: io::Write>(&self, writer: W) -> Result<(), io::Error>;

    /// Helper function to construct a vec to serialize the current struct into
    fn cipher_serialize_to_vec(&self) -> Result<Vec<u8>, io::Error> {
        let mut data = Vec::new();
        self.cipher_serialize(&mut data)?;
        Ok(data)
    }
}
