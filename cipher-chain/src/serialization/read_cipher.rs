use std::io;

use byteorder::ReadBytesExt;

/// Extends [`Read`] with methods for reading fixed-size address fields.
///
/// [`Read`]: https://doc.rust-lang.org/std/io/trait.Read.html
pub trait ReadCipherExt: io::Read {
    /// Convenience method to read a single version byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use cipher_chain::serialization::ReadCipherExt;
    ///
    /// use std::io::Cursor;
    /// assert_eq!(0x6f, Cursor::new(b"\x6f").read_version_byte().unwrap());
    /// ```
    #[inline]
    fn read_version_byte(&mut self) -> io::Result<u8> {
        self.read_u8()
    }

    /// Convenience method to read a `[u8; 20]`.
    #[inline]
    fn read_20_bytes(&mut self) -> io::Result<[u8; 20]> {
        let mut bytes = [0; 20];
        self.read_exact(&mut bytes)?;
        Ok(bytes)
    }
}

/// Mark all types implementing `Read` as implementing the extension.
impl<R: io::Read + ?Sized> ReadCipherExt for R {}
