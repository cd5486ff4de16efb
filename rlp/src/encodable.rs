//! Core encoding trait

use crate::{error::Error, Output};
use bytes::BytesMut;

/// Trait for types that can be written to an [Output].
///
/// Implementations describe the value as a sequence of [Output] calls: a single byte-string
/// (with [Output::write_element] or one of the scalar writers), or a list whose entries are
/// written between [Output::start_list] and [Output::end_list].
pub trait Encodable {
    /// Writes this value to `out`.
    fn rlp_append(&self, out: &mut Output) -> Result<(), Error>;

    /// Encodes this value to a `BytesMut` buffer of exactly the encoded size.
    ///
    /// (Provided method).
    fn rlp_bytes(&self) -> Result<BytesMut, Error> {
        let mut out = Output::new();
        self.rlp_append(&mut out)?;
        out.encode()
    }
}

// Writing through a reference writes the referenced value.
impl<T: Encodable + ?Sized> Encodable for &T {
    #[inline]
    fn rlp_append(&self, out: &mut Output) -> Result<(), Error> {
        (**self).rlp_append(out)
    }
}

/// Encodes `value` to a `BytesMut` buffer of exactly the encoded size.
pub fn encode<T: Encodable + ?Sized>(value: &T) -> Result<BytesMut, Error> {
    value.rlp_bytes()
}
