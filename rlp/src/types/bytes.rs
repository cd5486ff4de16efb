//! Encodable implementations for byte containers.
//!
//! Every container is written as a single byte-string. Borrowed slices are copied once, when
//! they are written; [Bytes] values are shared without copying.

use crate::{Encodable, Error, Output};
use bytes::{Bytes, BytesMut};

impl Encodable for [u8] {
    #[inline]
    fn rlp_append(&self, out: &mut Output) -> Result<(), Error> {
        out.write_element(Bytes::copy_from_slice(self))
    }
}

impl<const N: usize> Encodable for [u8; N] {
    #[inline]
    fn rlp_append(&self, out: &mut Output) -> Result<(), Error> {
        self[..].rlp_append(out)
    }
}

impl Encodable for Vec<u8> {
    #[inline]
    fn rlp_append(&self, out: &mut Output) -> Result<(), Error> {
        self[..].rlp_append(out)
    }
}

impl Encodable for Bytes {
    #[inline]
    fn rlp_append(&self, out: &mut Output) -> Result<(), Error> {
        out.write_element(self.clone())
    }
}

impl Encodable for BytesMut {
    #[inline]
    fn rlp_append(&self, out: &mut Output) -> Result<(), Error> {
        self[..].rlp_append(out)
    }
}

impl Encodable for str {
    #[inline]
    fn rlp_append(&self, out: &mut Output) -> Result<(), Error> {
        self.as_bytes().rlp_append(out)
    }
}

impl Encodable for String {
    #[inline]
    fn rlp_append(&self, out: &mut Output) -> Result<(), Error> {
        self.as_str().rlp_append(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode;

    #[test]
    fn test_strings() {
        let expected = [0x83, b'd', b'o', b'g'];
        assert_eq!(encode("dog").unwrap().as_ref(), &expected[..]);
        assert_eq!(encode(&String::from("dog")).unwrap().as_ref(), &expected[..]);
        assert_eq!(encode(b"dog").unwrap().as_ref(), &expected[..]);
        assert_eq!(encode(&b"dog"[..]).unwrap().as_ref(), &expected[..]);
        assert_eq!(encode(&b"dog".to_vec()).unwrap().as_ref(), &expected[..]);
        assert_eq!(encode(&Bytes::from_static(b"dog")).unwrap().as_ref(), &expected[..]);
        assert_eq!(encode(&BytesMut::from(&b"dog"[..])).unwrap().as_ref(), &expected[..]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode("").unwrap().as_ref(), &[0x80]);
        assert_eq!(encode(&Vec::<u8>::new()).unwrap().as_ref(), &[0x80]);
        assert_eq!(encode(&Bytes::new()).unwrap().as_ref(), &[0x80]);
    }

    #[test]
    fn test_single_bytes() {
        assert_eq!(encode(&[0x00u8]).unwrap().as_ref(), &[0x00]);
        assert_eq!(encode(&[0x7Fu8]).unwrap().as_ref(), &[0x7F]);
        assert_eq!(encode(&[0x80u8]).unwrap().as_ref(), &[0x81, 0x80]);
    }

    #[test]
    fn test_long_string() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipisicing elit";
        assert_eq!(text.len(), 56);
        let encoded = encode(text).unwrap();
        assert_eq!(&encoded[..2], &[0xB8, 0x38]);
        assert_eq!(&encoded[2..], text.as_bytes());
    }
}
