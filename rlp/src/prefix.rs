//! Length prefixes of byte-strings and lists
//!
//! Every RLP item is preceded by a header describing its type and payload length:
//! - A single byte below `0x80` is its own encoding.
//! - A byte-string of fewer than 56 bytes is prefixed with `0x80 + len`.
//! - A longer byte-string is prefixed with `0xB7 + len_of_len`, followed by `len` in
//!   big-endian with no leading zeros.
//! - A list whose payload is fewer than 56 bytes is prefixed with `0xC0 + len`.
//! - A longer list is prefixed with `0xF7 + len_of_len`, followed by `len`.
//!
//! The functions in this module are stateless. Sizes are always computed with the same
//! rules used by the writers, so `write_element` produces exactly `element_size` bytes
//! (and `write_list_header` exactly `list_size(payload) - payload` bytes).

use bytes::BufMut;

/// Prefix of the empty byte-string (and base of short byte-string prefixes).
pub const EMPTY_STRING_CODE: u8 = 0x80;

/// Prefix of the empty list (and base of short list prefixes).
pub const EMPTY_LIST_CODE: u8 = 0xC0;

/// Payloads shorter than this are described by the prefix byte alone.
pub const SHORT_THRESHOLD: usize = 56;

/// Base of long byte-string prefixes.
pub const LONG_STRING_OFFSET: u8 = 0xB7;

/// Base of long list prefixes.
pub const LONG_LIST_OFFSET: u8 = 0xF7;

const BITS_PER_BYTE: u32 = 8;

/// Returns the number of bytes needed to represent `len` in big-endian with no leading zeros.
///
/// Zero needs no bytes.
#[inline]
pub fn length_of_length(len: usize) -> usize {
    let data_bits = usize::BITS - len.leading_zeros();
    data_bits.div_ceil(BITS_PER_BYTE) as usize
}

/// Returns the size of the header preceding a payload of `len` bytes.
#[inline]
fn header_size(len: usize) -> usize {
    if len < SHORT_THRESHOLD {
        1
    } else {
        1 + length_of_length(len)
    }
}

/// Returns true if `value` is a single byte that encodes as itself.
#[inline]
fn is_single_byte(value: &[u8]) -> bool {
    value.len() == 1 && value[0] < EMPTY_STRING_CODE
}

/// Returns the full encoded size (header and payload) of the byte-string `value`.
#[inline]
pub fn element_size(value: &[u8]) -> usize {
    if is_single_byte(value) {
        return 1;
    }
    header_size(value.len()) + value.len()
}

/// Returns the full encoded size (header and payload) of a list whose payload is
/// `payload` bytes long.
#[inline]
pub fn list_size(payload: usize) -> usize {
    header_size(payload) + payload
}

/// Writes `len` in big-endian with no leading zeros.
#[inline]
fn write_length(len: usize, buf: &mut impl BufMut) {
    let bytes = len.to_be_bytes();
    buf.put_slice(&bytes[bytes.len() - length_of_length(len)..]);
}

/// Writes a header with the given short and long bases.
#[inline]
fn write_header(len: usize, short: u8, long: u8, buf: &mut impl BufMut) {
    if len < SHORT_THRESHOLD {
        // `len` is below 56, so the addition cannot overflow.
        buf.put_u8(short + len as u8);
        return;
    }
    // `length_of_length` is at most 8 on 64-bit targets.
    buf.put_u8(long + length_of_length(len) as u8);
    write_length(len, buf);
}

/// Writes the byte-string `value` with its prefix.
///
/// Writes exactly [element_size] bytes. Panics if `buf` doesn't have enough capacity.
#[inline]
pub fn write_element(value: &[u8], buf: &mut impl BufMut) {
    if !is_single_byte(value) {
        write_header(value.len(), EMPTY_STRING_CODE, LONG_STRING_OFFSET, buf);
    }
    buf.put_slice(value);
}

/// Writes the header of a list whose payload is `payload` bytes long.
///
/// The payload itself is not written. Panics if `buf` doesn't have enough capacity.
#[inline]
pub fn write_list_header(payload: usize, buf: &mut impl BufMut) {
    write_header(payload, EMPTY_LIST_CODE, LONG_LIST_OFFSET, buf);
}

/// Returns the size of the header [write_list_header] writes for `payload`.
#[inline]
pub fn list_header_size(payload: usize) -> usize {
    header_size(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn element(value: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        write_element(value, &mut buf);
        assert_eq!(buf.len(), element_size(value));
        buf
    }

    fn header(payload: usize) -> Vec<u8> {
        let mut buf = Vec::new();
        write_list_header(payload, &mut buf);
        assert_eq!(buf.len() + payload, list_size(payload));
        assert_eq!(buf.len(), list_header_size(payload));
        buf
    }

    #[test_case(0, 0; "zero")]
    #[test_case(1, 1; "one")]
    #[test_case(0xFF, 1; "max one byte")]
    #[test_case(0x100, 2; "min two bytes")]
    #[test_case(0xFFFF, 2; "max two bytes")]
    #[test_case(0x10000, 3; "min three bytes")]
    #[test_case(0xFFFF_FFFF, 4; "max four bytes")]
    fn test_length_of_length(len: usize, expected: usize) {
        assert_eq!(length_of_length(len), expected);
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(element(&[0x00]), vec![0x00]);
        assert_eq!(element(&[0x0F]), vec![0x0F]);
        assert_eq!(element(&[0x7F]), vec![0x7F]);
        assert_eq!(element(&[0x80]), vec![0x81, 0x80]);
        assert_eq!(element(&[0xFF]), vec![0x81, 0xFF]);
    }

    #[test]
    fn test_short_string() {
        assert_eq!(element(&[]), vec![EMPTY_STRING_CODE]);
        assert_eq!(element(b"dog"), vec![0x83, b'd', b'o', b'g']);
        assert_eq!(element(&[0xAA, 0xBB]), vec![0x82, 0xAA, 0xBB]);

        let value = [0x11; 55];
        let encoded = element(&value);
        assert_eq!(encoded[0], 0x80 + 55);
        assert_eq!(&encoded[1..], &value[..]);
    }

    #[test]
    fn test_long_string() {
        let value = [0x22; 56];
        let encoded = element(&value);
        assert_eq!(&encoded[..2], &[0xB8, 56]);
        assert_eq!(&encoded[2..], &value[..]);

        let value = vec![0x33; 1024];
        let encoded = element(&value);
        assert_eq!(&encoded[..3], &[0xB9, 0x04, 0x00]);
        assert_eq!(encoded.len(), 3 + 1024);

        let value = vec![0x44; 0x1_0000];
        let encoded = element(&value);
        assert_eq!(&encoded[..4], &[0xBA, 0x01, 0x00, 0x00]);
    }

    #[test_case(0, &[0xC0]; "empty")]
    #[test_case(2, &[0xC2]; "two")]
    #[test_case(55, &[0xF7]; "max short")]
    #[test_case(56, &[0xF8, 56]; "min long")]
    #[test_case(0xFF, &[0xF8, 0xFF]; "max one length byte")]
    #[test_case(0x100, &[0xF9, 0x01, 0x00]; "min two length bytes")]
    fn test_list_header(payload: usize, expected: &[u8]) {
        assert_eq!(header(payload), expected);
    }

    #[test]
    fn test_write_into_slice() {
        let mut dst = [0u8; 5];
        let mut buf = &mut dst[..];
        write_list_header(3, &mut buf);
        write_element(&[0x83], &mut buf);
        write_element(&[0x01], &mut buf);
        assert_eq!(buf.len(), 1);
        assert_eq!(&dst[..4], &[0xC3, 0x81, 0x83, 0x01]);
    }
}
