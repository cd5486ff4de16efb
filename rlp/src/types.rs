//! Implementations of [crate::Encodable] for common types
//!
//! - Unsigned integers and `bool` are scalars: big-endian byte-strings with leading zero bytes
//!   stripped (zero is the empty byte-string).
//! - Byte containers (`[u8]`, `Vec<u8>`, `Bytes`, `str`, ...) are byte-strings.
//! - Collections, tuples, and `Option` are lists.
//! - IP addresses are byte-strings of their octets.
//!
//! `u8` does not implement [crate::Encodable], so that byte slices are never mistaken for
//! lists. Use [crate::Output::write_u8] to write a single-byte scalar.

pub mod bytes;
pub mod net;
pub mod primitives;
pub mod tuple;
pub mod vec;
