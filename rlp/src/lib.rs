//! Encode nested byte-strings and lists with Recursive Length Prefix (RLP).
//!
//! # Overview
//!
//! RLP encodes arbitrarily nested sequences of byte-strings and lists into a single flat
//! buffer. Every item is preceded by a header describing its type and length, so the encoding
//! is self-delimiting and needs no separators.
//!
//! The center of this crate is [Output], a builder that lets a caller describe a tree of
//! values through a sequence of write calls (in pre-order) and then writes the encoding into an
//! exactly-sized buffer in a single linear pass. Nesting is unbounded and never requires
//! recursion: the size of every list is computed while the tree is described, before any
//! header is written.
//!
//! # Supported Types
//!
//! Natively supports (via [Encodable]):
//! - Scalars: `u16`, `u32`, `u64`, `u128`, `usize`, `bool`
//! - Byte-strings: `[u8]`, `[u8; N]`, `Vec<u8>`, `Bytes`, `BytesMut`, `str`, `String`
//! - Lists: `Vec<T>`, `[T]`, `Option<T>`, and tuples
//! - Network addresses: `Ipv4Addr`, `Ipv6Addr`, `IpAddr`
//!
//! User-defined types can be encoded by implementing the [Encodable] trait.
//!
//! # Example (Builder)
//!
//! ```
//! use tessera_rlp::Output;
//!
//! // [[], [0x05]]
//! let mut output = Output::new();
//! output.start_list().unwrap();
//! output.write_empty_list().unwrap();
//! output.start_list().unwrap();
//! output.write_u8(5).unwrap();
//! output.end_list().unwrap();
//! output.end_list().unwrap();
//!
//! let encoded = output.encode().unwrap();
//! assert_eq!(encoded.as_ref(), &[0xC3, 0xC0, 0xC1, 0x05]);
//! ```
//!
//! # Example (Encodable)
//!
//! ```
//! use tessera_rlp::{encode, Encodable, Error, Output};
//! use std::net::Ipv4Addr;
//!
//! // Define a custom struct
//! struct Endpoint {
//!     ip: Ipv4Addr,
//!     udp: u16,
//!     tcp: u16,
//! }
//!
//! // Implement the `Encodable` trait
//! impl Encodable for Endpoint {
//!     fn rlp_append(&self, out: &mut Output) -> Result<(), Error> {
//!         out.start_list()?;
//!         out.append(&self.ip)?;
//!         out.write_u16(self.udp)?;
//!         out.write_u16(self.tcp)?;
//!         out.end_list()
//!     }
//! }
//!
//! let endpoint = Endpoint { ip: Ipv4Addr::LOCALHOST, udp: 0x7F, tcp: 0x80 };
//! let encoded = encode(&endpoint).unwrap();
//! assert_eq!(encoded.as_ref(), &[0xC8, 0x84, 127, 0, 0, 1, 0x7F, 0x81, 0x80]);
//! ```

pub mod config;
pub mod encodable;
pub mod error;
pub mod output;
pub mod prefix;
pub mod types;

// Re-export main types and traits
pub use config::Config;
pub use encodable::{encode, Encodable};
pub use error::Error;
pub use output::Output;
pub use types::{net, primitives};
