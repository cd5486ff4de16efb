//! Encodable implementations for IP addresses.
//!
//! An address is written as a byte-string of its octets in network order (4 bytes for IPv4,
//! 16 bytes for IPv6).

use crate::{Encodable, Error, Output};
use bytes::Bytes;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

impl Encodable for Ipv4Addr {
    #[inline]
    fn rlp_append(&self, out: &mut Output) -> Result<(), Error> {
        out.write_element(Bytes::copy_from_slice(&self.octets()))
    }
}

impl Encodable for Ipv6Addr {
    #[inline]
    fn rlp_append(&self, out: &mut Output) -> Result<(), Error> {
        out.write_element(Bytes::copy_from_slice(&self.octets()))
    }
}

impl Encodable for IpAddr {
    #[inline]
    fn rlp_append(&self, out: &mut Output) -> Result<(), Error> {
        match self {
            IpAddr::V4(addr) => addr.rlp_append(out),
            IpAddr::V6(addr) => addr.rlp_append(out),
        }
    }
}
