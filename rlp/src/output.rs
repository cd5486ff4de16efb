//! Accumulate a tree of values and lists, then encode it in a single pass.
//!
//! # Design
//!
//! Values written to an [Output] are accumulated in a flat record, in the order they were
//! written. When a list is started, a marker is pushed to that record instead of a value.
//! While the record is built, the size of the encoded payload of every list is computed
//! incrementally and stored in a table indexed by the list's ordinal (the root context is
//! ordinal 0, the first list started is ordinal 1, and so on).
//!
//! A small stack holds the ordinals of the lists that are currently open (innermost last).
//! The encoded size of a new value is only added to the innermost open list. Parents are
//! updated when a list ends: at that point its payload size is final, so the full encoded
//! size of the list (header and payload) is added to its parent.
//!
//! Once all lists are closed, the table entry of the root context holds the total size of the
//! encoding and the table entry of every list holds the size of its payload. The encoding can
//! therefore be written in one walk of the record: values are written as they are read and,
//! every time a list marker is read, its header is written using the next entry of the table.

use crate::{
    prefix::{element_size, list_header_size, list_size, write_element, write_list_header},
    Config, Encodable, Error,
};
use bytes::{BufMut, Bytes, BytesMut};
use paste::paste;
use tracing::{debug, error, trace};

/// An entry of the flattened record.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Item {
    /// A byte-string that must be written with its prefix.
    Raw(Bytes),
    /// A byte-string that is already a valid RLP item and must be copied verbatim.
    Encoded(Bytes),
    /// The start of a list.
    List,
}

/// An RLP output builder.
///
/// # Example
///
/// ```
/// use tessera_rlp::Output;
///
/// // ["cat", "dog"]
/// let mut output = Output::new();
/// output.start_list().unwrap();
/// output.write_element("cat").unwrap();
/// output.write_element("dog").unwrap();
/// output.end_list().unwrap();
///
/// // Allocate exactly the right amount of space
/// let mut encoded = vec![0; output.encoded_size().unwrap()];
/// output.write_encoded(&mut encoded).unwrap();
/// assert_eq!(encoded, [0xC8, 0x83, b'c', b'a', b't', 0x83, b'd', b'o', b'g']);
/// ```
#[derive(Clone, Debug)]
pub struct Output {
    /// Values and list markers, in the order they were written.
    items: Vec<Item>,

    /// Payload size of every list, indexed by ordinal. Entry 0 is the root context, which holds
    /// the total size of the encoding.
    payload_sizes: Vec<usize>,

    /// Ordinals of open lists (innermost last). Never empty: entry 0 is the root context.
    stack: Vec<usize>,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

// Writers for unsigned scalars (big-endian with leading zero bytes stripped).
macro_rules! impl_write_scalar {
    ($type:ty) => {
        paste! {
            #[doc = concat!("Writes a `", stringify!($type), "` scalar.")]
            ///
            /// The value is written big-endian with leading zero bytes stripped, so zero is
            /// written as the empty byte-string.
            pub fn [<write_ $type>](&mut self, value: $type) -> Result<(), Error> {
                let bytes = value.to_be_bytes();
                let skip = (value.leading_zeros() / 8) as usize;
                self.write_element(Bytes::copy_from_slice(&bytes[skip..]))
            }
        }
    };
}

impl Output {
    /// Creates an empty output with the default [Config].
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty output with the capacities of `cfg`.
    pub fn with_config(cfg: Config) -> Self {
        let mut payload_sizes = Vec::with_capacity(cfg.lists.max(1));
        payload_sizes.push(0);
        let mut stack = Vec::with_capacity(cfg.depth.max(1));
        stack.push(0);
        Self {
            items: Vec::with_capacity(cfg.items),
            payload_sizes,
            stack,
        }
    }

    /// Ordinal of the innermost open list.
    #[inline]
    fn current(&self) -> usize {
        self.stack[self.stack.len() - 1]
    }

    /// Returns an error if the single top-level item has already been written.
    fn check_open(&self) -> Result<(), Error> {
        if self.stack.len() == 1 && !self.items.is_empty() {
            debug!("rejected write after top-level item");
            return Err(Error::SequenceTerminated);
        }
        Ok(())
    }

    /// Returns an error if any list is still open.
    fn check_balanced(&self) -> Result<(), Error> {
        if self.stack.len() > 1 {
            debug!(depth = self.depth(), "rejected unbalanced output");
            return Err(Error::UnbalancedStructure);
        }
        Ok(())
    }

    /// Writes a byte-string, which will be encoded with its length prefix.
    pub fn write_element(&mut self, value: impl Into<Bytes>) -> Result<(), Error> {
        self.check_open()?;
        let value = value.into();
        let current = self.current();
        self.payload_sizes[current] += element_size(&value);
        self.items.push(Item::Raw(value));
        Ok(())
    }

    /// Writes an item that is already RLP-encoded.
    ///
    /// The bytes are copied verbatim to the encoding. They are not validated: the caller must
    /// ensure they hold exactly one well-formed RLP item.
    pub fn write_raw(&mut self, encoded: impl Into<Bytes>) -> Result<(), Error> {
        self.check_open()?;
        let encoded = encoded.into();
        let current = self.current();
        self.payload_sizes[current] += encoded.len();
        self.items.push(Item::Encoded(encoded));
        Ok(())
    }

    /// Starts a new list. All items written until the matching [Output::end_list] belong to it.
    pub fn start_list(&mut self) -> Result<(), Error> {
        self.check_open()?;
        let ordinal = self.payload_sizes.len();
        self.items.push(Item::List);
        self.payload_sizes.push(0);
        self.stack.push(ordinal);
        Ok(())
    }

    /// Ends the innermost open list.
    pub fn end_list(&mut self) -> Result<(), Error> {
        if self.stack.len() == 1 {
            debug!("rejected end_list without open list");
            return Err(Error::UnmatchedEndList);
        }
        let closed = list_size(self.payload_sizes[self.current()]);
        self.stack.pop();

        // The closed list is a complete item of its parent.
        let current = self.current();
        self.payload_sizes[current] += closed;
        Ok(())
    }

    /// Returns the number of bytes [Output::write_encoded] will write.
    ///
    /// An output with nothing written has an encoded size of zero.
    pub fn encoded_size(&self) -> Result<usize, Error> {
        self.check_balanced()?;
        Ok(self.payload_sizes[0])
    }

    /// Writes the encoding to `dst`, which must be exactly [Output::encoded_size] bytes long.
    pub fn write_encoded(&self, dst: &mut [u8]) -> Result<(), Error> {
        let expected = self.encoded_size()?;
        if dst.len() != expected {
            debug!(expected, found = dst.len(), "rejected destination");
            return Err(Error::SizeMismatch {
                expected,
                found: dst.len(),
            });
        }

        // A lone value (no list ever started) is handled by the same walk: the record then
        // holds at most one item and no list markers.
        let mut buf = &mut dst[..];
        let mut ordinal = 0;
        for item in &self.items {
            let size = match item {
                Item::Raw(value) => element_size(value),
                Item::Encoded(encoded) => encoded.len(),
                Item::List => list_header_size(self.payload_sizes[ordinal + 1]),
            };
            if size > buf.remaining_mut() {
                let found = expected - buf.remaining_mut() + size;
                error!(expected, found, "encoding overflows computed size");
                return Err(Error::InternalSizeInconsistency { expected, found });
            }
            match item {
                Item::Raw(value) => write_element(value, &mut buf),
                Item::Encoded(encoded) => buf.put_slice(encoded),
                Item::List => {
                    ordinal += 1;
                    write_list_header(self.payload_sizes[ordinal], &mut buf);
                }
            }
        }

        let remaining = buf.remaining_mut();
        if remaining != 0 {
            let found = expected - remaining;
            error!(expected, found, "encoding is shorter than computed size");
            return Err(Error::InternalSizeInconsistency { expected, found });
        }
        trace!(
            items = self.items.len(),
            lists = self.payload_sizes.len() - 1,
            size = expected,
            "encoded output"
        );
        Ok(())
    }

    /// Encodes to a newly allocated, exactly-sized buffer.
    pub fn encode(&self) -> Result<BytesMut, Error> {
        let len = self.encoded_size()?;
        let mut buffer = BytesMut::zeroed(len);
        self.write_encoded(&mut buffer)?;
        Ok(buffer)
    }

    /// Number of lists currently open.
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    /// Returns true if one complete top-level item has been written.
    pub fn is_finished(&self) -> bool {
        self.stack.len() == 1 && !self.items.is_empty()
    }

    /// Resets the output to empty, keeping allocated capacity.
    pub fn clear(&mut self) {
        self.items.clear();
        self.payload_sizes.clear();
        self.payload_sizes.push(0);
        self.stack.clear();
        self.stack.push(0);
    }

    /// Writes the empty byte-string.
    pub fn write_empty(&mut self) -> Result<(), Error> {
        self.write_element(Bytes::new())
    }

    impl_write_scalar!(u8);
    impl_write_scalar!(u16);
    impl_write_scalar!(u32);
    impl_write_scalar!(u64);
    impl_write_scalar!(u128);
    impl_write_scalar!(usize);

    /// Writes a boolean as the scalar `1` or `0`.
    pub fn write_bool(&mut self, value: bool) -> Result<(), Error> {
        self.write_u8(value as u8)
    }

    /// Writes an empty list.
    pub fn write_empty_list(&mut self) -> Result<(), Error> {
        self.start_list()?;
        self.end_list()
    }

    /// Writes a list holding one entry per element of `items`, each written by `f`.
    ///
    /// If `f` fails, the list is left open and the output should be discarded (or cleared).
    pub fn write_list<I, F>(&mut self, items: I, mut f: F) -> Result<(), Error>
    where
        I: IntoIterator,
        F: FnMut(I::Item, &mut Self) -> Result<(), Error>,
    {
        self.start_list()?;
        for item in items {
            f(item, self)?;
        }
        self.end_list()
    }

    /// Writes `value` using its [Encodable] implementation.
    pub fn append<T: Encodable + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        value.rlp_append(self)
    }
}
