//! Encodable implementations for collections.
//!
//! Collections are written as lists, one entry per element. `Option` is written as a list of
//! zero or one entry.

use crate::{Encodable, Error, Output};

impl<T: Encodable> Encodable for [T] {
    #[inline]
    fn rlp_append(&self, out: &mut Output) -> Result<(), Error> {
        out.write_list(self, |item, out| item.rlp_append(out))
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    #[inline]
    fn rlp_append(&self, out: &mut Output) -> Result<(), Error> {
        self.as_slice().rlp_append(out)
    }
}

impl<T: Encodable> Encodable for Option<T> {
    #[inline]
    fn rlp_append(&self, out: &mut Output) -> Result<(), Error> {
        out.write_list(self, |item, out| item.rlp_append(out))
    }
}
