//! Encodable implementations for unsigned integers and `bool`.

use crate::{Encodable, Error, Output};
use paste::paste;

macro_rules! impl_scalar {
    ($type:ty) => {
        paste! {
            impl Encodable for $type {
                #[inline]
                fn rlp_append(&self, out: &mut Output) -> Result<(), Error> {
                    out.[<write_ $type>](*self)
                }
            }
        }
    };
}

impl_scalar!(u16);
impl_scalar!(u32);
impl_scalar!(u64);
impl_scalar!(u128);
impl_scalar!(usize);
impl_scalar!(bool);
