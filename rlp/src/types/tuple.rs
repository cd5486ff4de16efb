//! Encodable implementations for tuples.
//!
//! A tuple is written as a list with one entry per field.

use crate::{Encodable, Error, Output};
use paste::paste;

macro_rules! impl_encodable_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>]: Encodable ),*> Encodable for ( $( [<T $index>], )* ) {
                #[inline]
                fn rlp_append(&self, out: &mut Output) -> Result<(), Error> {
                    out.start_list()?;
                    $( self.$index.rlp_append(out)?; )*
                    out.end_list()
                }
            }
        }
    };
}

// Generate implementations for tuple sizes 1 through 6
impl_encodable_for_tuple!(0);
impl_encodable_for_tuple!(0, 1);
impl_encodable_for_tuple!(0, 1, 2);
impl_encodable_for_tuple!(0, 1, 2, 3);
impl_encodable_for_tuple!(0, 1, 2, 3, 4);
impl_encodable_for_tuple!(0, 1, 2, 3, 4, 5);
