use std::mem::size_of;

use paste::paste;

use super::ByReference;
use crate::{
    error::MarshalError,
    memory::{ByteOrder, NativeMemory, NativeRegion, NativeRegionMut},
};

macro_rules! primitive_references {
    ($(($ref_name:ident, $value_type:ident)),*) => {
        paste! {
            $(
                #[derive(Clone, Copy, Debug, Default, PartialEq)]
                pub struct [<$ref_name ByReference>] {
                    value: $value_type,
                }

                impl [<$ref_name ByReference>] {
                    pub const NATIVE_SIZE: usize = size_of::<$value_type>();

                    #[inline(always)]
                    pub fn new(value: $value_type) -> Self {
                        Self { value }
                    }
                }

                impl ByReference for [<$ref_name ByReference>] {
                    type Value = $value_type;

                    #[inline(always)]
                    fn value(&self) -> $value_type {
                        self.value
                    }

                    #[inline(always)]
                    fn set_value(&mut self, value: $value_type) {
                        self.value = value;
                    }

                    #[inline(always)]
                    fn native_size(&self) -> usize {
                        Self::NATIVE_SIZE
                    }

                    fn marshal_with_order(&self, buffer: &mut [u8], order: ByteOrder) -> Result<(), MarshalError> {
                        NativeRegionMut::new(buffer, order).[<put_ $value_type>](0, self.value)
                    }

                    fn unmarshal_with_order(&mut self, buffer: &[u8], order: ByteOrder) -> Result<(), MarshalError> {
                        self.value = NativeRegion::new(buffer, order).[<get_ $value_type>](0)?;
                        return Ok(());
                    }
                }

                impl From<$value_type> for [<$ref_name ByReference>] {
                    fn from(value: $value_type) -> Self {
                        Self::new(value)
                    }
                }
            )*
        }
    };
}

primitive_references!(
    (Byte, i8),
    (Short, i16),
    (Int, i32),
    (Long, i64),
    (Float, f32),
    (Double, f64)
);
