use crate::{error::MarshalError, memory::ByteOrder, platform};

mod native_long;
mod primitive;

pub use native_long::NativeLongByReference;
pub use primitive::{
    ByteByReference, DoubleByReference, FloatByReference, IntByReference, LongByReference,
    ShortByReference,
};

/// A value passed to a native call by address, so the callee can update it.
///
/// The native buffer is only borrowed for the duration of a single
/// `marshal`/`unmarshal` call. Values are written at offset 0, in the byte
/// order of the process-wide platform unless a type says otherwise.
pub trait ByReference {
    type Value: Copy;

    fn value(&self) -> Self::Value;

    fn set_value(&mut self, value: Self::Value);

    /// Size in bytes of the native representation.
    fn native_size(&self) -> usize;

    fn marshal_with_order(&self, buffer: &mut [u8], order: ByteOrder) -> Result<(), MarshalError>;

    fn unmarshal_with_order(&mut self, buffer: &[u8], order: ByteOrder)
        -> Result<(), MarshalError>;

    /// Byte order used by `marshal` and `unmarshal`.
    fn byte_order(&self) -> ByteOrder {
        platform::current().byte_order()
    }

    /// Copies the value to native memory.
    fn marshal(&self, buffer: &mut [u8]) -> Result<(), MarshalError> {
        self.marshal_with_order(buffer, self.byte_order())
    }

    /// Copies the value from native memory. The held value is untouched on failure.
    fn unmarshal(&mut self, buffer: &[u8]) -> Result<(), MarshalError> {
        self.unmarshal_with_order(buffer, self.byte_order())
    }
}
