use super::ByReference;
use crate::{
    error::MarshalError,
    memory::{ByteOrder, NativeMemory, NativeRegion, NativeRegionMut},
    native_long::{NativeLong, NativeLongRepr},
    platform::{self, Platform},
};

/// A C `long` passed by reference. Its native size follows the platform it
/// was created for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NativeLongByReference {
    value: NativeLong,
    platform: Platform,
}

impl NativeLongByReference {
    pub fn new(value: NativeLong) -> Self {
        Self::with_platform(value, *platform::current())
    }

    pub fn with_platform(value: NativeLong, platform: Platform) -> Self {
        Self { value, platform }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }
}

impl ByReference for NativeLongByReference {
    type Value = NativeLong;

    fn value(&self) -> NativeLong {
        self.value
    }

    fn set_value(&mut self, value: NativeLong) {
        self.value = value;
    }

    fn native_size(&self) -> usize {
        self.platform.long_size()
    }

    fn byte_order(&self) -> ByteOrder {
        self.platform.byte_order()
    }

    fn marshal_with_order(&self, buffer: &mut [u8], order: ByteOrder) -> Result<(), MarshalError> {
        let mut region = NativeRegionMut::new(buffer, order);
        match self.value.to_native(&self.platform) {
            NativeLongRepr::Int32(v) => region.put_i32(0, v),
            NativeLongRepr::Int64(v) => region.put_i64(0, v),
        }
    }

    fn unmarshal_with_order(&mut self, buffer: &[u8], order: ByteOrder) -> Result<(), MarshalError> {
        let region = NativeRegion::new(buffer, order);
        let bits = if self.platform.long_size() == 4 {
            region.get_u32(0)? as u64
        } else {
            region.get_u64(0)?
        };
        self.value = NativeLong::from_native_bits(bits, &self.platform);
        return Ok(());
    }
}
