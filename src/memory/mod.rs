use std::{fmt, str::FromStr};

use paste::paste;

use crate::error::{FfiError, MarshalError};

pub const POINTER_SIZE: usize = std::mem::size_of::<*const u8>();

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

impl ByteOrder {
    #[inline(always)]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }

    #[inline(always)]
    pub fn is_native(&self) -> bool {
        *self == Self::native()
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::BigEndian => write!(f, "big"),
            ByteOrder::LittleEndian => write!(f, "little"),
        }
    }
}

impl FromStr for ByteOrder {
    type Err = FfiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" => Ok(Self::native()),
            "big" | "be" | "big_endian" => Ok(ByteOrder::BigEndian),
            "little" | "le" | "little_endian" => Ok(ByteOrder::LittleEndian),
            _ => Err(FfiError::InvalidConfig {
                key: "byte order".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[inline(always)]
fn check_range(offset: usize, size: usize, capacity: usize) -> Result<usize, MarshalError> {
    match offset.checked_add(size) {
        Some(end) if end <= capacity => Ok(end),
        _ => Err(MarshalError::OutOfBounds {
            offset,
            size,
            capacity,
        }),
    }
}

macro_rules! memory_accessors {
    ($(($member_name:ident, $member_type:ident)),*) => {
        /// Bounds-checked reads of primitives from a borrowed native memory region.
        pub trait NativeMemory {
            fn bytes(&self) -> &[u8];

            fn order(&self) -> ByteOrder;

            fn capacity(&self) -> usize {
                self.bytes().len()
            }

            fn peek_nbytes(&self, offset: usize, n: usize) -> Result<&[u8], MarshalError> {
                let end = check_range(offset, n, self.capacity())?;
                return Ok(&self.bytes()[offset..end]);
            }

            fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N], MarshalError> {
                let mut result = [0u8; N];
                result.copy_from_slice(self.peek_nbytes(offset, N)?);
                return Ok(result);
            }

            paste! {
                $(
                    fn [<get_ $member_name>](&self, offset: usize) -> Result<$member_type, MarshalError> {
                        let bytes = self.read_array::<{ std::mem::size_of::<$member_type>() }>(offset)?;
                        return Ok(match self.order() {
                            ByteOrder::BigEndian => <$member_type>::from_be_bytes(bytes),
                            ByteOrder::LittleEndian => <$member_type>::from_le_bytes(bytes),
                        });
                    }
                )*
            }
        }

        impl<'a> NativeRegionMut<'a> {
            paste! {
                $(
                    pub fn [<put_ $member_name>](&mut self, offset: usize, value: $member_type) -> Result<(), MarshalError> {
                        let bytes = match self.order {
                            ByteOrder::BigEndian => value.to_be_bytes(),
                            ByteOrder::LittleEndian => value.to_le_bytes(),
                        };
                        self.write_bytes(offset, &bytes)
                    }
                )*
            }
        }
    };
}

memory_accessors!(
    (i8, i8),
    (u8, u8),
    (i16, i16),
    (i32, i32),
    (u32, u32),
    (i64, i64),
    (u64, u64),
    (f32, f32),
    (f64, f64)
);

pub struct NativeRegion<'a> {
    bytes: &'a [u8],
    order: ByteOrder,
}

impl<'a> NativeRegion<'a> {
    pub fn new(bytes: &'a [u8], order: ByteOrder) -> Self {
        NativeRegion { bytes, order }
    }

    pub fn native(bytes: &'a [u8]) -> Self {
        Self::new(bytes, ByteOrder::native())
    }
}

impl<'a> NativeMemory for NativeRegion<'a> {
    fn bytes(&self) -> &[u8] {
        self.bytes
    }

    fn order(&self) -> ByteOrder {
        self.order
    }
}

pub struct NativeRegionMut<'a> {
    bytes: &'a mut [u8],
    order: ByteOrder,
}

impl<'a> NativeRegionMut<'a> {
    pub fn new(bytes: &'a mut [u8], order: ByteOrder) -> Self {
        NativeRegionMut { bytes, order }
    }

    pub fn native(bytes: &'a mut [u8]) -> Self {
        Self::new(bytes, ByteOrder::native())
    }

    /// Nothing is written unless the whole range fits.
    pub fn write_bytes(&mut self, offset: usize, src: &[u8]) -> Result<(), MarshalError> {
        let end = check_range(offset, src.len(), self.bytes.len())?;
        self.bytes[offset..end].copy_from_slice(src);
        return Ok(());
    }
}

impl<'a> NativeMemory for NativeRegionMut<'a> {
    fn bytes(&self) -> &[u8] {
        &*self.bytes
    }

    fn order(&self) -> ByteOrder {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::{ByteOrder, NativeMemory, NativeRegion, NativeRegionMut};
    use crate::error::MarshalError;

    #[test]
    fn reads_with_explicit_order() {
        let bytes = [0x12, 0x34, 0x56, 0x78];
        assert_eq!(
            0x12345678,
            NativeRegion::new(&bytes, ByteOrder::BigEndian)
                .get_u32(0)
                .unwrap()
        );
        assert_eq!(
            0x78563412,
            NativeRegion::new(&bytes, ByteOrder::LittleEndian)
                .get_u32(0)
                .unwrap()
        );
        assert_eq!(
            0x3456,
            NativeRegion::new(&bytes, ByteOrder::BigEndian)
                .get_i16(1)
                .unwrap()
        );
    }

    #[test]
    fn read_past_end_fails() {
        let bytes = [0u8; 6];
        let region = NativeRegion::native(&bytes);
        assert_eq!(
            Err(MarshalError::OutOfBounds {
                offset: 4,
                size: 4,
                capacity: 6
            }),
            region.get_i32(4)
        );
        assert!(region.get_u8(usize::MAX).is_err());
        assert!(region.peek_nbytes(6, 0).is_ok());
    }

    #[test]
    fn failed_write_leaves_region_untouched() {
        let mut bytes = [0xa5u8; 7];
        let mut region = NativeRegionMut::new(&mut bytes, ByteOrder::BigEndian);
        assert!(region.put_i64(0, -1).is_err());
        assert!(region.put_f32(4, 1.0).is_err());
        assert_eq!([0xa5u8; 7], bytes);
    }

    #[test]
    fn write_then_read_back() {
        let mut bytes = [0u8; 16];
        let mut region = NativeRegionMut::new(&mut bytes, ByteOrder::LittleEndian);
        region.put_f64(8, -2.5).unwrap();
        region.put_i8(0, -3).unwrap();
        assert_eq!(-2.5, region.get_f64(8).unwrap());
        assert_eq!(-3, region.get_i8(0).unwrap());
        assert_eq!(0xfd, bytes[0]);
    }

    #[test]
    fn parse_byte_order() {
        assert_eq!(ByteOrder::BigEndian, "BE".parse::<ByteOrder>().unwrap());
        assert_eq!(ByteOrder::LittleEndian, "little".parse::<ByteOrder>().unwrap());
        assert_eq!(ByteOrder::native(), "native".parse::<ByteOrder>().unwrap());
        assert!(ByteOrder::native().is_native());
        assert!("middle".parse::<ByteOrder>().is_err());
    }
}
