pub mod byref;
pub mod config;
pub mod error;
pub mod memory;
mod native;
pub mod native_long;
pub mod platform;
#[cfg(test)]
mod test;

pub use byref::{
    ByReference, ByteByReference, DoubleByReference, FloatByReference, IntByReference,
    LongByReference, NativeLongByReference, ShortByReference,
};
pub use config::FfiConfig;
pub use error::{FfiError, MarshalError, PlatformError};
pub use memory::{ByteOrder, NativeMemory, NativeRegion, NativeRegionMut};
pub use native_long::{NativeLong, NativeLongRepr};
pub use platform::Platform;
