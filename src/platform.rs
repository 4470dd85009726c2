use std::sync::OnceLock;

use crate::{
    config::FfiConfig,
    error::{FfiError, PlatformError},
    memory::{ByteOrder, POINTER_SIZE},
};

static PLATFORM: OnceLock<Platform> = OnceLock::new();

/// Native type sizes of the host, resolved once per process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Platform {
    long_size: usize,
    byte_order: ByteOrder,
}

impl Platform {
    pub fn native() -> Self {
        Self {
            long_size: std::mem::size_of::<libc::c_long>(),
            byte_order: ByteOrder::native(),
        }
    }

    pub fn with_long_size(long_size: usize) -> Result<Self, PlatformError> {
        match long_size {
            4 | 8 => Ok(Self {
                long_size,
                byte_order: ByteOrder::native(),
            }),
            _ => Err(PlatformError::UnsupportedLongSize(long_size)),
        }
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Size of a C `long` in bytes.
    #[inline(always)]
    pub fn long_size(&self) -> usize {
        self.long_size
    }

    #[inline(always)]
    pub fn long_bits(&self) -> usize {
        self.long_size * 8
    }

    /// log2 of `long_size`.
    #[inline(always)]
    pub fn long_shift(&self) -> u32 {
        if self.long_size == 4 {
            2
        } else {
            3
        }
    }

    #[inline(always)]
    pub fn long_mask(&self) -> u64 {
        if self.long_size == 4 {
            0xffff_ffff
        } else {
            u64::MAX
        }
    }

    #[inline(always)]
    pub fn pointer_size(&self) -> usize {
        POINTER_SIZE
    }

    #[inline(always)]
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::native()
    }
}

/// Installs the process-wide platform. Fails if one is already in place.
pub fn init(platform: Platform) -> Result<&'static Platform, PlatformError> {
    let mut installed = false;
    let current = PLATFORM.get_or_init(|| {
        installed = true;
        platform
    });
    if !installed {
        log::warn!(
            "platform already initialized with long size {}, ignoring {}",
            current.long_size(),
            platform.long_size()
        );
        return Err(PlatformError::AlreadyInitialized);
    }
    log::debug!(
        "platform initialized: long size {}, byte order {}",
        current.long_size(),
        current.byte_order()
    );
    return Ok(current);
}

/// The process-wide platform. If `init` was never called, it is resolved from
/// `FfiConfig::from_env` on first use.
pub fn current() -> &'static Platform {
    PLATFORM.get_or_init(|| resolve(FfiConfig::from_env()))
}

/// Falls back to the host platform when the configuration cannot be used.
fn resolve(cfg: Result<FfiConfig, FfiError>) -> Platform {
    let platform = match cfg.and_then(|cfg| cfg.platform()) {
        Ok(platform) => platform,
        Err(e) => {
            log::warn!("ignoring ffi configuration: {}, using native platform", e);
            Platform::native()
        }
    };
    log::trace!(
        "resolved platform: long size {}, pointer size {}, byte order {}",
        platform.long_size(),
        platform.pointer_size(),
        platform.byte_order()
    );
    return platform;
}
