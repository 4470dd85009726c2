use std::env;

use crate::{
    error::FfiError,
    memory::ByteOrder,
    platform::Platform,
};

pub const LONG_SIZE_ENV: &str = "RSFFI_LONG_SIZE";
pub const BYTE_ORDER_ENV: &str = "RSFFI_BYTE_ORDER";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FfiConfig {
    long_size: Option<usize>,
    byte_order: ByteOrder,
}

impl Default for FfiConfig {
    fn default() -> Self {
        Self {
            long_size: None,
            byte_order: ByteOrder::native(),
        }
    }
}

impl FfiConfig {
    /// Starts from the defaults and applies `RSFFI_LONG_SIZE` / `RSFFI_BYTE_ORDER` if set.
    pub fn from_env() -> Result<Self, FfiError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub(crate) fn from_vars<F>(lookup: F) -> Result<Self, FfiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(long_size) = lookup(LONG_SIZE_ENV) {
            cfg.set_long_size(parse_long_size(LONG_SIZE_ENV, &long_size)?);
        }
        if let Some(byte_order) = lookup(BYTE_ORDER_ENV) {
            cfg.set_byte_order(byte_order.parse().map_err(|_| FfiError::InvalidConfig {
                key: BYTE_ORDER_ENV.to_string(),
                value: byte_order.clone(),
            })?);
        }
        log::debug!("ffi config {:?}", cfg);
        return Ok(cfg);
    }

    pub fn long_size(&self) -> Option<usize> {
        self.long_size
    }

    pub fn set_long_size(&mut self, long_size: usize) {
        self.long_size = Some(long_size);
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = byte_order;
    }

    /// Resolves the configured platform, probing the host for anything not overridden.
    pub fn platform(&self) -> Result<Platform, FfiError> {
        let platform = match self.long_size {
            Some(long_size) => {
                let platform = Platform::with_long_size(long_size)?;
                if long_size != Platform::native().long_size() {
                    log::warn!(
                        "native long size overridden to {} bytes, host uses {}",
                        long_size,
                        Platform::native().long_size()
                    );
                }
                platform
            }
            None => Platform::native(),
        };
        return Ok(platform.with_byte_order(self.byte_order));
    }
}

pub(crate) fn parse_long_size(key: &str, value: &str) -> Result<usize, FfiError> {
    value.trim().parse::<usize>().map_err(|_| FfiError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_long_size, FfiConfig, BYTE_ORDER_ENV, LONG_SIZE_ENV};
    use crate::{
        error::{FfiError, PlatformError},
        memory::ByteOrder,
        platform::Platform,
    };

    #[test]
    fn default_is_native() {
        let cfg = FfiConfig::default();
        assert_eq!(None, cfg.long_size());
        assert_eq!(Platform::native(), cfg.platform().unwrap());
    }

    #[test]
    fn overrides() {
        let mut cfg = FfiConfig::default();
        cfg.set_long_size(4);
        cfg.set_byte_order(ByteOrder::BigEndian);
        let platform = cfg.platform().unwrap();
        assert_eq!(4, platform.long_size());
        assert_eq!(ByteOrder::BigEndian, platform.byte_order());
    }

    #[test]
    fn invalid_long_size() {
        let mut cfg = FfiConfig::default();
        cfg.set_long_size(3);
        assert_eq!(
            Err(FfiError::Platform(PlatformError::UnsupportedLongSize(3))),
            cfg.platform()
        );
        assert_eq!(Ok(8), parse_long_size(LONG_SIZE_ENV, " 8 "));
        assert!(matches!(
            parse_long_size(LONG_SIZE_ENV, "eight"),
            Err(FfiError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn reads_variables() {
        let cfg = FfiConfig::from_vars(|key| match key {
            LONG_SIZE_ENV => Some("4".to_string()),
            BYTE_ORDER_ENV => Some("big".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(Some(4), cfg.long_size());
        assert_eq!(ByteOrder::BigEndian, cfg.byte_order());

        assert_eq!(FfiConfig::default(), FfiConfig::from_vars(|_| None).unwrap());

        let err = FfiConfig::from_vars(|key| match key {
            BYTE_ORDER_ENV => Some("sideways".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert_eq!(
            FfiError::InvalidConfig {
                key: BYTE_ORDER_ENV.to_string(),
                value: "sideways".to_string()
            },
            err
        );
    }
}
