use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarshalError {
    OutOfBounds {
        offset: usize,
        size: usize,
        capacity: usize,
    },
    InvalidBuffer(String),
}

impl fmt::Display for MarshalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarshalError::OutOfBounds {
                offset,
                size,
                capacity,
            } => write!(
                f,
                "out of range, expected {} bytes at offset {} but capacity is {}",
                size, offset, capacity
            ),
            MarshalError::InvalidBuffer(msg) => write!(f, "invalid native buffer: {}", msg),
        }
    }
}

impl std::error::Error for MarshalError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    UnsupportedLongSize(usize),
    AlreadyInitialized,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::UnsupportedLongSize(size) => {
                write!(f, "unsupported native long size: {} bytes", size)
            }
            PlatformError::AlreadyInitialized => write!(f, "platform already initialized"),
        }
    }
}

impl std::error::Error for PlatformError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FfiError {
    Marshal(MarshalError),
    Platform(PlatformError),
    InvalidConfig { key: String, value: String },
}

impl fmt::Display for FfiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiError::Marshal(e) => write!(f, "{}", e),
            FfiError::Platform(e) => write!(f, "{}", e),
            FfiError::InvalidConfig { key, value } => {
                write!(f, "invalid value {:?} for {}", value, key)
            }
        }
    }
}

impl std::error::Error for FfiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FfiError::Marshal(e) => Some(e),
            FfiError::Platform(e) => Some(e),
            FfiError::InvalidConfig { .. } => None,
        }
    }
}

impl From<MarshalError> for FfiError {
    fn from(e: MarshalError) -> Self {
        FfiError::Marshal(e)
    }
}

impl From<PlatformError> for FfiError {
    fn from(e: PlatformError) -> Self {
        FfiError::Platform(e)
    }
}

#[cfg(test)]
mod tests {
    use super::{FfiError, MarshalError, PlatformError};
    use std::error::Error;

    #[test]
    fn out_of_bounds_message() {
        let err = MarshalError::OutOfBounds {
            offset: 0,
            size: 4,
            capacity: 2,
        };
        assert_eq!(
            "out of range, expected 4 bytes at offset 0 but capacity is 2",
            err.to_string()
        );
    }

    #[test]
    fn wraps_source() {
        let err: FfiError = PlatformError::UnsupportedLongSize(2).into();
        assert_eq!("unsupported native long size: 2 bytes", err.to_string());
        assert!(err.source().is_some());

        let err = FfiError::InvalidConfig {
            key: "RSFFI_LONG_SIZE".to_string(),
            value: "x".to_string(),
        };
        assert!(err.source().is_none());
    }
}
