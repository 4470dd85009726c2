use jni::{objects::JByteBuffer, JNIEnv};

use crate::error::MarshalError;

/// Borrows the backing memory of a direct `java.nio.ByteBuffer`.
///
/// # Safety
/// The returned slice must not outlive the Java buffer, and no other view of
/// the same memory may be written while it is alive.
pub(crate) unsafe fn direct_buffer_mut<'b>(
    env: &JNIEnv,
    buffer: &JByteBuffer,
) -> Result<&'b mut [u8], MarshalError> {
    let address = env
        .get_direct_buffer_address(buffer)
        .map_err(|e| MarshalError::InvalidBuffer(e.to_string()))?;
    let capacity = env
        .get_direct_buffer_capacity(buffer)
        .map_err(|e| MarshalError::InvalidBuffer(e.to_string()))?;
    return Ok(std::slice::from_raw_parts_mut(address, capacity));
}

/// # Safety
/// See [`direct_buffer_mut`].
pub(crate) unsafe fn direct_buffer<'b>(
    env: &JNIEnv,
    buffer: &JByteBuffer,
) -> Result<&'b [u8], MarshalError> {
    direct_buffer_mut(env, buffer).map(|bytes| &*bytes)
}

pub(crate) fn exception_class(err: &MarshalError) -> &'static str {
    match err {
        MarshalError::OutOfBounds { .. } => "java/lang/IndexOutOfBoundsException",
        MarshalError::InvalidBuffer(_) => "java/lang/IllegalArgumentException",
    }
}

pub(crate) fn throw_marshal_error(env: &mut JNIEnv, err: MarshalError) {
    log::debug!("marshal failed: {}", err);
    if let Err(e) = env.throw_new(exception_class(&err), err.to_string()) {
        log::error!("failed to throw {}: {}", exception_class(&err), e);
    }
}

#[cfg(test)]
mod tests {
    use super::exception_class;
    use crate::error::MarshalError;

    #[test]
    fn maps_errors_to_java_exceptions() {
        let out_of_bounds = MarshalError::OutOfBounds {
            offset: 0,
            size: 4,
            capacity: 0,
        };
        assert_eq!(
            "java/lang/IndexOutOfBoundsException",
            exception_class(&out_of_bounds)
        );
        assert_eq!(
            "java/lang/IllegalArgumentException",
            exception_class(&MarshalError::InvalidBuffer("not direct".to_string()))
        );
    }
}
