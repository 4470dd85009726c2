use jni::{
    objects::{JByteBuffer, JClass},
    sys::{jfloat, jint},
    JNIEnv,
};

use super::jni::{direct_buffer, direct_buffer_mut, throw_marshal_error};
use crate::byref::{ByReference, FloatByReference};

#[allow(non_snake_case)]
#[no_mangle]
pub extern "system" fn Java_com_kenai_jaffl_byref_FloatByReference_marshal0<'local>(
    mut env: JNIEnv<'local>,
    _cls_ref: JClass<'local>,
    buffer: JByteBuffer<'local>,
    value: jfloat,
) {
    let result = unsafe { direct_buffer_mut(&env, &buffer) }
        .and_then(|bytes| FloatByReference::new(value).marshal(bytes));
    if let Err(e) = result {
        throw_marshal_error(&mut env, e);
    }
}

#[allow(non_snake_case)]
#[no_mangle]
pub extern "system" fn Java_com_kenai_jaffl_byref_FloatByReference_unmarshal0<'local>(
    mut env: JNIEnv<'local>,
    _cls_ref: JClass<'local>,
    buffer: JByteBuffer<'local>,
) -> jfloat {
    let mut reference = FloatByReference::default();
    let result =
        unsafe { direct_buffer(&env, &buffer) }.and_then(|bytes| reference.unmarshal(bytes));
    if let Err(e) = result {
        throw_marshal_error(&mut env, e);
        return 0.0;
    }
    return reference.value();
}

#[allow(non_snake_case)]
#[no_mangle]
pub extern "system" fn Java_com_kenai_jaffl_byref_FloatByReference_nativeSize0<'local>(
    _env: JNIEnv<'local>,
    _cls_ref: JClass<'local>,
) -> jint {
    return FloatByReference::NATIVE_SIZE as jint;
}
