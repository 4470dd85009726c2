use jni::{
    objects::JClass,
    sys::{jint, jlong},
    JNIEnv,
};

use crate::{native_long::NativeLong, platform};

#[allow(non_snake_case)]
#[no_mangle]
pub extern "system" fn Java_com_kenai_jaffl_NativeLong_hashCode0<'local>(
    _env: JNIEnv<'local>,
    _cls_ref: JClass<'local>,
    value: jlong,
) -> jint {
    return NativeLong::new(value).hash_code();
}

/// Truncates and sign-extends `value` the way a native call would see it.
#[allow(non_snake_case)]
#[no_mangle]
pub extern "system" fn Java_com_kenai_jaffl_NativeLong_toNative0<'local>(
    _env: JNIEnv<'local>,
    _cls_ref: JClass<'local>,
    value: jlong,
) -> jlong {
    let platform = platform::current();
    let bits = NativeLong::new(value).to_native(platform).to_bits();
    return NativeLong::from_native_bits(bits, platform).to_i64();
}
