use jni::{objects::JClass, sys::jint, JNIEnv};

use crate::platform;

/// Width of a C `long` in bits.
#[allow(non_snake_case)]
#[no_mangle]
pub extern "system" fn Java_com_kenai_jaffl_Platform_longSize<'local>(
    _env: JNIEnv<'local>,
    _cls_ref: JClass<'local>,
) -> jint {
    return platform::current().long_bits() as jint;
}

#[allow(non_snake_case)]
#[no_mangle]
pub extern "system" fn Java_com_kenai_jaffl_Platform_addressSize<'local>(
    _env: JNIEnv<'local>,
    _cls_ref: JClass<'local>,
) -> jint {
    return (platform::current().pointer_size() * 8) as jint;
}
