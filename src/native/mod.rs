#[allow(non_snake_case)]
mod com_kenai_jaffl_NativeLong;
#[allow(non_snake_case)]
mod com_kenai_jaffl_Platform;
#[allow(non_snake_case)]
mod com_kenai_jaffl_byref_FloatByReference;
pub(crate) mod jni;
