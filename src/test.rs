pub const FILL_BYTE: u8 = 0xa5;

/// A buffer filled with a recognizable pattern, so stray writes show up in assertions.
pub fn filled_buffer(len: usize) -> Vec<u8> {
    vec![FILL_BYTE; len]
}
