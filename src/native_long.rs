use std::{
    any::Any,
    borrow::Cow,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    num::ParseIntError,
    str::FromStr,
};

use crate::platform::{self, Platform};

const CACHE_LOW: i64 = -128;
const CACHE_HIGH: i64 = 127;
const CACHE_SIZE: usize = (CACHE_HIGH - CACHE_LOW + 1) as usize;

static CACHE: [NativeLong; CACHE_SIZE] = new_cache();

const fn new_cache() -> [NativeLong; CACHE_SIZE] {
    let mut cache = [NativeLong::new(0); CACHE_SIZE];
    let mut i = 0;
    while i < CACHE_SIZE {
        cache[i] = NativeLong::new(i as i64 + CACHE_LOW);
        i += 1;
    }
    cache
}

/// A C `long`, which is 32 or 64 bits wide depending on the platform.
///
/// The value is always held as an `i64`; it is only narrowed to the platform
/// width when converted with [`NativeLong::to_native`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NativeLong {
    value: i64,
}

/// A `NativeLong` as laid out for a native call on a given platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NativeLongRepr {
    Int32(i32),
    Int64(i64),
}

impl NativeLongRepr {
    pub fn size(&self) -> usize {
        match self {
            NativeLongRepr::Int32(_) => 4,
            NativeLongRepr::Int64(_) => 8,
        }
    }

    pub fn to_bits(&self) -> u64 {
        match *self {
            NativeLongRepr::Int32(v) => v as u32 as u64,
            NativeLongRepr::Int64(v) => v as u64,
        }
    }
}

impl NativeLong {
    #[inline(always)]
    pub const fn new(value: i64) -> Self {
        Self { value }
    }

    #[inline(always)]
    pub fn zero() -> &'static NativeLong {
        &CACHE[(0 - CACHE_LOW) as usize]
    }

    #[inline(always)]
    pub fn one() -> &'static NativeLong {
        &CACHE[(1 - CACHE_LOW) as usize]
    }

    #[inline(always)]
    pub fn minus_one() -> &'static NativeLong {
        &CACHE[(-1 - CACHE_LOW) as usize]
    }

    /// Canonicalizing factory. Values in `[-128, 127]` are served from a
    /// shared table and always borrow the same instance.
    pub fn value_of(value: i64) -> Cow<'static, NativeLong> {
        return match value {
            0 => Cow::Borrowed(Self::zero()),
            1 => Cow::Borrowed(Self::one()),
            -1 => Cow::Borrowed(Self::minus_one()),
            CACHE_LOW..=CACHE_HIGH => Cow::Borrowed(&CACHE[(value - CACHE_LOW) as usize]),
            _ => Cow::Owned(NativeLong::new(value)),
        };
    }

    #[inline(always)]
    pub fn to_i32(&self) -> i32 {
        self.value as i32
    }

    #[inline(always)]
    pub fn to_i64(&self) -> i64 {
        self.value
    }

    #[inline(always)]
    pub fn to_f32(&self) -> f32 {
        self.value as f32
    }

    #[inline(always)]
    pub fn to_f64(&self) -> f64 {
        self.value as f64
    }

    /// Folds the two 32-bit halves together, as `java.lang.Long.hashCode` does.
    pub fn hash_code(&self) -> i32 {
        (self.value ^ ((self.value as u64) >> 32) as i64) as i32
    }

    /// Numeric comparison yielding -1, 0 or 1.
    pub fn compare(&self, other: &NativeLong) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Equality against an arbitrary value; anything that is not a `NativeLong` is unequal.
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<NativeLong>()
            .map_or(false, |other| other.value == self.value)
    }

    /// Number of bytes this value occupies on the current platform.
    pub fn native_size() -> usize {
        platform::current().long_size()
    }

    /// Narrows to the platform's long width. High bits are silently dropped on 32-bit longs.
    pub fn to_native(&self, platform: &Platform) -> NativeLongRepr {
        if platform.long_size() == 4 {
            NativeLongRepr::Int32(self.value as i32)
        } else {
            NativeLongRepr::Int64(self.value)
        }
    }

    /// Sign-extends the low `long_size` bytes of `bits`.
    pub fn from_native_bits(bits: u64, platform: &Platform) -> NativeLong {
        let bits = bits & platform.long_mask();
        if platform.long_size() == 4 {
            NativeLong::new(bits as u32 as i32 as i64)
        } else {
            NativeLong::new(bits as i64)
        }
    }
}

impl Hash for NativeLong {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for NativeLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for NativeLong {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(NativeLong::new(s.parse::<i64>()?))
    }
}

impl From<i64> for NativeLong {
    fn from(value: i64) -> Self {
        NativeLong::new(value)
    }
}

impl From<i32> for NativeLong {
    fn from(value: i32) -> Self {
        NativeLong::new(value as i64)
    }
}

impl From<NativeLong> for i64 {
    fn from(value: NativeLong) -> Self {
        value.value
    }
}
