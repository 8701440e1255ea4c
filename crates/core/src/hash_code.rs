//! Stable 32-bit content hash with a fixed multiplier of 31.
//!
//! Unlike `std::hash::Hash`, the value produced here does not depend on the
//! hasher or the process: the same field values always give the same `i32`,
//! which makes it usable as a persisted or cross-runtime fingerprint.
//!
//! Strings hash over their UTF-16 code units, `bool` contributes `1`/`0`, and
//! absent values contribute `0`. All arithmetic wraps.

const MULTIPLIER: i32 = 31;

/// A value with a stable 31-multiplier hash.
pub trait HashCode {
    fn hash_code(&self) -> i32;
}

impl HashCode for str {
    fn hash_code(&self) -> i32 {
        self.encode_utf16().fold(0i32, |h, unit| {
            h.wrapping_mul(MULTIPLIER).wrapping_add(i32::from(unit))
        })
    }
}

impl HashCode for String {
    fn hash_code(&self) -> i32 {
        self.as_str().hash_code()
    }
}

impl HashCode for bool {
    fn hash_code(&self) -> i32 {
        i32::from(*self)
    }
}

impl<T: HashCode> HashCode for Option<T> {
    fn hash_code(&self) -> i32 {
        self.as_ref().map_or(0, HashCode::hash_code)
    }
}

impl<T: HashCode + ?Sized> HashCode for &T {
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

/// Fold per-field hashes as `result = 31 * result + field`, seeded at 0.
pub fn combine<I>(fields: I) -> i32
where
    I: IntoIterator<Item = i32>,
{
    fields
        .into_iter()
        .fold(0i32, |acc, field| acc.wrapping_mul(MULTIPLIER).wrapping_add(field))
}
