//! Hashing single scalar values down to a machine word.
//!
//! A value whose bit pattern fits the output width hashes to that pattern,
//! zero-extended. Wider values are folded with FNV-1a of the output width
//! over their little-endian bytes. Floats hash their IEEE-754 bits, so
//! `0.0` and `-0.0` differ and every NaN payload is distinct.

use crate::byte_order::LittleEndian;
use crate::fnv::{Fnv1aHash32, Fnv1aHash64};

/// A scalar that can be reduced to a 32 bit, 64 bit or word-sized hash.
pub trait WordHash {
    /// Hash into 32 bits.
    fn hash32(&self) -> u32;

    /// Hash into 64 bits.
    fn hash64(&self) -> u64;

    /// Hash into the target's pointer width.
    #[cfg(target_pointer_width = "64")]
    #[allow(clippy::cast_possible_truncation)]
    fn hash_word(&self) -> usize {
        self.hash64() as usize
    }

    /// Hash into the target's pointer width.
    #[cfg(not(target_pointer_width = "64"))]
    fn hash_word(&self) -> usize {
        self.hash32() as usize
    }
}

fn fold32(le: &[u8]) -> u32 {
    if le.len() <= 4 {
        let mut word = [0u8; 4];
        word[..le.len()].copy_from_slice(le);
        u32::from_le_bytes(word)
    } else {
        Fnv1aHash32::<LittleEndian>::from_bytes(le).value()
    }
}

fn fold64(le: &[u8]) -> u64 {
    if le.len() <= 8 {
        let mut word = [0u8; 8];
        word[..le.len()].copy_from_slice(le);
        u64::from_le_bytes(word)
    } else {
        Fnv1aHash64::<LittleEndian>::from_bytes(le).value()
    }
}

macro_rules! word_hash {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WordHash for $ty {
                fn hash32(&self) -> u32 {
                    fold32(&self.to_le_bytes())
                }

                fn hash64(&self) -> u64 {
                    fold64(&self.to_le_bytes())
                }
            }
        )*
    };
}

word_hash!(u8, u16, u32, u64, u128, usize);
word_hash!(i8, i16, i32, i64, i128, isize);

impl WordHash for bool {
    fn hash32(&self) -> u32 {
        u32::from(*self)
    }

    fn hash64(&self) -> u64 {
        u64::from(*self)
    }
}

impl WordHash for char {
    fn hash32(&self) -> u32 {
        u32::from(*self)
    }

    fn hash64(&self) -> u64 {
        u64::from(*self)
    }
}

impl WordHash for f32 {
    fn hash32(&self) -> u32 {
        self.to_bits().hash32()
    }

    fn hash64(&self) -> u64 {
        self.to_bits().hash64()
    }
}

impl WordHash for f64 {
    fn hash32(&self) -> u32 {
        self.to_bits().hash32()
    }

    fn hash64(&self) -> u64 {
        self.to_bits().hash64()
    }
}

// Pointers hash their address only; metadata of fat pointers is ignored.
impl<T: ?Sized> WordHash for *const T {
    fn hash32(&self) -> u32 {
        self.addr().hash32()
    }

    fn hash64(&self) -> u64 {
        self.addr().hash64()
    }
}

impl<T: ?Sized> WordHash for *mut T {
    fn hash32(&self) -> u32 {
        self.addr().hash32()
    }

    fn hash64(&self) -> u64 {
        self.addr().hash64()
    }
}
