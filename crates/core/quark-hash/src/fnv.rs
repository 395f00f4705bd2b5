//! FNV-1 and FNV-1a accumulators in 32 and 64 bit widths.
//!
//! Each hasher starts at its width's offset basis and folds in one byte at
//! a time:
//!
//! | Family | Per byte |
//! |--------|----------|
//! | FNV-1  | `hash = (hash * PRIME) ^ byte` |
//! | FNV-1a | `hash = (hash ^ byte) * PRIME` |
//!
//! Integers wider than a byte are split according to the hasher's
//! [`ByteOrder`] parameter (little-endian by default). That holds for
//! [`add`](Fnv1aHash32::add), `+=`, ranges of integers and the integer
//! methods of [`core::hash::Hasher`].
//!
//! These hashes are not cryptographically secure.
//!
//! # Examples
//!
//! ```
//! use quark_hash::{BigEndian, Fnv1aHash32};
//!
//! let hash = Fnv1aHash32::<BigEndian>::from_bytes(b"123456789");
//! assert_eq!(hash.value(), 0xBB86_B11C);
//!
//! let mut hash = Fnv1aHash32::<BigEndian>::new();
//! hash += 0x1234_5678u32;
//! assert_eq!(u32::from(hash), 0x5B14_54E5);
//!
//! let hash = Fnv1aHash32::<BigEndian>::from_values(&[0x1234_5678u32, 0x9ABC_DEF0]);
//! assert_eq!(hash.value(), 0x7A05_BBB5);
//! ```

use core::borrow::Borrow;
use core::marker::PhantomData;
use core::ops::AddAssign;

use crate::byte_order::{ByteOrder, Integral, LittleEndian};

macro_rules! ordered_writes {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(&mut self, value: $ty) {
                self.add(value);
            }
        )*
    };
}

macro_rules! fnv_hasher {
    (
        $(#[$meta:meta])*
        $name:ident: $value:ty, basis = $basis:expr, prime = $prime:expr,
        |$hash:ident, $byte:ident| $step:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name<O = LittleEndian> {
            hash: $value,
            order: PhantomData<O>,
        }

        impl<O> $name<O> {
            /// Initial hash state.
            pub const OFFSET_BASIS: $value = $basis;
            /// Per-byte multiplier.
            pub const PRIME: $value = $prime;

            /// Creates a hasher in its initial state.
            #[must_use]
            pub const fn new() -> Self {
                Self {
                    hash: Self::OFFSET_BASIS,
                    order: PhantomData,
                }
            }

            /// Creates a hasher and feeds it `bytes`.
            #[must_use]
            pub fn from_bytes<B: Borrow<u8>>(bytes: impl IntoIterator<Item = B>) -> Self {
                let mut hasher = Self::new();
                hasher.add_bytes(bytes);
                hasher
            }

            /// Returns to the initial state.
            pub fn reset(&mut self) {
                self.hash = Self::OFFSET_BASIS;
            }

            /// Folds in one byte.
            #[inline]
            pub fn add_byte(&mut self, byte: u8) {
                let $hash = self.hash;
                let $byte = <$value>::from(byte);
                self.hash = $step;
            }

            /// Folds in every byte of `bytes`, in order.
            pub fn add_bytes<B: Borrow<u8>>(&mut self, bytes: impl IntoIterator<Item = B>) {
                for byte in bytes {
                    self.add_byte(*byte.borrow());
                }
            }

            /// The current hash.
            #[must_use]
            pub const fn value(&self) -> $value {
                self.hash
            }
        }

        impl<O: ByteOrder> $name<O> {
            /// Creates a hasher and feeds it every integer of `values`.
            #[must_use]
            pub fn from_values<I: Integral>(values: impl IntoIterator<Item = I>) -> Self {
                let mut hasher = Self::new();
                hasher.add_all(values);
                hasher
            }

            /// Folds in every byte of `value`, in this hasher's byte order.
            pub fn add<I: Integral>(&mut self, value: I) {
                O::for_each_byte(value, |byte| self.add_byte(byte));
            }

            /// Folds in each integer of `values` in turn, as [`add`](Self::add)
            /// would.
            pub fn add_all<I: Integral>(&mut self, values: impl IntoIterator<Item = I>) {
                for value in values {
                    self.add(value);
                }
            }
        }

        impl<O> Default for $name<O> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<O: ByteOrder, I: Integral> AddAssign<I> for $name<O> {
            fn add_assign(&mut self, value: I) {
                self.add(value);
            }
        }

        impl<O> Extend<u8> for $name<O> {
            fn extend<It: IntoIterator<Item = u8>>(&mut self, bytes: It) {
                self.add_bytes(bytes);
            }
        }

        impl<'a, O> Extend<&'a u8> for $name<O> {
            fn extend<It: IntoIterator<Item = &'a u8>>(&mut self, bytes: It) {
                self.add_bytes(bytes);
            }
        }

        impl<O> From<$name<O>> for $value {
            fn from(hasher: $name<O>) -> Self {
                hasher.hash
            }
        }

        // The integer writes are overridden so they split in `O`, not in
        // native byte order.
        impl<O: ByteOrder> core::hash::Hasher for $name<O> {
            fn finish(&self) -> u64 {
                u64::from(self.hash)
            }

            fn write(&mut self, bytes: &[u8]) {
                self.add_bytes(bytes);
            }

            ordered_writes!(
                write_u8: u8,
                write_u16: u16,
                write_u32: u32,
                write_u64: u64,
                write_u128: u128,
                write_usize: usize,
                write_i8: i8,
                write_i16: i16,
                write_i32: i32,
                write_i64: i64,
                write_i128: i128,
                write_isize: isize,
            );
        }
    };
}

fnv_hasher! {
    /// FNV-1, 32 bit: multiply, then XOR.
    Fnv1Hash32: u32, basis = 0x811C_9DC5, prime = 0x0100_0193,
    |hash, byte| hash.wrapping_mul(Self::PRIME) ^ byte
}

fnv_hasher! {
    /// FNV-1a, 32 bit: XOR, then multiply.
    Fnv1aHash32: u32, basis = 0x811C_9DC5, prime = 0x0100_0193,
    |hash, byte| (hash ^ byte).wrapping_mul(Self::PRIME)
}

fnv_hasher! {
    /// FNV-1, 64 bit: multiply, then XOR.
    Fnv1Hash64: u64, basis = 0xCBF2_9CE4_8422_2325, prime = 0x0000_0100_0000_01B3,
    |hash, byte| hash.wrapping_mul(Self::PRIME) ^ byte
}

fnv_hasher! {
    /// FNV-1a, 64 bit: XOR, then multiply.
    Fnv1aHash64: u64, basis = 0xCBF2_9CE4_8422_2325, prime = 0x0000_0100_0000_01B3,
    |hash, byte| (hash ^ byte).wrapping_mul(Self::PRIME)
}
