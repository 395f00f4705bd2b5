//! Stateless FNV hashing utilities for `no_std` code.
//!
//! - [`Fnv1Hash32`], [`Fnv1aHash32`], [`Fnv1Hash64`], [`Fnv1aHash64`] -
//!   incremental FNV-1 / FNV-1a accumulators, generic over the
//!   [`ByteOrder`] used to split integers
//! - [`WordHash`] - reduces a single scalar to a 32 bit, 64 bit or
//!   pointer-width hash
//!
//! None of these are suitable where collision resistance against an
//! adversary matters.
//!
//! # Examples
//!
//! ```
//! use quark_hash::{Fnv1Hash64, LittleEndian, WordHash};
//!
//! let mut hash = Fnv1Hash64::<LittleEndian>::new();
//! hash.add_bytes(b"123456789");
//! assert_eq!(hash.value(), 0xA72F_FC36_2BF9_16D6);
//!
//! assert_eq!(0x5AA5_55AA_3CC3_33CCu64.hash32(), 0xEC6A_8D69);
//! ```

#![cfg_attr(not(test), no_std)]

mod byte_order;
mod fnv;
mod word;

pub use byte_order::{BigEndian, ByteOrder, Integral, LittleEndian};
pub use fnv::{Fnv1Hash32, Fnv1Hash64, Fnv1aHash32, Fnv1aHash64};
pub use word::WordHash;
