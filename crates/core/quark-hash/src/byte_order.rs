//! Byte order used when an integer wider than a byte is fed to a hasher.

mod sealed {
    pub trait Sealed {}
}

/// Splits primitive integers into bytes in a fixed order.
pub trait ByteOrder: sealed::Sealed {
    /// Calls `f` once per byte of `value`, in this byte order.
    fn for_each_byte<I: Integral>(value: I, f: impl FnMut(u8));
}

/// Least significant byte first. The default for every hasher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LittleEndian;

/// Most significant byte first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BigEndian;

impl sealed::Sealed for LittleEndian {}
impl sealed::Sealed for BigEndian {}

impl ByteOrder for LittleEndian {
    fn for_each_byte<I: Integral>(value: I, f: impl FnMut(u8)) {
        value.le_bytes().as_ref().iter().copied().for_each(f);
    }
}

impl ByteOrder for BigEndian {
    fn for_each_byte<I: Integral>(value: I, f: impl FnMut(u8)) {
        value.le_bytes().as_ref().iter().rev().copied().for_each(f);
    }
}

/// A primitive integer that can be fed to a hasher byte by byte.
pub trait Integral: Copy + sealed::Sealed {
    /// Fixed-size byte array holding the value.
    type Bytes: AsRef<[u8]>;

    /// The value's little-endian bytes.
    fn le_bytes(self) -> Self::Bytes;
}

macro_rules! integral {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Integral for $ty {
                type Bytes = [u8; core::mem::size_of::<$ty>()];

                #[inline]
                fn le_bytes(self) -> Self::Bytes {
                    self.to_le_bytes()
                }
            }
        )*
    };
}

integral!(u8, u16, u32, u64, u128, usize);
integral!(i8, i16, i32, i64, i128, isize);

impl<I: Integral> sealed::Sealed for &I {}

impl<I: Integral> Integral for &I {
    type Bytes = I::Bytes;

    #[inline]
    fn le_bytes(self) -> Self::Bytes {
        (*self).le_bytes()
    }
}
