//! Capability predicates.
//!
//! Every aggregation states what it needs from its element type through the
//! traits in this module. A type that lacks a capability cannot instantiate
//! the operation at all: the call is rejected by the type checker, before
//! any value is read.
//!
//! | Trait          | Needed by                               |
//! |----------------|-----------------------------------------|
//! | [`Iterable`]   | every collection operation              |
//! | [`Addable`]    | `sum`, `variance`                       |
//! | [`Divisible`]  | `mean`                                  |
//! | [`Numeric`]    | `max`, every argument of a variadic pack |
//!
//! ```compile_fail
//! // `String + String` is not defined, so there is no sum of strings.
//! let words = vec![String::from("a"), String::from("bb")];
//! let _ = numera::sum(&words);
//! ```
//!
//! ```compile_fail
//! // Strings cannot be divided by an element count.
//! let words = vec![String::from("a"), String::from("bb")];
//! let _ = numera::mean(&words);
//! ```
//!
//! ```compile_fail
//! // Characters are ordered, but they are not numeric scalars.
//! let letters = vec!['a', 'z'];
//! let _ = numera::max(&letters);
//! ```

use std::ops::Add;

use num_traits::{AsPrimitive, FromPrimitive, Zero};

use crate::error::{NumericError, Result};
use crate::path::{Floating, Integral, Path};

/// Ordered, finite sequence of `T` with a known length and positional access.
///
/// Anything viewable as a slice qualifies: `Vec<T>`, `[T; N]`, `[T]`,
/// [`Sample<T>`](crate::Sample).
pub trait Iterable<T>: AsRef<[T]> {}

impl<T, D> Iterable<T> for D where D: AsRef<[T]> + ?Sized {}

/// `T + T` is defined and yields exactly `T`, starting from an additive
/// identity.
pub trait Addable: Add<Self, Output = Self> + Zero + Copy {}

impl<T> Addable for T where T: Add<T, Output = T> + Zero + Copy {}

/// `T` divided by an element count is again a `T`.
pub trait Divisible: Sized {
    /// Divides `self` by `count` using the native division of `Self`.
    ///
    /// Integer types truncate toward zero. Fails with
    /// [`NumericError::CountOverflow`] when `count` is not representable in
    /// `Self`.
    ///
    /// # Panics
    /// Integer types panic when `count` is zero, like native division.
    fn div_count(self, count: usize) -> Result<Self>;
}

/// Arithmetic scalar that is not a character or boolean.
///
/// Sealed: implemented for the primitive integer and floating-point types
/// only.
pub trait Numeric: Copy + PartialOrd + AsPrimitive<f64> + sealed::Sealed {}

/// Associates an element type with the computation path used for it.
pub trait Classified: Copy + AsPrimitive<f64> {
    /// [`Integral`] or [`Floating`].
    type Path: Path<Self>;
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! integral {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Numeric for $t {}

            impl Classified for $t {
                type Path = Integral;
            }

            impl Divisible for $t {
                #[inline]
                fn div_count(self, count: usize) -> Result<Self> {
                    let n = <$t as FromPrimitive>::from_usize(count).ok_or_else(|| {
                        tracing::trace!(count, "element count overflows element type");
                        NumericError::CountOverflow { count }
                    })?;
                    Ok(self / n)
                }
            }
        )*
    };
}

macro_rules! floating {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Numeric for $t {}

            impl Classified for $t {
                type Path = Floating;
            }

            impl Divisible for $t {
                #[inline]
                fn div_count(self, count: usize) -> Result<Self> {
                    Ok(self / count as $t)
                }
            }
        )*
    };
}

integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
floating!(f32, f64);
