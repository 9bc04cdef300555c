//! Aggregations over fixed-arity argument packs.
//!
//! A pack is written out at the call site, `mean_variadic!(0.1, 2, 3, 4)`,
//! and never becomes a runtime container. The macros expand into a fold
//! over the pack and check every argument against [`Numeric`] on its own.
//! An empty pack matches no macro rule.
//!
//! ```compile_fail
//! // Characters are not numeric scalars.
//! let _ = numera::sum_variadic!('a', 'b');
//! ```
//!
//! ```compile_fail
//! let _ = numera::mean_variadic!("a", "b");
//! ```
//!
//! ```compile_fail
//! // Addition never mixes types, so a mixed sum has no result type.
//! let _ = numera::sum_variadic!(0.5_f64, 1_i32, 2.5_f64);
//! ```
//!
//! ```compile_fail
//! let _ = numera::variance_variadic!();
//! ```

use std::ops::Add;

use num_traits::AsPrimitive;

use crate::capability::Numeric;

/// Sum of a pack, folded left to right with `+` over the argument types.
///
/// All arguments must share one numeric type.
///
/// ```
/// let total: i32 = numera::sum_variadic!(1, 2, 33, 4);
/// assert_eq!(total, 40);
/// ```
#[macro_export]
macro_rules! sum_variadic {
    ($first:expr $(,)?) => {
        $crate::variadic::numeric($first)
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::sum_variadic!($crate::variadic::add_pair($first, $second) $(, $rest)*)
    };
}

/// Mean of a pack with every argument widened to `f64`.
///
/// ```
/// let m = numera::mean_variadic!(1, 2, 3, 4);
/// assert_eq!(m, 2.5);
/// ```
#[macro_export]
macro_rules! mean_variadic {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::variadic::mean_pack(
            $crate::variadic::widen($first),
            [$($crate::variadic::widen($rest)),*],
        )
    };
}

/// Population variance of a pack with every argument widened to `f64`.
///
/// ```
/// let v = numera::variance_variadic!(1, 2, 3, 4);
/// assert_eq!(v, 1.25);
/// ```
#[macro_export]
macro_rules! variance_variadic {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::variadic::variance_pack(
            $crate::variadic::widen($first),
            [$($crate::variadic::widen($rest)),*],
        )
    };
}

/// Largest argument of a pack, folded left to right.
///
/// A later argument replaces the running maximum only when strictly
/// greater. Mixed argument types meet in their [`Promote`] type.
///
/// ```
/// let top: i32 = numera::max_variadic!(1, 2, 33, 4);
/// assert_eq!(top, 33);
///
/// let top: f64 = numera::max_variadic!(1_i32, 2.7_f64, 3_i32, 4_i32);
/// assert_eq!(top, 4.0);
/// ```
#[macro_export]
macro_rules! max_variadic {
    ($first:expr $(,)?) => {
        $crate::variadic::numeric($first)
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::max_variadic!($crate::variadic::max_pair($first, $second) $(, $rest)*)
    };
}

/// Admits `x` into a pack; the identity on numeric scalars.
#[inline(always)]
pub fn numeric<T: Numeric>(x: T) -> T {
    x
}

/// Admits `x` into a pack widened to `f64`.
#[inline(always)]
pub fn widen<T: Numeric>(x: T) -> f64 {
    x.as_()
}

/// One step of the left fold behind [`sum_variadic!`].
#[inline(always)]
pub fn add_pair<A, B>(acc: A, next: B) -> A
where
    A: Numeric + Add<B, Output = A>,
    B: Numeric,
{
    acc + next
}

/// One step of the left fold behind [`max_variadic!`].
#[inline(always)]
pub fn max_pair<A, B>(best: A, next: B) -> A::Output
where
    A: Promote<B>,
    B: Numeric,
{
    let best = best.promote();
    let next = A::promote_rhs(next);
    if next > best { next } else { best }
}

/// Mean of a pack of arity `N + 1`.
#[inline]
pub fn mean_pack<const N: usize>(first: f64, rest: [f64; N]) -> f64 {
    let total = rest.iter().fold(first, |acc, &x| acc + x);
    total / (N + 1) as f64
}

/// Population variance of a pack of arity `N + 1`.
#[inline]
pub fn variance_pack<const N: usize>(first: f64, rest: [f64; N]) -> f64 {
    let n = (N + 1) as f64;
    let mean = rest.iter().fold(first, |acc, &x| acc + x) / n;

    let d = first - mean;
    let total = rest.iter().fold(d * d, |acc, &x| {
        let d = x - mean;
        acc + d * d
    });
    total / n
}

/// Common type of two numeric scalars.
///
/// Two arguments of the same type stay in that type; any two different
/// types meet in `f64`.
pub trait Promote<Rhs: Numeric>: Numeric {
    /// The common type.
    type Output: Numeric;

    /// Converts the left operand.
    fn promote(self) -> Self::Output;

    /// Converts the right operand.
    fn promote_rhs(rhs: Rhs) -> Self::Output;
}

macro_rules! promote_same {
    ($($t:ty),* $(,)?) => {
        $(
            impl Promote<$t> for $t {
                type Output = $t;

                #[inline(always)]
                fn promote(self) -> $t {
                    self
                }

                #[inline(always)]
                fn promote_rhs(rhs: $t) -> $t {
                    rhs
                }
            }
        )*
    };
}

macro_rules! promote_mixed {
    () => {};
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $(
            impl Promote<$tail> for $head {
                type Output = f64;

                #[inline(always)]
                fn promote(self) -> f64 {
                    self.as_()
                }

                #[inline(always)]
                fn promote_rhs(rhs: $tail) -> f64 {
                    rhs.as_()
                }
            }

            impl Promote<$head> for $tail {
                type Output = f64;

                #[inline(always)]
                fn promote(self) -> f64 {
                    self.as_()
                }

                #[inline(always)]
                fn promote_rhs(rhs: $head) -> f64 {
                    rhs.as_()
                }
            }
        )*
        promote_mixed!($($tail),*);
    };
}

promote_same!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
promote_mixed!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn sum_of_integers() {
        let total: i32 = sum_variadic!(1, 2, 33, 4);
        assert_eq!(total, 40);
    }

    #[test]
    fn sum_of_floats() {
        let total: f64 = sum_variadic!(0.5, 1.0, 2.5);
        assert_abs_diff_eq!(total, 4.0, epsilon = 1e-15);
    }

    #[test]
    fn sum_of_one() {
        let total: u8 = sum_variadic!(7);
        assert_eq!(total, 7);
    }

    #[test]
    fn mean_of_mixed_pack() {
        assert_relative_eq!(mean_variadic!(0.1, 2, 3, 4), 2.275, epsilon = 1e-12);
        assert_abs_diff_eq!(mean_variadic!(1, 2, 3, 4), 2.5, epsilon = 1e-15);
        assert_abs_diff_eq!(mean_variadic!(5_u64), 5.0);
    }

    #[test]
    fn variance_of_packs() {
        assert_abs_diff_eq!(variance_variadic!(1, 2, 3, 4), 1.25, epsilon = 1e-15);
        assert_relative_eq!(variance_variadic!(0.1, 2, 3, 4), 2.076_875, epsilon = 1e-12);
        assert_abs_diff_eq!(variance_variadic!(9_i8, 9_u16, 9.0_f32), 0.0);
    }

    #[test]
    fn max_of_integers_keeps_type() {
        let top: i32 = max_variadic!(1, 2, 33, 4);
        assert_eq!(top, 33);
        let top: u64 = max_variadic!(3_u64);
        assert_eq!(top, 3);
    }

    #[test]
    fn max_of_mixed_pack_widens() {
        let top: f64 = max_variadic!(1_i32, 2.7_f64, 3_i32, 4_i32);
        assert_abs_diff_eq!(top, 4.0);
        let top: f64 = max_variadic!(1_u8, 2.5_f32);
        assert_abs_diff_eq!(top, 2.5);
    }

    #[test]
    fn max_ties_keep_the_running_value() {
        let top = max_pair(0.0_f64, -0.0_f64);
        assert!(top.is_sign_positive());
        let top = max_pair(-0.0_f64, 0.0_f64);
        assert!(top.is_sign_negative());
    }

    #[test]
    fn packs_agree_with_collections() {
        let data = [0.1, 2.0, 3.0, 4.0];
        assert_relative_eq!(
            mean_variadic!(0.1, 2.0, 3.0, 4.0),
            crate::mean(&data).unwrap(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            variance_variadic!(0.1, 2.0, 3.0, 4.0),
            crate::variance(&data).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn pack_helpers_use_compile_time_arity() {
        assert_abs_diff_eq!(mean_pack(4.0, []), 4.0);
        assert_abs_diff_eq!(mean_pack(1.0, [2.0, 3.0]), 2.0);
        assert_abs_diff_eq!(variance_pack(1.0, [3.0]), 1.0);
    }
}
