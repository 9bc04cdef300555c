//! Integral and floating computation paths.
//!
//! An element type picks its path through [`Classified`](crate::Classified).
//! The paths are separate on purpose: the integral mean keeps the element
//! type and truncates, the floating mean widens every element to `f64`.

use num_traits::AsPrimitive;

use crate::capability::{Addable, Divisible};
use crate::error::Result;

/// Mean computations for one category of element type.
///
/// Callers guarantee `values` is non-empty.
pub trait Path<T> {
    /// Output type of [`Path::mean`].
    type Mean;

    /// Arithmetic mean in the path's own precision.
    fn mean(values: &[T]) -> Result<Self::Mean>;

    /// Arithmetic mean in double precision, used as the variance center.
    fn center(values: &[T]) -> f64;
}

/// Exact accumulation in the element type, truncating division by count.
#[derive(Debug, Clone, Copy)]
pub enum Integral {}

/// Accumulation with every element widened to `f64`.
#[derive(Debug, Clone, Copy)]
pub enum Floating {}

/// Mean output type for element type `T`.
pub type MeanOf<T> = <<T as crate::Classified>::Path as Path<T>>::Mean;

impl<T> Path<T> for Integral
where
    T: Addable + Divisible + AsPrimitive<f64>,
{
    type Mean = T;

    #[inline]
    fn mean(values: &[T]) -> Result<T> {
        accumulate(values).div_count(values.len())
    }

    #[inline]
    fn center(values: &[T]) -> f64 {
        AsPrimitive::<f64>::as_(accumulate(values)) / values.len() as f64
    }
}

impl<T> Path<T> for Floating
where
    T: AsPrimitive<f64>,
{
    type Mean = f64;

    #[inline]
    fn mean(values: &[T]) -> Result<f64> {
        Ok(widened_mean(values))
    }

    #[inline]
    fn center(values: &[T]) -> f64 {
        widened_mean(values)
    }
}

/// Left fold by `+` from the additive identity.
#[inline]
pub(crate) fn accumulate<T: Addable>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &x| acc + x)
}

#[inline]
pub(crate) fn widened_mean<T: AsPrimitive<f64>>(values: &[T]) -> f64 {
    let total: f64 = values.iter().map(|&x| AsPrimitive::<f64>::as_(x)).sum();
    total / values.len() as f64
}

/// Population sum of squared deviations from `center`, in `f64`.
#[inline]
pub(crate) fn squared_deviations<T: AsPrimitive<f64>>(values: &[T], center: f64) -> f64 {
    values
        .iter()
        .map(|&x| {
            let d = AsPrimitive::<f64>::as_(x) - center;
            d * d
        })
        .sum()
}
