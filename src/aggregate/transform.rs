use std::ops::AddAssign;

use num_traits::Zero;

use crate::capability::Iterable;
use crate::error::Result;
use crate::Aggregate;

/// Sum of `transform(x)` over all elements, in order, starting from zero.
///
/// The accumulator type is whatever `transform` returns; it must support
/// `+=` and have a zero.
///
/// ```
/// let r = numera::transform_reduce(&[1.0, 2.0, 3.0], |x: &f64| x * x);
/// assert_eq!(r, 14.0);
/// ```
pub fn transform_reduce<D, T, R, F>(data: &D, mut transform: F) -> R
where
    D: Iterable<T> + ?Sized,
    F: FnMut(&T) -> R,
    R: Zero + AddAssign,
{
    let mut total = R::zero();
    for x in data.as_ref() {
        total += transform(x);
    }
    total
}

/// Estimator form of [`transform_reduce`], holding the transform.
#[derive(Debug, Clone, Copy)]
pub struct TransformReduce<F>(pub F);

impl<D, T, R, F> Aggregate<D, T> for TransformReduce<F>
where
    D: Iterable<T> + ?Sized,
    F: Fn(&T) -> R,
    R: Zero + AddAssign,
{
    type Output = R;

    fn compute(&self, data: &D) -> Result<R> {
        Ok(transform_reduce(data, &self.0))
    }
}
