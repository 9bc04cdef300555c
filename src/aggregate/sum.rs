use crate::capability::{Addable, Iterable};
use crate::error::Result;
use crate::path::accumulate;
use crate::Aggregate;

/// Sum of all elements in iteration order, starting from zero.
///
/// Overflow follows the native semantics of `T`.
///
/// ```
/// assert_eq!(numera::sum(&[1, 2, 3, 4]), 10);
/// ```
pub fn sum<D, T>(data: &D) -> T
where
    D: Iterable<T> + ?Sized,
    T: Addable,
{
    accumulate(data.as_ref())
}

/// Estimator form of [`sum`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

impl<D, T> Aggregate<D, T> for Sum
where
    D: Iterable<T> + ?Sized,
    T: Addable,
{
    type Output = T;

    fn compute(&self, data: &D) -> Result<T> {
        Ok(sum(data))
    }
}
