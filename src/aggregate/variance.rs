use crate::capability::{Addable, Classified, Iterable};
use crate::error::{empty, NumericError, Result};
use crate::path::{squared_deviations, Path};
use crate::Aggregate;

/// Population variance, `(1/n) · Σ (xᵢ - x̄)²`, computed in `f64`.
///
/// Makes two passes over the data: one for the mean, one for the squared
/// deviations. Integral elements find the mean from their exact sum,
/// floating elements from a double-precision accumulation.
///
/// ```
/// assert_eq!(numera::variance(&[1, 2, 3, 4]), Ok(1.25));
/// ```
///
/// # Errors
/// [`NumericError::EmptyInput`] on empty input.
pub fn variance<D, T>(data: &D) -> Result<f64>
where
    D: Iterable<T> + ?Sized,
    T: Addable + Classified,
{
    spread(data.as_ref(), 0)
}

fn spread<T>(values: &[T], ddof: usize) -> Result<f64>
where
    T: Addable + Classified,
{
    let n = values.len();
    if n == 0 {
        return Err(empty("variance"));
    }
    if ddof >= n {
        tracing::trace!(count = n, ddof, "no degrees of freedom left");
        return Err(NumericError::DegreesOfFreedom { count: n, ddof });
    }

    let center = <T::Path as Path<T>>::center(values);
    let total = squared_deviations(values, center);
    Ok(total / (n - ddof) as f64)
}

/// Variance estimator with a delta degrees of freedom adjustment.
///
/// The divisor is `n - ddof`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variance {
    /// Delta degrees of freedom.
    pub ddof: usize,
}

impl Variance {
    /// Creates a `Variance` estimator with the given `ddof`.
    pub fn new(ddof: usize) -> Self {
        Variance { ddof }
    }

    /// `ddof = 0`: the population variance, same as [`variance`].
    pub fn population() -> Self {
        Variance { ddof: 0 }
    }

    /// `ddof = 1`: the sample variance with Bessel's correction.
    pub fn sample() -> Self {
        Variance { ddof: 1 }
    }
}

impl Default for Variance {
    /// Population variance.
    fn default() -> Self {
        Variance::population()
    }
}

impl<D, T> Aggregate<D, T> for Variance
where
    D: Iterable<T> + ?Sized,
    T: Addable + Classified,
{
    type Output = f64;

    fn compute(&self, data: &D) -> Result<f64> {
        spread(data.as_ref(), self.ddof)
    }
}
