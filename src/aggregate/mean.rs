use crate::capability::{Classified, Divisible, Iterable};
use crate::error::{empty, Result};
use crate::path::{MeanOf, Path};
use crate::Aggregate;

/// Arithmetic mean.
///
/// Integral elements are summed in `T` and divided by the count with the
/// truncating division of `T`, returning `T`. Floating elements are each
/// widened to `f64`, summed, and divided by the count, returning `f64`.
///
/// ```
/// assert_eq!(numera::mean(&[1, 2, 3, 4]), Ok(2));
/// assert_eq!(numera::mean(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
/// ```
///
/// # Errors
/// [`NumericError::EmptyInput`](crate::NumericError::EmptyInput) on empty
/// input, [`NumericError::CountOverflow`](crate::NumericError::CountOverflow)
/// when an integral element type cannot hold the element count.
pub fn mean<D, T>(data: &D) -> Result<MeanOf<T>>
where
    D: Iterable<T> + ?Sized,
    T: Divisible + Classified,
{
    let values = data.as_ref();
    if values.is_empty() {
        return Err(empty("mean"));
    }
    <T::Path as Path<T>>::mean(values)
}

/// Estimator form of [`mean`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl<D, T> Aggregate<D, T> for Mean
where
    D: Iterable<T> + ?Sized,
    T: Divisible + Classified,
{
    type Output = MeanOf<T>;

    fn compute(&self, data: &D) -> Result<MeanOf<T>> {
        mean(data)
    }
}
