use crate::capability::{Iterable, Numeric};
use crate::error::{empty, Result};
use crate::Aggregate;

/// Largest element.
///
/// Seeded with the first element, then replaced only by a strictly greater
/// one, so ties keep the earlier value. A NaN never replaces the running
/// maximum.
///
/// ```
/// assert_eq!(numera::max(&[3, 9, 2, 7]), Ok(9));
/// ```
///
/// # Errors
/// [`NumericError::EmptyInput`](crate::NumericError::EmptyInput) on empty
/// input.
pub fn max<D, T>(data: &D) -> Result<T>
where
    D: Iterable<T> + ?Sized,
    T: Numeric,
{
    let Some((&first, rest)) = data.as_ref().split_first() else {
        return Err(empty("max"));
    };
    Ok(rest
        .iter()
        .fold(first, |best, &x| if x > best { x } else { best }))
}

/// Estimator form of [`max`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

impl<D, T> Aggregate<D, T> for Max
where
    D: Iterable<T> + ?Sized,
    T: Numeric,
{
    type Output = T;

    fn compute(&self, data: &D) -> Result<T> {
        max(data)
    }
}
