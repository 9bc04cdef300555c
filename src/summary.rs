use crate::capability::{Addable, Classified, Divisible, Iterable, Numeric};
use crate::error::Result;
use crate::path::MeanOf;
use crate::{Aggregate, Max, Mean, Sum, Variance};

/// Descriptive summary of a non-empty sequence.
///
/// `M` is the mean type: the element type on the integral path, `f64` on
/// the floating path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary<T, M = f64> {
    /// Number of elements.
    pub count: usize,
    /// Sum of the elements.
    pub sum: T,
    /// Arithmetic mean.
    pub mean: M,
    /// Population variance.
    pub variance: f64,
    /// Largest element.
    pub max: T,
}

/// Aggregate producing a [`Summary`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Describe;

impl<D, T> Aggregate<D, T> for Describe
where
    D: Iterable<T> + ?Sized,
    T: Addable + Divisible + Classified + Numeric,
{
    type Output = Summary<T, MeanOf<T>>;

    fn compute(&self, data: &D) -> Result<Self::Output> {
        let (max, mean, sum, variance) =
            Aggregate::<D, T>::compute(&(Max, Mean, Sum, Variance::population()), data)?;
        Ok(Summary {
            count: data.as_ref().len(),
            sum,
            mean,
            variance,
            max,
        })
    }
}
