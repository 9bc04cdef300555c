use crate::error::Result;
use crate::Aggregate;

/// Owned, ordered sequence of observations.
///
/// Aggregations only ever read a `Sample`; it is never mutated by them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample<T> {
    /// Observations in insertion order.
    pub data: Vec<T>,
}

impl<T> Sample<T> {
    /// Create a new sample from raw data
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Get the number of observations in the sample
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the sample contains no observations
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Run an aggregation over the sample
    ///
    /// # Errors
    /// Propagates the aggregation's rejection of this sample.
    pub fn estimate<A>(&self, aggregate: A) -> Result<A::Output>
    where
        A: Aggregate<Self, T>,
    {
        aggregate.compute(self)
    }
}

impl<T> From<Vec<T>> for Sample<T> {
    fn from(data: Vec<T>) -> Self {
        Sample::new(data)
    }
}

impl<T> FromIterator<T> for Sample<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sample::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sample<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sample<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> AsRef<[T]> for Sample<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Max, Mean, NumericError, Sum, Variance};
    use approx::assert_abs_diff_eq;

    #[test]
    fn collects_from_iterators() {
        let sample: Sample<u32> = (1..=4).collect();
        assert_eq!(sample.len(), 4);
        assert!(!sample.is_empty());
        assert_eq!(sample, Sample::from(vec![1, 2, 3, 4]));
    }

    #[test]
    fn estimates_single_aggregates() {
        let sample = Sample::new(vec![3, 9, 2, 7]);
        assert_eq!(sample.estimate(Max), Ok(9));
        assert_eq!(sample.estimate(Sum), Ok(21));
        assert_eq!(sample.estimate(Mean), Ok(5));
    }

    #[test]
    fn estimates_composed_aggregates() {
        let sample = Sample::new(vec![1.0_f64, 2.0, 3.0, 4.0]);
        let (mean, variance) = sample.estimate((Mean, Variance::population())).unwrap();
        assert_abs_diff_eq!(mean, 2.5, epsilon = 1e-15);
        assert_abs_diff_eq!(variance, 1.25, epsilon = 1e-15);
    }

    #[test]
    fn empty_sample_is_rejected() {
        let sample: Sample<f64> = Sample::default();
        assert!(sample.is_empty());
        assert_eq!(
            sample.estimate(Mean),
            Err(NumericError::EmptyInput { operation: "mean" })
        );
    }

    #[test]
    fn is_left_untouched_by_aggregation() {
        let sample = Sample::new(vec![5_i64, 1, 4]);
        let before = sample.clone();
        let _ = sample.estimate((Sum, Mean, Variance::sample(), Max));
        assert_eq!(sample, before);
        assert_eq!((&sample).into_iter().copied().collect::<Vec<_>>(), vec![5, 1, 4]);
    }
}
