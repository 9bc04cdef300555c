//! Generic numeric aggregations over collections and fixed-arity argument
//! packs.
//!
//! Every operation is gated by the [capability traits](capability) of its
//! element type. The element type also selects one of two
//! [computation paths](path): integral types accumulate exactly and divide
//! with truncation, floating types accumulate in `f64`.
//!
//! ```
//! use numera::{mean, sum, variance, max_variadic, Aggregate, Max, Mean, Sum};
//!
//! let data = vec![1_i32, 2, 3, 4];
//! assert_eq!(sum(&data), 10);
//! assert_eq!(mean(&data), Ok(2));
//! assert_eq!(variance(&data), Ok(1.25));
//! assert_eq!((Sum, Mean, Max).compute(&data), Ok((10, 2, 4)));
//! let top: i32 = max_variadic!(1, 2, 33, 4);
//! assert_eq!(top, 33);
//! ```

pub mod capability;
pub mod path;
pub mod variadic;

mod aggregate;
mod display;
mod error;
mod sample;
mod summary;

pub use crate::aggregate::*;
pub use crate::capability::{Addable, Classified, Divisible, Iterable, Numeric};
pub use crate::error::{NumericError, Result};
pub use crate::path::MeanOf;
pub use crate::sample::Sample;
pub use crate::summary::{Describe, Summary};

/// An aggregation over a sequence of `T` held by `D`.
///
/// Tuples of aggregates are aggregates too and return the tuple of their
/// members' outputs.
pub trait Aggregate<D: ?Sized, T> {
    /// Value produced by the aggregation.
    type Output;

    /// Runs the aggregation over `data`.
    ///
    /// # Errors
    /// Whatever the aggregation rejects, before any accumulation starts.
    fn compute(&self, data: &D) -> Result<Self::Output>;
}
