mod max;
mod mean;
mod sum;
mod transform;
mod variance;

pub use max::{max, Max};
pub use mean::{mean, Mean};
pub use sum::{sum, Sum};
pub use transform::{transform_reduce, TransformReduce};
pub use variance::{variance, Variance};

use crate::error::Result;
use crate::Aggregate;

// ===== 0-tuple: nothing to compute =====
impl<D: ?Sized, T> Aggregate<D, T> for () {
    type Output = ();

    #[inline]
    fn compute(&self, _data: &D) -> Result<()> {
        Ok(())
    }
}

// Tuples compute left to right; the first failure wins.
macro_rules! tuple_aggregate {
    ($($a:ident . $idx:tt),+) => {
        impl<D: ?Sized, T, $($a),+> Aggregate<D, T> for ($($a,)+)
        where
            $($a: Aggregate<D, T>,)+
        {
            type Output = ($(<$a as Aggregate<D, T>>::Output,)+);

            #[inline]
            fn compute(&self, data: &D) -> Result<Self::Output> {
                Ok(($(self.$idx.compute(data)?,)+))
            }
        }
    };
}

tuple_aggregate!(A.0);
tuple_aggregate!(A.0, B.1);
tuple_aggregate!(A.0, B.1, C.2);
tuple_aggregate!(A.0, B.1, C.2, E.3);
tuple_aggregate!(A.0, B.1, C.2, E.3, F.4);
tuple_aggregate!(A.0, B.1, C.2, E.3, F.4, G.5);
