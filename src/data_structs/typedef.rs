use std::fmt::{
    Debug,
    Display,
};
use std::hash::Hash;

use num::{
    PrimInt,
    Signed,
};

/// Default coordinate type of spans and gene records.
pub type PosType = i64;

/// Bound for span coordinates.
///
/// Positions are signed: eroded intergenic gaps can reach `-1` before the
/// first base of a chromosome.
pub trait SpanPos:
    PrimInt + Signed + Hash + Display + Debug + Send + Sync {
}

impl<T> SpanPos for T where
    T: PrimInt + Signed + Hash + Display + Debug + Send + Sync
{
}
