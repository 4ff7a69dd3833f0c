//! Interval algebra over integer coordinates.
//!
//! - [`Span`]: an inclusive `[start, end]` interval with overlap, containment,
//!   intersection and join operations parameterised by a slack distance.
//! - [`NamedSpan`]: a span carrying an ordered list of names which are
//!   concatenated when spans are joined.
//! - [`join`], [`cover`] and [`complement`]: operations over collections of
//!   spans. Unlike the region pipeline, these accept empty input and return
//!   an empty result, `None` or the whole bound respectively.

mod algebra;
mod interval;
mod named;

pub use algebra::{
    complement,
    cover,
    join,
    Spanned,
};
pub use interval::Span;
pub use named::NamedSpan;
