//! This module contains the core data structures of the `genespan` crate.
//!
//! - [`span`]: the interval algebra, [`Span`], [`NamedSpan`] and the `join`,
//!   `cover` and `complement` operations over collections of spans.
//! - [`gene`]: [`GeneRecord`], one row of a gene coordinate table, and
//!   [`GeneTable`], the records of one chromosome with a synonym lookup.
//! - [`RegionSet`] and [`RegionIndex`]: ordered collections of named regions
//!   returned by the region pipeline, and an interval index over them.
//! - [`Strand`] of gene records.
//! - [`typedef`]: coordinate types shared across the crate.

mod enums;
pub mod gene;
mod region_set;
pub mod span;
pub mod typedef;


pub use enums::Strand;
pub use gene::{
    GeneRecord,
    GeneTable,
};
pub use region_set::{
    RegionIndex,
    RegionSet,
};
pub use span::{
    NamedSpan,
    Span,
};
