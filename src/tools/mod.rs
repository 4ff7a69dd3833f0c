//! Higher-level tools built on the span algebra.
//!
//! - [`regions`]: derivation of coding footprints, intergenic gaps, putative
//!   operons and putative promoters from gene coordinate records.
pub mod regions;
