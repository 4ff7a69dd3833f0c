//! # genespan
//!
//! `genespan` is a Rust library for turning gene coordinate tables into
//! higher-level genomic region sets. It is built on a small interval algebra
//! and derives, for one chromosome at a time:
//!
//! * per-gene coding regions,
//! * merged coding footprints,
//! * intergenic gaps named after their flanking genes,
//! * putative operons (runs of nearby genes on the same strand),
//! * putative promoters (the gap upstream of each operon, taking its strand
//!   into account).
//!
//! The crate only works with integer coordinates and name tags. Reading gene
//! tables, extracting sequence and looking up alignments are left to the
//! caller, which feeds the `(start, end)` pairs of the derived regions back
//! into its own sequence or alignment store.
//!
//! Number of threads used by [`RegionPipeline::derive_many`] can be
//! configured with the `GENESPAN_NUM_THREADS` environment variable.
//!
//! ## Structure
//!
//! * [`data_structs`]: spans and their algebra ([`Span`], [`NamedSpan`],
//!   [`join`], [`cover`], [`complement`]), gene records ([`GeneRecord`],
//!   [`GeneTable`]) and region collections ([`RegionSet`]).
//! * [`tools`]: the region derivation stages and [`RegionPipeline`].
//! * [`error`]: [`SpanError`] and [`RegionError`].
//! * [`utils`]: the thread pool and helper macros.
//!
//! ## Usage
//!
//! ```
//! use genespan::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let genes = vec![
//!         GeneRecord::new(10, 20, Strand::Forward, "g1", "s1")?,
//!         GeneRecord::new(15, 25, Strand::Forward, "g2", "s2")?,
//!         GeneRecord::new(100, 110, Strand::Reverse, "g3", "s3")?,
//!     ];
//!     let table = GeneTable::try_new(genes, 200)?;
//!
//!     let pipeline = RegionPipeline::new(RegionConfig::default())?;
//!     let regions = pipeline.derive_all(&table)?;
//!
//!     for (start, end, names) in regions.intergenic.iter() {
//!         println!("{}-{}: {}", start, end, names.join(","));
//!     }
//!     assert_eq!(regions.coding_by_footprint.len(), 2);
//!     assert_eq!(regions.operons.len(), 2);
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod error;
pub mod prelude;
pub mod tools;
pub mod utils;

#[allow(unused_imports)]
use prelude::*;
