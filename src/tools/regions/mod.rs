//! Derivation of region sets from gene coordinate records.
//!
//! Every stage takes the gene records of one chromosome, in ascending start
//! order, and returns a freshly built collection:
//!
//! - [`coding_regions_by_gene`]: one region per gene.
//! - [`coding_regions_by_footprint`]: overlapping genes merged into
//!   footprints.
//! - [`intergenic_regions_by_footprint`]: gaps between footprints, named after
//!   both neighbours.
//! - [`putative_operons`]: strand-aware runs of nearby genes.
//! - [`putative_promoters`]: the gap upstream of each operon, with direction
//!   taken from the operon strand.
//!
//! Gene records are 1-based inclusive; all stages work on the 0-based
//! inclusive span `[start - 1, end - 1]` of each record. Every stage rejects an
//! empty gene list with [`RegionError::EmptyGeneList`].
//!
//! [`RegionPipeline`] bundles the stages with a [`RegionConfig`] and runs them
//! for one or many gene tables.

mod coding;
mod config;
mod intergenic;
mod operons;
mod promoters;

#[cfg(test)]
mod tests;

pub use coding::{
    coding_regions_by_footprint,
    coding_regions_by_gene,
};
pub use config::RegionConfig;
pub use intergenic::{
    intergenic_regions_by_footprint,
    BOUNDARY_NAME,
};
pub use operons::{
    putative_operons,
    Operon,
};
pub use promoters::{
    putative_promoters,
    PromoterAssigner,
    PromoterClaim,
};

use log::{
    debug,
    info,
};
use rayon::prelude::*;
use serde::Serialize;

use crate::data_structs::gene::{
    GeneRecord,
    GeneTable,
};
use crate::data_structs::RegionSet;
use crate::error::RegionError;
use crate::getter_fn;
use crate::utils::{
    n_threads,
    THREAD_POOL,
};

/// Rejects empty gene lists and malformed records.
pub(crate) fn check_records(genes: &[GeneRecord]) -> Result<(), RegionError> {
    if genes.is_empty() {
        return Err(RegionError::EmptyGeneList);
    }
    genes.iter().try_for_each(GeneRecord::validate)
}

/// Output of every region stage for one gene table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedRegions {
    pub coding_by_gene:      RegionSet,
    pub coding_by_footprint: RegionSet,
    pub intergenic:          RegionSet,
    pub operons:             Vec<Operon>,
    pub promoters:           RegionSet,
}

/// Region stages configured with one set of tolerances.
#[derive(Debug, Clone, Default)]
pub struct RegionPipeline {
    config: RegionConfig,
}

impl RegionPipeline {
    getter_fn!(config, RegionConfig);

    /// Creates a pipeline, rejecting negative tolerances.
    pub fn new(config: RegionConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn coding_by_gene(
        &self,
        table: &GeneTable,
    ) -> Result<RegionSet, RegionError> {
        coding_regions_by_gene(table.records())
    }

    pub fn coding_by_footprint(
        &self,
        table: &GeneTable,
    ) -> Result<RegionSet, RegionError> {
        coding_regions_by_footprint(table.records())
    }

    pub fn intergenic(
        &self,
        table: &GeneTable,
    ) -> Result<RegionSet, RegionError> {
        intergenic_regions_by_footprint(
            table.records(),
            table.chr_len(),
            self.config.intergenic_overlap,
        )
    }

    pub fn operons(
        &self,
        table: &GeneTable,
    ) -> Result<Vec<Operon>, RegionError> {
        putative_operons(table.records(), self.config.operon_overlap)
    }

    pub fn promoters(
        &self,
        table: &GeneTable,
    ) -> Result<RegionSet, RegionError> {
        putative_promoters(
            table.records(),
            table.chr_len(),
            self.config.coding_overlap,
            self.config.nc_overlap,
        )
    }

    /// Runs every stage on `table`. Fails on the first failing stage.
    pub fn derive_all(
        &self,
        table: &GeneTable,
    ) -> Result<DerivedRegions, RegionError> {
        let regions = DerivedRegions {
            coding_by_gene:      self.coding_by_gene(table)?,
            coding_by_footprint: self.coding_by_footprint(table)?,
            intergenic:          self.intergenic(table)?,
            operons:             self.operons(table)?,
            promoters:           self.promoters(table)?,
        };
        debug!(
            "Derived regions for {} genes: {} footprints, {} operons, {} \
             promoters",
            table.len(),
            regions.coding_by_footprint.len(),
            regions.operons.len(),
            regions.promoters.len()
        );
        Ok(regions)
    }

    /// Runs [`RegionPipeline::derive_all`] on independent tables in parallel.
    ///
    /// Results keep the order of `tables`.
    pub fn derive_many(
        &self,
        tables: &[GeneTable],
    ) -> Vec<Result<DerivedRegions, RegionError>> {
        info!(
            "Deriving regions for {} gene tables on {} threads",
            tables.len(),
            n_threads()
        );
        THREAD_POOL.install(|| {
            tables
                .par_iter()
                .map(|table| self.derive_all(table))
                .collect()
        })
    }
}
