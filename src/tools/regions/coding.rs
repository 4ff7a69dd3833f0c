use log::debug;

use super::check_records;
use crate::data_structs::gene::GeneRecord;
use crate::data_structs::span::join;
use crate::data_structs::RegionSet;
use crate::error::RegionError;

/// One region per gene, named after the gene. Overlapping genes are kept
/// apart.
pub fn coding_regions_by_gene(
    genes: &[GeneRecord]
) -> Result<RegionSet, RegionError> {
    check_records(genes)?;
    Ok(genes.iter().map(GeneRecord::coding_span).collect())
}

/// Continuous coding footprints: genes sharing at least one position are
/// merged, and the merged region lists every contributing gene.
pub fn coding_regions_by_footprint(
    genes: &[GeneRecord]
) -> Result<RegionSet, RegionError> {
    let by_gene = coding_regions_by_gene(genes)?;
    let footprints = join(by_gene, 0);
    debug!(
        "Merged {} genes into {} coding footprints",
        genes.len(),
        footprints.len()
    );
    Ok(RegionSet::from(footprints))
}
