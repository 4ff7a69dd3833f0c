use itertools::Itertools;
use log::debug;

use super::coding::coding_regions_by_footprint;
use crate::data_structs::gene::GeneRecord;
use crate::data_structs::span::NamedSpan;
use crate::data_structs::typedef::PosType;
use crate::data_structs::RegionSet;
use crate::error::RegionError;

/// Name standing in for the chromosome boundary on terminal gaps.
pub const BOUNDARY_NAME: &str = "";

/// Gaps between coding footprints on a chromosome of length `chr_len`.
///
/// Each gap is named after both flanking footprints, left names first; the
/// gaps at the chromosome ends use [`BOUNDARY_NAME`] for the missing side.
/// Gaps extend `overlap` bases into their flanking footprints, so with
/// `overlap = 0` a gap starts right after one footprint and ends right before
/// the next. The leading gap always starts at 0 and the trailing one always
/// ends at `chr_len`.
///
/// Footprints closer than two bases leave no room for a gap: its bounds come
/// out inverted and are normalized like any other span. Abutting footprints
/// `[0, 9]` and `[10, 19]` therefore yield the gap `[9, 10]`, which covers the
/// last base of one and the first base of the other.
pub fn intergenic_regions_by_footprint(
    genes: &[GeneRecord],
    chr_len: PosType,
    overlap: PosType,
) -> Result<RegionSet, RegionError> {
    let footprints = coding_regions_by_footprint(genes)?.into_inner();
    // Non-empty: the footprint stage rejects an empty gene list.
    let (first, last) = match (footprints.first(), footprints.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(RegionError::EmptyGeneList),
    };

    let mut gaps = Vec::with_capacity(footprints.len() + 1);
    gaps.push(NamedSpan::new(
        0,
        first.start() + overlap - 1,
        std::iter::once(BOUNDARY_NAME).chain(first.names().iter().map(String::as_str)),
    ));

    for (prev, next) in footprints.iter().tuple_windows() {
        gaps.push(gap_between(prev, next, overlap));
    }

    gaps.push(NamedSpan::new(
        last.end() - overlap + 1,
        chr_len,
        last.names()
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(BOUNDARY_NAME)),
    ));

    debug!(
        "Derived {} intergenic regions from {} footprints",
        gaps.len(),
        footprints.len()
    );
    Ok(RegionSet::from(gaps))
}

fn gap_between(
    prev: &NamedSpan,
    next: &NamedSpan,
    overlap: PosType,
) -> NamedSpan {
    NamedSpan::new(
        prev.end() - overlap + 1,
        next.start() + overlap - 1,
        prev.names().iter().chain(next.names().iter()).cloned(),
    )
}
