use itertools::Itertools;
use rust_lapper::{
    Interval,
    Lapper,
};
use serde::Serialize;

use crate::data_structs::span::{
    NamedSpan,
    Span,
};
use crate::data_structs::typedef::PosType;

/// Ordered collection of named regions produced by one pipeline stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegionSet {
    spans: Vec<NamedSpan>,
}

impl From<Vec<NamedSpan>> for RegionSet {
    fn from(value: Vec<NamedSpan>) -> Self {
        Self { spans: value }
    }
}

impl FromIterator<NamedSpan> for RegionSet {
    fn from_iter<T: IntoIterator<Item = NamedSpan>>(iter: T) -> Self {
        Self {
            spans: iter.into_iter().collect(),
        }
    }
}

impl RegionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spans(&self) -> &[NamedSpan] {
        &self.spans
    }

    pub fn into_inner(self) -> Vec<NamedSpan> {
        self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Iterates over `(start, end, names)` of every region.
    pub fn iter(
        &self
    ) -> impl Iterator<Item = (PosType, PosType, &[String])> + '_ {
        self.spans
            .iter()
            .map(|s| (s.start(), s.end(), s.names()))
    }

    /// Converts the regions to BED records on `chrom`.
    ///
    /// BED intervals are half-open, so ends are shifted by one. Regions
    /// starting before the chromosome are clipped at 0. Names are joined with
    /// `,`.
    pub fn to_bed_records(
        &self,
        chrom: &str,
    ) -> Vec<bio::io::bed::Record> {
        self.spans
            .iter()
            .map(|span| {
                let (start, stop) = half_open(span.start(), span.end());
                let mut record = bio::io::bed::Record::new();
                record.set_chrom(chrom);
                record.set_start(start);
                record.set_end(stop);
                record.set_name(span.names().iter().join(",").as_str());
                record
            })
            .collect()
    }

    /// Builds an interval index over the regions.
    pub fn index(&self) -> RegionIndex<'_> {
        let intervals = self
            .spans
            .iter()
            .enumerate()
            .map(|(idx, span)| {
                let (start, stop) = half_open(span.start(), span.end());
                Interval {
                    start,
                    stop,
                    val: idx,
                }
            })
            .collect_vec();
        RegionIndex {
            lapper:  Lapper::new(intervals),
            regions: &self.spans,
        }
    }
}

impl IntoIterator for RegionSet {
    type IntoIter = std::vec::IntoIter<NamedSpan>;
    type Item = NamedSpan;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.into_iter()
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type IntoIter = std::slice::Iter<'a, NamedSpan>;
    type Item = &'a NamedSpan;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

/// Interval index answering which regions of a [`RegionSet`] overlap a query.
pub struct RegionIndex<'a> {
    lapper:  Lapper<u64, usize>,
    regions: &'a [NamedSpan],
}

impl<'a> RegionIndex<'a> {
    /// Returns the regions sharing at least one position with the 0-based
    /// inclusive query `[start, end]`, in region order.
    pub fn find(
        &self,
        start: PosType,
        end: PosType,
    ) -> Vec<&'a NamedSpan> {
        let query = Span::new(start, end);
        let (start, stop) = half_open(query.start(), query.end());
        self.lapper
            .find(start, stop)
            .map(|interval| interval.val)
            .sorted()
            .map(|idx| &self.regions[idx])
            .collect()
    }

    /// Number of regions overlapping the query.
    pub fn count(
        &self,
        start: PosType,
        end: PosType,
    ) -> usize {
        self.find(start, end).len()
    }

    pub fn len(&self) -> usize {
        self.lapper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lapper.is_empty()
    }
}

/// Converts an inclusive span to half-open unsigned bounds, clipping at 0.
fn half_open(
    start: PosType,
    end: PosType,
) -> (u64, u64) {
    let start = start.max(0) as u64;
    let stop = (end + 1).max(0) as u64;
    (start, stop.max(start))
}
