use log::debug;
use serde::Serialize;

use super::check_records;
use crate::data_structs::Strand;
use crate::data_structs::gene::GeneRecord;
use crate::data_structs::span::{
    NamedSpan,
    Span,
    Spanned,
};
use crate::data_structs::typedef::PosType;
use crate::error::RegionError;

/// A run of consecutive same-strand genes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Operon {
    span:   NamedSpan,
    strand: Strand,
}

impl Operon {
    pub fn new(
        span: NamedSpan,
        strand: Strand,
    ) -> Self {
        Self { span, strand }
    }

    pub fn named_span(&self) -> &NamedSpan {
        &self.span
    }

    pub fn span(&self) -> Span {
        self.span.span()
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn start(&self) -> PosType {
        self.span.start()
    }

    pub fn end(&self) -> PosType {
        self.span.end()
    }

    pub fn names(&self) -> &[String] {
        self.span.names()
    }

    pub fn into_parts(self) -> (NamedSpan, Strand) {
        (self.span, self.strand)
    }
}

/// Putative operons: maximal runs of consecutive genes on the same strand
/// separated by at most `overlap` bases.
///
/// Genes are scanned in the given order and never re-sorted. Operons are
/// named with [`GeneRecord::label`] of every member.
pub fn putative_operons(
    genes: &[GeneRecord],
    overlap: PosType,
) -> Result<Vec<Operon>, RegionError> {
    let operons = scan_operons(genes, overlap)?;
    debug!(
        "Grouped {} genes into {} putative operons",
        genes.len(),
        operons.len()
    );
    Ok(operons)
}

/// Left-to-right operon scan shared by the operon and promoter stages.
///
/// Spans are inclusive, so genes separated by `overlap` bases lie
/// `overlap + 1` apart: that is the slack passed to the overlap test.
pub(crate) fn scan_operons(
    genes: &[GeneRecord],
    overlap: PosType,
) -> Result<Vec<Operon>, RegionError> {
    check_records(genes)?;
    let slack = overlap + 1;

    let mut iter = genes.iter();
    let first = iter.next().ok_or(RegionError::EmptyGeneList)?;
    let mut current = first.labeled_span();
    let mut strand = first.strand();
    let mut operons = Vec::new();

    for gene in iter {
        let span = gene.labeled_span();
        if gene.strand() == strand && current.span().overlaps(&span.span(), slack)
        {
            current = current.join(&span, slack)?;
        }
        else {
            operons.push(Operon::new(current, strand));
            current = span;
            strand = gene.strand();
        }
    }
    operons.push(Operon::new(current, strand));

    Ok(operons)
}
