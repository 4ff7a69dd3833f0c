use log::{
    debug,
    trace,
};

use super::operons::{
    scan_operons,
    Operon,
};
use crate::data_structs::Strand;
use crate::data_structs::gene::GeneRecord;
use crate::data_structs::span::NamedSpan;
use crate::data_structs::typedef::PosType;
use crate::data_structs::RegionSet;
use crate::error::RegionError;

/// Claim on the gap following the last processed operon.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PromoterClaim {
    /// No operon waits for the next gap.
    #[default]
    Unclaimed,
    /// A reverse-strand operon, named as given, owns the next gap.
    Pending(Vec<String>),
}

/// Walks operons in order and assigns them the gaps their promoters lie in.
///
/// A forward operon owns the gap before it. A reverse operon owns the gap
/// after it, which is only known once the next operon, or the chromosome
/// end, is reached. A gap between a reverse and a forward operon is owned by
/// both and is emitted once for each.
#[derive(Debug, Clone)]
pub struct PromoterAssigner {
    chr_len:    PosType,
    nc_overlap: PosType,
    /// End of the last processed operon, `None` before the first one.
    last_end:   Option<PosType>,
    claim:      PromoterClaim,
    promoters:  Vec<NamedSpan>,
}

impl PromoterAssigner {
    pub fn new(
        chr_len: PosType,
        nc_overlap: PosType,
    ) -> Self {
        Self {
            chr_len,
            nc_overlap,
            last_end: None,
            claim: PromoterClaim::Unclaimed,
            promoters: Vec::new(),
        }
    }

    pub fn claim(&self) -> &PromoterClaim {
        &self.claim
    }

    pub fn promoters(&self) -> &[NamedSpan] {
        &self.promoters
    }

    /// Processes the next operon in coordinate order.
    pub fn step(
        &mut self,
        operon: &Operon,
    ) {
        let gap_end = operon.start() + self.nc_overlap - 1;

        if let PromoterClaim::Pending(names) = std::mem::take(&mut self.claim) {
            self.emit(gap_end, names);
        }

        match operon.strand() {
            Strand::Forward => self.emit(gap_end, operon.names().to_vec()),
            Strand::Reverse => {
                self.claim = PromoterClaim::Pending(operon.names().to_vec())
            },
        }
        trace!("Promoter claim after {}: {:?}", operon.named_span(), self.claim);

        self.last_end = Some(operon.end());
    }

    /// Resolves a pending claim against the chromosome end and returns the
    /// promoters.
    pub fn finish(mut self) -> Vec<NamedSpan> {
        if let PromoterClaim::Pending(names) = std::mem::take(&mut self.claim) {
            let chr_len = self.chr_len;
            self.emit(chr_len, names);
        }
        self.promoters
    }

    fn emit(
        &mut self,
        gap_end: PosType,
        names: Vec<String>,
    ) {
        let gap_start = match self.last_end {
            Some(end) => end - self.nc_overlap + 1,
            None => 0,
        };
        self.promoters
            .push(NamedSpan::new(gap_start, gap_end, names));
    }
}

/// Putative promoters: for every operon, the intergenic gap upstream of it.
///
/// Operons are derived like [`super::putative_operons`] with
/// `coding_overlap`. Gaps extend `nc_overlap` bases into their flanking
/// operons; the first gap starts at 0 and a trailing gap ends at `chr_len`.
pub fn putative_promoters(
    genes: &[GeneRecord],
    chr_len: PosType,
    coding_overlap: PosType,
    nc_overlap: PosType,
) -> Result<RegionSet, RegionError> {
    let operons = scan_operons(genes, coding_overlap)?;

    let mut assigner = PromoterAssigner::new(chr_len, nc_overlap);
    for operon in operons.iter() {
        assigner.step(operon);
    }
    let promoters = assigner.finish();

    debug!(
        "Assigned {} putative promoters to {} operons",
        promoters.len(),
        operons.len()
    );
    Ok(RegionSet::from(promoters))
}
