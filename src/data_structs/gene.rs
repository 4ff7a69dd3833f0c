use std::fmt::Display;

use hashbrown::HashMap;
use itertools::Itertools;
use log::{
    debug,
    warn,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::enums::Strand;
use crate::data_structs::span::{
    NamedSpan,
    Span,
};
use crate::data_structs::typedef::PosType;
use crate::error::RegionError;
use crate::with_field_fn;

/// Gene name used by gene tables for genes that only have a synonym.
pub const NO_GENE_NAME: &str = "-";

/// One row of a gene coordinate table.
///
/// Coordinates are 1-based and inclusive, as found in the tables. Use
/// [`GeneRecord::span`] for the 0-based span every region stage works on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneRecord {
    start:   PosType,
    end:     PosType,
    strand:  Strand,
    gene:    String,
    synonym: String,
    #[serde(default)]
    code:    String,
    #[serde(default)]
    cog:     String,
    #[serde(default)]
    product: String,
}

impl GeneRecord {
    /// Creates a new `GeneRecord`.
    ///
    /// Fails with [`RegionError::MalformedRecord`] if `start` is past `end`.
    pub fn new<G: Into<String>, S: Into<String>>(
        start: PosType,
        end: PosType,
        strand: Strand,
        gene: G,
        synonym: S,
    ) -> Result<Self, RegionError> {
        let record = Self {
            start,
            end,
            strand,
            gene: gene.into().trim().to_string(),
            synonym: synonym.into().trim().to_string(),
            code: String::new(),
            cog: String::new(),
            product: String::new(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Creates a new `GeneRecord` with a textual strand.
    pub fn try_from_parts<G: Into<String>, S: Into<String>>(
        start: PosType,
        end: PosType,
        strand: &str,
        gene: G,
        synonym: S,
    ) -> Result<Self, RegionError> {
        let gene = gene.into();
        let strand = strand.parse::<Strand>().map_err(|_| {
            RegionError::malformed(
                &gene,
                format!("strand '{}' is not one of '+', '-'", strand.trim()),
            )
        })?;
        Self::new(start, end, strand, gene, synonym)
    }

    with_field_fn!(code, String);
    with_field_fn!(cog, String);
    with_field_fn!(product, String);

    /// Checks the record invariants.
    ///
    /// Deserialized records bypass [`GeneRecord::new`], so every region stage
    /// validates its input again.
    pub fn validate(&self) -> Result<(), RegionError> {
        if self.start > self.end {
            return Err(RegionError::malformed(
                self.label(),
                format!("start {} is past end {}", self.start, self.end),
            ));
        }
        Ok(())
    }

    pub fn start(&self) -> PosType {
        self.start
    }

    pub fn end(&self) -> PosType {
        self.end
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn gene(&self) -> &str {
        &self.gene
    }

    pub fn synonym(&self) -> &str {
        &self.synonym
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn cog(&self) -> &str {
        &self.cog
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    /// 0-based inclusive span of the gene.
    pub fn span(&self) -> Span {
        Span::new(self.start - 1, self.end - 1)
    }

    /// Display label, `"gene (synonym)"`, or the bare synonym for unnamed
    /// genes.
    pub fn label(&self) -> String {
        if self.gene != NO_GENE_NAME {
            format!("{} ({})", self.gene, self.synonym)
        }
        else {
            self.synonym.clone()
        }
    }

    /// Coding span named after the gene.
    pub fn coding_span(&self) -> NamedSpan {
        NamedSpan::from_span(self.span(), [self.gene.as_str()])
    }

    /// Coding span named with [`GeneRecord::label`].
    pub fn labeled_span(&self) -> NamedSpan {
        NamedSpan::from_span(self.span(), [self.label()])
    }
}

impl Display for GeneRecord {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}..{} ({}) {}",
            self.start,
            self.end,
            self.strand,
            self.label()
        )
    }
}

/// Gene records of one chromosome together with its length.
///
/// Records keep the order they were given in; region stages expect it to be
/// ascending by start and never re-sort.
#[derive(Debug, Clone)]
pub struct GeneTable {
    records:    Vec<GeneRecord>,
    chr_len:    PosType,
    by_synonym: HashMap<String, usize>,
}

impl GeneTable {
    /// Creates a new `GeneTable`.
    ///
    /// Fails if a record is malformed, ends past `chr_len`, or two records
    /// share a synonym.
    pub fn try_new(
        records: Vec<GeneRecord>,
        chr_len: PosType,
    ) -> Result<Self, RegionError> {
        let mut by_synonym = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            record.validate()?;
            if record.end > chr_len {
                return Err(RegionError::malformed(
                    record.label(),
                    format!(
                        "end {} is past chromosome length {}",
                        record.end, chr_len
                    ),
                ));
            }
            if by_synonym
                .insert(record.synonym.clone(), idx)
                .is_some()
            {
                return Err(RegionError::DuplicateSynonym(
                    record.synonym.clone(),
                ));
            }
        }

        if !records
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.start <= b.start)
        {
            warn!(
                "Gene records are not sorted by start. Regions are derived in \
                 the given order."
            );
        }
        debug!(
            "Loaded gene table with {} records, chromosome length {}",
            records.len(),
            chr_len
        );

        Ok(Self {
            records,
            chr_len,
            by_synonym,
        })
    }

    pub fn records(&self) -> &[GeneRecord] {
        &self.records
    }

    pub fn chr_len(&self) -> PosType {
        self.chr_len
    }

    /// Looks a record up by its synonym.
    pub fn get_syn(
        &self,
        synonym: &str,
    ) -> Option<&GeneRecord> {
        self.by_synonym
            .get(synonym)
            .map(|idx| &self.records[*idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeneRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<GeneRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a GeneTable {
    type IntoIter = std::slice::Iter<'a, GeneRecord>;
    type Item = &'a GeneRecord;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
