pub use crate::data_structs::gene::{
    GeneRecord,
    GeneTable,
};
pub use crate::data_structs::span::{
    complement,
    cover,
    join,
    NamedSpan,
    Span,
    Spanned,
};
pub use crate::data_structs::typedef::{
    PosType,
    SpanPos,
};
pub use crate::data_structs::{
    RegionIndex,
    RegionSet,
    Strand,
};
pub use crate::error::{
    RegionError,
    SpanError,
};
pub use crate::tools::regions::{
    coding_regions_by_footprint,
    coding_regions_by_gene,
    intergenic_regions_by_footprint,
    putative_operons,
    putative_promoters,
    DerivedRegions,
    Operon,
    RegionConfig,
    RegionPipeline,
};
