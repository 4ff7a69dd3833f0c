//! Error types of the span algebra and the region pipeline.
//!
//! [`SpanError`] covers contract violations of the pairwise span operations,
//! [`RegionError`] everything the derivation stages and the gene table can
//! reject. Both are local: nothing is retried, and a failed stage returns no
//! partial output.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpanError {
    /// `intersect` was called on spans that share no point.
    #[error("spans {left} and {right} are disjoint")]
    DisjointSpans { left: String, right: String },

    /// `join` was called on spans that do not overlap within the slack.
    #[error("spans {left} and {right} do not overlap within {within}")]
    NonAdjacentSpans {
        left:   String,
        right:  String,
        within: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    /// A scan stage got no gene records to start from.
    #[error("gene list is empty")]
    EmptyGeneList,

    /// A record with an invalid strand or with start past end.
    #[error("malformed gene record '{record}': {reason}")]
    MalformedRecord { record: String, reason: String },

    /// Two records of one gene table share a synonym.
    #[error("duplicate gene synonym '{0}'")]
    DuplicateSynonym(String),

    #[error(transparent)]
    Span(#[from] SpanError),
}

impl RegionError {
    pub(crate) fn malformed<R: ToString, S: ToString>(
        record: R,
        reason: S,
    ) -> Self {
        RegionError::MalformedRecord {
            record: record.to_string(),
            reason: reason.to_string(),
        }
    }
}
