use std::fmt::Display;

use itertools::Itertools;
use serde::Serialize;

use super::{
    Span,
    Spanned,
};
use crate::data_structs::typedef::{
    PosType,
    SpanPos,
};
use crate::error::SpanError;

/// A [`Span`] carrying an ordered list of names.
///
/// Joining two named spans concatenates their names left then right. Names
/// are never deduplicated, so a region flanked by the same gene on both sides
/// lists that gene twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NamedSpan<P = PosType>
where
    P: SpanPos, {
    span:  Span<P>,
    names: Vec<String>,
}

impl<P> NamedSpan<P>
where
    P: SpanPos,
{
    /// Creates a new `NamedSpan` from two boundaries in any order.
    pub fn new<I, S>(
        a: P,
        b: P,
        names: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>, {
        Self::from_span(Span::new(a, b), names)
    }

    pub fn from_span<I, S>(
        span: Span<P>,
        names: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>, {
        Self {
            span,
            names: names.into_iter().map_into().collect(),
        }
    }

    pub fn start(&self) -> P {
        self.span.start()
    }

    pub fn end(&self) -> P {
        self.span.end()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn into_parts(self) -> (Span<P>, Vec<String>) {
        (self.span, self.names)
    }

    /// Joins two named spans, concatenating names.
    ///
    /// Fails with [`SpanError::NonAdjacentSpans`] like [`Span::join`].
    pub fn join(
        &self,
        other: &Self,
        within: P,
    ) -> Result<Self, SpanError> {
        let span = self.span.join(&other.span, within)?;
        let names = self
            .names
            .iter()
            .chain(other.names.iter())
            .cloned()
            .collect_vec();
        Ok(Self { span, names })
    }
}

impl<P> Spanned<P> for NamedSpan<P>
where
    P: SpanPos,
{
    fn span(&self) -> Span<P> {
        self.span
    }

    fn absorb(
        mut self,
        other: Self,
    ) -> Self {
        self.span = self.span.enclose(&other.span);
        self.names.extend(other.names);
        self
    }
}

impl<P> Display for NamedSpan<P>
where
    P: SpanPos,
{
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{} ({})", self.span, self.names.iter().join(", "))
    }
}
