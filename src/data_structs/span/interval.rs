use std::fmt::Display;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::data_structs::typedef::{
    PosType,
    SpanPos,
};
use crate::error::SpanError;

/// Inclusive integer interval `[start, end]`.
///
/// Always normalized so that `start <= end`. Equality, hashing and ordering
/// are structural; spans order by start, then by end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Span<P = PosType>
where
    P: SpanPos, {
    start: P,
    end:   P,
}

impl<P> Span<P>
where
    P: SpanPos,
{
    /// Creates a new `Span` from two boundaries in any order.
    pub fn new(
        a: P,
        b: P,
    ) -> Self {
        Self {
            start: a.min(b),
            end:   a.max(b),
        }
    }

    /// Returns the start position.
    pub fn start(&self) -> P {
        self.start
    }

    /// Returns the end position.
    pub fn end(&self) -> P {
        self.end
    }

    /// Number of positions covered, both boundaries included.
    pub fn length(&self) -> P {
        self.end - self.start + P::one()
    }

    /// Grows the span to cover `point`.
    pub fn extend(
        &mut self,
        point: P,
    ) {
        if point < self.start {
            self.start = point;
        }
        else if point > self.end {
            self.end = point;
        }
    }

    /// Checks if `point` lies inside the span widened by `dist` on both sides.
    pub fn within(
        &self,
        point: P,
        dist: P,
    ) -> bool {
        point >= self.start - dist && point <= self.end + dist
    }

    /// Checks if `other` is entirely inside this span.
    pub fn contains(
        &self,
        other: &Self,
    ) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Checks if the spans overlap once this span is widened by `within`.
    ///
    /// The relation is symmetric: the boundary test only looks at `other`'s
    /// ends, and the containment test picks up the case where `other`
    /// swallows this span whole.
    pub fn overlaps(
        &self,
        other: &Self,
        within: P,
    ) -> bool {
        other.contains(self)
            || self.within(other.start, within)
            || self.within(other.end, within)
    }

    /// Returns the positions shared by both spans.
    pub fn intersect(
        &self,
        other: &Self,
    ) -> Result<Self, SpanError> {
        if !self.overlaps(other, P::zero()) {
            return Err(SpanError::DisjointSpans {
                left:  self.to_string(),
                right: other.to_string(),
            });
        }
        Ok(Self::new(
            self.start.max(other.start),
            self.end.min(other.end),
        ))
    }

    /// Returns the span enclosing both spans, if they overlap within
    /// `within`.
    pub fn join(
        &self,
        other: &Self,
        within: P,
    ) -> Result<Self, SpanError> {
        if !self.overlaps(other, within) {
            return Err(SpanError::NonAdjacentSpans {
                left:   self.to_string(),
                right:  other.to_string(),
                within: within.to_string(),
            });
        }
        Ok(self.enclose(other))
    }

    /// Enclosing span with no adjacency check.
    pub(crate) fn enclose(
        &self,
        other: &Self,
    ) -> Self {
        Self::new(
            self.start.min(other.start),
            self.end.max(other.end),
        )
    }
}

impl<P> From<(P, P)> for Span<P>
where
    P: SpanPos,
{
    fn from(value: (P, P)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl<P> From<RangeInclusive<P>> for Span<P>
where
    P: SpanPos,
{
    fn from(value: RangeInclusive<P>) -> Self {
        let (start, end) = value.into_inner();
        Self::new(start, end)
    }
}

impl<P> From<Span<P>> for RangeInclusive<P>
where
    P: SpanPos,
{
    fn from(value: Span<P>) -> Self {
        value.start..=value.end
    }
}

impl<P> Display for Span<P>
where
    P: SpanPos,
{
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
