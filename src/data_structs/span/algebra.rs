use log::trace;

use super::Span;
use crate::data_structs::typedef::SpanPos;

/// Values positioned by a [`Span`] that can be merged during a sweep.
pub trait Spanned<P: SpanPos> {
    fn span(&self) -> Span<P>;

    /// Merges `other` into `self`, producing the enclosing value.
    ///
    /// Callers are expected to have checked adjacency already.
    fn absorb(
        self,
        other: Self,
    ) -> Self;
}

impl<P> Spanned<P> for Span<P>
where
    P: SpanPos,
{
    fn span(&self) -> Span<P> {
        *self
    }

    fn absorb(
        self,
        other: Self,
    ) -> Self {
        self.enclose(&other)
    }
}

/// Merges every group of spans overlapping within `within` into one.
///
/// The result is sorted by start and no two of its spans overlap within
/// `within`. The sort is stable, so spans with equal coordinates are merged in
/// input order. Empty input yields an empty result.
pub fn join<P, T, I>(
    spans: I,
    within: P,
) -> Vec<T>
where
    P: SpanPos,
    T: Spanned<P>,
    I: IntoIterator<Item = T>, {
    let mut sorted: Vec<T> = spans.into_iter().collect();
    sorted.sort_by_key(|s| s.span());

    let n_input = sorted.len();
    let mut merged = Vec::with_capacity(n_input);
    let mut iter = sorted.into_iter();
    let mut current = match iter.next() {
        Some(first) => first,
        None => return merged,
    };

    for next in iter {
        if current.span().overlaps(&next.span(), within) {
            current = current.absorb(next);
        }
        else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);

    trace!("Joined {} spans into {}", n_input, merged.len());
    merged
}

/// Returns the smallest span covering every span of `spans`, or `None` for an
/// empty input.
pub fn cover<'a, P, I>(spans: I) -> Option<Span<P>>
where
    P: SpanPos + 'a,
    I: IntoIterator<Item = &'a Span<P>>, {
    let mut iter = spans.into_iter();
    let first = iter.next()?;

    let mut covering = Span::new(first.start(), first.end());
    for span in iter {
        covering.extend(span.start());
        covering.extend(span.end());
    }
    Some(covering)
}

/// Returns the gaps left by `spans` inside `[start, end]`.
///
/// Gaps share their boundary points with the flanking spans: the gap between
/// `[a, b]` and `[c, d]` is `[b, c]`. A leading gap is emitted when the first
/// span does not start at `start`, a trailing one when the last span does not
/// end at `end`. Overlapping input gives overlapping gaps, so pass the spans
/// through [`join`] first if a strict complement is needed. Empty input yields
/// the whole bound.
pub fn complement<P>(
    start: P,
    end: P,
    spans: &[Span<P>],
) -> Vec<Span<P>>
where
    P: SpanPos, {
    let mut sorted = spans.to_vec();
    sorted.sort();

    let (first, rest) = match sorted.split_first() {
        Some(split) => split,
        None => return vec![Span::new(start, end)],
    };

    let mut gaps = Vec::with_capacity(sorted.len() + 1);
    if first.start() != start {
        gaps.push(Span::new(start, first.start()));
    }

    let mut last = first.end();
    for span in rest {
        gaps.push(Span::new(last, span.start()));
        last = span.end();
    }

    if last != end {
        gaps.push(Span::new(last, end));
    }
    gaps
}
