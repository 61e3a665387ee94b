use serde::{Deserialize, Serialize};

/// An inclusive numeric interval over a device identifier domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span<T> {
    pub start: T,
    pub end: T,
}

impl<T: Copy + Ord> Span<T> {
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Inclusive bounds check on both ends.
    pub fn contains(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }
}

impl<T: Copy + Ord + Into<u64>> Span<T> {
    /// Number of values covered, `end - start + 1`.
    pub fn width(&self) -> u64 {
        self.end.into() - self.start.into() + 1
    }
}

/// Return every record whose span set contains `value`, in input order.
///
/// Each record contributes at most once even when several of its spans
/// contain the value.
pub fn all_matching<'a, R, T, F>(records: &'a [R], value: T, spans: F) -> Vec<&'a R>
where
    T: Copy + Ord,
    F: Fn(&R) -> &[Span<T>],
{
    records
        .iter()
        .filter(|record| spans(record).iter().any(|span| span.contains(value)))
        .collect()
}

/// Ambiguity tie-break: the candidate with the smallest total span width.
///
/// On equal widths the earlier candidate wins, keeping the selection
/// stable with respect to input order.
pub fn most_specific<'a, R, F>(candidates: &[&'a R], total_width: F) -> Option<&'a R>
where
    F: Fn(&R) -> u64,
{
    let mut best: Option<(&'a R, u64)> = None;
    for &candidate in candidates {
        let width = total_width(candidate);
        match best {
            Some((_, best_width)) if width >= best_width => {}
            _ => best = Some((candidate, width)),
        }
    }
    best.map(|(record, _)| record)
}
