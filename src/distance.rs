use crate::Weight;
use arrayvec::ArrayVec;
use log::trace;
use pathfinding::num_traits::Zero;
use std::{iter::once, mem};

/// The cost of each operation available at a single position of an alignment.
///
/// Any of them may be [inhibited][Weight::INHIBITED] to disallow that operation entirely.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Costs {
    /// The cost of replacing the existing element by the incoming one.
    pub substitute: Weight,

    /// The cost of removing the existing element.
    pub delete: Weight,

    /// The cost of inserting the incoming element.
    pub insert: Weight,
}

impl Costs {
    /// Every operation costs exactly one.
    pub const UNIT: Self = Costs::uniform(Weight::new(1));

    #[inline]
    pub const fn uniform(w: Weight) -> Self {
        Costs {
            substitute: w,
            delete: w,
            insert: w,
        }
    }
}

/// The classic Levenshtein cost function, where every edit costs one.
pub fn unit<T: ?Sized>(_: Option<&T>, _: Option<&T>) -> Costs {
    Costs::UNIT
}

/// The outcome of [distance_within].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Bound {
    /// The exact distance.
    Exact(Weight),

    /// The scan stopped early because a whole row reached the cutoff.
    ///
    /// The true distance is at least the cutoff, while the carried value is only the last
    /// cell computed before stopping and must not be taken as the distance.
    Exceeded(Weight),
}

impl Bound {
    /// The carried value, exact or not.
    #[inline]
    pub fn weight(self) -> Weight {
        match self {
            Bound::Exact(w) | Bound::Exceeded(w) => w,
        }
    }

    #[inline]
    pub fn is_exact(self) -> bool {
        matches!(self, Bound::Exact(_))
    }
}

fn levenshtein<T, F>(a: &[T], b: &[T], mut f: F, cutoff: Option<Weight>) -> Bound
where
    T: PartialEq,
    F: FnMut(Option<&T>, Option<&T>) -> Costs,
{
    let inserts: Box<[_]> = b.iter().map(|y| f(None, Some(y)).insert).collect();

    let mut row: Box<[_]> = once(Weight::zero())
        .chain(inserts.iter().scan(Weight::zero(), |acc, &w| {
            *acc = acc.step(w).unwrap_or(Weight::INHIBITED);
            Some(*acc)
        }))
        .collect();

    for (i, x) in a.iter().enumerate() {
        let delete = f(Some(x), None).delete;
        let mut diagonal = row[0];
        row[0] = diagonal.step(delete).unwrap_or(Weight::INHIBITED);

        for (j, y) in b.iter().enumerate() {
            let mut candidates = ArrayVec::<_, 3>::new();

            if x == y {
                candidates.extend(diagonal.step(Weight::zero()));
            } else {
                candidates.extend(diagonal.step(f(Some(x), Some(y)).substitute));
            }

            candidates.extend(row[j].step(inserts[j]));
            candidates.extend(row[j + 1].step(delete));

            let cell = candidates.into_iter().min().unwrap_or(Weight::INHIBITED);
            diagonal = mem::replace(&mut row[j + 1], cell);
        }

        if let Some(cutoff) = cutoff {
            if i + 1 < a.len() && row.iter().all(|&w| w >= cutoff) {
                trace!("pruned at row {} of {} with cutoff {}", i + 1, a.len(), cutoff);
                return Bound::Exceeded(row[b.len()]);
            }
        }
    }

    Bound::Exact(row[b.len()])
}

/// Finds the lowest cost of transforming one sequence into the other.
///
/// At each position the left-hand side element is either replaced by the right-hand side
/// element, removed, or the right-hand side element is inserted, at the cost reported by
/// `f`. Equal elements replace each other for free, without consulting `f`.
///
/// Returns [Weight::INHIBITED] if no sequence of edits is allowed at all.
///
/// # Example
///
/// ```rust
/// use edit_delta::{distance, unit};
///
/// let a: Vec<_> = "abcdefg".chars().collect();
/// let b: Vec<_> = "axcdfgh".chars().collect();
///
/// assert_eq!(distance(&a, &b, unit).get(), 3);
/// ```
pub fn distance<T, F>(a: &[T], b: &[T], f: F) -> Weight
where
    T: PartialEq,
    F: FnMut(Option<&T>, Option<&T>) -> Costs,
{
    levenshtein(a, b, f, None).weight()
}

/// Like [distance], but gives up as soon as the distance is known to reach `cutoff`.
///
/// A non-positive `cutoff` never gives up.
pub fn distance_within<T, F>(a: &[T], b: &[T], f: F, cutoff: Weight) -> Bound
where
    T: PartialEq,
    F: FnMut(Option<&T>, Option<&T>) -> Costs,
{
    levenshtein(a, b, f, Some(cutoff).filter(|&c| c > Weight::zero()))
}
