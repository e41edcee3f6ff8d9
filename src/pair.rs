use crate::{Cost, Options};
use arrayvec::ArrayVec;

/// A single edit between two collections of nodes.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Pair<'a, N: ?Sized, C> {
    /// Update the existing node into the incoming one.
    Update {
        source: &'a N,
        target: &'a N,
        cost: C,
    },

    /// Remove the existing node.
    Delete { source: &'a N, cost: C },

    /// Insert the incoming node.
    Insert { target: &'a N, cost: C },
}

impl<'a, N: ?Sized, C: Copy> Pair<'a, N, C> {
    /// The existing node, unless this is an [insertion][Pair::Insert].
    #[inline]
    pub fn source(&self) -> Option<&'a N> {
        match *self {
            Pair::Update { source, .. } | Pair::Delete { source, .. } => Some(source),
            Pair::Insert { .. } => None,
        }
    }

    /// The incoming node, unless this is a [deletion][Pair::Delete].
    #[inline]
    pub fn target(&self) -> Option<&'a N> {
        match *self {
            Pair::Update { target, .. } | Pair::Insert { target, .. } => Some(target),
            Pair::Delete { .. } => None,
        }
    }

    #[inline]
    pub fn cost(&self) -> C {
        match *self {
            Pair::Update { cost, .. } | Pair::Delete { cost, .. } | Pair::Insert { cost, .. } => {
                cost
            }
        }
    }

    /// The keys of the source and target nodes, as identified by [Options::node_key].
    pub fn keys<E, K, R>(&self, options: &Options<N, C, E, K>) -> (Option<R>, Option<R>)
    where
        C: Cost,
        K: Fn(&N) -> R,
    {
        let key = |n: Option<&N>| n.and_then(|n| options.key(n));
        (key(self.source()), key(self.target()))
    }
}

/// Interprets source `i` matched with target `j` at the given cost.
///
/// Indices past the end of either collection stand for padding nodes. An update at the
/// maximum cost is disallowed, so it becomes a deletion and an insertion at that same cost.
pub(crate) fn interpret<'a, N, C: Cost>(
    sources: &'a [N],
    targets: &'a [N],
    (i, j): (usize, usize),
    cost: C,
    max_cost: C,
) -> ArrayVec<Pair<'a, N, C>, 2> {
    let mut pairs = ArrayVec::new();

    match (sources.get(i), targets.get(j)) {
        (Some(source), Some(target)) if cost == max_cost => {
            pairs.push(Pair::Delete { source, cost });
            pairs.push(Pair::Insert { target, cost });
        }

        (Some(source), Some(target)) => pairs.push(Pair::Update {
            source,
            target,
            cost,
        }),

        (Some(source), None) => pairs.push(Pair::Delete { source, cost }),
        (None, Some(target)) => pairs.push(Pair::Insert { target, cost }),
        (None, None) => {}
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use test_strategy::proptest;

    #[proptest]
    fn real_nodes_below_the_maximum_cost_are_updated(
        #[strategy(0i64..100)] cost: i64,
        a: u8,
        b: u8,
    ) {
        let (xs, ys) = ([a], [b]);
        let pairs = interpret(&xs, &ys, (0, 0), cost, 100);
        assert_matches!(&pairs[..], [Pair::Update { source, target, cost: c }] => {
            assert_eq!((**source, **target, *c), (a, b, cost));
        });
    }

    #[proptest]
    fn updates_at_the_maximum_cost_are_split(a: u8, b: u8) {
        let (xs, ys) = ([a], [b]);
        let pairs = interpret(&xs, &ys, (0, 0), 100i64, 100);
        assert_matches!(
            &pairs[..],
            [Pair::Delete { source, cost: 100 }, Pair::Insert { target, cost: 100 }]
                if (**source, **target) == (a, b)
        );
    }

    #[proptest]
    fn padding_targets_delete_sources(a: u8, cost: i64) {
        let xs = [a];
        let pairs = interpret(&xs, &[], (0, 3), cost, i64::MAX);
        assert_eq!(&pairs[..], &[Pair::Delete { source: &a, cost }]);
    }

    #[proptest]
    fn padding_sources_insert_targets(b: u8, cost: i64) {
        let ys = [b, b];
        let pairs = interpret(&[], &ys, (5, 1), cost, i64::MAX);
        assert_eq!(&pairs[..], &[Pair::Insert { target: &b, cost }]);
    }

    #[proptest]
    fn padding_matched_with_padding_is_ignored(cost: i64) {
        assert!(interpret::<u8, _>(&[], &[], (1, 1), cost, i64::MAX).is_empty());
    }

    #[proptest]
    fn accessors_agree_with_the_variant(a: u8, b: u8, cost: i64) {
        let update = Pair::Update {
            source: &a,
            target: &b,
            cost,
        };

        assert_eq!((update.source(), update.target(), update.cost()), (Some(&a), Some(&b), cost));

        let delete = Pair::Delete { source: &a, cost };
        assert_eq!((delete.source(), delete.target()), (Some(&a), None));

        let insert = Pair::Insert { target: &b, cost };
        assert_eq!((insert.source(), insert.target()), (None, Some(&b)));
    }

    #[proptest]
    fn keys_are_extracted_from_present_nodes(a: u8, b: u8) {
        let options = Options::new(|_: Option<&u8>, _: Option<&u8>| 0i64, 1)
            .node_key(|&n: &u8| u32::from(n) + 1);

        let update = Pair::Update {
            source: &a,
            target: &b,
            cost: 0,
        };

        let delete = Pair::Delete { source: &a, cost: 0 };

        assert_eq!(update.keys(&options), (Some(u32::from(a) + 1), Some(u32::from(b) + 1)));
        assert_eq!(delete.keys(&options), (Some(u32::from(a) + 1), None));
    }
}
