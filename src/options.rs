use crate::Cost;
use std::marker::PhantomData;

/// Tunes how [assign][crate::assign] weighs the edits between two collections of nodes.
///
/// # Example
///
/// ```rust
/// use edit_delta::Options;
///
/// let options = Options::new(
///     |source: Option<&&str>, target: Option<&&str>| match (source, target) {
///         (Some(a), Some(b)) if a == b => 0,
///         (Some(_), Some(_)) => 1 << 31,
///         _ => 1,
///     },
///     1i64 << 31,
/// )
/// .node_key(|node: &&str| node.len());
///
/// assert_eq!(options.key(&"abc"), Some(3));
/// assert_eq!(options.max_cost(), 1 << 31);
/// ```
#[derive(Debug, Clone)]
pub struct Options<N: ?Sized, C, E, K = fn(&N)> {
    edit_cost: E,
    min_cost: C,
    max_cost: C,
    node_key: Option<K>,
    node: PhantomData<fn(&N)>,
}

impl<N: ?Sized, C, E> Options<N, C, E>
where
    C: Cost,
    E: Fn(Option<&N>, Option<&N>) -> C,
{
    /// Configures the cost of each edit.
    ///
    /// `edit_cost(Some(s), Some(t))` is the cost of updating `s` into `t`,
    /// `edit_cost(Some(s), None)` the cost of deleting `s` and
    /// `edit_cost(None, Some(t))` the cost of inserting `t`.
    ///
    /// An update that costs exactly `max_cost` is disallowed and is reported as a deletion
    /// followed by an insertion instead.
    pub fn new(edit_cost: E, max_cost: C) -> Self {
        Options {
            edit_cost,
            min_cost: C::default(),
            max_cost,
            node_key: None,
            node: PhantomData,
        }
    }
}

impl<N: ?Sized, C: Cost, E, K> Options<N, C, E, K> {
    /// Overrides the lowest possible cost, which is zero by default.
    ///
    /// It seeds the cost matrix, so it only survives in cells that pair padding nodes with
    /// each other, and never changes the assignment.
    pub fn min_cost(mut self, min_cost: C) -> Self {
        self.min_cost = min_cost;
        self
    }

    /// Attaches a function that identifies nodes, for the convenience of whoever consumes
    /// the resulting [Pair][crate::Pair]s.
    ///
    /// It plays no part in finding the optimal assignment.
    pub fn node_key<F, R>(self, node_key: F) -> Options<N, C, E, F>
    where
        F: Fn(&N) -> R,
    {
        Options {
            edit_cost: self.edit_cost,
            min_cost: self.min_cost,
            max_cost: self.max_cost,
            node_key: Some(node_key),
            node: PhantomData,
        }
    }

    #[inline]
    pub fn lowest_cost(&self) -> C {
        self.min_cost
    }

    #[inline]
    pub fn max_cost(&self) -> C {
        self.max_cost
    }

    /// The key of `node`, if a [node_key][Options::node_key] function was attached.
    #[inline]
    pub fn key<R>(&self, node: &N) -> Option<R>
    where
        K: Fn(&N) -> R,
    {
        self.node_key.as_ref().map(|f| f(node))
    }

    #[inline]
    pub(crate) fn edit_cost(&self, source: Option<&N>, target: Option<&N>) -> C
    where
        E: Fn(Option<&N>, Option<&N>) -> C,
    {
        (self.edit_cost)(source, target)
    }
}
