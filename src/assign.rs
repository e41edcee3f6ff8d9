use crate::{interpret, optimal_matching, Cost, Options, Pair};
use itertools::iproduct;
use log::debug;
use pathfinding::matrix::Matrix;

/// Builds the square cost matrix, padding the shorter side with nodes that can only be
/// inserted or deleted.
fn costs<N, C, E, K>(sources: &[N], targets: &[N], options: &Options<N, C, E, K>) -> Matrix<C>
where
    C: Cost,
    E: Fn(Option<&N>, Option<&N>) -> C,
{
    let (n, m) = (sources.len(), targets.len());
    let size = n.max(m);

    let mut costs = Matrix::new(size, size, options.lowest_cost());

    for (i, j) in iproduct!(0..n, 0..m) {
        costs[(i, j)] = options.edit_cost(Some(&sources[i]), Some(&targets[j]));
    }

    for (i, source) in sources.iter().enumerate() {
        let cost = options.edit_cost(Some(source), None);
        for j in m..size {
            costs[(i, j)] = cost;
        }
    }

    for (j, target) in targets.iter().enumerate() {
        let cost = options.edit_cost(None, Some(target));
        for i in n..size {
            costs[(i, j)] = cost;
        }
    }

    costs
}

/// Finds the lowest cost [Pair]s that assign each source to one of the targets, regardless
/// of their order.
///
/// Every source and every target shows up in exactly one [Pair]. Sources left without a
/// target are [deleted][Pair::Delete] and targets left without a source are
/// [inserted][Pair::Insert].
///
/// This is an instance of the [assignment problem][assignment], solved by
/// [optimal_matching] on a square matrix in `O(max(n, m)³)`.
///
/// [assignment]: https://en.wikipedia.org/wiki/Assignment_problem
///
/// # Example
///
/// ```rust
/// use edit_delta::{assign, Options, Pair};
///
/// let options = Options::new(
///     |source: Option<&u32>, target: Option<&u32>| match (source, target) {
///         (Some(s), Some(t)) => s.abs_diff(*t) as i64,
///         _ => 10,
///     },
///     1 << 31,
/// );
///
/// let pairs = assign(&[1, 20, 7], &[21, 8], &options);
///
/// assert_eq!(pairs, [
///     Pair::Update { source: &20, target: &21, cost: 1 },
///     Pair::Update { source: &7, target: &8, cost: 1 },
///     Pair::Delete { source: &1, cost: 10 },
/// ]);
/// ```
pub fn assign<'a, N, C, E, K>(
    sources: &'a [N],
    targets: &'a [N],
    options: &Options<N, C, E, K>,
) -> Vec<Pair<'a, N, C>>
where
    C: Cost,
    E: Fn(Option<&N>, Option<&N>) -> C,
{
    let costs = costs(sources, targets, options);

    let matching = optimal_matching(&costs).expect("the cost matrix is square");

    let pairs: Vec<_> = matching
        .iter()
        .enumerate()
        .flat_map(|(j, &i)| interpret(sources, targets, (i, j), costs[(i, j)], options.max_cost()))
        .collect();

    debug!(
        "assigned {} sources to {} targets with {} pairs",
        sources.len(),
        targets.len(),
        pairs.len()
    );

    pairs
}
