use crate::Cost;
use log::trace;
use pathfinding::matrix::Matrix;
use thiserror::Error;

/// The cost matrix handed to [optimal_matching] is not square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[error("expected a square cost matrix, got {rows} rows by {columns} columns")]
pub struct NotSquare {
    pub rows: usize,
    pub columns: usize,
}

/// Finds a perfect matching of lowest total cost on a square matrix, where `costs[(i, j)]`
/// is the cost of matching source `i` with target `j`.
///
/// Returns `result` such that `result[j] = i` whenever target `j` is matched with source `i`.
///
/// This is the primal-dual formulation of the [Hungarian algorithm][hungarian], which
/// grows the matching one source at a time along a shortest augmenting path, in `O(n³)`.
///
/// Potentials and slacks are kept in `i128`, which leaves enough headroom for costs of up
/// to 64 bits anywhere in their range, [Weight::INHIBITED][crate::Weight::INHIBITED]
/// included.
///
/// [hungarian]: https://en.wikipedia.org/wiki/Hungarian_algorithm
pub fn optimal_matching<C: Cost>(costs: &Matrix<C>) -> Result<Box<[usize]>, NotSquare> {
    if costs.rows != costs.columns {
        return Err(NotSquare {
            rows: costs.rows,
            columns: costs.columns,
        });
    }

    // Index `n` is a virtual target, it roots the alternating tree and marks unmatched targets.
    let n = costs.rows;

    let cost = |i: usize, j: usize| -> i128 { costs[(i, j)].into() };

    // Dual feasibility: `source_potential[i] + target_potential[j] <= cost(i, j)`,
    // with equality on every matched edge.
    let mut source_potential = vec![0i128; n + 1];
    let mut target_potential = vec![0i128; n + 1];
    let mut target_source = vec![n; n + 1];

    let mut min_slack: Vec<Option<i128>> = vec![None; n + 1];
    let mut trail = vec![n; n + 1];
    let mut visited = vec![false; n + 1];

    for source in 0..n {
        target_source[n] = source;
        let mut target = n;

        min_slack.fill(None);
        trail.fill(n);
        visited.fill(false);

        while target_source[target] != n {
            visited[target] = true;
            let current = target_source[target];

            let mut next: Option<(i128, usize)> = None;
            for j in (0..n).filter(|&j| !visited[j]) {
                let slack = cost(current, j) - source_potential[current] - target_potential[j];

                let slack = match min_slack[j] {
                    Some(s) if s <= slack => s,
                    _ => {
                        trail[j] = target;
                        slack
                    }
                };

                min_slack[j] = Some(slack);

                if next.map_or(true, |(delta, _)| slack < delta) {
                    next = Some((slack, j));
                }
            }

            let (delta, next) = next.expect("an unmatched target is always reachable");

            for j in 0..=n {
                if visited[j] {
                    let i = target_source[j];
                    source_potential[i] += delta;
                    target_potential[j] -= delta;
                } else if let Some(s) = &mut min_slack[j] {
                    *s -= delta;
                }
            }

            target = next;
        }

        // Flip every edge along the augmenting path, all the way back to the virtual root.
        while target != n {
            let previous = trail[target];
            target_source[target] = target_source[previous];
            target = previous;
        }

        trace!("matched {} of {} sources", source + 1, n);
    }

    target_source.truncate(n);
    Ok(target_source.into_boxed_slice())
}
