//! # Overview
//!
//! This crate provides two generic engines that find the lowest cost way of transforming one
//! collection into another, according to user-defined measures for the cost of each edit.
//!
//! * [distance] is a generalized version of the [Levenshtein distance][levenshtein] between
//!   two ordered sequences of arbitrary elements, where substitutions, deletions and
//!   insertions may cost anything at all, or be disallowed entirely.
//!
//! * [assign] is a solution to the [assignment problem][assignment] between two unordered
//!   collections of arbitrary nodes, which pairs each source with at most one target, so that
//!   the total cost of updates, deletions and insertions is minimal.
//!
//! Both operate on opaque elements, so the same engines diff strings, lists, sets or the
//! flattened nodes of whole documents, only by varying the cost functions.
//!
//! [levenshtein]: https://en.wikipedia.org/wiki/Levenshtein_distance
//! [assignment]: https://en.wikipedia.org/wiki/Assignment_problem
//!
//! # Example
//!
//! ```rust
//! use edit_delta::*;
//! use serde_json::{json, Value};
//!
//! const FORBIDDEN: Weight = Weight::new(1 << 31);
//!
//! fn edit_cost(a: Option<&Value>, b: Option<&Value>) -> Weight {
//!     match (a, b) {
//!         (Some(Value::String(a)), Some(Value::String(b))) => {
//!             let a: Vec<_> = a.chars().collect();
//!             let b: Vec<_> = b.chars().collect();
//!             match distance_within(&a, &b, unit, Weight::new(3)) {
//!                 Bound::Exact(d) if d < Weight::new(3) => d,
//!                 _ => FORBIDDEN,
//!             }
//!         }
//!
//!         (Some(a), Some(b)) if a == b => Weight::default(),
//!         (Some(_), Some(_)) => FORBIDDEN,
//!         (Some(v), None) | (None, Some(v)) => Weight::new(v.to_string().len() as i64),
//!         (None, None) => Weight::default(),
//!     }
//! }
//!
//! let old = json!(["apple", "banana", "cherry", 42]);
//! let new = json!(["cherry", "bananas", "date"]);
//!
//! let options = Options::new(edit_cost, FORBIDDEN).node_key(Value::to_string);
//! let pairs = assign(old.as_array().unwrap(), new.as_array().unwrap(), &options);
//!
//! let keys: Vec<_> = pairs.iter().map(|p| (p.keys(&options), p.cost())).collect();
//!
//! assert_eq!(keys, [
//!     ((Some(r#""cherry""#.to_owned()), Some(r#""cherry""#.to_owned())), Weight::new(0)),
//!     ((Some(r#""banana""#.to_owned()), Some(r#""bananas""#.to_owned())), Weight::new(1)),
//!     ((Some(r#""apple""#.to_owned()), None), FORBIDDEN),
//!     ((None, Some(r#""date""#.to_owned())), FORBIDDEN),
//!     ((Some("42".to_owned()), None), Weight::new(2)),
//! ]);
//! ```

mod assign;
mod cost;
mod distance;
mod hungarian;
mod options;
mod pair;

pub use assign::*;
pub use cost::*;
pub use distance::*;
pub use hungarian::*;
pub use options::*;
pub use pair::*;

pub(crate) use pair::interpret;
