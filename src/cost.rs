use derive_more::{Add, From, Into, Sub};
use pathfinding::num_traits::Zero;
use std::fmt::{self, Display, Formatter};

/// An abstraction for a totally ordered cost.
///
/// The default value of this type is assumed to be the additive identity (i.e. _zero_).
///
/// Costs are added and subtracted once widened into `i128`, where the potentials of the
/// assignment engine may go below zero and never overflow, so any integer of up to 64 bits
/// is suitable, signed or not, all the way up to its largest value.
pub trait Cost: Default + Copy + Ord + Into<i128> {}

impl<C: Default + Copy + Ord + Into<i128>> Cost for C {}

/// An integer [Cost] with a reserved value that marks a transition as unavailable.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, From, Into, Add, Sub)]
pub struct Weight(i64);

impl Weight {
    /// Marks a transition that must never be taken.
    ///
    /// It is never summed, so it cannot overflow.
    pub const INHIBITED: Self = Weight(i64::MAX);

    #[inline]
    pub const fn new(w: i64) -> Self {
        Weight(w)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn is_inhibited(self) -> bool {
        self == Self::INHIBITED
    }

    /// Adds `w` to `self`, unless either of them is [inhibited][Weight::INHIBITED].
    ///
    /// Sums that do not fit below the marker are just as unavailable.
    #[inline]
    pub fn step(self, w: Weight) -> Option<Weight> {
        if self.is_inhibited() || w.is_inhibited() {
            None
        } else {
            self.0.checked_add(w.0).map(Weight).filter(|w| !w.is_inhibited())
        }
    }
}

impl From<Weight> for i128 {
    #[inline]
    fn from(w: Weight) -> i128 {
        w.0.into()
    }
}

impl Zero for Weight {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Display for Weight {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_inhibited() {
            f.write_str("-")
        } else {
            Display::fmt(&self.0, f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use test_strategy::proptest;

    #[proptest]
    fn step_adds_finite_weights(#[strategy(0i64..1 << 40)] a: i64, #[strategy(0i64..1 << 40)] b: i64) {
        assert_eq!(Weight::new(a).step(b.into()), Some(Weight::new(a + b)));
    }

    #[proptest]
    fn step_never_sums_the_inhibited_marker(w: i64) {
        assert_matches!(Weight::INHIBITED.step(w.into()), None);
        assert_matches!(Weight::from(w).step(Weight::INHIBITED), None);
    }

    #[test]
    fn step_never_overflows() {
        assert_eq!(Weight::new(i64::MAX - 1).step(Weight::new(1)), None);
        assert_eq!(Weight::new(i64::MAX - 1).step(Weight::new(i64::MAX - 1)), None);
        assert_eq!(Weight::new(i64::MIN).step(Weight::new(-1)), None);
        assert_eq!(Weight::new(i64::MAX - 2).step(Weight::new(1)), Some(Weight::new(i64::MAX - 1)));
    }

    #[proptest]
    fn weights_widen_losslessly(w: i64) {
        assert_eq!(i128::from(Weight::new(w)), i128::from(w));
    }

    #[proptest]
    fn default_is_zero(w: i64) {
        assert!(Weight::default().is_zero());
        assert_eq!(Weight::from(w) + Weight::zero(), Weight::from(w));
    }

    #[test]
    fn inhibited_weight_is_displayed_as_a_dash() {
        assert_eq!(Weight::INHIBITED.to_string(), "-");
        assert_eq!(Weight::new(42).to_string(), "42");
        assert_eq!(i64::from(Weight::new(-7)), -7);
    }
}
