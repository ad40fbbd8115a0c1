use crate::Cost;

/// Estimates the remaining Cost from a State to the Goal.
///
/// Lower is better. For the search to return optimal Paths the estimate has to be
/// admissible (it never overestimates the actual remaining Cost) and, since explored States are
/// never re-opened, consistent: `estimate(a, goal) <= cost(a, b) + estimate(b, goal)` for every
/// Edge `a -> b`. Neither is checked.
///
/// Implemented for every `Fn(&St, &St) -> Cost`. If there is no sensible estimate, use
/// [`NullHeuristic`], which turns the search into a uniform-cost search.
pub trait Heuristic<St> {
	/// Returns the estimated Cost of getting from `state` to `goal`
	fn estimate(&self, state: &St, goal: &St) -> Cost;
}

/// The Heuristic that always returns 0
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NullHeuristic;

impl<St> Heuristic<St> for NullHeuristic {
	fn estimate(&self, _: &St, _: &St) -> Cost {
		0
	}
}

impl<St, F> Heuristic<St> for F
where
	F: Fn(&St, &St) -> Cost,
{
	fn estimate(&self, state: &St, goal: &St) -> Cost {
		self(state, goal)
	}
}
