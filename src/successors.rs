use crate::Cost;

/// Expands a State into the Edges leaving it.
///
/// Every Edge is a Tuple of `(successor, action, cost)`. The `action` is only carried along to
/// be handed back as part of the final Path, and `cost` is the cost of taking that Edge.
///
/// This Trait is implemented for every `Fn(&St) -> I` where `I` iterates over Edges, so a
/// closure is usually all that is needed:
/// ```
/// # use seeker::{Cost, Successors};
/// let successors = |&n: &u32| vec![(n + 1, "inc", 1), (n * 2, "double", 3)];
///
/// let edges: Vec<(u32, &str, Cost)> = successors.successors(&4).into_iter().collect();
/// assert_eq!(edges, vec![(5, "inc", 1), (8, "double", 3)]);
/// ```
///
/// The returned Edges of a State must be the same every time it is asked for within a search.
pub trait Successors<St, A> {
	/// The collection of Edges returned by [`successors`](Successors::successors)
	type Edges: IntoIterator<Item = (St, A, Cost)>;

	/// Returns all Edges leaving `state`
	fn successors(&self, state: &St) -> Self::Edges;
}

impl<St, A, I, F> Successors<St, A> for F
where
	F: Fn(&St) -> I,
	I: IntoIterator<Item = (St, A, Cost)>,
{
	type Edges = I;

	fn successors(&self, state: &St) -> I {
		self(state)
	}
}
