use crate::Cost;

/// The result of a successful search
///
/// Stores the sequence of Actions that lead from the start to the goal in `actions` and the
/// total Cost of taking these Actions in `cost`.
/// Note that the individual costs of the steps within the Path cannot be retrieved through this
/// struct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<A> {
	/// the Actions, in the order they have to be taken
	pub actions: Vec<A>,
	/// the total Cost of the Path
	pub cost: Cost,
}

impl<A> Path<A> {
	/// creates a new Path with the given sequence of Actions and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use seeker::Path;
	/// let path = Path::new(vec!['a', 'b', 'c'], 42);
	///
	/// assert_eq!(path.actions, vec!['a', 'b', 'c']);
	/// assert_eq!(path.cost, 42);
	/// ```
	pub fn new(actions: Vec<A>, cost: Cost) -> Path<A> {
		Path { actions, cost }
	}

	/// the number of Actions in the Path
	pub fn len(&self) -> usize {
		self.actions.len()
	}

	/// `true` if start and goal were the same State
	pub fn is_empty(&self) -> bool {
		self.actions.is_empty()
	}

	/// Drops the Cost and returns only the Actions
	pub fn into_actions(self) -> Vec<A> {
		self.actions
	}
}

impl<A> std::ops::Deref for Path<A> {
	type Target = [A];
	fn deref(&self) -> &[A] {
		&self.actions
	}
}

impl<A> From<Path<A>> for Vec<A> {
	fn from(path: Path<A>) -> Vec<A> {
		path.actions
	}
}

impl<A: std::fmt::Display> std::fmt::Display for Path<A> {
	/// Formats as `a -> b -> c (cost 3)`, or `no actions (cost 0)` if start was the goal.
	fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
		let mut actions = self.actions.iter();
		match actions.next() {
			None => fmt.write_str("no actions")?,
			Some(first) => {
				write!(fmt, "{}", first)?;
				for action in actions {
					write!(fmt, " -> {}", action)?;
				}
			}
		}
		write!(fmt, " (cost {})", self.cost)
	}
}
