use crate::Cost;
use hashbrown::HashMap;
use slab::Slab;
use std::hash::Hash;

struct PathEntry<A> {
	action: Option<A>,
	cost: Cost,
	parent: Option<usize>,
}

/// The best known Path from the start to every discovered State.
///
/// Paths share their common prefixes: every entry only stores the last step and a link to the
/// entry of the State it was taken from, so recording a child Path never copies the parent Path.
pub(crate) struct PathTable<St, A> {
	entries: Slab<PathEntry<A>>,
	index: HashMap<St, usize>,
}

impl<St: Eq + Hash, A> PathTable<St, A> {
	/// creates a table that only knows the empty Path to `start`
	pub fn new(start: St, capacity: usize) -> Self {
		let mut entries = Slab::with_capacity(capacity);
		let mut index = HashMap::with_capacity(capacity);
		let key = entries.insert(PathEntry {
			action: None,
			cost: 0,
			parent: None,
		});
		index.insert(start, key);
		PathTable { entries, index }
	}

	/// the cumulative Cost of the Path to `state`, if one was recorded
	pub fn cost(&self, state: &St) -> Option<Cost> {
		self.index.get(state).map(|&key| self.entries[key].cost)
	}

	/// Records the Path to `child` as the Path to `parent` followed by `action`.
	///
	/// Replaces a previously recorded Path to `child`. That is only allowed while `child` has not
	/// been expanded, since no other Path can branch off from it yet.
	pub fn record(&mut self, parent: &St, child: St, action: A, cost: Cost) {
		let parent_key = self.index.get(parent).copied();
		debug_assert!(parent_key.is_some(), "parent has no recorded Path");

		let key = self.entries.insert(PathEntry {
			action: Some(action),
			cost,
			parent: parent_key,
		});
		if let Some(old) = self.index.insert(child, key) {
			self.entries.remove(old);
		}
	}

	/// the number of States with a recorded Path
	#[cfg_attr(not(feature = "log"), allow(dead_code))]
	pub fn len(&self) -> usize {
		self.index.len()
	}

	/// Consumes the table and returns the Actions along the Path to `goal`, without the empty
	/// start entry, together with the total Cost.
	pub fn into_path(mut self, goal: &St) -> Option<(Vec<A>, Cost)> {
		let goal_key = *self.index.get(goal)?;
		let cost = self.entries[goal_key].cost;

		let mut actions = vec![];
		let mut current = Some(goal_key);
		while let Some(key) = current {
			let entry = self.entries.remove(key);
			actions.extend(entry.action);
			current = entry.parent;
		}
		actions.reverse();
		Some((actions, cost))
	}
}
