//! The priority queue that drives the search.

use crate::{Cost, Result, SearchError};
use hashbrown::HashMap;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// Decides which State is popped first when several share the lowest priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TieBreak {
	/// The State that was [`put`](PriorityFrontier::put) first is popped first.
	Fifo,
	/// The State that was [`put`](PriorityFrontier::put) last is popped first.
	Lifo,
}

#[derive(PartialEq, Eq)]
struct FrontierElement<St, P> {
	priority: P,
	order: u64,
	state: St,
}
impl<St: Eq, P: Ord> PartialOrd for FrontierElement<St, P> {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl<St: Eq, P: Ord> Ord for FrontierElement<St, P> {
	// reversed, since BinaryHeap is a max-heap
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.priority
			.cmp(&self.priority)
			.then_with(|| rhs.order.cmp(&self.order))
	}
}

/// A min-priority queue of States with constant time membership tests.
///
/// Internally a [`BinaryHeap`] keyed by priority, paired with a map that counts how often each
/// State is currently stored in the heap. Both are updated in lockstep by [`put`](Self::put)
/// and [`pop_min`](Self::pop_min).
///
/// There is no decrease-key operation. Putting a State that is already queued stores a second
/// entry, and the State stays a member until **every** one of its entries has been popped.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use seeker::PriorityFrontier;
/// let mut frontier = PriorityFrontier::new();
/// frontier.put("far", 10);
/// frontier.put("near", 2);
///
/// assert!(frontier.contains(&"far"));
/// assert_eq!(frontier.pop_min(), Ok("near"));
/// assert!(!frontier.contains(&"near"));
/// ```
pub struct PriorityFrontier<St, P = Cost> {
	heap: BinaryHeap<FrontierElement<St, P>>,
	members: HashMap<St, usize>,
	tie_break: TieBreak,
	next_order: u64,
}

impl<St: Eq + Hash + Clone, P: Ord> PriorityFrontier<St, P> {
	/// Creates an empty Frontier with [`TieBreak::Fifo`]
	pub fn new() -> Self {
		Self::with_capacity(0, TieBreak::Fifo)
	}

	/// Creates an empty Frontier with the given `tie_break` rule
	pub fn with_tie_break(tie_break: TieBreak) -> Self {
		Self::with_capacity(0, tie_break)
	}

	/// Creates an empty Frontier with room for `capacity` entries
	pub fn with_capacity(capacity: usize, tie_break: TieBreak) -> Self {
		PriorityFrontier {
			heap: BinaryHeap::with_capacity(capacity),
			members: HashMap::with_capacity(capacity),
			tie_break,
			next_order: 0,
		}
	}

	/// Inserts `state` with the given `priority`. Lower priorities are popped first.
	pub fn put(&mut self, state: St, priority: P) {
		let order = match self.tie_break {
			TieBreak::Fifo => self.next_order,
			TieBreak::Lifo => u64::MAX - self.next_order,
		};
		self.next_order += 1;

		*self.members.entry(state.clone()).or_insert(0) += 1;
		self.heap.push(FrontierElement {
			priority,
			order,
			state,
		});
	}

	/// Removes and returns the State with the lowest priority.
	///
	/// Fails with [`SearchError::EmptyQueue`] if the Frontier is empty.
	pub fn pop_min(&mut self) -> Result<St> {
		let FrontierElement { state, .. } = self.heap.pop().ok_or(SearchError::EmptyQueue)?;

		if let Some(count) = self.members.get_mut(&state) {
			*count -= 1;
			if *count == 0 {
				self.members.remove(&state);
			}
		}
		Ok(state)
	}

	/// Returns `true` if at least one entry of `state` is still queued
	pub fn contains(&self, state: &St) -> bool {
		self.members.contains_key(state)
	}

	/// Returns `true` if no entries are queued
	pub fn is_empty(&self) -> bool {
		self.heap.is_empty()
	}

	/// The number of queued entries, duplicates included
	pub fn len(&self) -> usize {
		self.heap.len()
	}
}

impl<St: Eq + Hash + Clone, P: Ord> Default for PriorityFrontier<St, P> {
	fn default() -> Self {
		Self::new()
	}
}

impl<St, P> std::fmt::Debug for PriorityFrontier<St, P> {
	fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
		fmt.debug_struct("PriorityFrontier")
			.field("len", &self.heap.len())
			.field("distinct", &self.members.len())
			.field("tie_break", &self.tie_break)
			.finish()
	}
}
