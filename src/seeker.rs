use crate::{
	frontier::PriorityFrontier, Cost, Heuristic, NullHeuristic, Path, Result, SearchError,
	Successors,
};
use hashbrown::HashSet;
use std::hash::Hash;

mod seeker_config;
pub use self::seeker_config::{DiscoveryPolicy, SeekerConfig};

mod path_table;
use self::path_table::PathTable;

/// Counters collected during a single search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
	/// States that were popped from the Frontier and expanded
	pub expanded: usize,
	/// Edges returned by the successor function
	pub generated: usize,
	/// queued States whose Path was replaced by a cheaper one
	pub relaxed: usize,
	/// Frontier entries that were skipped because their State was already expanded
	pub stale: usize,
	/// the largest number of entries in the Frontier at any time
	pub peak_frontier: usize,
}

/// Finds the cheapest sequence of Actions between two States using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// A Seeker is configured once with a successor function (see [`Successors`]) and optionally a
/// [`Heuristic`], and can then answer any number of searches. It never inspects the States
/// themselves: they only need to be compared, hashed and cloned.
///
/// ## Examples
/// Basic usage:
/// ```
/// use seeker::Seeker;
///
/// // A --1--> B --1--> C --1--> D
/// //  \               ^  \      ^
/// //   `------4------'    `-5--'  (B -> D)
/// let seeker = Seeker::new(|state: &char| match *state {
/// 	'A' => vec![('B', "A->B", 1), ('C', "A->C", 4)],
/// 	'B' => vec![('C', "B->C", 1), ('D', "B->D", 5)],
/// 	'C' => vec![('D', "C->D", 1)],
/// 	_ => vec![],
/// });
///
/// let actions = seeker.search('A', 'D').unwrap();
/// assert_eq!(actions, Some(vec!["A->B", "B->C", "C->D"]));
///
/// // there is no way back to A
/// assert_eq!(seeker.search('D', 'A').unwrap(), None);
/// ```
///
/// With a Heuristic:
/// ```
/// use seeker::{Cost, Seeker};
///
/// let seeker = Seeker::with_heuristic(
/// 	|&n: &i32| vec![(n + 1, '+', 1), (n - 1, '-', 1)], // successors
/// 	|&n: &i32, &goal: &i32| (goal - n).unsigned_abs() as Cost, // heuristic
/// );
///
/// let path = seeker.find_path(0, 3).unwrap().unwrap();
/// assert_eq!(path.actions, vec!['+', '+', '+']);
/// assert_eq!(path.cost, 3);
/// ```
pub struct Seeker<S, H = NullHeuristic> {
	successors: Option<S>,
	heuristic: H,
	config: SeekerConfig,
}

impl<S> Seeker<S, NullHeuristic> {
	/// Creates a Seeker that uses the [`NullHeuristic`], which makes it a uniform-cost search.
	pub fn new(successors: S) -> Self {
		Seeker {
			successors: Some(successors),
			heuristic: NullHeuristic,
			config: SeekerConfig::default(),
		}
	}
}

impl<S, H> Seeker<S, H> {
	/// Creates a Seeker that uses `heuristic` to guide the search
	pub fn with_heuristic(successors: S, heuristic: H) -> Self {
		Seeker {
			successors: Some(successors),
			heuristic,
			config: SeekerConfig::default(),
		}
	}

	/// Replaces the [`SeekerConfig`]
	/// ## Examples
	/// ```
	/// # use seeker::{Seeker, SeekerConfig};
	/// let seeker = Seeker::new(|_: &u8| Vec::<(u8, (), usize)>::new())
	/// 	.with_config(SeekerConfig::FIRST_DISCOVERY);
	///
	/// assert_eq!(seeker.get_config(), &SeekerConfig::FIRST_DISCOVERY);
	/// ```
	pub fn with_config(mut self, config: SeekerConfig) -> Self {
		self.config = config;
		self
	}

	/// Returns the [`SeekerConfig`] used for searching
	pub fn get_config(&self) -> &SeekerConfig {
		&self.config
	}

	/// Calculates the cheapest sequence of Actions leading from `start` to `goal`.
	///
	/// ## Returns
	/// - `Ok(Some(actions))` if `goal` is reachable. The Actions are in the order they have to be
	/// 	taken, and are empty if `start == goal`.
	/// - `Ok(None)` if `goal` cannot be reached from `start`.
	/// - `Err(SearchError::MissingSuccessors)` if this Seeker was created without a successor
	/// 	function.
	///
	/// See [`find_path`](Self::find_path) to also get the total Cost.
	pub fn search<St, A>(&self, start: St, goal: St) -> Result<Option<Vec<A>>>
	where
		S: Successors<St, A>,
		H: Heuristic<St>,
		St: Eq + Hash + Clone,
	{
		Ok(self.find_path(start, goal)?.map(Path::into_actions))
	}

	/// Like [`search`](Self::search), but returns a [`Path`] with the total Cost of the Actions.
	pub fn find_path<St, A>(&self, start: St, goal: St) -> Result<Option<Path<A>>>
	where
		S: Successors<St, A>,
		H: Heuristic<St>,
		St: Eq + Hash + Clone,
	{
		self.find_path_with_stats(start, goal).map(|(path, _)| path)
	}

	/// Like [`find_path`](Self::find_path), but also returns counters about the search itself.
	///
	/// ## Examples
	/// ```
	/// # use seeker::Seeker;
	/// let seeker = Seeker::new(|&n: &u32| if n < 4 { vec![(n + 1, n, 1)] } else { vec![] });
	///
	/// let (path, stats) = seeker.find_path_with_stats(0, 4).unwrap();
	/// assert_eq!(path.unwrap().actions, vec![0, 1, 2, 3]);
	/// assert_eq!(stats.expanded, 4);
	/// ```
	pub fn find_path_with_stats<St, A>(
		&self,
		start: St,
		goal: St,
	) -> Result<(Option<Path<A>>, SearchStats)>
	where
		S: Successors<St, A>,
		H: Heuristic<St>,
		St: Eq + Hash + Clone,
	{
		let successors = self
			.successors
			.as_ref()
			.ok_or(SearchError::MissingSuccessors)?;

		#[cfg(feature = "log")]
		let timer = std::time::Instant::now();

		let size_hint = self.config.size_hint;
		let mut stats = SearchStats::default();
		let mut paths = PathTable::new(start.clone(), size_hint);
		let mut explored = HashSet::with_capacity(size_hint);
		let mut frontier = PriorityFrontier::with_capacity(size_hint / 2, self.config.tie_break);

		// the priority of start doesn't matter, it is the only entry
		frontier.put(start, 0);
		stats.peak_frontier = 1;

		while !frontier.is_empty() {
			let node = frontier.pop_min()?;

			if explored.contains(&node) {
				stats.stale += 1;
				continue;
			}

			if node == goal {
				let path = paths
					.into_path(&node)
					.map(|(actions, cost)| Path::new(actions, cost));
				log_debug!(
					"found goal: {} expanded, {} generated, {} stale, took {:?}",
					stats.expanded,
					stats.generated,
					stats.stale,
					timer.elapsed()
				);
				return Ok((path, stats));
			}

			let node_cost: Cost = match paths.cost(&node) {
				Some(cost) => cost,
				None => unreachable!("queued State without a recorded Path"),
			};
			explored.insert(node.clone());
			stats.expanded += 1;
			log_trace!("expanding State #{} at cost {}", stats.expanded, node_cost);

			for (child, action, cost) in successors.successors(&node) {
				stats.generated += 1;
				if explored.contains(&child) {
					continue;
				}
				// saturates, so usize::MAX can mark hopeless Edges and States
				let child_cost = node_cost.saturating_add(cost);

				if frontier.contains(&child) {
					match self.config.policy {
						DiscoveryPolicy::FirstDiscoveryWins => continue,
						DiscoveryPolicy::Relax => {
							let is_cheaper = paths
								.cost(&child)
								.map_or(true, |prev_cost| child_cost < prev_cost);
							if !is_cheaper {
								continue;
							}
							stats.relaxed += 1;
						}
					}
				}

				let priority = child_cost.saturating_add(self.heuristic.estimate(&child, &goal));
				paths.record(&node, child.clone(), action, child_cost);
				frontier.put(child, priority);
			}
			stats.peak_frontier = stats.peak_frontier.max(frontier.len());
		}

		log_debug!(
			"goal unreachable: {} expanded, {} generated, {} recorded, took {:?}",
			stats.expanded,
			stats.generated,
			paths.len(),
			timer.elapsed()
		);
		Ok((None, stats))
	}

	/// Runs an independent search for every `(start, goal)` pair, in order.
	///
	/// ## Examples
	/// ```
	/// # use seeker::Seeker;
	/// let seeker = Seeker::new(|&n: &u8| if n < 3 { vec![(n + 1, 'x', 1)] } else { vec![] });
	///
	/// let results = seeker.search_all([(0, 2), (2, 0), (1, 1)]).unwrap();
	/// assert_eq!(results, vec![Some(vec!['x', 'x']), None, Some(vec![])]);
	/// ```
	pub fn search_all<St, A>(
		&self,
		pairs: impl IntoIterator<Item = (St, St)>,
	) -> Result<Vec<Option<Vec<A>>>>
	where
		S: Successors<St, A>,
		H: Heuristic<St>,
		St: Eq + Hash + Clone,
	{
		pairs
			.into_iter()
			.map(|(start, goal)| self.search(start, goal))
			.collect()
	}

	/// Same as [`search_all`](Self::search_all), but the searches are spread over the threads of
	/// the global rayon pool. The results are still returned in the order of `pairs`.
	///
	/// Every search owns its own tables, so this only requires the successor function and the
	/// Heuristic to be shareable between threads.
	#[cfg(feature = "parallel")]
	pub fn search_all_parallel<St, A>(
		&self,
		pairs: impl rayon::iter::IntoParallelIterator<Item = (St, St)>,
	) -> Result<Vec<Option<Vec<A>>>>
	where
		S: Successors<St, A> + Sync,
		H: Heuristic<St> + Sync,
		St: Eq + Hash + Clone + Send,
		A: Send,
	{
		use rayon::prelude::*;

		pairs
			.into_par_iter()
			.map(|(start, goal)| self.search(start, goal))
			.collect()
	}
}

impl<S, H: Default> Default for Seeker<S, H> {
	/// Creates a Seeker **without** a successor function. Every search on it fails with
	/// [`SearchError::MissingSuccessors`].
	fn default() -> Self {
		Seeker {
			successors: None,
			heuristic: H::default(),
			config: SeekerConfig::default(),
		}
	}
}

impl<S: Clone, H: Clone> Clone for Seeker<S, H> {
	fn clone(&self) -> Self {
		Seeker {
			successors: self.successors.clone(),
			heuristic: self.heuristic.clone(),
			config: self.config,
		}
	}
}

impl<S, H> std::fmt::Debug for Seeker<S, H> {
	fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
		fmt.debug_struct("Seeker")
			.field("has_successors", &self.successors.is_some())
			.field("heuristic", &std::any::type_name::<H>())
			.field("config", &self.config)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Graph;

	fn diamond() -> Graph<char, &'static str> {
		[
			('A', 'B', "A->B", 1),
			('A', 'C', "A->C", 4),
			('B', 'C', "B->C", 1),
			('B', 'D', "B->D", 5),
			('C', 'D', "C->D", 1),
		]
		.into_iter()
		.collect()
	}

	fn line(&n: &i32) -> Vec<(i32, char, Cost)> {
		let mut edges = vec![];
		if n < 10 {
			edges.push((n + 1, '+', 1));
		}
		if n > 0 {
			edges.push((n - 1, '-', 1));
		}
		edges
	}

	#[test]
	fn cheapest_over_fewest_steps() {
		let seeker = Seeker::new(diamond());

		let path = seeker.find_path('A', 'D').unwrap().unwrap();
		assert_eq!(path.actions, vec!["A->B", "B->C", "C->D"]);
		assert_eq!(path.cost, 3);
	}

	#[test]
	fn first_discovery_keeps_first_path() {
		let seeker = Seeker::new(diamond()).with_config(SeekerConfig::FIRST_DISCOVERY);

		let path = seeker.find_path('A', 'D').unwrap().unwrap();
		assert_eq!(path.actions, vec!["A->B", "B->D"]);
		assert_eq!(path.cost, 6);
	}

	#[test]
	fn start_is_goal() {
		let seeker = Seeker::new(diamond());

		assert_eq!(seeker.search('C', 'C'), Ok(Some(vec![])));
		let (path, stats) = seeker.find_path_with_stats('C', 'C').unwrap();
		assert_eq!(path, Some(Path::new(vec![], 0)));
		assert_eq!(stats.expanded, 0);
	}

	#[test]
	fn missing_successors() {
		let seeker = Seeker::<fn(&u8) -> Vec<(u8, (), Cost)>>::default();

		assert_eq!(seeker.search(1, 2), Err(SearchError::MissingSuccessors));
		assert_eq!(seeker.search(1, 1), Err(SearchError::MissingSuccessors));
		assert_eq!(
			seeker.search_all(vec![(1, 1)]),
			Err(SearchError::MissingSuccessors)
		);
	}

	#[test]
	fn dead_end() {
		// C is only reachable through B, which has no successors
		let seeker = Seeker::new(|state: &&str| match *state {
			"A" => vec![("B", 'b', 1)],
			"B" => vec![],
			"C" => vec![("A", 'a', 1)],
			_ => unreachable!(),
		});

		let (path, stats) = seeker.find_path_with_stats("A", "C").unwrap();
		assert_eq!(path, None);
		assert_eq!(stats.expanded, 2);
	}

	#[test]
	fn repeated_search() {
		let seeker = Seeker::new(diamond());

		let first = seeker.search('A', 'D');
		let second = seeker.search('A', 'D');
		assert_eq!(first, second);
		assert_eq!(seeker.search('B', 'A'), Ok(None));
		assert_eq!(seeker.search('B', 'A'), Ok(None));
	}

	#[test]
	fn heuristic_saves_expansions() {
		let distance = |&n: &i32, &goal: &i32| (goal - n).unsigned_abs() as Cost;
		let informed = Seeker::with_heuristic(line, distance);
		let uninformed = Seeker::new(line);

		let (informed_path, informed_stats) = informed.find_path_with_stats(5, 10).unwrap();
		let (uninformed_path, uninformed_stats) = uninformed.find_path_with_stats(5, 10).unwrap();

		assert_eq!(informed_path.as_ref().map(|p| p.cost), Some(5));
		assert_eq!(informed_path, uninformed_path);
		assert_eq!(informed_stats.expanded, 5);
		assert!(uninformed_stats.expanded > informed_stats.expanded);
	}

	#[test]
	fn maximal_heuristic_does_not_overflow() {
		// 1 is a dead end, the heuristic marks it with usize::MAX
		let successors = |&n: &u32| match n {
			0 => vec![(1, 'a', 1), (2, 'b', 5)],
			2 => vec![(3, 'c', 1)],
			_ => vec![],
		};
		let dead_end = |&n: &u32, _: &u32| if n == 1 { Cost::MAX } else { 0 };
		let seeker = Seeker::with_heuristic(successors, dead_end);

		let (path, stats) = seeker.find_path_with_stats(0, 3).unwrap();
		assert_eq!(path, Some(Path::new(vec!['b', 'c'], 6)));
		// 1 stays behind in the Frontier
		assert_eq!(stats.expanded, 2);
	}

	#[test]
	fn maximal_edge_costs_saturate() {
		let seeker = Seeker::new(|&n: &u32| match n {
			0 => vec![(1, 'x', Cost::MAX)],
			1 => vec![(2, 'y', Cost::MAX)],
			_ => vec![],
		});

		let path = seeker.find_path(0, 2).unwrap().unwrap();
		assert_eq!(path.actions, vec!['x', 'y']);
		assert_eq!(path.cost, Cost::MAX);
	}

	#[test]
	fn relaxed_entries_become_stale() {
		let seeker = Seeker::new(diamond());

		// C and D are both queued twice, their expensive entries are never expanded
		let (_, stats) = seeker.find_path_with_stats('A', 'E').unwrap();
		assert_eq!(stats.relaxed, 2);
		assert_eq!(stats.stale, 2);
		assert_eq!(stats.expanded, 4);
	}

	#[test]
	fn tie_break_changes_order_not_cost() {
		// two routes of equal cost: A-B-D and A-C-D
		let graph: Graph<char, char> = [
			('A', 'B', 'b', 1),
			('A', 'C', 'c', 1),
			('B', 'D', 'd', 1),
			('C', 'D', 'd', 1),
		]
		.into_iter()
		.collect();

		let fifo = Seeker::new(graph.clone());
		let lifo = Seeker::new(graph).with_config(SeekerConfig::DEPTH_FIRST_TIES);

		assert_eq!(fifo.search('A', 'D'), Ok(Some(vec!['b', 'd'])));
		assert_eq!(lifo.search('A', 'D'), Ok(Some(vec!['c', 'd'])));
	}

	#[test]
	fn debug_output() {
		let seeker = Seeker::new(diamond());
		let debug = format!("{:?}", seeker);

		assert!(debug.contains("has_successors: true"));
		assert!(debug.contains("NullHeuristic"));
	}

	#[cfg(feature = "parallel")]
	#[test]
	fn parallel_matches_serial() {
		let seeker = Seeker::new(diamond());
		let states = ['A', 'B', 'C', 'D'];
		let pairs: Vec<(char, char)> = states
			.iter()
			.flat_map(|&a| states.iter().map(move |&b| (a, b)))
			.collect();

		assert_eq!(
			seeker.search_all_parallel(pairs.clone()),
			seeker.search_all(pairs)
		);
	}

	#[cfg(feature = "parallel")]
	#[test]
	fn parallel_from_any_parallel_iterator() {
		use rayon::prelude::*;

		let seeker = Seeker::new(|&n: &u8| if n < 3 { vec![(n + 1, n, 1)] } else { vec![] });
		let to_three = (0..5_u8).into_par_iter().map(|start| (start, 3));

		assert_eq!(
			seeker.search_all_parallel(to_three),
			Ok(vec![
				Some(vec![0, 1, 2]),
				Some(vec![1, 2]),
				Some(vec![2]),
				Some(vec![]),
				None
			])
		);
	}
}
