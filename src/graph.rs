//! An explicit, immutable Graph description

use crate::{Cost, Successors};
use hashbrown::HashMap;
use std::hash::Hash;

/// A directed Graph stored as adjacency lists.
///
/// Useful when the State space is known up front, instead of being computed on the fly.
/// The Graph is filled once and then only read: it implements [`Successors`] by handing out
/// copies of the stored Edges, so one Graph can back any number of searches.
///
/// States without outgoing Edges, including States the Graph has never heard of, simply have no
/// successors.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use seeker::{Graph, Seeker};
/// let graph: Graph<char, &str> = [
/// 	('A', 'B', "a-b", 1),
/// 	('B', 'C', "b-c", 2),
/// 	('A', 'C', "a-c", 5),
/// ]
/// .into_iter()
/// .collect();
///
/// let seeker = Seeker::new(graph);
/// let path = seeker.find_path('A', 'C').unwrap().unwrap();
///
/// assert_eq!(path.actions, vec!["a-b", "b-c"]);
/// assert_eq!(path.cost, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<St: Eq + Hash, A> {
	edges: HashMap<St, Vec<(St, A, Cost)>>,
	edge_count: usize,
}

impl<St: Eq + Hash + Clone, A> Graph<St, A> {
	/// Creates an empty Graph
	pub fn new() -> Self {
		Graph {
			edges: HashMap::new(),
			edge_count: 0,
		}
	}

	/// Adds a directed Edge from `from` to `to`, labeled with `action`
	pub fn add_edge(&mut self, from: St, to: St, action: A, cost: Cost) -> &mut Self {
		self.edges.entry(to.clone()).or_default();
		self.edges.entry(from).or_default().push((to, action, cost));
		self.edge_count += 1;
		self
	}

	/// Adds the Edge from `a` to `b` and its mirror image, both labeled with `action`
	pub fn add_undirected(&mut self, a: St, b: St, action: A, cost: Cost) -> &mut Self
	where
		A: Clone,
	{
		self.add_edge(a.clone(), b.clone(), action.clone(), cost);
		self.add_edge(b, a, action, cost)
	}

	/// All Edges leaving `state`
	pub fn edges(&self, state: &St) -> &[(St, A, Cost)] {
		self.edges.get(state).map(Vec::as_slice).unwrap_or(&[])
	}

	/// `true` if `state` is the source or target of any Edge
	pub fn contains(&self, state: &St) -> bool {
		self.edges.contains_key(state)
	}

	/// Iterates over every State mentioned by the Graph, in no particular order
	pub fn states(&self) -> impl Iterator<Item = &St> {
		self.edges.keys()
	}

	/// The number of distinct States
	pub fn node_count(&self) -> usize {
		self.edges.len()
	}

	/// The number of directed Edges
	pub fn edge_count(&self) -> usize {
		self.edge_count
	}
}

impl<St: Eq + Hash + Clone, A> Default for Graph<St, A> {
	fn default() -> Self {
		Self::new()
	}
}

impl<St: Eq + Hash + Clone, A> FromIterator<(St, St, A, Cost)> for Graph<St, A> {
	fn from_iter<I: IntoIterator<Item = (St, St, A, Cost)>>(iter: I) -> Self {
		let mut graph = Graph::new();
		for (from, to, action, cost) in iter {
			graph.add_edge(from, to, action, cost);
		}
		graph
	}
}

impl<St: Eq + Hash + Clone, A: Clone> Successors<St, A> for Graph<St, A> {
	type Edges = Vec<(St, A, Cost)>;

	fn successors(&self, state: &St) -> Self::Edges {
		self.edges(state).to_vec()
	}
}
