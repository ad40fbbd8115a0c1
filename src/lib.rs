#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find the cheapest way between two States of any search space, using A*.
//!
//! ## Introduction
//! Many problems can be phrased as "which Actions lead from here to there at the lowest Cost":
//! routing on a road map, solving puzzles, planning moves in a game. This crate provides the
//! search for all of them, without knowing anything about the problem itself. A State can be any
//! value that can be compared, hashed and cloned. The meaning of the States, the Actions between
//! them and what those Actions cost is supplied by the caller in the form of a successor
//! function, and optionally a Heuristic that estimates how far a State is from the Goal.
//!
//! Without a Heuristic (or with the [`NullHeuristic`]) the search is a plain uniform-cost
//! search, which explores States in order of their distance from the start. A good Heuristic
//! lets the search head towards the Goal and expand far fewer States, as long as it never
//! overestimates the remaining Cost.
//!
//! ## Examples
//! A small road map:
//! ```
//! use seeker::{Graph, Seeker};
//!
//! let mut roads = Graph::new();
//! roads
//! 	.add_undirected("ara", "sib", "ara-sib", 140)
//! 	.add_undirected("ara", "tim", "ara-tim", 118)
//! 	.add_undirected("sib", "fag", "sib-fag", 99)
//! 	.add_undirected("sib", "rim", "sib-rim", 80)
//! 	.add_undirected("rim", "pit", "rim-pit", 97)
//! 	.add_undirected("fag", "buc", "fag-buc", 211)
//! 	.add_undirected("pit", "buc", "pit-buc", 101);
//!
//! let seeker = Seeker::new(roads);
//!
//! // find_path returns Ok(Some(Path)) on success
//! let path = seeker.find_path("ara", "buc").unwrap().unwrap();
//!
//! assert_eq!(path.actions, vec!["ara-sib", "sib-rim", "rim-pit", "pit-buc"]);
//! assert_eq!(path.cost, 418);
//! ```
//! The successor function does not have to be a [`Graph`]. Any closure that returns the
//! `(successor, action, cost)` Tuples of a State will do, so the search space can be computed
//! on the fly and never needs to exist in memory as a whole:
//! ```
//! use seeker::Seeker;
//!
//! // reach a number by adding 1 or doubling, where doubling is cheaper
//! let seeker = Seeker::new(|&n: &u64| vec![(n + 1, "+1", 2), (n * 2, "*2", 1)]);
//!
//! let actions = seeker.search(1, 8).unwrap();
//! assert_eq!(actions, Some(vec!["*2", "*2", "*2"]));
//! ```
//!
//! ### Errors
//! An unreachable Goal is a normal result and is reported as `Ok(None)`. Errors
//! ([`SearchError`]) only signal that the crate was used incorrectly, for example searching with
//! a [`Seeker`] that was created through [`Default`] and has no successor function.
//!
//! ### Configuration
//! [`Seeker::with_config`] takes a [`SeekerConfig`] that controls pre-allocation, tie-breaking
//! between equally good States, and whether a State that is rediscovered over a cheaper route
//! before it was expanded gets its Path updated ([`DiscoveryPolicy`]).
//!
//! ## Crate Features
//! - `parallel` (default): enables [`Seeker::search_all_parallel`] using rayon.
//! - `log`: emits `trace!` and `debug!` records about expansions and timings through the `log`
//! 	crate. Recommended to leave this off unless working on the search itself.

/// a Type to represent the Cost of taking an Action
pub type Cost = usize;

#[macro_use]
mod utils;

mod error;
pub use self::error::{Result, SearchError};

pub mod frontier;
pub use self::frontier::{PriorityFrontier, TieBreak};

mod successors;
pub use self::successors::Successors;

mod heuristic;
pub use self::heuristic::{Heuristic, NullHeuristic};

mod path;
pub use self::path::Path;

pub mod graph;
pub use self::graph::Graph;

mod seeker;
pub use self::seeker::{DiscoveryPolicy, SearchStats, Seeker, SeekerConfig};

/// The most commonly used types
pub mod prelude {
	pub use crate::{
		Cost, DiscoveryPolicy, Graph, Heuristic, NullHeuristic, Path, Seeker, SeekerConfig,
		Successors,
	};
}
