use crate::frontier::TieBreak;

/// How a State that is rediscovered while still waiting in the Frontier is treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiscoveryPolicy {
	/// If the new route to the State is strictly cheaper, its recorded Path is replaced and it is
	/// queued again with the lower priority. The previous queue entry stays behind and is skipped
	/// once it is popped.
	///
	/// This yields optimal Paths for the null Heuristic and any consistent Heuristic.
	Relax,
	/// The Path and priority recorded on first discovery are final.
	///
	/// This never re-queues a State, but it is **not** optimal in general, not even with the
	/// null Heuristic: a State first reached over an expensive Edge keeps that Path even if a
	/// cheaper one shows up before it is expanded.
	FirstDiscoveryWins,
}

/// Options for configuring a [`Seeker`](crate::Seeker)
///
/// Default options:
/// ```
/// # use seeker::{DiscoveryPolicy, SeekerConfig, TieBreak};
/// assert_eq!(
/// 	SeekerConfig {
/// 		size_hint: 64,
/// 		tie_break: TieBreak::Fifo,
/// 		policy: DiscoveryPolicy::Relax,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeekerConfig {
	/// The number of States a search is expected to touch (defaults to `64`).
	///
	/// Only used to pre-allocate the internal tables, a wrong guess costs a few reallocations.
	pub size_hint: usize,
	/// Which of several States with the same priority is expanded first (defaults to
	/// [`TieBreak::Fifo`]).
	pub tie_break: TieBreak,
	/// How cheaper rediscoveries of queued States are handled (defaults to
	/// [`DiscoveryPolicy::Relax`]).
	pub policy: DiscoveryPolicy,
}

impl SeekerConfig {
	/// a SeekerConfig that fixes every Path on first discovery
	///
	/// Values:
	/// ```
	/// # use seeker::{DiscoveryPolicy, SeekerConfig, TieBreak};
	/// assert_eq!(
	/// 	SeekerConfig {
	/// 		size_hint: 64,
	/// 		tie_break: TieBreak::Fifo,
	/// 		policy: DiscoveryPolicy::FirstDiscoveryWins,
	/// 	},
	/// 	SeekerConfig::FIRST_DISCOVERY
	/// );
	/// ```
	pub const FIRST_DISCOVERY: SeekerConfig = SeekerConfig {
		size_hint: 64,
		tie_break: TieBreak::Fifo,
		policy: DiscoveryPolicy::FirstDiscoveryWins,
	};
	/// a SeekerConfig that expands the most recently discovered State among equal priorities
	///
	/// Values:
	/// ```
	/// # use seeker::{DiscoveryPolicy, SeekerConfig, TieBreak};
	/// assert_eq!(
	/// 	SeekerConfig {
	/// 		size_hint: 64,
	/// 		tie_break: TieBreak::Lifo,
	/// 		policy: DiscoveryPolicy::Relax,
	/// 	},
	/// 	SeekerConfig::DEPTH_FIRST_TIES
	/// );
	/// ```
	pub const DEPTH_FIRST_TIES: SeekerConfig = SeekerConfig {
		size_hint: 64,
		tie_break: TieBreak::Lifo,
		policy: DiscoveryPolicy::Relax,
	};

	/// Creates a default config with the given `size_hint`.
	pub fn with_size_hint(size_hint: usize) -> SeekerConfig {
		SeekerConfig {
			size_hint,
			..Default::default()
		}
	}
}

impl Default for SeekerConfig {
	fn default() -> SeekerConfig {
		SeekerConfig {
			size_hint: 64,
			tie_break: TieBreak::Fifo,
			policy: DiscoveryPolicy::Relax,
		}
	}
}
