use thiserror::Error;

/// Errors that signal misuse of the crate.
///
/// Note that an unreachable Goal is **not** an error: searches report that as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
	/// [`pop_min`](crate::PriorityFrontier::pop_min) was called on an empty Frontier.
	#[error("could not pop_min(), the frontier is empty")]
	EmptyQueue,
	/// A search was started on a [`Seeker`](crate::Seeker) that has no successor function.
	#[error("the seeker has no successor function, supply one with Seeker::new")]
	MissingSuccessors,
}

/// Shorthand for results with a [`SearchError`]
pub type Result<T> = std::result::Result<T, SearchError>;
