// Logging only exists with the `log` feature. Without it, these expand to nothing and the
// arguments are never evaluated.

macro_rules! log_trace {
	($($arg:tt)*) => {
		#[cfg(feature = "log")]
		{
			log::trace!($($arg)*);
		}
	};
}

macro_rules! log_debug {
	($($arg:tt)*) => {
		#[cfg(feature = "log")]
		{
			log::debug!($($arg)*);
		}
	};
}
