use std::fmt;

/// Reasons a bidirectional search can stop without an answer.
///
/// Finding no path at all is not an error; searches report it as `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The configured step budget ran out before both halves finished.
    StepLimitExceeded {
        /// Half-search steps taken, stale pops included.
        steps: usize,
        /// Cost of the best path found so far, if any.
        best_so_far: Option<i32>,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StepLimitExceeded {
                steps,
                best_so_far: Some(cost),
            } => write!(f, "step limit exceeded after {steps} steps (best cost so far {cost})"),
            Self::StepLimitExceeded {
                steps,
                best_so_far: None,
            } => write!(f, "step limit exceeded after {steps} steps (no path found yet)"),
        }
    }
}

impl std::error::Error for SearchError {}
