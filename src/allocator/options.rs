//! Allocation options.

use serde::{Deserialize, Serialize};

use crate::roster::RosterStrategy;

/// Default number of queued students inspected for an adjacency swap.
pub const DEFAULT_ADJACENCY_LOOKAHEAD: usize = 5;

/// Options for one allocation run.
///
/// Deserializes from the camelCase keys callers already use, filling in
/// defaults for anything missing:
///
/// ```
/// use exam_seating::allocator::AllocationOptions;
///
/// let opts: AllocationOptions = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
/// assert!(opts.interleave_by_department);
/// assert_eq!(opts.adjacency_lookahead, 5);
/// assert_eq!(opts.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AllocationOptions {
    /// Round-robin the roster across departments (default: true).
    pub interleave_by_department: bool,
    /// Shuffle inside each department group (default: false).
    pub randomize_within_department: bool,
    /// Shuffle seed. `None` = non-deterministic shuffle.
    pub seed: Option<u64>,
    /// Queued students inspected when the left neighbour shares the
    /// candidate's department (default: 5). Zero disables swapping.
    pub adjacency_lookahead: usize,
    /// Fail with `EmptyRoster` instead of returning an empty report
    /// (default: false).
    pub treat_empty_roster_as_error: bool,
}

impl Default for AllocationOptions {
    fn default() -> Self {
        Self {
            interleave_by_department: true,
            randomize_within_department: false,
            seed: None,
            adjacency_lookahead: DEFAULT_ADJACENCY_LOOKAHEAD,
            treat_empty_roster_as_error: false,
        }
    }
}

impl AllocationOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables department interleaving.
    pub fn with_interleave(mut self, interleave: bool) -> Self {
        self.interleave_by_department = interleave;
        self
    }

    /// Enables in-department shuffling with an optional seed.
    pub fn with_randomization(mut self, seed: Option<u64>) -> Self {
        self.randomize_within_department = true;
        self.seed = seed;
        self
    }

    /// Sets the adjacency swap window.
    pub fn with_lookahead(mut self, lookahead: usize) -> Self {
        self.adjacency_lookahead = lookahead;
        self
    }

    /// Treats an empty roster as an error.
    pub fn with_empty_roster_error(mut self, enabled: bool) -> Self {
        self.treat_empty_roster_as_error = enabled;
        self
    }

    /// Roster ordering portion of these options.
    pub fn roster_strategy(&self) -> RosterStrategy {
        RosterStrategy {
            interleave_by_department: self.interleave_by_department,
            randomize_within_department: self.randomize_within_department,
            seed: self.seed,
        }
    }
}
