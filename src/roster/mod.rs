//! Roster ordering.
//!
//! Produces the sequence in which students are handed to the allocator.
//! Because seats are filled row-major, consecutive roster entries end up
//! side by side; interleaving departments keeps classmates apart.
//!
//! # Algorithm
//!
//! 1. Reject duplicate student IDs.
//! 2. Group by department in first-encounter order (students without a
//!    department form their own group).
//! 3. Optionally shuffle inside each group (seeded `StdRng` or thread RNG).
//! 4. Round-robin across groups, or, with interleaving off, put each
//!    group's members back into the slots its department held in the input.
//!
//! # Example
//!
//! ```
//! use exam_seating::models::Student;
//! use exam_seating::roster::{order_roster, RosterStrategy};
//!
//! let students = vec![
//!     Student::new("A", "1").with_department("X"),
//!     Student::new("B", "2").with_department("X"),
//!     Student::new("C", "3").with_department("Y"),
//!     Student::new("D", "4").with_department("Y"),
//! ];
//! let ordered = order_roster(&students, &RosterStrategy::default()).unwrap();
//! let ids: Vec<&str> = ordered.iter().map(|s| s.id.as_str()).collect();
//! assert_eq!(ids, ["A", "C", "B", "D"]);
//! ```

mod groups;

pub use groups::{DepartmentGroup, DepartmentGroups};

use std::collections::HashSet;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{AllocationError, AllocationResult};
use crate::models::Student;

/// How the roster is ordered before allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RosterStrategy {
    /// Round-robin across department groups (default: true).
    pub interleave_by_department: bool,
    /// Shuffle each group before round-robin (default: false).
    pub randomize_within_department: bool,
    /// RNG seed for the shuffle. `None` = non-deterministic.
    pub seed: Option<u64>,
}

impl Default for RosterStrategy {
    fn default() -> Self {
        Self {
            interleave_by_department: true,
            randomize_within_department: false,
            seed: None,
        }
    }
}

impl RosterStrategy {
    /// Keeps the caller's order untouched.
    pub fn preserve_order() -> Self {
        Self {
            interleave_by_department: false,
            ..Self::default()
        }
    }

    /// Enables or disables department interleaving.
    pub fn with_interleave(mut self, interleave: bool) -> Self {
        self.interleave_by_department = interleave;
        self
    }

    /// Enables shuffling inside department groups with an optional seed.
    pub fn with_randomization(mut self, seed: Option<u64>) -> Self {
        self.randomize_within_department = true;
        self.seed = seed;
        self
    }
}

/// Orders the roster according to `strategy`.
///
/// Returns a fully materialized sequence borrowing from `students`.
///
/// # Errors
/// [`AllocationError::DuplicateStudent`] if two students share an ID.
pub fn order_roster<'a>(
    students: &'a [Student],
    strategy: &RosterStrategy,
) -> AllocationResult<Vec<&'a Student>> {
    ensure_unique_ids(students.iter())?;

    if !strategy.interleave_by_department && !strategy.randomize_within_department {
        return Ok(students.iter().collect());
    }

    let mut groups = DepartmentGroups::from_students(students);
    if strategy.randomize_within_department {
        match strategy.seed {
            Some(seed) => groups.shuffle_within(&mut StdRng::seed_from_u64(seed)),
            None => groups.shuffle_within(&mut rand::rng()),
        }
    }

    if !strategy.interleave_by_department {
        return Ok(groups.fill_slots(students));
    }

    debug!(
        "Interleaving {} students across {} department groups (largest {})",
        students.len(),
        groups.len(),
        groups.largest_group_size()
    );

    Ok(groups.interleave())
}

/// Fails on the first repeated student ID.
pub(crate) fn ensure_unique_ids<'a>(
    students: impl IntoIterator<Item = &'a Student>,
) -> AllocationResult<()> {
    let mut seen = HashSet::new();
    for student in students {
        if !seen.insert(student.id.as_str()) {
            return Err(AllocationError::DuplicateStudent {
                student_id: student.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, dept: Option<&str>) -> Student {
        let s = Student::new(id, format!("R-{id}"));
        match dept {
            Some(d) => s.with_department(d),
            None => s,
        }
    }

    fn ids(students: &[&Student]) -> Vec<String> {
        students.iter().map(|s| s.id.clone()).collect()
    }

    fn mixed_roster() -> Vec<Student> {
        (0..30)
            .map(|i| {
                let dept = ["CS", "EE", "ME"][i % 3];
                student(&format!("S{i:02}"), Some(dept))
            })
            .collect()
    }

    #[test]
    fn test_interleave_two_departments() {
        let students = vec![
            student("A", Some("X")),
            student("B", Some("X")),
            student("C", Some("Y")),
            student("D", Some("Y")),
        ];
        let ordered = order_roster(&students, &RosterStrategy::default()).unwrap();
        assert_eq!(ids(&ordered), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_no_department_forms_own_group() {
        let students = vec![
            student("A", None),
            student("B", Some("X")),
            student("C", None),
            student("D", Some("X")),
        ];
        let ordered = order_roster(&students, &RosterStrategy::default()).unwrap();
        assert_eq!(ids(&ordered), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_preserve_order() {
        let students = vec![
            student("A", Some("X")),
            student("B", Some("X")),
            student("C", Some("Y")),
        ];
        let ordered = order_roster(&students, &RosterStrategy::preserve_order()).unwrap();
        assert_eq!(ids(&ordered), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let students = mixed_roster();
        let strategy = RosterStrategy::default().with_randomization(Some(42));

        let first = order_roster(&students, &strategy).unwrap();
        let second = order_roster(&students, &strategy).unwrap();
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(first.len(), students.len());
    }

    #[test]
    fn test_shuffle_preserves_interleave() {
        let students = mixed_roster();
        let strategy = RosterStrategy::default().with_randomization(Some(9));
        let ordered = order_roster(&students, &strategy).unwrap();

        // Equal-sized groups: every consecutive pair differs in department.
        for pair in ordered.windows(2) {
            assert_ne!(pair[0].department(), pair[1].department());
        }
    }

    #[test]
    fn test_shuffle_without_interleave_keeps_members() {
        let students = mixed_roster();
        let strategy = RosterStrategy::preserve_order().with_randomization(Some(3));
        let ordered = order_roster(&students, &strategy).unwrap();

        let mut got = ids(&ordered);
        got.sort();
        let mut expected: Vec<String> = students.iter().map(|s| s.id.clone()).collect();
        expected.sort();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_shuffle_without_interleave_keeps_department_sequence() {
        let students: Vec<Student> = (0..10)
            .map(|i| student(&format!("S{i}"), Some(if i < 5 { "X" } else { "Y" })))
            .collect();
        let strategy = RosterStrategy::preserve_order().with_randomization(Some(1));
        let ordered = order_roster(&students, &strategy).unwrap();

        let depts: Vec<Option<&str>> = ordered.iter().map(|s| s.department()).collect();
        let expected: Vec<Option<&str>> = students.iter().map(|s| s.department()).collect();
        assert_eq!(depts, expected);

        let again = order_roster(&students, &strategy).unwrap();
        assert_eq!(ids(&ordered), ids(&again));
    }

    #[test]
    fn test_unseeded_shuffle_keeps_members() {
        let students = mixed_roster();
        let strategy = RosterStrategy::default().with_randomization(None);
        let ordered = order_roster(&students, &strategy).unwrap();
        assert_eq!(ordered.len(), students.len());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let students = vec![student("S1", Some("X")), student("S1", Some("Y"))];
        let err = order_roster(&students, &RosterStrategy::default()).unwrap_err();
        assert_eq!(
            err,
            AllocationError::DuplicateStudent {
                student_id: "S1".into()
            }
        );
    }

    #[test]
    fn test_empty_roster() {
        let ordered = order_roster(&[], &RosterStrategy::default()).unwrap();
        assert!(ordered.is_empty());
    }

    #[test]
    fn test_strategy_deserialize_defaults() {
        let s: RosterStrategy =
            serde_json::from_str(r#"{"randomizeWithinDepartment":true,"seed":5}"#).unwrap();
        assert!(s.interleave_by_department);
        assert!(s.randomize_within_department);
        assert_eq!(s.seed, Some(5));
    }
}
