//! Department grouping.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Student;

/// Students sharing one department (or all students without one).
#[derive(Debug, Clone)]
pub struct DepartmentGroup<'a> {
    /// Department ID, `None` for the no-department group.
    pub department: Option<&'a str>,
    /// Members in roster order (or shuffled order after
    /// [`DepartmentGroups::shuffle_within`]).
    pub students: Vec<&'a Student>,
}

/// A roster split by department, groups in first-encounter order.
#[derive(Debug, Clone, Default)]
pub struct DepartmentGroups<'a> {
    groups: Vec<DepartmentGroup<'a>>,
}

impl<'a> DepartmentGroups<'a> {
    /// Groups students by department.
    ///
    /// Group order follows the first appearance of each department in
    /// the input; member order follows input order.
    pub fn from_students(students: &'a [Student]) -> Self {
        let mut index: HashMap<Option<&'a str>, usize> = HashMap::new();
        let mut groups: Vec<DepartmentGroup<'a>> = Vec::new();

        for student in students {
            let key = student.department();
            let slot = *index.entry(key).or_insert_with(|| {
                groups.push(DepartmentGroup {
                    department: key,
                    students: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].students.push(student);
        }

        Self { groups }
    }

    /// Number of groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups (empty roster).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates over groups in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = &DepartmentGroup<'a>> {
        self.groups.iter()
    }

    /// `(department, member count)` per group, in encounter order.
    pub fn sizes(&self) -> Vec<(Option<&'a str>, usize)> {
        self.groups
            .iter()
            .map(|g| (g.department, g.students.len()))
            .collect()
    }

    /// Size of the largest group.
    pub fn largest_group_size(&self) -> usize {
        self.groups
            .iter()
            .map(|g| g.students.len())
            .max()
            .unwrap_or(0)
    }

    /// Shuffles each group's members in place, group by group.
    pub fn shuffle_within<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for group in &mut self.groups {
            group.students.shuffle(rng);
        }
    }

    /// Round-robin across groups: one member from each non-empty group in
    /// turn until every group is exhausted.
    pub fn interleave(&self) -> Vec<&'a Student> {
        let total = self.groups.iter().map(|g| g.students.len()).sum();
        let mut ordered = Vec::with_capacity(total);
        let mut cursors: Vec<_> = self.groups.iter().map(|g| g.students.iter()).collect();

        while ordered.len() < total {
            for cursor in &mut cursors {
                if let Some(&student) = cursor.next() {
                    ordered.push(student);
                }
            }
        }

        ordered
    }

    /// Refills the department slots of `students` with each group's
    /// members in group order.
    ///
    /// The department sequence of the result matches `students`; only
    /// members of the same department trade places.
    pub fn fill_slots(&self, students: &'a [Student]) -> Vec<&'a Student> {
        let index: HashMap<Option<&'a str>, usize> = self
            .groups
            .iter()
            .enumerate()
            .map(|(i, g)| (g.department, i))
            .collect();
        let mut cursors: Vec<_> = self.groups.iter().map(|g| g.students.iter()).collect();

        students
            .iter()
            .filter_map(|s| {
                let &i = index.get(&s.department())?;
                cursors[i].next().copied()
            })
            .collect()
    }
}
