//! Allocation report builder.
//!
//! Turns raw allocator output into the caller-facing
//! [`AllocationReport`]: runs the plan validator and summarizes each
//! candidate room (seats filled, departments present).

use std::collections::{BTreeSet, HashMap};

use crate::allocator::Allocation;
use crate::models::{AllocationReport, RoomSummary, Student};
use crate::validation::validate_plan;

/// Builds the report for one allocation run.
///
/// `roster` is the full roster the allocation was run against; it is used
/// to check membership and conservation.
pub fn build_report(
    exam_id: &str,
    roster: &[&Student],
    allocation: Allocation<'_>,
) -> AllocationReport {
    let violations = validate_plan(
        roster,
        &allocation.candidates,
        &allocation.assignments,
        &allocation.unassigned,
    );

    let mut summaries: Vec<RoomSummary> = allocation
        .candidates
        .iter()
        .map(|grid| RoomSummary {
            room_id: grid.room().id.clone(),
            room_name: grid.room().name.clone(),
            seats_filled: 0,
            seats_total: grid.capacity(),
            departments: Vec::new(),
            students_without_department: 0,
        })
        .collect();
    let index: HashMap<&str, usize> = allocation
        .candidates
        .iter()
        .enumerate()
        .map(|(i, grid)| (grid.room().id.as_str(), i))
        .collect();

    let mut departments: Vec<BTreeSet<&str>> = vec![BTreeSet::new(); summaries.len()];
    for a in &allocation.assignments {
        let Some(&i) = index.get(a.room_id.as_str()) else {
            continue;
        };
        summaries[i].seats_filled += 1;
        match a.department_id.as_deref() {
            Some(dept) => {
                departments[i].insert(dept);
            }
            None => summaries[i].students_without_department += 1,
        }
    }
    for (summary, depts) in summaries.iter_mut().zip(departments) {
        summary.departments = depts.into_iter().map(String::from).collect();
    }

    let total_capacity = summaries.iter().map(|s| s.seats_total).sum();
    let rooms_used = summaries.iter().filter(|s| s.seats_filled > 0).count();

    AllocationReport {
        exam_id: exam_id.to_string(),
        total_students: roster.len(),
        assigned_count: allocation.assignments.len(),
        total_capacity,
        rooms_used,
        assignments: allocation.assignments,
        unassigned: allocation.unassigned,
        room_summaries: summaries,
        skipped_rooms: allocation.skipped_rooms,
        violations,
    }
}
