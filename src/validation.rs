//! Input validation and plan invariant checks.
//!
//! Two stages:
//!
//! - [`validate_input`] runs before allocation and fails fast on the first
//!   structural problem (duplicate student IDs, roll numbers or room IDs).
//!   Room geometry is checked by [`RoomGrid`] when the allocator builds
//!   its candidate list.
//! - [`validate_plan`] runs after allocation and never fails: it returns
//!   every breach of the hard invariants as a [`ConstraintViolation`].
//!   A non-empty result means the allocator is defective, so each finding
//!   is also logged at `error` level.

use std::collections::{HashMap, HashSet};

use log::error;

use crate::error::{AllocationError, AllocationResult};
use crate::grid::RoomGrid;
use crate::models::{
    ConstraintViolation, Room, SeatAssignment, Student, UnassignedStudent, ViolationKind,
};

/// Validates allocation inputs.
///
/// Checks, in order:
/// 1. No duplicate student IDs
/// 2. No duplicate roll numbers
/// 3. No duplicate room IDs
///
/// # Errors
/// The first problem found, as an [`AllocationError`].
pub fn validate_input(students: &[Student], rooms: &[Room]) -> AllocationResult<()> {
    let mut ids = HashSet::new();
    for s in students {
        if !ids.insert(s.id.as_str()) {
            return Err(AllocationError::DuplicateStudent {
                student_id: s.id.clone(),
            });
        }
    }

    let mut rolls = HashSet::new();
    for s in students {
        if !rolls.insert(s.roll_number.as_str()) {
            return Err(AllocationError::DuplicateRollNumber {
                roll_number: s.roll_number.clone(),
            });
        }
    }

    let mut room_ids = HashSet::new();
    for r in rooms {
        if !room_ids.insert(r.id.as_str()) {
            return Err(AllocationError::DuplicateRoom {
                room_id: r.id.clone(),
            });
        }
    }

    Ok(())
}

/// Checks a produced plan against its hard invariants.
///
/// Checks:
/// 1. Every `(room, row, column)` is assigned at most once
/// 2. Every student holds at most one seat
/// 3. Every assigned or unassigned student is in the roster
/// 4. Every assignment names a candidate room and a usable seat whose
///    seat number matches its position
/// 5. Assigned + unassigned equals the roster size
///
/// Findings are returned in plan order.
pub fn validate_plan(
    roster: &[&Student],
    grids: &[RoomGrid<'_>],
    assignments: &[SeatAssignment],
    unassigned: &[UnassignedStudent],
) -> Vec<ConstraintViolation> {
    let mut violations = Vec::new();

    // Seat exclusivity
    let mut occupants: HashMap<(&str, i32, i32), Vec<String>> = HashMap::new();
    for a in assignments {
        occupants
            .entry(a.seat_key())
            .or_default()
            .push(a.student_id.clone());
    }
    let mut reported_seats = HashSet::new();
    for a in assignments {
        let key = a.seat_key();
        if occupants[&key].len() > 1 && reported_seats.insert(key) {
            violations.push(ConstraintViolation::duplicate_seat(
                &a.room_id,
                a.row,
                a.column,
                occupants[&key].clone(),
            ));
        }
    }

    // Student exclusivity
    let mut seated = HashSet::new();
    let mut reported_students = HashSet::new();
    for a in assignments {
        if !seated.insert(a.student_id.as_str())
            && reported_students.insert(a.student_id.as_str())
        {
            violations.push(ConstraintViolation::duplicate_student(&a.student_id));
        }
    }

    // Roster membership
    let roster_ids: HashSet<&str> = roster.iter().map(|s| s.id.as_str()).collect();
    let outcome_ids = assignments
        .iter()
        .map(|a| a.student_id.as_str())
        .chain(unassigned.iter().map(|u| u.student_id.as_str()));
    let mut reported_unknown = HashSet::new();
    for id in outcome_ids {
        if !roster_ids.contains(id) && reported_unknown.insert(id) {
            violations.push(ConstraintViolation::unknown_student(id));
        }
    }

    // Seat validity
    let by_room: HashMap<&str, &RoomGrid<'_>> =
        grids.iter().map(|g| (g.room().id.as_str(), g)).collect();
    for a in assignments {
        match by_room.get(a.room_id.as_str()) {
            None => violations.push(ConstraintViolation::new(
                ViolationKind::InvalidSeat,
                vec![a.student_id.clone(), a.room_id.clone()],
                format!(
                    "Student '{}' assigned to unknown room '{}'",
                    a.student_id, a.room_id
                ),
            )),
            Some(grid) if !grid.is_usable(a.position()) => {
                violations.push(ConstraintViolation::new(
                    ViolationKind::InvalidSeat,
                    vec![a.student_id.clone(), a.room_id.clone()],
                    format!(
                        "Student '{}' assigned to unusable seat ({}, {}) in room '{}'",
                        a.student_id, a.row, a.column, a.room_id
                    ),
                ))
            }
            Some(grid) if grid.seat_number(a.position()) != a.seat_number => {
                violations.push(ConstraintViolation::new(
                    ViolationKind::InvalidSeat,
                    vec![a.student_id.clone(), a.room_id.clone()],
                    format!(
                        "Seat number {} does not match ({}, {}) in room '{}'",
                        a.seat_number, a.row, a.column, a.room_id
                    ),
                ))
            }
            Some(_) => {}
        }
    }

    // Conservation
    let accounted = assignments.len() + unassigned.len();
    if accounted != roster.len() {
        violations.push(ConstraintViolation::new(
            ViolationKind::CountMismatch,
            Vec::new(),
            format!(
                "{} assigned + {} unassigned != {} students in roster",
                assignments.len(),
                unassigned.len(),
                roster.len()
            ),
        ));
    }

    for v in &violations {
        error!(
            "Seating plan invariant violated ({:?}): {}",
            v.kind, v.message
        );
    }

    violations
}
