//! Greedy row-major seat allocator.
//!
//! # Algorithm
//!
//! 1. Validate inputs (unique students, unique rooms, room geometry).
//! 2. Skip inactive rooms and rooms without usable seats.
//! 3. For each candidate room in caller order, walk usable seats row-major
//!    and seat the next queued student.
//! 4. Before seating, if the left neighbour (same row, previous column) is
//!    occupied by a student of the same department, look ahead up to
//!    `adjacency_lookahead` queued students for one from a different
//!    department and swap it to the front of the queue.
//! 5. Students still queued after the last seat are unassigned with
//!    `NoCapacity`.
//!
//! # Complexity
//! O(s · k) where s = usable seats visited, k = lookahead window.

use std::collections::HashSet;

use log::{debug, info, warn};

use super::AllocationOptions;
use crate::error::{AllocationError, AllocationResult};
use crate::grid::RoomGrid;
use crate::models::{
    AllocationReport, Room, SeatAssignment, SeatPosition, SkipReason, SkippedRoom, Student,
    UnassignedStudent,
};
use crate::report::build_report;
use crate::roster::{ensure_unique_ids, order_roster};
use crate::validation::validate_input;

/// Input container for one exam's allocation.
#[derive(Debug, Clone)]
pub struct SeatingRequest {
    /// Exam identifier, copied into every assignment.
    pub exam_id: String,
    /// Registered students (any order).
    pub students: Vec<Student>,
    /// Rooms in the order they should be filled.
    pub rooms: Vec<Room>,
    /// Run options.
    pub options: AllocationOptions,
}

impl SeatingRequest {
    /// Creates a request with default options.
    pub fn new(exam_id: impl Into<String>, students: Vec<Student>, rooms: Vec<Room>) -> Self {
        Self {
            exam_id: exam_id.into(),
            students,
            rooms,
            options: AllocationOptions::default(),
        }
    }

    /// Sets the run options.
    pub fn with_options(mut self, options: AllocationOptions) -> Self {
        self.options = options;
        self
    }
}

/// Raw allocator output, before validation and report building.
#[derive(Debug, Clone)]
pub struct Allocation<'a> {
    /// Seat assignments in placement order.
    pub assignments: Vec<SeatAssignment>,
    /// Students left without a seat, in queue order.
    pub unassigned: Vec<UnassignedStudent>,
    /// Rooms that received students (or could have), in fill order.
    pub candidates: Vec<RoomGrid<'a>>,
    /// Rooms excluded from allocation.
    pub skipped_rooms: Vec<SkippedRoom>,
    /// Number of adjacency swaps performed.
    pub swaps: usize,
}

/// Greedy row-major seat allocator.
///
/// # Example
///
/// ```
/// use exam_seating::allocator::SeatAllocator;
/// use exam_seating::models::{Room, Student};
///
/// let students = vec![
///     Student::new("S1", "R-1").with_department("CS"),
///     Student::new("S2", "R-2").with_department("EE"),
///     Student::new("S3", "R-3").with_department("CS"),
/// ];
/// let rooms = vec![Room::new("H1", 1, 2), Room::new("H2", 1, 2)];
///
/// let report = SeatAllocator::new().plan("EXAM-1", &students, &rooms).unwrap();
/// assert_eq!(report.assigned_count, 3);
/// assert!(report.is_valid());
/// assert_eq!(report.assignment_for_roll_number("R-3").unwrap().room_id, "H2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeatAllocator {
    options: AllocationOptions,
}

impl SeatAllocator {
    /// Creates an allocator with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator with the given options.
    pub fn with_options(options: AllocationOptions) -> Self {
        Self { options }
    }

    /// Current options.
    pub fn options(&self) -> &AllocationOptions {
        &self.options
    }

    /// Assigns an already ordered roster to seats.
    ///
    /// Rooms are filled in the order given. Capacity shortfall is not an
    /// error: leftover students come back in [`Allocation::unassigned`].
    ///
    /// # Errors
    /// - [`AllocationError::DuplicateStudent`] for a repeated student ID.
    /// - [`AllocationError::DuplicateRoom`] for a repeated room ID.
    /// - [`AllocationError::InvalidRoom`] for malformed active rooms.
    /// - [`AllocationError::EmptyRoster`] for an empty roster, only when
    ///   `treat_empty_roster_as_error` is set.
    pub fn allocate<'a>(
        &self,
        exam_id: &str,
        ordered: &[&Student],
        rooms: &'a [Room],
    ) -> AllocationResult<Allocation<'a>> {
        ensure_unique_ids(ordered.iter().copied())?;
        if ordered.is_empty() && self.options.treat_empty_roster_as_error {
            return Err(AllocationError::EmptyRoster {
                exam_id: exam_id.to_string(),
            });
        }
        let (candidates, skipped_rooms) = candidate_rooms(rooms)?;

        let mut queue: Vec<&Student> = ordered.to_vec();
        let mut next = 0;
        let mut swaps = 0;
        let mut assignments = Vec::with_capacity(queue.len());

        for grid in &candidates {
            if next == queue.len() {
                break;
            }
            let room = grid.room();
            let mut previous: Option<(SeatPosition, &Student)> = None;
            let mut filled = 0;

            for pos in grid.seats() {
                if next == queue.len() {
                    break;
                }

                let neighbor = previous
                    .filter(|&(prev, _)| grid.left_neighbor(pos) == Some(prev))
                    .map(|(_, s)| s);
                if let Some(neighbor) = neighbor {
                    if queue[next].shares_department_with(neighbor) {
                        if let Some(j) = self.find_swap(&queue, next, neighbor) {
                            debug!(
                                "Room '{}' seat ({}, {}): swapping '{}' for '{}' to separate department {:?}",
                                room.id,
                                pos.row,
                                pos.column,
                                queue[next].id,
                                queue[j].id,
                                neighbor.department()
                            );
                            queue.swap(next, j);
                            swaps += 1;
                        }
                    }
                }

                let student = queue[next];
                next += 1;
                assignments.push(SeatAssignment {
                    exam_id: exam_id.to_string(),
                    student_id: student.id.clone(),
                    roll_number: student.roll_number.clone(),
                    department_id: student.department_id.clone(),
                    room_id: room.id.clone(),
                    row: pos.row,
                    column: pos.column,
                    seat_number: grid.seat_number(pos),
                });
                previous = Some((pos, student));
                filled += 1;
            }

            debug!(
                "Room '{}' filled {}/{} seats",
                room.id,
                filled,
                grid.capacity()
            );
        }

        let unassigned: Vec<UnassignedStudent> = queue[next..]
            .iter()
            .map(|s| UnassignedStudent::no_capacity(&s.id))
            .collect();
        if !unassigned.is_empty() {
            warn!(
                "Exam '{}': {} of {} students could not be seated (no capacity)",
                exam_id,
                unassigned.len(),
                queue.len()
            );
        }

        Ok(Allocation {
            assignments,
            unassigned,
            candidates,
            skipped_rooms,
            swaps,
        })
    }

    /// Full pipeline: validate, order, allocate, check, report.
    ///
    /// # Errors
    /// Structural input errors, see [`allocate`](Self::allocate); also
    /// [`AllocationError::DuplicateRollNumber`].
    pub fn plan(
        &self,
        exam_id: &str,
        students: &[Student],
        rooms: &[Room],
    ) -> AllocationResult<AllocationReport> {
        info!(
            "Allocating exam '{}': {} students, {} rooms",
            exam_id,
            students.len(),
            rooms.len()
        );
        validate_input(students, rooms)?;

        let ordered = order_roster(students, &self.options.roster_strategy())?;
        let allocation = self.allocate(exam_id, &ordered, rooms)?;
        let swaps = allocation.swaps;
        let report = build_report(exam_id, &ordered, allocation);

        info!(
            "Exam '{}' allocated: {} assigned, {} unassigned, {} rooms used, {} adjacency swaps",
            exam_id,
            report.assigned_count,
            report.unassigned_count(),
            report.rooms_used,
            swaps
        );
        Ok(report)
    }

    /// Plans from a request.
    ///
    /// The request carries its own options, which replace this
    /// allocator's options for the run.
    pub fn plan_request(&self, request: &SeatingRequest) -> AllocationResult<AllocationReport> {
        Self::with_options(request.options.clone()).plan(
            &request.exam_id,
            &request.students,
            &request.rooms,
        )
    }

    /// First queued student within the lookahead window whose department
    /// differs from the neighbour's.
    fn find_swap(&self, queue: &[&Student], next: usize, neighbor: &Student) -> Option<usize> {
        let end = queue
            .len()
            .min(next.saturating_add(1).saturating_add(self.options.adjacency_lookahead));
        (next + 1..end).find(|&j| queue[j].department() != neighbor.department())
    }
}

/// Validates rooms and splits them into candidates and skipped rooms.
fn candidate_rooms(rooms: &[Room]) -> AllocationResult<(Vec<RoomGrid<'_>>, Vec<SkippedRoom>)> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    let mut skipped = Vec::new();

    for room in rooms {
        if !seen.insert(room.id.as_str()) {
            return Err(AllocationError::DuplicateRoom {
                room_id: room.id.clone(),
            });
        }
        if !room.is_active {
            warn!("Room '{}' is inactive, skipping", room.id);
            skipped.push(SkippedRoom {
                room_id: room.id.clone(),
                reason: SkipReason::Inactive,
            });
            continue;
        }

        let grid = RoomGrid::new(room)?;
        if grid.capacity() == 0 {
            warn!("Room '{}' has no usable seats, skipping", room.id);
            skipped.push(SkippedRoom {
                room_id: room.id.clone(),
                reason: SkipReason::NoUsableSeats,
            });
            continue;
        }
        candidates.push(grid);
    }

    Ok((candidates, skipped))
}
