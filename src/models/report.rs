//! Allocation report model.
//!
//! The report is the complete output of one allocation run: every seat
//! assignment, every student left unseated, per-room summaries, and any
//! invariant breaches the validator found. A report with violations is
//! still returned so it can be inspected, but it indicates an engine
//! defect and should not be published.

use serde::{Deserialize, Serialize};

use super::{SeatAssignment, UnassignedStudent};

/// Result of an allocation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    /// Exam identifier (passed through unchanged).
    pub exam_id: String,
    /// Roster size.
    pub total_students: usize,
    /// Number of students seated.
    pub assigned_count: usize,
    /// Usable seats across all candidate rooms.
    pub total_capacity: usize,
    /// Candidate rooms with at least one student seated.
    pub rooms_used: usize,
    /// Seat assignments in placement order.
    pub assignments: Vec<SeatAssignment>,
    /// Students without a seat, in roster order.
    pub unassigned: Vec<UnassignedStudent>,
    /// One summary per candidate room, in allocation order.
    pub room_summaries: Vec<RoomSummary>,
    /// Rooms that were not candidates for allocation.
    pub skipped_rooms: Vec<SkippedRoom>,
    /// Hard invariant breaches. Empty for a correct run.
    pub violations: Vec<ConstraintViolation>,
}

/// Per-room allocation summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    /// Room identifier.
    pub room_id: String,
    /// Room display name.
    pub room_name: String,
    /// Seats occupied.
    pub seats_filled: usize,
    /// Usable seats.
    pub seats_total: usize,
    /// Distinct departments seated in the room, sorted.
    pub departments: Vec<String>,
    /// Seated students with no department on record.
    pub students_without_department: usize,
}

impl RoomSummary {
    /// Usable seats left empty.
    pub fn seats_empty(&self) -> usize {
        self.seats_total.saturating_sub(self.seats_filled)
    }
}

/// A room excluded from allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRoom {
    /// Room identifier.
    pub room_id: String,
    /// Why it was excluded.
    pub reason: SkipReason,
}

/// Why a room was not a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The room is marked inactive.
    Inactive,
    /// Every seat in the room is disabled.
    NoUsableSeats,
}

/// A detected breach of a hard plan invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintViolation {
    /// Type of breach.
    pub kind: ViolationKind,
    /// Offending IDs (students, rooms, or seat keys).
    pub entity_ids: Vec<String>,
    /// Human-readable description.
    pub message: String,
}

/// Classification of plan invariant breaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Two assignments occupy the same `(room, row, column)`.
    DuplicateSeat,
    /// A student holds more than one seat.
    DuplicateStudent,
    /// An assigned student is not in the roster.
    UnknownStudent,
    /// An assignment names an unknown room, a disabled or out-of-grid seat,
    /// or a seat number that does not match its position.
    InvalidSeat,
    /// Assigned + unassigned does not equal the roster size.
    CountMismatch,
}

impl ConstraintViolation {
    /// Creates a violation.
    pub fn new(kind: ViolationKind, entity_ids: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            entity_ids,
            message: message.into(),
        }
    }

    /// Creates a duplicate seat violation.
    pub fn duplicate_seat(room_id: &str, row: i32, column: i32, students: Vec<String>) -> Self {
        Self::new(
            ViolationKind::DuplicateSeat,
            students,
            format!("Seat ({row}, {column}) in room '{room_id}' assigned more than once"),
        )
    }

    /// Creates a duplicate student violation.
    pub fn duplicate_student(student_id: &str) -> Self {
        Self::new(
            ViolationKind::DuplicateStudent,
            vec![student_id.to_string()],
            format!("Student '{student_id}' assigned more than one seat"),
        )
    }

    /// Creates an unknown student violation.
    pub fn unknown_student(student_id: &str) -> Self {
        Self::new(
            ViolationKind::UnknownStudent,
            vec![student_id.to_string()],
            format!("Assigned student '{student_id}' is not in the roster"),
        )
    }
}

impl AllocationReport {
    /// Number of students without a seat.
    #[inline]
    pub fn unassigned_count(&self) -> usize {
        self.unassigned.len()
    }

    /// Whether the validator found no invariant breaches.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether every roster entry got a seat.
    pub fn all_seated(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// Finds the assignment for a student ID.
    pub fn assignment_for_student(&self, student_id: &str) -> Option<&SeatAssignment> {
        self.assignments
            .iter()
            .find(|a| a.student_id == student_id)
    }

    /// Finds the assignment for a roll number.
    pub fn assignment_for_roll_number(&self, roll_number: &str) -> Option<&SeatAssignment> {
        self.assignments
            .iter()
            .find(|a| a.roll_number == roll_number)
    }

    /// Returns all assignments in a room, in placement order.
    pub fn assignments_for_room(&self, room_id: &str) -> Vec<&SeatAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.room_id == room_id)
            .collect()
    }

    /// Summary for a room, if it was a candidate.
    pub fn room_summary(&self, room_id: &str) -> Option<&RoomSummary> {
        self.room_summaries.iter().find(|s| s.room_id == room_id)
    }
}
