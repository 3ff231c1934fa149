//! Seat assignment records.

use serde::{Deserialize, Serialize};

use super::SeatPosition;

/// One student placed in one seat for one exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    /// Exam this plan belongs to (passed through unchanged).
    pub exam_id: String,
    /// Seated student.
    pub student_id: String,
    /// Student roll number (denormalized for seat lookup).
    pub roll_number: String,
    /// Student department (denormalized for room breakdowns).
    pub department_id: Option<String>,
    /// Room the seat is in.
    pub room_id: String,
    /// Seat row (1-indexed).
    pub row: i32,
    /// Seat column (1-indexed).
    pub column: i32,
    /// Linear seat number shown to the student.
    pub seat_number: i32,
}

impl SeatAssignment {
    /// Seat position of this assignment.
    #[inline]
    pub fn position(&self) -> SeatPosition {
        SeatPosition::new(self.row, self.column)
    }

    /// `(room, row, column)` key used for seat exclusivity checks.
    #[inline]
    pub fn seat_key(&self) -> (&str, i32, i32) {
        (self.room_id.as_str(), self.row, self.column)
    }
}

/// Why a student was left without a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnassignedReason {
    /// Every usable seat in the supplied rooms was already taken.
    NoCapacity,
}

/// A roster entry that could not be seated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnassignedStudent {
    /// Student left without a seat.
    pub student_id: String,
    /// Reason.
    pub reason: UnassignedReason,
}

impl UnassignedStudent {
    /// Creates a `NoCapacity` entry.
    pub fn no_capacity(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            reason: UnassignedReason::NoCapacity,
        }
    }
}
