//! Structural input errors.
//!
//! These abort an allocation run before any seat is assigned. Capacity
//! shortfalls and invariant breaches are not errors: they are recorded on
//! the [`AllocationReport`](crate::models::AllocationReport).

use thiserror::Error;

/// Errors raised for malformed allocation inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// Room geometry is malformed or a disabled seat lies outside the grid.
    #[error("invalid room '{room_id}': {reason}")]
    InvalidRoom {
        /// Offending room.
        room_id: String,
        /// What is wrong with it.
        reason: String,
    },
    /// Two roster entries share a student ID.
    #[error("duplicate student ID '{student_id}' in roster")]
    DuplicateStudent {
        /// The repeated ID.
        student_id: String,
    },
    /// Two roster entries share a roll number.
    #[error("duplicate roll number '{roll_number}' in roster")]
    DuplicateRollNumber {
        /// The repeated roll number.
        roll_number: String,
    },
    /// Two rooms share an ID.
    #[error("duplicate room ID '{room_id}'")]
    DuplicateRoom {
        /// The repeated ID.
        room_id: String,
    },
    /// Roster is empty and the run is configured to reject that.
    #[error("roster for exam '{exam_id}' is empty")]
    EmptyRoster {
        /// Exam being allocated.
        exam_id: String,
    },
}

impl AllocationError {
    pub(crate) fn invalid_room(room_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRoom {
            room_id: room_id.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias for allocation operations.
pub type AllocationResult<T> = Result<T, AllocationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = AllocationError::invalid_room("R1", "rows must be positive (got 0)");
        assert_eq!(e.to_string(), "invalid room 'R1': rows must be positive (got 0)");

        let e = AllocationError::DuplicateStudent {
            student_id: "S1".into(),
        };
        assert!(e.to_string().contains("'S1'"));
    }
}
