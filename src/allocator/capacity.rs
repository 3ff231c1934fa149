//! Pre-flight capacity check.
//!
//! Lets a caller see before allocating whether the selected rooms can hold
//! the roster, and how many seats are missing if not.

use serde::{Deserialize, Serialize};

use crate::error::AllocationResult;
use crate::grid::RoomGrid;
use crate::models::{Room, Student};

/// Roster size against usable seats in active rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityCheck {
    /// Students to seat.
    pub students: usize,
    /// Usable seats across active rooms.
    pub available_seats: usize,
    /// Seats missing (0 when capacity suffices).
    pub shortfall: usize,
}

impl CapacityCheck {
    /// Whether every student can be seated.
    #[inline]
    pub fn is_sufficient(&self) -> bool {
        self.shortfall == 0
    }

    /// Seats left over after seating everyone.
    #[inline]
    pub fn spare_seats(&self) -> usize {
        self.available_seats.saturating_sub(self.students)
    }
}

/// Compares roster size with the usable capacity of active rooms.
///
/// Inactive rooms are ignored without validating their geometry.
///
/// # Errors
/// [`AllocationError::InvalidRoom`](crate::AllocationError::InvalidRoom)
/// for a malformed active room.
pub fn capacity_check(students: &[Student], rooms: &[Room]) -> AllocationResult<CapacityCheck> {
    let mut available_seats = 0;
    for room in rooms.iter().filter(|r| r.is_active) {
        available_seats += RoomGrid::new(room)?.capacity();
    }

    Ok(CapacityCheck {
        students: students.len(),
        available_seats,
        shortfall: students.len().saturating_sub(available_seats),
    })
}
