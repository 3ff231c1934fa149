//! Room grid model.
//!
//! Validates a room's geometry once and exposes its usable seats in a
//! stable row-major order:
//!
//! ```text
//! (1,1) (1,2) … (1,C)
//! (2,1) (2,2) … (2,C)
//! …
//! ```
//!
//! Disabled seats may be listed by position or by linear seat number, and
//! the same seat may appear in both lists; it counts once.
//!
//! # Example
//!
//! ```
//! use exam_seating::grid::{capacity, usable_seats};
//! use exam_seating::models::{Room, SeatPosition};
//!
//! let room = Room::new("H1", 2, 2).with_disabled_seat(1, 1);
//! assert_eq!(
//!     usable_seats(&room).unwrap(),
//!     vec![SeatPosition::new(1, 2), SeatPosition::new(2, 1), SeatPosition::new(2, 2)]
//! );
//! assert_eq!(capacity(&room).unwrap(), 3);
//! ```

use std::collections::BTreeSet;

use crate::error::{AllocationError, AllocationResult};
use crate::models::{Room, SeatPosition};

/// A validated view over one room's seat grid.
#[derive(Debug, Clone)]
pub struct RoomGrid<'a> {
    room: &'a Room,
    disabled: BTreeSet<SeatPosition>,
}

impl<'a> RoomGrid<'a> {
    /// Validates the room and builds its grid.
    ///
    /// # Errors
    /// [`AllocationError::InvalidRoom`] if `rows` or `columns` is not
    /// positive, the grid has more seats than an `i32` seat number can
    /// address, or a disabled seat lies outside the grid.
    pub fn new(room: &'a Room) -> AllocationResult<Self> {
        if room.rows <= 0 {
            return Err(AllocationError::invalid_room(
                &room.id,
                format!("rows must be positive (got {})", room.rows),
            ));
        }
        if room.columns <= 0 {
            return Err(AllocationError::invalid_room(
                &room.id,
                format!("columns must be positive (got {})", room.columns),
            ));
        }
        if i64::from(room.rows) * i64::from(room.columns) > i64::from(i32::MAX) {
            return Err(AllocationError::invalid_room(
                &room.id,
                format!(
                    "{}x{} grid exceeds {} seats",
                    room.rows,
                    room.columns,
                    i32::MAX
                ),
            ));
        }

        let mut disabled = BTreeSet::new();
        for &pos in &room.disabled_seats {
            if !in_bounds(room, pos) {
                return Err(AllocationError::invalid_room(
                    &room.id,
                    format!(
                        "disabled seat ({}, {}) outside {}x{} grid",
                        pos.row, pos.column, room.rows, room.columns
                    ),
                ));
            }
            disabled.insert(pos);
        }
        for &index in &room.disabled_indices {
            let pos = SeatPosition::from_seat_number(index, room.columns)
                .filter(|&p| in_bounds(room, p))
                .ok_or_else(|| {
                    AllocationError::invalid_room(
                        &room.id,
                        format!(
                            "disabled seat number {index} outside 1..={}",
                            room.grid_size()
                        ),
                    )
                })?;
            disabled.insert(pos);
        }

        Ok(Self { room, disabled })
    }

    /// The underlying room.
    #[inline]
    pub fn room(&self) -> &'a Room {
        self.room
    }

    /// Lazily walks usable seats in row-major order.
    pub fn seats(&self) -> impl Iterator<Item = SeatPosition> + '_ {
        let columns = self.room.columns;
        (1..=self.room.rows)
            .flat_map(move |row| (1..=columns).map(move |column| SeatPosition::new(row, column)))
            .filter(|pos| !self.disabled.contains(pos))
    }

    /// Usable seats in row-major order.
    pub fn usable_seats(&self) -> Vec<SeatPosition> {
        self.seats().collect()
    }

    /// Number of usable seats.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.room.grid_size() - self.disabled.len()
    }

    /// Number of distinct disabled seats.
    #[inline]
    pub fn disabled_count(&self) -> usize {
        self.disabled.len()
    }

    /// Whether the position lies inside the grid.
    #[inline]
    pub fn contains(&self, pos: SeatPosition) -> bool {
        in_bounds(self.room, pos)
    }

    /// Whether the position is inside the grid and not disabled.
    pub fn is_usable(&self, pos: SeatPosition) -> bool {
        self.contains(pos) && !self.disabled.contains(&pos)
    }

    /// Linear seat number of a position in this room.
    #[inline]
    pub fn seat_number(&self, pos: SeatPosition) -> i32 {
        pos.seat_number(self.room.columns)
    }

    /// The usable seat immediately to the left, if any.
    pub fn left_neighbor(&self, pos: SeatPosition) -> Option<SeatPosition> {
        pos.left().filter(|&p| self.is_usable(p))
    }

    /// Whether the room can receive students (active with usable seats).
    pub fn is_candidate(&self) -> bool {
        self.room.is_active && self.capacity() > 0
    }
}

fn in_bounds(room: &Room, pos: SeatPosition) -> bool {
    (1..=room.rows).contains(&pos.row) && (1..=room.columns).contains(&pos.column)
}

/// Usable seats of a room in row-major order.
///
/// # Errors
/// [`AllocationError::InvalidRoom`] for malformed geometry.
pub fn usable_seats(room: &Room) -> AllocationResult<Vec<SeatPosition>> {
    Ok(RoomGrid::new(room)?.usable_seats())
}

/// Number of usable seats: `rows * columns - |disabled|`.
///
/// # Errors
/// [`AllocationError::InvalidRoom`] for malformed geometry.
pub fn capacity(room: &Room) -> AllocationResult<usize> {
    Ok(RoomGrid::new(room)?.capacity())
}
