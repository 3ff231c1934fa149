//! Room and seat position models.
//!
//! A room is a `rows × columns` grid of benches, some of which may be
//! disabled (broken, reserved for invigilators, blocked by pillars).
//! Disabled seats can be given by position or by linear seat number;
//! both forms name the same set.
//!
//! Geometry is validated by [`RoomGrid`](crate::grid::RoomGrid), not here:
//! rooms arrive from an external catalogue and may be malformed.

use serde::{Deserialize, Serialize};

/// A seat position inside a room grid (1-indexed).
///
/// Ordering is row-major: `(1,1) < (1,2) < … < (2,1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatPosition {
    /// Row, starting at 1 (front of the room).
    pub row: i32,
    /// Column, starting at 1.
    pub column: i32,
}

impl SeatPosition {
    /// Creates a seat position.
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Linear seat number: `(row - 1) * columns + column`.
    #[inline]
    pub fn seat_number(&self, columns: i32) -> i32 {
        (self.row - 1) * columns + self.column
    }

    /// Inverse of [`seat_number`](Self::seat_number).
    ///
    /// Returns `None` for non-positive inputs.
    pub fn from_seat_number(seat_number: i32, columns: i32) -> Option<Self> {
        if seat_number < 1 || columns < 1 {
            return None;
        }
        let zero_based = seat_number - 1;
        Some(Self::new(zero_based / columns + 1, zero_based % columns + 1))
    }

    /// The seat immediately to the left in the same row, if any.
    pub fn left(&self) -> Option<Self> {
        (self.column > 1).then(|| Self::new(self.row, self.column - 1))
    }
}

/// An exam room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Display name (e.g., "Hall A-101").
    #[serde(default)]
    pub name: String,
    /// Number of bench rows.
    pub rows: i32,
    /// Number of benches per row.
    pub columns: i32,
    /// Disabled seats by position.
    #[serde(default)]
    pub disabled_seats: Vec<SeatPosition>,
    /// Disabled seats by linear seat number.
    #[serde(default)]
    pub disabled_indices: Vec<i32>,
    /// Inactive rooms are never allocated.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Room {
    /// Creates an active room with no disabled seats.
    pub fn new(id: impl Into<String>, rows: i32, columns: i32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            rows,
            columns,
            disabled_seats: Vec::new(),
            disabled_indices: Vec::new(),
            is_active: true,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Disables the seat at `(row, column)`.
    pub fn with_disabled_seat(mut self, row: i32, column: i32) -> Self {
        self.disabled_seats.push(SeatPosition::new(row, column));
        self
    }

    /// Disables the seat with the given linear seat number.
    pub fn with_disabled_index(mut self, seat_number: i32) -> Self {
        self.disabled_indices.push(seat_number);
        self
    }

    /// Sets the active flag.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Raw grid size `rows * columns`, ignoring disabled seats.
    ///
    /// Zero when either dimension is non-positive.
    pub fn grid_size(&self) -> usize {
        if self.rows <= 0 || self.columns <= 0 {
            return 0;
        }
        self.rows as usize * self.columns as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_number() {
        assert_eq!(SeatPosition::new(1, 1).seat_number(5), 1);
        assert_eq!(SeatPosition::new(1, 5).seat_number(5), 5);
        assert_eq!(SeatPosition::new(3, 2).seat_number(5), 12);
    }

    #[test]
    fn test_from_seat_number() {
        assert_eq!(
            SeatPosition::from_seat_number(12, 5),
            Some(SeatPosition::new(3, 2))
        );
        assert_eq!(
            SeatPosition::from_seat_number(5, 5),
            Some(SeatPosition::new(1, 5))
        );
        assert_eq!(SeatPosition::from_seat_number(0, 5), None);
        assert_eq!(SeatPosition::from_seat_number(3, 0), None);
    }

    #[test]
    fn test_row_major_ordering() {
        let mut seats = vec![
            SeatPosition::new(2, 1),
            SeatPosition::new(1, 2),
            SeatPosition::new(1, 1),
        ];
        seats.sort();
        assert_eq!(
            seats,
            vec![
                SeatPosition::new(1, 1),
                SeatPosition::new(1, 2),
                SeatPosition::new(2, 1)
            ]
        );
    }

    #[test]
    fn test_left_neighbor() {
        assert_eq!(SeatPosition::new(2, 3).left(), Some(SeatPosition::new(2, 2)));
        assert_eq!(SeatPosition::new(2, 1).left(), None);
    }

    #[test]
    fn test_room_builder() {
        let r = Room::new("R1", 5, 5)
            .with_name("Hall A-101")
            .with_disabled_seat(1, 1)
            .with_disabled_index(25)
            .with_active(false);

        assert_eq!(r.name, "Hall A-101");
        assert_eq!(r.disabled_seats, vec![SeatPosition::new(1, 1)]);
        assert_eq!(r.disabled_indices, vec![25]);
        assert!(!r.is_active);
        assert_eq!(r.grid_size(), 25);
    }

    #[test]
    fn test_grid_size_non_positive() {
        assert_eq!(Room::new("R", 0, 4).grid_size(), 0);
        assert_eq!(Room::new("R", 3, -1).grid_size(), 0);
    }

    #[test]
    fn test_room_deserialize_defaults() {
        let r: Room = serde_json::from_str(r#"{"id":"R1","rows":2,"columns":3}"#).unwrap();
        assert!(r.is_active);
        assert!(r.disabled_seats.is_empty());
        assert!(r.disabled_indices.is_empty());
    }
}
