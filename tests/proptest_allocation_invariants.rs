//! Property-based invariant tests for the seating allocator.
//!
//! These tests verify invariants that must hold for any valid roster and
//! room set:
//!
//! 1. Conservation: assigned + unassigned = roster size.
//! 2. Seat exclusivity: no `(room, row, column)` is used twice.
//! 3. Student exclusivity: no student holds two seats.
//! 4. Assigned count is `min(students, capacity)`.
//! 5. Seats are usable and seat numbers match positions.
//! 6. Determinism: a fixed seed yields byte-identical reports.
//! 7. Capacity boundary: N students, N seats ⇒ every seat filled.
//! 8. Shortfall: N students, N-1 seats ⇒ exactly one `NoCapacity`.
//! 9. Roster ordering is a permutation of the input.

use std::collections::HashSet;

use exam_seating::allocator::{capacity_check, AllocationOptions, SeatAllocator};
use exam_seating::grid::RoomGrid;
use exam_seating::models::{Room, Student, UnassignedReason};
use exam_seating::roster::{order_roster, RosterStrategy};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn make_students(departments: &[Option<u8>]) -> Vec<Student> {
    departments
        .iter()
        .enumerate()
        .map(|(i, dept)| {
            let s = Student::new(format!("S{i:03}"), format!("R{i:03}"));
            match dept {
                Some(d) => s.with_department(format!("D{d}")),
                None => s,
            }
        })
        .collect()
}

fn roster_strategy() -> impl Strategy<Value = Vec<Student>> {
    prop::collection::vec(prop::option::weighted(0.9, 0u8..4), 0..60)
        .prop_map(|depts| make_students(&depts))
}

fn room_strategy() -> impl Strategy<Value = Room> {
    (1i32..=6, 1i32..=6)
        .prop_flat_map(|(rows, columns)| {
            (
                Just(rows),
                Just(columns),
                prop::collection::vec(1..=rows * columns, 0..5),
                prop::bool::weighted(0.85),
            )
        })
        .prop_map(|(rows, columns, disabled, active)| {
            disabled
                .into_iter()
                .fold(Room::new("", rows, columns), |room, idx| {
                    room.with_disabled_index(idx)
                })
                .with_active(active)
        })
}

fn rooms_strategy() -> impl Strategy<Value = Vec<Room>> {
    prop::collection::vec(room_strategy(), 0..4).prop_map(|rooms| {
        rooms
            .into_iter()
            .enumerate()
            .map(|(i, mut room)| {
                room.id = format!("H{i}");
                room
            })
            .collect()
    })
}

fn options_strategy() -> impl Strategy<Value = AllocationOptions> {
    (any::<bool>(), any::<bool>(), any::<u64>(), 0usize..8).prop_map(
        |(interleave, randomize, seed, lookahead)| {
            let mut opts = AllocationOptions::new()
                .with_interleave(interleave)
                .with_lookahead(lookahead);
            if randomize {
                opts = opts.with_randomization(Some(seed));
            }
            opts
        },
    )
}

fn total_capacity(rooms: &[Room]) -> usize {
    capacity_check(&[], rooms).unwrap().available_seats
}

// ═════════════════════════════════════════════════════════════════════════
// 1-5. Structural invariants
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn plan_invariants_hold(
        students in roster_strategy(),
        rooms in rooms_strategy(),
        opts in options_strategy(),
    ) {
        let report = SeatAllocator::with_options(opts).plan("E", &students, &rooms).unwrap();
        let capacity = total_capacity(&rooms);

        prop_assert!(report.is_valid(), "violations: {:?}", report.violations);
        prop_assert_eq!(report.assigned_count + report.unassigned_count(), students.len());
        prop_assert_eq!(report.assigned_count, students.len().min(capacity));
        prop_assert_eq!(report.total_capacity, capacity);

        let mut seats = HashSet::new();
        let mut seated = HashSet::new();
        for a in &report.assignments {
            prop_assert!(seats.insert(a.seat_key()), "seat reused: {:?}", a.seat_key());
            prop_assert!(seated.insert(a.student_id.as_str()), "student reseated: {}", a.student_id);
            prop_assert_eq!(a.exam_id.as_str(), "E");

            let room = rooms.iter().find(|r| r.id == a.room_id).unwrap();
            prop_assert!(room.is_active);
            let grid = RoomGrid::new(room).unwrap();
            prop_assert!(grid.is_usable(a.position()));
            prop_assert_eq!(grid.seat_number(a.position()), a.seat_number);
        }

        for u in &report.unassigned {
            prop_assert_eq!(u.reason, UnassignedReason::NoCapacity);
            prop_assert!(!seated.contains(u.student_id.as_str()));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Determinism under a fixed seed
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn seeded_runs_are_identical(
        students in roster_strategy(),
        rooms in rooms_strategy(),
        seed in any::<u64>(),
    ) {
        let allocator = SeatAllocator::with_options(AllocationOptions::new().with_randomization(Some(seed)));
        let first = allocator.plan("E", &students, &rooms).unwrap();
        let second = allocator.plan("E", &students, &rooms).unwrap();

        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7-8. Capacity boundary and shortfall
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn exact_capacity_fills_every_seat(rooms in rooms_strategy(), depts in prop::collection::vec(0u8..3, 0..200)) {
        let capacity = total_capacity(&rooms);
        let departments: Vec<Option<u8>> = (0..capacity).map(|i| depts.get(i).copied()).collect();
        let students = make_students(&departments);

        let report = SeatAllocator::new().plan("E", &students, &rooms).unwrap();
        prop_assert!(report.all_seated());
        prop_assert_eq!(report.assigned_count, capacity);
        for summary in &report.room_summaries {
            prop_assert_eq!(summary.seats_filled, summary.seats_total);
        }
    }
}

proptest! {
    #[test]
    fn one_seat_short_leaves_one_unassigned(rooms in rooms_strategy()) {
        let capacity = total_capacity(&rooms);
        let departments = vec![None; capacity + 1];
        let students = make_students(&departments);

        let report = SeatAllocator::new().plan("E", &students, &rooms).unwrap();
        prop_assert!(report.is_valid());
        prop_assert_eq!(report.unassigned.len(), 1);
        prop_assert_eq!(report.unassigned[0].reason, UnassignedReason::NoCapacity);
        prop_assert_eq!(report.assigned_count, capacity);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Roster ordering is a permutation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn roster_order_is_permutation(
        students in roster_strategy(),
        interleave in any::<bool>(),
        seed in prop::option::of(any::<u64>()),
    ) {
        let mut strategy = RosterStrategy::default().with_interleave(interleave);
        if seed.is_some() {
            strategy = strategy.with_randomization(seed);
        }
        let ordered = order_roster(&students, &strategy).unwrap();

        let mut got: Vec<&str> = ordered.iter().map(|s| s.id.as_str()).collect();
        let mut expected: Vec<&str> = students.iter().map(|s| s.id.as_str()).collect();
        got.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(got, expected);
    }
}
