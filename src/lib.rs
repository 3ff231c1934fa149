//! Exam seating allocation engine.
//!
//! Takes the students registered for an exam and a list of rooms (each a
//! row/column grid with some seats disabled) and produces a deterministic
//! seating plan: one student per seat, one seat per student, with
//! same-department students kept apart where the roster allows.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Student`, `Room`, `SeatPosition`,
//!   `SeatAssignment`, `AllocationReport`, `ConstraintViolation`
//! - **`grid`**: Room grid model (usable seats, capacity)
//! - **`roster`**: Department grouping and round-robin roster ordering
//! - **`allocator`**: Row-major seat allocator, options, capacity check,
//!   separation KPI
//! - **`validation`**: Input checks and plan invariant checks
//! - **`report`**: Report builder
//!
//! # Pipeline
//!
//! ```text
//! students ──► roster::order_roster ──► SeatAllocator::allocate ──► report::build_report
//!                                            ▲                           │
//! rooms ──► grid::RoomGrid ──────────────────┘           validation::validate_plan
//! ```
//!
//! The engine is pure and synchronous: no I/O, no global state. Inputs are
//! borrowed immutably, so independent runs may proceed in parallel.
//!
//! # Example
//!
//! ```
//! use exam_seating::allocator::{AllocationOptions, SeatAllocator};
//! use exam_seating::models::{Room, Student};
//!
//! let students = vec![
//!     Student::new("S1", "CS-01").with_department("CS"),
//!     Student::new("S2", "CS-02").with_department("CS"),
//!     Student::new("S3", "EE-01").with_department("EE"),
//!     Student::new("S4", "EE-02").with_department("EE"),
//! ];
//! let rooms = vec![Room::new("H1", 2, 2)];
//!
//! let allocator = SeatAllocator::with_options(AllocationOptions::new().with_randomization(Some(1)));
//! let report = allocator.plan("MATH-FINAL", &students, &rooms).unwrap();
//!
//! assert_eq!(report.assigned_count, 4);
//! assert!(report.all_seated());
//! assert!(report.is_valid());
//! ```

pub mod allocator;
pub mod error;
pub mod grid;
pub mod models;
pub mod report;
pub mod roster;
pub mod validation;

pub use error::{AllocationError, AllocationResult};
