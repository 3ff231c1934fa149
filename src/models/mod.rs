//! Seating domain models.
//!
//! Input types (`Student`, `Room`) are owned by the caller's roster and
//! room catalogue. Output types (`SeatAssignment`, `AllocationReport`,
//! and friends) are created fresh by each allocation run.
//!
//! # Domain Mappings
//!
//! | exam-seating | Scheduling analogue |
//! |--------------|---------------------|
//! | Student | Task |
//! | Room | Resource |
//! | Seat | Resource unit |
//! | AllocationReport | Schedule |

mod plan;
mod report;
mod room;
mod student;

pub use plan::{SeatAssignment, UnassignedReason, UnassignedStudent};
pub use report::{
    AllocationReport, ConstraintViolation, RoomSummary, SkipReason, SkippedRoom, ViolationKind,
};
pub use room::{Room, SeatPosition};
pub use student::Student;
