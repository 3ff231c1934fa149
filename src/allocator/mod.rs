//! Seat allocation and plan quality metrics.
//!
//! Provides the greedy row-major allocator, its options, a pre-flight
//! capacity check, and department separation metrics.
//!
//! # Algorithm
//!
//! `SeatAllocator` fills rooms in caller order, seats in row-major order,
//! taking students from an interleaved roster. A bounded lookahead swap
//! keeps same-department students out of neighbouring seats where the
//! queue allows. Department separation is a soft constraint; seat
//! exclusivity and capacity are hard ones.
//!
//! # KPI
//!
//! `SeparationKpi` reports how many row-adjacent pairs still share a
//! department.

mod capacity;
mod kpi;
mod options;
mod seat;

pub use capacity::{capacity_check, CapacityCheck};
pub use kpi::SeparationKpi;
pub use options::{AllocationOptions, DEFAULT_ADJACENCY_LOOKAHEAD};
pub use seat::{Allocation, SeatAllocator, SeatingRequest};
