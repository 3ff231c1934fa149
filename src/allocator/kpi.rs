//! Department separation metrics.
//!
//! Measures how well a plan keeps departments apart, counting only the
//! pairs the allocator tries to separate: occupied seats side by side in
//! the same row.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Adjacent pairs | Occupied `(r, c-1)`–`(r, c)` seat pairs |
//! | Same-department pairs | Adjacent pairs sharing a non-null department |
//! | Separation rate | 1 - same / adjacent (1.0 when no pairs) |
//! | Mixed rooms | Used rooms seating more than one department |

use std::collections::HashMap;

use crate::models::AllocationReport;

/// Department separation indicators for a plan.
#[derive(Debug, Clone)]
pub struct SeparationKpi {
    /// Row-adjacent occupied seat pairs.
    pub adjacent_pairs: usize,
    /// Adjacent pairs whose students share a department.
    pub same_department_pairs: usize,
    /// Fraction of adjacent pairs with different departments (0.0..1.0).
    pub separation_rate: f64,
    /// Same-department pairs per room.
    pub same_department_by_room: HashMap<String, usize>,
    /// Used rooms holding two or more departments.
    pub mixed_rooms: usize,
}

impl SeparationKpi {
    /// Computes separation metrics from a report.
    pub fn calculate(report: &AllocationReport) -> Self {
        let occupant: HashMap<(&str, i32, i32), Option<&str>> = report
            .assignments
            .iter()
            .map(|a| (a.seat_key(), a.department_id.as_deref()))
            .collect();

        let mut adjacent_pairs = 0;
        let mut same_department_pairs = 0;
        let mut same_department_by_room: HashMap<String, usize> = HashMap::new();

        for a in &report.assignments {
            let Some(&left) = occupant.get(&(a.room_id.as_str(), a.row, a.column - 1)) else {
                continue;
            };
            adjacent_pairs += 1;
            if let (Some(l), Some(r)) = (left, a.department_id.as_deref()) {
                if l == r {
                    same_department_pairs += 1;
                    *same_department_by_room
                        .entry(a.room_id.clone())
                        .or_insert(0) += 1;
                }
            }
        }

        let separation_rate = if adjacent_pairs == 0 {
            1.0
        } else {
            1.0 - same_department_pairs as f64 / adjacent_pairs as f64
        };

        let mixed_rooms = report
            .room_summaries
            .iter()
            .filter(|s| s.departments.len() > 1)
            .count();

        Self {
            adjacent_pairs,
            same_department_pairs,
            separation_rate,
            same_department_by_room,
            mixed_rooms,
        }
    }

    /// Whether the plan separates at least `min_rate` of adjacent pairs.
    pub fn meets_threshold(&self, min_rate: f64) -> bool {
        self.separation_rate >= min_rate
    }
}
