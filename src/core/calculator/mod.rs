//! Pure overtime arithmetic: no database, no I/O.

pub mod overtime;

pub use overtime::{
    OvertimeValue, compute_overtime, format_total, normalize_end, split_total,
    sum_overtime_minutes, worked_minutes,
};
