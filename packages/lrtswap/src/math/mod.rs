pub mod fixed_point;
pub mod safe_math;
