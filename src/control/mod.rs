//! Reusable control primitives.

pub mod hysteresis;
pub mod schedule;
