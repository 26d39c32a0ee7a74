//! Business logic layer.

pub mod mirror;
