//! Shared numeric helpers

pub mod vector_math;
