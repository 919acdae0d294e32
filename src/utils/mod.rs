//! Matrix utilities shared across the crate.

pub use self::normal_matrix::normal_matrix;

mod normal_matrix;
